//! Currency formatting with 2 decimal places.
//!
//! Amounts are converted to `rust_decimal` before rounding so that the
//! half-away-from-zero rule applies to the value as written (`2.675` rounds
//! to `2.68`) rather than to its binary approximation.

use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::str::FromStr;

/// Currency code used when the caller does not name one.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Returned in place of a formatted amount when the input is not numeric.
pub const INVALID_AMOUNT: &str = "Invalid amount";

/// An amount paired with its currency code, already fixed to 2 places.
///
/// # Examples
///
/// ```
/// use fixture_kit::CurrencyAmount;
///
/// let price = CurrencyAmount::new(99.99, "USD").unwrap();
/// assert_eq!(price.to_string(), "USD 99.99");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyAmount {
    amount: Decimal,
    currency: String,
}

impl CurrencyAmount {
    /// The number of decimal places rendered.
    pub const SCALE: u32 = 2;

    /// Builds an amount from an `f64`.
    ///
    /// Returns `None` for `NaN`, infinities and magnitudes the decimal type
    /// cannot hold; [`format_currency`] still renders the latter.
    pub fn new(amount: f64, currency: impl Into<String>) -> Option<Self> {
        let decimal = decimal_from_f64(amount)?;
        Some(Self::from_decimal(decimal, currency))
    }

    /// Builds an amount from an exact decimal, rounding half away from zero.
    pub fn from_decimal(amount: Decimal, currency: impl Into<String>) -> Self {
        let mut fixed =
            amount.round_dp_with_strategy(Self::SCALE, RoundingStrategy::MidpointAwayFromZero);
        if fixed.is_zero() {
            // drop the sign of amounts like -0.001
            fixed = Decimal::ZERO;
        }
        fixed.rescale(Self::SCALE);
        CurrencyAmount {
            amount: fixed,
            currency: currency.into(),
        }
    }

    /// The rounded amount.
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// The currency code, as given.
    pub fn currency(&self) -> &str {
        &self.currency
    }
}

impl fmt::Display for CurrencyAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.2}", self.currency, self.amount)
    }
}

/// Formats `amount` as `"<currency> <amount to 2 dp>"`.
///
/// Non-numeric amounts (`NaN`, infinities) yield [`INVALID_AMOUNT`]
/// instead of an error. Finite amounts too large for the decimal type are
/// integral already and are written out digit by digit.
pub fn format_currency(amount: f64, currency: &str) -> String {
    if !amount.is_finite() {
        return INVALID_AMOUNT.to_string();
    }

    match CurrencyAmount::new(amount, currency) {
        Some(value) => value.to_string(),
        None => format!("{} {}.00", currency, amount),
    }
}

/// [`format_currency`] in [`DEFAULT_CURRENCY`].
pub fn format_default(amount: f64) -> String {
    format_currency(amount, DEFAULT_CURRENCY)
}

/// Formats an amount that arrives as text.
///
/// Anything that does not parse as a finite number yields
/// [`INVALID_AMOUNT`]. Digit separators such as `1_000` are not numbers.
pub fn format_currency_str(raw: &str, currency: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.contains('_') {
        return INVALID_AMOUNT.to_string();
    }
    if let Ok(decimal) = Decimal::from_str(trimmed) {
        return CurrencyAmount::from_decimal(decimal, currency).to_string();
    }

    match trimmed.parse::<f64>() {
        Ok(amount) => format_currency(amount, currency),
        Err(_) => INVALID_AMOUNT.to_string(),
    }
}

/// Converts through the shortest decimal text of the float.
fn decimal_from_f64(amount: f64) -> Option<Decimal> {
    if !amount.is_finite() {
        return None;
    }
    // Below this the value rounds to zero anyway; skip the long digit string.
    if amount.abs() < 0.001 {
        return Some(Decimal::ZERO);
    }
    Decimal::from_str(&amount.to_string()).ok()
}
