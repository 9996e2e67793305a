//! Fluent accumulator over a single numeric register.

use crate::error::{FixtureError, Result};

/// A chainable calculator holding one `f64` register.
///
/// Every mutating method returns `&mut Self` so calls can be chained.
/// `divide` is the only operation that can fail, and it leaves the
/// register untouched when it does.
///
/// There is no internal synchronization; mutation requires `&mut self`.
///
/// # Examples
///
/// ```
/// use fixture_kit::Calculator;
///
/// let mut calc = Calculator::new(Some(10.0));
/// calc.add(5.0).multiply(2.0);
/// assert_eq!(calc.value(), 30.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Calculator {
    value: f64,
}

impl Calculator {
    /// Creates a calculator starting at `initial`.
    ///
    /// An absent or falsy initial value (`0.0`, `-0.0`, `NaN`) starts the
    /// register at `0.0`. `Calculator::new(Some(0.0))` and
    /// `Calculator::new(None)` are therefore indistinguishable.
    pub fn new(initial: Option<f64>) -> Self {
        let value = match initial {
            Some(v) if v != 0.0 && !v.is_nan() => v,
            _ => 0.0,
        };
        Calculator { value }
    }

    /// Adds `n` to the register.
    pub fn add(&mut self, n: f64) -> &mut Self {
        self.value += n;
        self
    }

    /// Multiplies the register by `n`.
    pub fn multiply(&mut self, n: f64) -> &mut Self {
        self.value *= n;
        self
    }

    /// Divides the register by `n`.
    ///
    /// Returns [`FixtureError::DivisionByZero`] when `n` is zero (either
    /// sign); the register is left as it was.
    pub fn divide(&mut self, n: f64) -> Result<&mut Self> {
        if n == 0.0 {
            return Err(FixtureError::DivisionByZero);
        }

        self.value /= n;
        Ok(self)
    }

    /// Current register value.
    pub fn value(&self) -> f64 {
        self.value
    }
}
