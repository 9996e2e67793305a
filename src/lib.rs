//! # Fixture Kit
//!
//! Typed data-shaping helpers: a user factory and projection, a fluent
//! calculator, currency formatting and a parity filter. A CSV roster
//! pipeline composes them the way a presentation layer would.
//!
//! ## Design Principles
//!
//! - **Immutable users**: no setters; `is_active` is fixed at construction
//! - **Two failure styles**: `Calculator::divide` returns an error, the
//!   formatter returns the `"Invalid amount"` sentinel
//! - **Partial-data tolerance**: missing users are skipped, never a fault
//! - **Exact rounding**: currency amounts go through `rust_decimal`
//!
//! ## Example
//!
//! ```
//! use fixture_kit::{create_user, format_currency, process_users, Calculator};
//!
//! let users = vec![create_user(1, "Alice", Some("alice@example.com")), create_user(2, "Bob", None)];
//! assert_eq!(process_users(&users), vec!["ALICE", "BOB"]);
//!
//! let mut calc = Calculator::new(Some(10.0));
//! calc.add(5.0).multiply(2.0);
//! assert_eq!(calc.value(), 30.0);
//!
//! assert_eq!(format_currency(99.99, "USD"), "USD 99.99");
//! ```

pub mod calculator;
pub mod catalog;
pub mod currency;
pub mod error;
pub mod label;
pub mod numbers;
pub mod record;
pub mod roster;
pub mod user;

pub use calculator::Calculator;
pub use catalog::{
    ApiResponse, CustomerInfo, Order, ParseCatalogError, Product, Status, UserRole,
};
pub use currency::{
    format_currency, format_currency_str, format_default, CurrencyAmount, DEFAULT_CURRENCY,
    INVALID_AMOUNT,
};
pub use error::{FixtureError, Result};
pub use label::{mark_processed, normalize_label, version};
pub use numbers::filter_even_numbers;
pub use record::UserRecord;
pub use roster::Roster;
pub use user::{active_user, calculate_age, create_user, process_users, User};
