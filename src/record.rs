//! Raw user rows as read from CSV.

use crate::user::{create_user, User};
use serde::Deserialize;

/// Raw user record as read from CSV.
///
/// Every column but `id` and `name` may be missing or empty.
#[derive(Debug, Deserialize)]
pub struct UserRecord {
    pub id: i64,

    pub name: String,

    #[serde(default)]
    pub email: Option<String>,

    /// `true` marks the user active; anything else but an empty cell marks
    /// it inactive.
    #[serde(default)]
    pub active: Option<String>,

    /// Price shown next to the user, kept as text until formatted.
    #[serde(default)]
    pub price: Option<String>,
}

impl UserRecord {
    /// Turns the row into a `User`.
    ///
    /// Returns `None` when the name is blank.
    pub fn parse(&self) -> Option<User> {
        let name = self.name.trim();
        if name.is_empty() {
            return None;
        }

        let email = self.email.as_deref().map(str::trim);
        match self.active.as_deref().map(str::trim) {
            None | Some("") => Some(create_user(self.id, name, email)),
            Some(flag) => Some(User::from_parts(self.id, name, email, flag == "true")),
        }
    }

    /// The raw price cell, or `None` when it is blank.
    pub fn price(&self) -> Option<&str> {
        self.price.as_deref().map(str::trim).filter(|p| !p.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, email: Option<&str>, active: Option<&str>) -> UserRecord {
        UserRecord {
            id: 1,
            name: name.to_string(),
            email: email.map(str::to_string),
            active: active.map(str::to_string),
            price: None,
        }
    }

    #[test]
    fn test_parse_defaults_to_active() {
        let user = record("Alice", Some("alice@example.com"), None).parse().unwrap();
        assert_eq!(user.name(), "Alice");
        assert_eq!(user.email(), Some("alice@example.com"));
        assert!(user.is_active());

        assert!(record("Alice", None, Some("")).parse().unwrap().is_active());
    }

    #[test]
    fn test_parse_active_flag_is_strict() {
        assert!(record("A", None, Some("true")).parse().unwrap().is_active());
        assert!(!record("A", None, Some("false")).parse().unwrap().is_active());
        assert!(!record("A", None, Some("TRUE")).parse().unwrap().is_active());
        assert!(!record("A", None, Some("1")).parse().unwrap().is_active());
        assert!(!record("A", None, Some("yes")).parse().unwrap().is_active());
    }

    #[test]
    fn test_parse_rejects_blank_name() {
        assert!(record("   ", None, None).parse().is_none());
    }

    #[test]
    fn test_parse_drops_empty_email() {
        let user = record("Bob", Some("  "), None).parse().unwrap();
        assert_eq!(user.email(), None);
    }

    #[test]
    fn test_price_cell() {
        let mut rec = record("Bob", None, None);
        assert_eq!(rec.price(), None);

        rec.price = Some(" ".to_string());
        assert_eq!(rec.price(), None);

        rec.price = Some(" 9.5 ".to_string());
        assert_eq!(rec.price(), Some("9.5"));
    }
}
