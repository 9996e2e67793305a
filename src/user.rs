//! User model, factory and display projection.
//!
//! A `User` is built once and never mutated afterwards: there are no
//! setters, so the `is_active` flag set at construction is final.

/// A user record.
///
/// # Invariants
///
/// - Users built by [`create_user`] are always active
/// - `email` is either absent or a non-empty string, never `Some("")`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: i64,
    name: String,
    email: Option<String>,
    is_active: bool,
}

impl User {
    /// Rebuilds a user from fields supplied by a data source.
    ///
    /// This is the only way to obtain an inactive user. An empty `email`
    /// is normalized to `None`, same as in [`create_user`].
    pub fn from_parts(
        id: i64,
        name: impl Into<String>,
        email: Option<&str>,
        is_active: bool,
    ) -> Self {
        User {
            id,
            name: name.into(),
            email: email.filter(|e| !e.is_empty()).map(str::to_owned),
            is_active,
        }
    }

    /// Identifier, unique within the caller's context (not enforced here).
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Email address, if one was given. Format is not validated.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Returns `true` if the user is active.
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Upper-cased name, as shown in listings.
    pub fn display_name(&self) -> String {
        self.name.to_uppercase()
    }
}

/// Creates an active user.
///
/// `email` is only stored when it is present and non-empty; otherwise the
/// user has no email at all. Inputs are not validated.
///
/// # Examples
///
/// ```
/// use fixture_kit::create_user;
///
/// let bob = create_user(2, "Bob", None);
/// assert!(bob.is_active());
/// assert_eq!(bob.email(), None);
/// ```
pub fn create_user(id: i64, name: impl Into<String>, email: Option<&str>) -> User {
    User::from_parts(id, name, email, true)
}

/// Projects the active users of a sequence to their upper-cased names.
///
/// Accepts plain `&User` items as well as `Option<&User>` slots. Empty
/// slots are skipped as if the user were inactive. Input order is kept
/// and duplicates are not removed.
pub fn process_users<'a, I, U>(users: I) -> Vec<String>
where
    I: IntoIterator<Item = U>,
    U: Into<Option<&'a User>>,
{
    users
        .into_iter()
        .filter_map(|slot| active_user(slot.into()))
        .map(User::display_name)
        .collect()
}

/// Returns the user in `slot` if it is present and active.
pub fn active_user(slot: Option<&User>) -> Option<&User> {
    slot.filter(|user| user.is_active())
}

/// Age in whole years between `birth_year` and `current_year`.
pub fn calculate_age(birth_year: i32, current_year: i32) -> i32 {
    current_year - birth_year
}
