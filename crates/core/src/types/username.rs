//! Username type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A username as stored in the user store.
///
/// The store accepts any string as a username; uniqueness and lookup are
/// case-insensitive, while the stored spelling is preserved for display
/// and for wallet updates (which match exactly).
///
/// ## Examples
///
/// ```
/// use corner_market_core::Username;
///
/// let name = Username::new("Alice");
/// assert_eq!(name.as_str(), "Alice");
/// assert!(name.eq_ignore_case("alice"));
/// assert!(!name.eq_ignore_case("bob"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    /// Create a new username.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the username as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Username` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Case-insensitive comparison, the store's matching rule.
    #[must_use]
    pub fn eq_ignore_case(&self, other: &str) -> bool {
        self.0.to_lowercase() == other.to_lowercase()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Username {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl From<String> for Username {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
