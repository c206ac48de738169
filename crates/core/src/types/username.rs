//! Customer username type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Username`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum UsernameError {
    /// Too short or too long.
    #[error("username must be {min}-{max} characters")]
    Length {
        /// Minimum allowed length.
        min: usize,
        /// Maximum allowed length.
        max: usize,
    },
    /// Contains something other than ASCII letters and digits.
    #[error("username may only contain letters and numbers")]
    InvalidCharacter,
}

/// A customer username: 3-20 ASCII letters or digits.
///
/// Casing is kept for display but uniqueness is case-insensitive, see
/// [`Username::matches`].
///
/// ```
/// use wighub_core::Username;
///
/// assert!(Username::parse("wiglover42").is_ok());
/// assert!(Username::parse("ab").is_err());
/// assert!(Username::parse("has space").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Minimum username length.
    pub const MIN_LENGTH: usize = 3;
    /// Maximum username length.
    pub const MAX_LENGTH: usize = 20;

    /// Parse a `Username`, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed input is not 3-20 ASCII alphanumerics.
    pub fn parse(s: &str) -> Result<Self, UsernameError> {
        let s = s.trim();
        if !(Self::MIN_LENGTH..=Self::MAX_LENGTH).contains(&s.len()) {
            return Err(UsernameError::Length {
                min: Self::MIN_LENGTH,
                max: Self::MAX_LENGTH,
            });
        }
        if !s.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(UsernameError::InvalidCharacter);
        }
        Ok(Self(s.to_owned()))
    }

    /// Returns the username as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against raw user input.
    #[must_use]
    pub fn matches(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other.trim())
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Username {
    type Error = UsernameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Username> for String {
    fn from(username: Username) -> Self {
        username.0
    }
}
