//! Phone number type.

use core::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// 10 to 15 characters drawn from digits, whitespace, parentheses, plus and hyphen.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9\s()+\-]{10,15}$").expect("Invalid regex"));

/// Errors that can occur when parsing a [`Phone`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneError {
    /// The input string is empty or only whitespace.
    #[error("phone number cannot be empty")]
    Empty,
    /// The input has the wrong length or contains disallowed characters.
    #[error("phone number must be 10-15 characters of digits, spaces, (), + or -")]
    Malformed,
}

/// A loosely formatted phone number.
///
/// The portal accepts numbers the way people type them, so only the
/// character set and overall length are checked. The original text is kept
/// as entered.
///
/// ## Examples
///
/// ```
/// use dealer_portal_core::Phone;
///
/// assert!(Phone::parse("123-456-7890").is_ok());
/// assert!(Phone::parse("+1 (555) 123-4567").is_ok());
///
/// assert!(Phone::parse("12345").is_err());        // too short
/// assert!(Phone::parse("555-CALL-NOW").is_err()); // letters
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    /// Minimum length in characters.
    pub const MIN_LENGTH: usize = 10;
    /// Maximum length in characters.
    pub const MAX_LENGTH: usize = 15;

    /// Parse a `Phone` from a string.
    ///
    /// # Errors
    ///
    /// Returns [`PhoneError::Empty`] for blank input and
    /// [`PhoneError::Malformed`] when the length or character set is wrong.
    pub fn parse(s: &str) -> Result<Self, PhoneError> {
        if s.trim().is_empty() {
            return Err(PhoneError::Empty);
        }

        if !PHONE_RE.is_match(s) {
            return Err(PhoneError::Malformed);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the phone number as entered.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Phone` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Phone {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Phone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
