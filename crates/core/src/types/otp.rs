//! One-time passcode type.

use core::fmt;

/// Errors that can occur when parsing an [`OtpCode`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum OtpCodeError {
    /// The code does not have exactly [`OtpCode::LENGTH`] characters.
    #[error("code must be {expected} digits, got {actual}")]
    WrongLength {
        /// Required number of digits.
        expected: usize,
        /// Number of characters supplied.
        actual: usize,
    },
    /// The code contains something other than ASCII digits.
    #[error("code must contain only digits")]
    NonDigit,
}

/// A six-digit one-time passcode.
///
/// `Debug` is redacted so codes never end up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct OtpCode(String);

impl OtpCode {
    /// Number of digits in a code.
    pub const LENGTH: usize = 6;

    /// Parse an `OtpCode` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error unless the input is exactly six ASCII digits.
    pub fn parse(s: &str) -> Result<Self, OtpCodeError> {
        let actual = s.chars().count();
        if actual != Self::LENGTH {
            return Err(OtpCodeError::WrongLength {
                expected: Self::LENGTH,
                actual,
            });
        }

        if !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(OtpCodeError::NonDigit);
        }

        Ok(Self(s.to_owned()))
    }

    /// Normalize raw keyboard input the way the code field does: drop
    /// everything that is not an ASCII digit and keep at most six digits.
    ///
    /// ```
    /// use dealer_portal_core::OtpCode;
    ///
    /// assert_eq!(OtpCode::sanitize("12a3-45 678"), "123456");
    /// ```
    #[must_use]
    pub fn sanitize(input: &str) -> String {
        input
            .chars()
            .filter(char::is_ascii_digit)
            .take(Self::LENGTH)
            .collect()
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Verbatim comparison against a reference code.
    #[must_use]
    pub fn matches(&self, reference: &str) -> bool {
        self.0 == reference
    }
}

impl fmt::Debug for OtpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OtpCode([REDACTED])")
    }
}

impl std::str::FromStr for OtpCode {
    type Err = OtpCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let code = OtpCode::parse("123456").unwrap();
        assert_eq!(code.as_str(), "123456");
        assert!(code.matches("123456"));
        assert!(!code.matches("000000"));
    }

    #[test]
    fn test_parse_wrong_length() {
        assert_eq!(
            OtpCode::parse("12345"),
            Err(OtpCodeError::WrongLength {
                expected: 6,
                actual: 5
            })
        );
        assert!(matches!(
            OtpCode::parse("1234567"),
            Err(OtpCodeError::WrongLength { actual: 7, .. })
        ));
    }

    #[test]
    fn test_parse_non_digit() {
        assert_eq!(OtpCode::parse("12345a"), Err(OtpCodeError::NonDigit));
    }

    #[test]
    fn test_sanitize_truncates() {
        assert_eq!(OtpCode::sanitize("9876543210"), "987654");
        assert_eq!(OtpCode::sanitize("abc"), "");
    }

    #[test]
    fn test_debug_is_redacted() {
        let code = OtpCode::parse("123456").unwrap();
        assert!(!format!("{code:?}").contains("123456"));
    }
}
