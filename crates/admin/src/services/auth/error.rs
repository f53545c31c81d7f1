//! Login gate error types.

use thiserror::Error;

use dealer_portal_core::{OtpCodeError, PhoneError};

use super::AuthStep;

/// Errors raised by the phone/OTP gate.
///
/// The `Display` text of the first three variants is what the login screen
/// shows under the input.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Phone number did not pass the format check.
    #[error("Please enter a valid phone number.")]
    InvalidPhone(#[source] PhoneError),

    /// Fewer than six digits were entered.
    #[error("OTP must be 6 digits.")]
    IncompleteCode(#[source] OtpCodeError),

    /// Code did not match the reference code.
    #[error("Invalid OTP. Please try again.")]
    InvalidCode,

    /// Action does not apply to the current step.
    #[error("expected the {expected} step, currently at {actual}")]
    WrongStep { expected: AuthStep, actual: AuthStep },
}
