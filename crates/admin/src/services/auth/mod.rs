//! Phone + one-time-code login gate.
//!
//! `PHONE -> OTP -> AUTHENTICATED`. Each submission is split in two: a
//! synchronous `begin_*` that validates the input and a `complete_*` that the
//! caller runs once the simulated delay has elapsed. The gate itself holds no
//! timers.

mod error;

pub use error::AuthError;

use std::fmt;

use serde::{Deserialize, Serialize};

use dealer_portal_core::{OtpCode, Phone};

/// Where the user is in the login flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthStep {
    #[default]
    Phone,
    Otp,
    Authenticated,
}

impl AuthStep {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Phone => "PHONE",
            Self::Otp => "OTP",
            Self::Authenticated => "AUTHENTICATED",
        }
    }
}

impl fmt::Display for AuthStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Login screen state.
#[derive(Debug, Clone, Default)]
pub struct AuthGate {
    step: AuthStep,
    phone: String,
    code: String,
    error: Option<String>,
    focus_requested: bool,
}

impl AuthGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn step(&self) -> AuthStep {
        self.step
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.step == AuthStep::Authenticated
    }

    /// Phone field contents.
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Code field contents (digits only, at most six).
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Message shown under the input.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether the code input should grab focus. Reading clears the request.
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::replace(&mut self.focus_requested, false)
    }

    /// Typing in the phone field.
    pub fn set_phone(&mut self, input: &str) {
        input.clone_into(&mut self.phone);
        self.error = None;
    }

    /// Typing in the code field. Non-digits are dropped and input past six
    /// digits is ignored.
    pub fn set_code(&mut self, input: &str) {
        self.code = OtpCode::sanitize(input);
        self.error = None;
    }

    /// Validate the phone number before the code is "sent".
    ///
    /// # Errors
    ///
    /// `WrongStep` outside the phone step, `InvalidPhone` when the number
    /// fails the format check. The message is also kept for display.
    pub fn begin_phone_submit(&mut self) -> Result<Phone, AuthError> {
        self.expect_step(AuthStep::Phone)?;
        self.error = None;
        Phone::parse(&self.phone).map_err(|e| self.fail(AuthError::InvalidPhone(e)))
    }

    /// The code has been "sent". Returns `false` if the user left the phone
    /// step in the meantime.
    pub fn complete_phone_submit(&mut self) -> bool {
        if self.step != AuthStep::Phone {
            return false;
        }
        self.step = AuthStep::Otp;
        self.code.clear();
        true
    }

    /// Check the code is complete before it is "verified".
    ///
    /// # Errors
    ///
    /// `WrongStep` outside the OTP step, `IncompleteCode` when fewer than six
    /// digits were entered. The code is kept so the user can finish typing.
    pub fn begin_code_submit(&mut self) -> Result<OtpCode, AuthError> {
        self.expect_step(AuthStep::Otp)?;
        self.error = None;
        OtpCode::parse(&self.code).map_err(|e| self.fail(AuthError::IncompleteCode(e)))
    }

    /// Apply the verification outcome.
    ///
    /// # Errors
    ///
    /// `InvalidCode` on mismatch: the code is cleared and focus requested.
    /// `WrongStep` if the user went back while the code was being verified.
    pub fn complete_code_submit(&mut self, accepted: bool) -> Result<(), AuthError> {
        self.expect_step(AuthStep::Otp)?;
        if accepted {
            self.step = AuthStep::Authenticated;
            self.code.clear();
            self.error = None;
            Ok(())
        } else {
            self.code.clear();
            self.focus_requested = true;
            Err(self.fail(AuthError::InvalidCode))
        }
    }

    /// OTP step back to the phone step, discarding the code.
    ///
    /// # Errors
    ///
    /// `WrongStep` outside the OTP step.
    pub fn back(&mut self) -> Result<(), AuthError> {
        self.expect_step(AuthStep::Otp)?;
        self.step = AuthStep::Phone;
        self.code.clear();
        self.error = None;
        self.focus_requested = false;
        Ok(())
    }

    /// Sign out from any step.
    pub fn logout(&mut self) {
        *self = Self::default();
    }

    fn expect_step(&self, expected: AuthStep) -> Result<(), AuthError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(AuthError::WrongStep {
                expected,
                actual: self.step,
            })
        }
    }

    fn fail(&mut self, err: AuthError) -> AuthError {
        self.error = Some(err.to_string());
        err
    }
}
