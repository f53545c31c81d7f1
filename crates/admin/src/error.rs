//! Unified error handling for the portal.

use thiserror::Error;

use crate::models::FieldErrors;
use crate::navigation::NavigationError;
use crate::services::auth::AuthError;
use crate::state::Submission;

/// Application-level error type returned by every route.
#[derive(Debug, Error)]
pub enum AppError {
    /// Form input failed validation. Nothing was changed.
    #[error("Validation failed: {0}")]
    Validation(#[from] FieldErrors),

    /// Login gate rejected the action.
    #[error("Login error: {0}")]
    Auth(#[from] AuthError),

    /// Requested screen change is not allowed.
    #[error("Navigation error: {0}")]
    Navigation(#[from] NavigationError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// User is not signed in.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// User lacks permission.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// The same form is already being submitted.
    #[error("Submission already in progress: {0}")]
    SubmissionPending(Submission),

    /// A deferred task failed to run to completion.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Whether the error is caused by the user's input or state, as opposed
    /// to a bug.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        !matches!(self, Self::Internal(_))
    }
}
