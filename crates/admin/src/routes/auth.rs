//! Login route handlers.
//!
//! Phone number, then one-time code. Both submissions wait for the configured
//! auth delay before taking effect.

use tracing::{debug, info, instrument, warn};

use crate::error::AppError;
use crate::services::{Deferred, defer};
use crate::state::{AppState, Submission};

/// Typing in the phone field.
pub async fn set_phone(state: &AppState, input: &str) {
    state.session().await.auth.set_phone(input);
}

/// Typing in the code field.
pub async fn set_code(state: &AppState, input: &str) {
    state.session().await.auth.set_code(input);
}

/// Validate the phone number and "send" the code.
///
/// # Errors
///
/// `Auth` when the number is malformed or the gate is not at the phone step,
/// `SubmissionPending` when a code is already being sent.
#[instrument(skip(state))]
pub async fn submit_phone(state: &AppState) -> Result<Deferred<()>, AppError> {
    let mut session = state.session().await;
    session
        .auth
        .begin_phone_submit()
        .inspect_err(|e| warn!(error = %e, "Phone number rejected"))?;
    session.begin(Submission::SendCode)?;
    let login = session.login();
    drop(session);

    debug!("Sending one-time code");
    let task_state = state.clone();
    Ok(defer(state.config().auth_latency, async move {
        let mut session = task_state.session().await;
        if !session.settle(Submission::SendCode, login) {
            debug!("Signed out before the code was sent");
            return Ok(());
        }
        if session.auth.complete_phone_submit() {
            info!("One-time code sent");
        } else {
            debug!("Left the phone step before the code was sent");
        }
        Ok(())
    }))
}

/// Check the code is complete and verify it against the reference code.
///
/// The returned handle resolves to `Err(Auth(InvalidCode))` on mismatch.
///
/// # Errors
///
/// `Auth` when fewer than six digits were entered or the gate is not at the
/// OTP step, `SubmissionPending` when a code is already being verified.
#[instrument(skip(state))]
pub async fn submit_code(state: &AppState) -> Result<Deferred<()>, AppError> {
    let mut session = state.session().await;
    let code = session
        .auth
        .begin_code_submit()
        .inspect_err(|e| warn!(error = %e, "Code rejected"))?;
    session.begin(Submission::VerifyCode)?;
    let login = session.login();
    drop(session);

    let task_state = state.clone();
    Ok(defer(state.config().auth_latency, async move {
        let accepted = task_state.config().otp_matches(&code);
        let mut session = task_state.session().await;
        if !session.settle(Submission::VerifyCode, login) {
            debug!("Signed out before the code was verified");
            return Ok(());
        }
        session
            .auth
            .complete_code_submit(accepted)
            .inspect_err(|e| warn!(error = %e, "Code verification failed"))?;
        session.navigator.reset();
        info!("Signed in");
        Ok(())
    }))
}

/// OTP step back to the phone step.
///
/// # Errors
///
/// `Auth` outside the OTP step.
#[instrument(skip(state))]
pub async fn back(state: &AppState) -> Result<(), AppError> {
    state.session().await.auth.back()?;
    Ok(())
}

/// Sign out and drop every selection.
///
/// Submissions still waiting for their delay are detached from the session:
/// a create is still applied, but shows no banner and moves nobody.
#[instrument(skip(state))]
pub async fn logout(state: &AppState) {
    let mut session = state.session().await;
    session.end_login();
    session.auth.logout();
    session.navigator.reset();
    session.dismiss_notice();
    info!("Signed out");
}
