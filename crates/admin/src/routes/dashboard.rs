//! Dashboard and plain navigation handlers.

use tracing::{debug, instrument};

use crate::error::AppError;
use crate::navigation::View;
use crate::state::AppState;

/// Move between the dashboard and a create/list screen.
///
/// # Errors
///
/// `Unauthorized` when signed out, `Navigation` for moves that are not
/// allowed from the current screen.
#[instrument(skip(state))]
pub async fn open(state: &AppState, view: View) -> Result<(), AppError> {
    let mut session = state.session().await;
    session.require_auth()?;
    session.navigator.open(view)?;
    debug!(%view, "Opened view");
    Ok(())
}

/// Leave the current edit screen without saving.
///
/// # Errors
///
/// `Unauthorized` when signed out, `Navigation` when no edit screen is open.
#[instrument(skip(state))]
pub async fn cancel_edit(state: &AppState) -> Result<View, AppError> {
    let mut session = state.session().await;
    session.require_auth()?;
    Ok(session.navigator.cancel_edit()?)
}

/// Close the success banner.
///
/// # Errors
///
/// `Unauthorized` when signed out.
#[instrument(skip(state))]
pub async fn dismiss(state: &AppState) -> Result<(), AppError> {
    let mut session = state.session().await;
    session.require_auth()?;
    session.dismiss_notice();
    Ok(())
}
