//! Header "viewing as" selector.

use tracing::{info, instrument};

use crate::error::AppError;
use crate::navigation::ViewAs;
use crate::state::AppState;

/// Switch to dealer mode (dashboard) or to one staff member's visit list.
///
/// # Errors
///
/// `Unauthorized`, `NotFound` for an unknown staff ID (nothing changes).
#[instrument(skip(state))]
pub async fn view_as(state: &AppState, selection: ViewAs) -> Result<(), AppError> {
    let mut session = state.session().await;
    session.require_auth()?;
    if let ViewAs::Staff(id) = &selection
        && session.store().find_staff(id).is_none()
    {
        return Err(AppError::NotFound(format!("staff {id}")));
    }
    session.navigator.view_as(selection);
    info!(view = %session.navigator().view(), "Switched viewing mode");
    Ok(())
}
