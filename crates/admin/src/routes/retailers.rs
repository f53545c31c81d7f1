//! Retailer route handlers.

use tracing::{debug, info, instrument, warn};

use dealer_portal_core::RetailerId;

use crate::error::AppError;
use crate::models::{Retailer, RetailerForm};
use crate::navigation::NavigationError;
use crate::services::notifications::notify;
use crate::services::{Deferred, defer};
use crate::state::{AppState, Submission};

use super::follow_up;

/// Create a retailer after the submit delay.
///
/// The new retailer is prepended and the user lands on the dashboard.
///
/// # Errors
///
/// `Unauthorized`, `Validation` for a bad form, `SubmissionPending` while a
/// previous retailer is still being created.
#[instrument(skip(state, form))]
pub async fn create(state: &AppState, form: RetailerForm) -> Result<Deferred<Retailer>, AppError> {
    let mut session = state.session().await;
    session.require_auth()?;
    let new = form
        .validate()
        .inspect_err(|errors| warn!(%errors, "Retailer form rejected"))?;
    session.begin(Submission::CreateRetailer)?;
    let login = session.login();
    let origin = session.navigator().view();
    drop(session);

    let task_state = state.clone();
    Ok(defer(state.config().submit_latency, async move {
        let mut session = task_state.session().await;
        let current = session.settle(Submission::CreateRetailer, login);

        let retailer = new.with_id(RetailerId::new(session.store.next_id()));
        session.store.add_retailer(retailer.clone());
        info!(retailer_id = %retailer.id, business_name = %retailer.business_name, "Retailer created");

        let message = format!("Retailer \"{}\" created successfully!", retailer.business_name);
        follow_up(&task_state, &mut session, current, origin, message);
        Ok(retailer)
    }))
}

/// Open the edit screen for a retailer picked from the list.
///
/// # Errors
///
/// `Unauthorized`, `NotFound` for an unknown ID, `Navigation` unless the
/// retailer list is showing.
#[instrument(skip(state))]
pub async fn edit(state: &AppState, id: &RetailerId) -> Result<Retailer, AppError> {
    let mut session = state.session().await;
    session.require_auth()?;
    let retailer = session
        .store()
        .find_retailer(id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("retailer {id}")))?;
    session.navigator.edit_retailer(retailer.clone())?;
    Ok(retailer)
}

/// Save the edit screen and return to the retailer list.
///
/// # Errors
///
/// `Unauthorized`, `Navigation` when no retailer is being edited,
/// `Validation` for a bad form.
#[instrument(skip(state, form))]
pub async fn save(state: &AppState, form: RetailerForm) -> Result<Retailer, AppError> {
    let mut session = state.session().await;
    session.require_auth()?;
    let id = session
        .navigator()
        .editing_retailer()
        .map(|r| r.id.clone())
        .ok_or_else(|| NavigationError::NotEditing(session.navigator().view()))?;
    let retailer = form
        .validate()
        .inspect_err(|errors| warn!(%errors, "Retailer form rejected"))?
        .with_id(id);

    if session.store.update_retailer(retailer.clone()) {
        info!(retailer_id = %retailer.id, "Retailer updated");
    } else {
        debug!(retailer_id = %retailer.id, "No retailer with this id; nothing updated");
    }
    notify(state, &mut session, "Retailer updated successfully.");
    session.navigator.finish_edit()?;
    Ok(retailer)
}
