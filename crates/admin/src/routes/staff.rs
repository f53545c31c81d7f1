//! Staff route handlers.

use tracing::{debug, info, instrument, warn};

use dealer_portal_core::StaffId;

use crate::error::AppError;
use crate::models::{Staff, StaffForm};
use crate::navigation::NavigationError;
use crate::services::notifications::notify;
use crate::services::{Deferred, defer};
use crate::state::{AppState, Submission};

use super::follow_up;

/// Create a staff member after the submit delay, then go to the dashboard.
///
/// # Errors
///
/// `Unauthorized`, `Validation` for a bad form, `SubmissionPending` while a
/// previous staff member is still being created.
#[instrument(skip(state, form))]
pub async fn create(state: &AppState, form: StaffForm) -> Result<Deferred<Staff>, AppError> {
    let mut session = state.session().await;
    session.require_auth()?;
    let new = form
        .validate()
        .inspect_err(|errors| warn!(%errors, "Staff form rejected"))?;
    session.begin(Submission::CreateStaff)?;
    let login = session.login();
    let origin = session.navigator().view();
    drop(session);

    let task_state = state.clone();
    Ok(defer(state.config().submit_latency, async move {
        let mut session = task_state.session().await;
        let current = session.settle(Submission::CreateStaff, login);

        let staff = new.with_id(StaffId::new(session.store.next_id()));
        session.store.add_staff(staff.clone());
        info!(staff_id = %staff.id, role = %staff.role, "Staff member created");

        let message = format!("Staff member \"{}\" created successfully!", staff.name);
        follow_up(&task_state, &mut session, current, origin, message);
        Ok(staff)
    }))
}

/// Open the edit screen for a staff member picked from the list.
///
/// # Errors
///
/// `Unauthorized`, `NotFound` for an unknown ID, `Navigation` unless the
/// staff list is showing.
#[instrument(skip(state))]
pub async fn edit(state: &AppState, id: &StaffId) -> Result<Staff, AppError> {
    let mut session = state.session().await;
    session.require_auth()?;
    let staff = session
        .store()
        .find_staff(id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("staff {id}")))?;
    session.navigator.edit_staff(staff.clone())?;
    Ok(staff)
}

/// Save the edit screen and return to the staff list.
///
/// # Errors
///
/// `Unauthorized`, `Navigation` when nobody is being edited, `Validation`
/// for a bad form.
#[instrument(skip(state, form))]
pub async fn save(state: &AppState, form: StaffForm) -> Result<Staff, AppError> {
    let mut session = state.session().await;
    session.require_auth()?;
    let id = session
        .navigator()
        .editing_staff()
        .map(|s| s.id.clone())
        .ok_or_else(|| NavigationError::NotEditing(session.navigator().view()))?;
    let staff = form
        .validate()
        .inspect_err(|errors| warn!(%errors, "Staff form rejected"))?
        .with_id(id);

    if session.store.update_staff(staff.clone()) {
        info!(staff_id = %staff.id, "Staff member updated");
    } else {
        debug!(staff_id = %staff.id, "No staff member with this id; nothing updated");
    }
    notify(state, &mut session, "Staff member updated successfully.");
    session.navigator.finish_edit()?;
    Ok(staff)
}
