//! Visit route handlers.

use chrono::NaiveDate;
use tracing::{debug, info, instrument, warn};

use dealer_portal_core::{VisitId, VisitStatus};

use crate::error::AppError;
use crate::models::{Visit, VisitForm};
use crate::services::notifications::notify;
use crate::services::{Deferred, defer};
use crate::state::{AppState, Submission};

use super::follow_up;

/// Schedule a visit after the submit delay, then go to the dashboard.
///
/// `today` is the earliest date accepted.
///
/// # Errors
///
/// `Unauthorized`, `Validation` for a missing selection or a past date,
/// `SubmissionPending` while a previous visit is still being scheduled.
#[instrument(skip(state, form))]
pub async fn create(
    state: &AppState,
    form: VisitForm,
    today: NaiveDate,
) -> Result<Deferred<Visit>, AppError> {
    let mut session = state.session().await;
    session.require_auth()?;
    let new = form
        .validate(today)
        .inspect_err(|errors| warn!(%errors, "Visit form rejected"))?;
    session.begin(Submission::CreateVisit)?;
    let login = session.login();
    let origin = session.navigator().view();
    drop(session);

    let task_state = state.clone();
    Ok(defer(state.config().submit_latency, async move {
        let mut session = task_state.session().await;
        let current = session.settle(Submission::CreateVisit, login);

        let visit = new.with_id(VisitId::new(session.store.next_id()));
        let message = {
            let store = session.store();
            let staff_name = store
                .find_staff(&visit.staff_id)
                .map_or("Unknown Staff", |s| s.name.as_str());
            let retailer_name = store
                .find_retailer(&visit.retailer_id)
                .map_or("Unknown Retailer", |r| r.business_name.as_str());
            format!("Visit scheduled for {staff_name} to {retailer_name}.")
        };
        session.store.add_visit(visit.clone());
        info!(visit_id = %visit.id, staff_id = %visit.staff_id, date = %visit.date, "Visit scheduled");

        follow_up(&task_state, &mut session, current, origin, message);
        Ok(visit)
    }))
}

/// Change one visit's status.
///
/// While viewing as a staff member only that member's visits may change.
/// An unknown visit ID changes nothing but still confirms.
///
/// # Errors
///
/// `Unauthorized`, `Forbidden` for another staff member's visit.
#[instrument(skip(state))]
pub async fn update_status(
    state: &AppState,
    id: &VisitId,
    status: VisitStatus,
) -> Result<(), AppError> {
    let mut session = state.session().await;
    session.require_auth()?;

    if let Some(owner) = session.navigator().viewing_as()
        && let Some(visit) = session.store().find_visit(id)
        && &visit.staff_id != owner
    {
        warn!(visit_id = %id, %owner, "Status change on another staff member's visit");
        return Err(AppError::Forbidden(format!(
            "visit {id} is not assigned to staff {owner}"
        )));
    }

    if session.store.update_visit_status(id, status) {
        info!(visit_id = %id, %status, "Visit status updated");
    } else {
        debug!(visit_id = %id, "No visit with this id; nothing updated");
    }
    notify(state, &mut session, "Visit status updated.");
    Ok(())
}
