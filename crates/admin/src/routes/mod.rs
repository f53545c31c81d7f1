//! Route handlers: one async function per user action.
//!
//! # Route Structure
//!
//! ```text
//! # Auth (no session required)
//! auth::set_phone / auth::set_code   - Field input
//! auth::submit_phone                 - Send the code (auth delay)
//! auth::submit_code                  - Verify the code (auth delay)
//! auth::back                         - OTP step back to phone step
//! auth::logout                       - Sign out
//!
//! # Dashboard
//! dashboard::open                    - Move between dashboard and create/list screens
//! dashboard::cancel_edit             - Leave an edit screen without saving
//! dashboard::dismiss                 - Close the success banner
//!
//! # Retailers
//! retailers::create                  - Create (submit delay)
//! retailers::edit / retailers::save  - Edit screen
//!
//! # Staff
//! staff::create                      - Create (submit delay)
//! staff::edit / staff::save          - Edit screen
//!
//! # Visits
//! visits::create                     - Schedule (submit delay)
//! visits::update_status              - Change one visit's status
//!
//! # Header
//! header::view_as                    - Switch between dealer and staff view
//! ```
//!
//! Every handler outside `auth` requires a signed-in session. Delayed
//! handlers validate immediately and return a [`Deferred`] that resolves once
//! the change has been applied.
//!
//! [`Deferred`]: crate::services::Deferred

pub mod auth;
pub mod dashboard;
pub mod header;
pub mod retailers;
pub mod staff;
pub mod visits;

use tracing::debug;

use crate::navigation::View;
use crate::services::notifications::notify;
use crate::state::{AppState, Session};

/// Banner and navigation once a delayed create has been applied.
///
/// Both are skipped when the login the form was submitted under has ended.
/// Navigation also needs the user to still be on the form's screen.
fn follow_up(
    state: &AppState,
    session: &mut Session,
    current: bool,
    origin: View,
    message: String,
) {
    if !current {
        debug!(%origin, "Signed out before submission completed; no banner");
        return;
    }
    notify(state, session, message);
    if !session.navigator.complete_submission(origin, View::Dashboard) {
        debug!(
            %origin,
            current = %session.navigator().view(),
            "User left the form before submission completed; not navigating"
        );
    }
}
