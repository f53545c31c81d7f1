//! Integration tests for the dealer portal.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p dealer-portal-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `auth_gate` - Phone and code login flow through the routes
//! - `portal_flows` - Create, edit, schedule and view-as flows
//! - `submission_timing` - Simulated delays, double submits, banner expiry
//!
//! Helpers here build sessions and drive them to a signed-in state.

#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;

use dealer_portal_admin::models::{RetailerForm, StaffForm, VisitForm};
use dealer_portal_admin::routes::auth;
use dealer_portal_admin::{AppState, PortalConfig};
use dealer_portal_core::StaffRole;

/// Phone number that passes the format check.
pub const PHONE: &str = "123-456-7890";

/// Reference code of the default configuration.
pub const CODE: &str = "123456";

/// A session over the sample data with every delay removed.
#[must_use]
pub fn instant_state() -> AppState {
    AppState::new(PortalConfig::default().without_latency())
}

/// A session over the sample data with the default delays.
#[must_use]
pub fn default_state() -> AppState {
    AppState::new(PortalConfig::default())
}

/// Drive the login gate to the signed-in state.
pub async fn sign_in(state: &AppState) {
    auth::set_phone(state, PHONE).await;
    auth::submit_phone(state).await.unwrap().wait().await.unwrap();
    auth::set_code(state, CODE).await;
    auth::submit_code(state).await.unwrap().wait().await.unwrap();
}

/// A signed-in session over the sample data with every delay removed.
pub async fn signed_in() -> AppState {
    let state = instant_state();
    sign_in(&state).await;
    state
}

/// Fixed "today" for visit scheduling.
#[must_use]
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 8, 1).unwrap()
}

#[must_use]
pub fn retailer_form(business_name: &str) -> RetailerForm {
    RetailerForm {
        name: "Pat Lee".to_string(),
        business_name: business_name.to_string(),
        phone: "555-010-2000".to_string(),
        email: "pat@leehardware.com".to_string(),
        address: "1 Elm St, Springfield".to_string(),
    }
}

#[must_use]
pub fn staff_form(name: &str) -> StaffForm {
    StaffForm {
        name: name.to_string(),
        email: "dee.p@dealer.com".to_string(),
        phone: "555-777-8888".to_string(),
        role: StaffRole::Technician,
    }
}

#[must_use]
pub fn visit_form(staff_id: &str, retailer_id: &str, date: &str) -> VisitForm {
    VisitForm {
        staff_id: staff_id.to_string(),
        retailer_id: retailer_id.to_string(),
        date: date.to_string(),
    }
}

/// Current success message, if any.
pub async fn message(state: &AppState) -> Option<String> {
    state
        .read(|s| s.store().success_message().map(ToString::to_string))
        .await
}
