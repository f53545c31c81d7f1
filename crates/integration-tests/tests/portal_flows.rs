//! Integration tests for the signed-in portal flows.
//!
//! Each test starts from a signed-in session over the sample data with all
//! delays removed.

#![allow(clippy::unwrap_used)]

use dealer_portal_admin::models::{RetailerForm, StaffForm};
use dealer_portal_admin::navigation::{NavigationError, View, ViewAs};
use dealer_portal_admin::routes::{dashboard, header, retailers, staff, visits};
use dealer_portal_admin::views::staff_visit_rows;
use dealer_portal_admin::AppError;
use dealer_portal_core::{RetailerId, StaffId, VisitId, VisitStatus};
use dealer_portal_integration_tests::{
    message, retailer_form, signed_in, staff_form, today, visit_form,
};

// =============================================================================
// Retailers
// =============================================================================

#[tokio::test]
async fn test_create_retailer_lands_on_dashboard() {
    let state = signed_in().await;
    dashboard::open(&state, View::CreateRetailer).await.unwrap();

    let created = retailers::create(&state, retailer_form("Lee Hardware"))
        .await
        .unwrap()
        .wait()
        .await
        .unwrap();

    let (view, first, count) = state
        .read(|s| {
            (
                s.navigator().view(),
                s.store().retailers()[0].clone(),
                s.store().retailers().len(),
            )
        })
        .await;
    assert_eq!(view, View::Dashboard);
    assert_eq!(first, created);
    assert_eq!(count, 4);
    assert_eq!(
        message(&state).await.as_deref(),
        Some("Retailer \"Lee Hardware\" created successfully!")
    );
}

#[tokio::test]
async fn test_invalid_retailer_changes_nothing() {
    let state = signed_in().await;
    dashboard::open(&state, View::CreateRetailer).await.unwrap();

    let form = RetailerForm {
        email: "not-an-email".to_string(),
        address: String::new(),
        ..retailer_form("Lee Hardware")
    };
    let Err(AppError::Validation(errors)) = retailers::create(&state, form).await else {
        panic!("expected validation errors");
    };
    assert!(errors.contains("email"));
    assert!(errors.contains("address"));

    let (view, count) = state
        .read(|s| (s.navigator().view(), s.store().retailers().len()))
        .await;
    assert_eq!(view, View::CreateRetailer);
    assert_eq!(count, 3);
    assert_eq!(message(&state).await, None);
}

#[tokio::test]
async fn test_edit_retailer_in_place() {
    let state = signed_in().await;
    dashboard::open(&state, View::ViewRetailers).await.unwrap();

    let existing = retailers::edit(&state, &RetailerId::new("2")).await.unwrap();
    let form = RetailerForm {
        business_name: "Smith & Daughters".to_string(),
        ..RetailerForm::from_retailer(&existing)
    };
    retailers::save(&state, form).await.unwrap();

    let (view, ids, renamed) = state
        .read(|s| {
            (
                s.navigator().view(),
                s.store()
                    .retailers()
                    .iter()
                    .map(|r| r.id.to_string())
                    .collect::<Vec<_>>(),
                s.store()
                    .find_retailer(&RetailerId::new("2"))
                    .unwrap()
                    .business_name
                    .clone(),
            )
        })
        .await;
    assert_eq!(view, View::ViewRetailers);
    assert_eq!(ids, ["1", "2", "3"]);
    assert_eq!(renamed, "Smith & Daughters");
    assert_eq!(
        message(&state).await.as_deref(),
        Some("Retailer updated successfully.")
    );
}

#[tokio::test]
async fn test_save_without_edit_screen() {
    let state = signed_in().await;
    let err = retailers::save(&state, retailer_form("Nope")).await.unwrap_err();
    assert!(matches!(
        err,
        AppError::Navigation(NavigationError::NotEditing(View::Dashboard))
    ));
}

// =============================================================================
// Staff
// =============================================================================

#[tokio::test]
async fn test_create_staff_prepends() {
    let state = signed_in().await;
    dashboard::open(&state, View::CreateStaff).await.unwrap();

    let created = staff::create(&state, staff_form("Dee Park"))
        .await
        .unwrap()
        .wait()
        .await
        .unwrap();

    let first = state.read(|s| s.store().staff()[0].clone()).await;
    assert_eq!(first, created);
    assert_eq!(
        message(&state).await.as_deref(),
        Some("Staff member \"Dee Park\" created successfully!")
    );
}

#[tokio::test]
async fn test_edit_staff_then_cancel_keeps_data() {
    let state = signed_in().await;
    dashboard::open(&state, View::ViewStaff).await.unwrap();
    staff::edit(&state, &StaffId::new("s1")).await.unwrap();

    assert_eq!(dashboard::cancel_edit(&state).await.unwrap(), View::ViewStaff);
    let editing = state.read(|s| s.navigator().editing_staff().is_none()).await;
    assert!(editing);
}

#[tokio::test]
async fn test_edit_staff_saves_role() {
    let state = signed_in().await;
    dashboard::open(&state, View::ViewStaff).await.unwrap();
    let existing = staff::edit(&state, &StaffId::new("s3")).await.unwrap();

    let saved = staff::save(
        &state,
        StaffForm {
            role: dealer_portal_core::StaffRole::Manager,
            ..StaffForm::from_staff(&existing)
        },
    )
    .await
    .unwrap();

    assert_eq!(saved.id, existing.id);
    let view = state.read(|s| s.navigator().view()).await;
    assert_eq!(view, View::ViewStaff);
    assert_eq!(
        message(&state).await.as_deref(),
        Some("Staff member updated successfully.")
    );
}

#[tokio::test]
async fn test_edit_unknown_staff() {
    let state = signed_in().await;
    dashboard::open(&state, View::ViewStaff).await.unwrap();
    let err = staff::edit(&state, &StaffId::new("s404")).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    assert_eq!(state.read(|s| s.navigator().view()).await, View::ViewStaff);
}

// =============================================================================
// Visits
// =============================================================================

#[tokio::test]
async fn test_schedule_visit_sorted_in() {
    let state = signed_in().await;
    dashboard::open(&state, View::CreateVisit).await.unwrap();

    let visit = visits::create(&state, visit_form("s1", "3", "2024-08-16"), today())
        .await
        .unwrap()
        .wait()
        .await
        .unwrap();
    assert_eq!(visit.status, VisitStatus::Pending);

    let ids: Vec<String> = state
        .read(|s| s.store().visits().iter().map(|v| v.id.to_string()).collect())
        .await;
    assert_eq!(ids, ["v1", visit.id.as_str(), "v2", "v3"]);
    assert_eq!(
        message(&state).await.as_deref(),
        Some("Visit scheduled for Alice Johnson to Innovate Solutions.")
    );
}

#[tokio::test]
async fn test_schedule_visit_with_unknown_referents() {
    let state = signed_in().await;
    dashboard::open(&state, View::CreateVisit).await.unwrap();

    visits::create(&state, visit_form("s404", "404", "2024-09-01"), today())
        .await
        .unwrap()
        .wait()
        .await
        .unwrap();
    assert_eq!(
        message(&state).await.as_deref(),
        Some("Visit scheduled for Unknown Staff to Unknown Retailer.")
    );
}

#[tokio::test]
async fn test_past_visit_is_rejected() {
    let state = signed_in().await;
    dashboard::open(&state, View::CreateVisit).await.unwrap();
    let Err(AppError::Validation(errors)) =
        visits::create(&state, visit_form("s1", "1", "2024-07-31"), today()).await
    else {
        panic!("expected validation errors");
    };
    assert_eq!(errors.get("date"), Some("Visit date cannot be in the past."));
}

// =============================================================================
// Viewing as staff
// =============================================================================

#[tokio::test]
async fn test_view_as_s2_lists_own_visits() {
    let state = signed_in().await;
    header::view_as(&state, ViewAs::Staff(StaffId::new("s2")))
        .await
        .unwrap();

    let (view, ids) = state
        .read(|s| {
            let id = s.navigator().viewing_as().unwrap();
            (
                s.navigator().view(),
                staff_visit_rows(s.store(), id)
                    .into_iter()
                    .map(|row| row.id.into_inner())
                    .collect::<Vec<_>>(),
            )
        })
        .await;
    assert_eq!(view, View::StaffVisits);
    assert_eq!(ids, ["v1", "v3"]);
}

#[tokio::test]
async fn test_staff_updates_own_visit_only() {
    let state = signed_in().await;
    header::view_as(&state, ViewAs::Staff(StaffId::new("s2")))
        .await
        .unwrap();

    visits::update_status(&state, &VisitId::new("v3"), VisitStatus::Completed)
        .await
        .unwrap();
    assert_eq!(message(&state).await.as_deref(), Some("Visit status updated."));

    let err = visits::update_status(&state, &VisitId::new("v2"), VisitStatus::Cancelled)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Forbidden(_)));

    let statuses = state
        .read(|s| {
            (
                s.store().find_visit(&VisitId::new("v3")).unwrap().status,
                s.store().find_visit(&VisitId::new("v2")).unwrap().status,
            )
        })
        .await;
    assert_eq!(statuses, (VisitStatus::Completed, VisitStatus::Pending));
}

#[tokio::test]
async fn test_unknown_visit_update_still_confirms() {
    let state = signed_in().await;
    let before = state.read(|s| s.store().visits().to_vec()).await;

    visits::update_status(&state, &VisitId::new("v404"), VisitStatus::Completed)
        .await
        .unwrap();

    assert_eq!(state.read(|s| s.store().visits().to_vec()).await, before);
    assert_eq!(message(&state).await.as_deref(), Some("Visit status updated."));
}

#[tokio::test]
async fn test_view_as_unknown_staff_changes_nothing() {
    let state = signed_in().await;
    dashboard::open(&state, View::ViewVisits).await.unwrap();

    let err = header::view_as(&state, ViewAs::Staff(StaffId::new("s404")))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    assert_eq!(state.read(|s| s.navigator().view()).await, View::ViewVisits);
}

#[tokio::test]
async fn test_dealer_mode_returns_to_dashboard() {
    let state = signed_in().await;
    header::view_as(&state, ViewAs::Staff(StaffId::new("s3")))
        .await
        .unwrap();
    header::view_as(&state, ViewAs::Dealer).await.unwrap();

    let (view, header) = state
        .read(|s| (s.navigator().view(), s.navigator().header_selection()))
        .await;
    assert_eq!(view, View::Dashboard);
    assert_eq!(header, ViewAs::Dealer);
}

#[tokio::test]
async fn test_snapshot_serializes_session() {
    let state = signed_in().await;
    header::view_as(&state, ViewAs::Staff(StaffId::new("s2")))
        .await
        .unwrap();

    let json = serde_json::to_value(state.snapshot().await).unwrap();
    assert_eq!(json["authStep"], "AUTHENTICATED");
    assert_eq!(json["view"], "STAFF_VISITS");
    assert_eq!(json["viewingAs"]["staff"], "s2");
    assert_eq!(json["staffVisits"][1]["retailerName"], "Innovate Solutions");
}
