//! Read models for the list screens and a whole-session snapshot.

use chrono::NaiveDate;
use serde::Serialize;

use dealer_portal_core::{RetailerId, StaffId, VisitId, VisitStatus};

use crate::models::{Retailer, Staff};
use crate::navigation::{View, ViewAs};
use crate::services::AuthStep;
use crate::state::{Session, Submission};
use crate::store::DomainStore;

/// One line of the all-visits table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitRow {
    pub id: VisitId,
    pub staff_id: StaffId,
    pub retailer_id: RetailerId,
    pub date: NaiveDate,
    pub status: VisitStatus,
    pub staff_name: String,
    pub retailer_name: String,
}

/// One line of a staff member's own visit list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffVisitRow {
    pub id: VisitId,
    pub date: NaiveDate,
    pub status: VisitStatus,
    pub retailer_name: String,
    pub retailer_address: String,
}

/// All visits in store order, with names resolved.
#[must_use]
pub fn visit_rows(store: &DomainStore) -> Vec<VisitRow> {
    store
        .visits()
        .iter()
        .map(|visit| VisitRow {
            id: visit.id.clone(),
            staff_id: visit.staff_id.clone(),
            retailer_id: visit.retailer_id.clone(),
            date: visit.date,
            status: visit.status,
            staff_name: store
                .find_staff(&visit.staff_id)
                .map_or_else(|| "Unknown Staff".to_string(), |s| s.name.clone()),
            retailer_name: store
                .find_retailer(&visit.retailer_id)
                .map_or_else(|| "Unknown Retailer".to_string(), |r| r.business_name.clone()),
        })
        .collect()
}

/// One staff member's visits by date, with the retailer resolved.
#[must_use]
pub fn staff_visit_rows(store: &DomainStore, staff_id: &StaffId) -> Vec<StaffVisitRow> {
    store
        .visits_for_staff(staff_id)
        .into_iter()
        .map(|visit| {
            let retailer = store.find_retailer(&visit.retailer_id);
            StaffVisitRow {
                id: visit.id.clone(),
                date: visit.date,
                status: visit.status,
                retailer_name: retailer
                    .map_or_else(|| "Unknown".to_string(), |r| r.business_name.clone()),
                retailer_address: retailer.map_or_else(|| "N/A".to_string(), |r| r.address.clone()),
            }
        })
        .collect()
}

/// Serializable copy of a session.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub auth_step: AuthStep,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_error: Option<String>,
    pub view: View,
    pub viewing_as: ViewAs,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editing_staff: Option<Staff>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editing_retailer: Option<Retailer>,
    pub success_message: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pending: Vec<Submission>,
    pub retailers: Vec<Retailer>,
    pub staff: Vec<Staff>,
    pub visits: Vec<VisitRow>,
    /// Present on `STAFF_VISITS`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff_visits: Option<Vec<StaffVisitRow>>,
}

impl Snapshot {
    #[must_use]
    pub fn capture(session: &Session) -> Self {
        let store = session.store();
        let navigator = session.navigator();
        Self {
            auth_step: session.auth().step(),
            auth_error: session.auth().error().map(ToString::to_string),
            view: navigator.view(),
            viewing_as: navigator.header_selection(),
            editing_staff: navigator.editing_staff().cloned(),
            editing_retailer: navigator.editing_retailer().cloned(),
            success_message: store.success_message().map(ToString::to_string),
            pending: session.pending().collect(),
            retailers: store.retailers().to_vec(),
            staff: store.staff().to_vec(),
            visits: visit_rows(store),
            staff_visits: navigator
                .viewing_as()
                .filter(|_| navigator.view() == View::StaffVisits)
                .map(|id| staff_visit_rows(store, id)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::models::Visit;

    #[test]
    fn test_visit_rows_resolve_names() {
        let store = DomainStore::with_sample_data();
        let rows = visit_rows(&store);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].staff_name, "Bob Williams");
        assert_eq!(rows[0].retailer_name, "John's Gadgets");
    }

    #[test]
    fn test_dangling_references_fall_back() {
        let mut store = DomainStore::with_sample_data();
        store.add_visit(Visit {
            id: VisitId::new("v9"),
            staff_id: StaffId::new("s2"),
            retailer_id: RetailerId::new("gone"),
            date: NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
            status: VisitStatus::Pending,
        });
        store.add_visit(Visit {
            id: VisitId::new("v10"),
            staff_id: StaffId::new("ghost"),
            retailer_id: RetailerId::new("1"),
            date: NaiveDate::from_ymd_opt(2024, 9, 2).unwrap(),
            status: VisitStatus::Pending,
        });

        let rows = visit_rows(&store);
        assert_eq!(rows[3].retailer_name, "Unknown Retailer");
        assert_eq!(rows[4].staff_name, "Unknown Staff");

        let own = staff_visit_rows(&store, &StaffId::new("s2"));
        let last = own.last().unwrap();
        assert_eq!(last.retailer_name, "Unknown");
        assert_eq!(last.retailer_address, "N/A");
    }

    #[test]
    fn test_staff_visit_rows_for_s2() {
        let store = DomainStore::with_sample_data();
        let ids: Vec<_> = staff_visit_rows(&store, &StaffId::new("s2"))
            .into_iter()
            .map(|row| row.id.into_inner())
            .collect();
        assert_eq!(ids, ["v1", "v3"]);
    }

    #[test]
    fn test_snapshot_of_fresh_session() {
        let session = Session::new(DomainStore::with_sample_data());
        let json = serde_json::to_value(Snapshot::capture(&session)).unwrap();
        assert_eq!(json["authStep"], "PHONE");
        assert_eq!(json["view"], "DASHBOARD");
        assert_eq!(json["viewingAs"], "dealer");
        assert_eq!(json["retailers"][0]["businessName"], "John's Gadgets");
        assert!(json.get("staffVisits").is_none());
    }
}
