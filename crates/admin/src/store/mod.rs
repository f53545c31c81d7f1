//! In-memory domain store.
//!
//! The store owns the three collections (retailers, staff, visits) and the
//! pending success message. Collections are exposed as shared slices; the
//! mutator methods below are the only way to change them.
//!
//! # Ordering
//!
//! - Retailers and staff: newest first (`add_*` prepends).
//! - Visits: ascending by date, re-sorted with a stable sort after every
//!   insertion, so visits on the same date keep the order they were added in.
//!
//! # Lookups
//!
//! Foreign keys are not enforced. `find_*` return `None` for unknown IDs and
//! `update_*` with an unknown ID leaves the collection untouched, returning
//! `false` so callers can log the miss.

pub mod ids;
pub mod seed;

use dealer_portal_core::{RetailerId, StaffId, VisitId, VisitStatus};

use crate::models::{Retailer, Staff, Visit};

pub use ids::IdSequence;

/// Entities addressed by an ID within their collection.
trait Identified {
    type Id: PartialEq;

    fn id(&self) -> &Self::Id;
}

impl Identified for Retailer {
    type Id = RetailerId;

    fn id(&self) -> &RetailerId {
        &self.id
    }
}

impl Identified for Staff {
    type Id = StaffId;

    fn id(&self) -> &StaffId {
        &self.id
    }
}

/// Replace the element with the same ID in place. Returns whether one matched.
fn replace_by_id<T: Identified>(items: &mut [T], item: T) -> bool {
    match items.iter_mut().find(|existing| existing.id() == item.id()) {
        Some(slot) => {
            *slot = item;
            true
        }
        None => false,
    }
}

/// Sole owner of the portal's retailers, staff and visits.
#[derive(Debug, Clone, Default)]
pub struct DomainStore {
    retailers: Vec<Retailer>,
    staff: Vec<Staff>,
    visits: Vec<Visit>,
    success_message: Option<String>,
    ids: IdSequence,
}

impl DomainStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the sample retailers, staff and visits.
    #[must_use]
    pub fn with_sample_data() -> Self {
        let mut store = Self {
            retailers: seed::sample_retailers(),
            staff: seed::sample_staff(),
            visits: seed::sample_visits(),
            ..Self::default()
        };
        store.sort_visits();
        store
    }

    // =========================================================================
    // Read access
    // =========================================================================

    #[must_use]
    pub fn retailers(&self) -> &[Retailer] {
        &self.retailers
    }

    #[must_use]
    pub fn staff(&self) -> &[Staff] {
        &self.staff
    }

    /// All visits, ascending by date.
    #[must_use]
    pub fn visits(&self) -> &[Visit] {
        &self.visits
    }

    #[must_use]
    pub fn find_retailer(&self, id: &RetailerId) -> Option<&Retailer> {
        self.retailers.iter().find(|r| &r.id == id)
    }

    #[must_use]
    pub fn find_staff(&self, id: &StaffId) -> Option<&Staff> {
        self.staff.iter().find(|s| &s.id == id)
    }

    #[must_use]
    pub fn find_visit(&self, id: &VisitId) -> Option<&Visit> {
        self.visits.iter().find(|v| &v.id == id)
    }

    /// One staff member's visits, ascending by date.
    #[must_use]
    pub fn visits_for_staff(&self, staff_id: &StaffId) -> Vec<&Visit> {
        let mut visits: Vec<&Visit> = self
            .visits
            .iter()
            .filter(|v| &v.staff_id == staff_id)
            .collect();
        visits.sort_by_key(|v| v.date);
        visits
    }

    /// The message waiting to be shown, if any.
    #[must_use]
    pub fn success_message(&self) -> Option<&str> {
        self.success_message.as_deref()
    }

    // =========================================================================
    // Mutators
    // =========================================================================

    /// Mint a fresh, process-unique ID token.
    pub fn next_id(&mut self) -> String {
        self.ids.next_token()
    }

    /// Prepend a retailer. The caller supplies a fresh ID.
    pub fn add_retailer(&mut self, retailer: Retailer) {
        self.retailers.insert(0, retailer);
    }

    /// Replace the retailer with the same ID. Unknown IDs are a no-op.
    pub fn update_retailer(&mut self, retailer: Retailer) -> bool {
        replace_by_id(&mut self.retailers, retailer)
    }

    /// Prepend a staff member. The caller supplies a fresh ID.
    pub fn add_staff(&mut self, staff: Staff) {
        self.staff.insert(0, staff);
    }

    /// Replace the staff member with the same ID. Unknown IDs are a no-op.
    pub fn update_staff(&mut self, staff: Staff) -> bool {
        replace_by_id(&mut self.staff, staff)
    }

    /// Insert a visit and re-sort all visits by date.
    pub fn add_visit(&mut self, visit: Visit) {
        self.visits.push(visit);
        self.sort_visits();
    }

    /// Change only the status of one visit, keeping its position.
    /// Unknown IDs are a no-op.
    pub fn update_visit_status(&mut self, id: &VisitId, status: VisitStatus) -> bool {
        match self.visits.iter_mut().find(|v| &v.id == id) {
            Some(visit) => {
                visit.status = status;
                true
            }
            None => false,
        }
    }

    /// Set the message the presentation layer shows next.
    pub fn show_success_message(&mut self, message: impl Into<String>) {
        self.success_message = Some(message.into());
    }

    /// Drop the current message, if any.
    pub fn clear_success_message(&mut self) {
        self.success_message = None;
    }

    fn sort_visits(&mut self) {
        // `sort_by_key` is stable: same-date visits keep insertion order.
        self.visits.sort_by_key(|v| v.date);
    }
}
