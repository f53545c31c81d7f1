//! View navigation state machine.
//!
//! The portal renders exactly one [`View`] at a time. Plain moves between the
//! dashboard and the create/list screens go through [`Navigator::open`]; the
//! edit screens and the staff-visits screen can only be entered through the
//! methods that carry their selection, so an edit view never exists without
//! the entity it edits.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use dealer_portal_core::StaffId;

use crate::models::{Retailer, Staff};

/// Screen identifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum View {
    #[default]
    Dashboard,
    CreateRetailer,
    CreateStaff,
    ViewRetailers,
    ViewStaff,
    EditStaff,
    EditRetailer,
    CreateVisit,
    ViewVisits,
    StaffVisits,
}

/// Invalid view name.
#[derive(Debug, Clone, Error)]
#[error("unknown view: {0}")]
pub struct ParseViewError(pub String);

impl View {
    pub const ALL: [Self; 10] = [
        Self::Dashboard,
        Self::CreateRetailer,
        Self::CreateStaff,
        Self::ViewRetailers,
        Self::ViewStaff,
        Self::EditStaff,
        Self::EditRetailer,
        Self::CreateVisit,
        Self::ViewVisits,
        Self::StaffVisits,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dashboard => "DASHBOARD",
            Self::CreateRetailer => "CREATE_RETAILER",
            Self::CreateStaff => "CREATE_STAFF",
            Self::ViewRetailers => "VIEW_RETAILERS",
            Self::ViewStaff => "VIEW_STAFF",
            Self::EditStaff => "EDIT_STAFF",
            Self::EditRetailer => "EDIT_RETAILER",
            Self::CreateVisit => "CREATE_VISIT",
            Self::ViewVisits => "VIEW_VISITS",
            Self::StaffVisits => "STAFF_VISITS",
        }
    }

    /// Views that need a selection to be rendered.
    #[must_use]
    pub const fn requires_selection(self) -> bool {
        matches!(self, Self::EditStaff | Self::EditRetailer | Self::StaffVisits)
    }

    /// The list an edit view returns to.
    #[must_use]
    pub const fn list_view(self) -> Option<Self> {
        match self {
            Self::EditStaff => Some(Self::ViewStaff),
            Self::EditRetailer => Some(Self::ViewRetailers),
            _ => None,
        }
    }

    /// Views reachable with [`Navigator::open`] from this one.
    #[must_use]
    pub fn allowed_transitions(self) -> &'static [Self] {
        match self {
            Self::Dashboard => &[
                Self::CreateRetailer,
                Self::CreateStaff,
                Self::ViewRetailers,
                Self::ViewStaff,
                Self::CreateVisit,
                Self::ViewVisits,
            ],
            Self::CreateRetailer
            | Self::CreateStaff
            | Self::ViewRetailers
            | Self::ViewStaff
            | Self::CreateVisit
            | Self::ViewVisits => &[Self::Dashboard],
            Self::EditStaff | Self::EditRetailer | Self::StaffVisits => &[],
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = ParseViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|view| view.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseViewError(s.to_string()))
    }
}

/// Value of the header "view as" selector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewAs {
    /// Administrator mode.
    #[default]
    Dealer,
    /// Seeing the portal as one staff member.
    Staff(StaffId),
}

/// Rejected navigation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("cannot go from {from} to {to}")]
    IllegalTransition { from: View, to: View },

    #[error("{0} needs a selected entity")]
    MissingSelection(View),

    #[error("not on an edit screen (current view is {0})")]
    NotEditing(View),
}

/// Current view plus the selection scoped to it.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    view: View,
    editing_staff: Option<Staff>,
    editing_retailer: Option<Retailer>,
    viewing_as: Option<StaffId>,
}

impl Navigator {
    /// Starts on the dashboard with nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn view(&self) -> View {
        self.view
    }

    /// The staff member open on `EDIT_STAFF`.
    #[must_use]
    pub const fn editing_staff(&self) -> Option<&Staff> {
        self.editing_staff.as_ref()
    }

    /// The retailer open on `EDIT_RETAILER`.
    #[must_use]
    pub const fn editing_retailer(&self) -> Option<&Retailer> {
        self.editing_retailer.as_ref()
    }

    /// The impersonated staff member, if any.
    #[must_use]
    pub const fn viewing_as(&self) -> Option<&StaffId> {
        self.viewing_as.as_ref()
    }

    /// What the header selector shows.
    #[must_use]
    pub fn header_selection(&self) -> ViewAs {
        self.viewing_as
            .clone()
            .map_or(ViewAs::Dealer, ViewAs::Staff)
    }

    /// Move to a screen that needs no selection.
    ///
    /// # Errors
    ///
    /// `MissingSelection` for the edit and staff-visits screens,
    /// `IllegalTransition` for any move not in [`View::allowed_transitions`].
    pub fn open(&mut self, to: View) -> Result<(), NavigationError> {
        if to.requires_selection() {
            return Err(NavigationError::MissingSelection(to));
        }
        if !self.view.allowed_transitions().contains(&to) {
            return Err(NavigationError::IllegalTransition {
                from: self.view,
                to,
            });
        }
        self.go(to);
        Ok(())
    }

    /// Open the edit screen for a staff member picked on `VIEW_STAFF`.
    ///
    /// # Errors
    ///
    /// `IllegalTransition` unless the staff list is showing.
    pub fn edit_staff(&mut self, staff: Staff) -> Result<(), NavigationError> {
        self.require(View::ViewStaff, View::EditStaff)?;
        self.go(View::EditStaff);
        self.editing_staff = Some(staff);
        Ok(())
    }

    /// Open the edit screen for a retailer picked on `VIEW_RETAILERS`.
    ///
    /// # Errors
    ///
    /// `IllegalTransition` unless the retailer list is showing.
    pub fn edit_retailer(&mut self, retailer: Retailer) -> Result<(), NavigationError> {
        self.require(View::ViewRetailers, View::EditRetailer)?;
        self.go(View::EditRetailer);
        self.editing_retailer = Some(retailer);
        Ok(())
    }

    /// Leave an edit screen after saving.
    ///
    /// # Errors
    ///
    /// `NotEditing` when no edit screen is showing.
    pub fn finish_edit(&mut self) -> Result<View, NavigationError> {
        self.leave_edit()
    }

    /// Leave an edit screen without saving.
    ///
    /// # Errors
    ///
    /// `NotEditing` when no edit screen is showing.
    pub fn cancel_edit(&mut self) -> Result<View, NavigationError> {
        self.leave_edit()
    }

    /// Apply the header selector. Allowed from every view.
    pub fn view_as(&mut self, selection: ViewAs) {
        match selection {
            ViewAs::Dealer => {
                self.go(View::Dashboard);
                self.viewing_as = None;
            }
            ViewAs::Staff(id) => {
                self.go(View::StaffVisits);
                self.viewing_as = Some(id);
            }
        }
    }

    /// Follow-up navigation of a finished submission: move to `target` only
    /// if the user is still on `origin`. Returns whether the move happened.
    pub fn complete_submission(&mut self, origin: View, target: View) -> bool {
        if self.view != origin {
            return false;
        }
        self.go(target);
        true
    }

    /// Back to the dashboard with every selection cleared (login, logout).
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn require(&self, from: View, to: View) -> Result<(), NavigationError> {
        if self.view == from {
            Ok(())
        } else {
            Err(NavigationError::IllegalTransition {
                from: self.view,
                to,
            })
        }
    }

    fn leave_edit(&mut self) -> Result<View, NavigationError> {
        let list = self
            .view
            .list_view()
            .ok_or(NavigationError::NotEditing(self.view))?;
        self.go(list);
        Ok(list)
    }

    /// Every view change drops the edit selection; only `StaffVisits` keeps
    /// the impersonation.
    fn go(&mut self, to: View) {
        self.view = to;
        self.editing_staff = None;
        self.editing_retailer = None;
        if to != View::StaffVisits {
            self.viewing_as = None;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use dealer_portal_core::{RetailerId, StaffRole};

    use super::*;

    fn staff() -> Staff {
        Staff {
            id: StaffId::new("s1"),
            name: "Alice Johnson".to_string(),
            email: "alice.j@dealer.com".to_string(),
            phone: "555-111-2222".to_string(),
            role: StaffRole::Manager,
        }
    }

    fn retailer() -> Retailer {
        Retailer {
            id: RetailerId::new("1"),
            name: "John Doe".to_string(),
            business_name: "John's Gadgets".to_string(),
            phone: "123-456-7890".to_string(),
            email: "john.d@example.com".to_string(),
            address: "123 Main St".to_string(),
        }
    }

    #[test]
    fn test_starts_on_dashboard() {
        let nav = Navigator::new();
        assert_eq!(nav.view(), View::Dashboard);
        assert_eq!(nav.header_selection(), ViewAs::Dealer);
    }

    #[test]
    fn test_dashboard_hub() {
        for to in View::Dashboard.allowed_transitions() {
            let mut nav = Navigator::new();
            nav.open(*to).unwrap();
            assert_eq!(nav.view(), *to);
            nav.open(View::Dashboard).unwrap();
            assert_eq!(nav.view(), View::Dashboard);
        }
    }

    #[test]
    fn test_list_to_list_is_illegal() {
        let mut nav = Navigator::new();
        nav.open(View::ViewStaff).unwrap();
        let err = nav.open(View::ViewRetailers).unwrap_err();
        assert_eq!(
            err,
            NavigationError::IllegalTransition {
                from: View::ViewStaff,
                to: View::ViewRetailers
            }
        );
        assert_eq!(nav.view(), View::ViewStaff);
    }

    #[test]
    fn test_selection_views_cannot_be_opened() {
        let mut nav = Navigator::new();
        for view in [View::EditStaff, View::EditRetailer, View::StaffVisits] {
            assert_eq!(
                nav.open(view).unwrap_err(),
                NavigationError::MissingSelection(view)
            );
        }
        assert_eq!(nav.view(), View::Dashboard);
    }

    #[test]
    fn test_edit_staff_roundtrip() {
        let mut nav = Navigator::new();
        nav.open(View::ViewStaff).unwrap();
        nav.edit_staff(staff()).unwrap();
        assert_eq!(nav.view(), View::EditStaff);
        assert_eq!(nav.editing_staff().unwrap().id.as_str(), "s1");

        assert_eq!(nav.finish_edit().unwrap(), View::ViewStaff);
        assert!(nav.editing_staff().is_none());
    }

    #[test]
    fn test_edit_requires_matching_list() {
        let mut nav = Navigator::new();
        assert!(nav.edit_staff(staff()).is_err());
        nav.open(View::ViewStaff).unwrap();
        assert!(nav.edit_retailer(retailer()).is_err());
        assert!(nav.editing_retailer().is_none());
    }

    #[test]
    fn test_cancel_retailer_edit() {
        let mut nav = Navigator::new();
        nav.open(View::ViewRetailers).unwrap();
        nav.edit_retailer(retailer()).unwrap();
        assert_eq!(nav.cancel_edit().unwrap(), View::ViewRetailers);
        assert!(nav.editing_retailer().is_none());
    }

    #[test]
    fn test_finish_edit_outside_edit_view() {
        let mut nav = Navigator::new();
        assert_eq!(
            nav.finish_edit().unwrap_err(),
            NavigationError::NotEditing(View::Dashboard)
        );
    }

    #[test]
    fn test_view_as_staff_and_back() {
        let mut nav = Navigator::new();
        nav.open(View::ViewStaff).unwrap();
        nav.edit_staff(staff()).unwrap();

        nav.view_as(ViewAs::Staff(StaffId::new("s2")));
        assert_eq!(nav.view(), View::StaffVisits);
        assert_eq!(nav.header_selection(), ViewAs::Staff(StaffId::new("s2")));
        assert!(nav.editing_staff().is_none());

        nav.view_as(ViewAs::Dealer);
        assert_eq!(nav.view(), View::Dashboard);
        assert_eq!(nav.header_selection(), ViewAs::Dealer);
        assert!(nav.viewing_as().is_none());
    }

    #[test]
    fn test_complete_submission_only_from_origin() {
        let mut nav = Navigator::new();
        nav.open(View::CreateStaff).unwrap();
        assert!(nav.complete_submission(View::CreateStaff, View::Dashboard));
        assert_eq!(nav.view(), View::Dashboard);

        nav.open(View::ViewVisits).unwrap();
        assert!(!nav.complete_submission(View::CreateVisit, View::Dashboard));
        assert_eq!(nav.view(), View::ViewVisits);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut nav = Navigator::new();
        nav.view_as(ViewAs::Staff(StaffId::new("s3")));
        nav.reset();
        assert_eq!(nav.view(), View::Dashboard);
        assert!(nav.viewing_as().is_none());
    }

    #[test]
    fn test_view_names() {
        assert_eq!(View::StaffVisits.to_string(), "STAFF_VISITS");
        assert_eq!("view_retailers".parse::<View>().unwrap(), View::ViewRetailers);
        assert!("SETTINGS".parse::<View>().is_err());
        assert_eq!(
            serde_json::to_value(View::CreateVisit).unwrap(),
            "CREATE_VISIT"
        );
    }
}
