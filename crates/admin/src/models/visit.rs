//! Visit domain types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use dealer_portal_core::{RetailerId, StaffId, VisitId, VisitStatus};

use super::form::{FieldErrors, is_blank};

/// Date format used by the date picker and in serialized visits.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A scheduled appointment between one staff member and one retailer.
///
/// `staff_id` and `retailer_id` are not checked against the store; a visit
/// may point at an entity that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visit {
    pub id: VisitId,
    pub staff_id: StaffId,
    pub retailer_id: RetailerId,
    pub date: NaiveDate,
    pub status: VisitStatus,
}

/// Raw input of the schedule-visit form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VisitForm {
    /// Selected staff ID; empty when nothing is picked.
    pub staff_id: String,
    /// Selected retailer ID; empty when nothing is picked.
    pub retailer_id: String,
    /// Date as `YYYY-MM-DD`.
    pub date: String,
}

/// A validated visit that has not been assigned an ID yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVisit {
    pub staff_id: StaffId,
    pub retailer_id: RetailerId,
    pub date: NaiveDate,
}

impl VisitForm {
    /// Check that all three selections are made and the date is usable.
    ///
    /// `today` is the earliest date the picker allows.
    ///
    /// # Errors
    ///
    /// Returns a form-level message when a selection is missing, or a date
    /// message when the date is unreadable or in the past.
    pub fn validate(self, today: NaiveDate) -> Result<NewVisit, FieldErrors> {
        let mut errors = FieldErrors::new();

        if is_blank(&self.staff_id) || is_blank(&self.retailer_id) || is_blank(&self.date) {
            errors.add_form("All fields are required.");
            return Err(errors);
        }

        let date = match NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT) {
            Ok(date) if date < today => {
                errors.add("date", "Visit date cannot be in the past.");
                return Err(errors);
            }
            Ok(date) => date,
            Err(_) => {
                errors.add("date", "Please choose a valid date.");
                return Err(errors);
            }
        };

        Ok(NewVisit {
            staff_id: StaffId::new(self.staff_id),
            retailer_id: RetailerId::new(self.retailer_id),
            date,
        })
    }
}

impl NewVisit {
    /// Attach an ID. Every new visit starts out pending.
    #[must_use]
    pub fn with_id(self, id: VisitId) -> Visit {
        Visit {
            id,
            staff_id: self.staff_id,
            retailer_id: self.retailer_id,
            date: self.date,
            status: VisitStatus::Pending,
        }
    }
}
