//! Domain models for the portal.
//!
//! Each entity comes with the form that creates or edits it. Forms hold raw
//! text exactly as typed; `validate` turns them into a checked value or a set
//! of per-field messages the presentation layer shows next to the inputs.

pub mod form;
pub mod retailer;
pub mod staff;
pub mod visit;

pub use form::FieldErrors;
pub use retailer::{NewRetailer, Retailer, RetailerForm};
pub use staff::{NewStaff, Staff, StaffForm};
pub use visit::{NewVisit, Visit, VisitForm};
