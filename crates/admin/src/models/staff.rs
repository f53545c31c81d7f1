//! Staff domain types.

use serde::{Deserialize, Serialize};

use dealer_portal_core::{Email, Phone, StaffId, StaffRole};

use super::form::{FieldErrors, is_blank};

/// An internal team member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    /// Unique staff ID, fixed at creation.
    pub id: StaffId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: StaffRole,
}

/// Raw input of the create/edit staff form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StaffForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: StaffRole,
}

/// A validated staff member that has not been assigned an ID yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStaff {
    pub name: String,
    pub email: Email,
    pub phone: Phone,
    pub role: StaffRole,
}

impl StaffForm {
    /// Prefill the form from an existing staff member (edit screen).
    #[must_use]
    pub fn from_staff(staff: &Staff) -> Self {
        Self {
            name: staff.name.clone(),
            email: staff.email.clone(),
            phone: staff.phone.clone(),
            role: staff.role,
        }
    }

    /// Check name, email and phone.
    ///
    /// # Errors
    ///
    /// Returns one message per failing field.
    pub fn validate(self) -> Result<NewStaff, FieldErrors> {
        let mut errors = FieldErrors::new();

        if is_blank(&self.name) {
            errors.add("name", "Name is required.");
        }
        let email = Email::parse(&self.email);
        if email.is_err() {
            errors.add("email", "Please enter a valid email address.");
        }
        let phone = Phone::parse(&self.phone);
        if phone.is_err() {
            errors.add("phone", "Please enter a valid phone number (10-15 digits).");
        }

        match (email, phone) {
            (Ok(email), Ok(phone)) if errors.is_empty() => Ok(NewStaff {
                name: self.name,
                email,
                phone,
                role: self.role,
            }),
            _ => Err(errors),
        }
    }
}

impl NewStaff {
    /// Attach an ID, producing the stored entity.
    #[must_use]
    pub fn with_id(self, id: StaffId) -> Staff {
        Staff {
            id,
            name: self.name,
            email: self.email.into_inner(),
            phone: self.phone.into_inner(),
            role: self.role,
        }
    }
}
