//! Retailer domain types.

use serde::{Deserialize, Serialize};

use dealer_portal_core::{Email, RetailerId};

use super::form::{FieldErrors, is_blank};

/// An external retail partner.
///
/// Apart from the ID every field is free text, stored as entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Retailer {
    /// Unique retailer ID, fixed at creation.
    pub id: RetailerId,
    /// Contact person.
    pub name: String,
    /// Trading name shown in lists and messages.
    pub business_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

/// Raw input of the create/edit retailer form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RetailerForm {
    pub name: String,
    pub business_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

/// A validated retailer that has not been assigned an ID yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRetailer {
    pub name: String,
    pub business_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl RetailerForm {
    /// Prefill the form from an existing retailer (edit screen).
    #[must_use]
    pub fn from_retailer(retailer: &Retailer) -> Self {
        Self {
            name: retailer.name.clone(),
            business_name: retailer.business_name.clone(),
            phone: retailer.phone.clone(),
            email: retailer.email.clone(),
            address: retailer.address.clone(),
        }
    }

    /// Check that every field is filled in and the email is well formed.
    ///
    /// # Errors
    ///
    /// Returns one message per failing field.
    pub fn validate(self) -> Result<NewRetailer, FieldErrors> {
        let mut errors = FieldErrors::new();

        if is_blank(&self.business_name) {
            errors.add("businessName", "Business name is required.");
        }
        if is_blank(&self.name) {
            errors.add("name", "Contact name is required.");
        }
        if is_blank(&self.phone) {
            errors.add("phone", "Phone number is required.");
        }
        if Email::parse(&self.email).is_err() {
            errors.add("email", "Please enter a valid email address.");
        }
        if is_blank(&self.address) {
            errors.add("address", "Address is required.");
        }

        errors.into_result(|| NewRetailer {
            name: self.name,
            business_name: self.business_name,
            phone: self.phone,
            email: self.email,
            address: self.address,
        })
    }
}

impl NewRetailer {
    /// Attach an ID, producing the stored entity.
    #[must_use]
    pub fn with_id(self, id: RetailerId) -> Retailer {
        Retailer {
            id,
            name: self.name,
            business_name: self.business_name,
            phone: self.phone,
            email: self.email,
            address: self.address,
        }
    }
}
