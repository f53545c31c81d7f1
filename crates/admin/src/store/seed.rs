//! Sample data a fresh portal starts with.

use chrono::NaiveDate;

use dealer_portal_core::{RetailerId, StaffId, StaffRole, VisitId, VisitStatus};

use crate::models::{Retailer, Staff, Visit};

fn retailer(
    id: &str,
    name: &str,
    business_name: &str,
    phone: &str,
    email: &str,
    address: &str,
) -> Retailer {
    Retailer {
        id: RetailerId::new(id),
        name: name.to_string(),
        business_name: business_name.to_string(),
        phone: phone.to_string(),
        email: email.to_string(),
        address: address.to_string(),
    }
}

fn staff(id: &str, name: &str, email: &str, phone: &str, role: StaffRole) -> Staff {
    Staff {
        id: StaffId::new(id),
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        role,
    }
}

fn visit(id: &str, staff_id: &str, retailer_id: &str, date: NaiveDate, status: VisitStatus) -> Visit {
    Visit {
        id: VisitId::new(id),
        staff_id: StaffId::new(staff_id),
        retailer_id: RetailerId::new(retailer_id),
        date,
        status,
    }
}

/// Sample retailers `1`, `2` and `3`.
#[must_use]
pub fn sample_retailers() -> Vec<Retailer> {
    vec![
        retailer(
            "1",
            "John Doe",
            "John's Gadgets",
            "123-456-7890",
            "john.d@example.com",
            "123 Main St, Anytown, USA 12345",
        ),
        retailer(
            "2",
            "Jane Smith",
            "Smith's Electronics",
            "098-765-4321",
            "jane.s@example.com",
            "456 Oak Ave, Sometown, USA 54321",
        ),
        retailer(
            "3",
            "Sam Wilson",
            "Innovate Solutions",
            "555-123-4567",
            "sam.w@example.com",
            "789 Pine Rd, Techville, USA 67890",
        ),
    ]
}

/// Sample staff `s1`, `s2` and `s3`.
#[must_use]
pub fn sample_staff() -> Vec<Staff> {
    vec![
        staff("s1", "Alice Johnson", "alice.j@dealer.com", "555-111-2222", StaffRole::Manager),
        staff("s2", "Bob Williams", "bob.w@dealer.com", "555-333-4444", StaffRole::Sales),
        staff("s3", "Charlie Brown", "charlie.b@dealer.com", "555-555-6666", StaffRole::Support),
    ]
}

/// Sample visits `v1`, `v2` and `v3`, already in date order.
#[must_use]
pub fn sample_visits() -> Vec<Visit> {
    // Literal dates are all valid.
    let date = |m, d| NaiveDate::from_ymd_opt(2024, m, d).unwrap_or_default();
    vec![
        visit("v1", "s2", "1", date(8, 15), VisitStatus::Completed),
        visit("v2", "s3", "2", date(8, 18), VisitStatus::Pending),
        visit("v3", "s2", "3", date(8, 22), VisitStatus::Pending),
    ]
}
