//! Print the sample data.

use serde::Serialize;

use dealer_portal_admin::models::{Retailer, Staff, Visit};
use dealer_portal_admin::store::seed;

#[derive(Serialize)]
struct SampleData {
    retailers: Vec<Retailer>,
    staff: Vec<Staff>,
    visits: Vec<Visit>,
}

/// Print the sample retailers, staff and visits as pretty JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn print() -> Result<(), serde_json::Error> {
    let data = SampleData {
        retailers: seed::sample_retailers(),
        staff: seed::sample_staff(),
        visits: seed::sample_visits(),
    };
    let json = serde_json::to_string_pretty(&data)?;

    #[allow(clippy::print_stdout)]
    {
        println!("{json}");
    }
    Ok(())
}
