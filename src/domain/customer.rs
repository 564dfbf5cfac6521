use base64::Engine;
use rand::{rngs::OsRng, RngCore};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Bin options offered on the signup form.
pub const BIN_SIZES: [&str; 4] = [
    "32 Gallon",
    "55 Gallon",
    "96 Gallon",
    "Brewery / Commercial",
];

/// Pickup schedules, in route display order.
pub const SCHEDULES: [&str; 4] = ["Weekly", "Bi-Weekly", "Monthly", "On Call"];

// Draft defaults for a fresh signup form.
pub const DEFAULT_BIN_SIZE: &str = "55 Gallon";
pub const DEFAULT_SCHEDULE: &str = "Weekly";

/// One service stop. The same shape is used for approved customers and for
/// signup requests still waiting in the review queue.
///
/// `bin_size` and `schedule` are plain strings, not closed enums: stored
/// data may carry values outside the offered options and must load and
/// round-trip unchanged. Route grouping skips unrecognized schedules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub bin_size: String,
    pub schedule: String,
    #[serde(default)]
    pub notes: String,
}

impl Customer {
    /// Builds a record straight from submitted form fields, with a fresh id.
    /// Text fields are taken as-is, empty included; every request is looked
    /// over by a human before it reaches a route. Missing selector fields
    /// fall back to the draft defaults.
    pub fn from_form(form: &HashMap<String, String>) -> Self {
        let text = |name: &str| form.get(name).cloned().unwrap_or_default();

        Customer {
            id: new_customer_id(),
            name: text("name"),
            address: text("address"),
            phone: text("phone"),
            bin_size: form
                .get("bin_size")
                .cloned()
                .unwrap_or_else(|| DEFAULT_BIN_SIZE.to_string()),
            schedule: form
                .get("schedule")
                .cloned()
                .unwrap_or_else(|| DEFAULT_SCHEDULE.to_string()),
            notes: text("notes"),
        }
    }
}

/// Random URL-safe identifier, fine to embed in form action paths as-is.
pub fn new_customer_id() -> String {
    let mut raw = [0u8; 8];
    OsRng.fill_bytes(&mut raw);

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(raw)
}
