use crate::errors::ServerError;
use crate::store::connection::Database;
use crate::store::kv;

pub const COLLECTION: &str = "completed";

/// Ids of customers whose pickup is marked done for the current cycle.
pub fn load(db: &Database) -> Result<Vec<String>, ServerError> {
    db.with_conn(|conn| kv::load_collection(conn, COLLECTION))
}

/// Flips the completed marker for one id: add if absent, remove if present.
/// Ids are not checked against the customer list.
pub fn toggle(db: &Database, id: &str) -> Result<(), ServerError> {
    db.with_conn(|conn| {
        let mut completed: Vec<String> = kv::load_collection(conn, COLLECTION)?;

        if completed.iter().any(|c| c == id) {
            completed.retain(|c| c != id);
        } else {
            completed.push(id.to_string());
        }

        kv::save_collection(conn, COLLECTION, &completed)
    })
}
