use crate::domain::customer::Customer;
use crate::errors::ServerError;
use crate::store::connection::Database;
use crate::store::{customers, kv};

pub const COLLECTION: &str = "pending";

/// Requests waiting for review, oldest first.
pub fn load(db: &Database) -> Result<Vec<Customer>, ServerError> {
    db.with_conn(|conn| kv::load_collection(conn, COLLECTION))
}

/// Queues a public signup request for admin review.
pub fn submit(db: &Database, request: Customer) -> Result<(), ServerError> {
    db.with_conn(|conn| {
        let mut pending: Vec<Customer> = kv::load_collection(conn, COLLECTION)?;
        pending.push(request);
        kv::save_collection(conn, COLLECTION, &pending)
    })
}

/// Moves a pending request onto the customer list, keeping its id and
/// fields. An id with no matching request leaves both collections alone.
pub fn approve(db: &Database, id: &str) -> Result<(), ServerError> {
    db.with_conn(|conn| {
        let mut pending: Vec<Customer> = kv::load_collection(conn, COLLECTION)?;

        let Some(pos) = pending.iter().position(|r| r.id == id) else {
            return Ok(());
        };
        let request = pending.remove(pos);

        let mut active: Vec<Customer> = kv::load_collection(conn, customers::COLLECTION)?;
        active.push(request);

        kv::save_collection(conn, customers::COLLECTION, &active)?;
        kv::save_collection(conn, COLLECTION, &pending)
    })
}
