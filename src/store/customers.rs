use crate::domain::customer::Customer;
use crate::errors::ServerError;
use crate::store::connection::Database;
use crate::store::kv;

pub const COLLECTION: &str = "customers";

/// The active customer list, in the order customers were added.
pub fn load(db: &Database) -> Result<Vec<Customer>, ServerError> {
    db.with_conn(|conn| kv::load_collection(conn, COLLECTION))
}

/// Appends a customer the admin entered directly, skipping the request queue.
pub fn add(db: &Database, customer: Customer) -> Result<(), ServerError> {
    db.with_conn(|conn| {
        let mut customers: Vec<Customer> = kv::load_collection(conn, COLLECTION)?;
        customers.push(customer);
        kv::save_collection(conn, COLLECTION, &customers)
    })
}
