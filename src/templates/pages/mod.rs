pub mod add_customer;
pub mod pending;
pub mod public;
pub mod routes;

pub use add_customer::add_customer_page;
pub use pending::pending_page;
pub use public::public_page;
pub use routes::{routes_page, RoutesVm};
