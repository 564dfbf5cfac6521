pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{admin_nav, customer_card, signup_form};
pub use layouts::mobile::mobile_layout;
