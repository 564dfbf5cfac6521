use crate::templates::{admin_nav, mobile_layout, signup_form};
use maud::{html, Markup};

/// Admin shortcut past the request queue: the same signup form, but the
/// record goes straight onto the customer list.
pub fn add_customer_page() -> Markup {
    mobile_layout(
        "Add Customer",
        html! {
            h1 { "828 Convenient Recycling - Admin" }
            (admin_nav())

            (signup_form("Add Customer", "/admin/customers"))

            div class="page-footer" {
                a class="btn outline" href="/" { "Switch to Public Page" }
            }
        },
    )
}
