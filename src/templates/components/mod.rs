use maud::{html, Markup};

pub mod customer_card;
pub mod signup_form;

pub use customer_card::customer_card;
pub use signup_form::signup_form;

/// Tab row shown at the top of every admin page.
pub fn admin_nav() -> Markup {
    html! {
        nav class="tabs" {
            a class="btn" href="/admin" { "Routes" }
            a class="btn" href="/admin/add" { "Add" }
            a class="btn" href="/admin/requests" { "Requests" }
        }
    }
}
