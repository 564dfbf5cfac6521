use crate::domain::customer::Customer;
use crate::templates::{admin_nav, mobile_layout};
use maud::{html, Markup};

/// The review queue. Approving moves the request onto the customer list.
pub fn pending_page(pending: &[Customer]) -> Markup {
    mobile_layout(
        "New Requests",
        html! {
            h1 { "828 Convenient Recycling - Admin" }
            (admin_nav())

            h2 { "New Requests" }

            @if pending.is_empty() {
                div class="empty" { "No new requests" }
            }

            @for request in pending {
                div class="card" {
                    div class="card-title" { (request.name) }
                    div class="card-line" { (request.address) }
                    div class="card-line" { (request.schedule) }

                    form method="post" action=(format!("/admin/requests/{}/approve", request.id)) {
                        button type="submit" class="btn primary" { "Approve Customer" }
                    }
                }
            }

            div class="page-footer" {
                a class="btn outline" href="/" { "Switch to Public Page" }
            }
        },
    )
}
