use crate::domain::customer::Customer;
use crate::maps::map_search_url;
use maud::{html, Markup};

/// One stop on a route: who, where, which bin, plus the map link and the
/// completion toggle.
pub fn customer_card(customer: &Customer, completed: bool) -> Markup {
    html! {
        div class="card" {
            div class="card-row" {
                div {
                    div class="card-title" { (customer.name) }
                    div class="card-line" { (customer.address) }
                    div class="card-line" { (customer.bin_size) }
                }
                div class="card-actions" {
                    a class="btn" href=(map_search_url(&customer.address)) target="_blank" rel="noopener" {
                        "Map"
                    }
                    form method="post" action=(format!("/admin/customers/{}/complete", customer.id)) {
                        button type="submit" class="btn" { "Done" }
                    }
                }
            }

            @if !customer.notes.is_empty() {
                div class="card-notes" { "Notes: " (customer.notes) }
            }

            @if completed {
                div class="card-status" { "Pickup Completed" }
            }
        }
    }
}
