use crate::domain::logic::ScheduleGroup;
use crate::templates::{admin_nav, customer_card, mobile_layout};
use maud::{html, Markup};

pub struct RoutesVm {
    pub groups: Vec<ScheduleGroup>,
    pub completed: Vec<String>,
}

/// The route list: one section per schedule, a card per customer.
pub fn routes_page(vm: &RoutesVm) -> Markup {
    mobile_layout(
        "Routes",
        html! {
            h1 { "828 Convenient Recycling - Admin" }
            (admin_nav())

            @for group in &vm.groups {
                section class="route" {
                    h2 { (group.label) " Route" }

                    @if group.customers.is_empty() {
                        div class="empty" { "No customers" }
                    }

                    @for customer in &group.customers {
                        (customer_card(customer, vm.completed.iter().any(|id| id == &customer.id)))
                    }
                }
            }

            div class="page-footer" {
                a class="btn outline" href="/" { "Switch to Public Page" }
            }
        },
    )
}
