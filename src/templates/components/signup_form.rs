use crate::domain::customer::{BIN_SIZES, DEFAULT_BIN_SIZE, DEFAULT_SCHEDULE, SCHEDULES};
use maud::{html, Markup};

/// The signup form, shared between the public page and the admin add view;
/// the two differ only in heading and submit target. Every render starts
/// from the draft defaults.
pub fn signup_form(title: &str, action: &str) -> Markup {
    html! {
        form class="signup" method="post" action=(action) {
            h2 { (title) }

            input name="name" placeholder="Full Name";
            input name="address" placeholder="Service Address";
            input name="phone" placeholder="Phone Number";

            select name="bin_size" {
                @for size in BIN_SIZES {
                    option value=(size) selected[size == DEFAULT_BIN_SIZE] { (size) }
                }
            }

            select name="schedule" {
                @for schedule in SCHEDULES {
                    option value=(schedule) selected[schedule == DEFAULT_SCHEDULE] { (schedule) }
                }
            }

            textarea name="notes" placeholder="Gate code / where to leave bin" {}

            button type="submit" class="btn primary" { "Submit Request" }
        }
    }
}
