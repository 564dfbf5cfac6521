use crate::templates::{mobile_layout, signup_form};
use maud::{html, Markup};

/// The page the business hands out: a signup form and nothing else.
/// `submitted` turns on the confirmation notice after a request lands.
pub fn public_page(submitted: bool) -> Markup {
    mobile_layout(
        "828 Convenient Recycling",
        html! {
            h1 { "828 Convenient Recycling" }
            p class="lead" { "Free aluminum can pickup in the 828 area" }

            @if submitted {
                div class="notice" { "Request sent to 828 Convenient Recycling!" }
            }

            (signup_form("Request Your Free Bin", "/requests"))

            div class="page-footer" {
                // Plain navigation; the admin pages carry no credential check.
                a class="btn outline" href="/admin" { "Admin Login" }
            }
        },
    )
}
