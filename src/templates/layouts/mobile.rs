use maud::{html, Markup, DOCTYPE};

/// Single-column shell shared by every page. The whole app is meant to be
/// used from a phone on the route, so there is no wide-screen chrome.
pub fn mobile_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                main class="container" {
                    (content)
                }
            }
        }
    }
}
