use dioxus::prelude::*;
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle};

use crate::routes::Route;

/// Join the unmatched route segments back into a path.
fn requested_path(segments: &[String]) -> String {
    format!("/{}", segments.join("/"))
}

/// 404 page for any path outside the route table.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = requested_path(&route);
    tracing::debug!(%path, "unknown route");

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            Card { class: "not-found-card",
                CardHeader {
                    CardTitle { "404 · Page Not Found" }
                    CardDescription {
                        "Nothing lives at "
                        code { "{path}" }
                        "."
                    }
                }
                CardContent {
                    Link { to: Route::Dashboard {}, class: "not-found-link", "Back to Dashboard" }
                }
            }
        }
    }
}
