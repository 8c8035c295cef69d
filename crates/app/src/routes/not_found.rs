use dioxus::prelude::*;

use crate::routes::Route;

/// 404 page for anything but the join form.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            h1 { class: "not-found-title", "Nothing here" }
            p { class: "not-found-message",
                code { "{path}" }
                " is not a page."
            }
            Link { to: Route::JoinPage {}, class: "not-found-link", "Join the queue" }
        }
    }
}
