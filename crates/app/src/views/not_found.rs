use dioxus::prelude::*;

use crate::routes::Route;

/// Generic not-found page. Shown both for unknown paths and for paths the
/// current role may not reach; it never says which.
#[component]
pub fn NotFoundView() -> Element {
    rsx! {
        div { class: "not-found-page",
            div { class: "not-found-card",
                div { class: "not-found-code", "404" }
                h1 { class: "not-found-title", "Page Not Found" }
                p { class: "not-found-message", "The page you requested could not be found." }
                Link { to: Route::Landing {},
                    class: "not-found-link",
                    "Back to Home"
                }
            }
        }
    }
}
