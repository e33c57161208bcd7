mod dashboard;
mod login;
mod not_found;

use dioxus::prelude::*;
use shared_types::{RouteParams, ViewId};

use dashboard::DashboardShell;
use login::LoginView;
use not_found::NotFoundView;

/// Mount the leaf screen for a resolved view.
///
/// Leaf screens own their data; they only receive the captured path
/// parameters.
#[component]
pub fn ViewOutlet(view: ViewId, params: RouteParams) -> Element {
    match view {
        ViewId::Login => rsx! { LoginView {} },
        ViewId::NotFound => rsx! { NotFoundView {} },
        v if v.is_dashboard() => rsx! { DashboardShell { view: v } },
        v => rsx! { LeafPage { view: v, params } },
    }
}

/// Generic screen body for views whose content is supplied by their own
/// data sources.
#[component]
fn LeafPage(view: ViewId, params: RouteParams) -> Element {
    rsx! {
        section { class: "leaf-page",
            h2 { class: "leaf-title", "{view.title()}" }
            if !params.is_empty() {
                dl { class: "leaf-params",
                    for (name, value) in params {
                        dt { key: "{name}", "{name}" }
                        dd { "{value}" }
                    }
                }
            }
        }
    }
}
