pub mod layout;

use dioxus::prelude::*;
use routing::ViewRouter;
use shared_types::{Resolution, Role, RouteParams};
use std::borrow::Cow;

use crate::session::use_session;
use crate::views::ViewOutlet;
use layout::{PublicLayout, StaffLayout};

/// Application routes.
///
/// Dioxus only captures the path; which screen a path reaches, and for
/// whom, is decided by the route table through [`ViewRouter`].
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/:..segments")]
    Portal { segments: Vec<String> },
}

#[component]
fn Landing() -> Element {
    rsx! { Resolved { path: "/".to_string() } }
}

#[component]
fn Portal(segments: Vec<String>) -> Element {
    rsx! { Resolved { path: path_of(&segments) } }
}

/// Resolve the current path against the session role and mount the result.
///
/// The role is read here, on every render, so a role change re-resolves
/// the current path before anything from the previous role is shown.
#[component]
fn Resolved(path: String) -> Element {
    let session = use_session();
    let Some(table) = routing::route_table() else {
        return rsx! {
            div { class: "portal-loading",
                p { "Loading..." }
            }
        };
    };

    let role = session.role();
    let resolution = ViewRouter::new(table).resolve(role, &path);
    let staff_chrome = uses_staff_layout(role, &resolution);
    let (view, params) = match resolution {
        Resolution::Redirect { to } => {
            navigator().replace(route_for(&to));
            return rsx! {
                div { class: "portal-loading",
                    p { "Redirecting..." }
                }
            };
        }
        Resolution::Render { view, params, .. } => (view, params),
        Resolution::NotFound => (table.fallback_view(), RouteParams::new()),
    };

    if staff_chrome {
        rsx! {
            StaffLayout { role, current_path: path.clone(), title: view.title(),
                ViewOutlet { view, params }
            }
        }
    } else {
        rsx! {
            PublicLayout {
                ViewOutlet { view, params }
            }
        }
    }
}

/// Whether a resolution mounts inside the staff layout. Signed-in staff keep
/// their sidebar on the not-found page too.
pub fn uses_staff_layout(role: Role, resolution: &Resolution) -> bool {
    match resolution {
        Resolution::Render { show_sidebar, .. } => *show_sidebar,
        Resolution::NotFound => role.is_staff(),
        Resolution::Redirect { .. } => false,
    }
}

/// Rebuild a request path from captured segments.
pub fn path_of(segments: &[String]) -> String {
    let encoded: Vec<Cow<'_, str>> = segments.iter().map(|s| urlencoding::encode(s)).collect();
    format!("/{}", encoded.join("/"))
}

/// Dioxus route for a concrete table path.
pub fn route_for(path: &str) -> Route {
    match routing::split_path(path) {
        Some(segments) if !segments.is_empty() => Route::Portal {
            segments: segments
                .into_iter()
                .map(|s| {
                    urlencoding::decode(s)
                        .map(Cow::into_owned)
                        .unwrap_or_else(|_| s.to_string())
                })
                .collect(),
        },
        _ => Route::Landing {},
    }
}
