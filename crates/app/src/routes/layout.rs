use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBriefcase, LdClock, LdFileText, LdFolder, LdLayoutDashboard, LdSearch, LdShield,
    LdUserCheck, LdUsers,
};
use dioxus_free_icons::Icon;
use routing::nav_items_for;
use shared_types::{Role, ViewId};

use super::{route_for, Route};
use crate::session::use_session;

/// Staff layout: side navigation composed from the route table plus a top bar.
#[component]
pub fn StaffLayout(
    role: Role,
    current_path: String,
    title: &'static str,
    children: Element,
) -> Element {
    let mut session = use_session();
    let entries: Vec<_> = routing::route_table()
        .map(|table| nav_items_for(table, role))
        .unwrap_or_default()
        .into_iter()
        .map(|item| {
            let class = if item.is_active(&current_path) {
                "sidebar-item active"
            } else {
                "sidebar-item"
            };
            (item, class)
        })
        .collect();

    rsx! {
        div { class: "staff-shell",
            aside { class: "sidebar",
                div { class: "sidebar-brand",
                    span { class: "sidebar-brand-name", "Arada Hospital" }
                    span { class: "sidebar-role", "{role.display_name()}" }
                }
                nav { class: "sidebar-menu",
                    for (item, class) in entries {
                        Link {
                            key: "{item.path}",
                            to: route_for(&item.path),
                            class: class,
                            NavIcon { name: item.icon.clone() }
                            span { "{item.label}" }
                        }
                    }
                }
                div { class: "sidebar-footer",
                    button {
                        class: "sidebar-signout",
                        onclick: move |_| {
                            session.sign_out();
                            navigator().replace(Route::Landing {});
                        },
                        "Sign out"
                    }
                }
            }
            main { class: "staff-main",
                header { class: "staff-topbar",
                    h1 { class: "staff-title", "{title}" }
                }
                div { class: "staff-content", {children} }
            }
        }
    }
}

/// Public layout: site header with the public pages and a sign-in link.
#[component]
pub fn PublicLayout(children: Element) -> Element {
    let session = use_session();
    let links: Vec<(String, ViewId)> = routing::route_table()
        .map(|table| {
            table
                .public_descriptors()
                .into_iter()
                .filter(|d| !d.pattern().has_params() && d.view() != ViewId::Login)
                .map(|d| (d.path().to_string(), d.view()))
                .collect()
        })
        .unwrap_or_default();
    let login_path = routing::route_table()
        .map(|t| t.login_path().to_string())
        .unwrap_or_else(|| "/login".to_string());

    rsx! {
        div { class: "public-shell",
            header { class: "public-header",
                span { class: "public-brand", "Arada Hospital" }
                nav { class: "public-nav",
                    for (path, view) in links {
                        Link { key: "{path}", to: route_for(&path), "{view.title()}" }
                    }
                }
                if !session.is_authenticated() {
                    Link { class: "public-signin", to: route_for(&login_path), "Sign in" }
                }
            }
            main { class: "public-main", {children} }
        }
    }
}

#[component]
fn NavIcon(name: Option<String>) -> Element {
    match name.as_deref() {
        Some("dashboard") => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 } },
        Some("users") => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
        Some("user-check") => rsx! { Icon::<LdUserCheck> { icon: LdUserCheck, width: 18, height: 18 } },
        Some("folder") => rsx! { Icon::<LdFolder> { icon: LdFolder, width: 18, height: 18 } },
        Some("file") => rsx! { Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 } },
        Some("shield") => rsx! { Icon::<LdShield> { icon: LdShield, width: 18, height: 18 } },
        Some("search") => rsx! { Icon::<LdSearch> { icon: LdSearch, width: 18, height: 18 } },
        Some("clock") => rsx! { Icon::<LdClock> { icon: LdClock, width: 18, height: 18 } },
        Some("briefcase") => rsx! { Icon::<LdBriefcase> { icon: LdBriefcase, width: 18, height: 18 } },
        _ => rsx! {},
    }
}
