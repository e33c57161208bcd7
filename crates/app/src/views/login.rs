use dioxus::prelude::*;
use shared_types::Role;

use crate::routes::route_for;
use crate::session::use_session;

/// Sign-in screen.
///
/// Stands in for the external session resolver: picking a role sets the
/// session role and sends the user to that role's landing page.
#[component]
pub fn LoginView() -> Element {
    let session = use_session();
    let current = session.role();

    rsx! {
        div { class: "login-page",
            div { class: "login-card",
                h1 { class: "login-title", "Sign in" }
                p { class: "login-subtitle", "Choose the account type to continue." }
                div { class: "login-roles",
                    for role in Role::ALL.into_iter().filter(Role::is_authenticated) {
                        button {
                            key: "{role}",
                            class: if role == current { "login-role selected" } else { "login-role" },
                            onclick: move |_| {
                                let mut session = session;
                                session.sign_in(role);
                                if let Some(path) = routing::route_table()
                                    .and_then(|t| t.default_path_for(role).ok())
                                {
                                    navigator().replace(route_for(path));
                                }
                            },
                            "{role.display_name()}"
                        }
                    }
                }
            }
        }
    }
}
