use dioxus::prelude::*;

mod routes;
mod session;
mod views;

use routes::Route;
use session::SessionState;

const PORTAL_CSS: Asset = asset!("/assets/portal.css");

fn main() {
    // A broken route table must stop the launch, never surface per request.
    match routing::init_route_table() {
        Ok(table) => {
            tracing::info!(
                routes = table.descriptors().len(),
                login = table.login_path(),
                "route table installed"
            );
        }
        Err(e) => {
            tracing::error!(error = %e, "route table rejected");
            panic!("invalid route table: {e}");
        }
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(SessionState::new);

    rsx! {
        document::Link { rel: "stylesheet", href: PORTAL_CSS }
        Router::<Route> {}
    }
}
