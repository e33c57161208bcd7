use dioxus::prelude::*;
use shared_types::Role;

/// Role of the signed-in session.
///
/// Written only by the session resolver (the sign-in screen here); the
/// router reads it on every resolution and never writes it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionState {
    pub role: Signal<Role>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            role: Signal::new(Role::Guest),
        }
    }

    pub fn role(&self) -> Role {
        *self.role.read()
    }

    pub fn is_authenticated(&self) -> bool {
        self.role().is_authenticated()
    }

    pub fn sign_in(&mut self, role: Role) {
        tracing::info!(role = role.as_str(), "session role changed");
        self.role.set(role);
    }

    pub fn sign_out(&mut self) {
        tracing::info!("session signed out");
        self.role.set(Role::Guest);
    }
}

/// Hook to access session state.
pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}
