use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::ViewId;

/// Named path parameters captured while matching a route pattern
/// (`/doctor/records/:patientId` → `patientId = "482"`).
pub type RouteParams = BTreeMap<String, String>;

/// Outcome of resolving one (role, path) navigation event.
///
/// Produced fresh for every event and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Resolution {
    Render {
        view: ViewId,
        show_sidebar: bool,
        #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
        params: RouteParams,
    },
    Redirect {
        to: String,
    },
    /// Generic not-found. Deliberately carries no reason so callers cannot
    /// tell a missing path from one the role may not reach.
    NotFound,
}

impl Resolution {
    pub fn redirect(to: impl Into<String>) -> Self {
        Resolution::Redirect { to: to.into() }
    }

    /// Short tag for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Resolution::Render { .. } => "render",
            Resolution::Redirect { .. } => "redirect",
            Resolution::NotFound => "not_found",
        }
    }

    pub fn view(&self) -> Option<ViewId> {
        match self {
            Resolution::Render { view, .. } => Some(*view),
            _ => None,
        }
    }

    pub fn show_sidebar(&self) -> bool {
        matches!(self, Resolution::Render { show_sidebar: true, .. })
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        match self {
            Resolution::Render { params, .. } => params.get(name).map(String::as_str),
            _ => None,
        }
    }
}
