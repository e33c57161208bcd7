use serde::{Deserialize, Serialize};

use crate::{Role, ViewId};

/// Top-level route table file structure matching `routes.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RouteTableConfig {
    pub login_path: String,
    #[serde(default = "default_fallback_view")]
    pub fallback_view: ViewId,
    #[serde(default)]
    pub roles: Vec<RoleEntry>,
    #[serde(default)]
    pub routes: Vec<RouteEntry>,
}

fn default_fallback_view() -> ViewId {
    ViewId::NotFound
}

/// Per-role landing configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RoleEntry {
    pub role: Role,
    pub default_path: String,
    /// Bare namespace root (e.g. `/doctor`) that redirects to `default_path`.
    #[serde(default)]
    pub namespace: Option<String>,
}

/// One declared route.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RouteEntry {
    pub path: String,
    pub view: ViewId,
    #[serde(default)]
    pub roles: Vec<Role>,
    /// Reachable by every role, including `guest`.
    #[serde(default)]
    pub public: bool,
    /// Listed in the staff sidebar navigation.
    #[serde(default = "default_sidebar")]
    pub sidebar: bool,
    /// Sidebar label; routes without one are not listed in navigation.
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

fn default_sidebar() -> bool {
    true
}
