use shared_types::{Role, ViewId};

use crate::pattern::split_path;
use crate::table::RouteTable;

/// One entry of the staff side navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: String,
    pub path: String,
    pub view: ViewId,
    pub icon: Option<String>,
}

impl NavItem {
    /// Highlight when the current path is this item or lies beneath it.
    pub fn is_active(&self, current_path: &str) -> bool {
        let (Some(item), Some(current)) = (split_path(&self.path), split_path(current_path)) else {
            return false;
        };
        current.len() >= item.len() && current[..item.len()] == item[..]
    }
}

/// Sidebar entries for `role`, in table order.
///
/// Only labelled, parameter-free routes that carry the chrome and are not
/// public are listed; public pages belong to the site header instead.
pub fn nav_items_for(table: &RouteTable, role: Role) -> Vec<NavItem> {
    table
        .descriptors_for(role)
        .into_iter()
        .filter(|d| !d.is_public() && d.requires_sidebar() && !d.pattern().has_params())
        .filter_map(|d| {
            d.label().map(|label| NavItem {
                label: label.to_string(),
                path: d.path().to_string(),
                view: d.view(),
                icon: d.icon().map(str::to_string),
            })
        })
        .collect()
}
