use shared_types::{Resolution, Role};

use crate::pattern::split_path;
use crate::table::RouteTable;

/// Turns a (role, path) navigation event into a [`Resolution`].
///
/// Holds nothing but a shared reference to the immutable table, so the same
/// router can serve any number of sessions and resolving the same pair twice
/// always yields the same result.
#[derive(Debug, Clone, Copy)]
pub struct ViewRouter<'t> {
    table: &'t RouteTable,
}

impl<'t> ViewRouter<'t> {
    pub fn new(table: &'t RouteTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'t RouteTable {
        self.table
    }

    pub fn resolve(&self, role: Role, path: &str) -> Resolution {
        let (resolution, route) = self.resolve_inner(role, path);
        tracing::debug!(
            role = role.as_str(),
            route = route.unwrap_or("-"),
            outcome = resolution.kind(),
            "resolved navigation"
        );
        resolution
    }

    /// The resolution plus the pattern that matched, if any. Only the pattern
    /// is logged, never the requested path with its parameter values.
    fn resolve_inner(&self, role: Role, path: &str) -> (Resolution, Option<&'t str>) {
        let Some(segments) = split_path(path) else {
            return (Resolution::NotFound, None);
        };

        if !role.is_authenticated() {
            return match self.table.match_segments(&segments, Role::Guest) {
                Some(m) => (
                    Resolution::Render {
                        view: m.descriptor.view(),
                        show_sidebar: false,
                        params: m.params,
                    },
                    Some(m.descriptor.path()),
                ),
                None => (Resolution::redirect(self.table.login_path()), None),
            };
        }

        if self.table.is_namespace_root(role, &segments) {
            // Landings are validated for every role at construction.
            if let Ok(default_path) = self.table.default_path_for(role) {
                return (Resolution::redirect(default_path), None);
            }
        }

        match self.table.match_segments(&segments, role) {
            Some(m) => (
                Resolution::Render {
                    view: m.descriptor.view(),
                    show_sidebar: role.is_staff(),
                    params: m.params,
                },
                Some(m.descriptor.path()),
            ),
            None => (Resolution::NotFound, None),
        }
    }
}
