use shared_types::{ConfigurationError, Role, RouteParams, RouteTableConfig, ViewId};
use std::collections::{BTreeMap, BTreeSet};

use crate::pattern::{split_path, RoutePattern};

/// A validated route: pattern, view, and the roles allowed to reach it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDescriptor {
    pattern: RoutePattern,
    view: ViewId,
    allowed_roles: BTreeSet<Role>,
    requires_sidebar: bool,
    label: Option<String>,
    icon: Option<String>,
}

impl RouteDescriptor {
    pub fn path(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }

    pub fn view(&self) -> ViewId {
        self.view
    }

    pub fn allowed_roles(&self) -> &BTreeSet<Role> {
        &self.allowed_roles
    }

    pub fn allows(&self, role: Role) -> bool {
        self.allowed_roles.contains(&role)
    }

    /// Public routes are reachable without signing in.
    pub fn is_public(&self) -> bool {
        self.allows(Role::Guest)
    }

    /// Whether the route is listed in the staff sidebar. Chrome visibility
    /// itself depends only on the role.
    pub fn requires_sidebar(&self) -> bool {
        self.requires_sidebar
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }
}

/// A successful lookup: the descriptor plus the captured parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'t> {
    pub descriptor: &'t RouteDescriptor,
    pub params: RouteParams,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Landing {
    default_path: String,
    namespace: Option<RoutePattern>,
}

/// Role-indexed route table, validated once at construction and read-only
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    descriptors: Vec<RouteDescriptor>,
    landings: BTreeMap<Role, Landing>,
    login_path: String,
    fallback_view: ViewId,
}

impl RouteTable {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigurationError> {
        let config: RouteTableConfig =
            toml::from_str(text).map_err(|e| ConfigurationError::Parse(e.to_string()))?;
        Self::from_config(config)
    }

    /// Build and validate a table. Every invariant is checked here so that
    /// resolution never has to fail.
    pub fn from_config(config: RouteTableConfig) -> Result<Self, ConfigurationError> {
        let mut descriptors = Vec::with_capacity(config.routes.len());
        for entry in config.routes {
            let pattern = RoutePattern::parse(&entry.path)?;
            let allowed_roles: BTreeSet<Role> = if entry.public {
                Role::ALL.into_iter().collect()
            } else {
                entry.roles.into_iter().collect()
            };
            if allowed_roles.is_empty() {
                return Err(ConfigurationError::EmptyAllowedRoles { path: entry.path });
            }
            descriptors.push(RouteDescriptor {
                pattern,
                view: entry.view,
                allowed_roles,
                requires_sidebar: entry.sidebar,
                label: entry.label,
                icon: entry.icon,
            });
        }
        check_unambiguous(&descriptors)?;

        let mut table = Self {
            descriptors,
            landings: BTreeMap::new(),
            login_path: config.login_path,
            fallback_view: config.fallback_view,
        };

        let login_is_public = split_path(&table.login_path)
            .and_then(|segments| table.match_segments(&segments, Role::Guest))
            .is_some();
        if !login_is_public {
            return Err(ConfigurationError::LoginNotPublic {
                path: table.login_path,
            });
        }

        for entry in config.roles {
            let role = entry.role;
            if table.landings.contains_key(&role) {
                return Err(ConfigurationError::DuplicateRoleEntry { role });
            }

            let default_pattern = RoutePattern::parse(&entry.default_path)?;
            if default_pattern.has_params() {
                return Err(ConfigurationError::DefaultNotConcrete {
                    role,
                    path: entry.default_path,
                });
            }
            if table.match_route(&entry.default_path, role).is_none() {
                return Err(ConfigurationError::DefaultNotReachable {
                    role,
                    path: entry.default_path,
                });
            }

            let namespace = match entry.namespace {
                Some(ns) => {
                    let pattern = RoutePattern::parse(&ns)?;
                    if pattern.has_params() || table.match_route(&ns, role).is_some() {
                        return Err(ConfigurationError::NamespaceShadowsRoute {
                            role,
                            namespace: ns,
                        });
                    }
                    Some(pattern)
                }
                None => None,
            };

            table.landings.insert(
                role,
                Landing {
                    default_path: entry.default_path,
                    namespace,
                },
            );
        }

        if let Some(role) = Role::ALL
            .into_iter()
            .find(|r| !table.landings.contains_key(r))
        {
            return Err(ConfigurationError::MissingDefault { role });
        }

        Ok(table)
    }

    /// All descriptors in registration order.
    pub fn descriptors(&self) -> &[RouteDescriptor] {
        &self.descriptors
    }

    /// Descriptors reachable by `role`, in registration order. Public
    /// descriptors allow every role, so they are always included; for
    /// `Guest` this is the public set alone.
    pub fn descriptors_for(&self, role: Role) -> Vec<&RouteDescriptor> {
        self.descriptors.iter().filter(|d| d.allows(role)).collect()
    }

    pub fn public_descriptors(&self) -> Vec<&RouteDescriptor> {
        self.descriptors_for(Role::Guest)
    }

    pub fn default_path_for(&self, role: Role) -> Result<&str, ConfigurationError> {
        self.landings
            .get(&role)
            .map(|l| l.default_path.as_str())
            .ok_or(ConfigurationError::MissingDefault { role })
    }

    pub fn namespace_for(&self, role: Role) -> Option<&str> {
        self.landings
            .get(&role)
            .and_then(|l| l.namespace.as_ref())
            .map(RoutePattern::as_str)
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    pub fn fallback_view(&self) -> ViewId {
        self.fallback_view
    }

    /// The first descriptor whose pattern matches `path` and which allows
    /// `role`. Malformed paths never match.
    pub fn match_route(&self, path: &str, role: Role) -> Option<RouteMatch<'_>> {
        let segments = split_path(path)?;
        self.match_segments(&segments, role)
    }

    /// Whether `role` may reach `path`. Backing services can reuse this for
    /// their own authorization check.
    pub fn permits(&self, role: Role, path: &str) -> bool {
        self.match_route(path, role).is_some()
    }

    pub(crate) fn match_segments(&self, segments: &[&str], role: Role) -> Option<RouteMatch<'_>> {
        self.descriptors
            .iter()
            .filter(|d| d.allows(role))
            .find_map(|d| {
                d.pattern.match_segments(segments).map(|params| RouteMatch {
                    descriptor: d,
                    params,
                })
            })
    }

    pub(crate) fn is_namespace_root(&self, role: Role, segments: &[&str]) -> bool {
        self.landings
            .get(&role)
            .and_then(|l| l.namespace.as_ref())
            .is_some_and(|ns| ns.match_segments(segments).is_some())
    }
}

fn check_unambiguous(descriptors: &[RouteDescriptor]) -> Result<(), ConfigurationError> {
    for (i, first) in descriptors.iter().enumerate() {
        for second in &descriptors[i + 1..] {
            if !first.pattern.overlaps(&second.pattern) {
                continue;
            }
            if let Some(role) = first.allowed_roles.intersection(&second.allowed_roles).next() {
                return Err(ConfigurationError::AmbiguousRoute {
                    first: first.path().to_string(),
                    second: second.path().to_string(),
                    role: *role,
                });
            }
        }
    }
    Ok(())
}
