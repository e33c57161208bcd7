use std::fmt;

use crate::Role;

/// Route table construction failure.
///
/// Raised once while building the table at startup and always fatal; a
/// table that fails any of these checks is never installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The configuration text could not be deserialized (bad TOML, unknown
    /// role or view name, unknown field).
    Parse(String),
    /// The configuration file could not be read.
    Io { path: String, message: String },
    InvalidPattern { pattern: String, reason: String },
    EmptyAllowedRoles { path: String },
    /// Two patterns can match the same concrete path for a shared role.
    AmbiguousRoute {
        first: String,
        second: String,
        role: Role,
    },
    MissingDefault { role: Role },
    DuplicateRoleEntry { role: Role },
    DefaultNotReachable { role: Role, path: String },
    DefaultNotConcrete { role: Role, path: String },
    NamespaceShadowsRoute { role: Role, namespace: String },
    LoginNotPublic { path: String },
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationError::Parse(msg) => write!(f, "invalid route table: {msg}"),
            ConfigurationError::Io { path, message } => {
                write!(f, "cannot read route table {path}: {message}")
            }
            ConfigurationError::InvalidPattern { pattern, reason } => {
                write!(f, "invalid route pattern {pattern:?}: {reason}")
            }
            ConfigurationError::EmptyAllowedRoles { path } => {
                write!(f, "route {path:?} allows no roles")
            }
            ConfigurationError::AmbiguousRoute {
                first,
                second,
                role,
            } => write!(
                f,
                "routes {first:?} and {second:?} overlap for role {role}"
            ),
            ConfigurationError::MissingDefault { role } => {
                write!(f, "role {role} has no default path")
            }
            ConfigurationError::DuplicateRoleEntry { role } => {
                write!(f, "role {role} is configured more than once")
            }
            ConfigurationError::DefaultNotReachable { role, path } => {
                write!(f, "default path {path:?} is not reachable by role {role}")
            }
            ConfigurationError::DefaultNotConcrete { role, path } => write!(
                f,
                "default path {path:?} for role {role} must not contain parameters"
            ),
            ConfigurationError::NamespaceShadowsRoute { role, namespace } => write!(
                f,
                "namespace {namespace:?} for role {role} shadows a declared route"
            ),
            ConfigurationError::LoginNotPublic { path } => {
                write!(f, "login path {path:?} is not a public route")
            }
        }
    }
}

impl std::error::Error for ConfigurationError {}
