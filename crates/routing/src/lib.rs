//! Role-based view routing for the hospital portal.
//!
//! [`RouteTable`] holds the validated role → route mapping, [`ViewRouter`]
//! resolves a (role, path) pair against it, and [`nav_items_for`] composes
//! the staff side navigation from the same table.

pub mod config;
pub mod nav;
pub mod pattern;
pub mod router;
pub mod table;

pub use config::{builtin_table, init_route_table, load_route_table, route_table, ROUTES_FILE_ENV};
pub use nav::{nav_items_for, NavItem};
pub use pattern::{split_path, RoutePattern, Segment};
pub use router::ViewRouter;
pub use table::{RouteDescriptor, RouteMatch, RouteTable};
