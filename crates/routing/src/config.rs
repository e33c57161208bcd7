use shared_types::ConfigurationError;
use std::sync::OnceLock;

use crate::table::RouteTable;

static TABLE: OnceLock<RouteTable> = OnceLock::new();

/// Route table compiled into the binary.
const BUILTIN_ROUTES: &str = include_str!("../routes.toml");

/// Environment variable naming a replacement route table file.
pub const ROUTES_FILE_ENV: &str = "PORTAL_ROUTES_FILE";

/// Parse and validate the embedded route table.
pub fn builtin_table() -> Result<RouteTable, ConfigurationError> {
    RouteTable::from_toml_str(BUILTIN_ROUTES)
}

/// Load the route table for this process.
///
/// Uses the file named by `PORTAL_ROUTES_FILE` when set (not available on
/// wasm), otherwise the embedded table. An unreadable or invalid override is
/// an error; it never falls back to the embedded table.
pub fn load_route_table() -> Result<RouteTable, ConfigurationError> {
    if let Some(table) = load_override()? {
        return Ok(table);
    }
    let table = builtin_table()?;
    tracing::info!(source = "builtin", routes = table.descriptors().len(), "route table loaded");
    Ok(table)
}

#[cfg(not(target_arch = "wasm32"))]
fn load_override() -> Result<Option<RouteTable>, ConfigurationError> {
    let Ok(path) = std::env::var(ROUTES_FILE_ENV) else {
        return Ok(None);
    };
    let text = std::fs::read_to_string(&path).map_err(|e| ConfigurationError::Io {
        path: path.clone(),
        message: e.to_string(),
    })?;
    let table = RouteTable::from_toml_str(&text)?;
    tracing::info!(source = %path, routes = table.descriptors().len(), "route table loaded");
    Ok(Some(table))
}

#[cfg(target_arch = "wasm32")]
fn load_override() -> Result<Option<RouteTable>, ConfigurationError> {
    Ok(None)
}

/// Load and install the process-wide route table. Only the first successful
/// call has effect; later calls return the installed table.
pub fn init_route_table() -> Result<&'static RouteTable, ConfigurationError> {
    if let Some(table) = TABLE.get() {
        return Ok(table);
    }
    let table = load_route_table()?;
    Ok(TABLE.get_or_init(|| table))
}

/// The installed table, if `init_route_table` has succeeded.
pub fn route_table() -> Option<&'static RouteTable> {
    TABLE.get()
}
