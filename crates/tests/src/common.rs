use routing::{builtin_table, RouteTable, ViewRouter};
use shared_types::{Resolution, Role};
use std::sync::LazyLock;

/// Built-in table shared by every test; it is immutable, so no locking.
static TABLE: LazyLock<RouteTable> =
    LazyLock::new(|| builtin_table().expect("built-in route table must be valid"));

pub fn table() -> &'static RouteTable {
    &TABLE
}

pub fn resolve(role: Role, path: &str) -> Resolution {
    ViewRouter::new(table()).resolve(role, path)
}

/// Concrete sample path for a pattern: parameters become `sample-<name>`.
pub fn sample_path(pattern: &str) -> String {
    pattern
        .split('/')
        .map(|seg| match seg.strip_prefix(':') {
            Some(name) => format!("sample-{name}"),
            None => seg.to_string(),
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Minimal valid table text that tests extend or break.
pub const MINIMAL: &str = r#"
login_path = "/login"

[[roles]]
role = "guest"
default_path = "/"

[[roles]]
role = "patient"
default_path = "/user"

[[roles]]
role = "receptionist"
default_path = "/staff"

[[roles]]
role = "triage"
default_path = "/staff"

[[roles]]
role = "doctor"
default_path = "/staff"

[[roles]]
role = "lab_technician"
default_path = "/staff"

[[roles]]
role = "hospital_administrator"
default_path = "/staff"

[[roles]]
role = "system_admin"
default_path = "/staff"

[[routes]]
path = "/"
view = "Home"
public = true

[[routes]]
path = "/login"
view = "Login"
public = true

[[routes]]
path = "/user"
view = "PatientPortal"
roles = ["patient"]

[[routes]]
path = "/staff"
view = "ViewRecords"
roles = ["receptionist", "triage", "doctor", "lab_technician", "hospital_administrator", "system_admin"]
"#;
