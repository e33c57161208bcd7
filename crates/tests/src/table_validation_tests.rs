use pretty_assertions::assert_eq;
use routing::RouteTable;
use shared_types::{ConfigurationError, Role, RouteEntry, RouteTableConfig, ViewId};

use crate::common::MINIMAL;

fn minimal() -> RouteTableConfig {
    toml::from_str(MINIMAL).unwrap()
}

fn route(path: &str, view: ViewId, roles: &[Role]) -> RouteEntry {
    RouteEntry {
        path: path.to_string(),
        view,
        roles: roles.to_vec(),
        public: false,
        sidebar: true,
        label: None,
        icon: None,
    }
}

#[test]
fn minimal_table_is_valid() {
    let table = RouteTable::from_config(minimal()).unwrap();
    assert_eq!(table.descriptors().len(), 4);
}

#[test]
fn empty_allowed_roles_is_fatal() {
    let mut config = minimal();
    config.routes.push(route("/nobody", ViewId::About, &[]));
    assert_eq!(
        RouteTable::from_config(config),
        Err(ConfigurationError::EmptyAllowedRoles {
            path: "/nobody".to_string()
        })
    );
}

#[test]
fn duplicate_pattern_for_same_role_is_fatal() {
    let mut config = minimal();
    config.routes.push(route("/user", ViewId::PatientRecord, &[Role::Patient]));
    assert_eq!(
        RouteTable::from_config(config),
        Err(ConfigurationError::AmbiguousRoute {
            first: "/user".to_string(),
            second: "/user".to_string(),
            role: Role::Patient,
        })
    );
}

#[test]
fn literal_shadowed_by_param_is_fatal() {
    let mut config = minimal();
    config
        .routes
        .push(route("/records/:id", ViewId::PatientDetail, &[Role::Doctor]));
    config
        .routes
        .push(route("/records/latest", ViewId::ViewRecords, &[Role::Doctor, Role::Triage]));
    assert!(matches!(
        RouteTable::from_config(config),
        Err(ConfigurationError::AmbiguousRoute {
            role: Role::Doctor,
            ..
        })
    ));
}

#[test]
fn same_pattern_for_disjoint_roles_is_allowed() {
    let mut config = minimal();
    config
        .routes
        .push(route("/records/:id", ViewId::PatientDetail, &[Role::Doctor]));
    config
        .routes
        .push(route("/records/:id", ViewId::LabForm, &[Role::LabTechnician]));
    let table = RouteTable::from_config(config).unwrap();
    let doctor = table.match_route("/records/3", Role::Doctor).unwrap();
    let lab = table.match_route("/records/3", Role::LabTechnician).unwrap();
    assert_eq!(doctor.descriptor.view(), ViewId::PatientDetail);
    assert_eq!(lab.descriptor.view(), ViewId::LabForm);
}

#[test]
fn missing_role_default_is_fatal() {
    let mut config = minimal();
    config.roles.retain(|r| r.role != Role::Triage);
    assert_eq!(
        RouteTable::from_config(config),
        Err(ConfigurationError::MissingDefault { role: Role::Triage })
    );
}

#[test]
fn default_outside_role_set_is_fatal() {
    let mut config = minimal();
    for entry in config.roles.iter_mut().filter(|r| r.role == Role::Patient) {
        entry.default_path = "/staff".to_string();
    }
    assert_eq!(
        RouteTable::from_config(config),
        Err(ConfigurationError::DefaultNotReachable {
            role: Role::Patient,
            path: "/staff".to_string(),
        })
    );
}

#[test]
fn namespace_equal_to_route_is_fatal() {
    let mut config = minimal();
    for entry in config.roles.iter_mut().filter(|r| r.role == Role::Doctor) {
        entry.namespace = Some("/staff".to_string());
    }
    assert_eq!(
        RouteTable::from_config(config),
        Err(ConfigurationError::NamespaceShadowsRoute {
            role: Role::Doctor,
            namespace: "/staff".to_string(),
        })
    );
}

#[test]
fn invalid_pattern_is_fatal() {
    let mut config = minimal();
    config.routes.push(route("records/:id", ViewId::PatientDetail, &[Role::Doctor]));
    assert!(matches!(
        RouteTable::from_config(config),
        Err(ConfigurationError::InvalidPattern { .. })
    ));
}

#[test]
fn protected_login_path_is_fatal() {
    let mut config = minimal();
    config.login_path = "/staff".to_string();
    assert_eq!(
        RouteTable::from_config(config),
        Err(ConfigurationError::LoginNotPublic {
            path: "/staff".to_string()
        })
    );
}

#[test]
fn typo_role_fails_at_parse_time() {
    let text = MINIMAL.replace("\"patient\"]", "\"pateint\"]");
    assert!(matches!(
        RouteTable::from_toml_str(&text),
        Err(ConfigurationError::Parse(_))
    ));
}

#[test]
fn errors_render_readable_messages() {
    let mut config = minimal();
    config.roles.retain(|r| r.role != Role::SystemAdmin);
    let err = RouteTable::from_config(config).unwrap_err();
    assert_eq!(err.to_string(), "role system_admin has no default path");
}
