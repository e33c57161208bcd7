use pretty_assertions::assert_eq;
use shared_types::{Role, ViewId};

use crate::common::{sample_path, table};

#[test]
fn every_descriptor_for_a_role_matches_for_that_role() {
    for role in Role::ALL {
        for d in table().descriptors_for(role) {
            let path = sample_path(d.path());
            let m = table()
                .match_route(&path, role)
                .unwrap_or_else(|| panic!("{role} cannot match its own {path}"));
            assert_eq!(m.descriptor.view(), d.view());
        }
    }
}

#[test]
fn every_default_path_is_reachable() {
    for role in Role::ALL {
        let default = table().default_path_for(role).unwrap();
        assert!(table().match_route(default, role).is_some(), "{role} -> {default}");
    }
}

#[test]
fn guest_descriptors_are_exactly_the_public_pages() {
    let views: Vec<ViewId> = table()
        .descriptors_for(Role::Guest)
        .iter()
        .map(|d| d.view())
        .collect();
    assert_eq!(
        views,
        vec![
            ViewId::Home,
            ViewId::Department,
            ViewId::About,
            ViewId::Contact,
            ViewId::ShowDoctor,
            ViewId::Login,
        ]
    );
}

#[test]
fn public_descriptors_are_in_every_role_set() {
    let public = table().public_descriptors();
    for role in Role::ALL {
        let set = table().descriptors_for(role);
        for d in &public {
            assert!(set.contains(d), "{role} is missing public {}", d.path());
        }
    }
}

#[test]
fn no_descriptor_has_empty_roles() {
    assert!(table()
        .descriptors()
        .iter()
        .all(|d| !d.allowed_roles().is_empty()));
}

#[test]
fn parameterized_descriptors_capture_their_names() {
    for d in table().descriptors().iter().filter(|d| d.pattern().has_params()) {
        let path = sample_path(d.path());
        let role = *d.allowed_roles().iter().next().unwrap();
        let m = table().match_route(&path, role).unwrap();
        for (name, value) in &m.params {
            assert_eq!(value, &format!("sample-{name}"));
        }
        assert!(!m.params.is_empty());
    }
}

#[test]
fn login_and_fallback() {
    assert_eq!(table().login_path(), "/login");
    assert_eq!(table().fallback_view(), ViewId::NotFound);
}
