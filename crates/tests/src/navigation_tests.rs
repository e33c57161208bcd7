use pretty_assertions::assert_eq;
use routing::nav_items_for;
use shared_types::Role;

use crate::common::{resolve, table};

fn labels(role: Role) -> Vec<String> {
    nav_items_for(table(), role)
        .into_iter()
        .map(|i| i.label)
        .collect()
}

#[test]
fn hospital_admin_sidebar_in_table_order() {
    assert_eq!(
        labels(Role::HospitalAdministrator),
        vec![
            "Dashboard",
            "Add Staff",
            "Staff Management",
            "Patient Records",
            "View Records",
            "Audit Logs",
        ]
    );
}

#[test]
fn receptionist_sidebar_skips_parameterized_routes() {
    assert_eq!(
        labels(Role::Receptionist),
        vec!["Dashboard", "Registration", "New Patient"]
    );
}

#[test]
fn every_staff_role_has_a_dashboard_entry_at_its_default() {
    for role in Role::ALL.into_iter().filter(Role::is_staff) {
        let default = table().default_path_for(role).unwrap();
        let items = nav_items_for(table(), role);
        assert!(
            items.iter().any(|i| i.path == default),
            "{role} sidebar lacks {default}"
        );
    }
}

#[test]
fn sidebar_entries_are_reachable_and_show_chrome() {
    for role in Role::ALL.into_iter().filter(Role::is_staff) {
        for item in nav_items_for(table(), role) {
            let r = resolve(role, &item.path);
            assert_eq!(r.view(), Some(item.view));
            assert!(r.show_sidebar());
        }
    }
}

#[test]
fn sidebar_never_lists_other_roles_routes() {
    for role in Role::ALL {
        for item in nav_items_for(table(), role) {
            assert!(table().permits(role, &item.path));
        }
    }
}

#[test]
fn non_staff_roles_have_no_sidebar() {
    assert!(labels(Role::Guest).is_empty());
    assert!(labels(Role::Patient).is_empty());
}
