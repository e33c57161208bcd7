use dioxus::prelude::*;
use shared_types::ViewId;

/// Panel titles making up each role's landing dashboard.
fn panels_for(view: ViewId) -> &'static [&'static str] {
    match view {
        ViewId::HospitalAdminDashboard => &[
            "Registered Users",
            "Staff Members",
            "Departments",
            "Total Beds",
        ],
        ViewId::ReceptionistDashboard => &[
            "Registered Today",
            "Waiting for Triage",
            "Returning Patients",
        ],
        ViewId::TriageDashboard => &["Unassigned Patients", "Processed Today", "Critical Cases"],
        ViewId::DoctorDashboard => &[
            "Assigned Patients",
            "Pending Lab Results",
            "Completed Today",
        ],
        ViewId::LabDashboard => &["Open Requests", "Completed Tests", "Awaiting Samples"],
        ViewId::SystemAdminDashboard => &["Hospitals", "User Accounts", "Active Sessions"],
        _ => &[],
    }
}

/// Shared dashboard composition for every staff role. Panel figures come
/// from each panel's own data source, not from routing.
#[component]
pub fn DashboardShell(view: ViewId) -> Element {
    rsx! {
        section { class: "dashboard",
            div { class: "dashboard-grid",
                for title in panels_for(view).iter().copied() {
                    div { key: "{title}", class: "dashboard-panel",
                        span { class: "dashboard-panel-title", "{title}" }
                        span { class: "dashboard-panel-value", "-" }
                    }
                }
            }
        }
    }
}
