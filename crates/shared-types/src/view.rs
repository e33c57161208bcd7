use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a leaf screen the rendering layer can mount.
///
/// The route table refers to views by these names; a name that does not
/// deserialize into this enum is a configuration error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ViewId {
    // Public pages
    Home,
    Department,
    About,
    Contact,
    ShowDoctor,
    Login,

    // Hospital administrator
    HospitalAdminDashboard,
    AddNewStaff,
    EditViewStaff,
    PatientRecord,
    RecordAuditLogs,
    StaffManagement,
    ViewRecords,

    // Receptionist
    ReceptionistDashboard,
    PatientRegistration,
    RegisteredPatient,
    NewRegistration,

    // Triage
    TriageDashboard,
    ProcessPatient,
    UnassignedPatients,

    // Doctor
    DoctorDashboard,
    AssignedRecords,
    PatientDetail,

    // Lab technician
    LabDashboard,
    LabRequests,
    LabForm,

    // System admin
    SystemAdminDashboard,
    HospitalDirectory,
    UserAccounts,

    // Patient
    PatientPortal,

    NotFound,
}

impl ViewId {
    /// Page heading shown in the top bar.
    pub fn title(&self) -> &'static str {
        match self {
            ViewId::Home => "Home",
            ViewId::Department => "Departments",
            ViewId::About => "About Us",
            ViewId::Contact => "Contact",
            ViewId::ShowDoctor => "Our Doctors",
            ViewId::Login => "Sign In",
            ViewId::HospitalAdminDashboard
            | ViewId::ReceptionistDashboard
            | ViewId::TriageDashboard
            | ViewId::DoctorDashboard
            | ViewId::LabDashboard
            | ViewId::SystemAdminDashboard => "Dashboard",
            ViewId::AddNewStaff => "Add Staff",
            ViewId::EditViewStaff => "Edit Staff",
            ViewId::PatientRecord => "Patient Records",
            ViewId::RecordAuditLogs => "Audit Logs",
            ViewId::StaffManagement => "Staff Management",
            ViewId::ViewRecords => "Records",
            ViewId::PatientRegistration => "Patient Registration",
            ViewId::RegisteredPatient => "Registered Patient",
            ViewId::NewRegistration => "New Registration",
            ViewId::ProcessPatient => "Process Patient",
            ViewId::UnassignedPatients => "Unassigned Patients",
            ViewId::AssignedRecords => "Assigned Records",
            ViewId::PatientDetail => "Patient Detail",
            ViewId::LabRequests => "Lab Requests",
            ViewId::LabForm => "Lab Form",
            ViewId::HospitalDirectory => "Hospitals",
            ViewId::UserAccounts => "User Accounts",
            ViewId::PatientPortal => "My Health",
            ViewId::NotFound => "Page Not Found",
        }
    }

    /// Per-role landing dashboards, all rendered by the same dashboard shell.
    pub fn is_dashboard(&self) -> bool {
        matches!(
            self,
            ViewId::HospitalAdminDashboard
                | ViewId::ReceptionistDashboard
                | ViewId::TriageDashboard
                | ViewId::DoctorDashboard
                | ViewId::LabDashboard
                | ViewId::SystemAdminDashboard
        )
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
