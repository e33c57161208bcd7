use serde::{Deserialize, Serialize};
use std::fmt;

/// Capability class of a portal session.
///
/// Exactly one role is attached to a session at a time. `Guest` is the
/// unauthenticated role; every other role comes from a resolved sign-in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Guest,
    Patient,
    Receptionist,
    Triage,
    Doctor,
    LabTechnician,
    HospitalAdministrator,
    SystemAdmin,
}

impl Role {
    pub const ALL: [Role; 8] = [
        Role::Guest,
        Role::Patient,
        Role::Receptionist,
        Role::Triage,
        Role::Doctor,
        Role::LabTechnician,
        Role::HospitalAdministrator,
        Role::SystemAdmin,
    ];

    /// Lowercase tag used in configuration files and session payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Guest => "guest",
            Role::Patient => "patient",
            Role::Receptionist => "receptionist",
            Role::Triage => "triage",
            Role::Doctor => "doctor",
            Role::LabTechnician => "lab_technician",
            Role::HospitalAdministrator => "hospital_administrator",
            Role::SystemAdmin => "system_admin",
        }
    }

    /// Strict parse of a role tag. Returns `None` for anything outside the closed set.
    pub fn parse(s: &str) -> Option<Self> {
        Role::ALL.into_iter().find(|r| r.as_str() == s)
    }

    /// Parse a session-supplied role. Unknown values fall back to `Guest`.
    pub fn from_str_or_guest(s: &str) -> Self {
        Self::parse(&s.trim().to_lowercase()).unwrap_or(Role::Guest)
    }

    /// Staff roles get the side navigation chrome.
    pub fn is_staff(&self) -> bool {
        !matches!(self, Role::Guest | Role::Patient)
    }

    pub fn is_authenticated(&self) -> bool {
        !matches!(self, Role::Guest)
    }

    /// Human-readable label for menus and the session badge.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Guest => "Guest",
            Role::Patient => "Patient",
            Role::Receptionist => "Receptionist",
            Role::Triage => "Triage Nurse",
            Role::Doctor => "Doctor",
            Role::LabTechnician => "Lab Technician",
            Role::HospitalAdministrator => "Hospital Administrator",
            Role::SystemAdmin => "System Admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
