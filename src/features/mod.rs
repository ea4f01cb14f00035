//! # Features Module
//!
//! Feature modules and the registry used by startup logging.

pub mod reminders;

pub use reminders::{
    CycleReport, DispatchEvent, Eligibility, ReminderCandidate, ReminderDispatcher, ReminderKind,
    ReminderScheduler,
};

/// Metadata describing one feature module.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub toggleable: bool,
}

/// Backend crate version.
pub fn get_backend_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Registry of feature modules with their versions.
pub fn get_features() -> Vec<FeatureInfo> {
    vec![
        FeatureInfo {
            name: "Deadline Reminders",
            version: "2.0.0",
            toggleable: true,
        },
        FeatureInfo {
            name: "Notifications",
            version: "1.2.0",
            toggleable: false,
        },
    ]
}
