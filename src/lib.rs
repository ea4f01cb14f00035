// Core layer - shared configuration and the clock abstraction
pub mod core;

// Features layer - all feature modules
pub mod features;

// Storage layer - the reminder record store abstraction
pub mod store;

// Notification layer - outbound email delivery
pub mod notify;

// Re-export core items for convenience
pub use self::core::{Clock, Config, FixedClock, SystemClock};

// Re-export feature items
pub use features::{
    // Registry
    get_backend_version,
    get_features,
    // Reminders
    CycleReport,
    DispatchEvent,
    Eligibility,
    ReminderCandidate,
    ReminderDispatcher,
    ReminderKind,
    ReminderScheduler,
};

// Re-export storage items
pub use store::{MemoryStore, ReminderStore, StoreError};

// Re-export notification items
pub use notify::{MailGatewayNotifier, Notifier, ReminderEmail};
