//! # Core Module
//!
//! Shared configuration and the clock abstraction for the reminder backend.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.7.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Add clock module with injectable Clock trait for deterministic tests
//! - 1.0.0: Initial creation with config module

pub mod clock;
pub mod config;

// Re-export commonly used items
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
