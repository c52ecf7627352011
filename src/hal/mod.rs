//! Hardware Abstraction Layer
//!
//! Sequencing helpers that drive the camera's control lines through
//! `embedded-hal` traits, independent of any particular HAL crate.
//!
//! # Modules
//!
//! - [`power`]: PWDN / RESET power-up and power-down sequencing
//!
//! # Delay Integration
//!
//! All types that require delays use `embedded_hal::delay::DelayNs` directly.
//! Pass any delay implementation from your HAL (e.g., `esp_hal::delay::Delay`).

pub mod power;

// Re-export commonly used types
pub use power::{NoPin, PowerSequence, PowerState};
