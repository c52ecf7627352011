//! Centralized Constants
//!
//! Single source of truth for the clock, timing and limit values used by
//! the camera configuration and power sequencing.
//!
//! # Organization
//!
//! - **Clocks**: XCLK defaults and the LEDC-supported range
//! - **JPEG / frame buffers**: quality bounds and buffer counts
//! - **Timing**: PWDN/RESET settle times
//!
//! Board pin numbers live with their board in `boards/`, not here.

// =============================================================================
// Clock Frequencies
// =============================================================================

/// Default XCLK frequency driven into the sensor (20 MHz)
pub const DEFAULT_XCLK_HZ: u32 = 20_000_000;

/// Lowest XCLK frequency accepted by configuration validation (1 MHz)
pub const XCLK_MIN_HZ: u32 = 1_000_000;

/// Highest XCLK frequency the LEDC can produce from the 80 MHz APB clock
/// with a 1-bit duty resolution (40 MHz)
pub const XCLK_MAX_HZ: u32 = 40_000_000;

/// Default LEDC channel for XCLK generation
pub const DEFAULT_LEDC_CHANNEL: u8 = 0;

/// Default LEDC timer for XCLK generation
pub const DEFAULT_LEDC_TIMER: u8 = 0;

// =============================================================================
// JPEG and Frame Buffers
// =============================================================================

/// Highest (worst) JPEG quality value; lower means better quality
pub const JPEG_QUALITY_MAX: u8 = 63;

/// Default JPEG quality without PSRAM
pub const DEFAULT_JPEG_QUALITY: u8 = 12;

/// JPEG quality used when PSRAM is available
pub const PSRAM_JPEG_QUALITY: u8 = 10;

/// Default number of frame buffers
pub const DEFAULT_FB_COUNT: u8 = 1;

/// Frame buffers used when PSRAM is available (double buffering)
pub const PSRAM_FB_COUNT: u8 = 2;

// =============================================================================
// Power Sequencing
// =============================================================================

/// Time to wait after releasing power-down before touching the sensor (ms)
pub const PWDN_SETTLE_MS: u32 = 10;

/// Reset pulse width, RESET held low (ms)
pub const RESET_PULSE_MS: u32 = 10;

/// Time to wait after releasing reset before SCCB access (ms)
pub const RESET_RECOVERY_MS: u32 = 10;
