//! ESP32-CAM Board Support
//!
//! A `no_std`, `no_alloc` catalogue of ESP32 camera boards and the GPIOs their
//! sensors are wired to.
//!
//! Exactly one board is selected at build time through a Cargo feature. The
//! crate resolves that choice to a [`CameraPins`] table (XCLK, PCLK, VSYNC,
//! HREF, D0-D7, SIOD/SIOC, PWDN, RESET) and to the camera driver defaults the
//! firmware uses for it.
//!
//! # Architecture
//!
//! 1. **Boards** ([`boards`]): one zero-sized type per board implementing
//!    [`CameraBoard`], plus the closed [`CameraModel`] enum over all of them
//! 2. **Pins** ([`pins`], [`chip`]): pin tables and validation against the
//!    GPIO matrix of the target chip
//! 3. **Config** ([`config`]): camera driver configuration with firmware defaults
//! 4. **HAL Layer** ([`hal`]): PWDN / RESET sequencing over `embedded-hal`
//!
//! # Supported Boards
//!
//! | Feature | Board | Chip |
//! |---------|-------|------|
//! | `ai-thinker` (default) | AI-Thinker ESP32-CAM | ESP32 |
//! | `wrover-kit` | ESP-WROVER-KIT | ESP32 |
//! | `esp-eye` | ESP-EYE | ESP32 |
//! | `m5stack-psram` | M5Stack Camera (PSRAM) | ESP32 |
//! | `m5stack-v2` | M5Stack Camera V2 (PSRAM) | ESP32 |
//! | `m5stack-wide` | M5Stack Camera Wide | ESP32 |
//! | `m5stack-esp32cam` | M5Stack ESP32CAM | ESP32 |
//! | `m5stack-unitcam` | M5Stack UnitCam | ESP32 |
//! | `ttgo-t-journal` | LilyGO TTGO T-Journal | ESP32 |
//! | `esp32-cam-board` | Espressif ESP32 camera board | ESP32 |
//! | `esp32s2-cam-board` | Espressif ESP32-S2 camera board | ESP32-S2 |
//! | `esp32s3-cam-lcd` | Espressif ESP32-S3 camera LCD board | ESP32-S3 |
//! | `esp32s3-eye` | ESP32-S3-EYE | ESP32-S3 |
//!
//! Board features are mutually exclusive; pick a non-default board with
//! `default-features = false`.
//!
//! # Other Features
//!
//! - `board-header`: use the 18-pin header wiring on boards that have one
//! - `defmt`: Enable defmt formatting and logging
//! - `esp-hal`: Enable esp-hal ergonomic integration
//!
//! # Example
//!
//! ```ignore
//! use esp32_cam_board::{selected_config, selected_pins, PowerSequence, NoPin};
//!
//! let pins = selected_pins();
//! let config = selected_config(psram_found);
//! config.validate(psram_found)?;
//!
//! // AI-Thinker has no RESET line
//! let mut power = PowerSequence::<_, NoPin>::new(Some(pwdn_output), None);
//! power.power_up(&mut delay)?;
//! ```

#![no_std]
#![deny(missing_docs)]
// Clippy lint levels mirror the [lints] table in Cargo.toml.
#![deny(clippy::correctness)]
#![warn(
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::cloned_instead_of_copied,
    clippy::explicit_iter_loop,
    clippy::implicit_clone,
    clippy::inconsistent_struct_constructor,
    clippy::manual_assert,
    clippy::manual_let_else,
    clippy::match_same_arms,
    clippy::needless_pass_by_value,
    clippy::semicolon_if_nothing_returned,
    clippy::uninlined_format_args,
    clippy::unnested_or_patterns,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]
#![allow(
    clippy::mod_module_files,
    clippy::self_named_module_files,
    clippy::must_use_candidate,
    clippy::assertions_on_constants,
    clippy::cast_possible_truncation,
    clippy::cast_lossless,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::module_name_repetitions,
    clippy::wildcard_imports
)]
#[cfg(not(any(
    feature = "ai-thinker",
    feature = "wrover-kit",
    feature = "esp-eye",
    feature = "m5stack-psram",
    feature = "m5stack-v2",
    feature = "m5stack-wide",
    feature = "m5stack-esp32cam",
    feature = "m5stack-unitcam",
    feature = "ttgo-t-journal",
    feature = "esp32-cam-board",
    feature = "esp32s2-cam-board",
    feature = "esp32s3-cam-lcd",
    feature = "esp32s3-eye"
)))]
compile_error!("Select a camera board: enable exactly one board feature. The default is 'ai-thinker'.");

// =============================================================================
// Modules
// =============================================================================

pub mod boards;
pub mod chip;
pub mod config;
pub mod error;
pub mod hal;
pub mod pins;

// Internal implementation details (pub(crate) only)
mod internal;

#[cfg(feature = "esp-hal")]
pub mod integration;

// Test utilities (only available during testing)
#[cfg(test)]
pub mod testing;

// =============================================================================
// Re-exports
// =============================================================================

pub use boards::{BoardInfo, CameraBoard, CameraModel, MODEL_COUNT, Psram};
pub use chip::Chip;
pub use config::{CameraConfig, FrameBufferLocation, FrameSize, GrabMode, PixelFormat};
pub use error::{ConfigError, ConfigResult, Error, GpioError, PinError, PinResult, Result};
pub use hal::{NoPin, PowerSequence, PowerState};
pub use pins::{CameraPins, DataBus, SccbPins, Signal};

// esp-hal facade re-export (for ergonomic access)
#[cfg(feature = "esp-hal")]
pub mod esp_hal {
    //! esp-hal integration facade.
    //!
    //! This module re-exports esp-hal integration helpers for ergonomic access.

    pub use crate::integration::esp_hal::{
        CameraPowerBuilder, Delay, EspHalPowerSequence, Level, Output, OutputConfig,
        control_line, power_sequence,
    };
}

/// Shared board and driver constants.
pub mod constants {
    pub use crate::internal::constants::{
        // Frame buffers
        DEFAULT_FB_COUNT,
        DEFAULT_JPEG_QUALITY,
        // Clocks
        DEFAULT_LEDC_CHANNEL,
        DEFAULT_LEDC_TIMER,
        DEFAULT_XCLK_HZ,
        JPEG_QUALITY_MAX,
        PSRAM_FB_COUNT,
        PSRAM_JPEG_QUALITY,
        // Timing
        PWDN_SETTLE_MS,
        RESET_PULSE_MS,
        RESET_RECOVERY_MS,
        XCLK_MAX_HZ,
        XCLK_MIN_HZ,
    };
}

// =============================================================================
// Build-time Selection
// =============================================================================

/// Board chosen by the enabled Cargo feature.
pub const SELECTED_MODEL: CameraModel = internal::selection::SELECTED;

/// Board chosen by the enabled Cargo feature.
pub const fn selected_model() -> CameraModel {
    SELECTED_MODEL
}

/// Everything known about the selected board.
pub const fn selected_board() -> BoardInfo {
    SELECTED_MODEL.info()
}

/// Pin table of the selected board.
///
/// With the `board-header` feature, boards that have an 18-pin header return
/// the header wiring; every other board returns its module wiring.
pub const fn selected_pins() -> CameraPins {
    selected_board().pins_for(internal::selection::USE_BOARD_HEADER)
}

/// Firmware camera defaults for the selected board.
///
/// `psram_found` is the runtime PSRAM probe result; it decides frame-buffer
/// placement, count and JPEG quality.
pub fn selected_config(psram_found: bool) -> CameraConfig {
    CameraConfig::new(selected_pins()).tuned_for_memory(SELECTED_MODEL.chip(), psram_found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{LevelPin, MockDelay};

    #[test]
    fn selection_is_consistent() {
        assert_eq!(selected_model(), SELECTED_MODEL);
        assert_eq!(selected_board().model, SELECTED_MODEL);
        assert_eq!(selected_board(), SELECTED_MODEL.info());
    }

    #[test]
    fn selected_pins_follow_header_feature() {
        let info = selected_board();
        let expected = match info.header_pins {
            Some(header) if cfg!(feature = "board-header") => header,
            _ => info.pins,
        };
        assert_eq!(selected_pins(), expected);
    }

    #[test]
    fn selected_pins_validate_on_selected_chip() {
        assert_eq!(selected_pins().validate(SELECTED_MODEL.chip()), Ok(()));
        assert_eq!(selected_board().validate(), Ok(()));
    }

    #[test]
    fn selected_pins_come_from_one_table() {
        let info = selected_board();
        let pins = selected_pins();
        assert!(pins == info.pins || Some(pins) == info.header_pins);
    }

    #[test]
    fn selected_config_validates() {
        for psram_found in [true, false] {
            let config = selected_config(psram_found);
            assert_eq!(config.pins, selected_pins());
            let psram_ok = psram_found || config.fb_location == FrameBufferLocation::Dram;
            assert!(psram_ok);
            assert_eq!(config.validate(psram_found), Ok(()));
        }
    }

    #[test]
    fn power_sequence_from_selected_pins() {
        let pins = selected_pins();
        let pwdn = pins.pwdn.map(|_| LevelPin::default());
        let reset = pins.reset.map(|_| LevelPin::default());
        let mut delay = MockDelay::new();
        let mut power = PowerSequence::new(pwdn, reset);

        power.power_up(&mut delay).unwrap();

        assert_eq!(power.state(), PowerState::Running);
        let (pwdn, reset) = power.release();
        assert_eq!(pwdn.is_some(), pins.pwdn.is_some());
        if let Some(pin) = pwdn {
            assert_eq!(pin.high, Some(false));
        }
        if let Some(pin) = reset {
            assert_eq!(pin.high, Some(true));
        }
        let expected_ms = if pins.pwdn.is_some() { 10 } else { 0 }
            + if pins.reset.is_some() { 20 } else { 0 };
        assert_eq!(delay.total_ms(), expected_ms);
    }
}
