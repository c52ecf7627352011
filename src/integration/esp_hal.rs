//! esp-hal Integration Module
//!
//! Glue between esp-hal GPIO drivers and the board-agnostic
//! [`PowerSequence`]:
//!
//! - [`CameraPowerBuilder`]: takes raw GPIO peripherals for PWDN / RESET and
//!   powers the sensor up
//! - [`EspHalPowerSequence`]: the resulting sequence type
//! - Re-exports of the esp-hal types used here
//!
//! Control lines are claimed at their idle level (PWDN high so the sensor
//! stays powered down, RESET high so it is not held in reset) before the
//! sequence drives them.
//!
//! # Usage
//!
//! ```ignore
//! use esp32_cam_board::{selected_pins, selected_config};
//! use esp32_cam_board::integration::esp_hal::{CameraPowerBuilder, Delay};
//!
//! let pins = selected_pins();
//! let mut delay = Delay::new();
//!
//! // AI-Thinker: PWDN on GPIO32, no RESET line
//! let power = CameraPowerBuilder::new()
//!     .with_pwdn(peripherals.GPIO32)
//!     .power_up(&mut delay)?;
//! ```
//!
//! # Feature Detection
//!
//! ```toml
//! [dependencies]
//! esp32-cam-board = { version = "0.1", features = ["esp-hal"] }
//! ```

pub use esp_hal::delay::Delay;
pub use esp_hal::gpio::{Level, Output, OutputConfig};

use crate::hal::PowerSequence;

/// Power sequence over esp-hal output drivers
pub type EspHalPowerSequence<'d> = PowerSequence<Output<'d>, Output<'d>>;

/// Claim a GPIO as a camera control line, idle high.
pub fn control_line<'d>(pin: impl esp_hal::gpio::OutputPin + 'd) -> Output<'d> {
    Output::new(pin, Level::High, OutputConfig::default())
}

/// Wrap already-claimed output drivers in a power sequence.
pub fn power_sequence<'d>(
    pwdn: Option<Output<'d>>,
    reset: Option<Output<'d>>,
) -> EspHalPowerSequence<'d> {
    PowerSequence::new(pwdn, reset)
}

/// Builder for esp-hal camera power bring-up.
///
/// Lines that are never given stay unconnected and their steps are skipped,
/// matching boards whose PWDN or RESET is [`None`] in the pin table.
#[derive(Debug, Default)]
pub struct CameraPowerBuilder<'d> {
    pwdn: Option<Output<'d>>,
    reset: Option<Output<'d>>,
}

impl<'d> CameraPowerBuilder<'d> {
    /// Create a builder with no control lines connected.
    pub fn new() -> Self {
        Self {
            pwdn: None,
            reset: None,
        }
    }

    /// Connect the power-down line.
    #[must_use]
    pub fn with_pwdn(mut self, pin: impl esp_hal::gpio::OutputPin + 'd) -> Self {
        self.pwdn = Some(control_line(pin));
        self
    }

    /// Connect the reset line.
    #[must_use]
    pub fn with_reset(mut self, pin: impl esp_hal::gpio::OutputPin + 'd) -> Self {
        self.reset = Some(control_line(pin));
        self
    }

    /// Build the sequence without driving anything.
    pub fn build(self) -> EspHalPowerSequence<'d> {
        power_sequence(self.pwdn, self.reset)
    }

    /// Build the sequence and power the sensor up.
    ///
    /// # Errors
    ///
    /// Propagates [`GpioError`](crate::GpioError) from the sequence.
    pub fn power_up(self, delay: &mut Delay) -> crate::Result<EspHalPowerSequence<'d>> {
        let mut seq = self.build();
        seq.power_up(delay)?;
        Ok(seq)
    }
}
