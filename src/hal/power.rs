//! Sensor power and reset sequencing
//!
//! Camera sensors expose two optional control lines:
//!
//! - **PWDN**: power-down, active high. Held low while the sensor runs.
//! - **RESET**: hardware reset, active low. Pulsed low once after power-up.
//!
//! Boards leave either line unconnected (see [`CameraPins`](crate::CameraPins));
//! the sequence then skips that step and the driver relies on an SCCB soft
//! reset instead.
//!
//! # Timing
//!
//! | Step | Level | Wait |
//! |------|-------|------|
//! | Release power-down | PWDN low | 10 ms |
//! | Assert reset | RESET low | 10 ms |
//! | Release reset | RESET high | 10 ms |
//!
//! # Example
//!
//! ```ignore
//! use esp32_cam_board::hal::{NoPin, PowerSequence};
//!
//! // AI-Thinker: PWDN on GPIO32, RESET not connected
//! let pwdn = Output::new(peripherals.GPIO32, Level::High, OutputConfig::default());
//! let mut power = PowerSequence::<_, NoPin>::new(Some(pwdn), None);
//! power.power_up(&mut delay)?;
//! ```

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};

use crate::error::{GpioError, Result};
use crate::internal::constants::{PWDN_SETTLE_MS, RESET_PULSE_MS, RESET_RECOVERY_MS};
use crate::pins::Signal;

// =============================================================================
// Placeholder Pin
// =============================================================================

/// Stand-in type for an unconnected control line.
///
/// Driving it always succeeds and does nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoPin;

impl ErrorType for NoPin {
    type Error = Infallible;
}

impl OutputPin for NoPin {
    fn set_low(&mut self) -> core::result::Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> core::result::Result<(), Self::Error> {
        Ok(())
    }
}

// =============================================================================
// Power State
// =============================================================================

/// Last state the sequence drove the sensor into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerState {
    /// Lines not driven yet
    #[default]
    Unknown,
    /// PWDN asserted
    PoweredDown,
    /// Powered and out of reset
    Running,
}

// =============================================================================
// Power Sequence
// =============================================================================

/// Drives the PWDN and RESET lines of a camera sensor.
#[derive(Debug)]
pub struct PowerSequence<P: OutputPin, R: OutputPin> {
    /// Power-down line (active high)
    pwdn: Option<P>,
    /// Reset line (active low)
    reset: Option<R>,
    state: PowerState,
}

impl<P: OutputPin, R: OutputPin> PowerSequence<P, R> {
    /// Create a sequence over the connected lines.
    ///
    /// The lines are not touched until [`power_up`](Self::power_up) or
    /// [`power_down`](Self::power_down) is called.
    pub const fn new(pwdn: Option<P>, reset: Option<R>) -> Self {
        Self {
            pwdn,
            reset,
            state: PowerState::Unknown,
        }
    }

    /// Current power state
    pub const fn state(&self) -> PowerState {
        self.state
    }

    /// Whether a PWDN line is connected
    pub const fn has_pwdn(&self) -> bool {
        self.pwdn.is_some()
    }

    /// Whether a RESET line is connected
    pub const fn has_reset(&self) -> bool {
        self.reset.is_some()
    }

    /// Power the sensor up and take it out of reset.
    ///
    /// Releases PWDN and waits for the supply to settle, then pulses RESET.
    /// Unconnected lines are skipped.
    ///
    /// # Errors
    ///
    /// [`GpioError`] naming the line that could not be driven. The state stays
    /// as it was. PWDN is left low if it was already released, and RESET is
    /// driven back high on a best-effort basis (see
    /// [`hardware_reset`](Self::hardware_reset)).
    pub fn power_up<D: DelayNs>(&mut self, delay: &mut D) -> Result<()> {
        if let Some(pwdn) = self.pwdn.as_mut() {
            pwdn.set_low().map_err(|_| GpioError {
                signal: Signal::Pwdn,
            })?;
            delay.delay_ms(PWDN_SETTLE_MS);
        }

        self.hardware_reset(delay)?;
        self.state = PowerState::Running;

        #[cfg(feature = "defmt")]
        defmt::info!(
            "camera sensor powered up (pwdn={}, reset={})",
            self.has_pwdn(),
            self.has_reset()
        );

        Ok(())
    }

    /// Put the sensor into power-down.
    ///
    /// Without a PWDN line this is a no-op and the state is left unchanged.
    ///
    /// # Errors
    ///
    /// [`GpioError`] if PWDN could not be driven.
    pub fn power_down(&mut self) -> Result<()> {
        let Some(pwdn) = self.pwdn.as_mut() else {
            #[cfg(feature = "defmt")]
            defmt::warn!("camera power-down requested but PWDN is not connected");
            return Ok(());
        };

        pwdn.set_high().map_err(|_| GpioError {
            signal: Signal::Pwdn,
        })?;
        self.state = PowerState::PoweredDown;
        Ok(())
    }

    /// Pulse RESET low, then wait for the sensor to recover.
    ///
    /// Without a RESET line this is a no-op.
    ///
    /// # Errors
    ///
    /// [`GpioError`] if RESET could not be driven. If asserting reset fails,
    /// the line is driven high once more so the sensor is not left in reset;
    /// the outcome of that attempt is not reported.
    pub fn hardware_reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<()> {
        let Some(reset) = self.reset.as_mut() else {
            return Ok(());
        };

        if reset.set_low().is_err() {
            let _ = reset.set_high();

            #[cfg(feature = "defmt")]
            defmt::warn!("camera RESET could not be asserted");

            return Err(GpioError {
                signal: Signal::Reset,
            }
            .into());
        }
        delay.delay_ms(RESET_PULSE_MS);
        reset.set_high().map_err(|_| GpioError {
            signal: Signal::Reset,
        })?;
        delay.delay_ms(RESET_RECOVERY_MS);

        #[cfg(feature = "defmt")]
        defmt::debug!("camera sensor reset pulse complete");

        Ok(())
    }

    /// Consume the sequence and return the pins
    pub fn release(self) -> (Option<P>, Option<R>) {
        (self.pwdn, self.reset)
    }
}
