//! Error types for ESP32-CAM board support
//!
//! Errors are organized by domain for better diagnostics:
//! - [`PinError`]: Pin set does not fit the chip or reuses a GPIO
//! - [`ConfigError`]: Board name or camera configuration rejected
//! - [`GpioError`]: Driving a PWDN/RESET line failed
//!
//! The unified [`Error`] enum wraps all domain errors.

use crate::pins::Signal;

// =============================================================================
// Pin Errors
// =============================================================================

/// Pin set validation errors
///
/// Each variant names the offending signal(s) and GPIO so a bad board
/// table can be fixed without a debugger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// GPIO is not bonded out on the chip
    NonexistentGpio {
        /// Signal routed to the GPIO
        signal: Signal,
        /// GPIO number
        gpio: u8,
    },
    /// Signal must be driven but the GPIO is input-only
    InputOnlyGpio {
        /// Signal routed to the GPIO
        signal: Signal,
        /// GPIO number
        gpio: u8,
    },
    /// Two signals are routed to the same GPIO
    DuplicateGpio {
        /// Signal that claimed the GPIO first
        first: Signal,
        /// Signal that claimed it again
        second: Signal,
        /// GPIO number
        gpio: u8,
    },
}

impl PinError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            PinError::NonexistentGpio { .. } => "GPIO does not exist on chip",
            PinError::InputOnlyGpio { .. } => "driven signal on input-only GPIO",
            PinError::DuplicateGpio { .. } => "GPIO assigned twice",
        }
    }

    /// GPIO the error refers to
    #[must_use]
    pub const fn gpio(&self) -> u8 {
        match self {
            PinError::NonexistentGpio { gpio, .. }
            | PinError::InputOnlyGpio { gpio, .. }
            | PinError::DuplicateGpio { gpio, .. } => *gpio,
        }
    }
}

impl core::fmt::Display for PinError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PinError::NonexistentGpio { signal, gpio }
            | PinError::InputOnlyGpio { signal, gpio } => {
                write!(f, "{}: {signal} on GPIO{gpio}", self.as_str())
            }
            PinError::DuplicateGpio {
                first,
                second,
                gpio,
            } => write!(f, "{}: GPIO{gpio} used by {first} and {second}", self.as_str()),
        }
    }
}

// =============================================================================
// Configuration Errors
// =============================================================================

/// Board selection and camera configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Board name does not match any supported camera model
    UnknownModel,
    /// XCLK frequency outside the LEDC-supported range
    InvalidXclkFrequency,
    /// JPEG quality outside 0-63
    InvalidJpegQuality,
    /// Frame buffer count is zero
    InvalidFrameBufferCount,
    /// Frame buffers placed in PSRAM but no PSRAM was found
    PsramUnavailable,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ConfigError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ConfigError::UnknownModel => "unknown camera model",
            ConfigError::InvalidXclkFrequency => "invalid XCLK frequency",
            ConfigError::InvalidJpegQuality => "invalid JPEG quality",
            ConfigError::InvalidFrameBufferCount => "invalid frame buffer count",
            ConfigError::PsramUnavailable => "frame buffer in PSRAM but PSRAM not found",
        }
    }
}

// =============================================================================
// GPIO Errors
// =============================================================================

/// Failure to drive a camera control line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GpioError {
    /// Line that could not be driven
    pub signal: Signal,
}

impl core::fmt::Display for GpioError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "failed to drive {}", self.signal)
    }
}

// =============================================================================
// Unified Error Type
// =============================================================================

/// This enum wraps all domain-specific errors for unified error handling.
///
/// Match on the inner domain error for specific handling:
/// ```ignore
/// match result {
///     Err(Error::Pin(PinError::DuplicateGpio { gpio, .. })) => { /* ... */ }
///     Err(Error::Config(ConfigError::PsramUnavailable)) => { /* ... */ }
///     Err(Error::Gpio(e)) => { /* ... */ }
///     _ => {}
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Pin set error
    Pin(PinError),
    /// Configuration error
    Config(ConfigError),
    /// GPIO drive error
    Gpio(GpioError),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Pin(e) => write!(f, "pins: {e}"),
            Error::Config(e) => write!(f, "config: {}", e.as_str()),
            Error::Gpio(e) => write!(f, "gpio: {e}"),
        }
    }
}

impl core::error::Error for Error {}
impl core::error::Error for PinError {}
impl core::error::Error for ConfigError {}
impl core::error::Error for GpioError {}

// From impls for automatic conversion
impl From<PinError> for Error {
    fn from(e: PinError) -> Self {
        Error::Pin(e)
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<GpioError> for Error {
    fn from(e: GpioError) -> Self {
        Error::Gpio(e)
    }
}

/// Result type alias for board support operations
pub type Result<T> = core::result::Result<T, Error>;

/// Result type alias for pin validation
pub type PinResult<T> = core::result::Result<T, PinError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = core::result::Result<T, ConfigError>;

// =============================================================================
// Unit Tests
// =============================================================================
