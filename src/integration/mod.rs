//! External Stack Integrations
//!
//! - **esp-hal** (`esp_hal`): builds a [`PowerSequence`](crate::hal::PowerSequence)
//!   from esp-hal GPIO drivers and powers the sensor up with `esp_hal::delay::Delay`.
//!   Requires the `esp-hal` feature.
//!
//! # Example
//!
//! ```ignore
//! use esp32_cam_board::integration::esp_hal::{CameraPowerBuilder, Delay};
//!
//! let mut delay = Delay::new();
//! let power = CameraPowerBuilder::new()
//!     .with_pwdn(peripherals.GPIO32)
//!     .power_up(&mut delay)?;
//! ```

#[cfg(feature = "esp-hal")]
pub mod esp_hal;

#[cfg(feature = "esp-hal")]
pub use self::esp_hal::{CameraPowerBuilder, EspHalPowerSequence};
