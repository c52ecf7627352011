//! AI-Thinker ESP32-CAM board configuration (ESP32 + OV2640).
//!
//! The most common ESP32-CAM board: ESP32-S module, 4 MB PSRAM, OV2640
//! sensor on a 24-pin FPC and a high-power white flash LED.
//!
//! The sensor reset line is not routed; the driver falls back to an SCCB
//! soft reset. Power-down is driven through GPIO32.

use super::{CameraBoard, CameraModel, Psram};
use crate::chip::Chip;
use crate::pins::{CameraPins, DataBus, SccbPins};

/// AI-Thinker ESP32-CAM board constants.
pub struct AiThinker;

impl AiThinker {
    // =========================================================================
    // Control Pins
    // =========================================================================

    /// Sensor power-down GPIO (active high).
    pub const PWDN_GPIO: u8 = 32;

    /// XCLK output GPIO.
    pub const XCLK_GPIO: u8 = 0;

    /// SCCB data GPIO.
    pub const SIOD_GPIO: u8 = 26;

    /// SCCB clock GPIO.
    pub const SIOC_GPIO: u8 = 27;

    // =========================================================================
    // Peripherals
    // =========================================================================

    /// Flash LED GPIO (shared with the SD card DATA1 line).
    pub const FLASH_LED_GPIO: u8 = 4;

    /// Red status LED on the back of the board (active low).
    pub const STATUS_LED_GPIO: u8 = 33;
}

impl CameraBoard for AiThinker {
    const MODEL: CameraModel = CameraModel::AiThinker;
    const NAME: &'static str = "AI-Thinker ESP32-CAM";
    const MANUFACTURER: &'static str = "AI-Thinker";
    const CHIP: Chip = Chip::Esp32;
    const PSRAM: Psram = Psram::Present;
    const PINS: CameraPins = CameraPins {
        pwdn: Some(Self::PWDN_GPIO),
        reset: None,
        xclk: Self::XCLK_GPIO,
        sccb: SccbPins {
            sda: Self::SIOD_GPIO,
            scl: Self::SIOC_GPIO,
        },
        data: DataBus::from_y(5, 18, 19, 21, 36, 39, 34, 35),
        vsync: 25,
        href: 23,
        pclk: 22,
    };
    const LED_GPIO: Option<u8> = Some(Self::FLASH_LED_GPIO);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pins::Signal;

    #[test]
    fn pin_assignments_match_board() {
        let pins = AiThinker::PINS;
        assert_eq!(pins.pwdn, Some(32));
        assert_eq!(pins.reset, None);
        assert_eq!(pins.xclk, 0);
        assert_eq!(pins.sccb, SccbPins { sda: 26, scl: 27 });
        assert_eq!(pins.gpio_for(Signal::Data(7)), Some(35));
        assert_eq!(pins.gpio_for(Signal::Data(0)), Some(5));
        assert_eq!((pins.vsync, pins.href, pins.pclk), (25, 23, 22));
    }

    #[test]
    fn status_led_is_free() {
        assert!(!AiThinker::PINS.uses_gpio(AiThinker::STATUS_LED_GPIO));
        assert!(!AiThinker::PINS.uses_gpio(AiThinker::FLASH_LED_GPIO));
    }
}
