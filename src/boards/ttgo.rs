//! LilyGO TTGO T-Journal board configuration (ESP32 + OV2640, no PSRAM).
//!
//! Uses the M5Stack ESP32CAM sensor layout with power-down on GPIO0, so
//! the sensor is held off while the chip is strapped into download mode.

use super::{CameraBoard, CameraModel, Psram};
use crate::chip::Chip;
use crate::pins::{CameraPins, DataBus, SccbPins};

/// TTGO T-Journal board constants.
pub struct TtgoTJournal;

impl TtgoTJournal {
    /// On-board SSD1306 OLED I2C data GPIO.
    pub const OLED_SDA_GPIO: u8 = 14;

    /// On-board SSD1306 OLED I2C clock GPIO.
    pub const OLED_SCL_GPIO: u8 = 13;
}

impl CameraBoard for TtgoTJournal {
    const MODEL: CameraModel = CameraModel::TtgoTJournal;
    const NAME: &'static str = "TTGO T-Journal";
    const MANUFACTURER: &'static str = "LilyGO";
    const CHIP: Chip = Chip::Esp32;
    const PSRAM: Psram = Psram::Absent;
    const PINS: CameraPins = CameraPins {
        pwdn: Some(0),
        reset: Some(15),
        xclk: 27,
        sccb: SccbPins { sda: 25, scl: 23 },
        data: DataBus::from_y(17, 35, 34, 5, 39, 18, 36, 19),
        vsync: 22,
        href: 26,
        pclk: 21,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pin_assignments_match_board() {
        let pins = TtgoTJournal::PINS;
        assert_eq!(pins.pwdn, Some(0));
        assert_eq!(pins.reset, Some(15));
        assert_eq!(pins.xclk, 27);
    }

    #[test]
    fn oled_bus_is_separate_from_sccb() {
        let pins = TtgoTJournal::PINS;
        assert!(!pins.uses_gpio(TtgoTJournal::OLED_SDA_GPIO));
        assert!(!pins.uses_gpio(TtgoTJournal::OLED_SCL_GPIO));
    }
}
