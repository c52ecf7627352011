//! Espressif development and camera boards.
//!
//! - ESP-WROVER-KIT (camera header on the kit)
//! - ESP-EYE
//! - ESP32 / ESP32-S2 camera boards, including the 18-pin header wiring
//! - ESP32-S3 camera LCD board
//! - ESP32-S3-EYE
//!
//! The ESP32 and ESP32-S2 camera boards break the sensor bus out on an
//! 18-pin header as well as the FPC connector. On that header Y3 and Y5 are
//! swapped relative to the FPC, so a sensor module plugged into the header
//! needs [`CameraBoard::HEADER_PINS`] (enable the `board-header` feature).

use super::{CameraBoard, CameraModel, Psram};
use crate::chip::Chip;
use crate::pins::{CameraPins, DataBus, SccbPins};

const MANUFACTURER: &str = "Espressif";

/// Data bus indices exchanged on the 18-pin header (Y3, Y5).
const HEADER_SWAP: (usize, usize) = (1, 3);

const fn header_wiring(pins: CameraPins) -> CameraPins {
    CameraPins {
        data: pins.data.swapped(HEADER_SWAP.0, HEADER_SWAP.1),
        ..pins
    }
}

// =============================================================================
// ESP-WROVER-KIT
// =============================================================================

/// ESP-WROVER-KIT with the camera header populated.
pub struct WroverKit;

impl CameraBoard for WroverKit {
    const MODEL: CameraModel = CameraModel::WroverKit;
    const NAME: &'static str = "ESP-WROVER-KIT";
    const MANUFACTURER: &'static str = MANUFACTURER;
    const CHIP: Chip = Chip::Esp32;
    const PSRAM: Psram = Psram::Present;
    const PINS: CameraPins = CameraPins {
        pwdn: None,
        reset: None,
        xclk: 21,
        sccb: SccbPins { sda: 26, scl: 27 },
        data: DataBus::from_y(4, 5, 18, 19, 36, 39, 34, 35),
        vsync: 25,
        href: 23,
        pclk: 22,
    };
}

// =============================================================================
// ESP-EYE
// =============================================================================

/// ESP-EYE face recognition board.
pub struct EspEye;

impl CameraBoard for EspEye {
    const MODEL: CameraModel = CameraModel::EspEye;
    const NAME: &'static str = "ESP-EYE";
    const MANUFACTURER: &'static str = MANUFACTURER;
    const CHIP: Chip = Chip::Esp32;
    const PSRAM: Psram = Psram::Present;
    const PINS: CameraPins = CameraPins {
        pwdn: None,
        reset: None,
        xclk: 4,
        sccb: SccbPins { sda: 18, scl: 23 },
        data: DataBus::from_y(34, 13, 14, 35, 39, 38, 37, 36),
        vsync: 5,
        href: 27,
        pclk: 25,
    };
    // White status LED next to the lens
    const LED_GPIO: Option<u8> = Some(22);
}

// =============================================================================
// ESP32 Camera Board
// =============================================================================

/// ESP32 camera board.
pub struct Esp32CamBoard;

impl CameraBoard for Esp32CamBoard {
    const MODEL: CameraModel = CameraModel::Esp32CamBoard;
    const NAME: &'static str = "ESP32 Camera Board";
    const MANUFACTURER: &'static str = MANUFACTURER;
    const CHIP: Chip = Chip::Esp32;
    const PSRAM: Psram = Psram::Unspecified;
    const PINS: CameraPins = CameraPins {
        pwdn: Some(32),
        reset: Some(33),
        xclk: 4,
        sccb: SccbPins { sda: 18, scl: 23 },
        data: DataBus::from_y(34, 13, 14, 35, 39, 21, 19, 36),
        vsync: 5,
        href: 27,
        pclk: 25,
    };
    const HEADER_PINS: Option<CameraPins> = Some(header_wiring(Self::PINS));
}

// =============================================================================
// ESP32-S2 Camera Board
// =============================================================================

/// ESP32-S2 camera board.
pub struct Esp32S2CamBoard;

impl CameraBoard for Esp32S2CamBoard {
    const MODEL: CameraModel = CameraModel::Esp32S2CamBoard;
    const NAME: &'static str = "ESP32-S2 Camera Board";
    const MANUFACTURER: &'static str = MANUFACTURER;
    const CHIP: Chip = Chip::Esp32S2;
    const PSRAM: Psram = Psram::Unspecified;
    const PINS: CameraPins = CameraPins {
        pwdn: Some(1),
        reset: Some(2),
        xclk: 42,
        sccb: SccbPins { sda: 41, scl: 18 },
        data: DataBus::from_y(14, 12, 5, 13, 15, 40, 39, 16),
        vsync: 38,
        href: 4,
        pclk: 3,
    };
    const HEADER_PINS: Option<CameraPins> = Some(header_wiring(Self::PINS));
}

// =============================================================================
// ESP32-S3 Camera LCD
// =============================================================================

/// ESP32-S3 board with camera and LCD connectors.
pub struct Esp32S3CamLcd;

impl CameraBoard for Esp32S3CamLcd {
    const MODEL: CameraModel = CameraModel::Esp32S3CamLcd;
    const NAME: &'static str = "ESP32-S3 Camera LCD";
    const MANUFACTURER: &'static str = MANUFACTURER;
    const CHIP: Chip = Chip::Esp32S3;
    const PSRAM: Psram = Psram::Unspecified;
    const PINS: CameraPins = CameraPins {
        pwdn: None,
        reset: None,
        xclk: 40,
        sccb: SccbPins { sda: 17, scl: 18 },
        data: DataBus::from_y(13, 47, 14, 3, 12, 42, 41, 39),
        vsync: 21,
        href: 38,
        pclk: 11,
    };
}

// =============================================================================
// ESP32-S3-EYE
// =============================================================================

/// ESP32-S3-EYE AI development board (8 MB octal PSRAM).
pub struct Esp32S3Eye;

impl CameraBoard for Esp32S3Eye {
    const MODEL: CameraModel = CameraModel::Esp32S3Eye;
    const NAME: &'static str = "ESP32-S3-EYE";
    const MANUFACTURER: &'static str = MANUFACTURER;
    const CHIP: Chip = Chip::Esp32S3;
    const PSRAM: Psram = Psram::Present;
    const PINS: CameraPins = CameraPins {
        pwdn: None,
        reset: None,
        xclk: 15,
        sccb: SccbPins { sda: 4, scl: 5 },
        data: DataBus::from_y(11, 9, 8, 10, 12, 18, 17, 16),
        vsync: 6,
        href: 7,
        pclk: 13,
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pins::Signal;

    #[test]
    fn esp32_cam_board_header_swap() {
        let module = Esp32CamBoard::PINS;
        let header = Esp32CamBoard::HEADER_PINS.unwrap();
        assert_eq!(module.gpio_for(Signal::Data(3)), Some(35));
        assert_eq!(module.gpio_for(Signal::Data(1)), Some(13));
        assert_eq!(header.gpio_for(Signal::Data(3)), Some(13));
        assert_eq!(header.gpio_for(Signal::Data(1)), Some(35));
        assert_eq!(header.xclk, module.xclk);
        assert_eq!(header.reset, Some(33));
    }

    #[test]
    fn esp32s2_cam_board_header_swap() {
        let header = Esp32S2CamBoard::HEADER_PINS.unwrap();
        assert_eq!(header.gpio_for(Signal::Data(3)), Some(12));
        assert_eq!(header.gpio_for(Signal::Data(1)), Some(13));
    }

    #[test]
    fn s3_boards_use_high_gpios() {
        assert!(Esp32S3CamLcd::PINS.uses_gpio(47));
        assert!(Esp32S3CamLcd::PINS.validate(Chip::Esp32S3).is_ok());
        // GPIO47 is not bonded out on the original ESP32
        assert!(Esp32S3CamLcd::PINS.validate(Chip::Esp32).is_err());
        assert_eq!(Esp32S3Eye::PINS.xclk, 15);
    }

    #[test]
    fn esp_eye_and_cam_board_share_sync_lines() {
        let eye = EspEye::PINS;
        let board = Esp32CamBoard::PINS;
        assert_eq!((eye.vsync, eye.href, eye.pclk), (board.vsync, board.href, board.pclk));
        assert_ne!(eye.data, board.data);
        assert_eq!(eye.pwdn, None);
        assert_eq!(board.pwdn, Some(32));
    }
}
