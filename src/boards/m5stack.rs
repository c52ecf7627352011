//! M5Stack camera boards.
//!
//! All M5Stack camera variants share the same sensor bus layout and only
//! differ in the SCCB data / VSYNC routing (version B and wide), the lowest
//! data bit (ESP32CAM), PSRAM population, and the LED.
//!
//! | Board | SIOD | VSYNC | Y2 | PSRAM |
//! |-------|------|-------|----|-------|
//! | PSRAM | 25 | 22 | 32 | yes |
//! | V2 (version B) | 22 | 25 | 32 | yes |
//! | Wide | 22 | 25 | 32 | yes |
//! | ESP32CAM | 25 | 22 | 17 | no |
//! | UnitCam | 25 | 22 | 32 | no |

use super::{CameraBoard, CameraModel, Psram};
use crate::chip::Chip;
use crate::pins::{CameraPins, DataBus, SccbPins};

const MANUFACTURER: &str = "M5Stack";

/// Sensor reset GPIO on every M5Stack camera.
pub const RESET_GPIO: u8 = 15;

/// Wiring shared by the original M5Camera layout.
const BASE_PINS: CameraPins = CameraPins {
    pwdn: None,
    reset: Some(RESET_GPIO),
    xclk: 27,
    sccb: SccbPins { sda: 25, scl: 23 },
    data: DataBus::from_y(32, 35, 34, 5, 39, 18, 36, 19),
    vsync: 22,
    href: 26,
    pclk: 21,
};

/// Version B layout: SIOD and VSYNC exchanged.
const V2_PINS: CameraPins = CameraPins {
    sccb: SccbPins {
        sda: 22,
        scl: BASE_PINS.sccb.scl,
    },
    vsync: 25,
    ..BASE_PINS
};

/// M5Camera with PSRAM.
pub struct M5StackPsram;

impl CameraBoard for M5StackPsram {
    const MODEL: CameraModel = CameraModel::M5StackPsram;
    const NAME: &'static str = "M5Camera (PSRAM)";
    const MANUFACTURER: &'static str = MANUFACTURER;
    const CHIP: Chip = Chip::Esp32;
    const PSRAM: Psram = Psram::Present;
    const PINS: CameraPins = BASE_PINS;
}

/// M5Camera version B.
pub struct M5StackV2;

impl CameraBoard for M5StackV2 {
    const MODEL: CameraModel = CameraModel::M5StackV2;
    const NAME: &'static str = "M5Camera Version B";
    const MANUFACTURER: &'static str = MANUFACTURER;
    const CHIP: Chip = Chip::Esp32;
    const PSRAM: Psram = Psram::Present;
    const PINS: CameraPins = V2_PINS;
}

/// M5Stack wide-angle camera (M5CameraF).
pub struct M5StackWide;

impl CameraBoard for M5StackWide {
    const MODEL: CameraModel = CameraModel::M5StackWide;
    const NAME: &'static str = "M5Stack Wide Camera";
    const MANUFACTURER: &'static str = MANUFACTURER;
    const CHIP: Chip = Chip::Esp32;
    const PSRAM: Psram = Psram::Present;
    const PINS: CameraPins = V2_PINS;
    const LED_GPIO: Option<u8> = Some(2);
}

/// M5Stack ESP32CAM (no PSRAM).
pub struct M5StackEsp32Cam;

impl CameraBoard for M5StackEsp32Cam {
    const MODEL: CameraModel = CameraModel::M5StackEsp32Cam;
    const NAME: &'static str = "M5Stack ESP32CAM";
    const MANUFACTURER: &'static str = MANUFACTURER;
    const CHIP: Chip = Chip::Esp32;
    const PSRAM: Psram = Psram::Absent;
    const PINS: CameraPins = CameraPins {
        data: DataBus::from_y(17, 35, 34, 5, 39, 18, 36, 19),
        ..BASE_PINS
    };
}

/// M5Stack UnitCam (no PSRAM).
pub struct M5StackUnitCam;

impl CameraBoard for M5StackUnitCam {
    const MODEL: CameraModel = CameraModel::M5StackUnitCam;
    const NAME: &'static str = "M5Stack UnitCam";
    const MANUFACTURER: &'static str = MANUFACTURER;
    const CHIP: Chip = Chip::Esp32;
    const PSRAM: Psram = Psram::Absent;
    const PINS: CameraPins = BASE_PINS;
}
