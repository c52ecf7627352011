//! Camera board definitions and pin mappings.
//!
//! Each supported board is a zero-sized type implementing [`CameraBoard`],
//! carrying its wiring and hardware facts as associated constants.
//! [`CameraModel`] is the closed set of board identifiers; every lookup on
//! it is an exhaustive `match`, so a board cannot exist without a pin table.
//!
//! # Supported Boards
//!
//! | Model | Chip | PSRAM | Module |
//! |-------|------|-------|--------|
//! | `AI_THINKER` | ESP32 | yes | [`ai_thinker`] |
//! | `WROVER_KIT` | ESP32 | yes | [`espressif`] |
//! | `ESP_EYE` | ESP32 | yes | [`espressif`] |
//! | `M5STACK_PSRAM` | ESP32 | yes | [`m5stack`] |
//! | `M5STACK_V2` | ESP32 | yes | [`m5stack`] |
//! | `M5STACK_WIDE` | ESP32 | yes | [`m5stack`] |
//! | `M5STACK_ESP32CAM` | ESP32 | no | [`m5stack`] |
//! | `M5STACK_UNITCAM` | ESP32 | no | [`m5stack`] |
//! | `TTGO_T_JOURNAL` | ESP32 | no | [`ttgo`] |
//! | `ESP32_CAM_BOARD` | ESP32 | - | [`espressif`] |
//! | `ESP32S2_CAM_BOARD` | ESP32-S2 | - | [`espressif`] |
//! | `ESP32S3_CAM_LCD` | ESP32-S3 | - | [`espressif`] |
//! | `ESP32S3_EYE` | ESP32-S3 | yes | [`espressif`] |
//!
//! # Example
//!
//! ```
//! use esp32_cam_board::{CameraModel, Chip};
//!
//! let model: CameraModel = "CAMERA_MODEL_AI_THINKER".parse().unwrap();
//! assert_eq!(model.chip(), Chip::Esp32);
//! assert_eq!(model.pins().xclk, 0);
//! assert_eq!(model.pins().pwdn, Some(32));
//! ```

pub mod ai_thinker;
pub mod espressif;
pub mod m5stack;
pub mod ttgo;

use core::str::FromStr;

use crate::chip::Chip;
use crate::error::{ConfigError, PinResult};
use crate::pins::{CameraPins, Signal, validate_assignments};

pub use ai_thinker::AiThinker;
pub use espressif::{Esp32CamBoard, Esp32S2CamBoard, Esp32S3CamLcd, Esp32S3Eye, EspEye, WroverKit};
pub use m5stack::{M5StackEsp32Cam, M5StackPsram, M5StackUnitCam, M5StackV2, M5StackWide};
pub use ttgo::TtgoTJournal;

// =============================================================================
// Board Trait
// =============================================================================

/// External PSRAM fitted on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Psram {
    /// Board ships with PSRAM
    Present,
    /// Board has no PSRAM
    Absent,
    /// Depends on the module fitted; probe at runtime
    #[default]
    Unspecified,
}

impl Psram {
    /// Whether the board is known to carry PSRAM.
    #[must_use]
    pub const fn is_present(&self) -> bool {
        matches!(self, Psram::Present)
    }
}

/// Compile-time description of one camera board.
pub trait CameraBoard {
    /// Identifier of this board.
    const MODEL: CameraModel;
    /// Board name.
    const NAME: &'static str;
    /// Board manufacturer.
    const MANUFACTURER: &'static str;
    /// SoC on the board.
    const CHIP: Chip;
    /// External PSRAM.
    const PSRAM: Psram;
    /// Sensor wiring.
    const PINS: CameraPins;
    /// Alternate wiring when the sensor is plugged into the 18-pin header.
    const HEADER_PINS: Option<CameraPins> = None;
    /// Flash or status LED GPIO.
    const LED_GPIO: Option<u8> = None;
}

// =============================================================================
// Board Info
// =============================================================================

/// Runtime snapshot of a [`CameraBoard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardInfo {
    /// Board identifier
    pub model: CameraModel,
    /// Board name
    pub name: &'static str,
    /// Board manufacturer
    pub manufacturer: &'static str,
    /// SoC on the board
    pub chip: Chip,
    /// External PSRAM
    pub psram: Psram,
    /// Sensor wiring
    pub pins: CameraPins,
    /// Header wiring, if the board has one
    pub header_pins: Option<CameraPins>,
    /// Flash or status LED GPIO
    pub led_gpio: Option<u8>,
}

impl BoardInfo {
    /// Collect the constants of board type `B`.
    #[must_use]
    pub const fn of<B: CameraBoard>() -> Self {
        Self {
            model: B::MODEL,
            name: B::NAME,
            manufacturer: B::MANUFACTURER,
            chip: B::CHIP,
            psram: B::PSRAM,
            pins: B::PINS,
            header_pins: B::HEADER_PINS,
            led_gpio: B::LED_GPIO,
        }
    }

    /// Pin set for the requested wiring.
    ///
    /// Boards without a header fall back to their module wiring.
    #[must_use]
    pub const fn pins_for(&self, use_header: bool) -> CameraPins {
        match (use_header, self.header_pins) {
            (true, Some(pins)) => pins,
            _ => self.pins,
        }
    }

    /// Validate the board's wiring and LED against its chip.
    ///
    /// Both the module and the header wiring are checked.
    ///
    /// # Errors
    ///
    /// Returns the first [`PinError`](crate::PinError) found.
    pub fn validate(&self) -> PinResult<()> {
        let led = self.led_gpio.map(|gpio| (Signal::Led, gpio));
        validate_assignments(self.pins.assignments().chain(led), self.chip)?;
        if let Some(header) = self.header_pins {
            validate_assignments(header.assignments().chain(led), self.chip)?;
        }
        Ok(())
    }
}

// =============================================================================
// Camera Model
// =============================================================================

/// Number of supported camera boards.
pub const MODEL_COUNT: usize = 13;

/// Prefix shared by every build symbol.
const MACRO_PREFIX: &str = "CAMERA_MODEL_";

/// Supported camera boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CameraModel {
    /// AI-Thinker ESP32-CAM
    #[default]
    AiThinker,
    /// Espressif ESP-WROVER-KIT
    WroverKit,
    /// Espressif ESP-EYE
    EspEye,
    /// M5Stack camera with PSRAM
    M5StackPsram,
    /// M5Stack camera version B
    M5StackV2,
    /// M5Stack wide-angle camera
    M5StackWide,
    /// M5Stack ESP32CAM
    M5StackEsp32Cam,
    /// M5Stack UnitCam
    M5StackUnitCam,
    /// LilyGO TTGO T-Journal
    TtgoTJournal,
    /// Espressif ESP32 camera board
    Esp32CamBoard,
    /// Espressif ESP32-S2 camera board
    Esp32S2CamBoard,
    /// Espressif ESP32-S3 camera LCD board
    Esp32S3CamLcd,
    /// Espressif ESP32-S3-EYE
    Esp32S3Eye,
}

impl CameraModel {
    /// Every supported board, in build-symbol listing order.
    pub const ALL: [CameraModel; MODEL_COUNT] = [
        CameraModel::AiThinker,
        CameraModel::WroverKit,
        CameraModel::EspEye,
        CameraModel::M5StackPsram,
        CameraModel::M5StackV2,
        CameraModel::M5StackWide,
        CameraModel::M5StackEsp32Cam,
        CameraModel::M5StackUnitCam,
        CameraModel::TtgoTJournal,
        CameraModel::Esp32CamBoard,
        CameraModel::Esp32S2CamBoard,
        CameraModel::Esp32S3CamLcd,
        CameraModel::Esp32S3Eye,
    ];

    /// Board facts and wiring.
    #[must_use]
    pub const fn info(self) -> BoardInfo {
        match self {
            CameraModel::AiThinker => BoardInfo::of::<AiThinker>(),
            CameraModel::WroverKit => BoardInfo::of::<WroverKit>(),
            CameraModel::EspEye => BoardInfo::of::<EspEye>(),
            CameraModel::M5StackPsram => BoardInfo::of::<M5StackPsram>(),
            CameraModel::M5StackV2 => BoardInfo::of::<M5StackV2>(),
            CameraModel::M5StackWide => BoardInfo::of::<M5StackWide>(),
            CameraModel::M5StackEsp32Cam => BoardInfo::of::<M5StackEsp32Cam>(),
            CameraModel::M5StackUnitCam => BoardInfo::of::<M5StackUnitCam>(),
            CameraModel::TtgoTJournal => BoardInfo::of::<TtgoTJournal>(),
            CameraModel::Esp32CamBoard => BoardInfo::of::<Esp32CamBoard>(),
            CameraModel::Esp32S2CamBoard => BoardInfo::of::<Esp32S2CamBoard>(),
            CameraModel::Esp32S3CamLcd => BoardInfo::of::<Esp32S3CamLcd>(),
            CameraModel::Esp32S3Eye => BoardInfo::of::<Esp32S3Eye>(),
        }
    }

    /// Build symbol without the `CAMERA_MODEL_` prefix.
    #[must_use]
    pub const fn ident(self) -> &'static str {
        match self {
            CameraModel::AiThinker => "AI_THINKER",
            CameraModel::WroverKit => "WROVER_KIT",
            CameraModel::EspEye => "ESP_EYE",
            CameraModel::M5StackPsram => "M5STACK_PSRAM",
            CameraModel::M5StackV2 => "M5STACK_V2",
            CameraModel::M5StackWide => "M5STACK_WIDE",
            CameraModel::M5StackEsp32Cam => "M5STACK_ESP32CAM",
            CameraModel::M5StackUnitCam => "M5STACK_UNITCAM",
            CameraModel::TtgoTJournal => "TTGO_T_JOURNAL",
            CameraModel::Esp32CamBoard => "ESP32_CAM_BOARD",
            CameraModel::Esp32S2CamBoard => "ESP32S2_CAM_BOARD",
            CameraModel::Esp32S3CamLcd => "ESP32S3_CAM_LCD",
            CameraModel::Esp32S3Eye => "ESP32S3_EYE",
        }
    }

    /// Full build symbol, e.g. `CAMERA_MODEL_AI_THINKER`.
    #[must_use]
    pub const fn macro_name(self) -> &'static str {
        match self {
            CameraModel::AiThinker => "CAMERA_MODEL_AI_THINKER",
            CameraModel::WroverKit => "CAMERA_MODEL_WROVER_KIT",
            CameraModel::EspEye => "CAMERA_MODEL_ESP_EYE",
            CameraModel::M5StackPsram => "CAMERA_MODEL_M5STACK_PSRAM",
            CameraModel::M5StackV2 => "CAMERA_MODEL_M5STACK_V2",
            CameraModel::M5StackWide => "CAMERA_MODEL_M5STACK_WIDE",
            CameraModel::M5StackEsp32Cam => "CAMERA_MODEL_M5STACK_ESP32CAM",
            CameraModel::M5StackUnitCam => "CAMERA_MODEL_M5STACK_UNITCAM",
            CameraModel::TtgoTJournal => "CAMERA_MODEL_TTGO_T_JOURNAL",
            CameraModel::Esp32CamBoard => "CAMERA_MODEL_ESP32_CAM_BOARD",
            CameraModel::Esp32S2CamBoard => "CAMERA_MODEL_ESP32S2_CAM_BOARD",
            CameraModel::Esp32S3CamLcd => "CAMERA_MODEL_ESP32S3_CAM_LCD",
            CameraModel::Esp32S3Eye => "CAMERA_MODEL_ESP32S3_EYE",
        }
    }

    /// Cargo feature that selects this board.
    #[must_use]
    pub const fn feature_name(self) -> &'static str {
        match self {
            CameraModel::AiThinker => "ai-thinker",
            CameraModel::WroverKit => "wrover-kit",
            CameraModel::EspEye => "esp-eye",
            CameraModel::M5StackPsram => "m5stack-psram",
            CameraModel::M5StackV2 => "m5stack-v2",
            CameraModel::M5StackWide => "m5stack-wide",
            CameraModel::M5StackEsp32Cam => "m5stack-esp32cam",
            CameraModel::M5StackUnitCam => "m5stack-unitcam",
            CameraModel::TtgoTJournal => "ttgo-t-journal",
            CameraModel::Esp32CamBoard => "esp32-cam-board",
            CameraModel::Esp32S2CamBoard => "esp32s2-cam-board",
            CameraModel::Esp32S3CamLcd => "esp32s3-cam-lcd",
            CameraModel::Esp32S3Eye => "esp32s3-eye",
        }
    }

    /// Board name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.info().name
    }

    /// SoC on the board.
    #[must_use]
    pub const fn chip(self) -> Chip {
        self.info().chip
    }

    /// External PSRAM fitted on the board.
    #[must_use]
    pub const fn psram(self) -> Psram {
        self.info().psram
    }

    /// Module wiring of the sensor.
    #[must_use]
    pub const fn pins(self) -> CameraPins {
        self.info().pins
    }

    /// 18-pin header wiring, for boards that have one.
    #[must_use]
    pub const fn header_pins(self) -> Option<CameraPins> {
        self.info().header_pins
    }

    /// Flash or status LED GPIO.
    #[must_use]
    pub const fn led_gpio(self) -> Option<u8> {
        self.info().led_gpio
    }

    /// Look a board up by name.
    ///
    /// Accepts the build symbol with or without the `CAMERA_MODEL_` prefix
    /// and the Cargo feature name, ignoring ASCII case. `M5STACK_V2_PSRAM`
    /// is accepted for [`CameraModel::M5StackV2`].
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnknownModel`] if no board matches.
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        let name = name.trim();
        let ident = match name.get(..MACRO_PREFIX.len()) {
            Some(prefix) if prefix.eq_ignore_ascii_case(MACRO_PREFIX) => {
                &name[MACRO_PREFIX.len()..]
            }
            _ => name,
        };

        if ident_eq(ident, "M5STACK_V2_PSRAM") {
            return Ok(CameraModel::M5StackV2);
        }

        CameraModel::ALL
            .iter()
            .copied()
            .find(|model| ident_eq(ident, model.ident()))
            .ok_or(ConfigError::UnknownModel)
    }
}

/// Compare a user-supplied identifier against a build-symbol suffix,
/// treating `-` as `_` and ignoring ASCII case.
fn ident_eq(input: &str, ident: &str) -> bool {
    input.len() == ident.len()
        && input
            .bytes()
            .zip(ident.bytes())
            .all(|(a, b)| a.to_ascii_uppercase() == b || (a == b'-' && b == b'_'))
}

impl FromStr for CameraModel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CameraModel::from_name(s)
    }
}

impl core::fmt::Display for CameraModel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.macro_name())
    }
}
