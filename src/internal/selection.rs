//! Cargo-feature board selection.
//!
//! Exactly one board feature must be enabled. Zero is rejected by a
//! `compile_error!` in `lib.rs`; more than one is rejected here by a failing
//! constant assertion, so the build never resolves an ambiguous pin table.

use crate::boards::CameraModel;

/// Number of board features enabled in this build.
pub(crate) const ENABLED_COUNT: usize = cfg!(feature = "ai-thinker") as usize
    + cfg!(feature = "wrover-kit") as usize
    + cfg!(feature = "esp-eye") as usize
    + cfg!(feature = "m5stack-psram") as usize
    + cfg!(feature = "m5stack-v2") as usize
    + cfg!(feature = "m5stack-wide") as usize
    + cfg!(feature = "m5stack-esp32cam") as usize
    + cfg!(feature = "m5stack-unitcam") as usize
    + cfg!(feature = "ttgo-t-journal") as usize
    + cfg!(feature = "esp32-cam-board") as usize
    + cfg!(feature = "esp32s2-cam-board") as usize
    + cfg!(feature = "esp32s3-cam-lcd") as usize
    + cfg!(feature = "esp32s3-eye") as usize;

const _: () = assert!(
    ENABLED_COUNT <= 1,
    "camera board features are mutually exclusive: enable exactly one of \
     ai-thinker, wrover-kit, esp-eye, m5stack-psram, m5stack-v2, m5stack-wide, \
     m5stack-esp32cam, m5stack-unitcam, ttgo-t-journal, esp32-cam-board, \
     esp32s2-cam-board, esp32s3-cam-lcd, esp32s3-eye (use default-features = false)"
);

/// Board selected by the enabled feature.
pub(crate) const SELECTED: CameraModel = if cfg!(feature = "wrover-kit") {
    CameraModel::WroverKit
} else if cfg!(feature = "esp-eye") {
    CameraModel::EspEye
} else if cfg!(feature = "m5stack-psram") {
    CameraModel::M5StackPsram
} else if cfg!(feature = "m5stack-v2") {
    CameraModel::M5StackV2
} else if cfg!(feature = "m5stack-wide") {
    CameraModel::M5StackWide
} else if cfg!(feature = "m5stack-esp32cam") {
    CameraModel::M5StackEsp32Cam
} else if cfg!(feature = "m5stack-unitcam") {
    CameraModel::M5StackUnitCam
} else if cfg!(feature = "ttgo-t-journal") {
    CameraModel::TtgoTJournal
} else if cfg!(feature = "esp32-cam-board") {
    CameraModel::Esp32CamBoard
} else if cfg!(feature = "esp32s2-cam-board") {
    CameraModel::Esp32S2CamBoard
} else if cfg!(feature = "esp32s3-cam-lcd") {
    CameraModel::Esp32S3CamLcd
} else if cfg!(feature = "esp32s3-eye") {
    CameraModel::Esp32S3Eye
} else {
    // ai-thinker; the zero-feature case never compiles
    CameraModel::AiThinker
};

/// Whether the 18-pin header wiring was requested.
pub(crate) const USE_BOARD_HEADER: bool = cfg!(feature = "board-header");
