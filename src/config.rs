//! Camera driver initialization configuration
//!
//! [`CameraConfig`] is everything the esp32-camera driver needs at init
//! time: the board wiring, the XCLK source, the capture format and the
//! frame buffer strategy. Build one from a board and refine it with the
//! `with_*` methods:
//!
//! ```
//! use esp32_cam_board::{CameraConfig, CameraModel, FrameSize, GrabMode};
//!
//! let config = CameraConfig::for_board(CameraModel::AiThinker, true)
//!     .with_frame_size(FrameSize::Vga);
//!
//! assert_eq!(config.fb_count, 2);
//! assert_eq!(config.grab_mode, GrabMode::Latest);
//! assert!(config.validate(true).is_ok());
//! ```

use crate::boards::CameraModel;
use crate::chip::Chip;
use crate::error::{ConfigError, ConfigResult};
use crate::internal::constants::{
    DEFAULT_FB_COUNT, DEFAULT_JPEG_QUALITY, DEFAULT_LEDC_CHANNEL, DEFAULT_LEDC_TIMER,
    DEFAULT_XCLK_HZ, JPEG_QUALITY_MAX, PSRAM_FB_COUNT, PSRAM_JPEG_QUALITY, XCLK_MAX_HZ,
    XCLK_MIN_HZ,
};
use crate::pins::CameraPins;

/// Sensor output pixel format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PixelFormat {
    /// 16-bit RGB 5-6-5
    Rgb565,
    /// YUYV 4:2:2
    Yuv422,
    /// YUV 4:2:0
    Yuv420,
    /// 8-bit luminance only
    Grayscale,
    /// Compressed by the sensor's JPEG engine
    #[default]
    Jpeg,
    /// 24-bit RGB (converted in software)
    Rgb888,
    /// Raw Bayer
    Raw,
    /// 12-bit RGB 4-4-4
    Rgb444,
    /// 15-bit RGB 5-5-5
    Rgb555,
}

impl PixelFormat {
    /// Whether frames are JPEG-compressed
    #[must_use]
    pub const fn is_jpeg(&self) -> bool {
        matches!(self, PixelFormat::Jpeg)
    }
}

/// Capture resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameSize {
    /// 96x96
    R96x96,
    /// 160x120
    Qqvga,
    /// 176x144
    Qcif,
    /// 240x176
    Hqvga,
    /// 240x240
    R240x240,
    /// 320x240
    Qvga,
    /// 400x296
    Cif,
    /// 480x320
    Hvga,
    /// 640x480
    Vga,
    /// 800x600
    Svga,
    /// 1024x768
    Xga,
    /// 1280x720
    Hd,
    /// 1280x1024
    Sxga,
    /// 1600x1200
    #[default]
    Uxga,
    /// 1920x1080
    Fhd,
    /// 2048x1536
    Qxga,
}

impl FrameSize {
    /// Width and height in pixels
    #[must_use]
    pub const fn dimensions(&self) -> (u16, u16) {
        match self {
            FrameSize::R96x96 => (96, 96),
            FrameSize::Qqvga => (160, 120),
            FrameSize::Qcif => (176, 144),
            FrameSize::Hqvga => (240, 176),
            FrameSize::R240x240 => (240, 240),
            FrameSize::Qvga => (320, 240),
            FrameSize::Cif => (400, 296),
            FrameSize::Hvga => (480, 320),
            FrameSize::Vga => (640, 480),
            FrameSize::Svga => (800, 600),
            FrameSize::Xga => (1024, 768),
            FrameSize::Hd => (1280, 720),
            FrameSize::Sxga => (1280, 1024),
            FrameSize::Uxga => (1600, 1200),
            FrameSize::Fhd => (1920, 1080),
            FrameSize::Qxga => (2048, 1536),
        }
    }

    /// Total pixel count
    #[must_use]
    pub const fn pixels(&self) -> u32 {
        let (w, h) = self.dimensions();
        w as u32 * h as u32
    }
}

/// Where frame buffers are allocated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameBufferLocation {
    /// External PSRAM
    #[default]
    Psram,
    /// Internal DRAM
    Dram,
}

/// When the driver refills frame buffers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GrabMode {
    /// Fill buffers only when empty; frames may be stale
    #[default]
    WhenEmpty,
    /// Keep overwriting so the returned frame is the newest
    Latest,
}

/// Complete camera initialization configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CameraConfig {
    /// Board wiring
    pub pins: CameraPins,
    /// XCLK frequency in Hz
    pub xclk_freq_hz: u32,
    /// LEDC timer generating XCLK
    pub ledc_timer: u8,
    /// LEDC channel generating XCLK
    pub ledc_channel: u8,
    /// Sensor output format
    pub pixel_format: PixelFormat,
    /// Capture resolution
    pub frame_size: FrameSize,
    /// JPEG quality, 0-63, lower is better
    pub jpeg_quality: u8,
    /// Number of frame buffers
    pub fb_count: u8,
    /// Frame buffer memory
    pub fb_location: FrameBufferLocation,
    /// Buffer refill policy
    pub grab_mode: GrabMode,
    /// Reuse an already initialized I2C port for SCCB instead of the SCCB pins
    pub sccb_i2c_port: Option<u8>,
}

impl CameraConfig {
    /// Create a configuration with driver defaults for the given wiring.
    ///
    /// 20 MHz XCLK on LEDC timer/channel 0, JPEG at UXGA, quality 12, one
    /// frame buffer in PSRAM, refilled when empty.
    #[must_use]
    pub const fn new(pins: CameraPins) -> Self {
        Self {
            pins,
            xclk_freq_hz: DEFAULT_XCLK_HZ,
            ledc_timer: DEFAULT_LEDC_TIMER,
            ledc_channel: DEFAULT_LEDC_CHANNEL,
            pixel_format: PixelFormat::Jpeg,
            frame_size: FrameSize::Uxga,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            fb_count: DEFAULT_FB_COUNT,
            fb_location: FrameBufferLocation::Psram,
            grab_mode: GrabMode::WhenEmpty,
            sccb_i2c_port: None,
        }
    }

    /// Driver defaults for a board, tuned for the memory actually found.
    ///
    /// # Arguments
    ///
    /// * `model` - Camera board
    /// * `psram_found` - Result of the runtime PSRAM probe
    #[must_use]
    pub fn for_board(model: CameraModel, psram_found: bool) -> Self {
        Self::new(model.pins()).tuned_for_memory(model.chip(), psram_found)
    }

    /// Adjust buffering and resolution to the available memory.
    ///
    /// - JPEG with PSRAM: quality 10, two buffers, latest-frame grabbing
    /// - JPEG without PSRAM: SVGA
    /// - Other formats: 240x240 (two buffers on ESP32-S3)
    /// - Without PSRAM, buffers always move to DRAM
    #[must_use]
    pub fn tuned_for_memory(mut self, chip: Chip, psram_found: bool) -> Self {
        if self.pixel_format.is_jpeg() {
            if psram_found {
                self.jpeg_quality = PSRAM_JPEG_QUALITY;
                self.fb_count = PSRAM_FB_COUNT;
                self.grab_mode = GrabMode::Latest;
            } else {
                self.frame_size = FrameSize::Svga;
            }
        } else {
            self.frame_size = FrameSize::R240x240;
            if chip == Chip::Esp32S3 {
                self.fb_count = PSRAM_FB_COUNT;
            }
        }
        if !psram_found {
            self.fb_location = FrameBufferLocation::Dram;
        }

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "camera config: {} psram={} fb_count={} quality={}",
            self.frame_size,
            psram_found,
            self.fb_count,
            self.jpeg_quality
        );

        self
    }

    // =========================================================================
    // Builder Methods
    // =========================================================================

    /// Replace the board wiring
    #[must_use]
    pub const fn with_pins(mut self, pins: CameraPins) -> Self {
        self.pins = pins;
        self
    }

    /// Set the XCLK frequency
    #[must_use]
    pub const fn with_xclk_freq_hz(mut self, freq_hz: u32) -> Self {
        self.xclk_freq_hz = freq_hz;
        self
    }

    /// Set the LEDC timer and channel used for XCLK
    #[must_use]
    pub const fn with_ledc(mut self, timer: u8, channel: u8) -> Self {
        self.ledc_timer = timer;
        self.ledc_channel = channel;
        self
    }

    /// Set the pixel format
    #[must_use]
    pub const fn with_pixel_format(mut self, format: PixelFormat) -> Self {
        self.pixel_format = format;
        self
    }

    /// Set the frame size
    #[must_use]
    pub const fn with_frame_size(mut self, size: FrameSize) -> Self {
        self.frame_size = size;
        self
    }

    /// Set the JPEG quality (0-63, lower is better)
    #[must_use]
    pub const fn with_jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = quality;
        self
    }

    /// Set the number of frame buffers
    #[must_use]
    pub const fn with_fb_count(mut self, count: u8) -> Self {
        self.fb_count = count;
        self
    }

    /// Set the frame buffer memory
    #[must_use]
    pub const fn with_fb_location(mut self, location: FrameBufferLocation) -> Self {
        self.fb_location = location;
        self
    }

    /// Set the grab mode
    #[must_use]
    pub const fn with_grab_mode(mut self, mode: GrabMode) -> Self {
        self.grab_mode = mode;
        self
    }

    /// Share an initialized I2C port for SCCB
    #[must_use]
    pub const fn with_sccb_i2c_port(mut self, port: u8) -> Self {
        self.sccb_i2c_port = Some(port);
        self
    }

    /// Check the configuration before handing it to the driver.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidXclkFrequency`] outside 1-40 MHz
    /// - [`ConfigError::InvalidJpegQuality`] above 63
    /// - [`ConfigError::InvalidFrameBufferCount`] for zero buffers
    /// - [`ConfigError::PsramUnavailable`] for PSRAM buffers without PSRAM
    pub const fn validate(&self, psram_found: bool) -> ConfigResult<()> {
        if self.xclk_freq_hz < XCLK_MIN_HZ || self.xclk_freq_hz > XCLK_MAX_HZ {
            return Err(ConfigError::InvalidXclkFrequency);
        }
        if self.jpeg_quality > JPEG_QUALITY_MAX {
            return Err(ConfigError::InvalidJpegQuality);
        }
        if self.fb_count == 0 {
            return Err(ConfigError::InvalidFrameBufferCount);
        }
        if matches!(self.fb_location, FrameBufferLocation::Psram) && !psram_found {
            return Err(ConfigError::PsramUnavailable);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_driver_defaults() {
        let config = CameraConfig::new(CameraModel::AiThinker.pins());
        assert_eq!(config.xclk_freq_hz, 20_000_000);
        assert_eq!((config.ledc_timer, config.ledc_channel), (0, 0));
        assert_eq!(config.pixel_format, PixelFormat::Jpeg);
        assert_eq!(config.frame_size, FrameSize::Uxga);
        assert_eq!(config.jpeg_quality, 12);
        assert_eq!(config.fb_count, 1);
        assert_eq!(config.fb_location, FrameBufferLocation::Psram);
        assert_eq!(config.grab_mode, GrabMode::WhenEmpty);
        assert_eq!(config.sccb_i2c_port, None);
    }

    #[test]
    fn jpeg_with_psram() {
        let config = CameraConfig::for_board(CameraModel::AiThinker, true);
        assert_eq!(config.jpeg_quality, 10);
        assert_eq!(config.fb_count, 2);
        assert_eq!(config.grab_mode, GrabMode::Latest);
        assert_eq!(config.frame_size, FrameSize::Uxga);
        assert_eq!(config.fb_location, FrameBufferLocation::Psram);
        assert_eq!(config.validate(true), Ok(()));
    }

    #[test]
    fn jpeg_without_psram() {
        let config = CameraConfig::for_board(CameraModel::M5StackUnitCam, false);
        assert_eq!(config.frame_size, FrameSize::Svga);
        assert_eq!(config.fb_location, FrameBufferLocation::Dram);
        assert_eq!(config.fb_count, 1);
        assert_eq!(config.jpeg_quality, 12);
        assert_eq!(config.validate(false), Ok(()));
    }

    #[test]
    fn raw_formats_use_240x240() {
        let pins = CameraModel::Esp32S3Eye.pins();
        let s3 = CameraConfig::new(pins)
            .with_pixel_format(PixelFormat::Rgb565)
            .tuned_for_memory(Chip::Esp32S3, true);
        assert_eq!(s3.frame_size, FrameSize::R240x240);
        assert_eq!(s3.fb_count, 2);
        assert_eq!(s3.grab_mode, GrabMode::WhenEmpty);

        let esp32 = CameraConfig::new(CameraModel::AiThinker.pins())
            .with_pixel_format(PixelFormat::Grayscale)
            .tuned_for_memory(Chip::Esp32, false);
        assert_eq!(esp32.frame_size, FrameSize::R240x240);
        assert_eq!(esp32.fb_count, 1);
        assert_eq!(esp32.fb_location, FrameBufferLocation::Dram);
    }

    #[test]
    fn defaults_validate_for_every_board() {
        for model in CameraModel::ALL {
            for psram in [false, true] {
                let config = CameraConfig::for_board(model, psram);
                assert_eq!(config.validate(psram), Ok(()), "{model} psram={psram}");
                assert_eq!(config.pins, model.pins());
            }
        }
    }

    #[test]
    fn validate_rejects_bad_values() {
        let base = CameraConfig::for_board(CameraModel::AiThinker, true);

        assert_eq!(
            base.with_xclk_freq_hz(0).validate(true),
            Err(ConfigError::InvalidXclkFrequency)
        );
        assert_eq!(
            base.with_xclk_freq_hz(XCLK_MAX_HZ + 1).validate(true),
            Err(ConfigError::InvalidXclkFrequency)
        );
        assert!(base.with_xclk_freq_hz(XCLK_MAX_HZ).validate(true).is_ok());
        assert_eq!(
            base.with_jpeg_quality(64).validate(true),
            Err(ConfigError::InvalidJpegQuality)
        );
        assert!(base.with_jpeg_quality(63).validate(true).is_ok());
        assert_eq!(
            base.with_fb_count(0).validate(true),
            Err(ConfigError::InvalidFrameBufferCount)
        );
        assert_eq!(base.validate(false), Err(ConfigError::PsramUnavailable));
        assert!(
            base.with_fb_location(FrameBufferLocation::Dram)
                .validate(false)
                .is_ok()
        );
    }

    #[test]
    fn builder_sets_fields() {
        let config = CameraConfig::new(CameraModel::EspEye.pins())
            .with_ledc(1, 2)
            .with_grab_mode(GrabMode::Latest)
            .with_sccb_i2c_port(0)
            .with_pins(CameraModel::WroverKit.pins());
        assert_eq!((config.ledc_timer, config.ledc_channel), (1, 2));
        assert_eq!(config.grab_mode, GrabMode::Latest);
        assert_eq!(config.sccb_i2c_port, Some(0));
        assert_eq!(config.pins, CameraModel::WroverKit.pins());
    }

    #[test]
    fn frame_size_dimensions() {
        assert_eq!(FrameSize::Uxga.dimensions(), (1600, 1200));
        assert_eq!(FrameSize::Svga.pixels(), 480_000);
        assert_eq!(FrameSize::R240x240.pixels(), 57_600);
    }
}
