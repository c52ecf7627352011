//! ESP32 chip variants and their GPIO capabilities.
//!
//! Only the chips that ship on supported camera boards are listed. The pin
//! tables follow the GPIO sets bonded out by each chip:
//!
//! | Chip     | GPIOs                      | Input-only |
//! |----------|----------------------------|------------|
//! | ESP32    | 0-23, 25-27, 32-39         | 34-39      |
//! | ESP32-S2 | 0-21, 26-46                | -          |
//! | ESP32-S3 | 0-21, 26-48                | -          |

/// SoC on a camera board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Chip {
    /// Original dual-core Xtensa ESP32
    Esp32,
    /// Single-core Xtensa ESP32-S2
    Esp32S2,
    /// Dual-core Xtensa ESP32-S3
    Esp32S3,
}

impl Chip {
    /// Chip name as printed in Espressif documentation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Chip::Esp32 => "ESP32",
            Chip::Esp32S2 => "ESP32-S2",
            Chip::Esp32S3 => "ESP32-S3",
        }
    }

    /// Highest GPIO number on the chip.
    #[must_use]
    pub const fn max_gpio(&self) -> u8 {
        match self {
            Chip::Esp32 => 39,
            Chip::Esp32S2 => 46,
            Chip::Esp32S3 => 48,
        }
    }

    /// Whether `gpio` exists on this chip.
    #[must_use]
    pub const fn is_valid_gpio(&self, gpio: u8) -> bool {
        match self {
            Chip::Esp32 => matches!(gpio, 0..=23 | 25..=27 | 32..=39),
            Chip::Esp32S2 => matches!(gpio, 0..=21 | 26..=46),
            Chip::Esp32S3 => matches!(gpio, 0..=21 | 26..=48),
        }
    }

    /// Whether `gpio` exists and can drive an output.
    #[must_use]
    pub const fn is_output_capable(&self, gpio: u8) -> bool {
        if !self.is_valid_gpio(gpio) {
            return false;
        }
        match self {
            Chip::Esp32 => gpio < 34,
            Chip::Esp32S2 | Chip::Esp32S3 => true,
        }
    }

    /// Number of GPIOs bonded out.
    #[must_use]
    pub const fn gpio_count(&self) -> usize {
        let mut count = 0;
        let mut gpio = 0;
        while gpio <= self.max_gpio() {
            if self.is_valid_gpio(gpio) {
                count += 1;
            }
            gpio += 1;
        }
        count
    }
}

impl core::fmt::Display for Chip {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
