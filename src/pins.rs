//! Camera pin sets.
//!
//! A [`CameraPins`] value is the complete wiring between an ESP32 and its
//! camera sensor: the parallel DVP data bus, the sync/clock lines, the SCCB
//! control bus, and the optional power-down and reset lines.
//!
//! # Signal Overview
//!
//! | Signal | Direction (ESP32 side) | Notes |
//! |--------|------------------------|-------|
//! | XCLK   | Output | Master clock into the sensor (LEDC) |
//! | PCLK   | Input  | Pixel clock from the sensor |
//! | VSYNC  | Input  | Frame sync |
//! | HREF   | Input  | Line valid |
//! | Y2..Y9 | Input  | Data bus D0..D7 |
//! | SIOD   | In/Out | SCCB data (open drain) |
//! | SIOC   | Output | SCCB clock |
//! | PWDN   | Output | Power-down, active high (optional) |
//! | RESET  | Output | Reset, active low (optional) |
//!
//! Board headers usually label the data lines Y2..Y9 after the sensor's
//! 10-bit bus; the ESP32 only samples the upper eight, so `Y2` is `D0`.

use crate::chip::Chip;
use crate::error::{PinError, PinResult};

// =============================================================================
// Signals
// =============================================================================

/// A logical camera interface signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Signal {
    /// Sensor power-down (active high)
    Pwdn,
    /// Sensor reset (active low)
    Reset,
    /// Master clock output
    Xclk,
    /// SCCB data
    Siod,
    /// SCCB clock
    Sioc,
    /// Data bus bit `n` (0 = Y2, 7 = Y9)
    ///
    /// Only bits 0..=7 exist; higher bits name no pin (`"Y?"`) and resolve
    /// to no GPIO. Use [`Signal::data`] for a checked value.
    Data(u8),
    /// Vertical sync
    Vsync,
    /// Horizontal reference
    Href,
    /// Pixel clock
    Pclk,
    /// Flash / status LED
    Led,
}

impl Signal {
    /// Data bus signal for `bit`, `None` above bit 7.
    #[must_use]
    pub const fn data(bit: u8) -> Option<Self> {
        if bit < 8 { Some(Signal::Data(bit)) } else { None }
    }

    /// Returns the board silkscreen name of the signal.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Signal::Pwdn => "PWDN",
            Signal::Reset => "RESET",
            Signal::Xclk => "XCLK",
            Signal::Siod => "SIOD",
            Signal::Sioc => "SIOC",
            Signal::Data(0) => "Y2",
            Signal::Data(1) => "Y3",
            Signal::Data(2) => "Y4",
            Signal::Data(3) => "Y5",
            Signal::Data(4) => "Y6",
            Signal::Data(5) => "Y7",
            Signal::Data(6) => "Y8",
            Signal::Data(7) => "Y9",
            Signal::Data(_) => "Y?",
            Signal::Vsync => "VSYNC",
            Signal::Href => "HREF",
            Signal::Pclk => "PCLK",
            Signal::Led => "LED",
        }
    }

    /// Whether the ESP32 drives this signal.
    ///
    /// SIOD is bidirectional and counts as driven.
    #[must_use]
    pub const fn is_driven(&self) -> bool {
        matches!(
            self,
            Signal::Pwdn | Signal::Reset | Signal::Xclk | Signal::Siod | Signal::Sioc | Signal::Led
        )
    }
}

impl core::fmt::Display for Signal {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Pin Groups
// =============================================================================

/// SCCB (camera I2C) bus pins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SccbPins {
    /// SIOD / SDA GPIO
    pub sda: u8,
    /// SIOC / SCL GPIO
    pub scl: u8,
}

/// Eight-bit parallel data bus, `D0` (Y2) first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DataBus(pub [u8; 8]);

impl DataBus {
    /// Build the bus from the silkscreen order used on board schematics.
    #[must_use]
    pub const fn from_y(
        y2: u8,
        y3: u8,
        y4: u8,
        y5: u8,
        y6: u8,
        y7: u8,
        y8: u8,
        y9: u8,
    ) -> Self {
        Self([y2, y3, y4, y5, y6, y7, y8, y9])
    }

    /// GPIO for data bit `bit` (0..=7).
    #[must_use]
    pub const fn bit(&self, bit: usize) -> Option<u8> {
        if bit < 8 { Some(self.0[bit]) } else { None }
    }

    /// Return a copy with two data bits exchanged.
    ///
    /// Out-of-range bits leave the bus unchanged.
    #[must_use]
    pub const fn swapped(mut self, a: usize, b: usize) -> Self {
        if a >= 8 || b >= 8 {
            return self;
        }
        let tmp = self.0[a];
        self.0[a] = self.0[b];
        self.0[b] = tmp;
        self
    }
}

// =============================================================================
// Camera Pins
// =============================================================================

/// Number of signals in a fully connected pin set.
pub const SIGNAL_COUNT: usize = 16;

/// Complete camera wiring for one board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CameraPins {
    /// Power-down GPIO (`None` = not connected)
    pub pwdn: Option<u8>,
    /// Reset GPIO (`None` = not connected, sensor uses soft reset)
    pub reset: Option<u8>,
    /// Master clock GPIO
    pub xclk: u8,
    /// SCCB control bus
    pub sccb: SccbPins,
    /// Parallel data bus
    pub data: DataBus,
    /// Vertical sync GPIO
    pub vsync: u8,
    /// Horizontal reference GPIO
    pub href: u8,
    /// Pixel clock GPIO
    pub pclk: u8,
}

impl CameraPins {
    /// GPIO assigned to `signal`, if connected.
    ///
    /// [`Signal::Led`] is a board property, not part of the sensor
    /// wiring, and always returns `None` here.
    #[must_use]
    pub const fn gpio_for(&self, signal: Signal) -> Option<u8> {
        match signal {
            Signal::Pwdn => self.pwdn,
            Signal::Reset => self.reset,
            Signal::Xclk => Some(self.xclk),
            Signal::Siod => Some(self.sccb.sda),
            Signal::Sioc => Some(self.sccb.scl),
            Signal::Data(bit) => self.data.bit(bit as usize),
            Signal::Vsync => Some(self.vsync),
            Signal::Href => Some(self.href),
            Signal::Pclk => Some(self.pclk),
            Signal::Led => None,
        }
    }

    /// Iterate over every connected `(signal, gpio)` pair.
    pub fn assignments(&self) -> Assignments<'_> {
        Assignments {
            pins: self,
            index: 0,
        }
    }

    /// Whether any signal is routed to `gpio`.
    #[must_use]
    pub fn uses_gpio(&self, gpio: u8) -> bool {
        self.assignments().any(|(_, g)| g == gpio)
    }

    /// Number of connected signals.
    #[must_use]
    pub fn connected_count(&self) -> usize {
        self.assignments().count()
    }

    /// Check the pin set against a chip's GPIO capabilities.
    ///
    /// # Errors
    ///
    /// - [`PinError::NonexistentGpio`] if a GPIO is not bonded out on `chip`
    /// - [`PinError::InputOnlyGpio`] if a driven signal sits on an input-only GPIO
    /// - [`PinError::DuplicateGpio`] if two signals share a GPIO
    pub fn validate(&self, chip: Chip) -> PinResult<()> {
        validate_assignments(self.assignments(), chip)
    }
}

/// Validate an arbitrary `(signal, gpio)` sequence.
///
/// Used for the sensor wiring alone and for the wiring plus board extras
/// such as the LED.
pub(crate) fn validate_assignments<I>(assignments: I, chip: Chip) -> PinResult<()>
where
    I: Iterator<Item = (Signal, u8)> + Clone,
{
    for (index, (signal, gpio)) in assignments.clone().enumerate() {
        if !chip.is_valid_gpio(gpio) {
            return Err(PinError::NonexistentGpio { signal, gpio });
        }
        if signal.is_driven() && !chip.is_output_capable(gpio) {
            return Err(PinError::InputOnlyGpio { signal, gpio });
        }
        if let Some((first, _)) = assignments
            .clone()
            .take(index)
            .find(|&(_, other)| other == gpio)
        {
            return Err(PinError::DuplicateGpio {
                first,
                second: signal,
                gpio,
            });
        }
    }
    Ok(())
}

/// Iterator returned by [`CameraPins::assignments`].
#[derive(Debug, Clone)]
pub struct Assignments<'a> {
    pins: &'a CameraPins,
    index: usize,
}

/// Fixed iteration order of [`Assignments`].
const SIGNAL_ORDER: [Signal; SIGNAL_COUNT] = [
    Signal::Pwdn,
    Signal::Reset,
    Signal::Xclk,
    Signal::Siod,
    Signal::Sioc,
    Signal::Data(7),
    Signal::Data(6),
    Signal::Data(5),
    Signal::Data(4),
    Signal::Data(3),
    Signal::Data(2),
    Signal::Data(1),
    Signal::Data(0),
    Signal::Vsync,
    Signal::Href,
    Signal::Pclk,
];

impl Iterator for Assignments<'_> {
    type Item = (Signal, u8);

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < SIGNAL_ORDER.len() {
            let signal = SIGNAL_ORDER[self.index];
            self.index += 1;
            if let Some(gpio) = self.pins.gpio_for(signal) {
                return Some((signal, gpio));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use std::vec::Vec;

    use super::*;

    const PINS: CameraPins = CameraPins {
        pwdn: Some(32),
        reset: None,
        xclk: 0,
        sccb: SccbPins { sda: 26, scl: 27 },
        data: DataBus::from_y(5, 18, 19, 21, 36, 39, 34, 35),
        vsync: 25,
        href: 23,
        pclk: 22,
    };

    #[test]
    fn data_bus_maps_y2_to_d0() {
        assert_eq!(PINS.gpio_for(Signal::Data(0)), Some(5));
        assert_eq!(PINS.gpio_for(Signal::Data(7)), Some(35));
        assert_eq!(PINS.gpio_for(Signal::Data(8)), None);
    }

    #[test]
    fn assignments_skip_unconnected() {
        let all: Vec<_> = PINS.assignments().collect();
        assert_eq!(all.len(), SIGNAL_COUNT - 1);
        assert!(!all.iter().any(|(s, _)| *s == Signal::Reset));
        assert_eq!(all[0], (Signal::Pwdn, 32));
        assert_eq!(PINS.connected_count(), 15);
    }

    #[test]
    fn uses_gpio() {
        assert!(PINS.uses_gpio(32));
        assert!(PINS.uses_gpio(5));
        assert!(!PINS.uses_gpio(4));
    }

    #[test]
    fn valid_pins_pass() {
        assert_eq!(PINS.validate(Chip::Esp32), Ok(()));
    }

    #[test]
    fn duplicate_gpio_rejected() {
        let pins = CameraPins { href: 25, ..PINS };
        assert_eq!(
            pins.validate(Chip::Esp32),
            Err(PinError::DuplicateGpio {
                first: Signal::Vsync,
                second: Signal::Href,
                gpio: 25,
            })
        );
    }

    #[test]
    fn input_only_gpio_rejected_for_driven_signal() {
        let pins = CameraPins { xclk: 34, ..PINS };
        assert!(matches!(
            pins.validate(Chip::Esp32),
            Err(PinError::InputOnlyGpio { signal: Signal::Xclk, gpio: 34 })
        ));
    }

    #[test]
    fn nonexistent_gpio_rejected() {
        let pins = CameraPins { pclk: 24, ..PINS };
        assert_eq!(
            pins.validate(Chip::Esp32),
            Err(PinError::NonexistentGpio { signal: Signal::Pclk, gpio: 24 })
        );
        // ESP32 wiring is not portable to the S3 (GPIO22..=25 are missing)
        assert_eq!(
            PINS.validate(Chip::Esp32S3),
            Err(PinError::NonexistentGpio { signal: Signal::Vsync, gpio: 25 })
        );
    }

    #[test]
    fn swapped_exchanges_bits() {
        let bus = PINS.data.swapped(1, 3);
        assert_eq!(bus.bit(1), Some(21));
        assert_eq!(bus.bit(3), Some(18));
        assert_eq!(bus.bit(0), PINS.data.bit(0));
    }

    #[test]
    fn swapped_ignores_out_of_range_bits() {
        let bus = DataBus([0, 1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(bus.swapped(1, 8), bus);
        assert_eq!(bus.swapped(200, 0), bus);
    }

    #[test]
    fn data_signal_is_checked() {
        assert_eq!(Signal::data(0), Some(Signal::Data(0)));
        assert_eq!(Signal::data(7), Some(Signal::Data(7)));
        assert_eq!(Signal::data(8), None);
        assert_eq!(Signal::Data(8).as_str(), "Y?");
    }

    #[test]
    fn signal_names() {
        assert_eq!(Signal::Data(0).as_str(), "Y2");
        assert_eq!(Signal::Data(7).as_str(), "Y9");
        assert_eq!(Signal::Siod.as_str(), "SIOD");
        assert!(Signal::Siod.is_driven());
        assert!(!Signal::Pclk.is_driven());
    }
}
