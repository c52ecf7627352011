//! Testing utilities and mock implementations
//!
//! Mock `embedded-hal` pins and delays that record what the code under test
//! did, so control-line sequencing can be checked on the host.
//!
//! Only available when running `cargo test`.

// Note: The #[cfg(test)] attribute is applied in lib.rs where this module is declared
#![allow(missing_docs)]
#![allow(clippy::std_instead_of_core, clippy::std_instead_of_alloc)]

extern crate std;

use core::cell::RefCell;
use core::convert::Infallible;
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::digital::{Error, ErrorKind, ErrorType, OutputPin};

// =============================================================================
// Event Log
// =============================================================================

/// Something a mock observed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Pin driven to a level (`true` = high)
    Level(&'static str, bool),
    /// Delay requested, in nanoseconds
    DelayNs(u32),
}

/// Shared, ordered record of mock events
#[derive(Debug, Clone, Default)]
pub struct EventLog(Rc<RefCell<Vec<Event>>>);

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }

    /// Snapshot of every event so far
    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }
}

// =============================================================================
// Mock Output Pin
// =============================================================================

/// Error reported by a failing [`MockPin`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockPinError;

impl Error for MockPinError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Mock output pin that logs every level change
#[derive(Debug)]
pub struct MockPin {
    name: &'static str,
    log: EventLog,
    fail: bool,
    fail_low: bool,
    high: Option<bool>,
}

impl MockPin {
    pub fn new(name: &'static str, log: &EventLog) -> Self {
        Self {
            name,
            log: log.clone(),
            fail: false,
            fail_low: false,
            high: None,
        }
    }

    /// A pin whose every write fails
    pub fn failing(name: &'static str, log: &EventLog) -> Self {
        Self {
            fail: true,
            ..Self::new(name, log)
        }
    }

    /// A pin that can be driven high but not low
    pub fn failing_low(name: &'static str, log: &EventLog) -> Self {
        Self {
            fail_low: true,
            ..Self::new(name, log)
        }
    }

    /// Last level driven, `None` if never driven
    pub fn level(&self) -> Option<bool> {
        self.high
    }

    fn drive(&mut self, high: bool) -> Result<(), MockPinError> {
        if self.fail || (self.fail_low && !high) {
            return Err(MockPinError);
        }
        self.high = Some(high);
        self.log.push(Event::Level(self.name, high));
        Ok(())
    }
}

impl ErrorType for MockPin {
    type Error = MockPinError;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.drive(false)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.drive(true)
    }
}

// =============================================================================
// Mock Delay
// =============================================================================

/// Mock delay for testing without actual timing
///
/// Records delays for verification without actually waiting.
#[derive(Debug, Default)]
pub struct MockDelay {
    /// Total nanoseconds delayed
    total_ns: u64,
    log: Option<EventLog>,
}

impl MockDelay {
    /// Create a new mock delay
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock delay that also records into `log`
    pub fn with_log(log: &EventLog) -> Self {
        Self {
            total_ns: 0,
            log: Some(log.clone()),
        }
    }

    /// Get total nanoseconds that were "delayed"
    pub fn total_ns(&self) -> u64 {
        self.total_ns
    }

    /// Get total milliseconds that were "delayed"
    pub fn total_ms(&self) -> u64 {
        self.total_ns / 1_000_000
    }

    fn record(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
        if let Some(log) = &self.log {
            log.push(Event::DelayNs(ns));
        }
    }
}

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.record(ns);
    }

    fn delay_us(&mut self, us: u32) {
        self.record(us * 1_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.record(ms * 1_000_000);
    }
}

// =============================================================================
// Infallible helpers
// =============================================================================

/// Output pin that only remembers its level, for tests that don't need a log
#[derive(Debug, Default)]
pub struct LevelPin {
    pub high: Option<bool>,
}

impl ErrorType for LevelPin {
    type Error = Infallible;
}

impl OutputPin for LevelPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.high = Some(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.high = Some(true);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::vec;

    use embedded_hal::delay::DelayNs;

    use super::*;

    #[test]
    fn mock_pin_logs_levels() {
        let log = EventLog::new();
        let mut pin = MockPin::new("X", &log);
        pin.set_high().unwrap();
        pin.set_low().unwrap();
        assert_eq!(pin.level(), Some(false));
        assert_eq!(
            log.events(),
            vec![Event::Level("X", true), Event::Level("X", false)]
        );
    }

    #[test]
    fn failing_pin_does_not_log() {
        let log = EventLog::new();
        let mut pin = MockPin::failing("X", &log);
        assert_eq!(pin.set_high(), Err(MockPinError));
        assert!(log.events().is_empty());
        assert_eq!(pin.level(), None);
    }

    #[test]
    fn failing_low_pin_still_goes_high() {
        let log = EventLog::new();
        let mut pin = MockPin::failing_low("X", &log);
        assert_eq!(pin.set_low(), Err(MockPinError));
        pin.set_high().unwrap();
        assert_eq!(log.events(), vec![Event::Level("X", true)]);
    }

    #[test]
    fn mock_delay_tracking() {
        let mut delay = MockDelay::new();
        delay.delay_us(5);
        delay.delay_ms(2);
        assert_eq!(delay.total_ns(), 2_005_000);
        assert_eq!(delay.total_ms(), 2);
    }

    #[test]
    fn level_pin_remembers() {
        let mut pin = LevelPin::default();
        pin.set_high().unwrap();
        assert_eq!(pin.high, Some(true));
    }
}
