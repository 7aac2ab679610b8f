//! SPI bus abstractions
//!
//! Provides traits for SPI master operations and for the SPI subsystem
//! that hands buses and pins out to devices.

use crate::gpio::{OutputPin, PinId};

/// Classification of a bus failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpiErrorKind {
    /// Transaction did not complete within the bus timeout
    Timeout,
    /// Peripheral did not acknowledge (mode fault, chip-select fault)
    Nack,
    /// Receive/transmit overrun
    Overrun,
    /// Any other bus fault
    Other,
}

/// Error reported by an [`SpiBus`]
pub trait SpiError: core::fmt::Debug {
    /// Classify the error
    fn kind(&self) -> SpiErrorKind;
}

impl SpiError for SpiErrorKind {
    fn kind(&self) -> SpiErrorKind {
        *self
    }
}

/// SPI bus master
///
/// Write-only: the display controller is never read back. Implementations
/// must bound every call with a timeout.
pub trait SpiBus {
    /// Error type for SPI operations
    type Error: SpiError;

    /// Write data without reading
    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Wait until all queued words have left the shift register
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// The SPI subsystem a device is attached to
///
/// Supplies bus acquisition, output pins and the bus-sharing policy.
pub trait SpiHost {
    /// Bus handle handed to one device at a time
    type Bus: SpiBus;
    /// Output pin type used for chip-select, data/command and reset
    type Pin: OutputPin;

    /// Chip-select used when a device does not name one
    ///
    /// `None` means the bus is shared and every device must bring its own.
    fn default_chip_select(&self) -> Option<PinId>;

    /// Acquire the bus with the given configuration
    ///
    /// Returns `None` if the bus is already held or cannot run at
    /// `config`.
    fn acquire(&mut self, config: &SpiConfig) -> Option<Self::Bus>;

    /// Return a bus acquired with [`SpiHost::acquire`]
    fn release(&mut self, bus: Self::Bus);

    /// Claim an output pin
    ///
    /// Returns `None` if the pin does not exist or is already claimed.
    fn output_pin(&mut self, pin: PinId) -> Option<Self::Pin>;

    /// Return a pin claimed with [`SpiHost::output_pin`]
    ///
    /// The pin can be claimed again afterwards.
    fn release_pin(&mut self, pin: PinId, handle: Self::Pin);
}

/// SPI configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpiConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
    /// Clock mode
    pub mode: Mode,
    /// Bit order
    pub bit_order: BitOrder,
}

impl Default for SpiConfig {
    fn default() -> Self {
        Self {
            frequency: 40_000_000, // 40 MHz
            mode: Mode::Mode0,
            bit_order: BitOrder::MsbFirst,
        }
    }
}

impl SpiConfig {
    /// Mode-0, MSB-first configuration at `frequency`
    pub fn with_frequency(frequency: u32) -> Self {
        Self {
            frequency,
            ..Self::default()
        }
    }
}

/// SPI clock polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Clock idles low (CPOL=0)
    IdleLow,
    /// Clock idles high (CPOL=1)
    IdleHigh,
}

/// SPI clock phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Data captured on first clock transition (CPHA=0)
    CaptureOnFirstTransition,
    /// Data captured on second clock transition (CPHA=1)
    CaptureOnSecondTransition,
}

/// SPI bit order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitOrder {
    MsbFirst,
    LsbFirst,
}

/// SPI mode (combined polarity and phase)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Mode 0: CPOL=0, CPHA=0
    Mode0,
    /// Mode 1: CPOL=0, CPHA=1
    Mode1,
    /// Mode 2: CPOL=1, CPHA=0
    Mode2,
    /// Mode 3: CPOL=1, CPHA=1
    Mode3,
}

impl From<Mode> for (Polarity, Phase) {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Mode0 => (Polarity::IdleLow, Phase::CaptureOnFirstTransition),
            Mode::Mode1 => (Polarity::IdleLow, Phase::CaptureOnSecondTransition),
            Mode::Mode2 => (Polarity::IdleHigh, Phase::CaptureOnFirstTransition),
            Mode::Mode3 => (Polarity::IdleHigh, Phase::CaptureOnSecondTransition),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_panel_bus() {
        let config = SpiConfig::default();
        assert_eq!(config.frequency, 40_000_000);
        assert_eq!(
            <(Polarity, Phase)>::from(config.mode),
            (Polarity::IdleLow, Phase::CaptureOnFirstTransition)
        );
        assert_eq!(config.bit_order, BitOrder::MsbFirst);
    }

    #[test]
    fn test_with_frequency() {
        let config = SpiConfig::with_frequency(10_000_000);
        assert_eq!(config.frequency, 10_000_000);
        assert_eq!(config.mode, Mode::Mode0);
    }
}
