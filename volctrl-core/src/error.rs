//! Error taxonomy
//!
//! Every failure in the panel is one of four kinds: bad configuration, a
//! bus-level transport failure, a failed initialization, or a drawing
//! request outside the panel.

use core::fmt;

use volctrl_hal::{PinId, SpiErrorKind};

/// Bad pin, clock or option setup, detected at setup time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigurationError {
    /// Requested SPI clock exceeds the display controller's rating
    ClockTooFast { requested: u32, max: u32 },
    /// SPI clock of zero
    ClockZero,
    /// No chip-select assigned and the bus has no default
    MissingChipSelect,
    /// No data/command pin assigned
    MissingDataCommand,
    /// Host refused to hand out the pin
    PinUnavailable(PinId),
    /// Host refused to hand out the bus
    BusUnavailable,
    /// Host does not provide the SPI subsystem
    MissingSpiSubsystem,
    /// `backlight_pin` does not name a registered float output
    UnknownOutput,
    /// Panel dimensions or chunk size out of range
    InvalidPanel,
    /// A user setting is out of range
    InvalidSetting,
    /// Operation not allowed while a draw is in flight
    DrawInFlight,
    /// Configuration document could not be parsed
    Parse,
}

/// Bus-level failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError {
    /// Bus transaction timed out
    Timeout,
    /// Peripheral did not acknowledge
    Nack,
    /// Overrun or other bus fault
    Bus,
    /// `write` before `configure`
    NotConfigured,
    /// `write` after `release`
    Released,
}

impl From<SpiErrorKind> for TransportError {
    fn from(kind: SpiErrorKind) -> Self {
        match kind {
            SpiErrorKind::Timeout => TransportError::Timeout,
            SpiErrorKind::Nack => TransportError::Nack,
            SpiErrorKind::Overrun | SpiErrorKind::Other => TransportError::Bus,
        }
    }
}

/// Display controller could not be brought out of reset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InitializationError {
    /// Attempts made before giving up
    pub attempts: u8,
    /// Transport failure of the last attempt
    pub last: TransportError,
}

/// Drawing request the panel cannot satisfy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutOfBoundsError {
    /// Region is empty or extends past the panel edge
    Region {
        x: u16,
        y: u16,
        width: u16,
        height: u16,
    },
    /// Pixel buffer length does not match the region
    PixelData { expected: usize, actual: usize },
}

/// Any panel error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    Configuration(ConfigurationError),
    Transport(TransportError),
    Initialization(InitializationError),
    OutOfBounds(OutOfBoundsError),
}

impl Error {
    /// Whether this error permanently disables the peripheral
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Configuration(_) | Error::Initialization(_))
    }
}

impl From<ConfigurationError> for Error {
    fn from(e: ConfigurationError) -> Self {
        Error::Configuration(e)
    }
}

impl From<TransportError> for Error {
    fn from(e: TransportError) -> Self {
        Error::Transport(e)
    }
}

impl From<InitializationError> for Error {
    fn from(e: InitializationError) -> Self {
        Error::Initialization(e)
    }
}

impl From<OutOfBoundsError> for Error {
    fn from(e: OutOfBoundsError) -> Self {
        Error::OutOfBounds(e)
    }
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClockTooFast { requested, max } => {
                write!(f, "SPI clock {} Hz exceeds rated {} Hz", requested, max)
            }
            Self::ClockZero => write!(f, "SPI clock must be non-zero"),
            Self::MissingChipSelect => write!(f, "no chip-select pin and no bus default"),
            Self::MissingDataCommand => write!(f, "no data/command pin assigned"),
            Self::PinUnavailable(pin) => write!(f, "pin {} unavailable", pin),
            Self::BusUnavailable => write!(f, "SPI bus unavailable"),
            Self::MissingSpiSubsystem => write!(f, "host has no SPI subsystem"),
            Self::UnknownOutput => write!(f, "backlight_pin is not a float output"),
            Self::InvalidPanel => write!(f, "invalid panel geometry"),
            Self::InvalidSetting => write!(f, "setting out of range"),
            Self::DrawInFlight => write!(f, "draw in flight"),
            Self::Parse => write!(f, "configuration parse error"),
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timeout => write!(f, "bus timeout"),
            Self::Nack => write!(f, "peripheral did not acknowledge"),
            Self::Bus => write!(f, "bus fault"),
            Self::NotConfigured => write!(f, "transport not configured"),
            Self::Released => write!(f, "transport released"),
        }
    }
}

impl fmt::Display for InitializationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "display init failed after {} attempts: {}",
            self.attempts, self.last
        )
    }
}

impl fmt::Display for OutOfBoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Region {
                x,
                y,
                width,
                height,
            } => write!(f, "region {}x{} at ({}, {}) out of bounds", width, height, x, y),
            Self::PixelData { expected, actual } => {
                write!(f, "expected {} bytes of pixel data, got {}", expected, actual)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration(e) => write!(f, "configuration error: {}", e),
            Self::Transport(e) => write!(f, "transport error: {}", e),
            Self::Initialization(e) => write!(f, "initialization error: {}", e),
            Self::OutOfBounds(e) => write!(f, "out of bounds: {}", e),
        }
    }
}
