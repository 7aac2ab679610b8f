//! GPIO pin abstractions
//!
//! Provides traits for digital input and output pins, and the [`PinId`]
//! used to name pins in configuration.

use core::fmt;
use core::str::FromStr;

/// Highest GPIO number accepted in configuration
pub const MAX_GPIO: u8 = 48;

/// Digital output pin
///
/// Implementations should handle the actual hardware register manipulation
/// for the specific chip.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently set low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

/// Digital input pin
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

/// Semantic pin identifier
///
/// Names a GPIO the host owns. `inverted` marks an active-low pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinId {
    /// GPIO number
    pub number: u8,
    /// Active-low
    pub inverted: bool,
}

impl PinId {
    /// Active-high pin
    pub const fn gpio(number: u8) -> Self {
        Self {
            number,
            inverted: false,
        }
    }

    /// Active-low pin
    pub const fn gpio_inverted(number: u8) -> Self {
        Self {
            number,
            inverted: true,
        }
    }
}

/// Error returned when a pin string cannot be parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ParsePinError;

impl fmt::Display for ParsePinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expected a pin like \"gpio5\" or \"!gpio5\"")
    }
}

/// Parse a pin string from config
///
/// Supports formats:
/// - "gpio11" -> GPIO11, active-high
/// - "!gpio12" -> GPIO12, active-low
/// - "GPIO5" -> case-insensitive prefix
impl FromStr for PinId {
    type Err = ParsePinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        let (s, inverted) = match s.strip_prefix('!') {
            Some(rest) => (rest, true),
            None => (s, false),
        };

        let digits = match (s.get(..4), s.get(4..)) {
            (Some(prefix), Some(digits)) if prefix.eq_ignore_ascii_case("gpio") => digits,
            _ => return Err(ParsePinError),
        };

        let number: u8 = digits.parse().map_err(|_| ParsePinError)?;
        if number > MAX_GPIO {
            return Err(ParsePinError);
        }

        Ok(Self { number, inverted })
    }
}

impl fmt::Display for PinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inverted {
            f.write_str("!")?;
        }
        write!(f, "gpio{}", self.number)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PinId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct PinVisitor;

        impl serde::de::Visitor<'_> for PinVisitor {
            type Value = PinId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a pin string such as \"gpio5\"")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<PinId, E> {
                v.parse()
                    .map_err(|_| E::invalid_value(serde::de::Unexpected::Str(v), &self))
            }
        }

        deserializer.deserialize_str(PinVisitor)
    }
}
