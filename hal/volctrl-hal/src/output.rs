//! Float outputs and the registry that resolves them
//!
//! A float output is a PWM or DAC channel owned by the host (the display
//! backlight, for instance). Devices never own one; they hold a
//! [`ComponentId`] and look the output up each time they write.

use core::fmt;

/// Maximum length of a component identifier
pub const MAX_ID_LEN: usize = 24;

/// Host-unique component identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(transparent))]
pub struct ComponentId(heapless::String<MAX_ID_LEN>);

impl ComponentId {
    /// Build an identifier, truncating to [`MAX_ID_LEN`] bytes on a char
    /// boundary
    pub fn new(id: &str) -> Self {
        let mut end = id.len().min(MAX_ID_LEN);
        while !id.is_char_boundary(end) {
            end -= 1;
        }
        let mut s = heapless::String::new();
        // Cannot fail: `end` is at most the capacity
        let _ = s.push_str(&id[..end]);
        Self(s)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output taking a level in 0.0..=1.0
pub trait FloatOutput {
    /// Set the output level
    ///
    /// Callers clamp; implementations may assume `0.0..=1.0`.
    fn set_level(&mut self, level: f32);
}

/// Lookup of float outputs by identifier
pub trait OutputRegistry {
    /// Resolve `id` to a float output, if one is registered
    fn float_output(&mut self, id: &ComponentId) -> Option<&mut dyn FloatOutput>;
}
