//! Backlight binding
//!
//! The backlight is a float output owned by the host. The panel keeps
//! only its [`ComponentId`] and resolves it on every write, so an output
//! that disappears turns writes into no-ops.

use volctrl_hal::{ComponentId, OutputRegistry};

/// Weak reference to the backlight output
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Backlight {
    output: Option<ComponentId>,
    level: f32,
}

impl Backlight {
    pub fn new(output: Option<ComponentId>) -> Self {
        Self { output, level: 0.0 }
    }

    /// Bind (or unbind) the output
    pub fn bind(&mut self, output: Option<ComponentId>) {
        self.output = output;
    }

    pub fn output(&self) -> Option<&ComponentId> {
        self.output.as_ref()
    }

    /// Last level written
    pub fn level(&self) -> f32 {
        self.level
    }

    /// Clamp `level` to 0.0-1.0 and write it
    ///
    /// Returns whether an output received the write. An unbound or
    /// unresolvable reference is not an error.
    pub fn set_level(&mut self, level: f32, outputs: &mut dyn OutputRegistry) -> bool {
        let level = clamp_level(level);
        let Some(id) = &self.output else {
            return false;
        };
        match outputs.float_output(id) {
            Some(output) => {
                output.set_level(level);
                self.level = level;
                true
            }
            None => {
                #[cfg(feature = "defmt")]
                defmt::warn!("backlight output {} not found", id.as_str());
                false
            }
        }
    }
}

/// Clamp to 0.0-1.0; NaN reads as off
pub fn clamp_level(level: f32) -> f32 {
    if level.is_nan() {
        0.0
    } else {
        level.clamp(0.0, 1.0)
    }
}
