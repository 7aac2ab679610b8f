//! State machine definition
//!
//! Whether the controller may touch the bus is a function of the current
//! state only.

use super::events::Event;

/// Controller states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Constructed, `setup()` not yet run (or torn down)
    #[default]
    Uninitialized,
    /// Panel initialized, nothing drawn yet
    Ready,
    /// Fills staged and not yet flushed
    Active,
    /// Frame queue empty, panel up to date
    Idle,
    /// Setup failed; no further bus traffic
    Failed,
}

impl State {
    /// Check if the controller may issue bus writes
    pub fn bus_allowed(&self) -> bool {
        matches!(self, State::Ready | State::Active | State::Idle)
    }

    /// Check if a draw is in flight
    pub fn draw_in_flight(&self) -> bool {
        matches!(self, State::Active)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, State::Failed)
    }

    /// Process an event and return the next state
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use State::*;

        match (self, event) {
            // Setup
            (Uninitialized, SetupComplete) => Ready,
            (Uninitialized, SetupFailed) => Failed,

            // Drawing
            (Ready | Idle | Active, DrawQueued) => Active,
            (Ready | Active, Flushed) => Idle,

            // Teardown; Failed stays Failed
            (Ready | Active | Idle, Teardown) => Uninitialized,

            // Default: stay in current state
            _ => self,
        }
    }
}
