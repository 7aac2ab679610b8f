//! Host runtime interface
//!
//! The host owns the scheduler and every shared resource. Components
//! declare what they need in a [`Registration`] and receive a [`Host`]
//! context on each lifecycle call instead of looking anything up
//! globally.

use volctrl_core::datetime::DateTime;
use volctrl_core::Error;
use volctrl_hal::{Clock, ComponentId, Delay, OutputRegistry};

/// Host subsystems a component can depend on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Subsystem {
    Spi,
}

/// When a component is set up relative to others
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SetupPriority {
    /// Buses and raw hardware
    Bus,
    /// Devices on a bus
    Hardware,
    /// Everything that only consumes other components
    Late,
}

/// What a component tells the host about itself
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Registration {
    pub id: ComponentId,
    /// Subsystems that must be up before `setup`
    pub requires: &'static [Subsystem],
    pub priority: SetupPriority,
}

/// Context handed to every lifecycle call
pub trait Host {
    /// Check a subsystem is available
    fn has_subsystem(&self, subsystem: Subsystem) -> bool;

    fn outputs(&mut self) -> &mut dyn OutputRegistry;

    fn clock(&self) -> &dyn Clock;

    fn delay(&mut self) -> &mut dyn Delay;

    /// Local wall-clock time, `None` until the host has synced it
    fn datetime(&self) -> Option<DateTime> {
        None
    }

    /// Diagnostic channel; errors reported here never stop the host
    fn report(&mut self, id: &ComponentId, error: Error);
}

/// Lifecycle contract between the host scheduler and a component
pub trait Component {
    fn registration(&self) -> Registration;

    /// One-time initialization
    ///
    /// A failure disables the component until restart. The host keeps
    /// running.
    fn setup(&mut self, host: &mut dyn Host) -> Result<(), Error>;

    /// Called repeatedly from the host's main loop; must not block for
    /// long
    fn tick(&mut self, host: &mut dyn Host);

    /// Release everything acquired in `setup`
    fn teardown(&mut self, host: &mut dyn Host);

    /// Log the configuration
    fn dump_config(&self);
}
