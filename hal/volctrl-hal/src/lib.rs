//! VolCtrl Hardware Abstraction Layer
//!
//! This crate defines the traits through which the front panel talks to
//! the outside world: GPIO, the SPI subsystem, float outputs (backlight)
//! and time. Chip HALs and the host runtime implement them; the drivers
//! and the controller only ever see these traits.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  volctrl (controller component)         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  volctrl-drivers (transport, ST7789)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  volctrl-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ embedded-hal  │       │ host runtime  │
//! │  (via `eh`)   │       │  registries   │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`spi::SpiBus`], [`spi::SpiHost`] - SPI bus and bus-sharing policy
//! - [`output::FloatOutput`], [`output::OutputRegistry`] - Float outputs
//! - [`time::Clock`], [`time::Delay`] - Time keeping

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod eh;
pub mod gpio;
pub mod output;
pub mod spi;
pub mod time;

// Re-export key traits at crate root for convenience
pub use gpio::{InputPin, OutputPin, PinId};
pub use output::{ComponentId, FloatOutput, OutputRegistry};
pub use spi::{SpiBus, SpiConfig, SpiErrorKind, SpiHost};
pub use time::{Clock, Delay};
