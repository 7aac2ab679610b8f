//! VolCtrl front-panel component
//!
//! Ties the drivers to the host runtime. The host constructs a
//! [`Controller`], calls [`Component::setup`] once and
//! [`Component::tick`] from its main loop. Everything the component needs
//! from the host (SPI subsystem, float outputs, clock, delay, error
//! reporting) comes through the [`Host`] context passed to each call.
//!
//! ```text
//!   knob ──► InputSource ──┐
//!                          ▼
//!   speakers ◄──► SpeakerLink ◄──► Controller ──► render ──► St7789 ──► SpiTransport
//!                                      │
//!                                      └──► backlight (host float output)
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod controller;
pub mod host;
pub mod render;

#[cfg(test)]
mod mock;

pub use controller::Controller;
pub use host::{Component, Host, Registration, SetupPriority, Subsystem};
