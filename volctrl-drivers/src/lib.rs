//! Drivers for the VolCtrl front panel
//!
//! This crate provides the hardware-facing parts of the panel on top of
//! the traits in volctrl-hal:
//!
//! - SPI transport adapter (bus, chip-select, data/command, reset)
//! - ST7789 command encoder with a staged frame queue and an
//!   `embedded-graphics` draw target
//! - Backlight binding through the host's float outputs
//! - Quadrature knob and push-button decoding

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod backlight;
pub mod display;
pub mod input;
pub mod transport;

#[cfg(test)]
mod mock;

pub use backlight::Backlight;
pub use display::{FrameQueue, PendingFill, St7789};
pub use input::{Button, Knob, QuadratureDecoder};
pub use transport::{SpiTransport, Transport};
