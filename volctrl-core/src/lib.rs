//! Board-agnostic core logic for the VolCtrl front panel
//!
//! This crate contains all panel logic that does not depend on a specific
//! display controller or bus:
//!
//! - Error taxonomy shared by the transport, encoder and controller
//! - Configuration type definitions and schema validation
//! - Controller lifecycle state machine
//! - Screen geometry and widget layout
//! - Speaker status model, wall-clock label and view diffing
//! - Menu navigation

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod datetime;
pub mod error;
pub mod geometry;
pub mod input;
pub mod layout;
pub mod menu;
pub mod speaker;
pub mod state;
pub mod view;

pub use error::{
    ConfigurationError, Error, InitializationError, OutOfBoundsError, TransportError,
};
pub use geometry::Rect;
