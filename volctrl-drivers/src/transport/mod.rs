//! Byte transport to the display controller

pub mod spi;

pub use spi::SpiTransport;

use volctrl_core::TransportError;

/// Command/data byte transport
///
/// One call is one bus transaction. Implementations never overlap
/// transactions; `&mut self` guarantees callers cannot either.
pub trait Transport {
    /// Write `bytes` as a command (`is_command`) or as data
    fn write(&mut self, bytes: &[u8], is_command: bool) -> Result<(), TransportError>;

    /// Write a command byte followed by its parameters
    fn command(&mut self, cmd: u8, params: &[u8]) -> Result<(), TransportError> {
        self.write(&[cmd], true)?;
        if !params.is_empty() {
            self.write(params, false)?;
        }
        Ok(())
    }
}
