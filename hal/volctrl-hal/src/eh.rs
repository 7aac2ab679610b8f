//! Adapters from `embedded-hal` 1.0 to the VolCtrl traits
//!
//! Chip HALs (esp-hal, embassy-rp, ...) implement `embedded-hal`; wrapping
//! their types here is all a board needs to drive the panel.

use core::cell::RefCell;

use embedded_hal::delay::DelayNs;
use embedded_hal::spi::{Error as _, ErrorKind};

use crate::gpio::{InputPin, OutputPin};
use crate::spi::{SpiBus, SpiError, SpiErrorKind};
use crate::time::Delay;

#[allow(unused_variables)]
fn pin_failed<E: embedded_hal::digital::Error>(what: &str, e: E) {
    #[cfg(feature = "defmt")]
    defmt::warn!("GPIO {} failed: {}", what, defmt::Debug2Format(&e.kind()));
}

/// `embedded-hal` output pin
///
/// A failed write is logged and leaves the tracked level unchanged.
pub struct EhOutput<P> {
    pin: P,
    high: bool,
}

impl<P: embedded_hal::digital::OutputPin> EhOutput<P> {
    /// Wrap a pin, driving it to `initial_high`
    pub fn new(mut pin: P, initial_high: bool) -> Self {
        if let Err(e) = pin.set_state(initial_high.into()) {
            pin_failed("init", e);
        }
        Self {
            pin,
            high: initial_high,
        }
    }

    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: embedded_hal::digital::OutputPin> OutputPin for EhOutput<P> {
    fn set_high(&mut self) {
        match self.pin.set_high() {
            Ok(()) => self.high = true,
            Err(e) => pin_failed("set high", e),
        }
    }

    fn set_low(&mut self) {
        match self.pin.set_low() {
            Ok(()) => self.high = false,
            Err(e) => pin_failed("set low", e),
        }
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

/// `embedded-hal` input pin
///
/// A failed read reports the idle level, so a flaky line never looks
/// like a press.
pub struct EhInput<P> {
    pin: RefCell<P>,
    idle_high: bool,
}

impl<P: embedded_hal::digital::InputPin> EhInput<P> {
    /// Wrap a pin whose level with nothing pressed is `idle_high`
    ///
    /// Pass `true` for pulled-up, active-low buttons.
    pub fn new(pin: P, idle_high: bool) -> Self {
        Self {
            pin: RefCell::new(pin),
            idle_high,
        }
    }

    pub fn into_inner(self) -> P {
        self.pin.into_inner()
    }
}

impl<P: embedded_hal::digital::InputPin> InputPin for EhInput<P> {
    fn is_high(&self) -> bool {
        match self.pin.borrow_mut().is_high() {
            Ok(high) => high,
            Err(e) => {
                pin_failed("read", e);
                self.idle_high
            }
        }
    }
}

/// Error from a wrapped `embedded-hal` SPI bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EhSpiError(pub SpiErrorKind);

impl SpiError for EhSpiError {
    fn kind(&self) -> SpiErrorKind {
        self.0
    }
}

fn classify(kind: ErrorKind) -> SpiErrorKind {
    match kind {
        ErrorKind::Overrun => SpiErrorKind::Overrun,
        ErrorKind::ModeFault | ErrorKind::ChipSelectFault => SpiErrorKind::Nack,
        _ => SpiErrorKind::Other,
    }
}

/// `embedded-hal` SPI bus
pub struct EhSpi<B> {
    bus: B,
}

impl<B: embedded_hal::spi::SpiBus<u8>> EhSpi<B> {
    pub fn new(bus: B) -> Self {
        Self { bus }
    }

    pub fn into_inner(self) -> B {
        self.bus
    }
}

impl<B: embedded_hal::spi::SpiBus<u8>> SpiBus for EhSpi<B> {
    type Error = EhSpiError;

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.bus
            .write(data)
            .map_err(|e| EhSpiError(classify(e.kind())))
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.bus.flush().map_err(|e| EhSpiError(classify(e.kind())))
    }
}

/// `embedded-hal` delay provider
pub struct EhDelay<D>(pub D);

impl<D: DelayNs> Delay for EhDelay<D> {
    fn delay_ms(&mut self, ms: u32) {
        self.0.delay_ms(ms);
    }
}
