//! SPI transport adapter
//!
//! Owns the bus handle and the chip-select, data/command and optional
//! reset pins. Chip-select is active-low; a `!` pin inverts every
//! electrical level on that pin.

use volctrl_core::config::{validate_clock, PinAssignment};
use volctrl_core::{ConfigurationError, TransportError};
use volctrl_hal::spi::SpiError;
use volctrl_hal::{Delay, OutputPin, PinId, SpiBus, SpiConfig, SpiHost};

use super::Transport;

/// Reset pulse width
const RESET_PULSE_MS: u32 = 10;
/// Settle time after reset
const RESET_SETTLE_MS: u32 = 120;

/// Output pin with optional inversion
struct Line<P> {
    pin: P,
    id: PinId,
}

impl<P: OutputPin> Line<P> {
    fn claim<H: SpiHost<Pin = P>>(host: &mut H, id: PinId) -> Result<Self, ConfigurationError> {
        let pin = host
            .output_pin(id)
            .ok_or(ConfigurationError::PinUnavailable(id))?;
        Ok(Self { pin, id })
    }

    fn give_back<H: SpiHost<Pin = P>>(self, host: &mut H) {
        host.release_pin(self.id, self.pin);
    }

    fn set(&mut self, high: bool) {
        self.pin.set_state(high != self.id.inverted);
    }
}

type Lines<P> = (Line<P>, Line<P>, Option<Line<P>>);

struct Link<H: SpiHost> {
    bus: H::Bus,
    cs: Line<H::Pin>,
    dc: Line<H::Pin>,
    reset: Option<Line<H::Pin>>,
}

enum LinkState<H: SpiHost> {
    Unconfigured,
    Open(Link<H>),
    Released,
}

/// SPI transport adapter
pub struct SpiTransport<H: SpiHost> {
    host: H,
    state: LinkState<H>,
}

impl<H: SpiHost> SpiTransport<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            state: LinkState::Unconfigured,
        }
    }

    /// Validate the pins and clock, then acquire the bus and claim the pins
    ///
    /// Nothing is claimed from the host unless validation passes, and
    /// nothing stays claimed when configuration fails. A transport that is
    /// already open releases its bus and pins first.
    pub fn configure(
        &mut self,
        pins: &PinAssignment,
        clock_hz: u32,
    ) -> Result<(), ConfigurationError> {
        validate_clock(clock_hz)?;
        let cs_id = pins
            .chip_select
            .or_else(|| self.host.default_chip_select())
            .ok_or(ConfigurationError::MissingChipSelect)?;
        let dc_id = pins
            .data_command
            .ok_or(ConfigurationError::MissingDataCommand)?;

        self.release();

        let bus = self
            .host
            .acquire(&SpiConfig::with_frequency(clock_hz))
            .ok_or(ConfigurationError::BusUnavailable)?;
        let (mut cs, mut dc, mut reset) = match self.claim_lines(cs_id, dc_id, pins.reset) {
            Ok(lines) => lines,
            Err(e) => {
                self.host.release(bus);
                return Err(e);
            }
        };

        cs.set(true);
        dc.set(true);
        if let Some(reset) = reset.as_mut() {
            reset.set(true);
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("SPI transport: cs={} dc={} {} Hz", cs_id, dc_id, clock_hz);

        self.state = LinkState::Open(Link { bus, cs, dc, reset });
        Ok(())
    }

    /// Claim every line, or none
    fn claim_lines(
        &mut self,
        cs_id: PinId,
        dc_id: PinId,
        reset_id: Option<PinId>,
    ) -> Result<Lines<H::Pin>, ConfigurationError> {
        let cs = Line::claim(&mut self.host, cs_id)?;
        let dc = match Line::claim(&mut self.host, dc_id) {
            Ok(dc) => dc,
            Err(e) => {
                cs.give_back(&mut self.host);
                return Err(e);
            }
        };
        match reset_id.map(|id| Line::claim(&mut self.host, id)).transpose() {
            Ok(reset) => Ok((cs, dc, reset)),
            Err(e) => {
                cs.give_back(&mut self.host);
                dc.give_back(&mut self.host);
                Err(e)
            }
        }
    }

    /// Deassert chip-select and hand the bus and pins back to the host
    ///
    /// Idempotent.
    pub fn release(&mut self) {
        match core::mem::replace(&mut self.state, LinkState::Released) {
            LinkState::Open(mut link) => {
                link.cs.set(true);
                self.host.release(link.bus);
                link.cs.give_back(&mut self.host);
                link.dc.give_back(&mut self.host);
                if let Some(reset) = link.reset {
                    reset.give_back(&mut self.host);
                }
            }
            LinkState::Unconfigured => self.state = LinkState::Unconfigured,
            LinkState::Released => {}
        }
    }

    /// Pulse the reset pin; no-op without one
    pub fn hardware_reset(&mut self, delay: &mut dyn Delay) -> Result<(), TransportError> {
        let link = self.link()?;
        if let Some(reset) = link.reset.as_mut() {
            reset.set(false);
            delay.delay_ms(RESET_PULSE_MS);
            reset.set(true);
            delay.delay_ms(RESET_SETTLE_MS);
        }
        Ok(())
    }

    pub fn is_configured(&self) -> bool {
        matches!(self.state, LinkState::Open(_))
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    fn link(&mut self) -> Result<&mut Link<H>, TransportError> {
        match &mut self.state {
            LinkState::Open(link) => Ok(link),
            LinkState::Unconfigured => Err(TransportError::NotConfigured),
            LinkState::Released => Err(TransportError::Released),
        }
    }
}

impl<H: SpiHost> Transport for SpiTransport<H> {
    fn write(&mut self, bytes: &[u8], is_command: bool) -> Result<(), TransportError> {
        let link = self.link()?;
        if bytes.is_empty() {
            return Ok(());
        }

        link.dc.set(!is_command);
        link.cs.set(false);
        let result = link.bus.write(bytes).and_then(|_| link.bus.flush());
        link.cs.set(true);

        result.map_err(|e| e.kind().into())
    }
}
