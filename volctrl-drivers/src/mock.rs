//! Test doubles shared by the driver tests

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use volctrl_core::TransportError;
use volctrl_hal::{
    ComponentId, Delay, FloatOutput, OutputPin, OutputRegistry, PinId, SpiBus, SpiConfig,
    SpiErrorKind, SpiHost,
};

use crate::transport::Transport;

/// One bus transaction as seen on the wire
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Wire {
    /// Single command byte
    Command(u8),
    Data(Vec<u8>),
}

impl Wire {
    pub fn data(bytes: &[u8]) -> Self {
        Wire::Data(Vec::from(bytes))
    }
}

/// Pin number used as data/command by every test
pub const DC_PIN: u8 = 16;

#[derive(Default)]
struct PinBank {
    levels: HashMap<u8, (bool, u32)>,
}

impl PinBank {
    fn set(&mut self, number: u8, high: bool) {
        let entry = self.levels.entry(number).or_insert((false, 0));
        *entry = (high, entry.1 + 1);
    }

    fn level(&self, number: u8) -> bool {
        self.levels.get(&number).map(|l| l.0).unwrap_or(false)
    }
}

/// Output pin backed by the shared pin bank
pub struct MockPin {
    number: u8,
    bank: Rc<RefCell<PinBank>>,
}

impl OutputPin for MockPin {
    fn set_high(&mut self) {
        self.bank.borrow_mut().set(self.number, true);
    }

    fn set_low(&mut self) {
        self.bank.borrow_mut().set(self.number, false);
    }

    fn is_set_high(&self) -> bool {
        self.bank.borrow().level(self.number)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Failure {
    None,
    Next(SpiErrorKind),
    Always(SpiErrorKind),
}

/// Bus that records transactions, classified by the D/C pin level
pub struct MockBus {
    wire: Rc<RefCell<Vec<Wire>>>,
    bank: Rc<RefCell<PinBank>>,
    failure: Rc<RefCell<Failure>>,
}

impl SpiBus for MockBus {
    type Error = SpiErrorKind;

    fn write(&mut self, data: &[u8]) -> Result<(), SpiErrorKind> {
        let failure = *self.failure.borrow();
        match failure {
            Failure::Next(kind) => {
                *self.failure.borrow_mut() = Failure::None;
                return Err(kind);
            }
            Failure::Always(kind) => return Err(kind),
            Failure::None => {}
        }

        let is_data = self.bank.borrow().level(DC_PIN);
        let entry = match (is_data, data) {
            (false, [cmd]) => Wire::Command(*cmd),
            _ => Wire::data(data),
        };
        self.wire.borrow_mut().push(entry);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), SpiErrorKind> {
        Ok(())
    }
}

/// SPI subsystem with one bus; each pin can be claimed once at a time
pub struct MockHost {
    wire: Rc<RefCell<Vec<Wire>>>,
    bank: Rc<RefCell<PinBank>>,
    failure: Rc<RefCell<Failure>>,
    pub default_cs: Option<PinId>,
    pub refuse_pin: Option<u8>,
    pub bus_busy: bool,
    pub acquired_at: Option<u32>,
    pub released: bool,
    pub release_count: u32,
    /// Pins currently claimed
    pub claimed: Vec<u8>,
}

impl MockHost {
    pub fn new() -> Self {
        Self {
            wire: Rc::default(),
            bank: Rc::default(),
            failure: Rc::new(RefCell::new(Failure::None)),
            default_cs: None,
            refuse_pin: None,
            bus_busy: false,
            acquired_at: None,
            released: false,
            release_count: 0,
            claimed: Vec::new(),
        }
    }

    /// Transactions so far
    pub fn wire(&self) -> Vec<Wire> {
        self.wire.borrow().clone()
    }

    pub fn fail_next(&self, kind: SpiErrorKind) {
        *self.failure.borrow_mut() = Failure::Next(kind);
    }

    pub fn fail_always(&self, kind: SpiErrorKind) {
        *self.failure.borrow_mut() = Failure::Always(kind);
    }

    pub fn pin_high(&self, number: u8) -> bool {
        self.bank.borrow().level(number)
    }

    /// Number of times a pin was driven
    pub fn pin_toggles(&self, number: u8) -> u32 {
        self.bank
            .borrow()
            .levels
            .get(&number)
            .map(|l| l.1)
            .unwrap_or(0)
    }
}

impl SpiHost for MockHost {
    type Bus = MockBus;
    type Pin = MockPin;

    fn default_chip_select(&self) -> Option<PinId> {
        self.default_cs
    }

    fn acquire(&mut self, config: &SpiConfig) -> Option<MockBus> {
        if self.bus_busy {
            return None;
        }
        self.bus_busy = true;
        self.acquired_at = Some(config.frequency);
        Some(MockBus {
            wire: self.wire.clone(),
            bank: self.bank.clone(),
            failure: self.failure.clone(),
        })
    }

    fn release(&mut self, _bus: MockBus) {
        self.bus_busy = false;
        self.released = true;
        self.release_count += 1;
    }

    fn output_pin(&mut self, pin: PinId) -> Option<MockPin> {
        if self.refuse_pin == Some(pin.number) || self.claimed.contains(&pin.number) {
            return None;
        }
        self.claimed.push(pin.number);
        Some(MockPin {
            number: pin.number,
            bank: self.bank.clone(),
        })
    }

    fn release_pin(&mut self, pin: PinId, _handle: MockPin) {
        self.claimed.retain(|&n| n != pin.number);
    }
}

/// Transport that records what the encoder sends
#[derive(Default)]
pub struct MockTransport {
    pub wire: Vec<Wire>,
    /// Fail this many upcoming writes
    pub failures: u32,
    pub error: Option<TransportError>,
}

impl MockTransport {
    pub fn failing(error: TransportError) -> Self {
        Self {
            failures: u32::MAX,
            error: Some(error),
            ..Default::default()
        }
    }

    /// Total pixel bytes written
    pub fn data_bytes(&self) -> usize {
        self.wire
            .iter()
            .map(|w| match w {
                Wire::Data(d) => d.len(),
                Wire::Command(_) => 0,
            })
            .sum()
    }
}

impl Transport for MockTransport {
    fn write(&mut self, bytes: &[u8], is_command: bool) -> Result<(), TransportError> {
        if self.failures > 0 {
            self.failures -= 1;
            return Err(self.error.unwrap_or(TransportError::Bus));
        }
        let entry = match (is_command, bytes) {
            (true, [cmd]) => Wire::Command(*cmd),
            _ => Wire::data(bytes),
        };
        self.wire.push(entry);
        Ok(())
    }
}

#[derive(Default)]
pub struct MockDelay {
    pub total_ms: u32,
    pub calls: Vec<u32>,
}

impl Delay for MockDelay {
    fn delay_ms(&mut self, ms: u32) {
        self.total_ms += ms;
        self.calls.push(ms);
    }
}

/// Float output that records every level written
#[derive(Default)]
pub struct MockOutput {
    pub levels: Vec<f32>,
}

impl FloatOutput for MockOutput {
    fn set_level(&mut self, level: f32) {
        self.levels.push(level);
    }
}

/// Registry holding one output named "backlight"
#[derive(Default)]
pub struct MockRegistry {
    pub backlight: MockOutput,
}

impl OutputRegistry for MockRegistry {
    fn float_output(&mut self, id: &ComponentId) -> Option<&mut dyn FloatOutput> {
        if id.as_str() == "backlight" {
            Some(&mut self.backlight)
        } else {
            None
        }
    }
}
