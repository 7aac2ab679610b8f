//! Test doubles for the controller tests

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use volctrl_core::datetime::DateTime;
use volctrl_core::input::{InputEvent, InputSource};
use volctrl_core::speaker::{SpeakerLink, SpeakerStatus};
use volctrl_core::Error;
use volctrl_hal::{
    Clock, ComponentId, Delay, FloatOutput, OutputPin, OutputRegistry, PinId, SpiBus, SpiConfig,
    SpiErrorKind, SpiHost,
};

use crate::host::{Host, Subsystem};

/// What the bus saw
#[derive(Default)]
pub struct BusLog {
    /// Every write attempt, failed or not
    pub writes: u32,
    pub bytes: usize,
    /// Fail every write with this error
    pub failure: Option<SpiErrorKind>,
    pub acquired: bool,
    /// Pins currently claimed
    pub pins: Vec<u8>,
}

pub struct TestBus(Rc<RefCell<BusLog>>);

impl SpiBus for TestBus {
    type Error = SpiErrorKind;

    fn write(&mut self, data: &[u8]) -> Result<(), SpiErrorKind> {
        let mut log = self.0.borrow_mut();
        log.writes += 1;
        if let Some(kind) = log.failure {
            return Err(kind);
        }
        log.bytes += data.len();
        Ok(())
    }

    fn flush(&mut self) -> Result<(), SpiErrorKind> {
        Ok(())
    }
}

pub struct TestPin(bool);

impl OutputPin for TestPin {
    fn set_high(&mut self) {
        self.0 = true;
    }

    fn set_low(&mut self) {
        self.0 = false;
    }

    fn is_set_high(&self) -> bool {
        self.0
    }
}

/// SPI subsystem sharing its log with the test
pub struct TestSpi(pub Rc<RefCell<BusLog>>);

impl TestSpi {
    pub fn new() -> (Self, Rc<RefCell<BusLog>>) {
        let log = Rc::new(RefCell::new(BusLog::default()));
        (Self(log.clone()), log)
    }
}

impl SpiHost for TestSpi {
    type Bus = TestBus;
    type Pin = TestPin;

    fn default_chip_select(&self) -> Option<PinId> {
        Some(PinId::gpio(5))
    }

    fn acquire(&mut self, _config: &SpiConfig) -> Option<TestBus> {
        let mut log = self.0.borrow_mut();
        if log.acquired {
            return None;
        }
        log.acquired = true;
        Some(TestBus(self.0.clone()))
    }

    fn release(&mut self, _bus: TestBus) {
        self.0.borrow_mut().acquired = false;
    }

    fn output_pin(&mut self, pin: PinId) -> Option<TestPin> {
        let mut log = self.0.borrow_mut();
        if log.pins.contains(&pin.number) {
            return None;
        }
        log.pins.push(pin.number);
        Some(TestPin(false))
    }

    fn release_pin(&mut self, pin: PinId, _handle: TestPin) {
        self.0.borrow_mut().pins.retain(|&n| n != pin.number);
    }
}

#[derive(Default)]
pub struct TestOutput {
    pub levels: Vec<f32>,
}

impl FloatOutput for TestOutput {
    fn set_level(&mut self, level: f32) {
        self.levels.push(level);
    }
}

/// Host context with an SPI subsystem and one output named "backlight"
pub struct TestHost {
    pub spi: bool,
    pub now: u32,
    pub backlight: TestOutput,
    pub delayed_ms: u32,
    pub reports: Vec<Error>,
    pub datetime: Option<DateTime>,
}

impl TestHost {
    pub fn new() -> Self {
        Self {
            spi: true,
            now: 0,
            backlight: TestOutput::default(),
            delayed_ms: 0,
            reports: Vec::new(),
            datetime: None,
        }
    }
}

impl OutputRegistry for TestOutput {
    fn float_output(&mut self, id: &ComponentId) -> Option<&mut dyn FloatOutput> {
        if id.as_str() == "backlight" {
            Some(self)
        } else {
            None
        }
    }
}

impl Clock for TestHost {
    fn now_ms(&self) -> u32 {
        self.now
    }
}

impl Delay for TestHost {
    fn delay_ms(&mut self, ms: u32) {
        self.delayed_ms += ms;
    }
}

impl Host for TestHost {
    fn has_subsystem(&self, subsystem: Subsystem) -> bool {
        match subsystem {
            Subsystem::Spi => self.spi,
        }
    }

    fn outputs(&mut self) -> &mut dyn OutputRegistry {
        &mut self.backlight
    }

    fn clock(&self) -> &dyn Clock {
        self
    }

    fn delay(&mut self) -> &mut dyn Delay {
        self
    }

    fn datetime(&self) -> Option<DateTime> {
        self.datetime
    }

    fn report(&mut self, _id: &ComponentId, error: Error) {
        self.reports.push(error);
    }
}

/// Input source replaying queued events
#[derive(Default)]
pub struct ScriptedInput {
    pub events: VecDeque<InputEvent>,
}

impl ScriptedInput {
    pub fn push(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }
}

impl InputSource for ScriptedInput {
    fn poll_event(&mut self, _now_ms: u32) -> Option<InputEvent> {
        self.events.pop_front()
    }
}

/// Speaker link recording requests
#[derive(Default)]
pub struct FakeLink {
    pub next: Option<SpeakerStatus>,
    pub volumes: Vec<f32>,
    pub mutes: Vec<bool>,
}

impl SpeakerLink for FakeLink {
    fn status(&mut self) -> Option<SpeakerStatus> {
        self.next.take()
    }

    fn request_volume(&mut self, volume: f32) {
        self.volumes.push(volume);
    }

    fn request_mute(&mut self, muted: bool) {
        self.mutes.push(muted);
    }
}
