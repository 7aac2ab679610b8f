//! Debounced push-button
//!
//! A press shorter than [`LONG_PRESS_MS`] is a click, reported on
//! release. Holding past it reports a long press straight away and a
//! release when the button comes back up.

use volctrl_core::input::InputEvent;
use volctrl_hal::time::elapsed_ms;
use volctrl_hal::InputPin;

/// Level must hold this long before it counts
pub const DEBOUNCE_MS: u32 = 20;

/// Shorter presses are treated as noise
pub const MIN_CLICK_MS: u32 = 50;

/// Hold time that turns a press into a long press
pub const LONG_PRESS_MS: u32 = 500;

/// Push-button on one input pin
pub struct Button<P> {
    pin: P,
    active_low: bool,
    /// Last raw reading and when it changed
    raw: bool,
    raw_since: u32,
    /// Debounced state
    pressed: bool,
    pressed_at: u32,
    long_sent: bool,
}

impl<P: InputPin> Button<P> {
    /// Button pulling `pin` low when pressed
    pub fn new(pin: P) -> Self {
        Self::with_polarity(pin, true)
    }

    pub fn with_polarity(pin: P, active_low: bool) -> Self {
        Self {
            pin,
            active_low,
            raw: false,
            raw_since: 0,
            pressed: false,
            pressed_at: 0,
            long_sent: false,
        }
    }

    /// Debounced state
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Sample the pin
    pub fn poll(&mut self, now_ms: u32) -> Option<InputEvent> {
        let down = self.pin.is_high() != self.active_low;
        self.update(down, now_ms)
    }

    fn update(&mut self, down: bool, now_ms: u32) -> Option<InputEvent> {
        if down != self.raw {
            self.raw = down;
            self.raw_since = now_ms;
        }

        if self.raw != self.pressed && elapsed_ms(now_ms, self.raw_since) >= DEBOUNCE_MS {
            self.pressed = self.raw;
            if self.pressed {
                self.pressed_at = self.raw_since;
                self.long_sent = false;
                return None;
            }

            if self.long_sent {
                return Some(InputEvent::EncoderRelease);
            }
            let held = elapsed_ms(self.raw_since, self.pressed_at);
            return (held >= MIN_CLICK_MS).then_some(InputEvent::EncoderClick);
        }

        if self.pressed && !self.long_sent && elapsed_ms(now_ms, self.pressed_at) >= LONG_PRESS_MS
        {
            self.long_sent = true;
            return Some(InputEvent::EncoderLongPress);
        }

        None
    }
}
