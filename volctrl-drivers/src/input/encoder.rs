//! Quadrature decoder
//!
//! Both channels idle high with pull-ups. A detent pulls them low in
//! sequence and releases them; the channel that falls first gives the
//! direction:
//!
//! ```text
//! CW:  (1,1) -> (0,1) -> (0,0) -> release   A leads
//! CCW: (1,1) -> (1,0) -> (0,0) -> release   B leads
//! ```
//!
//! A half step that returns to (1,1) is contact bounce and yields nothing.

use volctrl_core::input::InputEvent;
use volctrl_hal::InputPin;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    /// First channel down
    Leading(InputEvent),
    /// Both channels down
    Detent(InputEvent),
}

/// Decoder over two input pins, sampled by polling
pub struct QuadratureDecoder<A, B> {
    a: A,
    b: B,
    phase: Phase,
    last: (bool, bool),
}

impl<A: InputPin, B: InputPin> QuadratureDecoder<A, B> {
    pub fn new(a: A, b: B) -> Self {
        let last = (a.is_high(), b.is_high());
        Self {
            a,
            b,
            phase: Phase::Idle,
            last,
        }
    }

    /// Sample the pins
    ///
    /// Must be called often enough to see every phase (every few ms).
    pub fn poll(&mut self) -> Option<InputEvent> {
        let levels = (self.a.is_high(), self.b.is_high());
        if levels == self.last {
            return None;
        }
        self.last = levels;
        self.step(levels)
    }

    fn step(&mut self, levels: (bool, bool)) -> Option<InputEvent> {
        let (phase, event) = match (self.phase, levels) {
            (Phase::Idle, (false, true)) => (Phase::Leading(InputEvent::EncoderCw), None),
            (Phase::Idle, (true, false)) => (Phase::Leading(InputEvent::EncoderCcw), None),
            (Phase::Leading(dir), (false, false)) => (Phase::Detent(dir), None),
            // Bounced back before the second channel fell
            (Phase::Leading(_), (true, true)) => (Phase::Idle, None),
            (Phase::Detent(dir), (a, b)) if a || b => (Phase::Idle, Some(dir)),
            (phase, _) => (phase, None),
        };

        #[cfg(feature = "defmt")]
        {
            if let Some(event) = event {
                defmt::trace!("encoder: {}", event);
            }
        }

        self.phase = phase;
        event
    }
}
