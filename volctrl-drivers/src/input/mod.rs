//! Knob input
//!
//! The front-panel knob is a quadrature encoder with a push-button on
//! the shaft. [`Knob`] polls both and implements [`InputSource`].

pub mod button;
pub mod encoder;

pub use button::Button;
pub use encoder::QuadratureDecoder;

use volctrl_core::input::{InputEvent, InputSource};
use volctrl_hal::InputPin;

/// Encoder plus push-button
pub struct Knob<A, B, P> {
    encoder: QuadratureDecoder<A, B>,
    button: Button<P>,
}

impl<A: InputPin, B: InputPin, P: InputPin> Knob<A, B, P> {
    pub fn new(encoder: QuadratureDecoder<A, B>, button: Button<P>) -> Self {
        Self { encoder, button }
    }

    pub fn button(&self) -> &Button<P> {
        &self.button
    }
}

impl<A: InputPin, B: InputPin, P: InputPin> InputSource for Knob<A, B, P> {
    fn poll_event(&mut self, now_ms: u32) -> Option<InputEvent> {
        // Rotation first: the encoder has no memory of missed phases
        self.encoder
            .poll()
            .or_else(|| self.button.poll(now_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(bool);

    impl InputPin for Fixed {
        fn is_high(&self) -> bool {
            self.0
        }
    }

    #[test]
    fn test_idle_knob_is_quiet() {
        let mut knob = Knob::new(
            QuadratureDecoder::new(Fixed(true), Fixed(true)),
            Button::new(Fixed(true)),
        );
        for now in (0..1000).step_by(10) {
            assert_eq!(knob.poll_event(now), None);
        }
        assert!(!knob.button().is_pressed());
    }

    #[test]
    fn test_held_button_long_press() {
        let mut knob = Knob::new(
            QuadratureDecoder::new(Fixed(true), Fixed(true)),
            Button::new(Fixed(false)),
        );
        let events: heapless::Vec<InputEvent, 4> = (0..1000)
            .step_by(10)
            .filter_map(|now| knob.poll_event(now))
            .collect();
        assert_eq!(events, [InputEvent::EncoderLongPress]);
    }
}
