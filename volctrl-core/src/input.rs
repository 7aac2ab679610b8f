//! Knob input events

/// Input event from the volume knob
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    /// Knob rotated clockwise (1 detent)
    EncoderCw,
    /// Knob rotated counter-clockwise (1 detent)
    EncoderCcw,
    /// Short press (<500 ms)
    EncoderClick,
    /// Long press (>=500 ms)
    EncoderLongPress,
    /// Button released (after long press)
    EncoderRelease,
}

impl InputEvent {
    /// Returns true if this is a rotation event
    pub fn is_rotation(&self) -> bool {
        matches!(self, InputEvent::EncoderCw | InputEvent::EncoderCcw)
    }

    /// Returns the rotation direction as a signed delta (-1, 0, or +1)
    pub fn rotation_delta(&self) -> i8 {
        match self {
            InputEvent::EncoderCw => 1,
            InputEvent::EncoderCcw => -1,
            _ => 0,
        }
    }
}

/// Source of knob events, polled once per tick until it runs dry
pub trait InputSource {
    /// Next pending event, if any
    ///
    /// `now_ms` drives debouncing and long-press detection.
    fn poll_event(&mut self, now_ms: u32) -> Option<InputEvent>;
}
