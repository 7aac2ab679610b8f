//! Events that trigger lifecycle transitions

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    // Lifecycle events
    /// Configuration, transport and init sequence succeeded
    SetupComplete,
    /// Setup failed; the peripheral is disabled until restart
    SetupFailed,
    /// Host is shutting the component down
    Teardown,

    // Drawing events
    /// A redraw was staged in the frame queue
    DrawQueued,
    /// The frame queue drained (or was discarded after an error)
    Flushed,
}

impl Event {
    /// Check if this event comes from the host lifecycle
    pub fn is_lifecycle_event(&self) -> bool {
        matches!(
            self,
            Event::SetupComplete | Event::SetupFailed | Event::Teardown
        )
    }
}
