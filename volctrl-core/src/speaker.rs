//! Speaker status model
//!
//! The host owns the network side (discovery, polling, volume commands).
//! The panel only sees snapshots through [`SpeakerLink`] and sends
//! requests back through it.

use heapless::Vec;

/// Most speakers shown on the panel
pub const MAX_SPEAKERS: usize = 5;

/// Lowest volume on the speakers' scale
pub const VOLUME_MIN: f32 = 0.0;

/// Highest volume on the speakers' scale
pub const VOLUME_MAX: f32 = 120.0;

/// Clamp a volume to the speakers' scale
pub fn clamp_volume(volume: f32) -> f32 {
    volume.clamp(VOLUME_MIN, VOLUME_MAX)
}

/// Volume after `detents` knob steps of `step` dB
pub fn step_volume(current: f32, detents: i32, step: f32) -> f32 {
    clamp_volume(current + detents as f32 * step)
}

/// Reachability of one speaker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpeakerState {
    /// Not reachable
    Down,
    /// Reachable, in standby
    Standby,
    /// Reachable and playing
    Active,
}

/// One speaker as shown in the top row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpeakerDot {
    pub state: SpeakerState,
    pub muted: bool,
}

/// Snapshot of the speaker group
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpeakerStatus {
    /// Network link to the speakers is up
    pub link_up: bool,
    /// Group volume, `None` until first read
    pub volume: Option<f32>,
    /// Last volume read succeeded
    pub volume_ok: bool,
    pub muted: bool,
    /// Group is in standby
    pub standby: bool,
    /// Minutes until auto standby
    pub standby_minutes: Option<u16>,
    pub speakers: Vec<SpeakerDot, MAX_SPEAKERS>,
}

impl SpeakerStatus {
    /// Number of reachable speakers
    pub fn reachable_count(&self) -> usize {
        self.speakers
            .iter()
            .filter(|s| s.state != SpeakerState::Down)
            .count()
    }

    /// Mute state a mute toggle should request
    ///
    /// Mutes when any playing speaker is unmuted, otherwise unmutes.
    pub fn mute_toggle_target(&self) -> bool {
        if self.speakers.is_empty() {
            return !self.muted;
        }
        self.speakers
            .iter()
            .any(|s| s.state == SpeakerState::Active && !s.muted)
    }
}

/// Connection to the speaker group, implemented by the host
pub trait SpeakerLink {
    /// Latest status snapshot, `None` when nothing changed since the last
    /// call
    fn status(&mut self) -> Option<SpeakerStatus>;

    /// Ask the speakers to move to `volume` (already clamped)
    fn request_volume(&mut self, volume: f32);

    fn request_mute(&mut self, muted: bool);
}
