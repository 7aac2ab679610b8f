//! What the main screen shows
//!
//! A [`PanelView`] is derived from the latest speaker snapshot and the
//! locally requested volume. Comparing it with the view on screen gives
//! the widgets to redraw.

use heapless::Vec;

use crate::datetime::DateTime;
use crate::layout::{DirtySet, Widget};
use crate::speaker::{SpeakerDot, SpeakerStatus, MAX_SPEAKERS, VOLUME_MAX};

/// Bottom status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StatusLine {
    Connecting,
    NoSpeakers,
    /// Everything up; show the menu hint
    Normal,
}

impl StatusLine {
    pub fn text(self) -> &'static str {
        match self {
            StatusLine::Connecting => "Connecting to WiFi",
            StatusLine::NoSpeakers => "No speakers connected",
            StatusLine::Normal => "Press for menu",
        }
    }
}

/// Main screen content
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelView {
    /// Volume rounded to whole dB, as displayed
    pub volume: Option<u8>,
    pub volume_ok: bool,
    pub muted: bool,
    pub standby: bool,
    pub standby_minutes: Option<u16>,
    pub link_up: bool,
    pub speakers: Vec<SpeakerDot, MAX_SPEAKERS>,
    pub status: StatusLine,
    /// Wall-clock time, `None` until the host knows it
    pub datetime: Option<DateTime>,
}

impl PanelView {
    /// Build the view for `status`, showing `requested` instead of the
    /// reported volume when a request is pending
    pub fn new(status: &SpeakerStatus, requested: Option<f32>) -> Self {
        let line = if !status.link_up {
            StatusLine::Connecting
        } else if status.reachable_count() == 0 {
            StatusLine::NoSpeakers
        } else {
            StatusLine::Normal
        };

        let volume = requested.or(status.volume).map(display_volume);

        Self {
            volume,
            volume_ok: status.volume_ok || requested.is_some(),
            muted: status.muted,
            standby: status.standby,
            standby_minutes: status.standby_minutes,
            link_up: status.link_up,
            speakers: status.speakers.clone(),
            status: line,
            datetime: None,
        }
    }

    /// Same view showing `datetime` in the top line
    pub fn with_datetime(mut self, datetime: Option<DateTime>) -> Self {
        self.datetime = datetime;
        self
    }

    /// Widgets that differ from `previous`; everything when nothing is on
    /// screen yet
    pub fn diff(&self, previous: Option<&PanelView>) -> DirtySet {
        let Some(prev) = previous else {
            return DirtySet::all();
        };

        let mut dirty = DirtySet::empty();
        if self.standby_minutes != prev.standby_minutes {
            dirty.insert(Widget::StandbyTime);
        }
        if self.link_up != prev.link_up {
            dirty.insert(Widget::Link);
        }
        if self.speakers != prev.speakers {
            dirty.insert(Widget::Speakers);
        }
        if self.datetime != prev.datetime {
            dirty.insert(Widget::DateTime);
        }
        if self.standby != prev.standby {
            dirty.insert(Widget::StandbyIcon);
        }
        if self.volume != prev.volume || self.volume_ok != prev.volume_ok {
            dirty.insert(Widget::Volume);
            dirty.insert(Widget::VolumeBar);
        }
        if self.muted != prev.muted {
            dirty.insert(Widget::Volume);
        }
        if self.status != prev.status {
            dirty.insert(Widget::Status);
        }
        dirty
    }

    /// Filled width of a volume bar `width` pixels wide
    pub fn bar_fill(&self, width: u16) -> u16 {
        match self.volume {
            Some(v) => (u32::from(v) * u32::from(width) / VOLUME_MAX as u32) as u16,
            None => 0,
        }
    }
}

/// Round a volume to the whole dB shown on screen
fn display_volume(volume: f32) -> u8 {
    let clamped = crate::speaker::clamp_volume(volume);
    // Round half up; `as` saturates
    (clamped + 0.5) as u8
}
