//! Screen layout of the 240x240 front panel
//!
//! Each widget owns a fixed region. A widget redraw clears its region and
//! paints it again, so regions never overlap.

use crate::geometry::Rect;

/// Main screen widgets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Widget {
    /// Minutes until the speakers go to standby
    StandbyTime,
    /// Network link icon
    Link,
    /// One dot per speaker
    Speakers,
    /// Time and date, top right
    DateTime,
    /// "Zzz" while the speakers are in standby
    StandbyIcon,
    /// Volume number with mute and error overlays
    Volume,
    VolumeBar,
    /// Bottom status line
    Status,
}

impl Widget {
    pub const ALL: [Widget; 8] = [
        Widget::StandbyTime,
        Widget::Link,
        Widget::Speakers,
        Widget::DateTime,
        Widget::StandbyIcon,
        Widget::Volume,
        Widget::VolumeBar,
        Widget::Status,
    ];

    /// Region cleared and redrawn for this widget
    pub const fn region(self) -> Rect {
        match self {
            Widget::StandbyTime => STANDBY_TIME,
            Widget::Link => LINK,
            Widget::Speakers => SPEAKERS,
            Widget::DateTime => DATETIME,
            Widget::StandbyIcon => STANDBY_ICON,
            Widget::Volume => VOLUME,
            Widget::VolumeBar => VOLUME_BAR,
            Widget::Status => STATUS,
        }
    }

    const fn bit(self) -> u16 {
        1 << self as u8
    }
}

pub const STANDBY_TIME: Rect = Rect::new(4, 4, 40, 22);
pub const LINK: Rect = Rect::new(45, 2, 30, 30);
pub const SPEAKERS: Rect = Rect::new(80, 8, 92, 20);
pub const DATETIME: Rect = Rect::new(174, 6, 62, 14);
pub const STANDBY_ICON: Rect = Rect::new(90, 40, 60, 30);
pub const VOLUME: Rect = Rect::new(40, 76, 160, 80);
pub const VOLUME_BAR: Rect = Rect::new(20, 172, 200, 8);
pub const STATUS: Rect = Rect::new(20, 200, 200, 30);

/// Centre of the link icon
pub const LINK_CENTER: (i32, i32) = (60, 17);
/// Centre of the first speaker dot
pub const SPEAKER_ORIGIN: (i32, i32) = (90, 18);
/// Horizontal distance between speaker dots
pub const SPEAKER_SPACING: i32 = 18;
pub const SPEAKER_RADIUS: u32 = 7;
/// Centre of the volume number
pub const VOLUME_CENTER: (i32, i32) = (120, 112);
pub const MUTE_RADIUS: u32 = 24;
/// Top-left corner of the date/time label
pub const DATETIME_ORIGIN: (i32, i32) = (175, 9);

/// Menu title position
pub const MENU_TITLE: (i32, i32) = (10, 10);
/// Left edge of menu item text
pub const MENU_TEXT_X: i32 = 26;
/// Top of the first menu item
pub const MENU_TOP: u16 = 50;
/// Vertical distance between menu items
pub const MENU_SPACING: u16 = 20;
pub const MENU_MARKER_SIZE: u16 = 10;

/// Highlight square in front of menu item `position`
pub const fn menu_marker(position: u8) -> Rect {
    Rect::new(
        10,
        MENU_TOP + position as u16 * MENU_SPACING,
        MENU_MARKER_SIZE,
        MENU_MARKER_SIZE,
    )
}

/// Set of widgets needing a redraw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DirtySet(u16);

impl DirtySet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn all() -> Self {
        Self((1 << Widget::ALL.len()) - 1)
    }

    pub fn insert(&mut self, widget: Widget) {
        self.0 |= widget.bit();
    }

    pub fn contains(&self, widget: Widget) -> bool {
        self.0 & widget.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Dirty widgets in drawing order
    pub fn iter(&self) -> impl Iterator<Item = Widget> + '_ {
        Widget::ALL.into_iter().filter(|w| self.contains(*w))
    }
}
