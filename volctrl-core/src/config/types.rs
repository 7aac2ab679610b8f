//! Configuration type definitions
//!
//! These types represent the component configuration as written by the
//! user. Every field has a default so a minimal document only names what
//! differs from the stock board.

use volctrl_hal::{ComponentId, PinId};

#[cfg(feature = "serde")]
use serde::Deserialize;

/// Rated maximum SPI clock of the ST7789
pub const MAX_CLOCK_HZ: u32 = 62_500_000;

/// Default SPI clock
pub const DEFAULT_CLOCK_HZ: u32 = 40_000_000;

/// Largest single pixel burst the encoder will emit
pub const MAX_CHUNK_BYTES: usize = 4096;

/// Columns in ST7789 frame memory, the most a panel can be wide
pub const MAX_PANEL_COLUMNS: u16 = 240;

/// Rows in ST7789 frame memory, the most a panel can be tall
pub const MAX_PANEL_ROWS: u16 = 320;

/// Volume step presets cycled from the menu (dB)
pub const VOLUME_STEPS: [f32; 4] = [0.5, 1.0, 2.0, 5.0];

/// Backlight presets cycled from the menu
pub const BACKLIGHT_LEVELS: [f32; 4] = [1.0, 0.75, 0.5, 0.25];

/// Display timeout presets cycled from the menu (seconds)
pub const DISPLAY_TIMEOUTS: [u16; 4] = [30, 60, 120, 300];

/// Component id used when none is configured
pub const DEFAULT_ID: &str = "vol_ctrl";

/// Pins owned by the SPI transport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PinAssignment {
    /// Chip-select; falls back to the bus default when absent
    pub chip_select: Option<PinId>,
    /// Data/command select
    pub data_command: Option<PinId>,
    /// Hardware reset
    pub reset: Option<PinId>,
}

/// Panel orientation
///
/// Numbered like the TFT driver library's `setRotation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8"))]
pub enum Rotation {
    Portrait,
    Landscape,
    #[default]
    PortraitFlipped,
    LandscapeFlipped,
}

impl Rotation {
    /// Whether width and height swap relative to the native orientation
    pub fn is_landscape(self) -> bool {
        matches!(self, Rotation::Landscape | Rotation::LandscapeFlipped)
    }
}

impl TryFrom<u8> for Rotation {
    type Error = &'static str;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Rotation::Portrait),
            1 => Ok(Rotation::Landscape),
            2 => Ok(Rotation::PortraitFlipped),
            3 => Ok(Rotation::LandscapeFlipped),
            _ => Err("rotation must be 0-3"),
        }
    }
}

/// Panel geometry and options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PanelConfig {
    /// Native width in pixels
    pub width: u16,
    /// Native height in pixels
    pub height: u16,
    pub rotation: Rotation,
    /// Send INVON during init (IPS panels)
    pub invert_colors: bool,
    /// Maximum pixel burst in bytes
    pub chunk_bytes: usize,
    /// Staged fills transmitted per tick
    pub flush_budget: usize,
}

impl PanelConfig {
    /// Visible dimensions after rotation
    pub fn dimensions(&self) -> (u16, u16) {
        if self.rotation.is_landscape() {
            (self.height, self.width)
        } else {
            (self.width, self.height)
        }
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            width: 240,
            height: 240,
            rotation: Rotation::PortraitFlipped,
            invert_colors: true,
            chunk_bytes: MAX_CHUNK_BYTES,
            flush_budget: 8,
        }
    }
}

/// User-adjustable settings
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Settings {
    /// Volume change per knob detent (dB)
    pub volume_step: f32,
    /// Backlight level while awake (0.0-1.0)
    pub backlight_level: f32,
    /// Seconds without input before the backlight turns off, 0 = never
    pub display_timeout_s: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            volume_step: 1.0,
            backlight_level: 1.0,
            display_timeout_s: 60,
        }
    }
}

fn next_preset<T: Copy + PartialEq>(presets: &[T], current: T) -> T {
    match presets.iter().position(|p| *p == current) {
        Some(i) => presets[(i + 1) % presets.len()],
        None => presets[0],
    }
}

impl Settings {
    pub fn cycle_volume_step(&mut self) {
        self.volume_step = next_preset(&VOLUME_STEPS, self.volume_step);
    }

    pub fn cycle_backlight(&mut self) {
        self.backlight_level = next_preset(&BACKLIGHT_LEVELS, self.backlight_level);
    }

    pub fn cycle_display_timeout(&mut self) {
        self.display_timeout_s = next_preset(&DISPLAY_TIMEOUTS, self.display_timeout_s);
    }

    /// Display timeout in milliseconds, `None` when disabled
    pub fn display_timeout_ms(&self) -> Option<u32> {
        match self.display_timeout_s {
            0 => None,
            s => Some(u32::from(s) * 1000),
        }
    }
}

/// Complete component configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VolCtrlConfig {
    /// Component id reported to the host
    pub id: ComponentId,
    /// Float output driving the backlight
    pub backlight_pin: Option<ComponentId>,
    pub pins: PinAssignment,
    /// SPI clock in Hz
    pub clock_hz: u32,
    pub panel: PanelConfig,
    pub settings: Settings,
}

impl Default for VolCtrlConfig {
    fn default() -> Self {
        Self {
            id: ComponentId::new(DEFAULT_ID),
            backlight_pin: None,
            pins: PinAssignment::default(),
            clock_hz: DEFAULT_CLOCK_HZ,
            panel: PanelConfig::default(),
            settings: Settings::default(),
        }
    }
}
