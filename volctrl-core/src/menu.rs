//! Menu model
//!
//! A two-level menu: the main list and three submenus. Each submenu starts
//! with a back entry that returns to the item it was opened from.

/// Menu level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuLevel {
    Main,
    Equalizer,
    Speaker,
    Volume,
}

const MAIN_ITEMS: &[&str] = &[
    "Exit menu",
    "Show devices",
    "Show settings",
    "Parametric EQ",
    "Discover devices",
    "Speaker parameters",
    "Volume settings",
];

const EQUALIZER_ITEMS: &[&str] = &[".. Back", "Show curve", "Add EQ"];

const SPEAKER_ITEMS: &[&str] = &[
    ".. Back",
    "Logo brightness",
    "Delay",
    "Standby timeout",
    "Auto standby",
];

const VOLUME_ITEMS: &[&str] = &[
    ".. Back",
    "Volume step",
    "Backlight",
    "Display timeout",
    "Deep sleep",
];

// Main menu positions of the submenus
const EQUALIZER_POSITION: u8 = 3;
const SPEAKER_POSITION: u8 = 5;
const VOLUME_POSITION: u8 = 6;

impl MenuLevel {
    pub fn title(self) -> &'static str {
        match self {
            MenuLevel::Main => "MENU",
            MenuLevel::Equalizer => "PARAMETRIC EQ",
            MenuLevel::Speaker => "SPEAKER PARAMETERS",
            MenuLevel::Volume => "VOLUME SETTINGS",
        }
    }

    pub fn items(self) -> &'static [&'static str] {
        match self {
            MenuLevel::Main => MAIN_ITEMS,
            MenuLevel::Equalizer => EQUALIZER_ITEMS,
            MenuLevel::Speaker => SPEAKER_ITEMS,
            MenuLevel::Volume => VOLUME_ITEMS,
        }
    }

    /// Main menu position this level was opened from
    fn parent_position(self) -> u8 {
        match self {
            MenuLevel::Main => 0,
            MenuLevel::Equalizer => EQUALIZER_POSITION,
            MenuLevel::Speaker => SPEAKER_POSITION,
            MenuLevel::Volume => VOLUME_POSITION,
        }
    }
}

/// Result of selecting a menu item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuAction {
    /// Leave the menu
    Exit,
    /// Level changed; redraw the whole menu
    Navigate,
    CycleVolumeStep,
    CycleBacklight,
    CycleDisplayTimeout,
    /// Item accepted, nothing to do on the panel side
    None,
}

/// Menu cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Menu {
    level: MenuLevel,
    position: u8,
}

impl Default for Menu {
    fn default() -> Self {
        Self::new()
    }
}

impl Menu {
    /// Menu opened at the first main item
    pub const fn new() -> Self {
        Self {
            level: MenuLevel::Main,
            position: 0,
        }
    }

    pub fn level(&self) -> MenuLevel {
        self.level
    }

    pub fn position(&self) -> u8 {
        self.position
    }

    /// Number of items at the current level
    pub fn count(&self) -> u8 {
        self.level.items().len() as u8
    }

    /// Move the highlight down one item, wrapping to the top
    pub fn next(&mut self) {
        self.position = (self.position + 1) % self.count();
    }

    /// Move the highlight up one item, wrapping to the bottom
    pub fn previous(&mut self) {
        self.position = match self.position {
            0 => self.count() - 1,
            p => p - 1,
        };
    }

    /// Move by a signed number of detents
    pub fn step(&mut self, delta: i8) {
        if delta > 0 {
            (0..delta).for_each(|_| self.next());
        } else {
            (delta..0).for_each(|_| self.previous());
        }
    }

    fn open(&mut self, level: MenuLevel) -> MenuAction {
        self.level = level;
        self.position = 0;
        MenuAction::Navigate
    }

    fn back(&mut self) -> MenuAction {
        self.position = self.level.parent_position();
        self.level = MenuLevel::Main;
        MenuAction::Navigate
    }

    /// Select the highlighted item
    pub fn select(&mut self) -> MenuAction {
        match (self.level, self.position) {
            (MenuLevel::Main, 0) => MenuAction::Exit,
            (MenuLevel::Main, EQUALIZER_POSITION) => self.open(MenuLevel::Equalizer),
            (MenuLevel::Main, SPEAKER_POSITION) => self.open(MenuLevel::Speaker),
            (MenuLevel::Main, VOLUME_POSITION) => self.open(MenuLevel::Volume),
            (MenuLevel::Main, _) => MenuAction::None,

            (_, 0) => self.back(),

            (MenuLevel::Volume, 1) => MenuAction::CycleVolumeStep,
            (MenuLevel::Volume, 2) => MenuAction::CycleBacklight,
            (MenuLevel::Volume, 3) => MenuAction::CycleDisplayTimeout,
            _ => MenuAction::None,
        }
    }
}
