//! Configuration validation
//!
//! Checks a [`VolCtrlConfig`] against fixed limits and against the host's
//! output registry. Runs once during setup, before any bus traffic.

use volctrl_hal::OutputRegistry;

use super::types::{
    PanelConfig, Settings, VolCtrlConfig, MAX_CHUNK_BYTES, MAX_CLOCK_HZ, MAX_PANEL_COLUMNS,
    MAX_PANEL_ROWS,
};
use crate::error::ConfigurationError;

/// Largest volume step accepted (dB)
pub const MAX_VOLUME_STEP: f32 = 10.0;

impl VolCtrlConfig {
    /// Parse a TOML document
    ///
    /// ```toml
    /// backlight_pin = "backlight_pwm"
    /// clock_hz = 40000000
    ///
    /// [pins]
    /// chip_select = "gpio5"
    /// data_command = "gpio16"
    /// reset = "gpio23"
    ///
    /// [panel]
    /// rotation = 2
    /// ```
    ///
    /// Only the document is checked here; call [`VolCtrlConfig::validate`]
    /// against the host before use.
    #[cfg(feature = "toml")]
    pub fn from_toml(document: &str) -> Result<Self, ConfigurationError> {
        let config: Self = toml::from_str(document).map_err(|_| ConfigurationError::Parse)?;
        validate_static(&config)?;
        Ok(config)
    }

    /// Validate the configuration against fixed limits and the host
    pub fn validate(&self, outputs: &mut dyn OutputRegistry) -> Result<(), ConfigurationError> {
        validate_static(self)?;

        if let Some(id) = &self.backlight_pin {
            if outputs.float_output(id).is_none() {
                return Err(ConfigurationError::UnknownOutput);
            }
        }

        Ok(())
    }
}

/// Checks that need nothing from the host
pub fn validate_static(config: &VolCtrlConfig) -> Result<(), ConfigurationError> {
    validate_clock(config.clock_hz)?;
    if config.pins.data_command.is_none() {
        return Err(ConfigurationError::MissingDataCommand);
    }
    validate_panel(&config.panel)?;
    validate_settings(&config.settings)
}

/// SPI clock must be non-zero and within the controller's rating
pub fn validate_clock(clock_hz: u32) -> Result<(), ConfigurationError> {
    if clock_hz == 0 {
        return Err(ConfigurationError::ClockZero);
    }
    if clock_hz > MAX_CLOCK_HZ {
        return Err(ConfigurationError::ClockTooFast {
            requested: clock_hz,
            max: MAX_CLOCK_HZ,
        });
    }
    Ok(())
}

fn validate_panel(panel: &PanelConfig) -> Result<(), ConfigurationError> {
    let width_ok = (1..=MAX_PANEL_COLUMNS).contains(&panel.width);
    let height_ok = (1..=MAX_PANEL_ROWS).contains(&panel.height);
    // A chunk must hold at least one pixel
    let chunk_ok = panel.chunk_bytes >= 2 && panel.chunk_bytes <= MAX_CHUNK_BYTES;

    if !width_ok || !height_ok || !chunk_ok || panel.flush_budget == 0 {
        return Err(ConfigurationError::InvalidPanel);
    }
    Ok(())
}

fn validate_settings(settings: &Settings) -> Result<(), ConfigurationError> {
    let step_ok = settings.volume_step > 0.0 && settings.volume_step <= MAX_VOLUME_STEP;
    let level_ok = (0.0..=1.0).contains(&settings.backlight_level);

    if !step_ok || !level_ok {
        return Err(ConfigurationError::InvalidSetting);
    }
    Ok(())
}
