//! Front-panel controller
//!
//! The controller is the component the host schedules. It:
//! - Brings up the SPI transport and the ST7789 panel in `setup`
//! - Polls the knob and the speaker link on every `tick`
//! - Turns knob events into volume, mute and menu actions
//! - Redraws only the widgets whose content changed
//! - Flushes a bounded number of staged fills per tick
//! - Switches the backlight off after the display timeout

use embedded_graphics::draw_target::DrawTarget;
use volctrl_core::config::{Settings, VolCtrlConfig};
use volctrl_core::datetime::DateTime;
use volctrl_core::input::{InputEvent, InputSource};
use volctrl_core::menu::{Menu, MenuAction};
use volctrl_core::speaker::{step_volume, SpeakerLink, SpeakerStatus};
use volctrl_core::state::{Event, State};
use volctrl_core::view::PanelView;
use volctrl_core::{ConfigurationError, Error};
use volctrl_drivers::{SpiTransport, St7789};
use volctrl_hal::time::elapsed_ms;
use volctrl_hal::{ComponentId, SpiHost};

use crate::host::{Component, Host, Registration, SetupPriority, Subsystem};
use crate::render;

/// A long press cannot reopen the menu this soon after it was toggled
pub const MENU_GUARD_MS: u32 = 1000;

/// How long a requested volume is shown over speaker reports
pub const VOLUME_HOLD_MS: u32 = 1500;

const REQUIRES: &[Subsystem] = &[Subsystem::Spi];

/// Screen work requested by input handling
#[derive(Debug, Clone, Copy, Default)]
struct Redraw {
    /// Repaint everything
    full: bool,
    /// Menu highlight left this position
    marker_from: Option<u8>,
}

/// VolCtrl front-panel component
pub struct Controller<S: SpiHost, I, L> {
    config: VolCtrlConfig,
    state: State,
    /// Why setup failed
    failure: Option<Error>,
    display: St7789<SpiTransport<S>>,
    input: I,
    link: L,
    status: SpeakerStatus,
    datetime: Option<DateTime>,
    /// Main screen as last staged
    shown: Option<PanelView>,
    menu: Option<Menu>,
    menu_toggled_at: Option<u32>,
    /// Locally requested volume and when it was requested
    requested: Option<(f32, u32)>,
    last_input_ms: u32,
    asleep: bool,
    redraw: Redraw,
}

impl<S, I, L> Controller<S, I, L>
where
    S: SpiHost,
    I: InputSource,
    L: SpeakerLink,
{
    pub fn new(config: VolCtrlConfig, spi: S, input: I, link: L) -> Self {
        let display = St7789::new(SpiTransport::new(spi), config.panel);
        Self {
            config,
            state: State::Uninitialized,
            failure: None,
            display,
            input,
            link,
            status: SpeakerStatus::default(),
            datetime: None,
            shown: None,
            menu: None,
            menu_toggled_at: None,
            requested: None,
            last_input_ms: 0,
            asleep: false,
            redraw: Redraw::default(),
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn config(&self) -> &VolCtrlConfig {
        &self.config
    }

    /// Settings as changed from the menu
    pub fn settings(&self) -> &Settings {
        &self.config.settings
    }

    /// Open menu, if any
    pub fn menu(&self) -> Option<&Menu> {
        self.menu.as_ref()
    }

    /// Backlight is off after the display timeout
    pub fn is_asleep(&self) -> bool {
        self.asleep
    }

    pub fn display(&self) -> &St7789<SpiTransport<S>> {
        &self.display
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn link(&self) -> &L {
        &self.link
    }

    pub fn link_mut(&mut self) -> &mut L {
        &mut self.link
    }

    /// Bind the backlight output
    ///
    /// Rejected while a draw is in flight.
    pub fn set_backlight_pin(
        &mut self,
        output: Option<ComponentId>,
    ) -> Result<(), ConfigurationError> {
        if self.state.draw_in_flight() {
            return Err(ConfigurationError::DrawInFlight);
        }
        self.display.set_backlight_ref(output.clone());
        self.config.backlight_pin = output;
        Ok(())
    }

    /// Set the backlight level (clamped to 0.0-1.0)
    ///
    /// Returns whether an output was written. Without a bound output this
    /// does nothing.
    pub fn set_backlight(&mut self, level: f32, host: &mut dyn Host) -> bool {
        self.display.set_backlight(level, host.outputs())
    }

    fn transition(&mut self, event: Event) {
        let next = self.state.transition(event);
        if next != self.state {
            #[cfg(feature = "defmt")]
            defmt::debug!("{}: {} -> {}", self.config.id.as_str(), self.state, next);
            self.state = next;
        }
    }

    fn report(&self, host: &mut dyn Host, error: Error) {
        #[cfg(feature = "defmt")]
        defmt::warn!("{}: {}", self.config.id.as_str(), error);
        host.report(&self.config.id, error);
    }

    fn bring_up(&mut self, host: &mut dyn Host) -> Result<(), Error> {
        if !host.has_subsystem(Subsystem::Spi) {
            return Err(ConfigurationError::MissingSpiSubsystem.into());
        }
        self.config.validate(host.outputs())?;

        let transport = self.display.transport_mut();
        transport.configure(&self.config.pins, self.config.clock_hz)?;
        transport.hardware_reset(host.delay())?;
        self.display.init_sequence(host.delay())?;

        self.display.clear(render::BACKGROUND)?;
        self.display.flush()?;

        self.display
            .set_backlight_ref(self.config.backlight_pin.clone());
        self.display
            .set_backlight(self.config.settings.backlight_level, host.outputs());
        Ok(())
    }

    fn handle_input(&mut self, event: InputEvent, now: u32, host: &mut dyn Host) {
        self.last_input_ms = now;

        // The first event after the timeout only wakes the display
        if self.asleep {
            self.asleep = false;
            self.display
                .set_backlight(self.config.settings.backlight_level, host.outputs());
            return;
        }

        if event.is_rotation() {
            let delta = event.rotation_delta();
            if let Some(menu) = self.menu.as_mut() {
                let from = menu.position();
                menu.step(delta);
                if self.redraw.marker_from.is_none() {
                    self.redraw.marker_from = Some(from);
                }
            } else {
                self.change_volume(delta, now);
            }
            return;
        }

        match event {
            InputEvent::EncoderClick if self.menu.is_some() => self.select(host),
            InputEvent::EncoderClick => {
                let muted = self.status.mute_toggle_target();
                self.link.request_mute(muted);
            }
            InputEvent::EncoderLongPress => self.toggle_menu(now),
            _ => {}
        }
    }

    fn change_volume(&mut self, delta: i8, now: u32) {
        let current = self.requested.map(|(v, _)| v).or(self.status.volume);
        let Some(current) = current else {
            // Nothing to step from until the speakers report a volume
            return;
        };
        let volume = step_volume(
            current,
            i32::from(delta),
            self.config.settings.volume_step,
        );
        self.link.request_volume(volume);
        self.requested = Some((volume, now));
    }

    fn toggle_menu(&mut self, now: u32) {
        if self.menu.is_some() {
            self.close_menu();
            self.menu_toggled_at = Some(now);
            return;
        }
        if let Some(at) = self.menu_toggled_at {
            if elapsed_ms(now, at) < MENU_GUARD_MS {
                return;
            }
        }
        self.menu = Some(Menu::new());
        self.menu_toggled_at = Some(now);
        self.redraw.full = true;
    }

    fn close_menu(&mut self) {
        self.menu = None;
        self.shown = None;
        self.redraw.full = true;
    }

    fn select(&mut self, host: &mut dyn Host) {
        let Some(action) = self.menu.as_mut().map(Menu::select) else {
            return;
        };
        let settings = &mut self.config.settings;
        match action {
            MenuAction::Exit => self.close_menu(),
            MenuAction::Navigate => self.redraw.full = true,
            MenuAction::CycleVolumeStep => settings.cycle_volume_step(),
            MenuAction::CycleBacklight => {
                settings.cycle_backlight();
                let level = settings.backlight_level;
                self.display.set_backlight(level, host.outputs());
            }
            MenuAction::CycleDisplayTimeout => settings.cycle_display_timeout(),
            MenuAction::None => {}
        }
    }

    fn check_timeout(&mut self, now: u32, host: &mut dyn Host) {
        if self.asleep {
            return;
        }
        let Some(timeout) = self.config.settings.display_timeout_ms() else {
            return;
        };
        if elapsed_ms(now, self.last_input_ms) >= timeout {
            #[cfg(feature = "defmt")]
            defmt::info!("{}: display timeout", self.config.id.as_str());
            self.asleep = true;
            self.display.set_backlight(0.0, host.outputs());
        }
    }

    /// Stage whatever changed since the last tick
    fn stage(&mut self) -> Result<(), Error> {
        let redraw = core::mem::take(&mut self.redraw);

        if let Some(menu) = self.menu {
            if redraw.full {
                render::draw_menu(&mut self.display, &menu)?;
            } else if let Some(from) = redraw.marker_from {
                render::draw_marker(&mut self.display, from, false)?;
                render::draw_marker(&mut self.display, menu.position(), true)?;
            }
            return Ok(());
        }

        let view = PanelView::new(&self.status, self.requested.map(|(v, _)| v))
            .with_datetime(self.datetime);
        let previous = if redraw.full { None } else { self.shown.take() };
        let dirty = view.diff(previous.as_ref());
        // A failed draw is dropped, not retried
        self.shown = Some(view.clone());

        if previous.is_none() {
            return render::draw_main(&mut self.display, &view);
        }
        for widget in dirty.iter() {
            render::draw_widget(&mut self.display, widget, &view)?;
        }
        Ok(())
    }
}

impl<S, I, L> Component for Controller<S, I, L>
where
    S: SpiHost,
    I: InputSource,
    L: SpeakerLink,
{
    fn registration(&self) -> Registration {
        Registration {
            id: self.config.id.clone(),
            requires: REQUIRES,
            priority: SetupPriority::Hardware,
        }
    }

    fn setup(&mut self, host: &mut dyn Host) -> Result<(), Error> {
        match self.state {
            State::Uninitialized => {}
            // Disabled until restart
            State::Failed => return self.failure.map_or(Ok(()), Err),
            _ => return Ok(()),
        }

        match self.bring_up(host) {
            Ok(()) => {
                self.last_input_ms = host.clock().now_ms();
                self.redraw.full = true;
                self.transition(Event::SetupComplete);
                #[cfg(feature = "defmt")]
                defmt::info!("{}: panel ready", self.config.id.as_str());
                Ok(())
            }
            Err(e) => {
                self.display.discard();
                self.display.transport_mut().release();
                self.failure = Some(e);
                self.transition(Event::SetupFailed);
                self.report(host, e);
                Err(e)
            }
        }
    }

    fn tick(&mut self, host: &mut dyn Host) {
        if !self.state.bus_allowed() {
            return;
        }
        let now = host.clock().now_ms();

        if let Some((_, at)) = self.requested {
            if elapsed_ms(now, at) >= VOLUME_HOLD_MS {
                self.requested = None;
            }
        }
        if let Some(status) = self.link.status() {
            self.status = status;
        }
        self.datetime = host.datetime();
        while let Some(event) = self.input.poll_event(now) {
            self.handle_input(event, now, host);
        }
        self.check_timeout(now, host);

        if let Err(e) = self.stage() {
            self.display.discard();
            self.report(host, e);
        }
        if self.display.pending() > 0 {
            self.transition(Event::DrawQueued);
        }

        match self.display.flush_budget(self.config.panel.flush_budget) {
            Ok(0) => self.transition(Event::Flushed),
            Ok(_) => {}
            Err(e) => {
                // The queue is gone; the screen keeps its stale content
                self.report(host, e);
                self.transition(Event::Flushed);
            }
        }
    }

    fn teardown(&mut self, _host: &mut dyn Host) {
        self.display.discard();
        self.display.transport_mut().release();
        self.menu = None;
        self.shown = None;
        self.requested = None;
        self.asleep = false;
        self.redraw = Redraw::default();
        self.transition(Event::Teardown);
    }

    fn dump_config(&self) {
        #[cfg(feature = "defmt")]
        {
            let config = &self.config;
            defmt::info!("VolCtrl '{}':", config.id.as_str());
            defmt::info!("  Pins: {}", config.pins);
            defmt::info!("  SPI clock: {} Hz", config.clock_hz);
            defmt::info!("  Panel: {}", config.panel);
            match &config.backlight_pin {
                Some(id) => defmt::info!("  Backlight: {}", id.as_str()),
                None => defmt::info!("  Backlight: none"),
            }
            defmt::info!("  Settings: {}", config.settings);
            defmt::info!("  State: {}", self.state);
        }
    }
}
