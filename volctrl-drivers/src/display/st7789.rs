//! ST7789 TFT command encoder
//!
//! Driver for ST7789-based RGB565 panels over a [`Transport`]. The panel
//! RAM is 240x320; smaller panels sit at an offset that depends on the
//! rotation (80 rows for a 240x240 panel in rotation 2).

use embedded_graphics::pixelcolor::raw::{RawData, RawU16};
use embedded_graphics::pixelcolor::Rgb565;
use volctrl_core::config::{PanelConfig, Rotation, MAX_CHUNK_BYTES, MAX_PANEL_ROWS};
use volctrl_core::{Error, InitializationError, OutOfBoundsError, Rect, TransportError};
use volctrl_hal::{ComponentId, Delay, OutputRegistry};

use super::chunk::Chunks;
use super::frame::{FrameQueue, PendingFill};
use crate::backlight::Backlight;
use crate::transport::Transport;

/// Attempts made by [`St7789::init_sequence`]
pub const INIT_ATTEMPTS: u8 = 3;

/// Pause between init attempts
pub const INIT_BACKOFF_MS: u32 = 50;

/// ST7789 commands
pub mod cmd {
    pub const SWRESET: u8 = 0x01;
    pub const SLPIN: u8 = 0x10;
    pub const SLPOUT: u8 = 0x11;
    pub const NORON: u8 = 0x13;
    pub const INVOFF: u8 = 0x20;
    pub const INVON: u8 = 0x21;
    pub const DISPOFF: u8 = 0x28;
    pub const DISPON: u8 = 0x29;
    pub const CASET: u8 = 0x2A;
    pub const RASET: u8 = 0x2B;
    pub const RAMWR: u8 = 0x2C;
    pub const MADCTL: u8 = 0x36;
    pub const COLMOD: u8 = 0x3A;
    pub const PORCTRL: u8 = 0xB2;
    pub const GCTRL: u8 = 0xB7;
    pub const VCOMS: u8 = 0xBB;
    pub const LCMCTRL: u8 = 0xC0;
    pub const VDVVRHEN: u8 = 0xC2;
    pub const VRHS: u8 = 0xC3;
    pub const VDVS: u8 = 0xC4;
    pub const FRCTRL2: u8 = 0xC6;
    pub const PWCTRL1: u8 = 0xD0;
    pub const PVGAMCTRL: u8 = 0xE0;
    pub const NVGAMCTRL: u8 = 0xE1;
}

/// MADCTL bits
mod madctl {
    pub const MY: u8 = 0x80;
    pub const MX: u8 = 0x40;
    pub const MV: u8 = 0x20;
}

/// 16 bits per pixel
const COLMOD_RGB565: u8 = 0x55;

/// One init step: command, parameters, settle time
type InitStep = (u8, &'static [u8], u32);

/// Power, timing and gamma settings between COLMOD and the address window
const PANEL_SETTINGS: &[InitStep] = &[
    (cmd::PORCTRL, &[0x0C, 0x0C, 0x00, 0x33, 0x33], 0),
    (cmd::GCTRL, &[0x35], 0),
    (cmd::VCOMS, &[0x28], 0),
    (cmd::LCMCTRL, &[0x0C], 0),
    (cmd::VDVVRHEN, &[0x01, 0xFF], 0),
    (cmd::VRHS, &[0x10], 0),
    (cmd::VDVS, &[0x20], 0),
    (cmd::FRCTRL2, &[0x0F], 0),
    (cmd::PWCTRL1, &[0xA4, 0xA1], 0),
    (
        cmd::PVGAMCTRL,
        &[
            0xD0, 0x00, 0x02, 0x07, 0x0A, 0x28, 0x32, 0x44, 0x42, 0x06, 0x0E, 0x12, 0x14, 0x17,
        ],
        0,
    ),
    (
        cmd::NVGAMCTRL,
        &[
            0xD0, 0x00, 0x02, 0x07, 0x0A, 0x28, 0x31, 0x54, 0x47, 0x0E, 0x1C, 0x17, 0x1B, 0x1E,
        ],
        0,
    ),
];

/// MADCTL value and RAM offset for a rotation
fn orientation(rotation: Rotation, native_height: u16) -> (u8, u16, u16) {
    // Rows of frame memory the panel does not cover
    let spare = MAX_PANEL_ROWS.saturating_sub(native_height);
    match rotation {
        Rotation::Portrait => (0, 0, 0),
        Rotation::Landscape => (madctl::MX | madctl::MV, 0, 0),
        Rotation::PortraitFlipped => (madctl::MX | madctl::MY, 0, spare),
        Rotation::LandscapeFlipped => (madctl::MY | madctl::MV, spare, 0),
    }
}

/// Big-endian RGB565 bytes of a color
pub fn color_bytes(color: Rgb565) -> [u8; 2] {
    RawU16::from(color).into_inner().to_be_bytes()
}

/// ST7789 command encoder
pub struct St7789<T> {
    transport: T,
    panel: PanelConfig,
    /// Visible size after rotation
    width: u16,
    height: u16,
    /// RAM offset of the visible area
    offset: (u16, u16),
    queue: FrameQueue,
    backlight: Backlight,
}

impl<T: Transport> St7789<T> {
    pub fn new(transport: T, panel: PanelConfig) -> Self {
        let mut encoder = Self {
            transport,
            panel,
            width: panel.width,
            height: panel.height,
            offset: (0, 0),
            queue: FrameQueue::new(),
            backlight: Backlight::default(),
        };
        encoder.apply_rotation(panel.rotation);
        encoder
    }

    fn apply_rotation(&mut self, rotation: Rotation) {
        self.panel.rotation = rotation;
        let (width, height) = self.panel.dimensions();
        let (_, dx, dy) = orientation(rotation, self.panel.height);
        self.width = width;
        self.height = height;
        self.offset = (dx, dy);
    }

    /// Visible size after rotation
    pub fn dimensions(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub fn panel(&self) -> &PanelConfig {
        &self.panel
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Bytes per pixel burst
    fn chunk_bytes(&self) -> usize {
        self.panel.chunk_bytes.clamp(2, MAX_CHUNK_BYTES)
    }

    /// Run the init sequence, retrying after a backoff
    pub fn init_sequence(&mut self, delay: &mut dyn Delay) -> Result<(), InitializationError> {
        let mut last = TransportError::Bus;

        for attempt in 1..=INIT_ATTEMPTS {
            match self.send_init(delay) {
                Ok(()) => {
                    #[cfg(feature = "defmt")]
                    defmt::info!("ST7789 up after {} attempt(s)", attempt);
                    return Ok(());
                }
                Err(e) => {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("ST7789 init attempt {} failed: {}", attempt, e);
                    last = e;
                    if attempt < INIT_ATTEMPTS {
                        delay.delay_ms(INIT_BACKOFF_MS);
                    }
                }
            }
        }

        Err(InitializationError {
            attempts: INIT_ATTEMPTS,
            last,
        })
    }

    fn send_init(&mut self, delay: &mut dyn Delay) -> Result<(), TransportError> {
        let (madctl, _, _) = orientation(self.panel.rotation, self.panel.height);

        self.transport.command(cmd::SWRESET, &[])?;
        delay.delay_ms(150);
        self.transport.command(cmd::SLPOUT, &[])?;
        delay.delay_ms(120);
        self.transport.command(cmd::NORON, &[])?;
        self.transport.command(cmd::MADCTL, &[madctl])?;
        self.transport.command(cmd::COLMOD, &[COLMOD_RGB565])?;

        for &(command, params, settle_ms) in PANEL_SETTINGS {
            self.transport.command(command, params)?;
            if settle_ms > 0 {
                delay.delay_ms(settle_ms);
            }
        }

        if self.panel.invert_colors {
            self.transport.command(cmd::INVON, &[])?;
        }

        let full = Rect::new(0, 0, self.width, self.height);
        self.set_window(&full)?;

        self.transport.command(cmd::DISPON, &[])?;
        delay.delay_ms(120);
        Ok(())
    }

    /// Set the RAM address window to `area` (visible coordinates)
    fn set_window(&mut self, area: &Rect) -> Result<(), TransportError> {
        let (dx, dy) = self.offset;
        let x0 = area.x + dx;
        let x1 = x0 + area.width - 1;
        let y0 = area.y + dy;
        let y1 = y0 + area.height - 1;

        let [xs_hi, xs_lo] = x0.to_be_bytes();
        let [xe_hi, xe_lo] = x1.to_be_bytes();
        self.transport
            .command(cmd::CASET, &[xs_hi, xs_lo, xe_hi, xe_lo])?;

        let [ys_hi, ys_lo] = y0.to_be_bytes();
        let [ye_hi, ye_lo] = y1.to_be_bytes();
        self.transport
            .command(cmd::RASET, &[ys_hi, ys_lo, ye_hi, ye_lo])
    }

    /// Check a region lies on the panel
    pub fn check_region(&self, area: &Rect) -> Result<(), OutOfBoundsError> {
        area.check_within(self.width, self.height)
    }

    /// Write a block of big-endian RGB565 pixels
    ///
    /// Nothing is sent unless both the region and the buffer length are
    /// valid. Bursts larger than the chunk size are split into separate
    /// address windows.
    pub fn draw_region(&mut self, area: Rect, pixels: &[u8]) -> Result<(), Error> {
        self.check_region(&area)?;
        let expected = area.area() as usize * 2;
        if pixels.len() != expected {
            return Err(OutOfBoundsError::PixelData {
                expected,
                actual: pixels.len(),
            }
            .into());
        }

        let planner = Chunks::new(area, self.chunk_bytes());
        for chunk in planner.clone() {
            let start = planner.offset(&chunk);
            let end = start + chunk.area() as usize * 2;
            self.set_window(&chunk)?;
            self.transport.command(cmd::RAMWR, &[])?;
            self.transport.write(&pixels[start..end], false)?;
        }
        Ok(())
    }

    /// Fill a region with one color
    pub fn fill_region(&mut self, area: Rect, color: Rgb565) -> Result<(), Error> {
        self.check_region(&area)?;

        let chunk_bytes = self.chunk_bytes();
        let mut burst = [0u8; MAX_CHUNK_BYTES];
        let [hi, lo] = color_bytes(color);
        for pair in burst[..chunk_bytes].chunks_exact_mut(2) {
            pair[0] = hi;
            pair[1] = lo;
        }

        for chunk in Chunks::new(area, chunk_bytes) {
            self.set_window(&chunk)?;
            self.transport.command(cmd::RAMWR, &[])?;
            self.transport
                .write(&burst[..chunk.area() as usize * 2], false)?;
        }
        Ok(())
    }

    /// Stage a fill for the next flush
    ///
    /// A full queue is flushed first.
    pub fn queue_fill(&mut self, area: Rect, color: Rgb565) -> Result<(), Error> {
        self.check_region(&area)?;
        if let Err(fill) = self.queue.push(PendingFill { area, color }) {
            self.flush()?;
            // Cannot fail: the queue is empty after a flush
            let _ = self.queue.push(fill);
        }
        Ok(())
    }

    /// Transmit every staged fill
    pub fn flush(&mut self) -> Result<(), Error> {
        self.flush_budget(usize::MAX).map(|_| ())
    }

    /// Transmit at most `budget` staged fills, returning how many remain
    ///
    /// On error the rest of the queue is discarded.
    pub fn flush_budget(&mut self, budget: usize) -> Result<usize, Error> {
        for _ in 0..budget {
            let Some(fill) = self.queue.pop() else {
                break;
            };
            if let Err(e) = self.fill_region(fill.area, fill.color) {
                #[cfg(feature = "defmt")]
                defmt::warn!("dropping {} staged fills: {}", self.queue.len(), e);
                self.queue.clear();
                return Err(e);
            }
        }
        Ok(self.queue.len())
    }

    /// Number of staged fills
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Drop every staged fill
    pub fn discard(&mut self) {
        self.queue.clear();
    }

    /// Change orientation
    ///
    /// Staged fills are in the old coordinates and are dropped.
    pub fn set_rotation(&mut self, rotation: Rotation) -> Result<(), TransportError> {
        let (madctl, _, _) = orientation(rotation, self.panel.height);
        self.transport.command(cmd::MADCTL, &[madctl])?;
        self.queue.clear();
        self.apply_rotation(rotation);
        Ok(())
    }

    pub fn set_inverted(&mut self, inverted: bool) -> Result<(), TransportError> {
        let command = if inverted { cmd::INVON } else { cmd::INVOFF };
        self.transport.command(command, &[])?;
        self.panel.invert_colors = inverted;
        Ok(())
    }

    /// Enter or leave sleep mode
    ///
    /// The controller needs 120 ms after SLPOUT before the next command.
    pub fn sleep(&mut self, on: bool) -> Result<(), TransportError> {
        self.transport
            .command(if on { cmd::SLPIN } else { cmd::SLPOUT }, &[])
    }

    pub fn display_on(&mut self, on: bool) -> Result<(), TransportError> {
        self.transport
            .command(if on { cmd::DISPON } else { cmd::DISPOFF }, &[])
    }

    /// Bind the backlight output
    pub fn set_backlight_ref(&mut self, output: Option<ComponentId>) {
        self.backlight.bind(output);
    }

    pub fn backlight(&self) -> &Backlight {
        &self.backlight
    }

    /// Set the backlight, clamped to 0.0-1.0
    ///
    /// Returns whether an output was written; an absent output is not an
    /// error.
    pub fn set_backlight(&mut self, level: f32, outputs: &mut dyn OutputRegistry) -> bool {
        self.backlight.set_level(level, outputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockDelay, MockRegistry, MockTransport, Wire};
    use embedded_graphics::pixelcolor::RgbColor;

    fn encoder() -> St7789<MockTransport> {
        St7789::new(MockTransport::default(), PanelConfig::default())
    }

    fn window(wire: &[Wire]) -> Vec<(u8, Vec<u8>)> {
        wire.windows(2)
            .filter_map(|w| match (&w[0], &w[1]) {
                (Wire::Command(c @ (cmd::CASET | cmd::RASET)), Wire::Data(d)) => {
                    Some((*c, d.clone()))
                }
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_init_sequence_order() {
        let mut display = encoder();
        let mut delay = MockDelay::default();
        display.init_sequence(&mut delay).unwrap();

        let commands: Vec<u8> = display
            .transport()
            .wire
            .iter()
            .filter_map(|w| match w {
                Wire::Command(c) => Some(*c),
                Wire::Data(_) => None,
            })
            .collect();

        assert_eq!(&commands[..5], &[0x01, 0x11, 0x13, 0x36, 0x3A]);
        assert_eq!(
            &commands[5..],
            &[
                0xB2, 0xB7, 0xBB, 0xC0, 0xC2, 0xC3, 0xC4, 0xC6, 0xD0, 0xE0, 0xE1, 0x21, 0x2A,
                0x2B, 0x29
            ]
        );
        assert_eq!(delay.calls, [150, 120, 120]);

        // Rotation 2 on a 240x240 panel: MX|MY and an 80-row offset
        let wire = &display.transport().wire;
        assert_eq!(wire[4], Wire::data(&[0xC0]));
        assert_eq!(wire[6], Wire::data(&[0x55]));
        assert_eq!(
            window(wire),
            [
                (cmd::CASET, Vec::from([0x00, 0x00, 0x00, 0xEF])),
                (cmd::RASET, Vec::from([0x00, 0x50, 0x01, 0x3F])),
            ]
        );
    }

    #[test]
    fn test_init_without_inversion() {
        let panel = PanelConfig {
            invert_colors: false,
            ..Default::default()
        };
        let mut display = St7789::new(MockTransport::default(), panel);
        display.init_sequence(&mut MockDelay::default()).unwrap();
        assert!(!display
            .transport()
            .wire
            .contains(&Wire::Command(cmd::INVON)));
    }

    #[test]
    fn test_init_retries_then_fails() {
        let mut display = St7789::new(
            MockTransport::failing(TransportError::Timeout),
            PanelConfig::default(),
        );
        let mut delay = MockDelay::default();

        assert_eq!(
            display.init_sequence(&mut delay),
            Err(InitializationError {
                attempts: 3,
                last: TransportError::Timeout
            })
        );
        // Backoff between attempts only
        assert_eq!(delay.calls, [INIT_BACKOFF_MS, INIT_BACKOFF_MS]);
    }

    #[test]
    fn test_init_recovers_on_retry() {
        let mut transport = MockTransport::default();
        transport.failures = 1;
        transport.error = Some(TransportError::Nack);
        let mut display = St7789::new(transport, PanelConfig::default());

        assert_eq!(display.init_sequence(&mut MockDelay::default()), Ok(()));
        assert_eq!(
            display.transport().wire.first(),
            Some(&Wire::Command(cmd::SWRESET))
        );
    }

    #[test]
    fn test_draw_region_is_idempotent() {
        let mut display = encoder();
        let pixels: Vec<u8> = (0..4 * 3 * 2).map(|i| i as u8).collect();
        let area = Rect::new(10, 20, 4, 3);

        display.draw_region(area, &pixels).unwrap();
        let first = display.transport().wire.clone();
        display.transport_mut().wire.clear();
        display.draw_region(area, &pixels).unwrap();

        assert_eq!(display.transport().wire, first);
        assert_eq!(
            first,
            [
                Wire::Command(cmd::CASET),
                Wire::data(&[0x00, 10, 0x00, 13]),
                Wire::Command(cmd::RASET),
                Wire::data(&[0x00, 100, 0x00, 102]),
                Wire::Command(cmd::RAMWR),
                Wire::Data(pixels),
            ]
        );
    }

    #[test]
    fn test_out_of_bounds_sends_nothing() {
        let mut display = encoder();
        let cases = [
            Rect::new(230, 0, 11, 1),
            Rect::new(0, 240, 1, 1),
            Rect::new(300, 300, 10, 10),
            Rect::new(0, 0, 0, 5),
        ];
        for area in cases {
            let pixels = vec![0u8; area.area() as usize * 2];
            assert!(matches!(
                display.draw_region(area, &pixels),
                Err(Error::OutOfBounds(OutOfBoundsError::Region { .. }))
            ));
        }
        assert!(display.transport().wire.is_empty());
    }

    #[test]
    fn test_pixel_length_mismatch() {
        let mut display = encoder();
        assert_eq!(
            display.draw_region(Rect::new(0, 0, 2, 2), &[0; 6]),
            Err(Error::OutOfBounds(OutOfBoundsError::PixelData {
                expected: 8,
                actual: 6
            }))
        );
        assert!(display.transport().wire.is_empty());
    }

    #[test]
    fn test_large_draw_is_split_into_contiguous_chunks() {
        let panel = PanelConfig {
            chunk_bytes: 1000,
            ..Default::default()
        };
        let mut display = St7789::new(MockTransport::default(), panel);

        // 240x10 region = 4800 bytes; 500 px per burst = 2 rows
        let area = Rect::new(0, 100, 240, 10);
        let pixels: Vec<u8> = (0..4800).map(|i| (i % 251) as u8).collect();
        display.draw_region(area, &pixels).unwrap();

        let wire = &display.transport().wire;
        let bursts: Vec<&Vec<u8>> = wire
            .windows(2)
            .filter_map(|w| match (&w[0], &w[1]) {
                (Wire::Command(cmd::RAMWR), Wire::Data(d)) => Some(d),
                _ => None,
            })
            .collect();
        assert_eq!(bursts.len(), 5);
        assert!(bursts.iter().all(|b| b.len() <= 1000));

        // Concatenated bursts are the original data
        let joined: Vec<u8> = bursts.iter().flat_map(|b| b.iter().copied()).collect();
        assert_eq!(joined, pixels);

        // Row windows advance two rows at a time (offset 80)
        let rows: Vec<Vec<u8>> = window(wire)
            .into_iter()
            .filter(|(c, _)| *c == cmd::RASET)
            .map(|(_, d)| d)
            .collect();
        for (i, row) in rows.iter().enumerate() {
            let start = 180 + 2 * i as u16;
            let end = start + 1;
            let mut expected = Vec::from(start.to_be_bytes());
            expected.extend_from_slice(&end.to_be_bytes());
            assert_eq!(row, &expected);
        }
    }

    #[test]
    fn test_fill_region_color_bytes() {
        let mut display = encoder();
        display
            .fill_region(Rect::new(0, 0, 2, 1), Rgb565::RED)
            .unwrap();
        assert_eq!(
            display.transport().wire.last(),
            Some(&Wire::data(&[0xF8, 0x00, 0xF8, 0x00]))
        );
    }

    #[test]
    fn test_queue_and_flush_budget() {
        let mut display = encoder();
        display
            .queue_fill(Rect::new(0, 0, 10, 10), Rgb565::RED)
            .unwrap();
        display
            .queue_fill(Rect::new(50, 50, 10, 10), Rgb565::BLUE)
            .unwrap();
        display
            .queue_fill(Rect::new(100, 100, 10, 10), Rgb565::GREEN)
            .unwrap();
        assert!(display.transport().wire.is_empty());

        assert_eq!(display.flush_budget(2), Ok(1));
        assert_eq!(display.flush_budget(2), Ok(0));
        assert_eq!(display.pending(), 0);
        assert_eq!(display.transport().data_bytes(), 3 * 10 * 10 * 2 + 3 * 2 * 4);
    }

    #[test]
    fn test_queue_fill_out_of_bounds() {
        let mut display = encoder();
        assert!(display
            .queue_fill(Rect::new(200, 200, 50, 50), Rgb565::RED)
            .is_err());
        assert_eq!(display.pending(), 0);
    }

    #[test]
    fn test_failed_flush_discards_queue() {
        let mut display = encoder();
        display
            .queue_fill(Rect::new(0, 0, 10, 10), Rgb565::RED)
            .unwrap();
        display
            .queue_fill(Rect::new(50, 50, 10, 10), Rgb565::BLUE)
            .unwrap();

        display.transport_mut().failures = 1;
        assert_eq!(
            display.flush(),
            Err(Error::Transport(TransportError::Bus))
        );
        assert_eq!(display.pending(), 0);
    }

    #[test]
    fn test_full_queue_flushes_first() {
        let mut display = encoder();
        for i in 0..=crate::display::FRAME_QUEUE_LEN as u16 {
            display
                .queue_fill(Rect::new(i * 3 % 240, i, 1, 1), Rgb565::WHITE)
                .unwrap();
        }
        assert_eq!(display.pending(), 1);
        assert!(!display.transport().wire.is_empty());
    }

    #[test]
    fn test_rotation_changes_window_offset() {
        let mut display = encoder();
        display.set_rotation(Rotation::Portrait).unwrap();
        assert_eq!(
            display.transport().wire,
            [Wire::Command(cmd::MADCTL), Wire::data(&[0x00])]
        );
        display.transport_mut().wire.clear();

        display.draw_region(Rect::new(0, 0, 1, 1), &[0, 0]).unwrap();
        assert_eq!(
            window(&display.transport().wire)[1],
            (cmd::RASET, Vec::from([0x00, 0x00, 0x00, 0x00]))
        );

        display.set_rotation(Rotation::LandscapeFlipped).unwrap();
        display.transport_mut().wire.clear();
        display.draw_region(Rect::new(0, 0, 1, 1), &[0, 0]).unwrap();
        assert_eq!(
            window(&display.transport().wire)[0],
            (cmd::CASET, Vec::from([0x00, 0x50, 0x00, 0x50]))
        );
    }

    #[test]
    fn test_single_commands() {
        let mut display = encoder();
        display.set_inverted(false).unwrap();
        display.sleep(true).unwrap();
        display.sleep(false).unwrap();
        display.display_on(false).unwrap();
        display.display_on(true).unwrap();
        assert_eq!(
            display.transport().wire,
            [
                Wire::Command(cmd::INVOFF),
                Wire::Command(cmd::SLPIN),
                Wire::Command(cmd::SLPOUT),
                Wire::Command(cmd::DISPOFF),
                Wire::Command(cmd::DISPON),
            ]
        );
    }

    #[test]
    fn test_backlight_clamps_and_skips_bus() {
        let mut display = encoder();
        let mut registry = MockRegistry::default();

        // Unbound: no-op
        assert!(!display.set_backlight(0.8, &mut registry));

        display.set_backlight_ref(Some(ComponentId::new("backlight")));
        assert!(display.set_backlight(-0.5, &mut registry));
        assert!(display.set_backlight(1.5, &mut registry));
        assert_eq!(registry.backlight.levels, [0.0, 1.0]);

        // The backlight never touches the SPI bus
        assert!(display.transport().wire.is_empty());
    }
}
