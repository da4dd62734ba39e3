//! Runtime-configured display driver
//!
//! One [`Driver`] type serves every supported chip. Chip differences live in
//! the [`Configuration`], the static [`ChipSpec`] and the command catalogs;
//! the driver itself only tracks boot, sleep and rotation state.
//!
//! # Lifecycle
//!
//! ```text
//! Uninitialized --init()--> Booted/Active <--display_off()/display_on()--> Suspended
//! ```
//!
//! [`Driver::init`] is a no-op once booted. [`Driver::reset`] returns the
//! driver to uninitialized so the next `init()` boots from scratch.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use platform::{BusWidth, DisplayError, DisplayInterface};
use tft_specs::{chip_spec, ChipModel, ChipSpec, Configuration, OffsetMode, PixelFormat, Rotation};

use crate::chips::{sequence, SequenceKind};
use crate::pixel::{encode, rgb666_to_rgb565};
use crate::{CommandExecutor, CommandSequence, Dcs};

/// Pixels expanded per bus transfer on three-byte wire formats.
const EXPAND_CHUNK_PIXELS: usize = 32;

/// SLPOUT needs this long before the next command.
const SLEEP_OUT_MS: u32 = 120;

/// TFT controller driver.
///
/// Generic over:
/// - `DI` - the [`DisplayInterface`] carrying command and data bytes.
/// - `RST` - the reset line; `None` falls back to a software reset.
/// - `DELAY` - a blocking [`DelayNs`] source.
///
/// Build one with [`create_driver`](crate::create_driver), which validates
/// the configuration first.
pub struct Driver<DI, RST, DELAY> {
    interface: DI,
    reset: Option<RST>,
    delay: DELAY,
    config: Configuration,
    spec: &'static ChipSpec,
    rotation: Rotation,
    booted: bool,
    suspended: bool,
    /// Stored (width, height); swapped in place on fixed-offset chips.
    dims: (u16, u16),
    /// Stored (col_start, row_start); swapped together with `dims`.
    starts: (u16, u16),
    swapped: bool,
    /// Offset added to every window for the current rotation.
    offset: (u16, u16),
}

impl<DI, RST, DELAY> Driver<DI, RST, DELAY>
where
    DI: DisplayInterface,
    RST: OutputPin,
    DELAY: DelayNs,
{
    /// Wrap already-validated resources.
    pub(crate) fn new(
        config: Configuration,
        interface: DI,
        reset: Option<RST>,
        delay: DELAY,
    ) -> Self {
        let geometry = &config.geometry;
        Self {
            interface,
            reset,
            delay,
            spec: chip_spec(config.model()),
            rotation: geometry.rotation,
            booted: false,
            suspended: false,
            dims: (geometry.width, geometry.height),
            starts: (geometry.col_start, geometry.row_start),
            swapped: false,
            offset: (0, 0),
            config,
        }
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// Configuration the driver was built from.
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Selected chip.
    pub fn model(&self) -> ChipModel {
        self.config.model()
    }

    /// Chip name, e.g. `"ST7735"`.
    pub fn name(&self) -> &'static str {
        self.spec.name()
    }

    /// Current rotation.
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Whether `init()` has completed.
    pub fn is_booted(&self) -> bool {
        self.booted
    }

    /// Whether the panel is in sleep.
    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    /// Visible (width, height) for the current rotation.
    pub fn size(&self) -> (u16, u16) {
        let (width, height) = self.dims;
        if self.spec.offsets != OffsetMode::Fixed && self.rotation.swaps_axes() {
            (height, width)
        } else {
            (width, height)
        }
    }

    /// Offset added to window coordinates for the current rotation.
    pub fn window_offset(&self) -> (u16, u16) {
        self.offset
    }

    /// Give back the bus, reset pin and delay source.
    pub fn release(self) -> (DI, Option<RST>, DELAY) {
        (self.interface, self.reset, self.delay)
    }

    // -----------------------------------------------------------------------
    // Lifecycle
    // -----------------------------------------------------------------------

    /// Reset and boot the controller, then apply the configured rotation.
    ///
    /// Returns immediately without touching the bus when already booted.
    pub fn init(&mut self) -> Result<(), DisplayError> {
        if self.booted {
            return Ok(());
        }
        info!("{}: init", self.name());
        self.hardware_reset()?;
        self.replay(SequenceKind::Init)?;
        self.set_rotation(self.config.geometry.rotation.bits())?;
        self.booted = true;
        self.suspended = false;
        info!("{}: ready {:?}", self.name(), self.rotation);
        Ok(())
    }

    /// Pulse the reset line, or send SWRESET when none is wired.
    ///
    /// Leaves the driver un-booted.
    pub fn reset(&mut self) -> Result<(), DisplayError> {
        self.booted = false;
        self.hardware_reset()
    }

    fn hardware_reset(&mut self) -> Result<(), DisplayError> {
        let pulse = u32::from(self.spec.reset_pulse_ms);
        let settle = u32::from(self.spec.reset_settle_ms);
        match self.reset.as_mut() {
            Some(rst) => {
                rst.set_high().map_err(|_| DisplayError::Gpio)?;
                rst.set_low().map_err(|_| DisplayError::Gpio)?;
                self.delay.delay_ms(pulse);
                rst.set_high().map_err(|_| DisplayError::Gpio)?;
            }
            None => self.interface.write_command(Dcs::SWRESET)?,
        }
        self.delay.delay_ms(settle);
        Ok(())
    }

    /// Enter sleep. From active this replays the sleep sequence; when
    /// already asleep it only repeats DISPOFF.
    pub fn display_off(&mut self) -> Result<(), DisplayError> {
        if self.suspended {
            return self.write_command(Dcs::DISPOFF);
        }
        self.replay(SequenceKind::Sleep)?;
        self.suspended = true;
        debug!("{}: suspended", self.name());
        Ok(())
    }

    /// Leave sleep. From sleep this replays the wake sequence; when already
    /// active it only repeats DISPON.
    pub fn display_on(&mut self) -> Result<(), DisplayError> {
        if !self.suspended {
            return self.write_command(Dcs::DISPON);
        }
        self.replay(SequenceKind::Wake)?;
        self.suspended = false;
        debug!("{}: active", self.name());
        Ok(())
    }

    /// Turn color inversion on or off.
    pub fn invert_display(&mut self, invert: bool) -> Result<(), DisplayError> {
        let kind = if invert {
            SequenceKind::InvertOn
        } else {
            SequenceKind::InvertOff
        };
        if self.replay(kind)? {
            return Ok(());
        }
        self.write_command(if invert { Dcs::INVON } else { Dcs::INVOFF })
    }

    /// Select one of four orientations by `rotation & 3`.
    ///
    /// Sends exactly one MADCTL command and one data byte.
    pub fn set_rotation(&mut self, rotation: u8) -> Result<(), DisplayError> {
        let rotation = Rotation::from_bits(rotation);
        let pattern = self
            .spec
            .rotation_patterns
            .get(usize::from(rotation.bits()))
            .copied()
            .unwrap_or(0);
        let madctl = pattern | self.config.geometry.madctl.color_order.madctl_bit();
        self.write_command(Dcs::MADCTL)?;
        self.write_data(madctl)?;

        if self.spec.offsets == OffsetMode::Fixed && rotation.swaps_axes() != self.swapped {
            let (width, height) = &mut self.dims;
            core::mem::swap(width, height);
            let (col, row) = &mut self.starts;
            core::mem::swap(col, row);
            self.swapped = !self.swapped;
        }
        self.rotation = rotation;
        self.offset = self.offset_for(rotation);
        trace!("{}: MADCTL {}", self.name(), madctl);
        Ok(())
    }

    fn offset_for(&self, rotation: Rotation) -> (u16, u16) {
        match self.spec.offsets {
            OffsetMode::None => (0, 0),
            OffsetMode::Fixed => self.starts,
            OffsetMode::Mirrored => {
                let (c0, r0) = self.base_offset();
                let (width, height) = self.dims;
                let mc = self.spec.ram_width.saturating_sub(width).saturating_sub(c0);
                let mr = self.spec.ram_height.saturating_sub(height).saturating_sub(r0);
                match rotation {
                    Rotation::Portrait => (c0, r0),
                    Rotation::Landscape => (r0, mc),
                    Rotation::PortraitInverted => (mc, mr),
                    Rotation::LandscapeInverted => (mr, c0),
                }
            }
        }
    }

    /// Portrait offset of the glass; ST7789 panels smaller than the RAM are
    /// centred unless the configuration places them.
    fn base_offset(&self) -> (u16, u16) {
        let (width, height) = self.dims;
        let explicit = self.starts != (0, 0);
        let square = (width, height) == (240, 240);
        if self.model() != ChipModel::St7789 || explicit || square {
            return self.starts;
        }
        (
            self.spec.ram_width.saturating_sub(width).saturating_add(1) / 2,
            self.spec.ram_height.saturating_sub(height) / 2,
        )
    }

    // -----------------------------------------------------------------------
    // Sequence replay
    // -----------------------------------------------------------------------

    /// Replay catalog entry `kind` for this chip.
    ///
    /// Returns `false` when the chip has no such entry and nothing was sent.
    pub fn replay(&mut self, kind: SequenceKind) -> Result<bool, DisplayError> {
        match sequence(&self.config, kind) {
            Some(seq) => {
                self.replay_sequence(kind, &seq)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Replay `seq` if it validates, otherwise the bare commands of `kind`.
    pub(crate) fn replay_sequence(
        &mut self,
        kind: SequenceKind,
        seq: &CommandSequence,
    ) -> Result<(), DisplayError> {
        if seq.validate() {
            trace!("{}: {} ({} entries)", self.name(), kind.name(), seq.len());
            return self.execute_sequence(seq);
        }
        warn!(
            "{}: {} sequence invalid, sending bare commands",
            self.name(),
            kind.name()
        );
        self.bare(kind)
    }

    /// Minimal command set standing in for an unusable catalog entry.
    fn bare(&mut self, kind: SequenceKind) -> Result<(), DisplayError> {
        match kind {
            SequenceKind::Init | SequenceKind::Wake => {
                self.write_command(Dcs::SLPOUT)?;
                self.delay_ms(SLEEP_OUT_MS);
                self.write_command(Dcs::DISPON)
            }
            SequenceKind::Sleep => {
                self.write_command(Dcs::DISPOFF)?;
                self.write_command(Dcs::SLPIN)
            }
            SequenceKind::InvertOn => self.write_command(Dcs::INVON),
            SequenceKind::InvertOff => self.write_command(Dcs::INVOFF),
            SequenceKind::Power | SequenceKind::Vcom | SequenceKind::ColorMode => Ok(()),
        }
    }

    // -----------------------------------------------------------------------
    // Pixel access
    // -----------------------------------------------------------------------

    /// Program the address window (inclusive) and start a memory write.
    pub fn set_window(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> Result<(), DisplayError> {
        self.address_window(x0, y0, x1, y1)?;
        self.write_command(Dcs::RAMWR)
    }

    fn address_window(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> Result<(), DisplayError> {
        let (dx, dy) = self.offset;
        let [x0h, x0l] = x0.saturating_add(dx).to_be_bytes();
        let [x1h, x1l] = x1.saturating_add(dx).to_be_bytes();
        let [y0h, y0l] = y0.saturating_add(dy).to_be_bytes();
        let [y1h, y1l] = y1.saturating_add(dy).to_be_bytes();
        self.interface.write_command(Dcs::CASET)?;
        self.interface.write_data(&[x0h, x0l, x1h, x1l])?;
        self.interface.write_command(Dcs::RASET)?;
        self.interface.write_data(&[y0h, y0l, y1h, y1l])
    }

    /// Stream RGB565 pixels into the current window.
    pub fn write_pixels(&mut self, pixels: &[u16]) -> Result<(), DisplayError> {
        let format = self.wire_format();
        if format == PixelFormat::Rgb565 {
            return self.interface.write_block(pixels);
        }
        let mut buffer = [0u8; EXPAND_CHUNK_PIXELS * 3];
        for chunk in pixels.chunks(EXPAND_CHUNK_PIXELS) {
            let mut len = 0;
            for (slot, pixel) in buffer.chunks_exact_mut(3).zip(chunk) {
                let (bytes, _) = encode(*pixel, format);
                slot.copy_from_slice(&bytes);
                len += 3;
            }
            let bytes = buffer.get(..len).unwrap_or(&[]);
            self.interface.write_data(bytes)?;
        }
        Ok(())
    }

    /// Stream `count` copies of one RGB565 color into the current window.
    pub fn fill_pixels(&mut self, color: u16, count: u32) -> Result<(), DisplayError> {
        let block = [color; EXPAND_CHUNK_PIXELS];
        let mut remaining = usize::try_from(count).unwrap_or(usize::MAX);
        while remaining > 0 {
            let n = remaining.min(EXPAND_CHUNK_PIXELS);
            self.write_pixels(block.get(..n).unwrap_or(&[]))?;
            remaining -= n;
        }
        Ok(())
    }

    /// Read RGB565 pixels back from the window `(x0, y0)..=(x1, y1)`.
    ///
    /// Controllers return one dummy byte, then three top-aligned channel
    /// bytes per pixel. `pixels` must hold exactly the window area.
    /// Fails with [`DisplayError::Unsupported`] when the interface cannot
    /// read, which includes every 16-bit bus.
    pub fn read_pixels(
        &mut self,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
        pixels: &mut [u16],
    ) -> Result<(), DisplayError> {
        if x1 < x0 || y1 < y0 {
            return Err(DisplayError::InvalidCoordinate);
        }
        let area = (usize::from(x1 - x0) + 1) * (usize::from(y1 - y0) + 1);
        if pixels.len() != area {
            return Err(DisplayError::BufferSize);
        }
        if self.interface.bus_width() == BusWidth::Bits16 {
            return Err(DisplayError::Unsupported);
        }
        self.address_window(x0, y0, x1, y1)?;
        self.interface.write_command(Dcs::RAMRD)?;
        let mut dummy = [0u8; 1];
        self.interface.read_data(&mut dummy)?;
        for pixel in pixels.iter_mut() {
            let mut rgb = [0u8; 3];
            self.interface.read_data(&mut rgb)?;
            *pixel = rgb666_to_rgb565(rgb);
        }
        Ok(())
    }

    fn wire_format(&self) -> PixelFormat {
        self.spec.wire_format(self.config.interface)
    }
}

// ---------------------------------------------------------------------------
// CommandExecutor
// ---------------------------------------------------------------------------

impl<DI, RST, DELAY> CommandExecutor for Driver<DI, RST, DELAY>
where
    DI: DisplayInterface,
    RST: OutputPin,
    DELAY: DelayNs,
{
    fn write_command(&mut self, command: u8) -> Result<(), DisplayError> {
        self.interface.write_command(command)
    }

    fn write_data(&mut self, data: u8) -> Result<(), DisplayError> {
        self.interface.write_data(&[data])
    }

    /// RGB565 words are expanded to three bytes on ILI9488 and SSD1963
    /// unless they sit on a 16-bit bus.
    fn write_data16(&mut self, word: u16) -> Result<(), DisplayError> {
        match encode(word, self.wire_format()) {
            (_, 2) => self.interface.write_data16(word),
            (bytes, _) => self.interface.write_data(&bytes),
        }
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    #![allow(clippy::indexing_slicing)]
    use super::*;
    use crate::Command;
    use platform::mocks::{BusEvent, MockBus, MockDelay, MockResetPin};
    use tft_specs::InterfaceMode;

    type TestDriver = Driver<MockBus, MockResetPin, MockDelay>;

    fn driver(config: Configuration) -> (TestDriver, MockBus) {
        let bus = MockBus::new();
        let driver = Driver::new(config, bus.clone(), Some(bus.reset_pin()), bus.delay());
        (driver, bus)
    }

    #[test]
    fn test_invalid_sequence_falls_back_to_bare_commands() {
        let (mut driver, bus) = driver(Configuration::for_chip(ChipModel::Ili9341));
        let mut seq = CommandSequence::new();
        seq.command(0x01);
        for _ in 0..crate::SEQUENCE_CAPACITY {
            seq.data(0x00);
        }
        assert!(!seq.validate());

        driver.replay_sequence(SequenceKind::Sleep, &seq).unwrap();
        assert_eq!(bus.commands(), vec![Dcs::DISPOFF, Dcs::SLPIN]);
    }

    #[test]
    fn test_valid_sequence_is_replayed_verbatim() {
        let (mut driver, bus) = driver(Configuration::for_chip(ChipModel::Ili9341));
        let seq: CommandSequence = [Command::cmd(0x3A), Command::data(0x55), Command::delay(7)]
            .into_iter()
            .collect();

        driver.replay_sequence(SequenceKind::ColorMode, &seq).unwrap();
        assert_eq!(
            bus.events(),
            vec![BusEvent::Command(0x3A), BusEvent::Data(0x55), BusEvent::Delay(7)]
        );
    }

    #[test]
    fn test_reset_without_pin_sends_swreset() {
        let bus = MockBus::new();
        let mut driver: TestDriver = Driver::new(
            Configuration::for_chip(ChipModel::Hx8357d),
            bus.clone(),
            None,
            bus.delay(),
        );
        driver.reset().unwrap();
        assert_eq!(
            bus.events(),
            vec![BusEvent::Command(Dcs::SWRESET), BusEvent::Delay(200)]
        );
    }

    #[test]
    fn test_st7789_small_panel_is_centred() {
        let mut config = Configuration::for_chip(ChipModel::St7789);
        config.geometry.width = 135;
        config.geometry.height = 240;
        let (mut driver, _bus) = driver(config);

        driver.set_rotation(0).unwrap();
        assert_eq!(driver.window_offset(), (53, 40));
        driver.set_rotation(1).unwrap();
        assert_eq!(driver.window_offset(), (40, 52));
        assert_eq!(driver.size(), (240, 135));
        driver.set_rotation(2).unwrap();
        assert_eq!(driver.window_offset(), (52, 40));
        driver.set_rotation(3).unwrap();
        assert_eq!(driver.window_offset(), (40, 53));
    }

    #[test]
    fn test_st7789_square_panel_mirrors_into_ram() {
        let mut config = Configuration::for_chip(ChipModel::St7789);
        config.geometry.width = 240;
        config.geometry.height = 240;
        let (mut driver, _bus) = driver(config);

        driver.set_rotation(0).unwrap();
        assert_eq!(driver.window_offset(), (0, 0));
        driver.set_rotation(2).unwrap();
        assert_eq!(driver.window_offset(), (0, 80));
        driver.set_rotation(3).unwrap();
        assert_eq!(driver.window_offset(), (80, 0));
    }

    #[test]
    fn test_three_byte_pixels_are_batched() {
        let config = Configuration::for_chip(ChipModel::Ili9488).with_interface(InterfaceMode::Spi);
        let (mut driver, bus) = driver(config);

        driver.write_pixels(&[0xF800; 40]).unwrap();
        let data = bus.data_bytes();
        assert_eq!(data.len(), 120);
        assert_eq!(&data[..3], &[0xF8, 0x00, 0x00]);
    }

    #[test]
    fn test_read_pixels_skips_dummy_byte() {
        let config = Configuration::for_chip(ChipModel::Ili9341).with_interface(InterfaceMode::Spi);
        let (mut driver, bus) = driver(config);
        bus.queue_read(&[0xAA, 0xF8, 0x00, 0x00, 0x00, 0xFC, 0x00]);

        let mut pixels = [0u16; 2];
        driver.read_pixels(0, 0, 1, 0, &mut pixels).unwrap();
        assert_eq!(pixels, [0xF800, 0x07E0]);
        assert!(bus.commands().ends_with(&[Dcs::CASET, Dcs::RASET, Dcs::RAMRD]));
    }

    #[test]
    fn test_read_pixels_rejects_mismatched_buffer() {
        let config = Configuration::for_chip(ChipModel::Ili9341).with_interface(InterfaceMode::Spi);
        let (mut driver, bus) = driver(config);

        let mut short = [0u16; 3];
        assert_eq!(
            driver.read_pixels(0, 0, 1, 1, &mut short),
            Err(DisplayError::BufferSize)
        );
        let mut long = [0u16; 5];
        assert_eq!(
            driver.read_pixels(0, 0, 1, 1, &mut long),
            Err(DisplayError::BufferSize)
        );
        assert!(bus.events().is_empty());
    }

    #[test]
    fn test_read_pixels_on_16bit_bus_is_unsupported() {
        let config =
            Configuration::for_chip(ChipModel::Ili9341).with_interface(InterfaceMode::Parallel16);
        let bus = MockBus::with_width(BusWidth::Bits16);
        let mut driver: TestDriver =
            Driver::new(config, bus.clone(), Some(bus.reset_pin()), bus.delay());
        bus.queue_read(&[0xAA, 0xF8, 0x00, 0x00]);

        let mut pixels = [0u16; 1];
        assert_eq!(
            driver.read_pixels(0, 0, 0, 0, &mut pixels),
            Err(DisplayError::Unsupported)
        );
        assert!(bus.events().is_empty());
    }
}
