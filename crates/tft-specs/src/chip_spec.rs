//! Per-chip facts
//!
//! One [`ChipSpec`] per [`ChipModel`]: canonical resolution, controller RAM
//! area, reset timing, supported buses and the pixel format on the wire.

use crate::{
    ChipModel, ColorOrder, DisplayDriver, DisplayGeometry, InterfaceMode, MadctlConfig, Rotation,
};

/// How a panel smaller than the controller RAM is located for each rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OffsetMode {
    /// Glass covers the whole RAM; offsets are ignored
    None,
    /// Portrait offsets are exchanged on 90°/270° and kept on 180°
    Fixed,
    /// Offsets are measured from the opposite RAM edge on mirrored scans
    Mirrored,
}

/// Pixel encoding on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PixelFormat {
    /// 16 bits per pixel, two bytes
    Rgb565,
    /// 18 bits per pixel, three bytes with the low two bits unused
    Rgb666,
    /// 24 bits per pixel, three bytes
    Rgb888,
}

impl PixelFormat {
    /// Bytes sent per pixel.
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Rgb565 => 2,
            PixelFormat::Rgb666 | PixelFormat::Rgb888 => 3,
        }
    }
}

/// Buses a chip can be attached through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusSupport {
    /// 4-wire SPI
    pub spi: bool,
    /// 8-bit parallel
    pub parallel8: bool,
    /// 16-bit parallel
    pub parallel16: bool,
}

impl BusSupport {
    const ALL: BusSupport = BusSupport {
        spi: true,
        parallel8: true,
        parallel16: true,
    };

    const PARALLEL_ONLY: BusSupport = BusSupport {
        spi: false,
        parallel8: true,
        parallel16: true,
    };

    /// Whether `mode` is supported. [`InterfaceMode::None`] never is.
    pub const fn supports(&self, mode: InterfaceMode) -> bool {
        match mode {
            InterfaceMode::None => false,
            InterfaceMode::Spi => self.spi,
            InterfaceMode::Parallel8 => self.parallel8,
            InterfaceMode::Parallel16 => self.parallel16,
        }
    }
}

/// Facts about one controller chip.
#[derive(Debug, Clone)]
pub struct ChipSpec {
    /// Chip identity
    pub model: ChipModel,
    /// Canonical panel width in portrait
    pub default_width: u16,
    /// Canonical panel height in portrait
    pub default_height: u16,
    /// Controller RAM columns used for offset math
    pub ram_width: u16,
    /// Controller RAM rows used for offset math
    pub ram_height: u16,
    /// RST low time in milliseconds
    pub reset_pulse_ms: u16,
    /// Wait after RST release before the first command, in milliseconds
    pub reset_settle_ms: u16,
    /// Highest SPI write clock the datasheet allows, in Hz
    pub max_spi_hz: u32,
    /// Subpixel order of typical glass
    pub default_color_order: ColorOrder,
    /// Offset behaviour
    pub offsets: OffsetMode,
    /// Buses the chip can be attached through
    pub buses: BusSupport,
    /// MADCTL scan bits for rotations 0..=3, color order excluded
    pub rotation_patterns: [u8; 4],
}

impl ChipSpec {
    /// Datasheet name.
    pub const fn name(&self) -> &'static str {
        self.model.name()
    }

    /// Canonical geometry for `driver`, portrait, no rotation.
    ///
    /// ST7735 geometry follows the configured tab color.
    pub fn default_geometry(&self, driver: &DisplayDriver) -> DisplayGeometry {
        let ((width, height), (col_start, row_start)) = match driver {
            DisplayDriver::St7735 { tab } => (tab.resolution(), tab.offsets()),
            _ => ((self.default_width, self.default_height), (0, 0)),
        };
        let color_order = match driver {
            DisplayDriver::St7735 {
                tab: crate::TabColor::Black,
            } => ColorOrder::Rgb,
            _ => self.default_color_order,
        };
        DisplayGeometry {
            width,
            height,
            rotation: Rotation::Portrait,
            col_start,
            row_start,
            madctl: MadctlConfig { color_order },
        }
    }

    /// Pixel encoding on the wire for the given bus.
    ///
    /// ILI9488 and SSD1963 only take 16-bit pixels over a 16-bit parallel
    /// bus; on SPI and 8-bit buses they need three bytes per pixel.
    pub const fn wire_format(&self, interface: InterfaceMode) -> PixelFormat {
        match (self.model, interface) {
            (_, InterfaceMode::Parallel16) => PixelFormat::Rgb565,
            (ChipModel::Ili9488, _) => PixelFormat::Rgb666,
            (ChipModel::Ssd1963, _) => PixelFormat::Rgb888,
            _ => PixelFormat::Rgb565,
        }
    }
}

/// MY | MX: portrait with mirrored scan, used by the ST77xx family.
const ST77XX_ROTATIONS: [u8; 4] = [0xC0, 0xA0, 0x00, 0x60];

/// MX, MV, MY, MX|MY|MV: the Ilitek 9341/948x pattern.
const ILITEK_ROTATIONS: [u8; 4] = [0x40, 0x20, 0x80, 0xE0];

const ST7735: ChipSpec = ChipSpec {
    model: ChipModel::St7735,
    default_width: 128,
    default_height: 160,
    ram_width: 132,
    ram_height: 162,
    reset_pulse_ms: 10,
    reset_settle_ms: 150,
    max_spi_hz: 15_000_000,
    default_color_order: ColorOrder::Bgr,
    offsets: OffsetMode::Fixed,
    buses: BusSupport::ALL,
    rotation_patterns: ST77XX_ROTATIONS,
};

const ST7789: ChipSpec = ChipSpec {
    model: ChipModel::St7789,
    default_width: 240,
    default_height: 320,
    ram_width: 240,
    ram_height: 320,
    reset_pulse_ms: 10,
    reset_settle_ms: 120,
    max_spi_hz: 62_500_000,
    default_color_order: ColorOrder::Rgb,
    offsets: OffsetMode::Mirrored,
    buses: BusSupport::ALL,
    rotation_patterns: [0x00, 0x60, 0xC0, 0xA0],
};

const ST7796: ChipSpec = ChipSpec {
    model: ChipModel::St7796,
    default_width: 320,
    default_height: 480,
    ram_width: 320,
    ram_height: 480,
    reset_pulse_ms: 10,
    reset_settle_ms: 120,
    max_spi_hz: 40_000_000,
    default_color_order: ColorOrder::Bgr,
    offsets: OffsetMode::None,
    buses: BusSupport::ALL,
    rotation_patterns: ILITEK_ROTATIONS,
};

const ILI9163: ChipSpec = ChipSpec {
    model: ChipModel::Ili9163,
    default_width: 128,
    default_height: 128,
    ram_width: 128,
    ram_height: 160,
    reset_pulse_ms: 10,
    reset_settle_ms: 120,
    max_spi_hz: 20_000_000,
    default_color_order: ColorOrder::Bgr,
    offsets: OffsetMode::Mirrored,
    buses: BusSupport::ALL,
    rotation_patterns: ST77XX_ROTATIONS,
};

const ILI9341: ChipSpec = ChipSpec {
    model: ChipModel::Ili9341,
    default_width: 240,
    default_height: 320,
    ram_width: 240,
    ram_height: 320,
    reset_pulse_ms: 10,
    reset_settle_ms: 150,
    max_spi_hz: 40_000_000,
    default_color_order: ColorOrder::Bgr,
    offsets: OffsetMode::None,
    buses: BusSupport::ALL,
    rotation_patterns: ILITEK_ROTATIONS,
};

const ILI9486: ChipSpec = ChipSpec {
    model: ChipModel::Ili9486,
    default_width: 320,
    default_height: 480,
    ram_width: 320,
    ram_height: 480,
    reset_pulse_ms: 10,
    reset_settle_ms: 120,
    max_spi_hz: 20_000_000,
    default_color_order: ColorOrder::Bgr,
    offsets: OffsetMode::None,
    buses: BusSupport::ALL,
    rotation_patterns: ILITEK_ROTATIONS,
};

const ILI9488: ChipSpec = ChipSpec {
    model: ChipModel::Ili9488,
    default_width: 320,
    default_height: 480,
    ram_width: 320,
    ram_height: 480,
    reset_pulse_ms: 10,
    reset_settle_ms: 120,
    max_spi_hz: 40_000_000,
    default_color_order: ColorOrder::Bgr,
    offsets: OffsetMode::None,
    buses: BusSupport::ALL,
    rotation_patterns: ILITEK_ROTATIONS,
};

const HX8357D: ChipSpec = ChipSpec {
    model: ChipModel::Hx8357d,
    default_width: 320,
    default_height: 480,
    ram_width: 320,
    ram_height: 480,
    reset_pulse_ms: 10,
    reset_settle_ms: 200,
    max_spi_hz: 24_000_000,
    default_color_order: ColorOrder::Rgb,
    offsets: OffsetMode::None,
    buses: BusSupport::ALL,
    rotation_patterns: ST77XX_ROTATIONS,
};

const SSD1963: ChipSpec = ChipSpec {
    model: ChipModel::Ssd1963,
    default_width: 800,
    default_height: 480,
    ram_width: 864,
    ram_height: 480,
    reset_pulse_ms: 10,
    reset_settle_ms: 100,
    max_spi_hz: 0,
    default_color_order: ColorOrder::Rgb,
    offsets: OffsetMode::None,
    buses: BusSupport::PARALLEL_ONLY,
    rotation_patterns: [0x00, 0x60, 0xC0, 0xA0],
};

/// Facts for `model`.
pub const fn chip_spec(model: ChipModel) -> &'static ChipSpec {
    match model {
        ChipModel::St7735 => &ST7735,
        ChipModel::St7789 => &ST7789,
        ChipModel::St7796 => &ST7796,
        ChipModel::Ili9163 => &ILI9163,
        ChipModel::Ili9341 => &ILI9341,
        ChipModel::Ili9486 => &ILI9486,
        ChipModel::Ili9488 => &ILI9488,
        ChipModel::Hx8357d => &HX8357D,
        ChipModel::Ssd1963 => &SSD1963,
    }
}
