//! Declarative display configuration
//!
//! A [`Configuration`] describes one physical display attachment: which chip,
//! how the glass maps onto the controller RAM, which bus and pins, and any
//! performance hints. It is plain data; nothing here talks to hardware.

use crate::{chip_spec, ChipModel, DisplayDriver};

/// Panel orientation, selected by the low two bits of a rotation value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rotation {
    /// 0°
    #[default]
    Portrait,
    /// 90°
    Landscape,
    /// 180°
    PortraitInverted,
    /// 270°
    LandscapeInverted,
}

impl Rotation {
    /// Rotation selected by `value & 0x3`.
    pub const fn from_bits(value: u8) -> Self {
        match value & 0x3 {
            0 => Rotation::Portrait,
            1 => Rotation::Landscape,
            2 => Rotation::PortraitInverted,
            _ => Rotation::LandscapeInverted,
        }
    }

    /// Index 0..=3 of this rotation.
    pub const fn bits(self) -> u8 {
        match self {
            Rotation::Portrait => 0,
            Rotation::Landscape => 1,
            Rotation::PortraitInverted => 2,
            Rotation::LandscapeInverted => 3,
        }
    }

    /// Whether rows and columns are exchanged (90° and 270°).
    pub const fn swaps_axes(self) -> bool {
        matches!(self, Rotation::Landscape | Rotation::LandscapeInverted)
    }
}

/// Subpixel order of the glass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorOrder {
    /// Red-green-blue
    Rgb,
    /// Blue-green-red (MADCTL bit 3 set)
    #[default]
    Bgr,
}

impl ColorOrder {
    /// MADCTL bit contributed by this color order.
    pub const fn madctl_bit(self) -> u8 {
        match self {
            ColorOrder::Rgb => 0x00,
            ColorOrder::Bgr => 0x08,
        }
    }
}

/// User-controlled MADCTL flags.
///
/// Scan direction bits come from the rotation; only the color order is
/// configured per panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MadctlConfig {
    /// RGB or BGR subpixel order
    pub color_order: ColorOrder,
}

/// Panel geometry and its placement inside the controller RAM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayGeometry {
    /// Width in pixels for the current rotation
    pub width: u16,
    /// Height in pixels for the current rotation
    pub height: u16,
    /// Initial rotation applied by `init()`
    pub rotation: Rotation,
    /// First controller column used by the glass (portrait)
    pub col_start: u16,
    /// First controller row used by the glass (portrait)
    pub row_start: u16,
    /// MADCTL flags
    pub madctl: MadctlConfig,
}

/// Bus used to reach the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterfaceMode {
    /// Not configured; always rejected by validation
    #[default]
    None,
    /// 4-wire SPI (SCLK, MOSI, DC, optional MISO/CS)
    Spi,
    /// 8080-style 8-bit parallel
    Parallel8,
    /// 8080-style 16-bit parallel
    Parallel16,
}

impl InterfaceMode {
    /// Number of data lines for parallel buses, `None` otherwise.
    pub const fn data_width(self) -> Option<u8> {
        match self {
            InterfaceMode::Parallel8 => Some(8),
            InterfaceMode::Parallel16 => Some(16),
            InterfaceMode::None | InterfaceMode::Spi => None,
        }
    }

    /// Short human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            InterfaceMode::None => "none",
            InterfaceMode::Spi => "SPI",
            InterfaceMode::Parallel8 => "8-bit parallel",
            InterfaceMode::Parallel16 => "16-bit parallel",
        }
    }
}

/// GPIO numbers of every line the attachment may use.
///
/// `None` means the line is not wired. Pin numbers are opaque to the driver;
/// they are checked for presence only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinConfig {
    /// Chip select
    pub cs: Option<u8>,
    /// Data/command select
    pub dc: Option<u8>,
    /// Hardware reset
    pub rst: Option<u8>,
    /// SPI data out
    pub mosi: Option<u8>,
    /// SPI data in (read-back only)
    pub miso: Option<u8>,
    /// SPI clock
    pub sclk: Option<u8>,
    /// Parallel write strobe
    pub wr: Option<u8>,
    /// Parallel read strobe
    pub rd: Option<u8>,
    /// Parallel data lines D0..D15
    pub data: [Option<u8>; 16],
}

impl PinConfig {
    /// Pin wired to data line `index`, if any.
    pub fn data_pin(&self, index: u8) -> Option<u8> {
        self.data.get(usize::from(index)).copied().flatten()
    }
}

/// Performance hints. The driver never depends on their effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PerformanceHints {
    /// Let the interface hand pixel blocks to DMA
    pub use_dma: bool,
    /// Let the interface batch pixel writes
    pub buffered: bool,
    /// Requested SPI clock in Hz; 0 leaves the bus default
    pub spi_frequency_hz: u32,
}

/// Complete description of one display attachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Configuration {
    /// Chip and chip-only options
    pub driver: DisplayDriver,
    /// Panel geometry
    pub geometry: DisplayGeometry,
    /// Bus type
    pub interface: InterfaceMode,
    /// Pin assignment
    pub pins: PinConfig,
    /// Performance hints
    #[cfg_attr(feature = "serde", serde(default))]
    pub performance: PerformanceHints,
}

impl Configuration {
    /// Configuration with the given chip and geometry, no bus and no pins.
    pub fn new(driver: DisplayDriver, geometry: DisplayGeometry) -> Self {
        Self {
            driver,
            geometry,
            interface: InterfaceMode::None,
            pins: PinConfig::default(),
            performance: PerformanceHints::default(),
        }
    }

    /// Configuration pre-populated with the chip's canonical geometry.
    ///
    /// The interface is left as [`InterfaceMode::None`]; callers pick a bus
    /// and pins before handing it to the factory.
    pub fn for_chip(model: ChipModel) -> Self {
        let driver = DisplayDriver::from(model);
        Self::new(driver, chip_spec(model).default_geometry(&driver))
    }

    /// The selected chip.
    pub const fn model(&self) -> ChipModel {
        self.driver.model()
    }

    /// Replace the bus type.
    pub fn with_interface(mut self, interface: InterfaceMode) -> Self {
        self.interface = interface;
        self
    }

    /// Replace the geometry.
    pub fn with_geometry(mut self, geometry: DisplayGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Select SPI and wire MOSI and SCLK.
    pub fn with_spi_pins(mut self, mosi: u8, sclk: u8) -> Self {
        self.interface = InterfaceMode::Spi;
        self.pins.mosi = Some(mosi);
        self.pins.sclk = Some(sclk);
        self
    }

    /// Wire the control lines shared by every bus.
    pub fn with_control_pins(mut self, cs: Option<u8>, dc: u8, rst: Option<u8>) -> Self {
        self.pins.cs = cs;
        self.pins.dc = Some(dc);
        self.pins.rst = rst;
        self
    }

    /// Select a parallel bus as wide as `data` and wire WR plus the data lines.
    ///
    /// Up to 16 data pins are taken; more than 8 selects the 16-bit bus.
    pub fn with_parallel_pins(mut self, wr: u8, data: &[u8]) -> Self {
        self.interface = if data.len() > 8 {
            InterfaceMode::Parallel16
        } else {
            InterfaceMode::Parallel8
        };
        self.pins.wr = Some(wr);
        for (slot, pin) in self.pins.data.iter_mut().zip(data.iter()) {
            *slot = Some(*pin);
        }
        self
    }
}
