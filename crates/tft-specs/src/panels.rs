//! Common breakout board presets
//!
//! Pre-configured geometry for widely sold TFT modules. Pins are board
//! specific and left unwired; callers add them before validation.

use crate::{
    ColorOrder, Configuration, DisplayDriver, DisplayGeometry, InterfaceMode, MadctlConfig,
    PanelTiming, Rotation, TabColor,
};

/// A known TFT module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Panel {
    /// Marketing name
    pub name: &'static str,
    /// Chip and chip options
    pub driver: DisplayDriver,
    /// Glass geometry
    pub geometry: DisplayGeometry,
    /// Bus the module exposes
    pub interface: InterfaceMode,
}

impl Panel {
    /// Configuration for this module with no pins wired.
    pub fn configuration(&self) -> Configuration {
        Configuration::new(self.driver, self.geometry).with_interface(self.interface)
    }
}

const fn portrait(
    width: u16,
    height: u16,
    col_start: u16,
    row_start: u16,
    color_order: ColorOrder,
) -> DisplayGeometry {
    DisplayGeometry {
        width,
        height,
        rotation: Rotation::Portrait,
        col_start,
        row_start,
        madctl: MadctlConfig { color_order },
    }
}

/// Adafruit 1.8" 128×160 (ST7735R, green tab)
pub const ADAFRUIT_1_8_TFT: Panel = Panel {
    name: "Adafruit 1.8\" TFT",
    driver: DisplayDriver::St7735 {
        tab: TabColor::Green,
    },
    geometry: portrait(128, 160, 2, 1, ColorOrder::Bgr),
    interface: InterfaceMode::Spi,
};

/// 0.96" 80×160 IPS (ST7735S, mini tab)
pub const MINI_0_96_IPS: Panel = Panel {
    name: "0.96\" 80x160 IPS",
    driver: DisplayDriver::St7735 {
        tab: TabColor::Mini160x80,
    },
    geometry: portrait(80, 160, 26, 1, ColorOrder::Bgr),
    interface: InterfaceMode::Spi,
};

/// 1.3" 240×240 IPS (ST7789)
///
/// Offsets are derived by the driver from the 240×320 RAM.
pub const ST7789_1_3_IPS: Panel = Panel {
    name: "1.3\" 240x240 IPS",
    driver: DisplayDriver::St7789,
    geometry: portrait(240, 240, 0, 0, ColorOrder::Rgb),
    interface: InterfaceMode::Spi,
};

/// Adafruit 2.8" 240×320 (ILI9341)
pub const ADAFRUIT_2_8_TFT: Panel = Panel {
    name: "Adafruit 2.8\" TFT",
    driver: DisplayDriver::Ili9341,
    geometry: portrait(240, 320, 0, 0, ColorOrder::Bgr),
    interface: InterfaceMode::Spi,
};

/// Adafruit 3.5" 320×480 (HX8357D)
pub const ADAFRUIT_3_5_TFT: Panel = Panel {
    name: "Adafruit 3.5\" TFT",
    driver: DisplayDriver::Hx8357d,
    geometry: portrait(320, 480, 0, 0, ColorOrder::Rgb),
    interface: InterfaceMode::Spi,
};

/// 3.5" 320×480 SPI module (ILI9488)
pub const ILI9488_3_5_SPI: Panel = Panel {
    name: "3.5\" ILI9488 SPI",
    driver: DisplayDriver::Ili9488,
    geometry: portrait(320, 480, 0, 0, ColorOrder::Bgr),
    interface: InterfaceMode::Spi,
};

/// 7" 800×480 RGB panel behind an SSD1963 on a 16-bit bus
pub const SSD1963_7_0: Panel = Panel {
    name: "7\" SSD1963 800x480",
    driver: DisplayDriver::Ssd1963 {
        timing: PanelTiming::PANEL_800X480,
    },
    geometry: portrait(800, 480, 0, 0, ColorOrder::Rgb),
    interface: InterfaceMode::Parallel16,
};

/// Every preset.
pub const ALL: &[Panel] = &[
    ADAFRUIT_1_8_TFT,
    MINI_0_96_IPS,
    ST7789_1_3_IPS,
    ADAFRUIT_2_8_TFT,
    ADAFRUIT_3_5_TFT,
    ILI9488_3_5_SPI,
    SSD1963_7_0,
];
