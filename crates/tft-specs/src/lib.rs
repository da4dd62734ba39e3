//! TFT Controller Specifications
//!
//! Declarative description of a TFT display attachment and the per-chip
//! facts a driver needs to talk to it: canonical resolution, controller RAM
//! area, reset timing, supported buses, wire pixel format and known quirks.
//!
//! # Features
//!
//! - **no_std compatible** - Works on embedded systems
//! - **Chip table** - Facts for ST7735, ST7789, ST7796S, ILI9163, ILI9341,
//!   ILI9486, ILI9488, HX8357D and SSD1963
//! - **Panel presets** - Ready-made configurations for common breakout boards
//! - **Serde support** - Optional serialization/deserialization for JSON configs
//!
//! # Example
//!
//! ```
//! use tft_specs::{chip_spec, ChipModel, Configuration, InterfaceMode};
//!
//! let spec = chip_spec(ChipModel::Ili9341);
//! assert_eq!((spec.default_width, spec.default_height), (240, 320));
//!
//! let config = Configuration::for_chip(ChipModel::Ili9341)
//!     .with_interface(InterfaceMode::Spi)
//!     .with_spi_pins(11, 13);
//! assert_eq!(config.geometry.width, 240);
//! ```
//!
//! # Custom configurations
//!
//! ```
//! use tft_specs::{
//!     ColorOrder, Configuration, DisplayDriver, DisplayGeometry, MadctlConfig, Rotation,
//!     TabColor,
//! };
//!
//! let config = Configuration::new(
//!     DisplayDriver::St7735 { tab: TabColor::Mini160x80 },
//!     DisplayGeometry {
//!         width: 80,
//!         height: 160,
//!         rotation: Rotation::Landscape,
//!         col_start: 26,
//!         row_start: 1,
//!         madctl: MadctlConfig { color_order: ColorOrder::Bgr },
//!     },
//! );
//! assert_eq!(config.driver.model().name(), "ST7735");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

mod chip;
pub mod chip_quirks;
mod chip_spec;
mod config;
pub mod panels;

pub use chip::{ChipModel, DisplayDriver, PanelTiming, TabColor};
pub use chip_quirks::{quirks_for_chip, Quirk};
pub use chip_spec::{chip_spec, BusSupport, ChipSpec, OffsetMode, PixelFormat};
pub use config::{
    ColorOrder, Configuration, DisplayGeometry, InterfaceMode, MadctlConfig, PerformanceHints,
    PinConfig, Rotation,
};
