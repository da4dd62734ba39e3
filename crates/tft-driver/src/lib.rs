//! Runtime-configurable TFT driver
//!
//! One driver for a family of MIPI-DCS style TFT controllers, selected and
//! shaped at runtime by a [`Configuration`]:
//!
//! - **Command model** - [`Command`] and fixed-capacity [`CommandSequence`]
//! - **Chip catalogs** - init, sleep, wake, power, VCOM and pixel format
//!   sequences for ST7735, ST7789, ST7796S, ILI9163, ILI9341, ILI9486,
//!   ILI9488, HX8357D and SSD1963 ([`sequence`])
//! - **Factory gate** - [`create_driver`] refuses invalid configurations
//! - **Driver** - reset, boot, sleep/wake, rotation, inversion, windows and
//!   pixel streaming over any [`DisplayInterface`]
//!
//! # Example
//!
//! ```
//! use tft_driver::{default_config, validate, ChipModel, ConfigError};
//!
//! let config = default_config(ChipModel::Hx8357d).with_spi_pins(11, 13);
//! assert_eq!(validate(&config), Ok(()));
//!
//! let mut square = config;
//! square.geometry.height = 320;
//! assert!(matches!(
//!     validate(&square),
//!     Err(ConfigError::UnsupportedResolution { .. })
//! ));
//! ```
//!
//! # Features
//!
//! - `graphics` - `embedded_graphics::DrawTarget<Color = Rgb565>` for [`Driver`]
//! - `serde` - serialization of [`Configuration`]
//! - `defmt` / `tracing` - log output on firmware / host builds

#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[macro_use]
mod fmt;

mod chips;
mod command;
mod dcs;
mod driver;
mod error;
mod executor;
mod factory;
#[cfg(feature = "graphics")]
mod graphics;
pub mod pixel;
mod validate;

pub use chips::{sequence, SequenceKind};
pub use command::{Command, CommandKind, CommandSequence, SEQUENCE_CAPACITY};
pub use dcs::Dcs;
pub use driver::Driver;
pub use error::ConfigError;
pub use executor::CommandExecutor;
pub use factory::{create_driver, default_config, driver_name};
pub use validate::{validate, validate_chip, validate_interface};

pub use platform::{DisplayError, DisplayInterface};
pub use tft_specs::{
    chip_spec, ChipModel, Configuration, DisplayDriver, DisplayGeometry, InterfaceMode,
    PanelTiming, Rotation, TabColor,
};
