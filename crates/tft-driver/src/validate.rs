//! Configuration validation
//!
//! [`validate`] runs the bus check shared by every chip and then the
//! predicate of the selected chip. The factory refuses to build a driver
//! unless both pass.

use tft_specs::{
    chip_spec, ChipModel, Configuration, DisplayDriver, InterfaceMode, OffsetMode, TabColor,
};

use crate::ConfigError;

/// Check `config` completely.
pub fn validate(config: &Configuration) -> Result<(), ConfigError> {
    validate_interface(config)?;
    validate_chip(config)
}

/// Bus and pin presence check shared by every chip.
pub fn validate_interface(config: &Configuration) -> Result<(), ConfigError> {
    let pins = &config.pins;
    match config.interface {
        InterfaceMode::None => Err(ConfigError::NoInterface),
        InterfaceMode::Spi => {
            if pins.mosi.is_none() || pins.sclk.is_none() {
                return Err(ConfigError::MissingSpiPins);
            }
            Ok(())
        }
        InterfaceMode::Parallel8 | InterfaceMode::Parallel16 => {
            if pins.wr.is_none() {
                return Err(ConfigError::MissingWritePin);
            }
            let width = config.interface.data_width().unwrap_or(8);
            match (0..width).find(|line| pins.data_pin(*line).is_none()) {
                Some(line) => Err(ConfigError::MissingDataPin(line)),
                None => Ok(()),
            }
        }
    }
}

/// Chip-specific predicate.
pub fn validate_chip(config: &Configuration) -> Result<(), ConfigError> {
    let model = config.model();
    let spec = chip_spec(model);

    if !spec.buses.supports(config.interface) {
        return Err(ConfigError::UnsupportedInterface {
            chip: model,
            interface: config.interface,
        });
    }

    let (width, height) = (config.geometry.width, config.geometry.height);
    if !resolution_supported(&config.driver, width, height) {
        return Err(ConfigError::UnsupportedResolution {
            chip: model,
            width,
            height,
        });
    }

    if let DisplayDriver::Ssd1963 { timing } = &config.driver {
        if !timing.is_valid() {
            return Err(ConfigError::InvalidPanelTiming);
        }
    }

    if spec.offsets != OffsetMode::None {
        let (col, row) = (config.geometry.col_start, config.geometry.row_start);
        let fits = u32::from(col) + u32::from(width) <= u32::from(spec.ram_width)
            && u32::from(row) + u32::from(height) <= u32::from(spec.ram_height);
        if !fits {
            return Err(ConfigError::OffsetOutOfRange {
                col_start: col,
                row_start: row,
            });
        }
    }

    let requested = config.performance.spi_frequency_hz;
    if config.interface == InterfaceMode::Spi && requested != 0 && requested > spec.max_spi_hz {
        return Err(ConfigError::SpiClockTooHigh {
            requested,
            max: spec.max_spi_hz,
        });
    }

    Ok(())
}

/// Panel sizes each chip accepts.
fn resolution_supported(driver: &DisplayDriver, width: u16, height: u16) -> bool {
    if width == 0 || height == 0 {
        return false;
    }
    match driver {
        DisplayDriver::St7735 { tab } => tab_resolution_matches(*tab, width, height),
        DisplayDriver::St7789 => width <= 240 && height <= 320,
        DisplayDriver::Ili9163 => width <= 128 && height <= 160,
        DisplayDriver::Ili9341 => (width, height) == (240, 320),
        DisplayDriver::Ili9486 | DisplayDriver::Ili9488 | DisplayDriver::St7796 => {
            (width, height) == (320, 480)
        }
        DisplayDriver::Hx8357d => matches!((width, height), (320, 480) | (480, 320)),
        DisplayDriver::Ssd1963 { .. } => {
            let spec = chip_spec(ChipModel::Ssd1963);
            width <= spec.ram_width && height <= spec.ram_height
        }
    }
}

fn tab_resolution_matches(tab: TabColor, width: u16, height: u16) -> bool {
    tab.resolution() == (width, height)
}
