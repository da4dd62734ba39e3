//! Driver factory
//!
//! The only way to obtain a [`Driver`]: the configuration is validated first
//! and a rejected configuration never touches the bus.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use platform::DisplayInterface;
use tft_specs::{chip_spec, ChipModel, Configuration};

use crate::{validate, ConfigError, Driver};

/// Validate `config` and build a driver owning `interface`, `reset` and
/// `delay`.
///
/// The driver is returned un-booted; call [`Driver::init`] next.
///
/// # Errors
///
/// The first [`ConfigError`] found by [`validate`]. The resources are
/// dropped in that case.
pub fn create_driver<DI, RST, DELAY>(
    config: Configuration,
    interface: DI,
    reset: Option<RST>,
    delay: DELAY,
) -> Result<Driver<DI, RST, DELAY>, ConfigError>
where
    DI: DisplayInterface,
    RST: OutputPin,
    DELAY: DelayNs,
{
    let model = config.model();
    if let Err(err) = validate(&config) {
        warn!("{}: configuration rejected: {}", model, err);
        return Err(err);
    }
    info!(
        "{}: {}x{} over {}",
        model,
        config.geometry.width,
        config.geometry.height,
        config.interface.name()
    );
    Ok(Driver::new(config, interface, reset, delay))
}

/// Datasheet name of `model`, e.g. `"ILI9341"`.
pub const fn driver_name(model: ChipModel) -> &'static str {
    chip_spec(model).name()
}

/// Canonical configuration for `model`: native portrait resolution, zero
/// offsets (tab offsets on ST7735), default color order and no bus yet.
pub fn default_config(model: ChipModel) -> Configuration {
    Configuration::for_chip(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::mocks::MockBus;
    use platform::NoPin;
    use tft_specs::InterfaceMode;

    #[test]
    fn test_names() {
        assert_eq!(driver_name(ChipModel::St7735), "ST7735");
        assert_eq!(driver_name(ChipModel::Hx8357d), "HX8357D");
        assert_eq!(driver_name(ChipModel::Ssd1963), "SSD1963");
    }

    #[test]
    fn test_default_config_has_no_bus() {
        for model in ChipModel::ALL {
            let config = default_config(model);
            assert_eq!(config.interface, InterfaceMode::None);
            assert_eq!(config.model(), model);
        }
    }

    #[test]
    fn test_rejection_leaves_bus_untouched() {
        let bus = MockBus::new();
        let result = create_driver(
            default_config(ChipModel::Ili9341),
            bus.clone(),
            None::<NoPin>,
            bus.delay(),
        );
        assert_eq!(result.err(), Some(ConfigError::NoInterface));
        assert!(bus.events().is_empty());
    }
}
