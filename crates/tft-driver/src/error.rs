//! Configuration errors

use tft_specs::{ChipModel, InterfaceMode};

/// Reason a [`Configuration`](tft_specs::Configuration) was rejected by the
/// factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror_no_std::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// `interface` is [`InterfaceMode::None`]
    #[error("no display interface selected")]
    NoInterface,

    /// SPI selected without MOSI or SCLK
    #[error("SPI interface needs MOSI and SCLK pins")]
    MissingSpiPins,

    /// Parallel bus selected without a WR strobe
    #[error("parallel interface needs a WR pin")]
    MissingWritePin,

    /// Parallel data line `Dn` not wired
    #[error("parallel interface is missing data pin D{0}")]
    MissingDataPin(u8),

    /// Geometry not accepted by the chip
    #[error("{chip} does not support a {width}x{height} panel")]
    UnsupportedResolution {
        /// Selected chip
        chip: ChipModel,
        /// Configured width
        width: u16,
        /// Configured height
        height: u16,
    },

    /// Chip cannot be reached over the selected bus
    #[error("{chip} cannot be driven over {interface:?}")]
    UnsupportedInterface {
        /// Selected chip
        chip: ChipModel,
        /// Selected bus
        interface: InterfaceMode,
    },

    /// Column/row start pushes the panel outside the controller RAM
    #[error("panel offset ({col_start}, {row_start}) exceeds controller RAM")]
    OffsetOutOfRange {
        /// Configured column start
        col_start: u16,
        /// Configured row start
        row_start: u16,
    },

    /// SSD1963 timing has a zero divisor or pulse width
    #[error("invalid SSD1963 panel timing")]
    InvalidPanelTiming,

    /// Requested SPI clock above the chip's limit
    #[error("SPI clock {requested} Hz exceeds the {max} Hz limit")]
    SpiClockTooHigh {
        /// Requested frequency
        requested: u32,
        /// Datasheet maximum
        max: u32,
    },
}
