//! Hardware quirks per controller
//!
//! Known behaviours that differ from the plain MIPI DCS model and that a
//! driver has to compensate for. The driver consults these facts through
//! [`ChipModel`] helpers; the host tooling prints them.
//!
//! # Sources
//!
//! - ST7735: tab-color panel batches map the glass at different RAM offsets
//!   (Adafruit ST7735 library notes)
//! - ST7789/ILI9163: panels smaller than the RAM need mirrored offsets on
//!   180° scans
//! - ILI9488: 16 bpp is only accepted on the 16-bit parallel bus
//! - HX8357D: extension commands must be unlocked with SETEXTC
//! - SSD1963: no serial interface, RGB panel timing must be programmed

use crate::ChipModel;

/// Specific hardware quirk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Quirk {
    /// Stored width/height must be exchanged on 90°/270° rotation because
    /// the window offsets are kept per axis.
    SwapsDimensionsOnRotation {
        /// Human-readable detail
        description: &'static str,
    },

    /// Glass is smaller than the controller RAM and sits at an offset.
    PanelOffset {
        /// Human-readable detail
        description: &'static str,
    },

    /// Pixels need 3 bytes on SPI and 8-bit parallel buses.
    WidePixelFormat {
        /// Human-readable detail
        description: &'static str,
    },

    /// Controller needs a long wait after reset release.
    LongResetSettle {
        /// Human-readable detail
        description: &'static str,
    },

    /// Vendor registers are locked behind an extension command.
    ExtensionCommandSet {
        /// Human-readable detail
        description: &'static str,
    },

    /// No serial interface.
    ParallelOnly {
        /// Human-readable detail
        description: &'static str,
    },
}

impl Quirk {
    /// Human-readable description of this quirk.
    pub fn description(&self) -> &'static str {
        match self {
            Quirk::SwapsDimensionsOnRotation { description }
            | Quirk::PanelOffset { description }
            | Quirk::WidePixelFormat { description }
            | Quirk::LongResetSettle { description }
            | Quirk::ExtensionCommandSet { description }
            | Quirk::ParallelOnly { description } => description,
        }
    }

    /// Quirk type name.
    pub fn quirk_type(&self) -> &'static str {
        match self {
            Quirk::SwapsDimensionsOnRotation { .. } => "SwapsDimensionsOnRotation",
            Quirk::PanelOffset { .. } => "PanelOffset",
            Quirk::WidePixelFormat { .. } => "WidePixelFormat",
            Quirk::LongResetSettle { .. } => "LongResetSettle",
            Quirk::ExtensionCommandSet { .. } => "ExtensionCommandSet",
            Quirk::ParallelOnly { .. } => "ParallelOnly",
        }
    }
}

/// Known quirks for a chip.
pub const fn quirks_for_chip(model: ChipModel) -> &'static [Quirk] {
    match model {
        ChipModel::St7735 => ST7735_QUIRKS,
        ChipModel::St7789 => ST7789_QUIRKS,
        ChipModel::St7796 => ST7796_QUIRKS,
        ChipModel::Ili9163 => ILI9163_QUIRKS,
        ChipModel::Ili9488 => ILI9488_QUIRKS,
        ChipModel::Hx8357d => HX8357D_QUIRKS,
        ChipModel::Ssd1963 => SSD1963_QUIRKS,
        ChipModel::Ili9341 => &[],
        ChipModel::Ili9486 => &[],
    }
}

const ST7735_QUIRKS: &[Quirk] = &[
    Quirk::SwapsDimensionsOnRotation {
        description: "ST7735 keeps width/height and offsets in portrait terms; \
                     landscape rotations exchange both pairs.",
    },
    Quirk::PanelOffset {
        description: "ST7735 glass position inside the 132x162 RAM depends on the tab color.",
    },
    Quirk::LongResetSettle {
        description: "ST7735 needs 150 ms after reset before SWRESET is honoured.",
    },
];

const ST7789_QUIRKS: &[Quirk] = &[Quirk::PanelOffset {
    description: "ST7789 panels smaller than 240x320 are centred in RAM; \
                 offsets are mirrored on 180 and 270 degree scans.",
}];

const ST7796_QUIRKS: &[Quirk] = &[Quirk::ExtensionCommandSet {
    description: "ST7796S vendor registers need CSCON 0xC3/0x96 unlock and 0x3C/0x69 lock.",
}];

const ILI9163_QUIRKS: &[Quirk] = &[Quirk::PanelOffset {
    description: "ILI9163 128x128 glass sits in a 128x160 RAM; \
                 rows are offset by 32 on mirrored scans.",
}];

const ILI9488_QUIRKS: &[Quirk] = &[Quirk::WidePixelFormat {
    description: "ILI9488 rejects 16 bpp on SPI; pixels are sent as RGB666 in 3 bytes.",
}];

const HX8357D_QUIRKS: &[Quirk] = &[
    Quirk::ExtensionCommandSet {
        description: "HX8357D needs SETEXTC (0xB9 FF 83 57) before any vendor register.",
    },
    Quirk::LongResetSettle {
        description: "HX8357D needs 200 ms after reset release.",
    },
];

const SSD1963_QUIRKS: &[Quirk] = &[
    Quirk::ParallelOnly {
        description: "SSD1963 has no serial host interface.",
    },
    Quirk::WidePixelFormat {
        description: "SSD1963 takes RGB888 in 3 bytes on the 8-bit bus.",
    },
];

impl ChipModel {
    /// Whether this chip has any known quirks.
    pub fn has_quirks(&self) -> bool {
        !quirks_for_chip(*self).is_empty()
    }

    /// Quirks for this chip.
    pub fn quirks(&self) -> &'static [Quirk] {
        quirks_for_chip(*self)
    }

    /// Whether the driver exchanges stored width/height on landscape rotations.
    pub fn swaps_dimensions_on_rotation(&self) -> bool {
        self.quirks()
            .iter()
            .any(|q| matches!(q, Quirk::SwapsDimensionsOnRotation { .. }))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::indexing_slicing)]
    use super::*;

    #[test]
    fn test_quirk_type() {
        let quirk = Quirk::PanelOffset {
            description: "Test",
        };
        assert_eq!(quirk.quirk_type(), "PanelOffset");
        assert_eq!(quirk.description(), "Test");
    }

    #[test]
    fn test_st7735_quirks() {
        let quirks = quirks_for_chip(ChipModel::St7735);
        assert_eq!(quirks.len(), 3);
        assert!(matches!(
            quirks[0],
            Quirk::SwapsDimensionsOnRotation { .. }
        ));
    }

    #[test]
    fn test_only_st7735_swaps_dimensions() {
        for model in ChipModel::ALL {
            assert_eq!(
                model.swaps_dimensions_on_rotation(),
                model == ChipModel::St7735,
                "{model}"
            );
        }
    }

    #[test]
    fn test_chip_has_quirks() {
        assert!(ChipModel::Ssd1963.has_quirks());
        assert!(ChipModel::Ili9488.has_quirks());
        assert!(!ChipModel::Ili9341.has_quirks());
        assert_eq!(ChipModel::Hx8357d.quirks().len(), 2);
    }
}
