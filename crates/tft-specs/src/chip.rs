//! Chip selector types
//!
//! [`ChipModel`] is the bare chip identity used for lookups. [`DisplayDriver`]
//! is what a [`Configuration`](crate::Configuration) carries: the same closed
//! set of chips, with the options that only make sense for one chip stored on
//! that chip's variant.

/// TFT controller chips supported by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChipModel {
    /// Sitronix ST7735 / ST7735R / ST7735S (128×160 class)
    St7735,
    /// Sitronix ST7789 / ST7789V (240×320 RAM)
    St7789,
    /// Sitronix ST7796S (320×480)
    St7796,
    /// Ilitek ILI9163 / ILI9163C (128×160 RAM, usually 128×128 glass)
    Ili9163,
    /// Ilitek ILI9341 (240×320)
    Ili9341,
    /// Ilitek ILI9486 (320×480)
    Ili9486,
    /// Ilitek ILI9488 (320×480, 18-bit on serial buses)
    Ili9488,
    /// Himax HX8357D (320×480)
    Hx8357d,
    /// Solomon Systech SSD1963 RGB-panel bridge (up to 864×480)
    Ssd1963,
}

impl ChipModel {
    /// Every supported chip, in catalog order.
    pub const ALL: [ChipModel; 9] = [
        ChipModel::St7735,
        ChipModel::St7789,
        ChipModel::St7796,
        ChipModel::Ili9163,
        ChipModel::Ili9341,
        ChipModel::Ili9486,
        ChipModel::Ili9488,
        ChipModel::Hx8357d,
        ChipModel::Ssd1963,
    ];

    /// Datasheet name of the chip, e.g. `"ST7735"`.
    pub const fn name(self) -> &'static str {
        match self {
            ChipModel::St7735 => "ST7735",
            ChipModel::St7789 => "ST7789",
            ChipModel::St7796 => "ST7796S",
            ChipModel::Ili9163 => "ILI9163",
            ChipModel::Ili9341 => "ILI9341",
            ChipModel::Ili9486 => "ILI9486",
            ChipModel::Ili9488 => "ILI9488",
            ChipModel::Hx8357d => "HX8357D",
            ChipModel::Ssd1963 => "SSD1963",
        }
    }

    /// Case-insensitive lookup by datasheet name.
    ///
    /// `"st7796"` is accepted as an alias of `"ST7796S"`.
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("ST7796") {
            return Some(ChipModel::St7796);
        }
        Self::ALL
            .iter()
            .copied()
            .find(|model| model.name().eq_ignore_ascii_case(name))
    }
}

impl core::fmt::Display for ChipModel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// ST7735 panel revision ("tab color" of the protective film).
///
/// Each batch wires the glass to a different part of the 132×162 controller
/// RAM, so the tab decides the resolution and the row/column start offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TabColor {
    /// 1.8" 128×160, offset (2, 1)
    #[default]
    Green,
    /// 1.8" 128×160, no offset
    Red,
    /// 1.8" 128×160, no offset, RGB panel
    Black,
    /// 1.44" 128×128, offset (2, 3)
    Green144,
    /// 0.96" 80×160, offset (26, 1)
    Mini160x80,
}

impl TabColor {
    /// Panel resolution in portrait orientation as `(width, height)`.
    pub const fn resolution(self) -> (u16, u16) {
        match self {
            TabColor::Green | TabColor::Red | TabColor::Black => (128, 160),
            TabColor::Green144 => (128, 128),
            TabColor::Mini160x80 => (80, 160),
        }
    }

    /// Column and row start offsets in portrait orientation.
    pub const fn offsets(self) -> (u16, u16) {
        match self {
            TabColor::Green => (2, 1),
            TabColor::Red | TabColor::Black => (0, 0),
            TabColor::Green144 => (2, 3),
            TabColor::Mini160x80 => (26, 1),
        }
    }

    /// Whether the init sequence presets an offset column/row window.
    ///
    /// Red and black tabs map the glass at RAM origin and use the plain
    /// full-RAM address preset instead.
    pub const fn needs_address_preset(self) -> bool {
        matches!(
            self,
            TabColor::Green | TabColor::Green144 | TabColor::Mini160x80
        )
    }
}

/// SSD1963 RGB panel timing.
///
/// The SSD1963 drives a dumb RGB panel, so the sync timing of the glass has
/// to be programmed during init. Defaults match the common 5" and 7"
/// 800×480 modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelTiming {
    /// PLL multiplier (`M` in SET_PLL_MN)
    pub pll_multiplier: u8,
    /// PLL divider (`N` in SET_PLL_MN)
    pub pll_divider: u8,
    /// 20-bit pixel clock fraction written by SET_LSHIFT_FREQ
    pub pixel_clock: u32,
    /// Horizontal back porch in pixel clocks (includes the pulse)
    pub h_back_porch: u16,
    /// Horizontal front porch in pixel clocks
    pub h_front_porch: u16,
    /// Horizontal sync pulse width
    pub h_pulse: u8,
    /// Vertical back porch in lines (includes the pulse)
    pub v_back_porch: u16,
    /// Vertical front porch in lines
    pub v_front_porch: u16,
    /// Vertical sync pulse width
    pub v_pulse: u8,
}

impl PanelTiming {
    /// Timing for the common 800×480 TFT modules.
    pub const PANEL_800X480: PanelTiming = PanelTiming {
        pll_multiplier: 0x23,
        pll_divider: 0x02,
        pixel_clock: 0x03_FF_FF,
        h_back_porch: 46,
        h_front_porch: 82,
        h_pulse: 48,
        v_back_porch: 16,
        v_front_porch: 29,
        v_pulse: 16,
    };

    /// Whether every divisor and pulse width is non-zero.
    pub const fn is_valid(&self) -> bool {
        self.pll_multiplier != 0
            && self.pll_divider != 0
            && self.pixel_clock != 0
            && self.pixel_clock <= 0x0F_FF_FF
            && self.h_pulse != 0
            && self.v_pulse != 0
    }
}

impl Default for PanelTiming {
    fn default() -> Self {
        Self::PANEL_800X480
    }
}

/// Chip selection for a [`Configuration`](crate::Configuration).
///
/// Options that only one chip understands live on that chip's variant, so
/// an ST7735 tab color can never be attached to an ILI9341.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayDriver {
    /// ST7735 with the panel's tab color
    St7735 {
        /// Panel revision
        tab: TabColor,
    },
    /// ST7789
    St7789,
    /// ST7796S
    St7796,
    /// ILI9163
    Ili9163,
    /// ILI9341
    Ili9341,
    /// ILI9486
    Ili9486,
    /// ILI9488
    Ili9488,
    /// HX8357D
    Hx8357d,
    /// SSD1963 with the timing of the attached RGB panel
    Ssd1963 {
        /// RGB panel timing
        timing: PanelTiming,
    },
}

impl DisplayDriver {
    /// The chip this selection refers to.
    pub const fn model(&self) -> ChipModel {
        match self {
            DisplayDriver::St7735 { .. } => ChipModel::St7735,
            DisplayDriver::St7789 => ChipModel::St7789,
            DisplayDriver::St7796 => ChipModel::St7796,
            DisplayDriver::Ili9163 => ChipModel::Ili9163,
            DisplayDriver::Ili9341 => ChipModel::Ili9341,
            DisplayDriver::Ili9486 => ChipModel::Ili9486,
            DisplayDriver::Ili9488 => ChipModel::Ili9488,
            DisplayDriver::Hx8357d => ChipModel::Hx8357d,
            DisplayDriver::Ssd1963 { .. } => ChipModel::Ssd1963,
        }
    }
}

impl From<ChipModel> for DisplayDriver {
    /// Chip selection with default per-chip options.
    fn from(model: ChipModel) -> Self {
        match model {
            ChipModel::St7735 => DisplayDriver::St7735 {
                tab: TabColor::default(),
            },
            ChipModel::St7789 => DisplayDriver::St7789,
            ChipModel::St7796 => DisplayDriver::St7796,
            ChipModel::Ili9163 => DisplayDriver::Ili9163,
            ChipModel::Ili9341 => DisplayDriver::Ili9341,
            ChipModel::Ili9486 => DisplayDriver::Ili9486,
            ChipModel::Ili9488 => DisplayDriver::Ili9488,
            ChipModel::Hx8357d => DisplayDriver::Hx8357d,
            ChipModel::Ssd1963 => DisplayDriver::Ssd1963 {
                timing: PanelTiming::default(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for model in ChipModel::ALL {
            assert_eq!(ChipModel::from_name(model.name()), Some(model));
        }
        assert_eq!(ChipModel::from_name("hx8357d"), Some(ChipModel::Hx8357d));
        assert_eq!(ChipModel::from_name("st7796"), Some(ChipModel::St7796));
        assert_eq!(ChipModel::from_name("SSD1306"), None);
    }

    #[test]
    fn test_driver_model_matches_selection() {
        for model in ChipModel::ALL {
            assert_eq!(DisplayDriver::from(model).model(), model);
        }
    }

    #[test]
    fn test_tab_resolutions() {
        assert_eq!(TabColor::Green.resolution(), (128, 160));
        assert_eq!(TabColor::Green144.resolution(), (128, 128));
        assert_eq!(TabColor::Mini160x80.resolution(), (80, 160));
        assert_eq!(TabColor::Green.offsets(), (2, 1));
        assert_eq!(TabColor::Red.offsets(), (0, 0));
    }

    #[test]
    fn test_panel_timing_validity() {
        assert!(PanelTiming::default().is_valid());
        let broken = PanelTiming {
            pll_divider: 0,
            ..PanelTiming::default()
        };
        assert!(!broken.is_valid());
        let overflow = PanelTiming {
            pixel_clock: 0x10_00_00,
            ..PanelTiming::default()
        };
        assert!(!overflow.is_valid());
    }
}
