//! Solomon Systech SSD1963
//!
//! A frame-buffer bridge for dumb RGB panels: the PLL, pixel clock and sync
//! timing of the attached glass are programmed from [`PanelTiming`].

use tft_specs::{Configuration, DisplayDriver, InterfaceMode, PanelTiming};

use crate::{CommandSequence, Dcs};

const SET_LCD_MODE: u8 = 0xB0;
const SET_HORI_PERIOD: u8 = 0xB4;
const SET_VERT_PERIOD: u8 = 0xB6;
const SET_GPIO_CONF: u8 = 0xB8;
const SET_GPIO_VALUE: u8 = 0xBA;
const SET_PWM_CONF: u8 = 0xBE;
const SET_DBC_CONF: u8 = 0xD0;
const SET_PLL: u8 = 0xE0;
const SET_PLL_MN: u8 = 0xE2;
const SET_LSHIFT_FREQ: u8 = 0xE6;
const SET_PIXEL_DATA_INTERFACE: u8 = 0xF0;

/// SET_LCD_MODE byte 0: 24-bit panel, data latched on the falling edge.
const LCD_MODE_24BIT: u8 = 0x20;

fn timing(config: &Configuration) -> PanelTiming {
    match config.driver {
        DisplayDriver::Ssd1963 { timing } => timing,
        _ => PanelTiming::default(),
    }
}

/// Start the PLL and switch the system clock over to it.
pub(super) fn pll(config: &Configuration, seq: &mut CommandSequence) {
    let timing = timing(config);
    seq.command_with_data(SET_PLL_MN, &[timing.pll_multiplier, timing.pll_divider, 0x54])
        .command_with_data(SET_PLL, &[0x01])
        .delay(10)
        .command_with_data(SET_PLL, &[0x03])
        .delay(10);
}

/// Host-side pixel format: 565 on a 16-bit bus, 8-bit triplets otherwise.
pub(super) fn color_mode(interface: InterfaceMode, seq: &mut CommandSequence) {
    let format = if interface == InterfaceMode::Parallel16 {
        0x03
    } else {
        0x00
    };
    seq.command_with_data(SET_PIXEL_DATA_INTERFACE, &[format]);
}

pub(super) fn init(config: &Configuration, seq: &mut CommandSequence) {
    let timing = timing(config);
    let width = config.geometry.width;
    let height = config.geometry.height;

    pll(config, seq);
    seq.command(Dcs::SWRESET).delay(100);

    let [_, clk_hi, clk_mid, clk_lo] = timing.pixel_clock.to_be_bytes();
    seq.command_with_data(SET_LSHIFT_FREQ, &[clk_hi, clk_mid, clk_lo]);

    let [hdp_hi, hdp_lo] = width.saturating_sub(1).to_be_bytes();
    let [vdp_hi, vdp_lo] = height.saturating_sub(1).to_be_bytes();
    seq.command_with_data(
        SET_LCD_MODE,
        &[LCD_MODE_24BIT, 0x00, hdp_hi, hdp_lo, vdp_hi, vdp_lo, 0x00],
    );

    let [ht_hi, ht_lo] = width
        .saturating_add(timing.h_back_porch)
        .saturating_add(timing.h_front_porch)
        .to_be_bytes();
    let [hps_hi, hps_lo] = timing.h_back_porch.to_be_bytes();
    seq.command_with_data(
        SET_HORI_PERIOD,
        &[ht_hi, ht_lo, hps_hi, hps_lo, timing.h_pulse, 0x00, 0x00, 0x00],
    );

    let [vt_hi, vt_lo] = height
        .saturating_add(timing.v_back_porch)
        .saturating_add(timing.v_front_porch)
        .to_be_bytes();
    let [vps_hi, vps_lo] = timing.v_back_porch.to_be_bytes();
    seq.command_with_data(
        SET_VERT_PERIOD,
        &[vt_hi, vt_lo, vps_hi, vps_lo, timing.v_pulse, 0x00, 0x00],
    );

    seq.command_with_data(SET_GPIO_VALUE, &[0x0F])
        .command_with_data(SET_GPIO_CONF, &[0x07, 0x01])
        .command_with_data(Dcs::MADCTL, &[0x00]);
    color_mode(config.interface, seq);
    seq.delay(1)
        .command(Dcs::DISPON)
        // backlight PWM full on, dynamic backlight off
        .command_with_data(SET_PWM_CONF, &[0x06, 0xF0, 0x01, 0xF0, 0x00, 0x00])
        .command_with_data(SET_DBC_CONF, &[0x0D]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Command;
    use tft_specs::ChipModel;

    fn payload(seq: &CommandSequence, command: u8) -> Vec<u8> {
        seq.iter()
            .skip_while(|c| **c != Command::Cmd(command))
            .skip(1)
            .map_while(|c| match c {
                Command::Data(d) => Some(*d),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_800x480_timing_bytes() {
        let config = Configuration::for_chip(ChipModel::Ssd1963);
        let mut seq = CommandSequence::new();
        init(&config, &mut seq);

        assert_eq!(payload(&seq, SET_PLL_MN), vec![0x23, 0x02, 0x54]);
        assert_eq!(payload(&seq, SET_LSHIFT_FREQ), vec![0x03, 0xFF, 0xFF]);
        // 799 x 479
        assert_eq!(
            payload(&seq, SET_LCD_MODE),
            vec![0x20, 0x00, 0x03, 0x1F, 0x01, 0xDF, 0x00]
        );
        // 800 + 46 + 82 = 928 total clocks
        assert_eq!(
            payload(&seq, SET_HORI_PERIOD),
            vec![0x03, 0xA0, 0x00, 0x2E, 0x30, 0x00, 0x00, 0x00]
        );
        // 480 + 16 + 29 = 525 total lines
        assert_eq!(
            payload(&seq, SET_VERT_PERIOD),
            vec![0x02, 0x0D, 0x00, 0x10, 0x10, 0x00, 0x00]
        );
    }

    #[test]
    fn test_pixel_interface_follows_bus() {
        let mut seq = CommandSequence::new();
        color_mode(InterfaceMode::Parallel16, &mut seq);
        assert_eq!(payload(&seq, SET_PIXEL_DATA_INTERFACE), vec![0x03]);
    }
}
