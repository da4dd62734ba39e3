//! Himax HX8357D
//!
//! Everything past SWRESET needs the SETEXTC unlock (0xB9 FF 83 57).

use tft_specs::Configuration;

use crate::{CommandSequence, Dcs};

const SETOSC: u8 = 0xB0;
const SETPWR1: u8 = 0xB1;
const SETRGB: u8 = 0xB3;
const SETCYC: u8 = 0xB4;
const SETCOM: u8 = 0xB6;
const SETEXTC: u8 = 0xB9;
const SETSTBA: u8 = 0xC0;
const SETPANEL: u8 = 0xCC;
const SETGAMMA: u8 = 0xE0;

const GAMMA: [u8; 34] = [
    0x02, 0x0A, 0x11, 0x1D, 0x23, 0x35, 0x41, 0x4B, 0x4B, 0x42, 0x3A, 0x27, 0x1B, 0x08, 0x09, 0x03,
    0x02, 0x0A, 0x11, 0x1D, 0x23, 0x35, 0x41, 0x4B, 0x4B, 0x42, 0x3A, 0x27, 0x1B, 0x08, 0x09, 0x03,
    0x00, 0x01,
];

pub(super) fn power(seq: &mut CommandSequence) {
    seq.command_with_data(SETPWR1, &[0x00, 0x15, 0x1C, 0x1C, 0x83, 0xAA])
        .command_with_data(SETSTBA, &[0x50, 0x50, 0x01, 0x3C, 0x1E, 0x08]);
}

/// VCOM -1.52 V
pub(super) fn vcom(seq: &mut CommandSequence) {
    seq.command_with_data(SETCOM, &[0x25]);
}

pub(super) fn init(config: &Configuration, seq: &mut CommandSequence) {
    seq.command(Dcs::SWRESET)
        .delay(10)
        .command_with_data(SETEXTC, &[0xFF, 0x83, 0x57])
        .delay(300)
        .command_with_data(SETRGB, &[0x80, 0x00, 0x06, 0x06]);
    vcom(seq);
    seq.command_with_data(SETOSC, &[0x68])
        .command_with_data(SETPANEL, &[0x05]);
    power(seq);
    seq.command_with_data(SETCYC, &[0x02, 0x40, 0x00, 0x2A, 0x2A, 0x0D, 0x78])
        .command_with_data(SETGAMMA, &GAMMA);
    super::color_mode(config, seq);
    seq.command_with_data(Dcs::MADCTL, &[0xC0])
        .command_with_data(Dcs::TEON, &[0x00])
        .command_with_data(Dcs::TESCAN, &[0x00, 0x02])
        .command(Dcs::SLPOUT)
        .delay(150)
        .command(Dcs::DISPON)
        .delay(50);
}
