//! Sitronix ST7789V

use tft_specs::Configuration;

use super::address_preset;
use crate::{CommandSequence, Dcs};

const RAMCTRL: u8 = 0xB0;
const PORCTRL: u8 = 0xB2;
const DFUNCTR: u8 = 0xB6;
const GCTRL: u8 = 0xB7;
const VCOMS: u8 = 0xBB;
const LCMCTRL: u8 = 0xC0;
const VDVVRHEN: u8 = 0xC2;
const VRHS: u8 = 0xC3;
const VDVS: u8 = 0xC4;
const FRCTRL2: u8 = 0xC6;
const PWCTRL1: u8 = 0xD0;
const PVGAMCTRL: u8 = 0xE0;
const NVGAMCTRL: u8 = 0xE1;

const GAMMA_POSITIVE: [u8; 14] = [
    0xD0, 0x00, 0x02, 0x07, 0x0A, 0x28, 0x32, 0x44, 0x42, 0x06, 0x0E, 0x12, 0x14, 0x17,
];
const GAMMA_NEGATIVE: [u8; 14] = [
    0xD0, 0x00, 0x02, 0x07, 0x0A, 0x28, 0x31, 0x54, 0x47, 0x0E, 0x1C, 0x17, 0x1B, 0x1E,
];

pub(super) fn power(seq: &mut CommandSequence) {
    seq.command_with_data(LCMCTRL, &[0x0C])
        .command_with_data(VDVVRHEN, &[0x01, 0xFF])
        .command_with_data(VRHS, &[0x10])
        .command_with_data(VDVS, &[0x20])
        .command_with_data(FRCTRL2, &[0x0F])
        .command_with_data(PWCTRL1, &[0xA4, 0xA1]);
}

pub(super) fn vcom(seq: &mut CommandSequence) {
    seq.command_with_data(VCOMS, &[0x28]);
}

pub(super) fn init(config: &Configuration, seq: &mut CommandSequence) {
    seq.command(Dcs::SLPOUT)
        .delay(120)
        .command(Dcs::NORON)
        .command_with_data(Dcs::MADCTL, &[0x00])
        .command_with_data(DFUNCTR, &[0x0A, 0x82])
        .command_with_data(RAMCTRL, &[0x00, 0xE0]);
    super::color_mode(config, seq);
    seq.delay(10)
        .command_with_data(PORCTRL, &[0x0C, 0x0C, 0x00, 0x33, 0x33])
        .command_with_data(GCTRL, &[0x35]);
    vcom(seq);
    power(seq);
    seq.command_with_data(PVGAMCTRL, &GAMMA_POSITIVE)
        .command_with_data(NVGAMCTRL, &GAMMA_NEGATIVE)
        // IPS glass: inversion on is the normal state
        .command(Dcs::INVON);
    address_preset(seq, (0, 239), (0, 319));
    seq.delay(120).command(Dcs::DISPON).delay(120);
}
