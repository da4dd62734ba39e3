//! Ilitek ILI9486

use tft_specs::Configuration;

use crate::{CommandSequence, Dcs};

const PWCTR1: u8 = 0xC0;
const PWCTR2: u8 = 0xC1;
const PWCTR3: u8 = 0xC2;
const VMCTR1: u8 = 0xC5;
const PGAMCTRL: u8 = 0xE0;
const NGAMCTRL: u8 = 0xE1;

const GAMMA_POSITIVE: [u8; 15] = [
    0x0F, 0x1F, 0x1C, 0x0C, 0x0F, 0x08, 0x48, 0x98, 0x37, 0x0A, 0x13, 0x04, 0x11, 0x0D, 0x00,
];
const GAMMA_NEGATIVE: [u8; 15] = [
    0x0F, 0x32, 0x2E, 0x0B, 0x0D, 0x05, 0x47, 0x75, 0x37, 0x06, 0x10, 0x03, 0x24, 0x20, 0x00,
];

pub(super) fn power(seq: &mut CommandSequence) {
    seq.command_with_data(PWCTR1, &[0x0E, 0x0E])
        .command_with_data(PWCTR2, &[0x41, 0x00])
        .command_with_data(PWCTR3, &[0x55]);
}

pub(super) fn vcom(seq: &mut CommandSequence) {
    seq.command_with_data(VMCTR1, &[0x00, 0x00, 0x00, 0x00]);
}

pub(super) fn init(config: &Configuration, seq: &mut CommandSequence) {
    seq.command(Dcs::SLPOUT).delay(120);
    super::color_mode(config, seq);
    power(seq);
    vcom(seq);
    seq.command_with_data(PGAMCTRL, &GAMMA_POSITIVE)
        .command_with_data(NGAMCTRL, &GAMMA_NEGATIVE)
        .command(Dcs::INVOFF)
        .command_with_data(Dcs::MADCTL, &[0x48])
        .command(Dcs::DISPON)
        .delay(150);
}
