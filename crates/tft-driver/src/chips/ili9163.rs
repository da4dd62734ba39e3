//! Ilitek ILI9163C

use tft_specs::Configuration;

use super::address_preset;
use crate::{CommandSequence, Dcs};

const GAMRSEL: u8 = 0xF2;
const FRMCTR1: u8 = 0xB1;
const DINVCTR: u8 = 0xB4;
const DFUNCTR: u8 = 0xB6;
const PWCTR1: u8 = 0xC0;
const PWCTR2: u8 = 0xC1;
const VCOMCTR1: u8 = 0xC5;
const VCOMOFFS: u8 = 0xC7;
const PGAMMAC: u8 = 0xE0;
const NGAMMAC: u8 = 0xE1;

const GAMMA_POSITIVE: [u8; 15] = [
    0x36, 0x29, 0x12, 0x22, 0x1C, 0x15, 0x42, 0xB7, 0x2F, 0x13, 0x12, 0x0A, 0x11, 0x0B, 0x06,
];
const GAMMA_NEGATIVE: [u8; 15] = [
    0x09, 0x16, 0x2D, 0x0D, 0x13, 0x15, 0x40, 0x48, 0x53, 0x0C, 0x1D, 0x25, 0x2E, 0x34, 0x39,
];

pub(super) fn power(seq: &mut CommandSequence) {
    seq.command_with_data(PWCTR1, &[0x0A, 0x02])
        .command_with_data(PWCTR2, &[0x02]);
}

pub(super) fn vcom(seq: &mut CommandSequence) {
    seq.command_with_data(VCOMCTR1, &[0x50, 0x5B])
        .command_with_data(VCOMOFFS, &[0x40]);
}

pub(super) fn init(config: &Configuration, seq: &mut CommandSequence) {
    seq.command(Dcs::SWRESET)
        .delay(120)
        .command(Dcs::SLPOUT)
        .delay(5);
    super::color_mode(config, seq);
    seq.command_with_data(Dcs::GAMSET, &[0x04])
        .command_with_data(GAMRSEL, &[0x01])
        .command(Dcs::NORON)
        .command_with_data(DFUNCTR, &[0xFF, 0x06])
        .command_with_data(PGAMMAC, &GAMMA_POSITIVE)
        .command_with_data(NGAMMAC, &GAMMA_NEGATIVE)
        .command_with_data(FRMCTR1, &[0x08, 0x02])
        .command_with_data(DINVCTR, &[0x07]);
    power(seq);
    vcom(seq);
    address_preset(seq, (0, 127), (0, 159));
    seq.command_with_data(Dcs::MADCTL, &[0xC8])
        .command(Dcs::DISPON)
        .delay(20);
}
