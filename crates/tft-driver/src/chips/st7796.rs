//! Sitronix ST7796S
//!
//! Vendor registers sit behind the command set control (CSCON) lock.

use tft_specs::Configuration;

use crate::{CommandSequence, Dcs};

const DIC: u8 = 0xB4;
const DFC: u8 = 0xB6;
const PWR2: u8 = 0xC1;
const PWR3: u8 = 0xC2;
const VCMPCTL: u8 = 0xC5;
const PGC: u8 = 0xE0;
const NGC: u8 = 0xE1;
const DOCA: u8 = 0xE8;
const CSCON: u8 = 0xF0;

const GAMMA_POSITIVE: [u8; 14] = [
    0xF0, 0x09, 0x0B, 0x06, 0x04, 0x15, 0x2F, 0x54, 0x42, 0x3C, 0x17, 0x14, 0x18, 0x1B,
];
const GAMMA_NEGATIVE: [u8; 14] = [
    0xE0, 0x09, 0x0B, 0x06, 0x04, 0x03, 0x2B, 0x43, 0x42, 0x3B, 0x16, 0x14, 0x17, 0x1B,
];

pub(super) fn power(seq: &mut CommandSequence) {
    seq.command_with_data(PWR2, &[0x06])
        .command_with_data(PWR3, &[0xA7]);
}

pub(super) fn vcom(seq: &mut CommandSequence) {
    seq.command_with_data(VCMPCTL, &[0x18]).delay(120);
}

pub(super) fn init(config: &Configuration, seq: &mut CommandSequence) {
    seq.command(Dcs::SWRESET)
        .delay(120)
        .command(Dcs::SLPOUT)
        .delay(120)
        // unlock vendor registers
        .command_with_data(CSCON, &[0xC3])
        .command_with_data(CSCON, &[0x96])
        .command_with_data(Dcs::MADCTL, &[0x48]);
    super::color_mode(config, seq);
    seq.command_with_data(DIC, &[0x01])
        .command_with_data(DFC, &[0x80, 0x02, 0x3B])
        .command_with_data(DOCA, &[0x40, 0x8A, 0x00, 0x00, 0x29, 0x19, 0xA5, 0x33]);
    power(seq);
    vcom(seq);
    seq.command_with_data(PGC, &GAMMA_POSITIVE)
        .command_with_data(NGC, &GAMMA_NEGATIVE)
        .delay(120)
        // lock again
        .command_with_data(CSCON, &[0x3C])
        .command_with_data(CSCON, &[0x69])
        .delay(120)
        .command(Dcs::DISPON);
}
