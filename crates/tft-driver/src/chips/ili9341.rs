//! Ilitek ILI9341
//!
//! The undocumented 0xEF/0xCF/0xED/0xE8/0xCB/0xF7/0xEA writes come from the
//! vendor reference init and are required by some panel batches.

use tft_specs::Configuration;

use crate::{CommandSequence, Dcs};

const POWER_A: u8 = 0xCB;
const POWER_B: u8 = 0xCF;
const DRIVER_TIMING_A: u8 = 0xE8;
const DRIVER_TIMING_B: u8 = 0xEA;
const POWER_ON_SEQ: u8 = 0xED;
const PUMP_RATIO: u8 = 0xF7;
const FRMCTR1: u8 = 0xB1;
const DFUNCTR: u8 = 0xB6;
const PWCTR1: u8 = 0xC0;
const PWCTR2: u8 = 0xC1;
const VMCTR1: u8 = 0xC5;
const VMCTR2: u8 = 0xC7;
const GAMMA_3G: u8 = 0xF2;
const GMCTRP1: u8 = 0xE0;
const GMCTRN1: u8 = 0xE1;

const GAMMA_POSITIVE: [u8; 15] = [
    0x0F, 0x31, 0x2B, 0x0C, 0x0E, 0x08, 0x4E, 0xF1, 0x37, 0x07, 0x10, 0x03, 0x0E, 0x09, 0x00,
];
const GAMMA_NEGATIVE: [u8; 15] = [
    0x00, 0x0E, 0x14, 0x03, 0x11, 0x07, 0x31, 0xC1, 0x48, 0x08, 0x0F, 0x0C, 0x31, 0x36, 0x0F,
];

pub(super) fn power(seq: &mut CommandSequence) {
    seq.command_with_data(PWCTR1, &[0x23])
        .command_with_data(PWCTR2, &[0x10]);
}

pub(super) fn vcom(seq: &mut CommandSequence) {
    seq.command_with_data(VMCTR1, &[0x3E, 0x28])
        .command_with_data(VMCTR2, &[0x86]);
}

pub(super) fn init(config: &Configuration, seq: &mut CommandSequence) {
    seq.command(Dcs::SWRESET)
        .delay(150)
        .command_with_data(0xEF, &[0x03, 0x80, 0x02])
        .command_with_data(POWER_B, &[0x00, 0xC1, 0x30])
        .command_with_data(POWER_ON_SEQ, &[0x64, 0x03, 0x12, 0x81])
        .command_with_data(DRIVER_TIMING_A, &[0x85, 0x00, 0x78])
        .command_with_data(POWER_A, &[0x39, 0x2C, 0x00, 0x34, 0x02])
        .command_with_data(PUMP_RATIO, &[0x20])
        .command_with_data(DRIVER_TIMING_B, &[0x00, 0x00]);
    power(seq);
    vcom(seq);
    seq.command_with_data(Dcs::MADCTL, &[0x48])
        .command_with_data(Dcs::VSCRSADD, &[0x00]);
    super::color_mode(config, seq);
    seq.command_with_data(FRMCTR1, &[0x00, 0x18])
        .command_with_data(DFUNCTR, &[0x08, 0x82, 0x27])
        .command_with_data(GAMMA_3G, &[0x00])
        .command_with_data(Dcs::GAMSET, &[0x01])
        .command_with_data(GMCTRP1, &GAMMA_POSITIVE)
        .command_with_data(GMCTRN1, &GAMMA_NEGATIVE)
        .command(Dcs::SLPOUT)
        .delay(150)
        .command(Dcs::DISPON)
        .delay(150);
}
