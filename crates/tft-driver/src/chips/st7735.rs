//! Sitronix ST7735R/S
//!
//! Register values follow the Adafruit "Rcmd" tables. The panel batch (tab
//! color) decides the address preset and the MADCTL written during init.

use tft_specs::{Configuration, DisplayDriver, TabColor};

use super::address_preset;
use crate::{CommandSequence, Dcs};

const FRMCTR1: u8 = 0xB1;
const FRMCTR2: u8 = 0xB2;
const FRMCTR3: u8 = 0xB3;
const INVCTR: u8 = 0xB4;
const PWCTR1: u8 = 0xC0;
const PWCTR2: u8 = 0xC1;
const PWCTR3: u8 = 0xC2;
const PWCTR4: u8 = 0xC3;
const PWCTR5: u8 = 0xC4;
const VMCTR1: u8 = 0xC5;
const GMCTRP1: u8 = 0xE0;
const GMCTRN1: u8 = 0xE1;

const GAMMA_POSITIVE: [u8; 16] = [
    0x02, 0x1C, 0x07, 0x12, 0x37, 0x32, 0x29, 0x2D, 0x29, 0x25, 0x2B, 0x39, 0x00, 0x01, 0x03, 0x10,
];
const GAMMA_NEGATIVE: [u8; 16] = [
    0x03, 0x1D, 0x07, 0x06, 0x2E, 0x2C, 0x29, 0x2D, 0x2E, 0x2E, 0x37, 0x3F, 0x00, 0x00, 0x02, 0x10,
];

pub(super) fn power(seq: &mut CommandSequence) {
    seq.command_with_data(PWCTR1, &[0xA2, 0x02, 0x84])
        .command_with_data(PWCTR2, &[0xC5])
        .command_with_data(PWCTR3, &[0x0A, 0x00])
        .command_with_data(PWCTR4, &[0x8A, 0x2A])
        .command_with_data(PWCTR5, &[0x8A, 0xEE]);
}

pub(super) fn vcom(seq: &mut CommandSequence) {
    seq.command_with_data(VMCTR1, &[0x0E]);
}

fn tab(config: &Configuration) -> TabColor {
    match config.driver {
        DisplayDriver::St7735 { tab } => tab,
        _ => TabColor::default(),
    }
}

pub(super) fn init(config: &Configuration, seq: &mut CommandSequence) {
    let tab = tab(config);

    seq.command(Dcs::SWRESET)
        .delay(150)
        .command(Dcs::SLPOUT)
        .delay(500)
        .command_with_data(FRMCTR1, &[0x01, 0x2C, 0x2D])
        .command_with_data(FRMCTR2, &[0x01, 0x2C, 0x2D])
        .command_with_data(FRMCTR3, &[0x01, 0x2C, 0x2D, 0x01, 0x2C, 0x2D])
        .command_with_data(INVCTR, &[0x07]);
    power(seq);
    vcom(seq);
    seq.command(Dcs::INVOFF);

    // Black tab glass is RGB, the rest BGR
    let madctl = if tab == TabColor::Black { 0xC0 } else { 0xC8 };
    seq.command_with_data(Dcs::MADCTL, &[madctl]);
    super::color_mode(config, seq);

    let (width, height) = tab.resolution();
    if tab.needs_address_preset() {
        let (col, row) = tab.offsets();
        address_preset(
            seq,
            (col, col + width - 1),
            (row, row + height - 1),
        );
    } else {
        address_preset(seq, (0, width - 1), (0, height - 1));
    }

    seq.command_with_data(GMCTRP1, &GAMMA_POSITIVE)
        .command_with_data(GMCTRN1, &GAMMA_NEGATIVE)
        .command(Dcs::NORON)
        .delay(10)
        .command(Dcs::DISPON)
        .delay(100);
}
