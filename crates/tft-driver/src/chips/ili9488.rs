//! Ilitek ILI9488
//!
//! The serial interface does not accept 16 bpp, so pixels go out as RGB666
//! unless the chip sits on a 16-bit parallel bus.

use tft_specs::{Configuration, InterfaceMode};

use crate::{CommandSequence, Dcs};

const IFMODE: u8 = 0xB0;
const FRMCTR1: u8 = 0xB1;
const INVTR: u8 = 0xB4;
const DFUNCTR: u8 = 0xB6;
const ETMOD: u8 = 0xB7;
const PWCTR1: u8 = 0xC0;
const PWCTR2: u8 = 0xC1;
const VMCTR1: u8 = 0xC5;
const PGAMCTRL: u8 = 0xE0;
const NGAMCTRL: u8 = 0xE1;
const ADJCTL3: u8 = 0xF7;

/// COLMOD value for 18 bits per pixel.
const RGB666: u8 = 0x66;

const GAMMA_POSITIVE: [u8; 15] = [
    0x00, 0x03, 0x09, 0x08, 0x16, 0x0A, 0x3F, 0x78, 0x4C, 0x09, 0x0A, 0x08, 0x16, 0x1A, 0x0F,
];
const GAMMA_NEGATIVE: [u8; 15] = [
    0x00, 0x16, 0x19, 0x03, 0x0F, 0x05, 0x32, 0x45, 0x46, 0x04, 0x0E, 0x0D, 0x35, 0x37, 0x0F,
];

pub(super) fn power(seq: &mut CommandSequence) {
    seq.command_with_data(PWCTR1, &[0x17, 0x15])
        .command_with_data(PWCTR2, &[0x41]);
}

pub(super) fn vcom(seq: &mut CommandSequence) {
    seq.command_with_data(VMCTR1, &[0x00, 0x12, 0x80]);
}

pub(super) fn color_mode(interface: InterfaceMode, seq: &mut CommandSequence) {
    let format = if interface == InterfaceMode::Parallel16 {
        super::RGB565
    } else {
        RGB666
    };
    seq.command_with_data(Dcs::COLMOD, &[format]);
}

pub(super) fn init(config: &Configuration, seq: &mut CommandSequence) {
    seq.command_with_data(PGAMCTRL, &GAMMA_POSITIVE)
        .command_with_data(NGAMCTRL, &GAMMA_NEGATIVE);
    power(seq);
    vcom(seq);
    seq.command_with_data(Dcs::MADCTL, &[0x48]);
    color_mode(config.interface, seq);
    // SDO unused on SPI
    let ifmode = if config.interface == InterfaceMode::Spi {
        0x80
    } else {
        0x00
    };
    seq.command_with_data(IFMODE, &[ifmode])
        .command_with_data(FRMCTR1, &[0xA0])
        .command_with_data(INVTR, &[0x02])
        .command_with_data(DFUNCTR, &[0x02, 0x02, 0x3B])
        .command_with_data(ETMOD, &[0xC6])
        .command_with_data(ADJCTL3, &[0xA9, 0x51, 0x2C, 0x82])
        .command(Dcs::SLPOUT)
        .delay(120)
        .command(Dcs::DISPON)
        .delay(25);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Command;

    #[test]
    fn test_pixel_format_depends_on_bus() {
        let mut seq = CommandSequence::new();
        color_mode(InterfaceMode::Spi, &mut seq);
        assert_eq!(seq.get(1), Some(&Command::Data(RGB666)));

        seq.clear();
        color_mode(InterfaceMode::Parallel16, &mut seq);
        assert_eq!(seq.get(1), Some(&Command::Data(0x55)));
    }
}
