//! MIPI DCS opcodes shared by every supported controller

/// Standard command set.
pub struct Dcs;

#[allow(missing_docs)]
impl Dcs {
    pub const NOP: u8 = 0x00;
    pub const SWRESET: u8 = 0x01;
    pub const SLPIN: u8 = 0x10;
    pub const SLPOUT: u8 = 0x11;
    pub const NORON: u8 = 0x13;
    pub const INVOFF: u8 = 0x20;
    pub const INVON: u8 = 0x21;
    pub const GAMSET: u8 = 0x26;
    pub const DISPOFF: u8 = 0x28;
    pub const DISPON: u8 = 0x29;
    pub const CASET: u8 = 0x2A;
    pub const RASET: u8 = 0x2B;
    pub const RAMWR: u8 = 0x2C;
    pub const RAMRD: u8 = 0x2E;
    pub const TEON: u8 = 0x35;
    pub const MADCTL: u8 = 0x36;
    pub const VSCRSADD: u8 = 0x37;
    pub const COLMOD: u8 = 0x3A;
    pub const TESCAN: u8 = 0x44;
}
