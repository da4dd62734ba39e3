//! Per-chip command catalogs
//!
//! Every chip module turns vendor constants into [`CommandSequence`]s. Gamma
//! and power tables are opaque payloads copied from the vendor reference
//! init code; only their placement in the sequence matters here.
//!
//! Init sequences are composed from the smaller catalog entries (power,
//! VCOM, color mode, gamma) so a chip's register values appear once.

mod hx8357d;
mod ili9163;
mod ili9341;
mod ili9486;
mod ili9488;
mod ssd1963;
mod st7735;
mod st7789;
mod st7796;

use tft_specs::{ChipModel, Configuration};

use crate::{CommandSequence, Dcs};

/// Catalog entries a driver can replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SequenceKind {
    /// Full power-on initialisation
    Init,
    /// Display off and sleep in
    Sleep,
    /// Sleep out and display on
    Wake,
    /// Power control registers
    Power,
    /// VCOM control registers
    Vcom,
    /// Pixel format
    ColorMode,
    /// Inversion on with settle time
    InvertOn,
    /// Inversion off with settle time
    InvertOff,
}

impl SequenceKind {
    /// Every catalog entry.
    pub const ALL: [SequenceKind; 8] = [
        SequenceKind::Init,
        SequenceKind::Sleep,
        SequenceKind::Wake,
        SequenceKind::Power,
        SequenceKind::Vcom,
        SequenceKind::ColorMode,
        SequenceKind::InvertOn,
        SequenceKind::InvertOff,
    ];

    /// Short name.
    pub const fn name(self) -> &'static str {
        match self {
            SequenceKind::Init => "init",
            SequenceKind::Sleep => "sleep",
            SequenceKind::Wake => "wake",
            SequenceKind::Power => "power",
            SequenceKind::Vcom => "vcom",
            SequenceKind::ColorMode => "color-mode",
            SequenceKind::InvertOn => "invert-on",
            SequenceKind::InvertOff => "invert-off",
        }
    }
}

/// Catalog entry `kind` for the chip selected by `config`.
///
/// `None` when the chip has no such entry (e.g. SSD1963 has no VCOM
/// register, most chips invert with a bare command).
pub fn sequence(config: &Configuration, kind: SequenceKind) -> Option<CommandSequence> {
    let mut seq = CommandSequence::new();
    let model = config.model();
    match kind {
        SequenceKind::Init => init(config, &mut seq),
        SequenceKind::Sleep => sleep(&mut seq),
        SequenceKind::Wake => wake(&mut seq),
        SequenceKind::Power => power(config, &mut seq),
        SequenceKind::Vcom => {
            if model == ChipModel::Ssd1963 {
                return None;
            }
            vcom(model, &mut seq);
        }
        SequenceKind::ColorMode => color_mode(config, &mut seq),
        SequenceKind::InvertOn | SequenceKind::InvertOff => {
            if !matches!(model, ChipModel::St7789 | ChipModel::St7796) {
                return None;
            }
            invert(kind == SequenceKind::InvertOn, &mut seq);
        }
    }
    Some(seq)
}

fn init(config: &Configuration, seq: &mut CommandSequence) {
    match config.model() {
        ChipModel::St7735 => st7735::init(config, seq),
        ChipModel::St7789 => st7789::init(config, seq),
        ChipModel::St7796 => st7796::init(config, seq),
        ChipModel::Ili9163 => ili9163::init(config, seq),
        ChipModel::Ili9341 => ili9341::init(config, seq),
        ChipModel::Ili9486 => ili9486::init(config, seq),
        ChipModel::Ili9488 => ili9488::init(config, seq),
        ChipModel::Hx8357d => hx8357d::init(config, seq),
        ChipModel::Ssd1963 => ssd1963::init(config, seq),
    }
}

fn power(config: &Configuration, seq: &mut CommandSequence) {
    match config.model() {
        ChipModel::St7735 => st7735::power(seq),
        ChipModel::St7789 => st7789::power(seq),
        ChipModel::St7796 => st7796::power(seq),
        ChipModel::Ili9163 => ili9163::power(seq),
        ChipModel::Ili9341 => ili9341::power(seq),
        ChipModel::Ili9486 => ili9486::power(seq),
        ChipModel::Ili9488 => ili9488::power(seq),
        ChipModel::Hx8357d => hx8357d::power(seq),
        ChipModel::Ssd1963 => ssd1963::pll(config, seq),
    }
}

fn vcom(model: ChipModel, seq: &mut CommandSequence) {
    match model {
        ChipModel::St7735 => st7735::vcom(seq),
        ChipModel::St7789 => st7789::vcom(seq),
        ChipModel::St7796 => st7796::vcom(seq),
        ChipModel::Ili9163 => ili9163::vcom(seq),
        ChipModel::Ili9341 => ili9341::vcom(seq),
        ChipModel::Ili9486 => ili9486::vcom(seq),
        ChipModel::Ili9488 => ili9488::vcom(seq),
        ChipModel::Hx8357d => hx8357d::vcom(seq),
        ChipModel::Ssd1963 => {}
    }
}

fn color_mode(config: &Configuration, seq: &mut CommandSequence) {
    match config.model() {
        ChipModel::Ili9488 => ili9488::color_mode(config.interface, seq),
        ChipModel::Ssd1963 => ssd1963::color_mode(config.interface, seq),
        _ => {
            seq.command_with_data(Dcs::COLMOD, &[RGB565]);
        }
    }
}

/// COLMOD value for 16 bits per pixel on both interfaces.
pub(crate) const RGB565: u8 = 0x55;

/// DISPOFF then SLPIN, each with its settle time.
fn sleep(seq: &mut CommandSequence) {
    seq.command(Dcs::DISPOFF)
        .delay(20)
        .command(Dcs::SLPIN)
        .delay(120);
}

/// SLPOUT then DISPON; SLPOUT needs 120 ms before the next command.
fn wake(seq: &mut CommandSequence) {
    seq.command(Dcs::SLPOUT)
        .delay(120)
        .command(Dcs::DISPON)
        .delay(20);
}

/// IPS panels on the ST77xx need a frame to settle after an inversion flip.
fn invert(on: bool, seq: &mut CommandSequence) {
    seq.command(if on { Dcs::INVON } else { Dcs::INVOFF })
        .delay(10);
}

/// Append a CASET/RASET pair covering `cols` and `rows` inclusive.
pub(crate) fn address_preset(seq: &mut CommandSequence, cols: (u16, u16), rows: (u16, u16)) {
    let [c0h, c0l] = cols.0.to_be_bytes();
    let [c1h, c1l] = cols.1.to_be_bytes();
    let [r0h, r0l] = rows.0.to_be_bytes();
    let [r1h, r1l] = rows.1.to_be_bytes();
    seq.command_with_data(Dcs::CASET, &[c0h, c0l, c1h, c1l])
        .command_with_data(Dcs::RASET, &[r0h, r0l, r1h, r1l]);
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::{Command, SEQUENCE_CAPACITY};
    use tft_specs::InterfaceMode;

    fn configs() -> impl Iterator<Item = Configuration> {
        ChipModel::ALL.into_iter().flat_map(|model| {
            [
                InterfaceMode::Spi,
                InterfaceMode::Parallel8,
                InterfaceMode::Parallel16,
            ]
            .into_iter()
            .map(move |iface| Configuration::for_chip(model).with_interface(iface))
        })
    }

    #[test]
    fn test_every_catalog_entry_validates() {
        for config in configs() {
            for kind in SequenceKind::ALL {
                if let Some(seq) = sequence(&config, kind) {
                    assert!(
                        seq.validate(),
                        "{} {} invalid ({} entries, overflow={})",
                        config.model(),
                        kind.name(),
                        seq.len(),
                        seq.overflowed()
                    );
                    assert!(seq.len() < SEQUENCE_CAPACITY);
                }
            }
        }
    }

    #[test]
    fn test_catalog_uses_byte_payloads_only() {
        for config in configs() {
            for kind in SequenceKind::ALL {
                if let Some(seq) = sequence(&config, kind) {
                    assert!(
                        !seq.iter().any(|c| matches!(c, Command::Data16(_))),
                        "{} {}",
                        config.model(),
                        kind.name()
                    );
                }
            }
        }
    }

    #[test]
    fn test_sleep_and_wake_shapes() {
        let config = Configuration::for_chip(ChipModel::Ili9341);
        let sleep = sequence(&config, SequenceKind::Sleep).unwrap();
        assert_eq!(sleep.first(), Some(&Command::Cmd(Dcs::DISPOFF)));
        assert!(sleep.contains(&Command::Cmd(Dcs::SLPIN)));

        let wake = sequence(&config, SequenceKind::Wake).unwrap();
        assert_eq!(wake.first(), Some(&Command::Cmd(Dcs::SLPOUT)));
        assert!(wake.contains(&Command::Cmd(Dcs::DISPON)));
    }

    #[test]
    fn test_optional_entries() {
        let ssd = Configuration::for_chip(ChipModel::Ssd1963);
        assert!(sequence(&ssd, SequenceKind::Vcom).is_none());
        assert!(sequence(&ssd, SequenceKind::InvertOn).is_none());

        let st7789 = Configuration::for_chip(ChipModel::St7789);
        let on = sequence(&st7789, SequenceKind::InvertOn).unwrap();
        assert_eq!(on.as_slice(), &[Command::Cmd(Dcs::INVON), Command::Delay(10)]);
    }

    #[test]
    fn test_init_contains_its_parts() {
        for model in ChipModel::ALL {
            let config = Configuration::for_chip(model).with_interface(InterfaceMode::Parallel8);
            let init = sequence(&config, SequenceKind::Init).unwrap();
            for kind in [SequenceKind::Power, SequenceKind::Vcom, SequenceKind::ColorMode] {
                let Some(part) = sequence(&config, kind) else {
                    continue;
                };
                assert!(
                    init.windows(part.len()).any(|w| w == part.as_slice()),
                    "{model} init does not contain its {} entry",
                    kind.name()
                );
            }
        }
    }
}
