//! xtask chips / panels / dump - print the built-in chip tables.

use anyhow::{anyhow, Result};
use colored::Colorize;
use tft_driver::{default_config, sequence, Command, SequenceKind};
use tft_specs::{chip_spec, panels, ChipModel, InterfaceMode};

pub fn chips() -> Result<()> {
    println!();
    println!(
        "{}",
        format!(
            "  {:<9} {:>9} {:>9} {:>7} {:>8}  {}",
            "chip", "default", "ram", "settle", "spi max", "buses"
        )
        .bold()
    );
    for model in ChipModel::ALL {
        let spec = chip_spec(model);
        let buses: Vec<&str> = [
            InterfaceMode::Spi,
            InterfaceMode::Parallel8,
            InterfaceMode::Parallel16,
        ]
        .into_iter()
        .filter(|mode| spec.buses.supports(*mode))
        .map(InterfaceMode::name)
        .collect();
        let spi_max = if spec.max_spi_hz == 0 {
            "-".to_string()
        } else {
            format!("{:.1}M", f64::from(spec.max_spi_hz) / 1e6)
        };
        println!(
            "  {:<9} {:>9} {:>9} {:>5}ms {:>8}  {}",
            spec.name().cyan(),
            format!("{}x{}", spec.default_width, spec.default_height),
            format!("{}x{}", spec.ram_width, spec.ram_height),
            spec.reset_settle_ms,
            spi_max,
            buses.join(", ")
        );
        for quirk in model.quirks() {
            println!(
                "  {:<9} {} {}",
                "",
                format!("[{}]", quirk.quirk_type()).yellow(),
                quirk.description()
            );
        }
    }
    println!();
    Ok(())
}

pub fn panels() -> Result<()> {
    println!();
    for panel in panels::ALL {
        let geometry = &panel.geometry;
        println!(
            "  {:<24} {:<8} {}x{} offset ({}, {}) {}",
            panel.name.cyan(),
            panel.driver.model().name(),
            geometry.width,
            geometry.height,
            geometry.col_start,
            geometry.row_start,
            panel.interface.name()
        );
    }
    println!();
    Ok(())
}

pub fn dump(chip: &str, interface: InterfaceMode, kind: Option<&str>) -> Result<()> {
    let model = ChipModel::from_name(chip).ok_or_else(|| anyhow!("unknown chip '{chip}'"))?;
    let kinds: Vec<SequenceKind> = match kind {
        Some(name) => vec![SequenceKind::ALL
            .into_iter()
            .find(|k| k.name() == name)
            .ok_or_else(|| anyhow!("unknown sequence '{name}'"))?],
        None => SequenceKind::ALL.to_vec(),
    };
    let config = default_config(model).with_interface(interface);

    for kind in kinds {
        println!();
        let Some(seq) = sequence(&config, kind) else {
            println!("{}", format!("{} {}: none", model, kind.name()).dimmed());
            continue;
        };
        println!(
            "{}",
            format!("{} {} ({} entries)", model, kind.name(), seq.len()).bold()
        );
        for line in render(seq.as_slice()) {
            println!("  {line}");
        }
    }
    println!();
    Ok(())
}

/// One line per command byte with its data run, one per delay.
pub(crate) fn render(commands: &[Command]) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current: Option<String> = None;
    for command in commands {
        match command {
            Command::Cmd(c) => {
                lines.extend(current.take());
                current = Some(format!("{c:02X}"));
            }
            Command::Data(d) => match current.as_mut() {
                Some(line) => line.push_str(&format!(" {d:02X}")),
                None => current = Some(format!("   {d:02X}")),
            },
            Command::Data16(w) => match current.as_mut() {
                Some(line) => line.push_str(&format!(" {w:04X}")),
                None => current = Some(format!("   {w:04X}")),
            },
            Command::Delay(ms) => {
                lines.extend(current.take());
                lines.push(format!("delay {ms} ms"));
            }
            Command::End => {
                lines.extend(current.take());
                lines.push("end".to_string());
            }
        }
    }
    lines.extend(current);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_groups_data_under_command() {
        let lines = render(&[
            Command::cmd(0x36),
            Command::data(0x48),
            Command::delay(10),
            Command::cmd(0x29),
            Command::end(),
        ]);
        assert_eq!(lines, vec!["36 48", "delay 10 ms", "29", "end"]);
    }

    #[test]
    fn test_dump_rejects_unknown_names() {
        assert!(dump("ST9999", InterfaceMode::Spi, None).is_err());
        assert!(dump("ST7735", InterfaceMode::Spi, Some("reboot")).is_err());
        assert!(dump("st7735", InterfaceMode::Spi, Some("sleep")).is_ok());
    }
}
