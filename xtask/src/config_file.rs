//! xtask validate / boot - load a JSON configuration and exercise it.

use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use platform::mocks::{BusEvent, MockBus};
use tft_driver::{create_driver, validate as validate_config};
use tft_specs::Configuration;

pub(crate) fn load(path: &Path) -> Result<Configuration> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("invalid configuration in {}", path.display()))
}

pub fn validate(path: &Path) -> Result<()> {
    let config = load(path)?;
    match validate_config(&config) {
        Ok(()) => {
            println!(
                "{}",
                format!(
                    "✓ {} {}x{} over {} accepted",
                    config.model(),
                    config.geometry.width,
                    config.geometry.height,
                    config.interface.name()
                )
                .green()
            );
            Ok(())
        }
        Err(err) => {
            eprintln!("{}", format!("✗ {err}").red().bold());
            anyhow::bail!("configuration rejected")
        }
    }
}

pub fn boot(path: &Path) -> Result<()> {
    let config = load(path)?;
    let events = boot_events(config)?;
    for event in &events {
        println!("  {}", describe(event));
    }
    println!();
    println!("{}", format!("✓ {} bus events", events.len()).green());
    Ok(())
}

/// Run `init()` for `config` on a recording bus.
pub(crate) fn boot_events(config: Configuration) -> Result<Vec<BusEvent>> {
    let bus = MockBus::new();
    let mut driver = create_driver(config, bus.clone(), Some(bus.reset_pin()), bus.delay())
        .context("configuration rejected")?;
    driver.init().context("init failed on the recording bus")?;
    Ok(bus.events())
}

fn describe(event: &BusEvent) -> String {
    match event {
        BusEvent::Command(c) => format!("{}", format!("cmd  {c:02X}").cyan()),
        BusEvent::Data(d) => format!("data {d:02X}"),
        BusEvent::Data16(w) => format!("data {w:04X}"),
        BusEvent::Delay(ms) => format!("{}", format!("wait {ms} ms").dimmed()),
        BusEvent::DelayNs(ns) => format!("{}", format!("wait {ns} ns").dimmed()),
        BusEvent::Reset(level) => format!("{}", format!("rst  {level:?}").yellow()),
        BusEvent::Read(n) => format!("read {n} bytes"),
    }
}
