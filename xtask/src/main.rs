// Desktop/tooling crate - unwrap/expect/panic acceptable in non-embedded code.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod catalog;
mod check;
mod config_file;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tft_specs::InterfaceMode;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "TFT driver development tasks", long_about = None)]
#[command(version)]
struct Cli {
    /// Print driver log output (RUST_LOG overrides the level)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List supported chips with their datasheet facts and quirks
    Chips,
    /// List ready-made panel presets
    Panels,
    /// Print a chip's command catalog
    Dump {
        /// Chip name, e.g. ST7735 or ili9341
        chip: String,
        /// Bus the chip is wired to (changes pixel format entries)
        #[arg(long, value_enum, default_value_t = Bus::Spi)]
        bus: Bus,
        /// Only print this entry: init, sleep, wake, power, vcom, color-mode,
        /// invert-on or invert-off
        #[arg(long)]
        kind: Option<String>,
    },
    /// Load a JSON configuration and run the factory checks on it
    Validate {
        /// Configuration file
        file: PathBuf,
    },
    /// Boot a JSON configuration against a recording bus and print the traffic
    Boot {
        /// Configuration file
        file: PathBuf,
    },
    /// Check that the library crates build for a bare-metal target
    Check,
}

#[derive(Clone, Copy, ValueEnum)]
enum Bus {
    Spi,
    Parallel8,
    Parallel16,
}

impl From<Bus> for InterfaceMode {
    fn from(bus: Bus) -> Self {
        match bus {
            Bus::Spi => InterfaceMode::Spi,
            Bus::Parallel8 => InterfaceMode::Parallel8,
            Bus::Parallel16 => InterfaceMode::Parallel16,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        init_logging();
    }

    match cli.command {
        Commands::Chips => catalog::chips(),
        Commands::Panels => catalog::panels(),
        Commands::Dump { chip, bus, kind } => catalog::dump(&chip, bus.into(), kind.as_deref()),
        Commands::Validate { file } => config_file::validate(&file),
        Commands::Boot { file } => config_file::boot(&file),
        Commands::Check => check::run(),
    }
}

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("trace"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
