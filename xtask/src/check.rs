use anyhow::{Context, Result};
use colored::Colorize;
use std::process::Command;
use std::time::Instant;

/// Bare-metal target the library crates must build for.
const EMBEDDED_TARGET: &str = "thumbv7em-none-eabihf";

/// `cargo check` invocations that must succeed, with a label each.
const BUILDS: &[(&str, &[&str])] = &[
    (
        "tft-specs (no_std)",
        &["check", "-p", "tft-specs", "--target", EMBEDDED_TARGET],
    ),
    (
        "platform (no_std)",
        &["check", "-p", "platform", "--target", EMBEDDED_TARGET],
    ),
    (
        "tft-driver (no_std, defmt, graphics)",
        &[
            "check",
            "-p",
            "tft-driver",
            "--target",
            EMBEDDED_TARGET,
            "--features",
            "defmt,graphics",
        ],
    ),
    (
        "tft-driver (host, tracing, serde)",
        &["check", "-p", "tft-driver", "--features", "std,tracing,serde"],
    ),
];

pub fn run() -> Result<()> {
    println!();
    println!("{}", "🔍 Checking library builds...".cyan().bold());
    println!();

    let total_start = Instant::now();

    for (label, args) in BUILDS {
        println!("{}", format!("  Checking {label}...").cyan());
        let start = Instant::now();

        let output = Command::new("cargo")
            .args(*args)
            .output()
            .with_context(|| format!("Failed to check {label}"))?;

        if !output.status.success() {
            eprintln!("{}", format!("  ✗ {label} check failed").red().bold());
            eprintln!();
            eprintln!("{}", String::from_utf8_lossy(&output.stderr));
            anyhow::bail!("{label} check failed");
        }

        println!(
            "{}",
            format!(
                "  ✓ {label} passed in {:.2}s",
                start.elapsed().as_secs_f64()
            )
            .green()
        );
    }
    println!();

    // Clippy lints
    println!("{}", "  Running clippy lints...".cyan());
    let clippy_start = Instant::now();

    let clippy_output = Command::new("cargo")
        .args(["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"])
        .output()
        .context("Failed to run clippy")?;

    if !clippy_output.status.success() {
        eprintln!("{}", "  ⚠ Clippy warnings found".yellow().bold());
        eprintln!();
        eprintln!("{}", String::from_utf8_lossy(&clippy_output.stderr));
        // Don't fail on clippy warnings, just show them
    } else {
        println!(
            "{}",
            format!(
                "  ✓ Clippy passed in {:.2}s",
                clippy_start.elapsed().as_secs_f64()
            )
            .green()
        );
    }
    println!();

    println!(
        "{}",
        format!(
            "✓ All checks completed in {:.2}s",
            total_start.elapsed().as_secs_f64()
        )
        .green()
        .bold()
    );
    println!();

    Ok(())
}
