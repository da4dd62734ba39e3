//! Bus abstraction for TFT display controllers
//!
//! This crate moves command and data bytes between the host and a display
//! controller. Chip knowledge lives in the driver crate above it.
//!
//! # Architecture Layers
//!
//! ```text
//! Application
//!         ↓
//! tft-driver (command sequences, chip catalogs, state machine)
//!         ↓
//! platform (this crate - DisplayInterface + SPI / parallel links)
//!         ↓
//! embedded-hal implementation of the target MCU
//! ```
//!
//! # Interfaces
//!
//! - [`SpiInterface`] - 4-wire SPI over an `embedded-hal` `SpiDevice`
//! - [`ParallelInterface`] - 8080-style 8/16-bit bus over a [`PinGroup`]
//!
//! # Features
//!
//! - `std`: Recording mocks ([`mocks`]) for host tests
//! - `defmt`: Enable defmt logging derives
//!
//! # Example
//!
//! ```
//! use platform::{DisplayError, DisplayInterface};
//!
//! fn display_on<I: DisplayInterface>(iface: &mut I) -> Result<(), DisplayError> {
//!     iface.write_command(0x29)
//! }
//! ```

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![deny(unused_must_use)]
// all Results must be handled
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::print_stdout)] // prefer tracing/defmt over println! in lib code
#![allow(clippy::doc_markdown)] // register names in doc comments
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod error;
pub mod gpio;
pub mod interface;
pub mod mocks;
pub mod parallel;
pub mod spi;

pub use error::DisplayError;
pub use gpio::{NoPin, PinGroup, PinState};
pub use interface::{BusWidth, DisplayInterface};
pub use parallel::ParallelInterface;
pub use spi::SpiInterface;
