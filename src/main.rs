//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `multikit` library that handles:
//! - Logger initialization
//! - Handing the terminal to the interactive shell
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use std::process;

use multikit::logger::init_logger;

fn main() -> Result<()> {
    init_logger().context("Failed to initialize logger")?;

    match multikit::run() {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("multikit error: {:#}", e);
            process::exit(1);
        }
    }
}
