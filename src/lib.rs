//! multikit library: phone number and IP address lookups
//!
//! This library provides the building blocks behind the interactive
//! `multikit` binary: a telephony engine for parsing and classifying
//! phone numbers, a geolocation client for IP metadata, and report
//! builders that shape lookup results into renderable sections.
//!
//! # Example
//!
//! ```no_run
//! use multikit::{PhoneReportBuilder, PhonenumberEngine, ReportRenderer, Theme};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let engine = PhonenumberEngine::new();
//!     let report = PhoneReportBuilder::new(&engine).build("+34 912 345 678")?;
//!     let renderer = ReportRenderer::new(Theme::default());
//!     print!("{}", renderer.render(&report));
//!     Ok(())
//! }
//! ```
//!
//! Phone lookups are fully offline; IP lookups call the ipapi.co HTTP
//! endpoint with a blocking client.

#![warn(missing_docs)]

pub mod config;
mod country;
mod error;
mod geoip;
pub mod logger;
mod report;
mod shell;
mod telephony;

// Re-export public API
pub use config::Theme;
pub use error::{InitError, LookupError};
pub use geoip::{GeoIpProvider, IpMetadata, IpapiClient};
pub use report::{Field, IpReportBuilder, PhoneReportBuilder, Report, ReportRenderer, Section};
pub use run::run;
pub use shell::Shell;
pub use telephony::{
    NumberType, ParsedPhoneNumber, PhoneNumberFormat, PhonenumberEngine, TelephonyProvider,
};

// Internal run module (wires the live providers to the shell)
mod run {
    use std::io;

    use anyhow::{Context, Result};
    use log::info;

    use crate::config::Theme;
    use crate::geoip::IpapiClient;
    use crate::shell::Shell;
    use crate::telephony::PhonenumberEngine;

    /// Runs the interactive shell against the live lookup providers.
    ///
    /// Blocks until the user exits via the menu or input ends. The logger
    /// is expected to be installed beforehand; see
    /// [`crate::logger::init_logger`].
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed or if
    /// terminal I/O fails mid-session. Individual lookup failures are
    /// reported inside the shell and do not end the session.
    pub fn run() -> Result<()> {
        let telephony = PhonenumberEngine::new();
        let geoip = IpapiClient::new().context("Failed to initialize HTTP client")?;
        let shell = Shell::new(Theme::default(), telephony, geoip);

        info!("Starting interactive session");
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        shell
            .run(stdin.lock(), &mut stdout)
            .context("Terminal I/O failure")?;
        info!("Session ended");
        Ok(())
    }
}
