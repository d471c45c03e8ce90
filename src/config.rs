//! Configuration constants and the terminal style table.
//!
//! There is no configuration file and no CLI surface beyond the interactive
//! menu, so everything here is fixed at compile time: the geolocation
//! endpoint, the network timeout, and the color theme shared by the shell
//! and the report renderer.

use colored::Color;
use std::time::Duration;

/// Base URL of the IP geolocation service.
pub const GEOIP_ENDPOINT: &str = "http://ipapi.co";

/// Timeout applied to every geolocation request.
///
/// The lookup path blocks on the network call, so this bound is what keeps
/// the shell responsive when the service hangs.
pub const GEOIP_TIMEOUT: Duration = Duration::from_secs(10);

/// User-Agent header sent with geolocation requests.
pub const USER_AGENT: &str = "multikit/0.1";

/// Immutable color table shared by the shell and the renderer.
///
/// Constructed once at startup and passed by reference; there is no global
/// styling state. Section accent colors are chosen per section by the report
/// builders, this table only covers the surrounding chrome.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Startup banner box.
    pub banner: Color,
    /// Report titles.
    pub heading: Color,
    /// "=" rules under titles and sub-headers.
    pub rule: Color,
    /// Menu frame lines.
    pub menu_frame: Color,
    /// Bracketed menu option keys.
    pub menu_key: Color,
    /// Menu option descriptions.
    pub menu_text: Color,
    /// Per-lookup sub-headers ("PHONE LOOKUP", "IP LOOKUP").
    pub subheader: Color,
    /// Input prompts.
    pub prompt: Color,
    /// Progress and pause notices.
    pub notice: Color,
    /// Error messages.
    pub error: Color,
    /// Farewell message.
    pub farewell: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            banner: Color::Cyan,
            heading: Color::Green,
            rule: Color::Yellow,
            menu_frame: Color::Yellow,
            menu_key: Color::Green,
            menu_text: Color::White,
            subheader: Color::Magenta,
            prompt: Color::Cyan,
            notice: Color::Yellow,
            error: Color::Red,
            farewell: Color::Cyan,
        }
    }
}
