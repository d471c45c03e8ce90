//! Deterministic text rendering of structured reports.

use colored::Colorize;

use super::Report;
use crate::config::Theme;

/// Renders a [`Report`] into colored terminal text.
///
/// Rendering is pure string assembly over an immutable theme, so it can be
/// exercised directly in tests with color codes disabled.
pub struct ReportRenderer {
    theme: Theme,
}

impl ReportRenderer {
    /// Creates a renderer over a theme.
    pub fn new(theme: Theme) -> Self {
        ReportRenderer { theme }
    }

    /// Renders title, rule, then every section in construction order.
    ///
    /// Fields without a value are skipped, and a section whose fields are
    /// all absent is skipped entirely, heading included. Output for the
    /// same report is identical on every call.
    pub fn render(&self, report: &Report) -> String {
        let mut out = String::new();
        out.push_str(&format!("{}\n", report.title.color(self.theme.heading)));
        out.push_str(&format!(
            "{}\n",
            "=".repeat(report.rule_width).color(self.theme.rule)
        ));

        for section in &report.sections {
            if !section.has_content() {
                continue;
            }
            out.push_str(&format!(
                "{}\n",
                section.label.color(section.accent).bold()
            ));
            for field in &section.fields {
                if let Some(value) = &field.value {
                    let line = format!("{}: {}", field.label, value);
                    out.push_str(&format!("  {}\n", line.color(section.accent)));
                }
            }
        }
        out
    }
}
