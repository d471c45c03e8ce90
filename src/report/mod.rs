//! Structured lookup reports: model, builders, and renderer.
//!
//! Builders turn raw user input into a [`Report`] (ordered sections of
//! labeled fields, where any value may be absent); the renderer turns a
//! report into colored text, omitting what is absent. The two halves only
//! meet through the model, so presence rules live in exactly one place.

mod ip;
mod phone;
mod render;

pub use ip::IpReportBuilder;
pub use phone::PhoneReportBuilder;
pub use render::ReportRenderer;

use colored::Color;

/// One key/value line inside a section.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Display label.
    pub label: &'static str,
    /// Display value; `None` omits the field from rendering.
    pub value: Option<String>,
}

impl Field {
    /// Field whose value may be absent.
    pub fn new(label: &'static str, value: Option<String>) -> Self {
        Field { label, value }
    }

    /// Field whose value is always present.
    pub fn present(label: &'static str, value: impl Into<String>) -> Self {
        Field {
            label,
            value: Some(value.into()),
        }
    }
}

/// Ordered group of fields sharing one accent color.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// Section heading.
    pub label: &'static str,
    /// Accent color for the heading and its field lines.
    pub accent: Color,
    /// Fields in display order.
    pub fields: Vec<Field>,
}

impl Section {
    /// Empty section with the given heading and accent.
    pub fn new(label: &'static str, accent: Color) -> Self {
        Section {
            label,
            accent,
            fields: Vec::new(),
        }
    }

    /// Appends a field, keeping display order.
    pub fn push(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Whether at least one field carries a value.
    pub fn has_content(&self) -> bool {
        self.fields.iter().any(|field| field.value.is_some())
    }
}

/// Structured lookup report: a title plus sections in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Title line.
    pub title: &'static str,
    /// Width of the "=" rule drawn under the title.
    pub rule_width: usize,
    /// Sections in display order.
    pub sections: Vec<Section>,
}

impl Report {
    /// Empty report with the given title and rule width.
    pub fn new(title: &'static str, rule_width: usize) -> Self {
        Report {
            title,
            rule_width,
            sections: Vec::new(),
        }
    }

    /// Appends a section, keeping display order.
    pub fn push(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Finds a section by its heading.
    pub fn section(&self, label: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.label == label)
    }
}
