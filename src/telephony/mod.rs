//! Phone number capability contract and its data types.
//!
//! The report builder consumes a numbering-plan engine exclusively through
//! the [`TelephonyProvider`] trait, so the engine behind it (here the
//! `phonenumber` crate plus a bundled locale dataset) can be swapped without
//! touching any report logic.

mod dataset;
mod engine;

pub use engine::PhonenumberEngine;

use crate::error::LookupError;
use strum_macros::EnumIter as EnumIterMacro;

/// Service category of a phone number within its numbering plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum NumberType {
    /// Geographic fixed line.
    FixedLine,
    /// Mobile subscriber number.
    Mobile,
    /// Plans where fixed and mobile ranges are indistinguishable.
    FixedLineOrMobile,
    /// Freephone number, billed to the callee.
    TollFree,
    /// Premium-rate service.
    PremiumRate,
    /// Shared-cost service.
    SharedCost,
    /// Voice over IP range.
    Voip,
    /// Personal number, redirectable by the subscriber.
    PersonalNumber,
    /// Paging service.
    Pager,
    /// Universal access number.
    Uan,
    /// Voicemail access number.
    Voicemail,
    /// Unclassified or outside the known ranges.
    Unknown,
}

impl NumberType {
    /// Returns the Spanish display label for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            NumberType::FixedLine => "Línea fija",
            NumberType::Mobile => "Móvil",
            NumberType::FixedLineOrMobile => "Línea fija o móvil",
            NumberType::TollFree => "Número gratuito",
            NumberType::PremiumRate => "Número premium",
            NumberType::SharedCost => "Costo compartido",
            NumberType::Voip => "VoIP",
            NumberType::PersonalNumber => "Número personal",
            NumberType::Pager => "Pager",
            NumberType::Uan => "UAN",
            NumberType::Voicemail => "Buzón de voz",
            NumberType::Unknown => "Desconocido",
        }
    }
}

impl std::fmt::Display for NumberType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rendering variants a phone number can be formatted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum PhoneNumberFormat {
    /// Human-readable international form, e.g. "+34 912 34 56 78".
    International,
    /// In-country dialing form, e.g. "912 34 56 78".
    National,
    /// Canonical "+" + calling code + national number, no separators.
    E164,
    /// "tel:" URI form per RFC 3966.
    Rfc3966,
}

/// Outcome of a successful parse, carrying everything the report needs.
///
/// This is plain data: re-parsing the E.164 rendering of any parsed number
/// yields an equal value, which is what makes the format variants mutually
/// consistent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPhoneNumber {
    /// ITU-assigned calling code, e.g. 34 for Spain.
    pub calling_code: u16,
    /// National significant number as a bare digit string.
    pub national_number: String,
    /// ISO 3166-1 alpha-2 region the engine resolved, when determinable.
    pub region: Option<String>,
    /// Whether the number matches a real allocation pattern.
    pub valid: bool,
    /// Whether the number has a plausible length/shape for its region.
    pub possible: bool,
    /// Numbering-plan classification.
    pub number_type: NumberType,
}

impl ParsedPhoneNumber {
    /// Canonical E.164 rendering: "+" + calling code + national number.
    pub fn e164(&self) -> String {
        format!("+{}{}", self.calling_code, self.national_number)
    }

    /// Number of digits in the national significant number.
    pub fn digit_count(&self) -> usize {
        self.national_number.len()
    }
}

/// Capability contract over a numbering-plan engine.
///
/// `parse` resolves validity, possibility, and classification eagerly and
/// records them on the returned [`ParsedPhoneNumber`]; the corresponding
/// accessors have default implementations reading those fields, which an
/// implementation computing them lazily may override.
pub trait TelephonyProvider {
    /// Parses a raw string into a phone number.
    ///
    /// Accepts spaces, parentheses, and hyphens, with a leading "+" or an
    /// explicit country code; `default_region` (ISO alpha-2) supplies the
    /// region when the input carries neither.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::InvalidInput`] for blank input and
    /// [`LookupError::Parse`] when the engine rejects the string.
    fn parse(
        &self,
        raw: &str,
        default_region: Option<&str>,
    ) -> Result<ParsedPhoneNumber, LookupError>;

    /// Whether the number matches a real allocation pattern.
    fn is_valid(&self, number: &ParsedPhoneNumber) -> bool {
        number.valid
    }

    /// Whether the number has a plausible length/shape for its region.
    fn is_possible(&self, number: &ParsedPhoneNumber) -> bool {
        number.possible
    }

    /// Numbering-plan classification of the number.
    fn classify(&self, number: &ParsedPhoneNumber) -> NumberType {
        number.number_type
    }

    /// Renders the number in the requested format variant.
    fn format(&self, number: &ParsedPhoneNumber, format: PhoneNumberFormat) -> String;

    /// Localized description of the number's country or region.
    fn describe_region(&self, number: &ParsedPhoneNumber, locale: &str) -> Option<String>;

    /// Localized carrier name, when the number's range maps to one.
    fn describe_carrier(&self, number: &ParsedPhoneNumber, locale: &str) -> Option<String>;

    /// Timezone identifiers covering the number's region, possibly empty.
    fn timezones_for(&self, number: &ParsedPhoneNumber) -> Vec<String>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_number_type_labels() {
        assert_eq!(NumberType::FixedLine.as_str(), "Línea fija");
        assert_eq!(NumberType::Mobile.as_str(), "Móvil");
        assert_eq!(NumberType::TollFree.as_str(), "Número gratuito");
        assert_eq!(NumberType::Unknown.as_str(), "Desconocido");
    }

    #[test]
    fn test_all_number_types_have_labels() {
        // Every category must render to a non-empty Spanish label
        for number_type in NumberType::iter() {
            assert!(
                !number_type.as_str().is_empty(),
                "{:?} should have a non-empty label",
                number_type
            );
        }
    }

    #[test]
    fn test_number_type_display_matches_as_str() {
        for number_type in NumberType::iter() {
            assert_eq!(number_type.to_string(), number_type.as_str());
        }
    }

    #[test]
    fn test_e164_rendering() {
        let number = ParsedPhoneNumber {
            calling_code: 34,
            national_number: "912345678".to_string(),
            region: Some("ES".to_string()),
            valid: true,
            possible: true,
            number_type: NumberType::FixedLine,
        };
        assert_eq!(number.e164(), "+34912345678");
        assert_eq!(number.digit_count(), 9);
    }
}
