//! Production telephony provider backed by the `phonenumber` crate.
//!
//! The crate supplies parsing, validation, and formatting; descriptive
//! lookups (region names, carriers, timezones, classification) come from
//! the bundled dataset in this module's sibling. Everything is exposed
//! through the [`TelephonyProvider`] contract only.

use log::debug;
use phonenumber::{country, Mode};

use super::dataset;
use super::{NumberType, ParsedPhoneNumber, PhoneNumberFormat, TelephonyProvider};
use crate::error::LookupError;

/// Shortest national significant number any plan assigns.
const MIN_NSN_DIGITS: usize = 2;
/// Longest national significant number any plan assigns.
const MAX_NSN_DIGITS: usize = 17;

/// Numbering-plan engine wrapping the `phonenumber` crate.
#[derive(Debug, Default)]
pub struct PhonenumberEngine;

impl PhonenumberEngine {
    /// Creates the engine. Stateless; the numbering-plan database is
    /// compiled into the backing crate.
    pub fn new() -> Self {
        PhonenumberEngine
    }

    /// Re-derives the backing crate's number value from the canonical
    /// E.164 rendering. `None` only for hand-built values that were never
    /// produced by [`TelephonyProvider::parse`] on this engine.
    fn engine_number(&self, number: &ParsedPhoneNumber) -> Option<phonenumber::PhoneNumber> {
        phonenumber::parse(None, &number.e164()).ok()
    }
}

/// Maps an ISO alpha-2 region string onto the backing crate's region id,
/// for the regions the bundled dataset covers. The interactive tool never
/// supplies a default region, so partial coverage costs nothing.
fn region_id(region: &str) -> Option<country::Id> {
    use country::Id;
    match region {
        "US" => Some(Id::US),
        "CA" => Some(Id::CA),
        "ES" => Some(Id::ES),
        "MX" => Some(Id::MX),
        "FR" => Some(Id::FR),
        "DE" => Some(Id::DE),
        "GB" => Some(Id::GB),
        "IT" => Some(Id::IT),
        "JP" => Some(Id::JP),
        "CN" => Some(Id::CN),
        "BR" => Some(Id::BR),
        "AR" => Some(Id::AR),
        "IN" => Some(Id::IN),
        "RU" => Some(Id::RU),
        "AU" => Some(Id::AU),
        _ => None,
    }
}

impl TelephonyProvider for PhonenumberEngine {
    fn parse(
        &self,
        raw: &str,
        default_region: Option<&str>,
    ) -> Result<ParsedPhoneNumber, LookupError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(LookupError::InvalidInput);
        }

        let region_hint = default_region.and_then(region_id);
        let number = phonenumber::parse(region_hint, trimmed).map_err(|error| {
            LookupError::Parse {
                message: error.to_string(),
            }
        })?;

        let calling_code = number.country().code() as u16;
        let e164 = phonenumber::format(&number).mode(Mode::E164).to_string();
        // The national significant number is the E.164 digits with the "+"
        // and calling code removed; deriving it from the rendered form
        // preserves plan quirks like Italy's leading zero.
        let national_number = e164
            .strip_prefix('+')
            .and_then(|digits| digits.strip_prefix(&calling_code.to_string()))
            .unwrap_or_default()
            .to_string();
        let region = number.country().id().map(|id| format!("{:?}", id));

        let valid = phonenumber::is_valid(&number);
        let possible = (MIN_NSN_DIGITS..=MAX_NSN_DIGITS).contains(&national_number.len());
        let number_type = region
            .as_deref()
            .map(|region| dataset::classify(region, &national_number))
            .unwrap_or(NumberType::Unknown);

        debug!(
            "Parsed '{}' as +{} {} (region {:?}, valid: {}, type: {})",
            trimmed, calling_code, national_number, region, valid, number_type
        );

        Ok(ParsedPhoneNumber {
            calling_code,
            national_number,
            region,
            valid,
            possible,
            number_type,
        })
    }

    fn format(&self, number: &ParsedPhoneNumber, format: PhoneNumberFormat) -> String {
        let mode = match format {
            PhoneNumberFormat::E164 => return number.e164(),
            PhoneNumberFormat::International => Mode::International,
            PhoneNumberFormat::National => Mode::National,
            PhoneNumberFormat::Rfc3966 => Mode::Rfc3966,
        };
        self.engine_number(number)
            .map(|n| phonenumber::format(&n).mode(mode).to_string())
            .unwrap_or_else(|| number.e164())
    }

    fn describe_region(&self, number: &ParsedPhoneNumber, _locale: &str) -> Option<String> {
        // The bundled dataset carries Spanish descriptions, the tool's
        // fixed locale; other locales fall back to them.
        number
            .region
            .as_deref()
            .and_then(dataset::region_name)
            .map(String::from)
    }

    fn describe_carrier(&self, number: &ParsedPhoneNumber, _locale: &str) -> Option<String> {
        number
            .region
            .as_deref()
            .and_then(|region| dataset::carrier_for(region, &number.national_number))
            .map(String::from)
    }

    fn timezones_for(&self, number: &ParsedPhoneNumber) -> Vec<String> {
        number
            .region
            .as_deref()
            .map(|region| {
                dataset::timezones(region)
                    .iter()
                    .map(|tz| tz.to_string())
                    .collect()
            })
            .unwrap_or_default()
    }
}
