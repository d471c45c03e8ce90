//! Phone report assembly.

use colored::Color;
use log::debug;

use super::{Field, Report, Section};
use crate::country::{country_metadata, regional_plan};
use crate::error::LookupError;
use crate::telephony::{PhoneNumberFormat, TelephonyProvider};

/// Locale passed to region and carrier descriptions.
const DESCRIPTION_LOCALE: &str = "es";

/// Placeholder for descriptions the provider could not produce.
const NO_DISPONIBLE: &str = "No disponible";

/// Assembles the full phone lookup report from one raw input string.
///
/// The builder owns the section order and the presence rules; formatting
/// and number intelligence come from the [`TelephonyProvider`] it wraps.
pub struct PhoneReportBuilder<'p, P> {
    provider: &'p P,
}

impl<'p, P: TelephonyProvider> PhoneReportBuilder<'p, P> {
    /// Creates a builder over a telephony provider.
    pub fn new(provider: &'p P) -> Self {
        PhoneReportBuilder { provider }
    }

    /// Parses, validates, and enriches `raw` into a structured report.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::InvalidInput`] for blank input,
    /// [`LookupError::Parse`] when the input cannot be read as a phone
    /// number, and [`LookupError::InvalidNumber`] when it parses but fails
    /// validation. No report is produced for an invalid number.
    pub fn build(&self, raw: &str) -> Result<Report, LookupError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(LookupError::InvalidInput);
        }

        let number = self.provider.parse(trimmed, None)?;
        if !self.provider.is_valid(&number) {
            return Err(LookupError::InvalidNumber);
        }

        let region = self.provider.describe_region(&number, DESCRIPTION_LOCALE);
        let carrier = self.provider.describe_carrier(&number, DESCRIPTION_LOCALE);
        let timezones = self.provider.timezones_for(&number);
        let number_type = self.provider.classify(&number);
        let metadata = country_metadata(number.calling_code);

        let mut report = Report::new("INFORMACIÓN COMPLETA DEL NÚMERO", 70);

        let mut formats = Section::new("Formatos", Color::White);
        formats.push(Field::present("Original", trimmed));
        formats.push(Field::present(
            "Internacional",
            self.provider.format(&number, PhoneNumberFormat::International),
        ));
        formats.push(Field::present(
            "Nacional",
            self.provider.format(&number, PhoneNumberFormat::National),
        ));
        formats.push(Field::present(
            "E164",
            self.provider.format(&number, PhoneNumberFormat::E164),
        ));
        formats.push(Field::present(
            "RFC3966",
            self.provider.format(&number, PhoneNumberFormat::Rfc3966),
        ));
        report.push(formats);

        let mut geography = Section::new("Geografía", Color::Blue);
        geography.push(Field::present(
            "País",
            region.unwrap_or_else(|| NO_DISPONIBLE.to_string()),
        ));
        geography.push(Field::present(
            "Código",
            format!("+{}", number.calling_code),
        ));
        geography.push(Field::present("ISO", metadata.iso_code));
        geography.push(Field::new(
            "Coordenadas",
            metadata.coordinates.map(String::from),
        ));
        geography.push(Field::new("Capital", metadata.capital.map(String::from)));
        report.push(geography);

        let mut network = Section::new("Red", Color::Cyan);
        network.push(Field::present(
            "Operador",
            carrier.unwrap_or_else(|| NO_DISPONIBLE.to_string()),
        ));
        network.push(Field::present("Tipo", number_type.as_str()));
        network.push(Field::present(
            "Longitud",
            format!("{} dígitos", number.digit_count()),
        ));
        report.push(network);

        let mut zones = Section::new("Zonas horarias", Color::Magenta);
        zones.push(Field::new(
            "Zona horaria",
            (!timezones.is_empty()).then(|| timezones.join(" | ")),
        ));
        report.push(zones);

        // Currency gates the whole section: either every known fact about
        // the country is shown or none of them are.
        let mut facts = Section::new("Datos del país", Color::Yellow);
        if metadata.currency.is_some() {
            facts.push(Field::new("Moneda", metadata.currency.map(String::from)));
            facts.push(Field::new("Idioma", metadata.language.map(String::from)));
            facts.push(Field::new(
                "Población",
                metadata.population.map(String::from),
            ));
        }
        report.push(facts);

        let mut validity = Section::new("Validez", Color::Green);
        validity.push(Field::present("Válido", si_no(self.provider.is_valid(&number))));
        validity.push(Field::present(
            "Posible",
            si_no(self.provider.is_possible(&number)),
        ));
        report.push(validity);

        if let Some(plan) = regional_plan(number.calling_code) {
            let mut regional = Section::new("Información regional", Color::White);
            for (label, value) in plan {
                regional.push(Field::present(label, *value));
            }
            report.push(regional);
        }

        debug!(
            "Built phone report for +{} with {} sections",
            number.calling_code,
            report.sections.len()
        );
        Ok(report)
    }
}

fn si_no(flag: bool) -> &'static str {
    if flag {
        "Sí"
    } else {
        "No"
    }
}
