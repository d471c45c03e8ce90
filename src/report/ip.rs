//! IP report assembly.

use colored::Color;
use log::debug;

use super::{Field, Report, Section};
use crate::error::LookupError;
use crate::geoip::{GeoIpProvider, IpMetadata};

/// Placeholder for identity and location values the provider omitted.
const NOT_AVAILABLE: &str = "N/A";

/// Assembles the full IP lookup report from one raw input string.
///
/// Identity and Location always render, with placeholders for whatever the
/// provider left out; every other section only renders the values that
/// actually arrived.
pub struct IpReportBuilder<'p, G> {
    provider: &'p G,
}

impl<'p, G: GeoIpProvider> IpReportBuilder<'p, G> {
    /// Creates a builder over a geolocation provider.
    pub fn new(provider: &'p G) -> Self {
        IpReportBuilder { provider }
    }

    /// Resolves `raw` through the provider and shapes the response into a
    /// structured report.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::InvalidInput`] for blank input; provider
    /// failures ([`LookupError::Connection`], [`LookupError::Provider`],
    /// [`LookupError::Unexpected`]) pass through untouched.
    pub fn build(&self, raw: &str) -> Result<Report, LookupError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(LookupError::InvalidInput);
        }

        let metadata = self.provider.lookup(trimmed)?;
        let mut report = Report::new("INFORMACIÓN COMPLETA DE LA IP", 60);

        let mut identity = Section::new("Identidad", Color::White);
        identity.push(Field::present("IP", or_not_available(metadata.ip)));
        identity.push(Field::present("Tipo", or_not_available(metadata.version)));
        report.push(identity);

        let mut location = Section::new("Ubicación", Color::Blue);
        location.push(Field::present("Ciudad", or_not_available(metadata.city)));
        location.push(Field::present("Región", or_not_available(metadata.region)));
        location.push(Field::present(
            "País",
            format!(
                "{} ({})",
                metadata.country_name.as_deref().unwrap_or(NOT_AVAILABLE),
                metadata.country_code.as_deref().unwrap_or(NOT_AVAILABLE)
            ),
        ));
        report.push(location);

        let mut coordinates = Section::new("Coordenadas", Color::Blue);
        coordinates.push(Field::new(
            "Latitud",
            metadata.latitude.map(|value| value.to_string()),
        ));
        coordinates.push(Field::new(
            "Longitud",
            metadata.longitude.map(|value| value.to_string()),
        ));
        coordinates.push(Field::new("Código postal", metadata.postal));
        report.push(coordinates);

        let mut network = Section::new("Red", Color::Cyan);
        network.push(Field::new("ISP", metadata.org));
        network.push(Field::new("ASN", metadata.asn));
        report.push(network);

        let mut timezone = Section::new("Zona horaria", Color::Magenta);
        timezone.push(Field::new("Zona horaria", metadata.timezone));
        timezone.push(Field::new("UTC", metadata.utc_offset));
        report.push(timezone);

        let mut locale = Section::new("Idiomas y moneda", Color::Yellow);
        locale.push(Field::new("Idiomas", metadata.languages));
        locale.push(Field::new(
            "Moneda",
            metadata.currency.map(|code| {
                format!(
                    "{} ({})",
                    code,
                    metadata.currency_name.as_deref().unwrap_or(NOT_AVAILABLE)
                )
            }),
        ));
        report.push(locale);

        debug!("Built IP report with {} sections", report.sections.len());
        Ok(report)
    }
}

fn or_not_available(value: Option<String>) -> String {
    value.unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeGeoIp {
        metadata: IpMetadata,
    }

    impl GeoIpProvider for FakeGeoIp {
        fn lookup(&self, _ip: &str) -> Result<IpMetadata, LookupError> {
            Ok(self.metadata.clone())
        }
    }

    struct FailingGeoIp {
        status: u16,
    }

    impl GeoIpProvider for FailingGeoIp {
        fn lookup(&self, _ip: &str) -> Result<IpMetadata, LookupError> {
            Err(LookupError::Provider {
                status: self.status,
            })
        }
    }

    fn full_metadata() -> IpMetadata {
        IpMetadata {
            ip: Some("8.8.8.8".to_string()),
            version: Some("IPv4".to_string()),
            city: Some("Mountain View".to_string()),
            region: Some("California".to_string()),
            country_name: Some("United States".to_string()),
            country_code: Some("US".to_string()),
            latitude: Some(37.42301),
            longitude: Some(-122.083352),
            postal: Some("94043".to_string()),
            org: Some("GOOGLE".to_string()),
            asn: Some("AS15169".to_string()),
            timezone: Some("America/Los_Angeles".to_string()),
            utc_offset: Some("-0700".to_string()),
            languages: Some("en-US,es-US".to_string()),
            currency: Some("USD".to_string()),
            currency_name: Some("Dollar".to_string()),
        }
    }

    #[test]
    fn test_full_response_fills_all_sections() {
        let provider = FakeGeoIp {
            metadata: full_metadata(),
        };
        let report = IpReportBuilder::new(&provider).build("8.8.8.8").unwrap();

        assert_eq!(report.title, "INFORMACIÓN COMPLETA DE LA IP");
        assert_eq!(report.rule_width, 60);
        let labels: Vec<&str> = report.sections.iter().map(|s| s.label).collect();
        assert_eq!(
            labels,
            vec![
                "Identidad",
                "Ubicación",
                "Coordenadas",
                "Red",
                "Zona horaria",
                "Idiomas y moneda",
            ]
        );
        assert!(report.sections.iter().all(Section::has_content));

        let location = report.section("Ubicación").unwrap();
        assert_eq!(
            location.fields[2].value.as_deref(),
            Some("United States (US)")
        );
        let locale = report.section("Idiomas y moneda").unwrap();
        assert_eq!(locale.fields[1].value.as_deref(), Some("USD (Dollar)"));
    }

    #[test]
    fn test_sparse_response_keeps_identity_and_location() {
        let provider = FakeGeoIp {
            metadata: IpMetadata {
                ip: Some("8.8.8.8".to_string()),
                country_name: Some("United States".to_string()),
                org: Some("Google LLC".to_string()),
                ..IpMetadata::default()
            },
        };
        let report = IpReportBuilder::new(&provider).build("8.8.8.8").unwrap();

        let identity = report.section("Identidad").unwrap();
        assert_eq!(identity.fields[0].value.as_deref(), Some("8.8.8.8"));
        assert_eq!(identity.fields[1].value.as_deref(), Some("N/A"));

        let location = report.section("Ubicación").unwrap();
        assert_eq!(location.fields[0].value.as_deref(), Some("N/A"));
        assert_eq!(
            location.fields[2].value.as_deref(),
            Some("United States (N/A)")
        );

        let network = report.section("Red").unwrap();
        assert!(network.has_content());
        assert_eq!(network.fields[0].value.as_deref(), Some("Google LLC"));
        assert_eq!(network.fields[1].value, None);

        // Nothing arrived for these, so they carry no content at all.
        assert!(!report.section("Coordenadas").unwrap().has_content());
        assert!(!report.section("Zona horaria").unwrap().has_content());
        assert!(!report.section("Idiomas y moneda").unwrap().has_content());
    }

    #[test]
    fn test_currency_without_name_uses_placeholder() {
        let provider = FakeGeoIp {
            metadata: IpMetadata {
                currency: Some("EUR".to_string()),
                ..IpMetadata::default()
            },
        };
        let report = IpReportBuilder::new(&provider).build("1.2.3.4").unwrap();

        let locale = report.section("Idiomas y moneda").unwrap();
        assert_eq!(locale.fields[1].value.as_deref(), Some("EUR (N/A)"));
    }

    #[test]
    fn test_languages_render_without_currency() {
        let provider = FakeGeoIp {
            metadata: IpMetadata {
                languages: Some("es-ES,ca".to_string()),
                ..IpMetadata::default()
            },
        };
        let report = IpReportBuilder::new(&provider).build("1.2.3.4").unwrap();

        let locale = report.section("Idiomas y moneda").unwrap();
        assert!(locale.has_content());
        assert_eq!(locale.fields[0].value.as_deref(), Some("es-ES,ca"));
        assert_eq!(locale.fields[1].value, None);
    }

    #[test]
    fn test_blank_input_is_rejected_before_lookup() {
        let provider = FailingGeoIp { status: 500 };
        let result = IpReportBuilder::new(&provider).build("  ");
        assert!(matches!(result, Err(LookupError::InvalidInput)));
    }

    #[test]
    fn test_provider_errors_pass_through() {
        let provider = FailingGeoIp { status: 429 };
        let result = IpReportBuilder::new(&provider).build("8.8.8.8");
        assert!(matches!(
            result,
            Err(LookupError::Provider { status: 429 })
        ));
    }
}
