//! Static country knowledge keyed by telephone calling code.
//!
//! Two read-only tables initialized once at first use: extended
//! geographic/economic metadata per calling code, and numbering-plan facts
//! for a small subset of plans. Both lookups are total; unknown codes fall
//! back to a sentinel (metadata) or `None` (plan facts), never an error.
//!
//! The content is an illustrative subset covering about a dozen major
//! calling codes. Extending coverage is purely a content addition.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Extended geographic and economic facts for one calling code.
///
/// Calling codes are not unique per country. Shared codes carry
/// pre-composed multi-country strings (see code 1, which covers both the
/// US and Canada); no disambiguation is attempted without a region hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryMetadataEntry {
    /// ISO 3166-1 alpha-2 code(s), "/"-joined when the code is shared.
    pub iso_code: &'static str,
    /// Representative coordinates, one pair per country for shared codes.
    pub coordinates: Option<&'static str>,
    /// Capital name(s).
    pub capital: Option<&'static str>,
    /// Currency code and name.
    pub currency: Option<&'static str>,
    /// Primary language(s).
    pub language: Option<&'static str>,
    /// Approximate population.
    pub population: Option<&'static str>,
}

/// Sentinel entry returned for calling codes without table coverage.
pub static UNKNOWN_COUNTRY: CountryMetadataEntry = CountryMetadataEntry {
    iso_code: "N/A",
    coordinates: None,
    capital: None,
    currency: None,
    language: None,
    population: None,
};

static COUNTRY_METADATA: LazyLock<HashMap<u16, CountryMetadataEntry>> = LazyLock::new(|| {
    HashMap::from([
        (
            1,
            CountryMetadataEntry {
                iso_code: "US/CA",
                coordinates: Some(
                    "Lat: 39.8283, Lng: -98.5795 (US) / Lat: 56.1304, Lng: -106.3468 (CA)",
                ),
                capital: Some("Washington D.C. (US) / Ottawa (CA)"),
                currency: Some("USD / CAD"),
                language: Some("Inglés / Francés"),
                population: Some("331M (US) / 38M (CA)"),
            },
        ),
        (
            7,
            CountryMetadataEntry {
                iso_code: "RU",
                coordinates: Some("Lat: 61.5240, Lng: 105.3188"),
                capital: Some("Moscú"),
                currency: Some("RUB (Rublo)"),
                language: Some("Ruso"),
                population: Some("146.7M"),
            },
        ),
        (
            33,
            CountryMetadataEntry {
                iso_code: "FR",
                coordinates: Some("Lat: 46.2276, Lng: 2.2137"),
                capital: Some("París"),
                currency: Some("EUR (Euro)"),
                language: Some("Francés"),
                population: Some("67.4M"),
            },
        ),
        (
            34,
            CountryMetadataEntry {
                iso_code: "ES",
                coordinates: Some("Lat: 40.4637, Lng: -3.7492"),
                capital: Some("Madrid"),
                currency: Some("EUR (Euro)"),
                language: Some("Español"),
                population: Some("47.4M"),
            },
        ),
        (
            39,
            CountryMetadataEntry {
                iso_code: "IT",
                coordinates: Some("Lat: 41.8719, Lng: 12.5674"),
                capital: Some("Roma"),
                currency: Some("EUR (Euro)"),
                language: Some("Italiano"),
                population: Some("60.4M"),
            },
        ),
        (
            44,
            CountryMetadataEntry {
                iso_code: "GB",
                coordinates: Some("Lat: 55.3781, Lng: -3.4360"),
                capital: Some("Londres"),
                currency: Some("GBP (Libra Esterlina)"),
                language: Some("Inglés"),
                population: Some("67.9M"),
            },
        ),
        (
            49,
            CountryMetadataEntry {
                iso_code: "DE",
                coordinates: Some("Lat: 51.1657, Lng: 10.4515"),
                capital: Some("Berlín"),
                currency: Some("EUR (Euro)"),
                language: Some("Alemán"),
                population: Some("83.2M"),
            },
        ),
        (
            52,
            CountryMetadataEntry {
                iso_code: "MX",
                coordinates: Some("Lat: 23.6345, Lng: -102.5528"),
                capital: Some("Ciudad de México"),
                currency: Some("MXN (Peso Mexicano)"),
                language: Some("Español"),
                population: Some("128.9M"),
            },
        ),
        (
            54,
            CountryMetadataEntry {
                iso_code: "AR",
                coordinates: Some("Lat: -38.4161, Lng: -63.6167"),
                capital: Some("Buenos Aires"),
                currency: Some("ARS (Peso Argentino)"),
                language: Some("Español"),
                population: Some("45.4M"),
            },
        ),
        (
            55,
            CountryMetadataEntry {
                iso_code: "BR",
                coordinates: Some("Lat: -14.2350, Lng: -51.9253"),
                capital: Some("Brasília"),
                currency: Some("BRL (Real)"),
                language: Some("Portugués"),
                population: Some("215.3M"),
            },
        ),
        (
            61,
            CountryMetadataEntry {
                iso_code: "AU",
                coordinates: Some("Lat: -25.2744, Lng: 133.7751"),
                capital: Some("Canberra"),
                currency: Some("AUD (Dólar Australiano)"),
                language: Some("Inglés"),
                population: Some("25.7M"),
            },
        ),
        (
            81,
            CountryMetadataEntry {
                iso_code: "JP",
                coordinates: Some("Lat: 36.2048, Lng: 138.2529"),
                capital: Some("Tokio"),
                currency: Some("JPY (Yen)"),
                language: Some("Japonés"),
                population: Some("125.8M"),
            },
        ),
        (
            86,
            CountryMetadataEntry {
                iso_code: "CN",
                coordinates: Some("Lat: 35.8617, Lng: 104.1954"),
                capital: Some("Beijing"),
                currency: Some("CNY (Yuan)"),
                language: Some("Chino Mandarín"),
                population: Some("1.4B"),
            },
        ),
        (
            91,
            CountryMetadataEntry {
                iso_code: "IN",
                coordinates: Some("Lat: 20.5937, Lng: 78.9629"),
                capital: Some("Nueva Delhi"),
                currency: Some("INR (Rupia)"),
                language: Some("Hindi/Inglés"),
                population: Some("1.38B"),
            },
        ),
    ])
});

/// Ordered label/value facts describing one regional numbering plan.
pub type RegionalPlan = &'static [(&'static str, &'static str)];

const NANP_PLAN: RegionalPlan = &[
    ("Plan de numeración", "NANP (North American Numbering Plan)"),
    ("Formato típico", "NXX-NXX-XXXX"),
    ("Longitud", "10 dígitos (sin código de país)"),
    ("Área de cobertura", "Estados Unidos, Canadá, y territorios"),
];

const SPAIN_PLAN: RegionalPlan = &[
    ("Plan de numeración", "Plan Nacional de Numeración de España"),
    ("Formato típico", "9XX XXX XXX"),
    ("Longitud", "9 dígitos"),
    ("Prefijos móviles", "6XX, 7XX"),
];

const MEXICO_PLAN: RegionalPlan = &[
    ("Plan de numeración", "Plan de Numeración de México"),
    ("Formato típico", "XX XXXX XXXX"),
    ("Longitud", "10 dígitos"),
    ("Área de cobertura", "República Mexicana"),
];

static REGIONAL_PLANS: LazyLock<HashMap<u16, RegionalPlan>> =
    LazyLock::new(|| HashMap::from([(1, NANP_PLAN), (34, SPAIN_PLAN), (52, MEXICO_PLAN)]));

/// Looks up the metadata entry for a calling code.
///
/// Total function: codes without coverage return the [`UNKNOWN_COUNTRY`]
/// sentinel (ISO code "N/A", everything else absent).
pub fn country_metadata(calling_code: u16) -> &'static CountryMetadataEntry {
    COUNTRY_METADATA
        .get(&calling_code)
        .unwrap_or(&UNKNOWN_COUNTRY)
}

/// Looks up numbering-plan facts for a calling code.
///
/// Only a handful of plans have entries; absence is an expected state and
/// the caller simply omits the corresponding report section.
pub fn regional_plan(calling_code: u16) -> Option<RegionalPlan> {
    REGIONAL_PLANS.get(&calling_code).copied()
}
