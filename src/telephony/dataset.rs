//! Bundled Spanish-locale numbering-plan dataset.
//!
//! Numbering-plan engines ship their descriptive data (geocoding strings,
//! carrier ranges, timezone maps) alongside the parsing rules; the
//! `phonenumber` crate does not, so the engine adapter carries this
//! illustrative subset itself. Keys are ISO 3166-1 alpha-2 region codes,
//! carrier/type rules match on national-number prefixes in listed order.
//!
//! Coverage mirrors the country metadata table: the major calling codes
//! plus Canada. Adding regions is a content change only.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::NumberType;

/// Per-region descriptive data consulted after a successful parse.
struct RegionData {
    /// Country name in the tool's fixed Spanish locale.
    name: &'static str,
    /// Timezone identifiers covering the region.
    timezones: &'static [&'static str],
    /// National-number prefix → carrier name, first match wins.
    carriers: &'static [(&'static str, &'static str)],
    /// National-number prefix → service category, first match wins.
    type_rules: &'static [(&'static str, NumberType)],
    /// Category assigned when no prefix rule matches.
    default_type: NumberType,
}

// Toll-free and premium ranges are plan-wide in the NANP, so the US and
// Canada share one rule set. Carrier data is omitted there: number
// portability makes prefix-based attribution meaningless.
const NANP_TYPE_RULES: &[(&str, NumberType)] = &[
    ("800", NumberType::TollFree),
    ("833", NumberType::TollFree),
    ("844", NumberType::TollFree),
    ("855", NumberType::TollFree),
    ("866", NumberType::TollFree),
    ("877", NumberType::TollFree),
    ("888", NumberType::TollFree),
    ("900", NumberType::PremiumRate),
];

static REGIONS: LazyLock<HashMap<&'static str, RegionData>> = LazyLock::new(|| {
    HashMap::from([
        (
            "US",
            RegionData {
                name: "Estados Unidos",
                timezones: &[
                    "America/New_York",
                    "America/Chicago",
                    "America/Denver",
                    "America/Los_Angeles",
                ],
                carriers: &[],
                type_rules: NANP_TYPE_RULES,
                default_type: NumberType::FixedLineOrMobile,
            },
        ),
        (
            "CA",
            RegionData {
                name: "Canadá",
                timezones: &["America/Toronto", "America/Vancouver"],
                carriers: &[],
                type_rules: NANP_TYPE_RULES,
                default_type: NumberType::FixedLineOrMobile,
            },
        ),
        (
            "ES",
            RegionData {
                name: "España",
                timezones: &["Europe/Madrid"],
                carriers: &[
                    ("60", "Movistar"),
                    ("62", "Orange"),
                    ("63", "Movistar"),
                    ("65", "Vodafone"),
                    ("66", "Vodafone"),
                    ("67", "Orange"),
                    ("69", "Movistar"),
                    ("71", "Yoigo"),
                ],
                type_rules: &[
                    ("900", NumberType::TollFree),
                    ("800", NumberType::TollFree),
                    ("803", NumberType::PremiumRate),
                    ("806", NumberType::PremiumRate),
                    ("807", NumberType::PremiumRate),
                    ("901", NumberType::SharedCost),
                    ("902", NumberType::SharedCost),
                    ("70", NumberType::PersonalNumber),
                    ("6", NumberType::Mobile),
                    ("7", NumberType::Mobile),
                    ("8", NumberType::FixedLine),
                    ("9", NumberType::FixedLine),
                ],
                default_type: NumberType::Unknown,
            },
        ),
        (
            "MX",
            RegionData {
                name: "México",
                timezones: &["America/Mexico_City"],
                carriers: &[("55", "Telcel")],
                type_rules: &[("800", NumberType::TollFree)],
                // Mexican geographic and mobile ranges merged in 2019
                default_type: NumberType::FixedLineOrMobile,
            },
        ),
        (
            "FR",
            RegionData {
                name: "Francia",
                timezones: &["Europe/Paris"],
                carriers: &[("6", "Orange"), ("7", "Free Mobile")],
                type_rules: &[
                    ("80", NumberType::TollFree),
                    ("89", NumberType::PremiumRate),
                    ("6", NumberType::Mobile),
                    ("7", NumberType::Mobile),
                    ("9", NumberType::Voip),
                    ("1", NumberType::FixedLine),
                    ("2", NumberType::FixedLine),
                    ("3", NumberType::FixedLine),
                    ("4", NumberType::FixedLine),
                    ("5", NumberType::FixedLine),
                ],
                default_type: NumberType::Unknown,
            },
        ),
        (
            "DE",
            RegionData {
                name: "Alemania",
                timezones: &["Europe/Berlin"],
                carriers: &[("15", "Telekom"), ("16", "Vodafone"), ("17", "O2")],
                type_rules: &[
                    ("800", NumberType::TollFree),
                    ("900", NumberType::PremiumRate),
                    ("15", NumberType::Mobile),
                    ("16", NumberType::Mobile),
                    ("17", NumberType::Mobile),
                ],
                default_type: NumberType::FixedLine,
            },
        ),
        (
            "GB",
            RegionData {
                name: "Reino Unido",
                timezones: &["Europe/London"],
                carriers: &[
                    ("74", "Vodafone"),
                    ("75", "Three"),
                    ("77", "O2"),
                    ("78", "EE"),
                ],
                type_rules: &[
                    ("800", NumberType::TollFree),
                    ("808", NumberType::TollFree),
                    ("845", NumberType::SharedCost),
                    ("70", NumberType::PersonalNumber),
                    ("76", NumberType::Pager),
                    ("7", NumberType::Mobile),
                    ("56", NumberType::Voip),
                    ("9", NumberType::PremiumRate),
                    ("1", NumberType::FixedLine),
                    ("2", NumberType::FixedLine),
                ],
                default_type: NumberType::Unknown,
            },
        ),
        (
            "IT",
            RegionData {
                name: "Italia",
                timezones: &["Europe/Rome"],
                carriers: &[("32", "Wind Tre"), ("33", "TIM"), ("34", "Vodafone")],
                // Italian fixed numbers keep their leading zero in the
                // national significant number
                type_rules: &[
                    ("800", NumberType::TollFree),
                    ("899", NumberType::PremiumRate),
                    ("3", NumberType::Mobile),
                    ("0", NumberType::FixedLine),
                ],
                default_type: NumberType::Unknown,
            },
        ),
        (
            "JP",
            RegionData {
                name: "Japón",
                timezones: &["Asia/Tokyo"],
                carriers: &[("70", "SoftBank"), ("80", "au"), ("90", "NTT Docomo")],
                type_rules: &[
                    ("120", NumberType::TollFree),
                    ("70", NumberType::Mobile),
                    ("80", NumberType::Mobile),
                    ("90", NumberType::Mobile),
                    ("50", NumberType::Voip),
                ],
                default_type: NumberType::FixedLine,
            },
        ),
        (
            "CN",
            RegionData {
                name: "China",
                timezones: &["Asia/Shanghai"],
                carriers: &[
                    ("13", "China Mobile"),
                    ("15", "China Mobile"),
                    ("18", "China Telecom"),
                ],
                type_rules: &[
                    ("400", NumberType::SharedCost),
                    ("800", NumberType::TollFree),
                    ("13", NumberType::Mobile),
                    ("14", NumberType::Mobile),
                    ("15", NumberType::Mobile),
                    ("16", NumberType::Mobile),
                    ("17", NumberType::Mobile),
                    ("18", NumberType::Mobile),
                    ("19", NumberType::Mobile),
                ],
                default_type: NumberType::FixedLine,
            },
        ),
        (
            "BR",
            RegionData {
                name: "Brasil",
                timezones: &["America/Sao_Paulo"],
                carriers: &[("119", "Vivo"), ("219", "Claro")],
                type_rules: &[("800", NumberType::TollFree)],
                default_type: NumberType::FixedLineOrMobile,
            },
        ),
        (
            "AR",
            RegionData {
                name: "Argentina",
                timezones: &["America/Argentina/Buenos_Aires"],
                carriers: &[("911", "Movistar"), ("93", "Claro")],
                // Argentine mobiles carry a leading 9 after the country code
                type_rules: &[
                    ("800", NumberType::TollFree),
                    ("9", NumberType::Mobile),
                ],
                default_type: NumberType::FixedLine,
            },
        ),
        (
            "IN",
            RegionData {
                name: "India",
                timezones: &["Asia/Kolkata"],
                carriers: &[
                    ("70", "Jio"),
                    ("90", "Airtel"),
                    ("98", "Airtel"),
                    ("99", "Vodafone Idea"),
                ],
                type_rules: &[
                    ("1800", NumberType::TollFree),
                    ("6", NumberType::Mobile),
                    ("7", NumberType::Mobile),
                    ("8", NumberType::Mobile),
                    ("9", NumberType::Mobile),
                ],
                default_type: NumberType::FixedLine,
            },
        ),
        (
            "RU",
            RegionData {
                name: "Rusia",
                timezones: &["Europe/Moscow"],
                carriers: &[
                    ("90", "MTS"),
                    ("91", "MegaFon"),
                    ("92", "MegaFon"),
                    ("96", "Beeline"),
                ],
                type_rules: &[("800", NumberType::TollFree), ("9", NumberType::Mobile)],
                default_type: NumberType::FixedLine,
            },
        ),
        (
            "AU",
            RegionData {
                name: "Australia",
                timezones: &["Australia/Sydney"],
                carriers: &[("4", "Telstra")],
                type_rules: &[
                    ("1800", NumberType::TollFree),
                    ("190", NumberType::PremiumRate),
                    ("13", NumberType::SharedCost),
                    ("4", NumberType::Mobile),
                    ("2", NumberType::FixedLine),
                    ("3", NumberType::FixedLine),
                    ("7", NumberType::FixedLine),
                    ("8", NumberType::FixedLine),
                ],
                default_type: NumberType::Unknown,
            },
        ),
    ])
});

/// Spanish name of a region, when covered by the dataset.
pub(crate) fn region_name(region: &str) -> Option<&'static str> {
    REGIONS.get(region).map(|data| data.name)
}

/// Timezone identifiers for a region; empty when uncovered.
pub(crate) fn timezones(region: &str) -> &'static [&'static str] {
    REGIONS.get(region).map(|data| data.timezones).unwrap_or(&[])
}

/// Carrier assigned to the national number's range, when known.
pub(crate) fn carrier_for(region: &str, national_number: &str) -> Option<&'static str> {
    let data = REGIONS.get(region)?;
    data.carriers
        .iter()
        .find(|(prefix, _)| national_number.starts_with(prefix))
        .map(|(_, carrier)| *carrier)
}

/// Classifies a national number by its region's prefix rules.
pub(crate) fn classify(region: &str, national_number: &str) -> NumberType {
    let Some(data) = REGIONS.get(region) else {
        return NumberType::Unknown;
    };
    data.type_rules
        .iter()
        .find(|(prefix, _)| national_number.starts_with(prefix))
        .map(|(_, number_type)| *number_type)
        .unwrap_or(data.default_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_names_are_spanish() {
        assert_eq!(region_name("ES"), Some("España"));
        assert_eq!(region_name("US"), Some("Estados Unidos"));
        assert_eq!(region_name("DE"), Some("Alemania"));
        assert_eq!(region_name("ZZ"), None);
    }

    #[test]
    fn test_spanish_classification() {
        assert_eq!(classify("ES", "912345678"), NumberType::FixedLine);
        assert_eq!(classify("ES", "655555555"), NumberType::Mobile);
        assert_eq!(classify("ES", "900123456"), NumberType::TollFree);
        assert_eq!(classify("ES", "902123456"), NumberType::SharedCost);
    }

    #[test]
    fn test_rule_order_beats_shorter_prefixes() {
        // "70" (personal) must be checked before the generic "7" mobile rule
        assert_eq!(classify("ES", "700123456"), NumberType::PersonalNumber);
        assert_eq!(classify("ES", "712345678"), NumberType::Mobile);
        // Same story for the British pager range inside the mobile block
        assert_eq!(classify("GB", "7624123456"), NumberType::Pager);
        assert_eq!(classify("GB", "7400123456"), NumberType::Mobile);
    }

    #[test]
    fn test_nanp_shared_rules() {
        assert_eq!(classify("US", "8005551234"), NumberType::TollFree);
        assert_eq!(classify("CA", "8005551234"), NumberType::TollFree);
        assert_eq!(classify("US", "6502530000"), NumberType::FixedLineOrMobile);
    }

    #[test]
    fn test_unknown_region_classifies_unknown() {
        assert_eq!(classify("ZZ", "123456789"), NumberType::Unknown);
        assert!(timezones("ZZ").is_empty());
        assert_eq!(carrier_for("ZZ", "123456789"), None);
    }

    #[test]
    fn test_carrier_lookup() {
        assert_eq!(carrier_for("ES", "655555555"), Some("Vodafone"));
        assert_eq!(carrier_for("ES", "622000000"), Some("Orange"));
        // Fixed lines carry no prefix entry
        assert_eq!(carrier_for("ES", "912345678"), None);
        // NANP portability: no carrier data at all
        assert_eq!(carrier_for("US", "6502530000"), None);
    }

    #[test]
    fn test_timezones_cover_major_regions() {
        assert_eq!(timezones("ES"), &["Europe/Madrid"]);
        assert!(timezones("US").contains(&"America/New_York"));
    }
}
