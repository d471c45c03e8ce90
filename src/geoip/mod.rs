//! IP geolocation capability contract and response model.
//!
//! The IP report builder consumes geolocation through the
//! [`GeoIpProvider`] trait; the production implementation in this module
//! talks to ipapi.co over blocking HTTP.

mod client;

pub use client::IpapiClient;

use serde::Deserialize;

use crate::error::LookupError;

/// Metadata the geolocation service reports for one address.
///
/// Every field is individually optional; presence varies per address and
/// the report builder omits what is absent. Unknown response keys are
/// ignored on deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IpMetadata {
    /// Echoed address.
    pub ip: Option<String>,
    /// Address family as reported, "IPv4" or "IPv6".
    pub version: Option<String>,
    /// City name.
    pub city: Option<String>,
    /// Region or state name.
    pub region: Option<String>,
    /// Country name in the provider's locale.
    pub country_name: Option<String>,
    /// ISO 3166-1 alpha-2 country code.
    pub country_code: Option<String>,
    /// Latitude in decimal degrees.
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees.
    pub longitude: Option<f64>,
    /// Postal code.
    pub postal: Option<String>,
    /// Organization or ISP operating the address.
    pub org: Option<String>,
    /// Autonomous system number, "AS"-prefixed.
    pub asn: Option<String>,
    /// IANA timezone name.
    pub timezone: Option<String>,
    /// UTC offset, e.g. "+0200".
    pub utc_offset: Option<String>,
    /// Comma-separated language tags.
    pub languages: Option<String>,
    /// ISO 4217 currency code.
    pub currency: Option<String>,
    /// Human-readable currency name.
    pub currency_name: Option<String>,
}

/// Capability contract over an IP geolocation service.
pub trait GeoIpProvider {
    /// Resolves metadata for one IP address.
    ///
    /// # Errors
    ///
    /// [`LookupError::Connection`] on transport failure (including the
    /// request timeout), [`LookupError::Provider`] on a non-success
    /// status, and [`LookupError::Unexpected`] when the response body
    /// cannot be decoded.
    fn lookup(&self, ip: &str) -> Result<IpMetadata, LookupError>;
}
