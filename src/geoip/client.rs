//! Blocking HTTP client for the ipapi.co geolocation service.

use log::{debug, warn};
use reqwest::blocking::Client;

use super::{GeoIpProvider, IpMetadata};
use crate::config::{GEOIP_ENDPOINT, GEOIP_TIMEOUT, USER_AGENT};
use crate::error::{InitError, LookupError};

/// Client for the ipapi.co JSON endpoint.
///
/// One instance is built at startup and reused for every lookup. Each
/// request blocks until the response arrives or the configured timeout
/// elapses; the response handle is dropped on every path, so no
/// connection outlives a lookup.
#[derive(Debug, Clone)]
pub struct IpapiClient {
    http: Client,
    base_url: String,
}

impl IpapiClient {
    /// Builds a client against the production endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`InitError::HttpClientError`] when the underlying HTTP
    /// client cannot be constructed.
    pub fn new() -> Result<Self, InitError> {
        Self::with_base_url(GEOIP_ENDPOINT)
    }

    /// Builds a client against an alternate endpoint base.
    ///
    /// Lookup URLs are formed as `{base}/{ip}/json/`.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, InitError> {
        let http = Client::builder()
            .timeout(GEOIP_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(IpapiClient {
            http,
            base_url: base_url.into(),
        })
    }
}

impl GeoIpProvider for IpapiClient {
    fn lookup(&self, ip: &str) -> Result<IpMetadata, LookupError> {
        let url = format!("{}/{}/json/", self.base_url, ip);
        debug!("GET {}", url);

        let response = self.http.get(&url).send()?;
        let status = response.status();
        if !status.is_success() {
            warn!("Geolocation lookup for {} answered HTTP {}", ip, status);
            return Err(LookupError::Provider {
                status: status.as_u16(),
            });
        }

        // A transport error was already ruled out above, so a body that
        // fails to decode is a provider-internal fault, not a connection one
        response
            .json::<IpMetadata>()
            .map_err(|error| LookupError::Unexpected(error.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_successful_lookup() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/8.8.8.8/json/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"ip":"8.8.8.8","country_name":"United States","org":"Google LLC"}"#)
            .create();

        let client = IpapiClient::with_base_url(server.url()).unwrap();
        let metadata = client.lookup("8.8.8.8").unwrap();

        assert_eq!(metadata.ip.as_deref(), Some("8.8.8.8"));
        assert_eq!(metadata.country_name.as_deref(), Some("United States"));
        assert_eq!(metadata.org.as_deref(), Some("Google LLC"));
        mock.assert();
    }

    #[test]
    fn test_non_success_status_is_provider_error() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/10.0.0.1/json/")
            .with_status(429)
            .create();

        let client = IpapiClient::with_base_url(server.url()).unwrap();
        let error = client.lookup("10.0.0.1").unwrap_err();
        assert!(matches!(error, LookupError::Provider { status: 429 }));
    }

    #[test]
    fn test_undecodable_body_is_unexpected_error() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/8.8.8.8/json/")
            .with_status(200)
            .with_body("not json at all")
            .create();

        let client = IpapiClient::with_base_url(server.url()).unwrap();
        let error = client.lookup("8.8.8.8").unwrap_err();
        assert!(matches!(error, LookupError::Unexpected(_)));
    }

    #[test]
    fn test_unreachable_service_is_connection_error() {
        // Nothing listens on the discard port, so the connection attempt
        // fails fast instead of waiting out the timeout
        let client = IpapiClient::with_base_url("http://127.0.0.1:9").unwrap();
        let error = client.lookup("8.8.8.8").unwrap_err();
        assert!(matches!(error, LookupError::Connection(_)));
    }
}
