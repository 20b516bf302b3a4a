//! Blocking client for the Yahoo! JAPAN altitude API.
//!
//! # References
//!
//! 1. [getAltitude](https://developer.yahoo.co.jp/webapi/map/openlocalplatform/v1/altitude.html)

mod error;

pub use crate::error::ClientError;
use log::trace;
use serde::Deserialize;
use slope::{geo::geometry::Coord, AltitudeError, AltitudeSource};
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://map.yahooapis.jp/alt/V1/getAltitude";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Yahoo! JAPAN application id.
    pub appid: String,

    /// Altitude API URL.
    pub endpoint: String,

    /// Per-request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Returns a config for `appid` using the public endpoint.
    pub fn new(appid: impl Into<String>) -> Self {
        Self {
            appid: appid.into(),
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

pub struct Client {
    config: ClientConfig,
    http: reqwest::blocking::Client,
}

impl Client {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { config, http })
    }

    /// Returns ground altitude in meters at `coord`.
    pub fn get(&self, coord: Coord<f64>) -> Result<f64, ClientError> {
        let coordinates = format!("{},{}", coord.x, coord.y);
        trace!("GET {} coordinates={coordinates}", self.config.endpoint);
        let response = self
            .http
            .get(&self.config.endpoint)
            .query(&[
                ("appid", self.config.appid.as_str()),
                ("coordinates", coordinates.as_str()),
                ("output", "json"),
            ])
            .send()?;
        let status = response.status().as_u16();
        let body = response.bytes()?;
        parse_response(status, &body)
    }
}

impl AltitudeSource for Client {
    fn altitude(&self, coord: Coord<f64>) -> Result<f64, AltitudeError> {
        Ok(self.get(coord)?)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Response {
    #[serde(default)]
    feature: Vec<Feature>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Feature {
    property: Property,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Property {
    altitude: f64,
}

/// Extracts the altitude from a raw API response.
fn parse_response(status: u16, body: &[u8]) -> Result<f64, ClientError> {
    match status {
        200 => {
            let response: Response = serde_json::from_slice(body)?;
            response
                .feature
                .first()
                .map(|feature| feature.property.altitude)
                .ok_or(ClientError::NoDataFound)
        }
        403 => Err(ClientError::InvalidAppId),
        other => Err(ClientError::Status(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_response, ClientConfig, ClientError, DEFAULT_ENDPOINT};
    use slope::AltitudeError;

    const ISE_RESPONSE: &str = r#"{
        "ResultInfo": {"Count": 1, "Total": 1, "Start": 1, "Status": 200},
        "Feature": [{
            "Geometry": {"Type": "point", "Coordinates": "136.582085,34.8503617"},
            "Property": {"Altitude": 12.3}
        }]
    }"#;

    #[test]
    fn test_parse_altitude() {
        assert_eq!(parse_response(200, ISE_RESPONSE.as_bytes()).unwrap(), 12.3);
    }

    #[test]
    fn test_parse_no_feature() {
        let body = br#"{"ResultInfo": {"Count": 0, "Total": 0, "Start": 1, "Status": 200}}"#;
        assert!(matches!(
            parse_response(200, body),
            Err(ClientError::NoDataFound)
        ));
        let body = br#"{"Feature": []}"#;
        assert!(matches!(
            parse_response(200, body),
            Err(ClientError::NoDataFound)
        ));
    }

    #[test]
    fn test_parse_status() {
        assert!(matches!(
            parse_response(403, b""),
            Err(ClientError::InvalidAppId)
        ));
        assert!(matches!(
            parse_response(500, b"oops"),
            Err(ClientError::Status(500))
        ));
        assert!(matches!(
            parse_response(200, b"<html>"),
            Err(ClientError::Json(_))
        ));
    }

    #[test]
    fn test_error_mapping() {
        assert_eq!(
            AltitudeError::from(ClientError::NoDataFound),
            AltitudeError::NoDataFound
        );
        assert_eq!(
            AltitudeError::from(ClientError::Status(503)),
            AltitudeError::Unavailable("unexpected HTTP status 503".into())
        );
    }

    #[test]
    fn test_config_defaults() {
        let config = ClientConfig::new("my-app-id");
        assert_eq!(config.appid, "my-app-id");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }
}
