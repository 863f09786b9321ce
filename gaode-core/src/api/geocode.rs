//! City-name resolution via the Amap geocoding endpoint.

use serde::Deserialize;

use super::{GaodeClient, rejected};
use crate::GaodeError;

#[derive(Debug, Deserialize)]
struct GeoResponse {
    status: String,
    info: Option<String>,
    count: Option<String>,
    #[serde(default)]
    geocodes: Vec<Geocode>,
}

#[derive(Debug, Deserialize)]
struct Geocode {
    adcode: String,
}

impl GaodeClient {
    /// Resolve a city name to the `adcode` of the first matching region.
    ///
    /// Always takes the first match; the endpoint does its own ranking and
    /// no disambiguation happens here. A city that is empty after trimming
    /// matches nothing, without a network call.
    pub async fn geocode(&self, city: &str) -> Result<String, GaodeError> {
        if city.trim().is_empty() {
            return Err(GaodeError::NoMatch);
        }

        let response: GeoResponse = self
            .get_json(&self.geo_url, &[("address", city), ("key", self.api_key())])
            .await?;

        extract_adcode(response)
    }
}

fn extract_adcode(response: GeoResponse) -> Result<String, GaodeError> {
    if response.status != "1" {
        return Err(rejected(response.info));
    }

    // `count` comes back as a decimal string; anything absent, non-numeric,
    // or zero means the geocoder found no region.
    let matched = response
        .count
        .as_deref()
        .and_then(|count| count.parse::<u64>().ok())
        .unwrap_or(0);
    if matched == 0 {
        return Err(GaodeError::NoMatch);
    }

    response
        .geocodes
        .into_iter()
        .next()
        .map(|geocode| geocode.adcode)
        .ok_or(GaodeError::NoMatch)
}
