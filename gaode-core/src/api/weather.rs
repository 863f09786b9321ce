//! Current conditions and multi-day forecast via the Amap weather endpoint.

use serde::Deserialize;

use super::{GaodeClient, rejected};
use crate::{
    GaodeError,
    model::{CurrentConditions, DetailLevel, ForecastDay, ForecastReport},
};

#[derive(Debug, Deserialize)]
struct LiveResponse {
    status: String,
    info: Option<String>,
    #[serde(default)]
    lives: Vec<CurrentConditions>,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    status: String,
    info: Option<String>,
    #[serde(default)]
    forecasts: Vec<RegionForecast>,
}

/// One region's forecast block: metadata plus the ordered cast list.
#[derive(Debug, Deserialize)]
struct RegionForecast {
    province: String,
    city: String,
    adcode: String,
    reporttime: String,
    #[serde(default)]
    casts: Vec<ForecastDay>,
}

impl GaodeClient {
    /// Fetch current conditions for an administrative code.
    pub async fn fetch_current(&self, adcode: &str) -> Result<CurrentConditions, GaodeError> {
        let response: LiveResponse = self
            .get_json(
                &self.weather_url,
                &[
                    ("city", adcode),
                    ("key", self.api_key()),
                    ("extensions", DetailLevel::Current.as_str()),
                ],
            )
            .await?;

        extract_current(response)
    }

    /// Fetch today plus the multi-day forecast for an administrative code.
    pub async fn fetch_forecast(&self, adcode: &str) -> Result<ForecastReport, GaodeError> {
        let response: ForecastResponse = self
            .get_json(
                &self.weather_url,
                &[
                    ("city", adcode),
                    ("key", self.api_key()),
                    ("extensions", DetailLevel::Forecast.as_str()),
                ],
            )
            .await?;

        extract_forecast(response)
    }
}

fn extract_current(response: LiveResponse) -> Result<CurrentConditions, GaodeError> {
    if response.status != "1" {
        return Err(rejected(response.info));
    }

    // First entry corresponds to the requested region; no transformation.
    response.lives.into_iter().next().ok_or(GaodeError::NoData)
}

fn extract_forecast(response: ForecastResponse) -> Result<ForecastReport, GaodeError> {
    if response.status != "1" {
        return Err(rejected(response.info));
    }

    let region = response.forecasts.into_iter().next().ok_or(GaodeError::NoData)?;

    // The today projection needs a first cast; a region with none has no
    // usable data at this detail level.
    let today = region.casts.first().cloned().ok_or(GaodeError::NoData)?;

    Ok(ForecastReport {
        province: region.province,
        city: region.city,
        adcode: region.adcode,
        reporttime: region.reporttime,
        weather: today.dayweather,
        temperature: today.daytemp,
        winddirection: today.daywind,
        windpower: today.daypower,
        humidity: today.humidity,
        temperature_float: today.daytemp_float,
        humidity_float: today.humidity_float,
        forecasts: region.casts,
    })
}
