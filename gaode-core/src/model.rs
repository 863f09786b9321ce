use serde::{Deserialize, Serialize};

/// Requested level of detail for a weather lookup.
///
/// Maps onto the Amap `extensions` query parameter: `base` returns current
/// conditions only, `all` returns today plus a multi-day forecast.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetailLevel {
    #[default]
    #[serde(rename = "base")]
    Current,

    #[serde(rename = "all")]
    Forecast,
}

impl DetailLevel {
    /// Wire value of the `extensions` parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            DetailLevel::Current => "base",
            DetailLevel::Forecast => "all",
        }
    }
}

impl TryFrom<&str> for DetailLevel {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "base" => Ok(DetailLevel::Current),
            "all" => Ok(DetailLevel::Forecast),
            _ => Err(anyhow::anyhow!(
                "Unknown detail level '{value}'. Supported values: base, all."
            )),
        }
    }
}

/// Current observed conditions for one region, as reported in the weather
/// endpoint's `lives` list.
///
/// Every value is a pass-through string; no unit conversion happens anywhere
/// in this crate. The `*_float` variants are only present when the upstream
/// response carries them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub province: String,
    pub city: String,
    pub adcode: String,
    pub weather: String,
    pub temperature: String,
    pub winddirection: String,
    pub windpower: String,
    pub humidity: String,
    pub reporttime: String,
    #[serde(default)]
    pub temperature_float: Option<String>,
    #[serde(default)]
    pub humidity_float: Option<String>,
}

/// One day of a multi-day forecast: a single `casts` entry, pass-through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: String,
    pub week: String,
    pub dayweather: String,
    pub nightweather: String,
    pub daytemp: String,
    pub nighttemp: String,
    pub daywind: String,
    pub nightwind: String,
    pub daypower: String,
    pub nightpower: String,
    #[serde(default)]
    pub daytemp_float: Option<String>,
    #[serde(default)]
    pub nighttemp_float: Option<String>,
    #[serde(default)]
    pub humidity: Option<String>,
    #[serde(default)]
    pub humidity_float: Option<String>,
}

/// A forecast lookup result: region metadata plus the day-side fields of the
/// first cast promoted to the top level, with the complete ordered cast list
/// nested under `forecasts`.
///
/// The first cast appears both promoted and as `forecasts[0]`. Callers depend
/// on that exact shape, so it is kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForecastReport {
    pub province: String,
    pub city: String,
    pub adcode: String,
    pub reporttime: String,
    pub weather: String,
    pub temperature: String,
    pub winddirection: String,
    pub windpower: String,
    pub humidity: Option<String>,
    pub temperature_float: Option<String>,
    pub humidity_float: Option<String>,
    pub forecasts: Vec<ForecastDay>,
}

/// Normalized outcome of the weather stage.
///
/// `Empty` serializes to `{}` and is what the tool emits inside the success
/// envelope when the weather fetch fails after a successful geocode.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum WeatherResult {
    Current(CurrentConditions),
    Forecast(ForecastReport),
    Empty(EmptyResult),
}

/// Serializes to an empty JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EmptyResult {}

/// Parameters the host passes for one invocation.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolParameters {
    /// City name, free text.
    pub city: String,

    /// Detail level; defaults to current conditions when absent.
    #[serde(default)]
    pub extension: DetailLevel,
}

/// The single message emitted per invocation: either a result payload or an
/// error entry, never both.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ToolOutput {
    Result { result: WeatherResult },
    Error { error: String },
}

impl ToolOutput {
    pub fn result(result: WeatherResult) -> Self {
        ToolOutput::Result { result }
    }

    pub fn error(message: impl Into<String>) -> Self {
        ToolOutput::Error { error: message.into() }
    }

    /// Success envelope with an empty result body.
    pub fn empty_result() -> Self {
        ToolOutput::Result { result: WeatherResult::Empty(EmptyResult::default()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_level_as_str_roundtrip() {
        for level in [DetailLevel::Current, DetailLevel::Forecast] {
            let parsed = DetailLevel::try_from(level.as_str()).expect("roundtrip should succeed");
            assert_eq!(level, parsed);
        }
    }

    #[test]
    fn unknown_detail_level_error() {
        let err = DetailLevel::try_from("hourly").unwrap_err();
        assert!(err.to_string().contains("Unknown detail level"));
    }

    #[test]
    fn extension_defaults_to_current() {
        let params: ToolParameters = serde_json::from_str(r#"{"city": "西安"}"#).unwrap();
        assert_eq!(params.city, "西安");
        assert_eq!(params.extension, DetailLevel::Current);
    }

    #[test]
    fn extension_accepts_wire_values() {
        let params: ToolParameters =
            serde_json::from_str(r#"{"city": "西安", "extension": "all"}"#).unwrap();
        assert_eq!(params.extension, DetailLevel::Forecast);
    }

    #[test]
    fn error_output_is_single_error_entry() {
        let output = ToolOutput::error("City code retrieval failed");
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json, serde_json::json!({"error": "City code retrieval failed"}));
    }

    #[test]
    fn empty_result_output_is_empty_object() {
        let output = ToolOutput::empty_result();
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json, serde_json::json!({"result": {}}));
    }

    #[test]
    fn forecast_report_nests_casts_under_forecasts() {
        let day = ForecastDay {
            date: "2024-01-01".to_string(),
            week: "1".to_string(),
            dayweather: "晴".to_string(),
            nightweather: "多云".to_string(),
            daytemp: "25".to_string(),
            nighttemp: "12".to_string(),
            daywind: "东北".to_string(),
            nightwind: "东北".to_string(),
            daypower: "1-3".to_string(),
            nightpower: "1-3".to_string(),
            daytemp_float: Some("25.0".to_string()),
            nighttemp_float: Some("12.0".to_string()),
            humidity: None,
            humidity_float: None,
        };
        let report = ForecastReport {
            province: "陕西".to_string(),
            city: "西安市".to_string(),
            adcode: "610100".to_string(),
            reporttime: "2024-01-01 12:00:00".to_string(),
            weather: day.dayweather.clone(),
            temperature: day.daytemp.clone(),
            winddirection: day.daywind.clone(),
            windpower: day.daypower.clone(),
            humidity: None,
            temperature_float: day.daytemp_float.clone(),
            humidity_float: None,
            forecasts: vec![day],
        };

        let json = serde_json::to_value(ToolOutput::result(WeatherResult::Forecast(report)))
            .unwrap();
        let result = &json["result"];

        // Day-side fields of the first cast appear both promoted and nested.
        assert_eq!(result["weather"], "晴");
        assert_eq!(result["temperature"], "25");
        assert_eq!(result["forecasts"][0]["dayweather"], "晴");
        assert_eq!(result["forecasts"].as_array().unwrap().len(), 1);
        assert_eq!(result["province"], "陕西");
    }
}
