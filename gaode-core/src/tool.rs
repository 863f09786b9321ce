//! Tool orchestration: one invocation runs the geocode stage, then the
//! weather stage, and emits exactly one output message.

use tracing::warn;

use crate::{
    Config, GaodeError,
    api::{GaodeApi, GaodeClient},
    model::{DetailLevel, ToolOutput, ToolParameters},
};

/// Fixed sample city used to confirm a credential is accepted.
const VALIDATION_CITY: &str = "西安";

/// City weather lookup backed by the Gaode geocoding and weather endpoints.
///
/// Stateless across invocations: each call resolves and fetches fresh, and
/// nothing is cached.
#[derive(Debug)]
pub struct GaodeWeatherTool {
    api: Box<dyn GaodeApi>,
}

impl GaodeWeatherTool {
    pub fn new(api: Box<dyn GaodeApi>) -> Self {
        Self { api }
    }

    /// Build the tool from configuration.
    pub fn from_config(config: &Config) -> Result<Self, GaodeError> {
        Ok(Self::new(Box::new(GaodeClient::from_config(config)?)))
    }

    /// Run one lookup.
    ///
    /// Always produces exactly one message. Stage failures are logged and
    /// folded into the message, never raised: a geocode failure becomes an
    /// error entry and the weather endpoint is not called; a weather failure
    /// after a successful geocode becomes an empty result inside the success
    /// envelope. Callers depend on that second shape, so it is kept as-is.
    pub async fn invoke(&self, params: &ToolParameters) -> ToolOutput {
        let adcode = match self.api.resolve_adcode(&params.city).await {
            Ok(adcode) => adcode,
            Err(err) => {
                warn!(city = %params.city, %err, "city code resolution failed");
                return ToolOutput::error("City code retrieval failed");
            }
        };

        match self.api.fetch_weather(&adcode, params.extension).await {
            Ok(result) => ToolOutput::result(result),
            Err(err) => {
                warn!(%adcode, %err, "weather fetch failed");
                ToolOutput::empty_result()
            }
        }
    }

    /// Confirm the configured credential is accepted by running one live
    /// lookup for a fixed sample city.
    pub async fn validate_credentials(&self) -> Result<(), GaodeError> {
        let params = ToolParameters {
            city: VALIDATION_CITY.to_string(),
            extension: DetailLevel::Current,
        };

        match self.invoke(&params).await {
            ToolOutput::Error { error } => Err(GaodeError::Rejected(error)),
            ToolOutput::Result { .. } => Ok(()),
        }
    }
}
