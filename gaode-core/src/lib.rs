//! Core library for the Gaode (Amap) city weather tool.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - A typed client for the Amap geocoding and weather endpoints
//! - The tool surface: one invocation, one output message
//!
//! It is used by `gaode-cli`, but can also be embedded by other hosts.

pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod tool;

pub use api::{GaodeApi, GaodeClient};
pub use config::{Config, Endpoints};
pub use error::GaodeError;
pub use model::{
    CurrentConditions, DetailLevel, ForecastDay, ForecastReport, ToolOutput, ToolParameters,
    WeatherResult,
};
pub use tool::GaodeWeatherTool;
