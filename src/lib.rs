//! Weather dashboard backed by Open-Meteo.
//!
//! Resolves a typed city or a clicked coordinate, fetches current conditions or
//! an hourly forecast, and reshapes the response into a card or a table. The
//! binary serves the pipeline as MCP tools over stdio.

pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatters;
pub mod models;
pub mod pipeline;
pub mod service;
pub mod shaper;

pub use client::OpenMeteoClient;
pub use config::ClientConfig;
pub use error::WeatherError;
pub use models::{ForecastMode, ForecastResult, Location, Variable, VariableSelection};
pub use pipeline::{Dashboard, DashboardReport, DashboardRequest, LocationQuery};
pub use service::WeatherDashboard;
