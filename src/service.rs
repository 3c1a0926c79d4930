use anyhow::Result;
use rmcp::{
    handler::server::{wrapper::Parameters, ServerHandler, tool::ToolRouter},
    model::{CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};
use std::sync::Arc;

use crate::client::OpenMeteoClient;
use crate::config::ClientConfig;
use crate::constants::DEFAULT_CITY;
use crate::error::WeatherError;
use crate::formatters::{format_report, format_variables};
use crate::models::{
    selection_or_default, ForecastMode, HourlyForecastRequest, ListVariablesRequest,
    ShowWeatherRequest,
};
use crate::pipeline::{Dashboard, DashboardReport, DashboardRequest, LocationQuery};

/// MCP front end for the weather dashboard
#[derive(Clone)]
pub struct WeatherDashboard {
    dashboard: Arc<Dashboard>,
    tool_router: ToolRouter<Self>,
}

impl WeatherDashboard {
    /// Creates a new dashboard service instance
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = OpenMeteoClient::new(config)?;

        Ok(Self {
            dashboard: Arc::new(Dashboard::new(client)),
            tool_router: Self::tool_router(),
        })
    }

    async fn run(&self, request: DashboardRequest) -> Result<DashboardReport, McpError> {
        self.dashboard.run(request).await.map_err(to_mcp_error)
    }
}

/// Input problems become invalid params with a corrective message
fn to_mcp_error(err: WeatherError) -> McpError {
    if err.is_user_correctable() {
        tracing::info!("Rejected request: {}", err);
        McpError::invalid_params(err.to_string(), None)
    } else {
        tracing::error!("Weather request failed: {}", err);
        McpError::internal_error(format!("Failed to fetch weather: {}", err), None)
    }
}

#[tool_handler]
impl ServerHandler for WeatherDashboard {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "mcp-weather-dashboard".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "A weather dashboard powered by the Open-Meteo API. \
                Look up current conditions by city name, or an hourly two-day forecast \
                by city name or coordinates."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl WeatherDashboard {
    /// Shows current conditions for a city
    #[tool(description = "Show current temperature, humidity and sky condition for a city (e.g., 'Seoul', 'Berlin'). Defaults to Seoul.")]
    pub async fn show_weather(
        &self,
        Parameters(request): Parameters<ShowWeatherRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Showing weather for city: {}", request.city);

        let report = self
            .run(DashboardRequest {
                location: LocationQuery::City(request.city),
                mode: ForecastMode::Current,
            })
            .await?;

        let formatted = format_report(&report);

        Ok(CallToolResult::success(vec![Content::text(formatted)]))
    }

    /// Shows a two-day hourly forecast for a city or a point
    #[tool(description = "Get a two-day hourly forecast. Provide either a city name or latitude and longitude (e.g., latitude: 37.57, longitude: 126.98), plus the variables to include (see list_variables). Defaults to temperature in Seoul.")]
    pub async fn hourly_forecast(
        &self,
        Parameters(request): Parameters<HourlyForecastRequest>,
    ) -> Result<CallToolResult, McpError> {
        let location = LocationQuery::from_parts(
            request.city,
            request.latitude,
            request.longitude,
            DEFAULT_CITY,
        )
        .map_err(to_mcp_error)?;
        tracing::info!(
            "Getting hourly forecast for {:?} with {} variables",
            location,
            request.variables.len()
        );

        let report = self
            .run(DashboardRequest {
                location,
                mode: ForecastMode::Hourly(selection_or_default(request.variables)),
            })
            .await?;

        let formatted = format_report(&report);

        Ok(CallToolResult::success(vec![Content::text(formatted)]))
    }

    /// Lists the selectable hourly variables
    #[tool(description = "List the variables that can be requested from hourly_forecast.")]
    pub async fn list_variables(
        &self,
        Parameters(_request): Parameters<ListVariablesRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(CallToolResult::success(vec![Content::text(format_variables())]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_user_errors_map_to_invalid_params() {
        let err = to_mcp_error(WeatherError::EmptyInput);
        assert_eq!(err.code, rmcp::model::ErrorCode::INVALID_PARAMS);
        assert_eq!(err.message, "Please enter a city name.");
    }

    #[test]
    fn test_provider_errors_map_to_internal_error() {
        let err = to_mcp_error(WeatherError::Status(StatusCode::SERVICE_UNAVAILABLE));
        assert_eq!(err.code, rmcp::model::ErrorCode::INTERNAL_ERROR);
        assert!(err.message.contains("503"));
    }
}
