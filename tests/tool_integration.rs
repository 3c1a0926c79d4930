//! Integration tests for the MCP tool handlers using wiremock.

use mcp_weather_dashboard::models::{HourlyForecastRequest, ShowWeatherRequest};
use mcp_weather_dashboard::{ClientConfig, WeatherDashboard};
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::ErrorCode;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn dashboard_for(server: &MockServer) -> WeatherDashboard {
    WeatherDashboard::new(ClientConfig::with_base(server.uri())).unwrap()
}

#[tokio::test]
async fn test_hourly_forecast_empty_variables_requests_temperature() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("hourly", "temperature_2m"))
        .and(query_param("forecast_days", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "hourly": { "time": ["2024-01-01T00:00"], "temperature_2m": [1.5] }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = dashboard_for(&mock_server)
        .hourly_forecast(Parameters(HourlyForecastRequest {
            city: None,
            latitude: Some(37.57),
            longitude: Some(126.98),
            variables: Vec::new(),
        }))
        .await
        .unwrap();

    assert_eq!(result.is_error, Some(false));
    let body = serde_json::to_string(&result).unwrap();
    assert!(body.contains("2024-01-01 00:00"));
    assert!(body.contains("1.5"));
}

#[tokio::test]
async fn test_hourly_forecast_half_coordinates_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let err = dashboard_for(&mock_server)
        .hourly_forecast(Parameters(HourlyForecastRequest {
            city: Some("Seoul".to_string()),
            latitude: Some(37.57),
            longitude: None,
            variables: Vec::new(),
        }))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
}

#[tokio::test]
async fn test_show_weather_card() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("name", "Seoul"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [
                { "name": "Seoul", "latitude": 37.57, "longitude": 126.98, "country": "South Korea" }
            ]
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "current": {
                "time": "2024-01-01T09:00",
                "temperature_2m": 3.2,
                "relative_humidity_2m": 55,
                "weather_code": 61
            }
        })))
        .mount(&mock_server)
        .await;

    let result = dashboard_for(&mock_server)
        .show_weather(Parameters(ShowWeatherRequest {
            city: "Seoul".to_string(),
        }))
        .await
        .unwrap();

    let body = serde_json::to_string(&result).unwrap();
    assert!(body.contains("Seoul, South Korea"));
    assert!(body.contains("Humidity: 55%"));
    assert!(body.contains("Rain"));
}

#[tokio::test]
async fn test_show_weather_unknown_city_is_invalid_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": []
        })))
        .mount(&mock_server)
        .await;

    let err = dashboard_for(&mock_server)
        .show_weather(Parameters(ShowWeatherRequest {
            city: "Qwxyzzy123".to_string(),
        }))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    assert!(err.message.contains("Try another name."));
}
