use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};

use crate::config::ClientConfig;
use crate::constants::{CURRENT_VARIABLES, FORECAST_DAYS};
use crate::error::WeatherError;
use crate::models::{join_variables, ForecastMode, ForecastResponse, GeocodingResponse, Location};

/// Thin client over the Open-Meteo geocoding and forecast endpoints.
///
/// One attempt per call: no retries, no caching, and the HTTP client's
/// default timeout.
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    client: Client,
    config: ClientConfig,
}

impl OpenMeteoClient {
    pub fn new(config: ClientConfig) -> Result<Self, WeatherError> {
        let client = Client::builder().user_agent(&config.user_agent).build()?;
        Ok(Self { client, config })
    }

    /// Makes an HTTP GET request and deserializes the JSON response
    async fn make_request<T, Q>(&self, url: &str, query: &Q) -> Result<T, WeatherError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).query(query).send().await?;

        if !response.status().is_success() {
            return Err(WeatherError::Status(response.status()));
        }

        let data = response.json::<T>().await?;
        Ok(data)
    }

    /// Resolves a place name to its best match, `None` when nothing matches
    pub async fn geocode(&self, name: &str) -> Result<Option<Location>, WeatherError> {
        let url = format!("{}/search", self.config.geocoding_base);
        let response = self
            .make_request::<GeocodingResponse, _>(&url, &[("name", name), ("count", "1")])
            .await?;

        let location = response
            .results
            .and_then(|results| results.into_iter().next())
            .map(Location::from);

        match &location {
            Some(found) => tracing::debug!(
                "Geocoded {} to {} ({:.4}, {:.4})",
                name,
                found.display_name(),
                found.latitude,
                found.longitude
            ),
            None => tracing::debug!("No geocoding results for {}", name),
        }
        Ok(location)
    }

    /// Fetches the raw forecast for a coordinate pair
    pub async fn fetch_forecast(
        &self,
        latitude: f64,
        longitude: f64,
        mode: &ForecastMode,
    ) -> Result<ForecastResponse, WeatherError> {
        let url = format!("{}/forecast", self.config.forecast_base);
        let mut query = vec![
            ("latitude", latitude.to_string()),
            ("longitude", longitude.to_string()),
            ("timezone", "auto".to_string()),
        ];
        match mode {
            ForecastMode::Current => query.push(("current", CURRENT_VARIABLES.to_string())),
            ForecastMode::Hourly(variables) => {
                query.push(("hourly", join_variables(variables)));
                query.push(("forecast_days", FORECAST_DAYS.to_string()));
            }
        }

        self.make_request::<ForecastResponse, _>(&url, &query).await
    }
}
