//! One dashboard refresh: resolve the location, fetch the forecast, shape it.

use crate::client::OpenMeteoClient;
use crate::error::WeatherError;
use crate::models::{ForecastMode, ForecastResult, Location};
use crate::shaper::{shape_current, shape_hourly};

/// How the user picked a location
#[derive(Debug, Clone, PartialEq)]
pub enum LocationQuery {
    /// Typed city name
    City(String),
    /// Clicked point on the map
    Coordinates { latitude: f64, longitude: f64 },
}

impl LocationQuery {
    /// Builds a query from optional tool arguments; coordinates win over the city
    pub fn from_parts(
        city: Option<String>,
        latitude: Option<f64>,
        longitude: Option<f64>,
        default_city: &str,
    ) -> Result<Self, WeatherError> {
        match (latitude, longitude) {
            (Some(latitude), Some(longitude)) => Ok(Self::Coordinates {
                latitude,
                longitude,
            }),
            (None, None) => Ok(Self::City(
                city.unwrap_or_else(|| default_city.to_string()),
            )),
            _ => Err(WeatherError::IncompleteCoordinates),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardRequest {
    pub location: LocationQuery,
    pub mode: ForecastMode,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardReport {
    pub location: Location,
    pub forecast: ForecastResult,
}

/// Stateless pipeline; every call to [`Dashboard::run`] starts from scratch.
#[derive(Debug, Clone)]
pub struct Dashboard {
    client: OpenMeteoClient,
}

impl Dashboard {
    pub fn new(client: OpenMeteoClient) -> Self {
        Self { client }
    }

    pub async fn resolve(&self, query: &LocationQuery) -> Result<Location, WeatherError> {
        match query {
            LocationQuery::City(name) => {
                let name = name.trim();
                if name.is_empty() {
                    return Err(WeatherError::EmptyInput);
                }
                self.client
                    .geocode(name)
                    .await?
                    .ok_or_else(|| WeatherError::CityNotFound(name.to_string()))
            }
            LocationQuery::Coordinates {
                latitude,
                longitude,
            } => Ok(Location::from_coordinates(*latitude, *longitude)),
        }
    }

    pub async fn run(&self, request: DashboardRequest) -> Result<DashboardReport, WeatherError> {
        let location = self.resolve(&request.location).await?;
        tracing::info!(
            "Fetching forecast for {} ({:.4}, {:.4})",
            location.display_name(),
            location.latitude,
            location.longitude
        );

        let raw = self
            .client
            .fetch_forecast(location.latitude, location.longitude, &request.mode)
            .await?;

        let forecast = match &request.mode {
            ForecastMode::Current => ForecastResult::Current(shape_current(&raw)),
            ForecastMode::Hourly(variables) => {
                ForecastResult::Hourly(shape_hourly(&raw, variables)?)
            }
        };

        Ok(DashboardReport { location, forecast })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_prefers_coordinates() {
        let query =
            LocationQuery::from_parts(Some("Paris".into()), Some(1.5), Some(2.5), "Seoul").unwrap();
        assert_eq!(
            query,
            LocationQuery::Coordinates {
                latitude: 1.5,
                longitude: 2.5
            }
        );
    }

    #[test]
    fn test_query_defaults_city() {
        let query = LocationQuery::from_parts(None, None, None, "Seoul").unwrap();
        assert_eq!(query, LocationQuery::City("Seoul".into()));
    }

    #[test]
    fn test_query_rejects_half_coordinates() {
        let err = LocationQuery::from_parts(None, Some(1.0), None, "Seoul").unwrap_err();
        assert!(matches!(err, WeatherError::IncompleteCoordinates));
    }
}
