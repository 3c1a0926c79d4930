use reqwest::StatusCode;

/// Errors produced while resolving a location or fetching a forecast
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Please enter a city name.")]
    EmptyInput,
    #[error("City not found: {0}. Try another name.")]
    CityNotFound(String),
    #[error("Both latitude and longitude are required")]
    IncompleteCoordinates,
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Request failed with status: {0}")]
    Status(StatusCode),
    #[error("Invalid timestamp in forecast: {0}")]
    InvalidTimestamp(String),
}

impl WeatherError {
    /// True for outcomes the user can fix by changing the input
    pub fn is_user_correctable(&self) -> bool {
        matches!(
            self,
            Self::EmptyInput | Self::CityNotFound(_) | Self::IncompleteCoordinates
        )
    }
}
