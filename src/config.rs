use crate::constants::{GEOCODING_API_BASE, OPEN_METEO_API_BASE, USER_AGENT};

/// Endpoints and identity used by [`crate::client::OpenMeteoClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub geocoding_base: String,
    pub forecast_base: String,
    pub user_agent: String,
}

impl ClientConfig {
    /// Points both endpoints at the same base, e.g. a local mock server.
    pub fn with_base(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            geocoding_base: base.clone(),
            forecast_base: base,
            ..Self::default()
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            geocoding_base: GEOCODING_API_BASE.to_string(),
            forecast_base: OPEN_METEO_API_BASE.to_string(),
            user_agent: USER_AGENT.to_string(),
        }
    }
}
