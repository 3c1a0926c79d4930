/// User agent string for HTTP requests
pub const USER_AGENT: &str = "mcp-weather-dashboard/0.1.0";

/// Open-Meteo geocoding API base URL
pub const GEOCODING_API_BASE: &str = "https://geocoding-api.open-meteo.com/v1";

/// Open-Meteo forecast API base URL
pub const OPEN_METEO_API_BASE: &str = "https://api.open-meteo.com/v1";

/// City shown when the caller does not name one
pub const DEFAULT_CITY: &str = "Seoul";

/// Horizon of the hourly forecast, in days
pub const FORECAST_DAYS: u8 = 2;

/// Variables requested in current-conditions mode
pub const CURRENT_VARIABLES: &str = "temperature_2m,relative_humidity_2m,weather_code";
