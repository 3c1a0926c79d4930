use chrono::NaiveDateTime;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

use crate::constants::DEFAULT_CITY;

// ============================================================================
// Open-Meteo Geocoding API Models
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct GeocodingResponse {
    #[serde(default)]
    pub results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodingResult {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub country: Option<String>,
}

// ============================================================================
// Open-Meteo Forecast API Models
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub current: Option<CurrentData>,
    #[serde(default)]
    pub hourly: Option<HourlyData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurrentData {
    #[serde(default)]
    pub time: Option<String>,
    #[serde(rename = "temperature_2m", default)]
    pub temperature: Option<f64>,
    #[serde(rename = "relative_humidity_2m", default)]
    pub humidity: Option<f64>,
    #[serde(default)]
    pub weather_code: Option<i64>,
}

/// Hourly block: a timestamp column plus one parallel array per variable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HourlyData {
    #[serde(default)]
    pub time: Vec<String>,
    #[serde(flatten)]
    pub series: HashMap<String, serde_json::Value>,
}

// ============================================================================
// Domain Models
// ============================================================================

/// A resolved place
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub name: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    /// Location for a clicked point, named after its coordinates
    pub fn from_coordinates(latitude: f64, longitude: f64) -> Self {
        Self {
            name: format!("{latitude:.4}, {longitude:.4}"),
            country: String::new(),
            latitude,
            longitude,
        }
    }

    /// "Seoul, South Korea", or just the name when the country is unknown
    pub fn display_name(&self) -> String {
        if self.country.is_empty() {
            self.name.clone()
        } else {
            format!("{}, {}", self.name, self.country)
        }
    }
}

impl From<GeocodingResult> for Location {
    fn from(result: GeocodingResult) -> Self {
        Self {
            name: result.name,
            country: result.country.unwrap_or_default(),
            latitude: result.latitude,
            longitude: result.longitude,
        }
    }
}

/// Hourly forecast variables a user can pick
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum Variable {
    #[serde(rename = "temperature_2m")]
    Temperature,
    #[serde(rename = "relative_humidity_2m")]
    Humidity,
    #[serde(rename = "windspeed_10m")]
    WindSpeed,
    #[serde(rename = "precipitation")]
    Precipitation,
    #[serde(rename = "cloudcover")]
    CloudCover,
    #[serde(rename = "surface_pressure")]
    SurfacePressure,
}

impl Variable {
    pub const ALL: [Variable; 6] = [
        Variable::Temperature,
        Variable::Humidity,
        Variable::WindSpeed,
        Variable::Precipitation,
        Variable::CloudCover,
        Variable::SurfacePressure,
    ];

    /// Identifier used by the forecast API
    pub fn id(&self) -> &'static str {
        match self {
            Self::Temperature => "temperature_2m",
            Self::Humidity => "relative_humidity_2m",
            Self::WindSpeed => "windspeed_10m",
            Self::Precipitation => "precipitation",
            Self::CloudCover => "cloudcover",
            Self::SurfacePressure => "surface_pressure",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Temperature => "Temperature",
            Self::Humidity => "Humidity",
            Self::WindSpeed => "Wind speed",
            Self::Precipitation => "Precipitation",
            Self::CloudCover => "Cloud cover",
            Self::SurfacePressure => "Surface pressure",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Self::Temperature => "\u{00b0}C",
            Self::Humidity | Self::CloudCover => "%",
            Self::WindSpeed => "km/h",
            Self::Precipitation => "mm",
            Self::SurfacePressure => "hPa",
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown variable: {0}")]
pub struct UnknownVariable(pub String);

impl FromStr for Variable {
    type Err = UnknownVariable;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variable::ALL
            .into_iter()
            .find(|v| v.id() == s.trim())
            .ok_or_else(|| UnknownVariable(s.to_string()))
    }
}

/// Variables requested for one hourly forecast, in catalog order
pub type VariableSelection = BTreeSet<Variable>;

/// Comma-joined variable ids for the `hourly` query parameter
pub fn join_variables(selection: &VariableSelection) -> String {
    selection
        .iter()
        .map(Variable::id)
        .collect::<Vec<_>>()
        .join(",")
}

/// Collects the requested variables; an empty request means temperature only
pub fn selection_or_default(variables: Vec<Variable>) -> VariableSelection {
    let mut selection: VariableSelection = variables.into_iter().collect();
    if selection.is_empty() {
        selection.insert(Variable::Temperature);
    }
    selection
}

/// Which forecast block to request
#[derive(Debug, Clone, PartialEq)]
pub enum ForecastMode {
    Current,
    Hourly(VariableSelection),
}

/// Snapshot of current conditions
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub weather_code: i64,
    /// Provider time; `None` when the response carried none
    pub timestamp: Option<NaiveDateTime>,
}

/// Time-indexed hourly series; every column has one entry per timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct HourlyTable {
    pub timestamps: Vec<NaiveDateTime>,
    pub columns: BTreeMap<Variable, Vec<Option<f64>>>,
}

impl HourlyTable {
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    pub fn column(&self, variable: Variable) -> Option<&[Option<f64>]> {
        self.columns.get(&variable).map(Vec::as_slice)
    }

    pub fn variables(&self) -> impl Iterator<Item = Variable> + '_ {
        self.columns.keys().copied()
    }

    /// Rows in provider order, values in column order
    pub fn rows(&self) -> impl Iterator<Item = (NaiveDateTime, Vec<Option<f64>>)> + '_ {
        self.timestamps.iter().enumerate().map(move |(i, ts)| {
            let values = self
                .columns
                .values()
                .map(|col| col.get(i).copied().flatten())
                .collect();
            (*ts, values)
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ForecastResult {
    Current(CurrentConditions),
    Hourly(HourlyTable),
}

// ============================================================================
// MCP Tool Request Models
// ============================================================================

fn default_city() -> String {
    DEFAULT_CITY.to_string()
}

fn default_variables() -> Vec<Variable> {
    vec![Variable::Temperature]
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct ShowWeatherRequest {
    /// City name, e.g. "Seoul"
    #[serde(default = "default_city")]
    pub city: String,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct HourlyForecastRequest {
    /// City name; ignored when coordinates are given
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Variables to include, defaults to temperature only
    #[serde(default = "default_variables")]
    pub variables: Vec<Variable>,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct ListVariablesRequest {}
