//! Reshapes forecast responses into tables and snapshots.
//!
//! Both functions are pure: the same response and selection always give the
//! same output.

use chrono::NaiveDateTime;
use std::collections::BTreeMap;

use crate::error::WeatherError;
use crate::models::{CurrentConditions, ForecastResponse, HourlyTable, VariableSelection};

const TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

/// Parses a local timestamp as returned with `timezone=auto`
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, WeatherError> {
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .ok_or_else(|| WeatherError::InvalidTimestamp(raw.to_string()))
}

/// Builds the hourly table for the requested variables.
///
/// Variables the provider left out become columns of `None`. A series whose
/// length differs from the timestamp column is padded or truncated to match.
pub fn shape_hourly(
    raw: &ForecastResponse,
    variables: &VariableSelection,
) -> Result<HourlyTable, WeatherError> {
    let Some(hourly) = raw.hourly.as_ref() else {
        tracing::debug!("Forecast response has no hourly block");
        return Ok(HourlyTable {
            timestamps: Vec::new(),
            columns: variables.iter().map(|v| (*v, Vec::new())).collect(),
        });
    };

    let timestamps = hourly
        .time
        .iter()
        .map(|t| parse_timestamp(t))
        .collect::<Result<Vec<_>, _>>()?;
    let rows = timestamps.len();

    let mut columns = BTreeMap::new();
    for variable in variables {
        let column = match hourly.series.get(variable.id()) {
            Some(serde_json::Value::Array(values)) => {
                let mut column: Vec<Option<f64>> =
                    values.iter().map(serde_json::Value::as_f64).collect();
                if column.len() != rows {
                    tracing::warn!(
                        "Series {} has {} values for {} timestamps, aligning",
                        variable,
                        column.len(),
                        rows
                    );
                    column.resize(rows, None);
                }
                column
            }
            Some(other) => {
                tracing::warn!("Series {} is not an array: {}", variable, other);
                vec![None; rows]
            }
            None => vec![None; rows],
        };
        columns.insert(*variable, column);
    }

    Ok(HourlyTable {
        timestamps,
        columns,
    })
}

/// Extracts the current-conditions snapshot.
///
/// A missing weather code counts as clear sky (0). A missing or unparseable
/// provider time leaves `timestamp` empty.
pub fn shape_current(raw: &ForecastResponse) -> CurrentConditions {
    let current = raw.current.clone().unwrap_or_default();

    let timestamp = current
        .time
        .as_deref()
        .and_then(|t| parse_timestamp(t).ok());

    CurrentConditions {
        temperature: current.temperature,
        humidity: current.humidity,
        weather_code: current.weather_code.unwrap_or(0),
        timestamp,
    }
}
