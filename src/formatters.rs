use chrono::{Local, NaiveDateTime};

use crate::models::{CurrentConditions, ForecastResult, HourlyTable, Location, Variable};
use crate::pipeline::DashboardReport;

/// Converts a WMO weather code to an emoji label; unknown codes get a generic one
pub fn weather_code_label(code: i64) -> &'static str {
    match code {
        0 => "\u{2600}\u{fe0f} Clear sky",
        1 => "\u{1f324}\u{fe0f} Mostly clear",
        2 => "\u{26c5} Partly cloudy",
        3 => "\u{2601}\u{fe0f} Overcast",
        45 | 48 => "\u{1f32b}\u{fe0f} Fog",
        51 => "\u{1f326}\u{fe0f} Light drizzle",
        61 => "\u{1f327}\u{fe0f} Rain",
        71 => "\u{2744}\u{fe0f} Snow",
        95 => "\u{26c8}\u{fe0f} Thunderstorm",
        _ => "\u{1f30d} Weather data",
    }
}

fn reading(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{v:.1}"))
}

fn whole_percent(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{v:.0}"))
}

fn format_time(ts: &NaiveDateTime) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}

/// Formats a current-conditions card; without a provider time the card shows
/// the local clock
pub fn format_current(location: &Location, current: &CurrentConditions) -> String {
    let time = current
        .timestamp
        .unwrap_or_else(|| Local::now().naive_local());
    format!(
        "\u{1f4cd} {}\nTime: {}\nTemperature: {}\u{00b0}C\nHumidity: {}%\nCondition: {}\n",
        location.display_name(),
        format_time(&time),
        reading(current.temperature),
        whole_percent(current.humidity),
        weather_code_label(current.weather_code)
    )
}

/// Formats an hourly table, one row per timestamp
pub fn format_hourly(location: &Location, table: &HourlyTable) -> String {
    let mut output = format!(
        "Hourly Forecast\nLocation: {} ({:.4}, {:.4})\n\n",
        location.display_name(),
        location.latitude,
        location.longitude
    );

    if table.is_empty() {
        output.push_str("No hourly data available.\n");
        return output;
    }

    let headers: Vec<String> = table
        .variables()
        .map(|v| format!("{} ({})", v.label(), v.unit()))
        .collect();
    output.push_str(&format!("{:<16}", "Time"));
    for header in &headers {
        output.push_str(&format!(" | {header:>20}"));
    }
    output.push('\n');

    for (ts, values) in table.rows() {
        output.push_str(&format!("{:<16}", format_time(&ts)));
        for value in values {
            output.push_str(&format!(" | {:>20}", reading(value)));
        }
        output.push('\n');
    }
    output
}

/// Formats whichever forecast the report carries
pub fn format_report(report: &DashboardReport) -> String {
    match &report.forecast {
        ForecastResult::Current(current) => format_current(&report.location, current),
        ForecastResult::Hourly(table) => format_hourly(&report.location, table),
    }
}

/// Formats the selectable variable catalog
pub fn format_variables() -> String {
    let mut output = String::from("Available hourly variables:\n\n");
    for variable in Variable::ALL {
        output.push_str(&format!(
            "  {}: {} ({})\n",
            variable.id(),
            variable.label(),
            variable.unit()
        ));
    }
    output
}
