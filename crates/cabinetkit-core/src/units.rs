//! Unit conversion utilities
//!
//! All CabinetKit geometry is carried in inches. This module converts to
//! millimetres for display and handles the fractional-inch notation used on
//! shop drawings (`23-1/4"`, `22 1/2`, `3/4`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Millimetres per inch.
pub const MM_PER_INCH: f64 = 25.4;

/// Finest fraction used when formatting inches (1/16").
pub const FRACTION_DENOMINATOR: u32 = 16;

/// Measurement system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    /// Metric system (mm)
    Metric,
    /// Imperial system (inches)
    #[default]
    Imperial,
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metric => write!(f, "Metric"),
            Self::Imperial => write!(f, "Imperial"),
        }
    }
}

impl FromStr for MeasurementSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metric" | "mm" => Ok(Self::Metric),
            "imperial" | "inch" | "in" => Ok(Self::Imperial),
            _ => Err(format!("Unknown measurement system: {}", s)),
        }
    }
}

/// Format a length given in inches for display in the requested system.
///
/// Imperial output uses shop fractions, metric output is rounded to 0.1 mm.
pub fn format_length(value_in: f64, system: MeasurementSystem) -> String {
    match system {
        MeasurementSystem::Metric => format!("{:.1} mm", value_in * MM_PER_INCH),
        MeasurementSystem::Imperial => format_inches(value_in),
    }
}

/// Format inches as a shop fraction rounded to the nearest 1/16".
///
/// `23.25` → `23-1/4"`, `0.75` → `3/4"`, `36.0` → `36"`.
pub fn format_inches(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let sixteenths = (value.abs() * FRACTION_DENOMINATOR as f64).round() as u64;
    let whole = sixteenths / FRACTION_DENOMINATOR as u64;
    let mut numerator = sixteenths % FRACTION_DENOMINATOR as u64;
    let mut denominator = FRACTION_DENOMINATOR as u64;

    if numerator == 0 {
        return format!("{sign}{whole}\"");
    }

    while numerator % 2 == 0 {
        numerator /= 2;
        denominator /= 2;
    }

    if whole == 0 {
        format!("{sign}{numerator}/{denominator}\"")
    } else {
        format!("{sign}{whole}-{numerator}/{denominator}\"")
    }
}

/// Parse an inch value written as a decimal or a fraction.
///
/// Accepts `"23.25"`, `"23 1/4"`, `"23-1/4\""`, `"1/2"` and a trailing `in`.
pub fn parse_inches(input: &str) -> Result<f64, String> {
    let trimmed = input
        .trim()
        .trim_end_matches('"')
        .trim_end_matches("in")
        .trim();
    if trimmed.is_empty() {
        return Err("Empty length".to_string());
    }

    let (negative, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest.trim()),
        None => (false, trimmed),
    };

    // "23-1/4" separates the whole part with a dash
    let normalized = body.replacen('-', " ", 1);
    let mut total = 0.0;

    for part in normalized.split_whitespace() {
        if part.contains('/') {
            let frac_parts: Vec<&str> = part.split('/').collect();
            if frac_parts.len() != 2 {
                return Err("Invalid fraction format".to_string());
            }
            let num = frac_parts[0]
                .parse::<f64>()
                .map_err(|_| "Invalid numerator".to_string())?;
            let den = frac_parts[1]
                .parse::<f64>()
                .map_err(|_| "Invalid denominator".to_string())?;
            if den == 0.0 {
                return Err("Division by zero".to_string());
            }
            total += num / den;
        } else {
            total += part
                .parse::<f64>()
                .map_err(|_| format!("Invalid number part '{}'", part))?;
        }
    }

    Ok(if negative { -total } else { total })
}

/// Parse a length string in the given system and return inches.
pub fn parse_length(input: &str, system: MeasurementSystem) -> Result<f64, String> {
    match system {
        MeasurementSystem::Imperial => parse_inches(input),
        MeasurementSystem::Metric => {
            let mm = input
                .trim()
                .trim_end_matches("mm")
                .trim()
                .parse::<f64>()
                .map_err(|e| e.to_string())?;
            Ok(mm / MM_PER_INCH)
        }
    }
}

/// Get the unit label for the given system ("mm" or "in")
pub fn get_unit_label(system: MeasurementSystem) -> &'static str {
    match system {
        MeasurementSystem::Metric => "mm",
        MeasurementSystem::Imperial => "in",
    }
}
