//! Unit conversion utilities
//!
//! All geometry inside PanelCut is in millimeters. These helpers convert
//! for display and for command-line input in either Metric (mm) or
//! Imperial (inch), and handle the mm → m conversions used for edging.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Millimeters per meter
pub const MM_PER_METER: f64 = 1000.0;

/// Millimeters per inch
pub const MM_PER_INCH: f64 = 25.4;

/// Measurement system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    /// Metric system (mm)
    Metric,
    /// Imperial system (inches)
    Imperial,
}

impl Default for MeasurementSystem {
    fn default() -> Self {
        Self::Metric
    }
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

/// Format length value for display
///
/// * `value_mm` - Value in millimeters
/// * `system` - Target measurement system
pub fn format_length(value_mm: f64, system: MeasurementSystem) -> String {
    match system {
        MeasurementSystem::Metric => format!("{:.1}", value_mm),
        MeasurementSystem::Imperial => format!("{:.3}", value_mm / MM_PER_INCH),
    }
}

/// Parse length string to millimeters
///
/// Imperial input accepts decimal inches ("48.5") and whole-plus-fraction
/// forms ("47 7/8").
///
/// * `input` - String to parse
/// * `system` - Assumed measurement system
pub fn parse_length(input: &str, system: MeasurementSystem) -> Result<f64, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty length".to_string());
    }

    match system {
        MeasurementSystem::Metric => input.parse::<f64>().map_err(|e| e.to_string()),
        MeasurementSystem::Imperial => {
            if !input.contains('/') {
                let inches = input.parse::<f64>().map_err(|e| e.to_string())?;
                return Ok(inches * MM_PER_INCH);
            }

            let mut total_inches = 0.0;
            for part in input.split_whitespace() {
                if let Some((num, den)) = part.split_once('/') {
                    let num = num.parse::<f64>().map_err(|_| "Invalid numerator")?;
                    let den = den.parse::<f64>().map_err(|_| "Invalid denominator")?;
                    if den == 0.0 {
                        return Err("Division by zero".to_string());
                    }
                    total_inches += num / den;
                } else {
                    total_inches += part.parse::<f64>().map_err(|_| "Invalid number part")?;
                }
            }
            Ok(total_inches * MM_PER_INCH)
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

/// Convert millimeters to meters
pub fn mm_to_meters(value_mm: f64) -> f64 {
    value_mm / MM_PER_METER
}

/// Convert square millimeters to square meters
pub fn mm2_to_m2(value_mm2: f64) -> f64 {
    value_mm2 / (MM_PER_METER * MM_PER_METER)
}

/// Round to a fixed number of decimal places (half away from zero)
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
