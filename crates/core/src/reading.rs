//! The user-supplied environmental reading and its input ranges.
//!
//! A [`Reading`] is created fresh for each evaluation and discarded
//! afterwards. The range constants double as the min/max/default bounds for
//! the dashboard's input widgets.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// CO₂ input range in ppm.
pub const CO2_MIN_PPM: i32 = 300;
pub const CO2_MAX_PPM: i32 = 5000;
pub const CO2_DEFAULT_PPM: i32 = 800;

/// PM2.5 input range in µg/m³.
pub const PM25_MIN_UG_M3: f64 = 0.0;
pub const PM25_MAX_UG_M3: f64 = 500.0;
pub const PM25_DEFAULT_UG_M3: f64 = 35.0;

/// Temperature input range in °C.
pub const TEMPERATURE_MIN_C: f64 = 0.0;
pub const TEMPERATURE_MAX_C: f64 = 50.0;
pub const TEMPERATURE_DEFAULT_C: f64 = 25.0;

/// Relative humidity input range in %.
pub const HUMIDITY_MIN_PCT: f64 = 0.0;
pub const HUMIDITY_MAX_PCT: f64 = 100.0;
pub const HUMIDITY_DEFAULT_PCT: f64 = 50.0;

/// One set of manually entered environmental values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// CO₂ concentration in ppm.
    pub co2_ppm: i32,
    /// PM2.5 concentration in µg/m³.
    pub pm25_ug_m3: f64,
    /// Air temperature in °C. Display-only, never participates in alerting.
    pub temperature_c: f64,
    /// Relative humidity in %.
    pub humidity_pct: f64,
}

impl Default for Reading {
    /// The dashboard's initial widget values.
    fn default() -> Self {
        Self {
            co2_ppm: CO2_DEFAULT_PPM,
            pm25_ug_m3: PM25_DEFAULT_UG_M3,
            temperature_c: TEMPERATURE_DEFAULT_C,
            humidity_pct: HUMIDITY_DEFAULT_PCT,
        }
    }
}

impl Reading {
    /// Check that every field is within its input widget range.
    ///
    /// The UI clamps values before submitting, but callers behind a network
    /// boundary must not trust that.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_range(f64::from(self.co2_ppm), f64::from(CO2_MIN_PPM), f64::from(CO2_MAX_PPM), "co2_ppm")?;
        validate_range(self.pm25_ug_m3, PM25_MIN_UG_M3, PM25_MAX_UG_M3, "pm25_ug_m3")?;
        validate_range(self.temperature_c, TEMPERATURE_MIN_C, TEMPERATURE_MAX_C, "temperature_c")?;
        validate_range(self.humidity_pct, HUMIDITY_MIN_PCT, HUMIDITY_MAX_PCT, "humidity_pct")?;
        Ok(())
    }
}

/// Validate that a value falls within `[min, max]`.
///
/// Returns a `CoreError::Validation` naming the field if out of range.
fn validate_range(value: f64, min: f64, max: f64, name: &str) -> Result<(), CoreError> {
    if !(min..=max).contains(&value) {
        return Err(CoreError::Validation(format!(
            "{name} must be between {min} and {max}, got {value}"
        )));
    }
    Ok(())
}
