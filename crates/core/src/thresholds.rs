//! Ventilation threshold evaluation.
//!
//! Pure logic — no I/O. The caller supplies a [`Reading`] and renders the
//! resulting [`VentilationStatus`]. Evaluated once per form submission;
//! every invocation is independent.

use serde::Serialize;

use crate::reading::Reading;

/// CO₂ concentration above which ventilation is considered poor.
pub const CO2_ALERT_PPM: i32 = 1000;

/// PM2.5 concentration above which ventilation is considered poor.
pub const PM25_ALERT_UG_M3: f64 = 55.0;

/// Relative humidity below which ventilation is considered poor.
pub const HUMIDITY_LOW_PCT: f64 = 35.0;

/// Relative humidity above which ventilation is considered poor.
pub const HUMIDITY_HIGH_PCT: f64 = 65.0;

/// Status line shown when any threshold is violated.
pub const STATUS_POOR: &str = "Poor Ventilation Detected";

/// Status line shown when all values are within range.
pub const STATUS_GOOD: &str = "Ventilation is Good";

const ADVICE_POOR: &str = "Please open windows or turn on exhaust fans.";
const ADVICE_GOOD: &str = "Air quality within safe range.";

/// Outcome of evaluating one reading against the fixed thresholds.
///
/// Derived per request, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct VentilationStatus {
    /// CO₂ exceeded [`CO2_ALERT_PPM`].
    pub co2_alert: bool,
    /// PM2.5 exceeded [`PM25_ALERT_UG_M3`].
    pub pm25_alert: bool,
    /// Any alert condition fired (CO₂, PM2.5, or humidity out of band).
    pub ventilation_poor: bool,
    /// Status line for the dashboard.
    pub message: &'static str,
    /// Follow-up advice accompanying the status line.
    pub advice: &'static str,
}

/// Evaluate a reading against the fixed thresholds.
///
/// Total over the reading domain, no side effects. Temperature is
/// display-only and never participates in alerting. All comparisons are
/// strict, so a value sitting exactly on a threshold does not alert.
pub fn evaluate(reading: &Reading) -> VentilationStatus {
    let co2_alert = reading.co2_ppm > CO2_ALERT_PPM;
    let pm25_alert = reading.pm25_ug_m3 > PM25_ALERT_UG_M3;
    let humidity_out_of_band =
        reading.humidity_pct < HUMIDITY_LOW_PCT || reading.humidity_pct > HUMIDITY_HIGH_PCT;

    let ventilation_poor = co2_alert || pm25_alert || humidity_out_of_band;

    let (message, advice) = if ventilation_poor {
        (STATUS_POOR, ADVICE_POOR)
    } else {
        (STATUS_GOOD, ADVICE_GOOD)
    };

    VentilationStatus {
        co2_alert,
        pm25_alert,
        ventilation_poor,
        message,
        advice,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn make_reading(co2: i32, pm25: f64, temp: f64, humidity: f64) -> Reading {
        Reading {
            co2_ppm: co2,
            pm25_ug_m3: pm25,
            temperature_c: temp,
            humidity_pct: humidity,
        }
    }

    #[test]
    fn good_air_reports_good_ventilation() {
        let status = evaluate(&make_reading(800, 35.0, 25.0, 50.0));
        assert!(!status.co2_alert);
        assert!(!status.pm25_alert);
        assert!(!status.ventilation_poor);
        assert_eq!(status.message, STATUS_GOOD);
    }

    #[test]
    fn high_co2_triggers_alert_regardless_of_other_fields() {
        let status = evaluate(&make_reading(1200, 35.0, 25.0, 50.0));
        assert!(status.co2_alert);
        assert!(status.ventilation_poor);
        assert_eq!(status.message, STATUS_POOR);

        // Other fields at their extremes change nothing.
        let status = evaluate(&make_reading(1001, 0.0, 0.0, 50.0));
        assert!(status.ventilation_poor);
    }

    #[test]
    fn high_pm25_triggers_alert() {
        let status = evaluate(&make_reading(800, 60.0, 25.0, 50.0));
        assert!(status.pm25_alert);
        assert!(!status.co2_alert);
        assert!(status.ventilation_poor);
    }

    #[test]
    fn low_humidity_triggers_alert_without_metric_flags() {
        let status = evaluate(&make_reading(800, 35.0, 25.0, 20.0));
        assert!(!status.co2_alert);
        assert!(!status.pm25_alert);
        assert!(status.ventilation_poor);
        assert_eq!(status.message, STATUS_POOR);
    }

    #[test]
    fn high_humidity_triggers_alert() {
        let status = evaluate(&make_reading(800, 35.0, 25.0, 70.0));
        assert!(status.ventilation_poor);
    }

    #[test]
    fn threshold_boundaries_do_not_alert() {
        // Exactly on a threshold is still within the safe range.
        let status = evaluate(&make_reading(1000, 55.0, 25.0, 35.0));
        assert!(!status.ventilation_poor);

        let status = evaluate(&make_reading(1000, 55.0, 25.0, 65.0));
        assert!(!status.ventilation_poor);
    }

    #[test]
    fn temperature_never_participates_in_alerting() {
        let status = evaluate(&make_reading(800, 35.0, 50.0, 50.0));
        assert!(!status.ventilation_poor);

        let status = evaluate(&make_reading(800, 35.0, 0.0, 50.0));
        assert!(!status.ventilation_poor);
    }

    #[test]
    fn advice_matches_status() {
        let good = evaluate(&make_reading(800, 35.0, 25.0, 50.0));
        assert_eq!(good.advice, ADVICE_GOOD);

        let poor = evaluate(&make_reading(1200, 35.0, 25.0, 50.0));
        assert_eq!(poor.advice, ADVICE_POOR);
    }
}
