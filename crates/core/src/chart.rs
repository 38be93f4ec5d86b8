//! Bar chart model for the dashboard's visual overview.
//!
//! The server derives labels, values, and colors; rendering happens
//! client-side.

use serde::Serialize;

use crate::reading::Reading;
use crate::thresholds::VentilationStatus;

/// Bar fill color, serialized for the client-side renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BarColor {
    Red,
    Green,
    Orange,
    Blue,
}

/// One bar of the four-bar overview chart.
#[derive(Debug, Clone, Serialize)]
pub struct ChartBar {
    pub label: &'static str,
    pub value: f64,
    pub color: BarColor,
}

/// Build the four overview bars in display order.
///
/// CO₂ and PM2.5 flip red when their alert fires; temperature and humidity
/// keep fixed display colors.
pub fn chart_bars(reading: &Reading, status: &VentilationStatus) -> [ChartBar; 4] {
    [
        ChartBar {
            label: "CO₂",
            value: f64::from(reading.co2_ppm),
            color: if status.co2_alert {
                BarColor::Red
            } else {
                BarColor::Green
            },
        },
        ChartBar {
            label: "PM2.5",
            value: reading.pm25_ug_m3,
            color: if status.pm25_alert {
                BarColor::Red
            } else {
                BarColor::Green
            },
        },
        ChartBar {
            label: "Temp",
            value: reading.temperature_c,
            color: BarColor::Orange,
        },
        ChartBar {
            label: "Humidity",
            value: reading.humidity_pct,
            color: BarColor::Blue,
        },
    ]
}
