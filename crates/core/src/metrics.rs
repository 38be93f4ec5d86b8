//! Per-metric summary cards shown above the chart.

use serde::Serialize;

use crate::reading::Reading;
use crate::thresholds::VentilationStatus;

/// Indicator attached to a metric card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricIndicator {
    /// The metric exceeded its alert threshold.
    Alert,
    /// The metric is within its safe range.
    Ok,
    /// Display-only metric with no alert threshold.
    Info,
}

/// One summary card: label, raw value, unit, indicator.
#[derive(Debug, Clone, Serialize)]
pub struct MetricCard {
    pub label: &'static str,
    pub value: f64,
    pub unit: &'static str,
    pub indicator: MetricIndicator,
}

/// Build the four metric cards in display order.
pub fn metric_cards(reading: &Reading, status: &VentilationStatus) -> [MetricCard; 4] {
    [
        MetricCard {
            label: "CO₂",
            value: f64::from(reading.co2_ppm),
            unit: "ppm",
            indicator: alert_or_ok(status.co2_alert),
        },
        MetricCard {
            label: "PM2.5",
            value: reading.pm25_ug_m3,
            unit: "µg/m³",
            indicator: alert_or_ok(status.pm25_alert),
        },
        MetricCard {
            label: "Temperature",
            value: reading.temperature_c,
            unit: "°C",
            indicator: MetricIndicator::Info,
        },
        MetricCard {
            label: "Humidity",
            value: reading.humidity_pct,
            unit: "%",
            indicator: MetricIndicator::Info,
        },
    ]
}

fn alert_or_ok(alert: bool) -> MetricIndicator {
    if alert {
        MetricIndicator::Alert
    } else {
        MetricIndicator::Ok
    }
}
