//! Handlers for reading evaluation endpoints.
//!
//! The evaluation itself lives in `airsense_core` as a pure function; these
//! handlers only decode, validate, and re-encode.

use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use airsense_core::chart::{chart_bars, ChartBar};
use airsense_core::metrics::{metric_cards, MetricCard};
use airsense_core::reading::{self, Reading};
use airsense_core::thresholds::{evaluate, VentilationStatus};

use crate::error::AppResult;
use crate::response::DataResponse;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for the evaluate endpoint: one full reading.
#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    pub co2_ppm: i32,
    pub pm25_ug_m3: f64,
    pub temperature_c: f64,
    pub humidity_pct: f64,
}

/// Response body for the evaluate endpoint.
#[derive(Debug, Serialize)]
pub struct EvaluationResponse {
    /// The reading as accepted, echoed back for display.
    pub reading: Reading,
    /// Threshold evaluation outcome.
    pub status: VentilationStatus,
    /// Per-metric summary cards in display order.
    pub metrics: [MetricCard; 4],
    /// Overview chart bars in display order.
    pub chart: [ChartBar; 4],
    /// When the evaluation ran.
    pub evaluated_at: DateTime<Utc>,
}

/// Bounds and initial value for one input widget.
///
/// Field names mirror the number-input contract: `min`, `max`, and the
/// starting `value`.
#[derive(Debug, Serialize)]
pub struct InputBounds {
    pub min: f64,
    pub max: f64,
    pub value: f64,
}

/// Response body for the defaults endpoint: one [`InputBounds`] per field.
#[derive(Debug, Serialize)]
pub struct ReadingDefaultsResponse {
    pub co2_ppm: InputBounds,
    pub pm25_ug_m3: InputBounds,
    pub temperature_c: InputBounds,
    pub humidity_pct: InputBounds,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/readings/evaluate
///
/// Evaluate one reading against the fixed ventilation thresholds.
///
/// The dashboard widgets clamp their values client-side, but the endpoint
/// re-checks every range and rejects out-of-range input with a 400.
pub async fn evaluate_reading(
    Json(input): Json<EvaluateRequest>,
) -> AppResult<Json<DataResponse<EvaluationResponse>>> {
    let reading = Reading {
        co2_ppm: input.co2_ppm,
        pm25_ug_m3: input.pm25_ug_m3,
        temperature_c: input.temperature_c,
        humidity_pct: input.humidity_pct,
    };
    reading.validate()?;

    let status = evaluate(&reading);
    let metrics = metric_cards(&reading, &status);
    let chart = chart_bars(&reading, &status);

    if status.ventilation_poor {
        tracing::info!(
            co2_ppm = reading.co2_ppm,
            pm25_ug_m3 = reading.pm25_ug_m3,
            humidity_pct = reading.humidity_pct,
            "Poor ventilation detected"
        );
    }

    Ok(Json(DataResponse {
        data: EvaluationResponse {
            reading,
            status,
            metrics,
            chart,
            evaluated_at: Utc::now(),
        },
    }))
}

/// GET /api/v1/readings/defaults
///
/// Input widget bounds and starting values for the dashboard form.
pub async fn reading_defaults() -> Json<DataResponse<ReadingDefaultsResponse>> {
    Json(DataResponse {
        data: ReadingDefaultsResponse {
            co2_ppm: InputBounds {
                min: f64::from(reading::CO2_MIN_PPM),
                max: f64::from(reading::CO2_MAX_PPM),
                value: f64::from(reading::CO2_DEFAULT_PPM),
            },
            pm25_ug_m3: InputBounds {
                min: reading::PM25_MIN_UG_M3,
                max: reading::PM25_MAX_UG_M3,
                value: reading::PM25_DEFAULT_UG_M3,
            },
            temperature_c: InputBounds {
                min: reading::TEMPERATURE_MIN_C,
                max: reading::TEMPERATURE_MAX_C,
                value: reading::TEMPERATURE_DEFAULT_C,
            },
            humidity_pct: InputBounds {
                min: reading::HUMIDITY_MIN_PCT,
                max: reading::HUMIDITY_MAX_PCT,
                value: reading::HUMIDITY_DEFAULT_PCT,
            },
        },
    })
}
