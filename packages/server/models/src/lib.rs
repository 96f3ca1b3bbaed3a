#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the hospital fragility server.
//!
//! Metrics, detail and summary payloads are served as-is from
//! `hospital_fragility_metrics_models`. The types here cover query strings
//! and the small envelopes that exist only at the HTTP boundary.

use hospital_fragility_metrics_models::RiskLevel;
use serde::{Deserialize, Serialize};

/// Query parameters for `GET /api/hospitals`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HospitalsQueryParams {
    /// `summary` returns aggregate statistics instead of a listing.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// ISO 3166-1 alpha-3 country filter.
    pub iso3: Option<String>,
    /// Risk tier filter.
    pub risk_level: Option<String>,
    /// Sort column (`name`, `fragilityScore`, `totalBeds`, ...).
    pub sort_by: Option<String>,
    /// `asc` or `desc`. Defaults to `desc` when `sortBy` is given.
    pub order: Option<String>,
}

impl HospitalsQueryParams {
    /// Whether the caller asked for the summary view.
    #[must_use]
    pub fn wants_summary(&self) -> bool {
        self.kind.as_deref() == Some("summary")
    }
}

/// Query parameters for `GET /api/hospital-detail`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DetailQueryParams {
    /// Hospital id, e.g. `wa-007`.
    pub id: Option<String>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiHealth {
    /// Whether the server is healthy.
    pub healthy: bool,
    /// Server version.
    pub version: String,
}

/// Error envelope returned with every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Human-readable message. Never contains internal details.
    pub error: String,
}

impl ApiError {
    /// Creates an error envelope.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// One row of the map legend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiLegendEntry {
    /// Risk tier.
    pub level: RiskLevel,
    /// Inclusive lower score bound of the tier.
    pub min_score: f64,
    /// Marker color.
    pub color: String,
}

impl From<RiskLevel> for ApiLegendEntry {
    fn from(level: RiskLevel) -> Self {
        Self {
            level,
            min_score: level.min_score(),
            color: level.color_hex().to_string(),
        }
    }
}
