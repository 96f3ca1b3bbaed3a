#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Derived hospital fragility types.
//!
//! These are the records produced by the metric-derivation pipeline and
//! served by the query layer. They serialize to the camelCase JSON shape
//! the dashboard frontend consumes.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Discrete risk tier derived from a fragility score.
///
/// Ordered from least to most severe, so `Ord` matches the tier ordering
/// used for sorting.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RiskLevel {
    /// Score below 0.35
    Low,
    /// Score in [0.35, 0.5)
    Medium,
    /// Score in [0.5, 0.7)
    High,
    /// Score of 0.7 or above
    Critical,
}

impl RiskLevel {
    /// Classifies a fragility score. Thresholds are inclusive lower bounds,
    /// checked from the most severe tier down.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= Self::Critical.min_score() {
            Self::Critical
        } else if score >= Self::High.min_score() {
            Self::High
        } else if score >= Self::Medium.min_score() {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Inclusive lower bound of the tier's score range.
    #[must_use]
    pub const fn min_score(self) -> f64 {
        match self {
            Self::Low => 0.0,
            Self::Medium => 0.35,
            Self::High => 0.5,
            Self::Critical => 0.7,
        }
    }

    /// Marker and badge color for the tier.
    #[must_use]
    pub const fn color_hex(self) -> &'static str {
        match self {
            Self::Critical => "#7f1d1d",
            Self::High => "#dc2626",
            Self::Medium => "#f97316",
            Self::Low => "#22c55e",
        }
    }

    /// Returns all variants of this enum, least severe first.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Low, Self::Medium, Self::High, Self::Critical]
    }
}

/// Continuous color ramp for a raw fragility score.
///
/// Uses five bands, which is finer than the four risk tiers.
#[must_use]
pub fn fragility_color(score: f64) -> &'static str {
    if score >= 0.8 {
        "#7f1d1d"
    } else if score >= 0.6 {
        "#dc2626"
    } else if score >= 0.4 {
        "#f97316"
    } else if score >= 0.2 {
        "#facc15"
    } else {
        "#22c55e"
    }
}

/// Per-facility metrics combining dataset fields and synthesized scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsRecord {
    /// Stable identifier, e.g. `wa-007`.
    pub id: String,
    /// Trimmed facility name.
    pub name: String,
    /// Latitude.
    pub latitude: f64,
    /// Longitude.
    pub longitude: f64,
    /// City.
    pub city: String,
    /// State name.
    pub state: String,
    /// Country name.
    pub country: String,
    /// ISO 3166-1 alpha-3 country code.
    #[serde(rename = "iso3")]
    pub country_code: String,

    /// Overall fragility, clamped to [0.1, 0.8].
    pub fragility_score: f64,
    /// Capacity utilization (0-1).
    pub capacity_utilization: f64,
    /// Staffing level (0-1).
    pub staffing_level: f64,
    /// Equipment condition (0-1).
    pub equipment_condition: f64,
    /// Supply chain resilience (0-1).
    pub supply_chain_resilience: f64,
    /// Relative infrastructure age (0-1, higher is older).
    pub infrastructure_age: f64,

    /// Total licensed beds.
    pub total_beds: u32,
    /// ICU beds.
    pub icu_beds: u32,
    /// Bed occupancy rate (0-1).
    pub occupancy_rate: f64,
    /// Emergency surge bed capacity.
    pub emergency_capacity: u32,

    /// Risk tier derived from `fragility_score`.
    pub risk_level: RiskLevel,
    /// Fragility score with a small jitter.
    pub vulnerability_index: f64,
    /// Disaster readiness (0-1).
    pub disaster_readiness: f64,
    /// Calendar date of the last assessment, `YYYY-MM-DD`.
    pub last_assessment: String,
}

/// Facility classification shown on the detail panel.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FacilityType {
    /// General acute care hospital.
    General,
    /// Non-acute facility with psychiatric beds.
    Specialized,
    /// Large acute care hospital.
    Teaching,
    /// Any other facility.
    Community,
}

/// Ownership category.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Ownership {
    /// Government owned.
    Public,
    /// Privately owned, for profit.
    Private,
    /// Non-profit.
    Nonprofit,
}

/// One month of the synthetic trend series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    /// Month label, `YYYY-MM`.
    pub date: String,
    /// Fragility score for the month.
    pub fragility_score: f64,
    /// Occupancy rate for the month.
    pub occupancy_rate: f64,
}

/// Extended single-facility view, computed on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailRecord {
    /// The underlying metrics record.
    #[serde(flatten)]
    pub metrics: MetricsRecord,
    /// Full postal address.
    pub address: String,
    /// Contact phone number.
    pub phone: String,
    /// Facility classification.
    #[serde(rename = "type")]
    pub facility_type: FacilityType,
    /// Ownership category.
    pub ownership: Ownership,
    /// Accreditation label.
    pub accreditation: String,
    /// Founding year.
    pub year_established: u32,
    /// Total staff estimate.
    pub staff_count: u32,
    /// Physician estimate.
    pub doctor_count: u32,
    /// Nurse estimate.
    pub nurse_count: u32,
    /// Five monthly trend points, oldest first.
    pub trends: Vec<TrendPoint>,
    /// Up to five risk factors.
    pub risk_factors: Vec<String>,
    /// Up to five recommendations.
    pub recommendations: Vec<String>,
}

/// Aggregate statistics over the whole facility collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRecord {
    /// Number of facilities.
    pub total_hospitals: u64,
    /// Mean fragility score, 0 when there are no facilities.
    pub average_fragility_score: f64,
    /// Facilities in the critical tier.
    pub critical_hospitals: u64,
    /// Facilities in the high tier.
    pub high_risk_hospitals: u64,
    /// Sum of total beds.
    pub total_bed_capacity: u64,
    /// Mean occupancy rate, 0 when there are no facilities.
    pub average_occupancy: f64,
}

/// Location constants stamped onto every record from one dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// Registry key (e.g., `"wa"`).
    pub code: String,
    /// Prefix for generated record ids.
    pub id_prefix: String,
    /// Full state name.
    pub state: String,
    /// Two-letter state abbreviation used in addresses.
    pub state_abbr: String,
    /// Country name.
    pub country: String,
    /// ISO 3166-1 alpha-3 country code.
    pub country_code: String,
    /// Phone shown when a facility has none.
    pub fallback_phone: String,
    /// Assessment date used when a facility has no update date.
    pub fallback_assessment_date: String,
}
