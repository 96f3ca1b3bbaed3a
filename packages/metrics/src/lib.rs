#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Deterministic metric derivation for hospital facilities.
//!
//! Turns [`RawFacilityRecord`]s into [`MetricsRecord`]s and, on demand,
//! [`DetailRecord`]s. Every function here is pure: the same input record
//! always produces bit-identical output, so a collection projected at
//! startup never drifts between requests.
//!
//! Sub-metrics that the dataset does not carry (staffing, equipment,
//! occupancy, ...) are synthesized from [`seeded::seeded_value`], keyed by
//! the facility's dataset id and a per-field [`seeded::SeedField`].
//!
//! [`RawFacilityRecord`]: hospital_fragility_facility_models::RawFacilityRecord
//! [`MetricsRecord`]: hospital_fragility_metrics_models::MetricsRecord
//! [`DetailRecord`]: hospital_fragility_metrics_models::DetailRecord

pub mod assessment;
pub mod detail;
pub mod projector;
pub mod registry;
pub mod scoring;
pub mod seeded;

pub use detail::project_detail;
pub use projector::{object_id_from_id, project, record_id};
pub use registry::{all_regions, default_region, find_region};
pub use scoring::{fragility_score, risk_level};
pub use seeded::{SeedField, seeded_value};
