//! Projection of raw facility records into [`MetricsRecord`]s.

use hospital_fragility_facility_models::RawFacilityRecord;
use hospital_fragility_metrics_models::{MetricsRecord, Region};

use crate::assessment::last_assessment;
use crate::scoring::{fragility_score, risk_level};
use crate::seeded::SeedField;

/// Minimum emergency surge capacity, regardless of size.
pub const MIN_EMERGENCY_CAPACITY: u32 = 10;

/// Builds the stable record id for a dataset object id, e.g. `wa-007`.
#[must_use]
pub fn record_id(region: &Region, object_id: i64) -> String {
    format!("{}-{object_id:03}", region.id_prefix)
}

/// Recovers the dataset object id from a record id.
///
/// Returns `None` unless `id` is `{prefix}-` followed only by ASCII digits.
#[must_use]
pub fn object_id_from_id(region: &Region, id: &str) -> Option<i64> {
    let digits = id
        .strip_prefix(region.id_prefix.as_str())?
        .strip_prefix('-')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Projects a single facility into its metrics record.
#[must_use]
#[allow(clippy::suboptimal_flops)]
pub fn project(record: &RawFacilityRecord, region: &Region) -> MetricsRecord {
    let id = record.object_id;
    let score = fragility_score(record);

    let base_staffing = if record.has_acute_care == Some(true) { 0.75 } else { 0.65 };
    let base_equipment = if record.has_icu == Some(true) { 0.8 } else { 0.7 };
    let base_supply_chain = if record.total_beds > 200 { 0.8 } else { 0.7 };

    let readiness_draw = SeedField::DisasterReadiness.draw(id);
    let disaster_readiness = if record.has_helipad == Some(true) {
        0.7 + readiness_draw * 0.25
    } else {
        0.5 + readiness_draw * 0.3
    };

    MetricsRecord {
        id: record_id(region, id),
        name: record.name.trim().to_string(),
        latitude: record.latitude,
        longitude: record.longitude,
        city: record.city.clone(),
        state: region.state.clone(),
        country: region.country.clone(),
        country_code: region.country_code.clone(),
        fragility_score: score,
        capacity_utilization: 0.7 + SeedField::CapacityUtilization.draw(id) * 0.25,
        staffing_level: (base_staffing + SeedField::Staffing.draw(id) * 0.2).min(0.98),
        equipment_condition: (base_equipment + SeedField::Equipment.draw(id) * 0.15).min(0.98),
        supply_chain_resilience: (base_supply_chain + SeedField::SupplyChain.draw(id) * 0.15)
            .min(0.95),
        infrastructure_age: 0.2 + SeedField::InfrastructureAge.draw(id) * 0.4,
        total_beds: record.total_beds,
        icu_beds: record.icu_beds,
        occupancy_rate: 0.65 + SeedField::Occupancy.draw(id) * 0.25,
        emergency_capacity: emergency_capacity(record.total_beds),
        risk_level: risk_level(score),
        vulnerability_index: score + (SeedField::Vulnerability.draw(id) * 0.1 - 0.05),
        disaster_readiness,
        last_assessment: last_assessment(
            record.updated.as_deref(),
            &region.fallback_assessment_date,
        ),
    }
}

/// Emergency surge capacity: 15% of total beds, at least
/// [`MIN_EMERGENCY_CAPACITY`].
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn emergency_capacity(total_beds: u32) -> u32 {
    let surge = (f64::from(total_beds) * 0.15).floor() as u32;
    surge.max(MIN_EMERGENCY_CAPACITY)
}
