//! On-demand detail projection for a single facility.
//!
//! Extends a [`MetricsRecord`] with descriptive fields, staffing estimates,
//! a five-month trend series, and narrative risk factors and
//! recommendations chosen by ordered threshold rules.

use hospital_fragility_facility_models::RawFacilityRecord;
use hospital_fragility_metrics_models::{
    DetailRecord, FacilityType, MetricsRecord, Ownership, Region, TrendPoint,
};

use crate::projector::object_id_from_id;
use crate::seeded::SeedField;

/// Maximum number of risk factors or recommendations on a detail record.
pub const MAX_NARRATIVE_ITEMS: usize = 5;

/// Shown when no risk factor rule matches.
pub const NO_RISK_FACTORS: &str = "No critical risk factors identified";

/// Shown when no recommendation rule matches.
pub const NO_RECOMMENDATIONS: &str = "Continue current operational excellence";

/// Trend months with their fragility and occupancy offsets from the
/// current values. The last point carries no offset.
const TREND: [(&str, f64, f64); 5] = [
    ("2025-01", 0.05, -0.03),
    ("2025-02", 0.03, -0.02),
    ("2025-03", 0.01, 0.0),
    ("2025-04", 0.0, 0.01),
    ("2025-05", 0.0, 0.0),
];

/// A narrative rule: emits `message` when `applies` holds.
struct Rule {
    applies: fn(&MetricsRecord, Option<&RawFacilityRecord>) -> bool,
    message: &'static str,
}

const RISK_FACTOR_RULES: &[Rule] = &[
    Rule {
        applies: |m, _| m.staffing_level < 0.75,
        message: "Staffing levels below optimal",
    },
    Rule {
        applies: |m, _| m.equipment_condition < 0.7,
        message: "Equipment requires updates",
    },
    Rule {
        applies: |m, _| m.supply_chain_resilience < 0.7,
        message: "Supply chain vulnerability",
    },
    Rule {
        applies: |m, _| m.infrastructure_age > 0.5,
        message: "Aging infrastructure",
    },
    Rule {
        applies: |m, _| m.occupancy_rate > 0.85,
        message: "High capacity utilization",
    },
    Rule {
        applies: |m, _| m.disaster_readiness < 0.6,
        message: "Limited disaster preparedness",
    },
    Rule {
        applies: |_, raw| raw.is_some_and(RawFacilityRecord::lacks_icu),
        message: "No ICU capability",
    },
    Rule {
        applies: |_, raw| raw.is_some_and(RawFacilityRecord::lacks_helipad),
        message: "No helipad for emergency transport",
    },
    Rule {
        applies: |m, _| m.total_beds < 50,
        message: "Limited bed capacity",
    },
];

const RECOMMENDATION_RULES: &[Rule] = &[
    Rule {
        applies: |m, _| m.staffing_level < 0.8,
        message: "Implement staff recruitment and retention programs",
    },
    Rule {
        applies: |m, _| m.equipment_condition < 0.75,
        message: "Prioritize medical equipment upgrades",
    },
    Rule {
        applies: |m, _| m.supply_chain_resilience < 0.75,
        message: "Diversify supply chain sources",
    },
    Rule {
        applies: |m, _| m.infrastructure_age > 0.45,
        message: "Plan infrastructure modernization",
    },
    Rule {
        applies: |m, _| m.occupancy_rate > 0.8,
        message: "Expand bed capacity or improve patient flow",
    },
    Rule {
        applies: |m, _| m.disaster_readiness < 0.7,
        message: "Enhance emergency preparedness training",
    },
    Rule {
        applies: |m, raw| raw.is_some_and(RawFacilityRecord::lacks_icu) && m.total_beds > 50,
        message: "Consider adding ICU capability",
    },
    Rule {
        applies: |m, raw| {
            raw.is_some_and(RawFacilityRecord::lacks_helipad) && m.total_beds > 100
        },
        message: "Evaluate helipad installation feasibility",
    },
];

/// Builds the detail view for a facility.
///
/// `raw` is the dataset record the metrics were projected from. Without
/// it, address and phone fall back to coarse regional defaults, the
/// facility is classified as [`FacilityType::Community`], and the ICU and
/// helipad rules never fire. They also stay silent when the dataset left
/// the flag blank; only an explicit "No" counts.
#[must_use]
#[allow(clippy::suboptimal_flops)]
pub fn project_detail(
    metrics: &MetricsRecord,
    raw: Option<&RawFacilityRecord>,
    region: &Region,
) -> DetailRecord {
    let seed = object_id_from_id(region, &metrics.id)
        .or_else(|| raw.map(|r| r.object_id))
        .unwrap_or_default();
    let beds = f64::from(metrics.total_beds);

    let address = raw.map_or_else(
        || format!("{}, {}", metrics.city, region.state),
        |r| format!("{}, {}, {} {}", r.address, r.city, region.state_abbr, r.zip),
    );
    let phone = raw
        .and_then(|r| r.phone.as_deref())
        .filter(|p| !p.trim().is_empty())
        .unwrap_or(region.fallback_phone.as_str())
        .to_string();

    let accreditation = if metrics.total_beds > 100 {
        "JCI Accredited"
    } else {
        "State Licensed"
    };

    DetailRecord {
        metrics: metrics.clone(),
        address,
        phone,
        facility_type: facility_type(metrics, raw),
        ownership: ownership(seed),
        accreditation: accreditation.to_string(),
        year_established: 1950 + floor_u32(SeedField::YearEstablished.draw(seed) * 70.0),
        staff_count: metrics
            .total_beds
            .saturating_mul(3)
            .saturating_add(floor_u32(SeedField::Staff.draw(seed) * 200.0)),
        doctor_count: floor_u32(beds * 0.3 + SeedField::Doctors.draw(seed) * 50.0),
        nurse_count: floor_u32(beds * 1.5 + SeedField::Nurses.draw(seed) * 100.0),
        trends: trends(metrics),
        risk_factors: narrative(RISK_FACTOR_RULES, metrics, raw, NO_RISK_FACTORS),
        recommendations: narrative(RECOMMENDATION_RULES, metrics, raw, NO_RECOMMENDATIONS),
    }
}

fn facility_type(metrics: &MetricsRecord, raw: Option<&RawFacilityRecord>) -> FacilityType {
    match raw {
        Some(r) if r.has_acute_care == Some(true) && metrics.total_beds > 300 => {
            FacilityType::Teaching
        }
        Some(r) if r.has_acute_care == Some(true) => FacilityType::General,
        Some(r) if r.psychiatric_beds > 0 => FacilityType::Specialized,
        _ => FacilityType::Community,
    }
}

fn ownership(seed: i64) -> Ownership {
    if SeedField::Ownership.draw(seed) > 0.6 {
        Ownership::Nonprofit
    } else if SeedField::PublicOwnership.draw(seed) > 0.5 {
        Ownership::Public
    } else {
        Ownership::Private
    }
}

fn trends(metrics: &MetricsRecord) -> Vec<TrendPoint> {
    TREND
        .iter()
        .map(|(date, fragility_offset, occupancy_offset)| TrendPoint {
            date: (*date).to_string(),
            fragility_score: metrics.fragility_score + fragility_offset,
            occupancy_rate: metrics.occupancy_rate + occupancy_offset,
        })
        .collect()
}

fn narrative(
    rules: &[Rule],
    metrics: &MetricsRecord,
    raw: Option<&RawFacilityRecord>,
    sentinel: &str,
) -> Vec<String> {
    let items: Vec<String> = rules
        .iter()
        .filter(|rule| (rule.applies)(metrics, raw))
        .take(MAX_NARRATIVE_ITEMS)
        .map(|rule| rule.message.to_string())
        .collect();

    if items.is_empty() {
        vec![sentinel.to_string()]
    } else {
        items
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn floor_u32(value: f64) -> u32 {
    value.floor() as u32
}
