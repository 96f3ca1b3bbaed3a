//! Table ordering for metrics listings.

use std::cmp::Ordering;

use hospital_fragility_metrics_models::MetricsRecord;
use strum_macros::{AsRefStr, Display, EnumString};

/// Column a listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "camelCase")]
pub enum SortKey {
    /// Facility name, case-insensitive.
    Name,
    /// Fragility score.
    FragilityScore,
    /// Total beds.
    TotalBeds,
    /// Occupancy rate.
    OccupancyRate,
    /// Risk tier, least severe first.
    RiskLevel,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    /// Ascending.
    Asc,
    /// Descending.
    #[default]
    Desc,
}

impl SortKey {
    fn compare(self, a: &MetricsRecord, b: &MetricsRecord) -> Ordering {
        match self {
            Self::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            Self::FragilityScore => a.fragility_score.total_cmp(&b.fragility_score),
            Self::TotalBeds => a.total_beds.cmp(&b.total_beds),
            Self::OccupancyRate => a.occupancy_rate.total_cmp(&b.occupancy_rate),
            Self::RiskLevel => a.risk_level.cmp(&b.risk_level),
        }
    }
}

/// Sorts `records` in place. Equal keys keep their existing relative order.
pub fn sort_records(records: &mut [&MetricsRecord], key: SortKey, order: SortOrder) {
    match order {
        SortOrder::Asc => records.sort_by(|a, b| key.compare(a, b)),
        SortOrder::Desc => records.sort_by(|a, b| key.compare(b, a)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hospital_fragility_metrics_models::RiskLevel;

    fn record(id: &str, name: &str, score: f64, beds: u32) -> MetricsRecord {
        MetricsRecord {
            id: id.to_string(),
            name: name.to_string(),
            latitude: 47.0,
            longitude: -122.0,
            city: "Olympia".to_string(),
            state: "Washington".to_string(),
            country: "United States".to_string(),
            country_code: "USA".to_string(),
            fragility_score: score,
            capacity_utilization: 0.8,
            staffing_level: 0.8,
            equipment_condition: 0.8,
            supply_chain_resilience: 0.8,
            infrastructure_age: 0.3,
            total_beds: beds,
            icu_beds: 0,
            occupancy_rate: 0.7,
            emergency_capacity: 10,
            risk_level: RiskLevel::from_score(score),
            vulnerability_index: score,
            disaster_readiness: 0.6,
            last_assessment: "2025-05-05".to_string(),
        }
    }

    #[test]
    fn parses_query_values() {
        assert_eq!("fragilityScore".parse::<SortKey>().unwrap(), SortKey::FragilityScore);
        assert_eq!("totalBeds".parse::<SortKey>().unwrap(), SortKey::TotalBeds);
        assert_eq!("asc".parse::<SortOrder>().unwrap(), SortOrder::Asc);
        assert!("beds".parse::<SortKey>().is_err());
        assert!("up".parse::<SortOrder>().is_err());
        assert_eq!(SortOrder::default(), SortOrder::Desc);
    }

    #[test]
    fn sorts_by_score_descending() {
        let records = [
            record("wa-001", "A", 0.2, 10),
            record("wa-002", "B", 0.6, 20),
            record("wa-003", "C", 0.4, 30),
        ];
        let mut refs: Vec<&MetricsRecord> = records.iter().collect();
        sort_records(&mut refs, SortKey::FragilityScore, SortOrder::Desc);
        let ids: Vec<&str> = refs.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["wa-002", "wa-003", "wa-001"]);
    }

    #[test]
    fn name_sort_ignores_case() {
        let records = [
            record("wa-001", "walla walla", 0.2, 10),
            record("wa-002", "Aberdeen", 0.2, 10),
        ];
        let mut refs: Vec<&MetricsRecord> = records.iter().collect();
        sort_records(&mut refs, SortKey::Name, SortOrder::Asc);
        assert_eq!(refs[0].id, "wa-002");
    }

    #[test]
    fn ties_keep_input_order_in_both_directions() {
        let records = [
            record("wa-001", "A", 0.4, 10),
            record("wa-002", "B", 0.4, 10),
            record("wa-003", "C", 0.4, 10),
        ];
        for order in [SortOrder::Asc, SortOrder::Desc] {
            let mut refs: Vec<&MetricsRecord> = records.iter().collect();
            sort_records(&mut refs, SortKey::TotalBeds, order);
            let ids: Vec<&str> = refs.iter().map(|r| r.id.as_str()).collect();
            assert_eq!(ids, vec!["wa-001", "wa-002", "wa-003"]);
        }
    }
}
