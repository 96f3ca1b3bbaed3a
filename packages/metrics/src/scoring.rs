//! Fragility scoring.
//!
//! A facility starts at a base score and each characteristic nudges it up
//! (more fragile) or down (more resilient). The result is clamped to
//! [`MIN_SCORE`, `MAX_SCORE`].

use hospital_fragility_facility_models::RawFacilityRecord;
use hospital_fragility_metrics_models::RiskLevel;

/// Starting score before any adjustments.
pub const BASE_SCORE: f64 = 0.3;

/// Lowest score a facility can receive.
pub const MIN_SCORE: f64 = 0.1;

/// Highest score a facility can receive.
pub const MAX_SCORE: f64 = 0.8;

/// Computes the fragility score for a facility.
///
/// Adjustments are applied in a fixed order so the floating-point result
/// is reproducible:
///
/// * beds >= 400: -0.10, else beds >= 200: -0.05, else beds < 50: +0.10
/// * ICU: -0.05
/// * more than 30 ICU beds: -0.05
/// * explicitly no acute care: +0.15
/// * helipad: -0.03
///
/// An unrecorded flag triggers neither its bonus nor its penalty.
/// * Critical Access Hospital: +0.08
/// * psychiatric-only: +0.05
#[must_use]
pub fn fragility_score(record: &RawFacilityRecord) -> f64 {
    let mut score = BASE_SCORE;

    if record.total_beds >= 400 {
        score -= 0.1;
    } else if record.total_beds >= 200 {
        score -= 0.05;
    } else if record.total_beds < 50 {
        score += 0.1;
    }

    if record.has_icu == Some(true) {
        score -= 0.05;
    }
    if record.icu_beds > 30 {
        score -= 0.05;
    }

    if record.has_acute_care == Some(false) {
        score += 0.15;
    }

    if record.has_helipad == Some(true) {
        score -= 0.03;
    }

    if record.is_critical_access {
        score += 0.08;
    }

    if record.is_psychiatric_only() {
        score += 0.05;
    }

    score.clamp(MIN_SCORE, MAX_SCORE)
}

/// Classifies a score into its [`RiskLevel`].
#[must_use]
pub fn risk_level(score: f64) -> RiskLevel {
    RiskLevel::from_score(score)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn facility() -> RawFacilityRecord {
        RawFacilityRecord {
            object_id: 7,
            name: "  Providence St. Peter Hospital ".to_string(),
            address: "413 Lilly Rd NE".to_string(),
            city: "Olympia".to_string(),
            zip: "98506".to_string(),
            phone: Some("360-491-9480".to_string()),
            web_link: None,
            has_acute_care: Some(true),
            has_icu: Some(true),
            is_critical_access: false,
            has_helipad: Some(false),
            total_beds: 120,
            icu_beds: 12,
            psychiatric_beds: 0,
            updated: Some("2024-03-15T00:00:00Z".to_string()),
            longitude: -122.8456,
            latitude: 47.0495,
        }
    }

    #[test]
    fn resilient_facility_clamps_to_floor() {
        let record = RawFacilityRecord {
            total_beds: 550,
            has_icu: Some(true),
            icu_beds: 40,
            has_acute_care: Some(true),
            has_helipad: Some(true),
            is_critical_access: false,
            psychiatric_beds: 0,
            ..facility()
        };
        let score = fragility_score(&record);
        assert!((score - 0.1).abs() < f64::EPSILON, "got {score}");
        assert_eq!(risk_level(score), RiskLevel::Low);
    }

    #[test]
    fn fragile_psychiatric_facility_is_high() {
        let record = RawFacilityRecord {
            total_beds: 30,
            has_icu: Some(false),
            icu_beds: 0,
            has_acute_care: Some(false),
            has_helipad: Some(false),
            is_critical_access: true,
            psychiatric_beds: 30,
            ..facility()
        };
        let score = fragility_score(&record);
        assert!((score - 0.68).abs() < 1e-9, "got {score}");
        assert_eq!(risk_level(score), RiskLevel::High);
    }

    #[test]
    fn unknown_acute_status_adds_nothing() {
        let record = RawFacilityRecord {
            object_id: 9,
            total_beds: 100,
            icu_beds: 0,
            has_acute_care: None,
            has_icu: None,
            has_helipad: Some(true),
            ..facility()
        };
        let score = fragility_score(&record);
        assert!((score - 0.27).abs() < 1e-9, "got {score}");
        assert_eq!(risk_level(score), RiskLevel::Low);

        let explicit_no = RawFacilityRecord {
            has_acute_care: Some(false),
            ..record
        };
        assert!((fragility_score(&explicit_no) - 0.42).abs() < 1e-9);
    }

    #[test]
    fn unknown_icu_and_helipad_earn_no_bonus() {
        let record = RawFacilityRecord {
            has_icu: None,
            has_helipad: None,
            ..facility()
        };
        let explicit_no = RawFacilityRecord {
            has_icu: Some(false),
            has_helipad: Some(false),
            ..facility()
        };
        assert!((fragility_score(&record) - fragility_score(&explicit_no)).abs() < f64::EPSILON);
        assert!((fragility_score(&record) - 0.3).abs() < 1e-9);
    }

    #[test]
    fn bed_rules_are_mutually_exclusive() {
        let base = RawFacilityRecord {
            has_icu: Some(false),
            icu_beds: 0,
            ..facility()
        };
        let score_for = |beds| {
            fragility_score(&RawFacilityRecord {
                total_beds: beds,
                ..base.clone()
            })
        };
        assert!((score_for(400) - 0.2).abs() < 1e-9);
        assert!((score_for(399) - 0.25).abs() < 1e-9);
        assert!((score_for(200) - 0.25).abs() < 1e-9);
        assert!((score_for(100) - 0.3).abs() < 1e-9);
        assert!((score_for(50) - 0.3).abs() < 1e-9);
        assert!((score_for(49) - 0.4).abs() < 1e-9);
    }

    #[test]
    fn icu_bed_bonus_needs_more_than_thirty() {
        let with = |icu_beds| {
            fragility_score(&RawFacilityRecord {
                icu_beds,
                ..facility()
            })
        };
        assert!((with(30) - with(31) - 0.05).abs() < 1e-9);
    }

    #[test]
    fn score_is_always_within_bounds() {
        for beds in [0, 10, 49, 50, 199, 200, 399, 400, 1000] {
            for flags in 0..32u8 {
                let record = RawFacilityRecord {
                    total_beds: beds,
                    icu_beds: if flags & 1 == 0 { 0 } else { 45 },
                    has_icu: Some(flags & 2 != 0),
                    has_acute_care: Some(flags & 4 != 0),
                    has_helipad: Some(flags & 8 != 0),
                    is_critical_access: flags & 16 != 0,
                    psychiatric_beds: beds,
                    ..facility()
                };
                let score = fragility_score(&record);
                assert!(
                    (MIN_SCORE..=MAX_SCORE).contains(&score),
                    "beds={beds} flags={flags:05b} score={score}"
                );
            }
        }
    }
}
