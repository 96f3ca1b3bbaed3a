//! Plain-text rendering for terminal output.

use hospital_fragility_metrics_models::{DetailRecord, MetricsRecord, SummaryRecord};

const NAME_WIDTH: usize = 40;
const CITY_WIDTH: usize = 18;

/// Compact number: `1.2M`, `3.4K`, or a whole number below one thousand.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else {
        format!("{value:.0}")
    }
}

/// Whole-number percentage of a 0-1 ratio, e.g. `0.42` -> `42%`.
#[must_use]
pub fn format_percent(ratio: f64) -> String {
    format!("{:.0}%", ratio * 100.0)
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() > width {
        let head: String = s.chars().take(width.saturating_sub(3)).collect();
        format!("{head}...")
    } else {
        s.to_string()
    }
}

/// Renders a hospital listing as an aligned table.
#[must_use]
pub fn render_table(records: &[&MetricsRecord]) -> String {
    if records.is_empty() {
        return "No hospitals found.".to_string();
    }

    let mut lines = vec![
        format!(
            "{:<8} {:<NAME_WIDTH$} {:<CITY_WIDTH$} {:>5} {:>6} {:<8} {:>4}",
            "ID", "NAME", "CITY", "BEDS", "SCORE", "RISK", "OCC"
        ),
        "-".repeat(8 + NAME_WIDTH + CITY_WIDTH + 5 + 6 + 8 + 4 + 6),
    ];

    for r in records {
        lines.push(format!(
            "{:<8} {:<NAME_WIDTH$} {:<CITY_WIDTH$} {:>5} {:>6.2} {:<8} {:>4}",
            r.id,
            truncate(&r.name, NAME_WIDTH),
            truncate(&r.city, CITY_WIDTH),
            r.total_beds,
            r.fragility_score,
            r.risk_level,
            format_percent(r.occupancy_rate),
        ));
    }

    lines.push(String::new());
    lines.push(format!("{} hospital(s)", records.len()));
    lines.join("\n")
}

/// Renders the collection summary as labelled lines.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn render_summary(summary: &SummaryRecord) -> String {
    [
        format!("Total hospitals:       {}", summary.total_hospitals),
        format!(
            "Average fragility:     {:.2}",
            summary.average_fragility_score
        ),
        format!("Critical risk:         {}", summary.critical_hospitals),
        format!("High risk:             {}", summary.high_risk_hospitals),
        format!(
            "Total bed capacity:    {}",
            format_number(summary.total_bed_capacity as f64)
        ),
        format!(
            "Average occupancy:     {}",
            format_percent(summary.average_occupancy)
        ),
    ]
    .join("\n")
}

/// Renders the full detail view for one hospital.
#[must_use]
pub fn render_detail(detail: &DetailRecord) -> String {
    let m = &detail.metrics;

    let mut lines = vec![
        format!("{} ({})", m.name, m.id),
        detail.address.clone(),
        detail.phone.clone(),
        String::new(),
        format!(
            "Type: {}   Ownership: {}   Accreditation: {}",
            detail.facility_type, detail.ownership, detail.accreditation
        ),
        format!(
            "Established {}   Staff {}   Doctors {}   Nurses {}",
            detail.year_established, detail.staff_count, detail.doctor_count, detail.nurse_count
        ),
        String::new(),
        format!(
            "Fragility score: {:.2} ({})   Vulnerability: {:.2}",
            m.fragility_score, m.risk_level, m.vulnerability_index
        ),
        format!(
            "Beds: {} total, {} ICU, {} emergency   Occupancy: {}",
            m.total_beds,
            m.icu_beds,
            m.emergency_capacity,
            format_percent(m.occupancy_rate)
        ),
        format!(
            "Staffing {}   Equipment {}   Supply chain {}   Readiness {}",
            format_percent(m.staffing_level),
            format_percent(m.equipment_condition),
            format_percent(m.supply_chain_resilience),
            format_percent(m.disaster_readiness)
        ),
        format!("Last assessment: {}", m.last_assessment),
        String::new(),
        "Trend:".to_string(),
    ];

    lines.extend(detail.trends.iter().map(|t| {
        format!(
            "  {}  score {:.2}  occupancy {}",
            t.date,
            t.fragility_score,
            format_percent(t.occupancy_rate)
        )
    }));

    lines.push(String::new());
    lines.push("Risk factors:".to_string());
    lines.extend(detail.risk_factors.iter().map(|f| format!("  - {f}")));

    lines.push(String::new());
    lines.push("Recommendations:".to_string());
    lines.extend(detail.recommendations.iter().map(|r| format!("  - {r}")));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use hospital_fragility_dataset::parse_feature_collection;
    use hospital_fragility_metrics::default_region;
    use hospital_fragility_query::HospitalIndex;

    const SAMPLE: &str = include_str!("../../dataset/fixtures/wa_hospitals_sample.geojson");

    fn index() -> HospitalIndex {
        HospitalIndex::build(parse_feature_collection(SAMPLE).unwrap(), default_region())
    }

    #[test]
    fn formats_numbers() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(670.0), "670");
        assert_eq!(format_number(999.0), "999");
        assert_eq!(format_number(1_500.0), "1.5K");
        assert_eq!(format_number(2_400_000.0), "2.4M");
    }

    #[test]
    fn formats_percentages() {
        assert_eq!(format_percent(0.42), "42%");
        assert_eq!(format_percent(0.876), "88%");
        assert_eq!(format_percent(0.0), "0%");
        assert_eq!(format_percent(1.0), "100%");
    }

    #[test]
    fn truncates_long_names() {
        assert_eq!(truncate("Olympia", 10), "Olympia");
        assert_eq!(truncate("Providence Sacred Heart", 10), "Provide...");
        assert_eq!(truncate("Providence Sacred Heart", 10).chars().count(), 10);
    }

    #[test]
    fn table_lists_every_record() {
        let index = index();
        let records: Vec<_> = index.get_all().iter().collect();
        let table = render_table(&records);
        assert!(table.starts_with("ID"));
        for r in &records {
            assert!(table.contains(&r.id), "missing {}", r.id);
        }
        assert!(table.ends_with("6 hospital(s)"));
    }

    #[test]
    fn empty_table_says_so() {
        assert_eq!(render_table(&[]), "No hospitals found.");
    }

    #[test]
    fn summary_shows_totals() {
        let index = index();
        let text = render_summary(index.summary());
        assert!(text.contains("Total hospitals:       6"));
        assert!(text.contains("Total bed capacity:    670"));
        assert!(text.contains("High risk:             2"));
    }

    #[test]
    fn detail_shows_narrative() {
        let detail = index().get_detail("wa-001").unwrap();
        let text = render_detail(&detail);
        assert!(text.starts_with("Harborview Medical Center (wa-001)"));
        assert!(text.contains("325 9th Ave, Seattle, WA 98104"));
        assert!(text.contains("Risk factors:"));
        assert!(text.contains("Recommendations:"));
        for factor in &detail.risk_factors {
            assert!(text.contains(factor.as_str()));
        }
    }
}
