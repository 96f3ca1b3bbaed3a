//! Reproducible pseudo-random values for synthesized demo metrics.
//!
//! This is not a statistically sound generator. It exists so that metrics
//! the dataset lacks look plausible and stay identical across runs.

/// Maps an integer seed to a value in `[0, 1)`.
///
/// Computes `frac(sin(seed * 9999) * 10000)`. Only IEEE-754 double
/// arithmetic is involved, so the same seed yields the same bits in every
/// process.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn seeded_value(seed: i64) -> f64 {
    let x = (seed as f64 * 9999.0).sin() * 10000.0;
    let fraction = x - x.floor();
    // A tiny negative `x` rounds `x - floor(x)` up to exactly 1.0.
    if fraction >= 1.0 { 0.0 } else { fraction }
}

/// The synthesized fields of a facility, each with its own seed multiplier.
///
/// The seed for a field is `object_id * multiplier`. Two fields sharing a
/// multiplier would draw identical values, so every variant must map to a
/// distinct one; `multipliers_are_unique` enforces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeedField {
    /// Capacity utilization offset.
    CapacityUtilization,
    /// Staffing level offset.
    Staffing,
    /// Equipment condition offset.
    Equipment,
    /// Supply chain resilience offset.
    SupplyChain,
    /// Infrastructure age offset.
    InfrastructureAge,
    /// Occupancy rate offset.
    Occupancy,
    /// Vulnerability index jitter.
    Vulnerability,
    /// Disaster readiness offset.
    DisasterReadiness,
    /// First ownership draw (nonprofit).
    Ownership,
    /// Second ownership draw (public vs. private).
    PublicOwnership,
    /// Founding year.
    YearEstablished,
    /// Staff count jitter.
    Staff,
    /// Doctor count jitter.
    Doctors,
    /// Nurse count jitter.
    Nurses,
}

impl SeedField {
    /// Multiplier applied to the facility id to derive this field's seed.
    #[must_use]
    pub const fn multiplier(self) -> i64 {
        match self {
            Self::CapacityUtilization => 1,
            Self::Staffing => 2,
            Self::Equipment => 3,
            Self::SupplyChain => 4,
            Self::InfrastructureAge => 5,
            Self::Occupancy => 6,
            Self::Vulnerability => 7,
            Self::DisasterReadiness => 8,
            Self::Ownership => 10,
            Self::PublicOwnership => 11,
            Self::YearEstablished => 12,
            Self::Staff => 13,
            Self::Doctors => 14,
            Self::Nurses => 15,
        }
    }

    /// Draws this field's value for a facility.
    #[must_use]
    pub fn draw(self, object_id: i64) -> f64 {
        seeded_value(object_id.saturating_mul(self.multiplier()))
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::CapacityUtilization,
            Self::Staffing,
            Self::Equipment,
            Self::SupplyChain,
            Self::InfrastructureAge,
            Self::Occupancy,
            Self::Vulnerability,
            Self::DisasterReadiness,
            Self::Ownership,
            Self::PublicOwnership,
            Self::YearEstablished,
            Self::Staff,
            Self::Doctors,
            Self::Nurses,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn values_stay_in_unit_interval() {
        for seed in -2_000..2_000 {
            let v = seeded_value(seed);
            assert!((0.0..1.0).contains(&v), "seed {seed} produced {v}");
        }
        for seed in [i64::MIN, i64::MAX, 0] {
            let v = seeded_value(seed);
            assert!((0.0..1.0).contains(&v), "seed {seed} produced {v}");
        }
    }

    #[test]
    fn same_seed_same_bits() {
        for seed in [1, 7, 42, 999, 123_456] {
            assert_eq!(seeded_value(seed).to_bits(), seeded_value(seed).to_bits());
        }
    }

    #[test]
    fn zero_seed_is_zero() {
        assert!(seeded_value(0).abs() < f64::EPSILON);
    }

    #[test]
    fn different_seeds_differ() {
        assert!((seeded_value(1) - seeded_value(2)).abs() > f64::EPSILON);
    }

    #[test]
    fn multipliers_are_unique() {
        let mut seen = BTreeSet::new();
        for field in SeedField::all() {
            assert!(
                seen.insert(field.multiplier()),
                "{field:?} reuses multiplier {}",
                field.multiplier()
            );
        }
        assert_eq!(seen.len(), SeedField::all().len());
    }

    #[test]
    fn draw_uses_field_multiplier() {
        let id = 17;
        for field in SeedField::all() {
            assert_eq!(
                field.draw(id).to_bits(),
                seeded_value(id * field.multiplier()).to_bits()
            );
        }
    }
}
