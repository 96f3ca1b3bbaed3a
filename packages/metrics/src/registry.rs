//! Compile-time registry of dataset regions.
//!
//! Each entry is a `(code, toml_content)` pair embedded via `include_str!`.
//! Supporting another state's hospital dataset requires creating a TOML
//! file in `regions/` and adding a corresponding entry here.

use hospital_fragility_metrics_models::Region;

/// Code of the region used when none is configured.
pub const DEFAULT_REGION_CODE: &str = "wa";

/// Number of registered regions. Enforced by a test.
#[cfg(test)]
const EXPECTED_REGION_COUNT: usize = 1;

/// Embedded TOML region definitions.
const REGION_TOMLS: &[(&str, &str)] = &[("wa", include_str!("../regions/washington.toml"))];

/// Returns all registered regions.
///
/// # Panics
///
/// Panics if any embedded TOML file fails to parse. Since these are
/// compile-time constants, parse failures indicate a development error
/// and are caught by the tests below.
#[must_use]
pub fn all_regions() -> Vec<Region> {
    REGION_TOMLS
        .iter()
        .map(|(code, toml_str)| {
            toml::de::from_str(toml_str)
                .unwrap_or_else(|e| panic!("Failed to parse region '{code}': {e}"))
        })
        .collect()
}

/// Looks up a region by code, case-insensitively.
#[must_use]
pub fn find_region(code: &str) -> Option<Region> {
    all_regions()
        .into_iter()
        .find(|r| r.code.eq_ignore_ascii_case(code.trim()))
}

/// Returns the Washington State region.
///
/// # Panics
///
/// Panics if the default region is missing from the registry, which the
/// tests below rule out.
#[must_use]
pub fn default_region() -> Region {
    find_region(DEFAULT_REGION_CODE)
        .unwrap_or_else(|| panic!("Default region '{DEFAULT_REGION_CODE}' is not registered"))
}
