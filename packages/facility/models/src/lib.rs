#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Raw hospital facility record types.
//!
//! A [`RawFacilityRecord`] is one feature of the static hospitals dataset
//! after the loader has normalized its `"Yes"`/`"No"` flags and bed counts.
//! Capability flags stay three-valued: `None` means the dataset left the
//! value blank, which is not the same as an explicit `"No"`. Records are
//! the source of truth for every derived metric and are never mutated
//! after loading.

use serde::{Deserialize, Serialize};

/// A single hospital facility as described by the source dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFacilityRecord {
    /// Numeric dataset identifier (`OBJECTID`).
    pub object_id: i64,
    /// Facility name, untrimmed.
    pub name: String,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// Postal code.
    pub zip: String,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Facility website.
    pub web_link: Option<String>,
    /// Whether the facility provides acute care; `None` if not recorded.
    pub has_acute_care: Option<bool>,
    /// Whether the facility has an intensive care unit; `None` if not
    /// recorded.
    pub has_icu: Option<bool>,
    /// Whether the facility is a designated Critical Access Hospital.
    pub is_critical_access: bool,
    /// Whether the facility has a helipad; `None` if not recorded.
    pub has_helipad: Option<bool>,
    /// Total licensed beds.
    pub total_beds: u32,
    /// ICU beds.
    pub icu_beds: u32,
    /// Psychiatric beds.
    pub psychiatric_beds: u32,
    /// Last-updated timestamp exactly as it appeared in the dataset.
    pub updated: Option<String>,
    /// Longitude.
    pub longitude: f64,
    /// Latitude.
    pub latitude: f64,
}

impl RawFacilityRecord {
    /// Returns `true` if every bed in the facility is a psychiatric bed.
    #[must_use]
    pub const fn is_psychiatric_only(&self) -> bool {
        self.psychiatric_beds > 0 && self.psychiatric_beds == self.total_beds
    }

    /// Returns `true` only if the dataset explicitly says the facility
    /// has no ICU.
    #[must_use]
    pub const fn lacks_icu(&self) -> bool {
        matches!(self.has_icu, Some(false))
    }

    /// Returns `true` only if the dataset explicitly says the facility
    /// has no helipad.
    #[must_use]
    pub const fn lacks_helipad(&self) -> bool {
        matches!(self.has_helipad, Some(false))
    }
}
