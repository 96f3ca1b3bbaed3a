#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Read-only query layer over the projected hospital collection.
//!
//! [`HospitalIndex::build`] projects every raw record once at startup.
//! After that the index is immutable: every query is a plain read and
//! can be served from any number of threads without locking. Rebuilding
//! means constructing a new index (in practice, restarting the process).

pub mod sort;

use std::collections::HashMap;

use hospital_fragility_facility_models::RawFacilityRecord;
use hospital_fragility_metrics::{object_id_from_id, project, project_detail};
use hospital_fragility_metrics_models::{
    DetailRecord, MetricsRecord, Region, RiskLevel, SummaryRecord,
};
use thiserror::Error;

pub use sort::{SortKey, SortOrder, sort_records};

/// Errors returned by index queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// No id was supplied.
    #[error("Hospital ID is required")]
    MissingId,

    /// The id is not of the form `{prefix}-{digits}`.
    #[error("Invalid hospital ID: {0}")]
    InvalidId(String),

    /// The risk level is not one of the four tiers.
    #[error("Invalid risk level: {0}")]
    InvalidRiskLevel(String),

    /// A well-formed id with no matching record.
    #[error("Hospital not found")]
    NotFound(String),

    /// Unknown sort column.
    #[error("Invalid sort key: {0}")]
    InvalidSortKey(String),

    /// Unknown sort direction.
    #[error("Invalid sort order: {0}")]
    InvalidSortOrder(String),
}

/// Coarse outcome class of a [`QueryError`], for transports that need to
/// pick a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller supplied a missing or malformed parameter.
    BadRequest,
    /// The parameter was well formed but nothing matched.
    NotFound,
}

impl QueryError {
    /// Returns the outcome class of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::MissingId
            | Self::InvalidId(_)
            | Self::InvalidRiskLevel(_)
            | Self::InvalidSortKey(_)
            | Self::InvalidSortOrder(_) => ErrorKind::BadRequest,
        }
    }
}

/// Parses a risk level query value. Only the exact lowercase tier names
/// are accepted.
///
/// # Errors
///
/// Returns [`QueryError::InvalidRiskLevel`] for anything else.
pub fn parse_risk_level(value: &str) -> Result<RiskLevel, QueryError> {
    value
        .parse()
        .map_err(|_| QueryError::InvalidRiskLevel(value.to_string()))
}

/// Parses a sort column query value.
///
/// # Errors
///
/// Returns [`QueryError::InvalidSortKey`] if the column is unknown.
pub fn parse_sort_key(value: &str) -> Result<SortKey, QueryError> {
    value
        .parse()
        .map_err(|_| QueryError::InvalidSortKey(value.to_string()))
}

/// Parses a sort direction query value.
///
/// # Errors
///
/// Returns [`QueryError::InvalidSortOrder`] unless `value` is `asc` or
/// `desc`.
pub fn parse_sort_order(value: &str) -> Result<SortOrder, QueryError> {
    value
        .parse()
        .map_err(|_| QueryError::InvalidSortOrder(value.to_string()))
}

/// Aggregates a slice of records. An empty slice yields an all-zero
/// summary.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn summarize(records: &[MetricsRecord]) -> SummaryRecord {
    if records.is_empty() {
        return SummaryRecord {
            total_hospitals: 0,
            average_fragility_score: 0.0,
            critical_hospitals: 0,
            high_risk_hospitals: 0,
            total_bed_capacity: 0,
            average_occupancy: 0.0,
        };
    }

    let count = records.len() as f64;
    let tier_count = |level: RiskLevel| {
        records.iter().filter(|r| r.risk_level == level).count() as u64
    };

    SummaryRecord {
        total_hospitals: records.len() as u64,
        average_fragility_score: records.iter().map(|r| r.fragility_score).sum::<f64>() / count,
        critical_hospitals: tier_count(RiskLevel::Critical),
        high_risk_hospitals: tier_count(RiskLevel::High),
        total_bed_capacity: records.iter().map(|r| u64::from(r.total_beds)).sum(),
        average_occupancy: records.iter().map(|r| r.occupancy_rate).sum::<f64>() / count,
    }
}

/// Filters and ordering for a listing. A country filter takes precedence
/// over a risk filter; when neither is set every record is listed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Exact `iso3` country code.
    pub country_code: Option<String>,
    /// Risk tier.
    pub risk_level: Option<RiskLevel>,
    /// Column and direction; dataset order when `None`.
    pub sort: Option<(SortKey, SortOrder)>,
}

impl ListOptions {
    /// Builds listing options from raw parameter values, as supplied by a
    /// query string or command line. Empty values count as absent. The
    /// risk level is only parsed when no country filter overrides it, and
    /// `order` defaults to descending.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidRiskLevel`], [`QueryError::InvalidSortKey`]
    /// or [`QueryError::InvalidSortOrder`] for an unrecognized value.
    pub fn from_params(
        country_code: Option<&str>,
        risk_level: Option<&str>,
        sort_by: Option<&str>,
        order: Option<&str>,
    ) -> Result<Self, QueryError> {
        let country_code = non_empty(country_code).map(str::to_string);

        let risk_level = match non_empty(risk_level) {
            Some(level) if country_code.is_none() => Some(parse_risk_level(level)?),
            _ => None,
        };

        let order = non_empty(order)
            .map(parse_sort_order)
            .transpose()?
            .unwrap_or_default();
        let sort = non_empty(sort_by)
            .map(parse_sort_key)
            .transpose()?
            .map(|key| (key, order));

        Ok(Self {
            country_code,
            risk_level,
            sort,
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Immutable in-memory collection of projected hospitals.
#[derive(Debug, Clone)]
pub struct HospitalIndex {
    region: Region,
    records: Vec<MetricsRecord>,
    raw: Vec<RawFacilityRecord>,
    by_id: HashMap<String, usize>,
    raw_by_object_id: HashMap<i64, usize>,
    summary: SummaryRecord,
}

impl HospitalIndex {
    /// Projects every raw record and indexes the results. Dataset order is
    /// preserved. On duplicate ids the first record wins for id lookups.
    #[must_use]
    pub fn build(raw: Vec<RawFacilityRecord>, region: Region) -> Self {
        log::info!(
            "Projecting {} facilities for region '{}'",
            raw.len(),
            region.code
        );

        let records: Vec<MetricsRecord> = raw.iter().map(|r| project(r, &region)).collect();

        let mut by_id = HashMap::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            if by_id.contains_key(&record.id) {
                log::warn!("Duplicate hospital id {}; keeping first occurrence", record.id);
                continue;
            }
            by_id.insert(record.id.clone(), i);
        }

        let mut raw_by_object_id = HashMap::with_capacity(raw.len());
        for (i, record) in raw.iter().enumerate() {
            raw_by_object_id.entry(record.object_id).or_insert(i);
        }

        let summary = summarize(&records);
        log::info!(
            "Indexed {} hospitals ({} high risk, {} critical)",
            summary.total_hospitals,
            summary.high_risk_hospitals,
            summary.critical_hospitals
        );

        Self {
            region,
            records,
            raw,
            by_id,
            raw_by_object_id,
            summary,
        }
    }

    /// The region every record was projected for.
    #[must_use]
    pub const fn region(&self) -> &Region {
        &self.region
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the index holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in dataset order.
    #[must_use]
    pub fn get_all(&self) -> &[MetricsRecord] {
        &self.records
    }

    /// Looks up a record by its exact id.
    #[must_use]
    pub fn get_by_id(&self, id: &str) -> Option<&MetricsRecord> {
        self.by_id.get(id).map(|&i| &self.records[i])
    }

    /// Records whose `iso3` code equals `code` exactly.
    #[must_use]
    pub fn get_by_country_code(&self, code: &str) -> Vec<&MetricsRecord> {
        self.records
            .iter()
            .filter(|r| r.country_code == code)
            .collect()
    }

    /// Records in the given risk tier.
    #[must_use]
    pub fn get_by_risk_level(&self, level: RiskLevel) -> Vec<&MetricsRecord> {
        self.records
            .iter()
            .filter(|r| r.risk_level == level)
            .collect()
    }

    /// Lists records according to `options`.
    #[must_use]
    pub fn list(&self, options: &ListOptions) -> Vec<&MetricsRecord> {
        let mut records = if let Some(code) = options.country_code.as_deref() {
            self.get_by_country_code(code)
        } else if let Some(level) = options.risk_level {
            self.get_by_risk_level(level)
        } else {
            self.records.iter().collect()
        };

        if let Some((key, order)) = options.sort {
            sort_records(&mut records, key, order);
        }

        records
    }

    /// Aggregate statistics over the whole collection.
    #[must_use]
    pub const fn summary(&self) -> &SummaryRecord {
        &self.summary
    }

    /// Builds the detail view for `id`.
    ///
    /// # Errors
    ///
    /// * [`QueryError::MissingId`] if `id` is blank
    /// * [`QueryError::InvalidId`] if `id` is not `{prefix}-{digits}`
    /// * [`QueryError::NotFound`] if no record has that id
    pub fn get_detail(&self, id: &str) -> Result<DetailRecord, QueryError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(QueryError::MissingId);
        }

        let object_id = object_id_from_id(&self.region, id)
            .ok_or_else(|| QueryError::InvalidId(id.to_string()))?;
        let metrics = self
            .get_by_id(id)
            .ok_or_else(|| QueryError::NotFound(id.to_string()))?;

        let raw = self
            .raw_by_object_id
            .get(&object_id)
            .map(|&i| &self.raw[i]);
        if raw.is_none() {
            log::debug!("No raw record for {id}; using regional fallbacks");
        }

        Ok(project_detail(metrics, raw, &self.region))
    }
}
