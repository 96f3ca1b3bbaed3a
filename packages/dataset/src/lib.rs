#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Loader for the static hospitals `GeoJSON` dataset.
//!
//! Reads a `FeatureCollection` of hospital points (an `ArcGIS` export) and
//! normalizes each feature into a [`RawFacilityRecord`]. This is the only
//! place in the workspace that touches the filesystem for hospital data.

pub mod properties;

use std::path::{Path, PathBuf};

use geojson::{GeoJson, feature::Id};
use hospital_fragility_facility_models::RawFacilityRecord;
use thiserror::Error;

use crate::properties::FacilityProperties;

/// Default location of the Washington State hospitals dataset.
pub const DEFAULT_DATA_PATH: &str = "data/WA_Hospitals.json";

/// Errors that can occur while loading the dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The dataset file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The document is not valid `GeoJSON`.
    #[error("Invalid GeoJSON: {0}")]
    GeoJson(#[from] Box<geojson::Error>),

    /// The document is valid `GeoJSON` but not a `FeatureCollection`.
    #[error("Expected a GeoJSON FeatureCollection")]
    NotFeatureCollection,

    /// A feature's properties could not be decoded.
    #[error("Invalid properties on feature {index}: {source}")]
    Properties {
        /// Zero-based position of the feature in the collection.
        index: usize,
        /// Underlying decode error.
        source: serde_json::Error,
    },

    /// A feature has neither an `OBJECTID` property nor a numeric feature id.
    #[error("Feature {index} has no OBJECTID")]
    MissingObjectId {
        /// Zero-based position of the feature in the collection.
        index: usize,
    },

    /// A feature's `OBJECTID` is negative and cannot form a hospital id.
    #[error("Feature {index} has negative OBJECTID {object_id}")]
    NegativeObjectId {
        /// Zero-based position of the feature in the collection.
        index: usize,
        /// The offending identifier.
        object_id: i64,
    },
}

/// Reads and parses the dataset at `path`.
///
/// # Errors
///
/// Returns [`DatasetError::Io`] if the file cannot be read, or any error
/// from [`parse_feature_collection`].
pub fn load_from_path(path: &Path) -> Result<Vec<RawFacilityRecord>, DatasetError> {
    log::info!("Loading hospitals from {}", path.display());
    let contents = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_feature_collection(&contents)
}

/// Parses a `GeoJSON` `FeatureCollection` of hospital points.
///
/// Features without a `Point` geometry are skipped with a warning. Input
/// order is preserved.
///
/// # Errors
///
/// Returns an error if the document is not a valid `FeatureCollection`, if
/// any feature's properties fail to decode, or if a feature's `OBJECTID`
/// is missing or negative.
pub fn parse_feature_collection(contents: &str) -> Result<Vec<RawFacilityRecord>, DatasetError> {
    let geojson: GeoJson = contents.parse().map_err(Box::new)?;
    let GeoJson::FeatureCollection(collection) = geojson else {
        return Err(DatasetError::NotFeatureCollection);
    };

    let total = collection.features.len();
    let mut records = Vec::with_capacity(total);

    for (index, feature) in collection.features.into_iter().enumerate() {
        let Some((longitude, latitude)) = point_coordinates(feature.geometry.as_ref()) else {
            log::warn!("Skipping feature {index}: geometry is not a Point");
            continue;
        };

        let props: FacilityProperties = serde_json::from_value(serde_json::Value::Object(
            feature.properties.unwrap_or_default(),
        ))
        .map_err(|source| DatasetError::Properties { index, source })?;

        let object_id = props
            .object_id
            .or_else(|| match &feature.id {
                Some(Id::Number(n)) => n.as_i64(),
                Some(Id::String(s)) => s.parse().ok(),
                None => None,
            })
            .ok_or(DatasetError::MissingObjectId { index })?;
        if object_id < 0 {
            return Err(DatasetError::NegativeObjectId { index, object_id });
        }

        records.push(RawFacilityRecord {
            object_id,
            name: props.name.unwrap_or_default(),
            address: props.address.unwrap_or_default(),
            city: props.city.unwrap_or_default(),
            zip: props.zip.unwrap_or_default(),
            phone: props.phone,
            web_link: props.web_link,
            has_acute_care: props.acute,
            has_icu: props.icu,
            is_critical_access: props.critical_access,
            has_helipad: props.helipad,
            total_beds: props.beds_total,
            icu_beds: props.beds_icu,
            psychiatric_beds: props.beds_psychiatric,
            updated: props.updated,
            longitude,
            latitude,
        });
    }

    log::debug!("Parsed {} of {total} features", records.len());

    Ok(records)
}

/// Extracts `(longitude, latitude)` from a `Point` geometry.
fn point_coordinates(geometry: Option<&geojson::Geometry>) -> Option<(f64, f64)> {
    match &geometry?.value {
        geojson::Value::Point(position) => Some((*position.first()?, *position.get(1)?)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = include_str!("../fixtures/wa_hospitals_sample.geojson");

    #[test]
    fn parses_sample_in_order() {
        let records = parse_feature_collection(SAMPLE).unwrap();
        let ids: Vec<i64> = records.iter().map(|r| r.object_id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 7]);
    }

    #[test]
    fn maps_properties() {
        let records = parse_feature_collection(SAMPLE).unwrap();
        let harborview = &records[0];
        assert_eq!(harborview.name, "Harborview Medical Center ");
        assert_eq!(harborview.city, "Seattle");
        assert_eq!(harborview.has_acute_care, Some(true));
        assert_eq!(harborview.has_icu, Some(true));
        assert!(!harborview.is_critical_access);
        assert_eq!(harborview.has_helipad, Some(true));
        assert_eq!(harborview.total_beds, 413);
        assert_eq!(harborview.icu_beds, 64);
        assert!((harborview.longitude - -122.3238).abs() < f64::EPSILON);
        assert!((harborview.latitude - 47.6040).abs() < f64::EPSILON);
    }

    #[test]
    fn normalizes_loose_values() {
        let records = parse_feature_collection(SAMPLE).unwrap();
        let whidbey = records.iter().find(|r| r.object_id == 3).unwrap();
        assert_eq!(whidbey.zip, "98239");
        assert_eq!(whidbey.updated.as_deref(), Some("1700000000000"));

        let navos = records.iter().find(|r| r.object_id == 4).unwrap();
        assert_eq!(navos.phone, None);
        assert_eq!(navos.icu_beds, 0);
        assert!(navos.is_psychiatric_only());

        let ferry = records.iter().find(|r| r.object_id == 5).unwrap();
        assert_eq!(ferry.total_beds, 25);
        assert_eq!(ferry.updated, None);
    }

    #[test]
    fn rejects_non_collections() {
        let point = r#"{ "type": "Point", "coordinates": [0.0, 0.0] }"#;
        assert!(matches!(
            parse_feature_collection(point),
            Err(DatasetError::NotFeatureCollection)
        ));
        assert!(matches!(
            parse_feature_collection("not json"),
            Err(DatasetError::GeoJson(_))
        ));
    }

    #[test]
    fn falls_back_to_feature_id() {
        let doc = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "id": 42,
                "geometry": { "type": "Point", "coordinates": [-120.5, 47.1] },
                "properties": { "NAME": "Clinic", "Beds_Total": 12 }
            }]
        }"#;
        let records = parse_feature_collection(doc).unwrap();
        assert_eq!(records[0].object_id, 42);
        assert_eq!(records[0].total_beds, 12);
        assert_eq!(records[0].has_icu, None);
    }

    #[test]
    fn absent_flags_are_unknown() {
        let doc = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [-120.5, 47.1] },
                "properties": { "OBJECTID": 9, "Beds_Total": 100, "ICU": null, "Heli": "Yes" }
            }]
        }"#;
        let records = parse_feature_collection(doc).unwrap();
        assert_eq!(records[0].has_acute_care, None);
        assert_eq!(records[0].has_icu, None);
        assert_eq!(records[0].has_helipad, Some(true));
        assert!(!records[0].lacks_icu());
    }

    #[test]
    fn reports_bad_properties_with_index() {
        let doc = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [-120.5, 47.1] },
                "properties": { "OBJECTID": 1, "Beds_Total": "lots" }
            }]
        }"#;
        assert!(matches!(
            parse_feature_collection(doc),
            Err(DatasetError::Properties { index: 0, .. })
        ));
    }

    #[test]
    fn missing_object_id_is_an_error() {
        let doc = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [-120.5, 47.1] },
                "properties": { "NAME": "Clinic" }
            }]
        }"#;
        assert!(matches!(
            parse_feature_collection(doc),
            Err(DatasetError::MissingObjectId { index: 0 })
        ));
    }

    #[test]
    fn negative_object_id_is_an_error() {
        let doc = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [-120.5, 47.1] },
                "properties": { "OBJECTID": -7, "NAME": "Clinic" }
            }]
        }"#;
        let err = parse_feature_collection(doc).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::NegativeObjectId {
                index: 0,
                object_id: -7
            }
        ));
        assert_eq!(err.to_string(), "Feature 0 has negative OBJECTID -7");
    }

    #[test]
    fn negative_feature_id_is_an_error() {
        let doc = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "id": -3,
                "geometry": { "type": "Point", "coordinates": [-120.5, 47.1] },
                "properties": { "NAME": "Clinic" }
            }]
        }"#;
        assert!(matches!(
            parse_feature_collection(doc),
            Err(DatasetError::NegativeObjectId { object_id: -3, .. })
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_from_path(Path::new("does/not/exist.geojson")).unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
    }
}
