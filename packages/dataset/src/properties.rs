//! Serde mapping for the ArcGIS hospital feature properties.
//!
//! The export is loosely typed: flags are `"Yes"`/`"No"` strings, counts
//! may be integers, floats or null, and zip codes and timestamps may be
//! numbers. The helpers here absorb those variations.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Properties block of a single hospital feature.
#[derive(Debug, Clone, Deserialize)]
pub struct FacilityProperties {
    /// `OBJECTID`; falls back to the feature id when absent.
    #[serde(rename = "OBJECTID", default)]
    pub object_id: Option<i64>,
    #[serde(rename = "NAME", default, deserialize_with = "text")]
    pub name: Option<String>,
    #[serde(rename = "ADDRESS", default, deserialize_with = "text")]
    pub address: Option<String>,
    #[serde(rename = "CITY", default, deserialize_with = "text")]
    pub city: Option<String>,
    #[serde(rename = "ZIP", default, deserialize_with = "text")]
    pub zip: Option<String>,
    #[serde(rename = "PHONE", default, deserialize_with = "text")]
    pub phone: Option<String>,
    #[serde(rename = "Weblink", default, deserialize_with = "text")]
    pub web_link: Option<String>,
    #[serde(rename = "ACUTE", default, deserialize_with = "tri_flag")]
    pub acute: Option<bool>,
    #[serde(rename = "ICU", default, deserialize_with = "tri_flag")]
    pub icu: Option<bool>,
    #[serde(rename = "CAH", default, deserialize_with = "flag")]
    pub critical_access: bool,
    #[serde(rename = "Heli", default, deserialize_with = "tri_flag")]
    pub helipad: Option<bool>,
    #[serde(rename = "Beds_Total", default, deserialize_with = "count")]
    pub beds_total: u32,
    #[serde(rename = "Beds_Total_ICU", default, deserialize_with = "count")]
    pub beds_icu: u32,
    #[serde(rename = "Beds_Psychiatric", default, deserialize_with = "count")]
    pub beds_psychiatric: u32,
    /// Either a date string or epoch milliseconds, kept as text.
    #[serde(rename = "Updated", default, deserialize_with = "text")]
    pub updated: Option<String>,
}

/// Accepts a string or number; null and empty strings become `None`.
fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// `"Yes"` (any case) is true; anything else, including null, is false.
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => s.trim().eq_ignore_ascii_case("yes"),
        Some(Value::Bool(b)) => b,
        _ => false,
    })
}

/// `"Yes"`/`"No"` (any case) or a boolean; null, missing and anything
/// else stay unknown.
fn tri_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) if s.trim().eq_ignore_ascii_case("yes") => Some(true),
        Some(Value::String(s)) if s.trim().eq_ignore_ascii_case("no") => Some(false),
        Some(Value::Bool(b)) => Some(b),
        _ => None,
    })
}

/// Non-negative counts; floats are floored and null becomes zero.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error as _;

    let Some(value) = Option::<Value>::deserialize(deserializer)? else {
        return Ok(0);
    };

    match value {
        Value::Null => Ok(0),
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                return u32::try_from(u).map_err(D::Error::custom);
            }
            match n.as_f64() {
                Some(f) if f.is_finite() && f >= 0.0 && f <= f64::from(u32::MAX) => {
                    Ok(f.floor() as u32)
                }
                _ => Err(D::Error::custom(format!("invalid bed count {n}"))),
            }
        }
        other => Err(D::Error::custom(format!("invalid bed count {other}"))),
    }
}
