//! Field helpers shared by the record types
//!
//! - `Timestamp`: UTC datetime that also accepts the offset-less forms the
//!   store emits for `timestamp without time zone` columns
//! - `explicit`: tells "field absent" apart from "field set to null"
//! - `non_null`: optional field that may not be sent as null
//! - `to_row` / `from_row`: move between records and store rows

use std::fmt;

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::de::{self, DeserializeOwned, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::errors::{ModelError, ModelResult};
use crate::store::Row;

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
];

/// A point in time, always normalised to UTC
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub DateTime<Utc>);

impl Timestamp {
    pub fn now() -> Self {
        Timestamp(Utc::now())
    }

    /// Parse RFC 3339, falling back to offset-less forms read as UTC
    pub fn parse(s: &str) -> Option<Self> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(Timestamp(dt.with_timezone(&Utc)));
        }
        // Postgres renders offsets as "+00" which RFC 3339 rejects
        if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f%#z") {
            return Some(Timestamp(dt.with_timezone(&Utc)));
        }
        NAIVE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
            .map(|naive| Timestamp(naive.and_utc()))
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Timestamp(dt)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TimestampVisitor;

        impl Visitor<'_> for TimestampVisitor {
            type Value = Timestamp;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an ISO 8601 datetime string")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Timestamp, E> {
                Timestamp::parse(v)
                    .ok_or_else(|| E::custom(format!("invalid datetime: {}", v)))
            }
        }

        deserializer.deserialize_str(TimestampVisitor)
    }
}

/// Deserialize a field that may be absent, null or set.
///
/// Use with `#[serde(default, deserialize_with = "explicit")]` on an
/// `Option<Option<T>>`: absent -> `None`, null -> `Some(None)`.
pub fn explicit<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Deserialize an optional field whose column is not nullable.
///
/// Use with `#[serde(default, deserialize_with = "non_null")]` on an
/// `Option<T>`: absent -> `None`, null -> error, set -> `Some`.
pub fn non_null<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Serialize a record into a store row
pub fn to_row<T: Serialize>(value: &T) -> ModelResult<Row> {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(ModelError::Encode(format!("expected an object, got {}", other))),
        Err(e) => Err(ModelError::Encode(e.to_string())),
    }
}

/// Map a store row onto a record, dropping undeclared columns
pub fn from_row<T: DeserializeOwned>(row: Row) -> ModelResult<T> {
    serde_json::from_value(Value::Object(row)).map_err(|e| ModelError::Decode(e.to_string()))
}

/// Map a list of store rows, failing on the first row that does not fit
pub fn from_rows<T: DeserializeOwned>(rows: Vec<Row>) -> ModelResult<Vec<T>> {
    rows.into_iter().map(from_row).collect()
}
