use cal_core::error::CalendarError;
use cal_core::types::IdError;
use chrono::{DateTime, NaiveDateTime, Utc};
use rusqlite::types::Type;
use rusqlite::Row;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug, Error)]
pub enum DbError {
    #[error("json encode failed: {message}")]
    JsonEncode { message: String },
    #[error("json decode failed: {message}")]
    JsonDecode { message: String },
    #[error("invalid timestamp: {value}")]
    InvalidTimestamp { value: String },
}

pub fn internal(err: impl std::fmt::Display) -> CalendarError {
    CalendarError::Internal {
        message: err.to_string(),
    }
}

pub fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(code, _)
            if code.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

pub fn to_rfc3339(value: &DateTime<Utc>) -> String {
    value.to_rfc3339()
}

pub fn from_rfc3339(value: &str) -> Result<DateTime<Utc>, DbError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| DbError::InvalidTimestamp {
            value: value.to_string(),
        })
}

/// Sortable text form used for event times.
pub fn to_naive(value: &NaiveDateTime) -> String {
    value.format(NAIVE_FORMAT).to_string()
}

pub fn from_naive(value: &str) -> Result<NaiveDateTime, DbError> {
    NaiveDateTime::parse_from_str(value, NAIVE_FORMAT).map_err(|_| DbError::InvalidTimestamp {
        value: value.to_string(),
    })
}

pub fn encode_json<T: Serialize>(value: &T) -> Result<String, DbError> {
    serde_json::to_string(value).map_err(|err| DbError::JsonEncode {
        message: err.to_string(),
    })
}

/// Reads a unit enum back from the string its serde representation uses.
pub fn decode_enum<T: DeserializeOwned>(value: &str) -> Result<T, DbError> {
    serde_json::from_value(serde_json::Value::String(value.to_string())).map_err(|err| {
        DbError::JsonDecode {
            message: err.to_string(),
        }
    })
}

pub fn decode_json<T: DeserializeOwned>(value: &str) -> Result<T, DbError> {
    serde_json::from_str(value).map_err(|err| DbError::JsonDecode {
        message: err.to_string(),
    })
}

/// Reads an integer column into one of the typed id wrappers.
pub fn id_column<T>(
    row: &Row<'_>,
    idx: usize,
    make: fn(i64) -> Result<T, IdError>,
) -> rusqlite::Result<T> {
    let value: i64 = row.get(idx)?;
    make(value).map_err(|err| {
        rusqlite::Error::FromSqlConversionFailure(idx, Type::Integer, Box::new(err))
    })
}

pub fn naive_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<NaiveDateTime> {
    let value: String = row.get(idx)?;
    from_naive(&value)
        .map_err(|err| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(err)))
}

pub fn utc_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let value: String = row.get(idx)?;
    from_rfc3339(&value)
        .map_err(|err| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(err)))
}
