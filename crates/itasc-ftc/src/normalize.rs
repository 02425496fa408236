//! Normalization of FTC complaint records into [`itasc_core::PhoneReport`].

use chrono::{DateTime, NaiveDateTime, Utc};
use itasc_core::{PhoneReport, QUERY_TIMESTAMP_FORMAT};
use serde::Deserialize;

use crate::error::FtcError;
use crate::types::FtcRecord;

/// Value written to [`PhoneReport::source`] for every FTC complaint.
pub const FTC_SOURCE_LABEL: &str = "FTC";

/// Indicator value meaning the consumer reported a robocall.
pub const ROBOCALL_SENTINEL: &str = "Y";

/// Parses an FTC `"YYYY-MM-DD HH:MM:SS"` timestamp as UTC.
///
/// Returns `None` unless the parsed value formats back to exactly `s`, so
/// unpadded fields and stray whitespace are rejected.
#[must_use]
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(s, QUERY_TIMESTAMP_FORMAT)
        .ok()
        .filter(|naive| naive.format(QUERY_TIMESTAMP_FORMAT).to_string() == s)
        .map(|naive| naive.and_utc())
}

/// Converts one [`FtcRecord`] into a [`PhoneReport`].
///
/// A bad `created-date` rejects the record, while a bad `violation-date`
/// only drops that field.
///
/// # Errors
///
/// Returns [`FtcError::Normalization`] if `created-date` is missing or not in
/// `"YYYY-MM-DD HH:MM:SS"` format.
pub fn normalize_record(record: &FtcRecord) -> Result<PhoneReport, FtcError> {
    let attrs = &record.attributes;

    let created_raw = attrs
        .created_date
        .as_deref()
        .ok_or_else(|| FtcError::Normalization {
            record_id: record.id.clone(),
            reason: "missing created-date".into(),
        })?;
    let report_date = parse_timestamp(created_raw).ok_or_else(|| FtcError::Normalization {
        record_id: record.id.clone(),
        reason: format!("invalid created-date '{created_raw}'"),
    })?;

    let violation_date = attrs
        .violation_date
        .as_deref()
        .filter(|s| !s.is_empty())
        .and_then(parse_timestamp);

    let robocall = attrs.recorded_message_or_robocall.as_deref() == Some(ROBOCALL_SENTINEL);

    Ok(PhoneReport {
        phone_number: attrs.company_phone_number.clone().unwrap_or_default(),
        source: FTC_SOURCE_LABEL.to_string(),
        report_date,
        violation_date,
        subject: attrs.subject.clone().unwrap_or_default(),
        robocall,
        consumer_city: attrs.consumer_city.clone().unwrap_or_default(),
        consumer_state: attrs.consumer_state.clone().unwrap_or_default(),
        consumer_area_code: attrs.consumer_area_code.clone().unwrap_or_default(),
    })
}

/// Decodes a raw `data` entry into an [`FtcRecord`] and normalizes it.
///
/// # Errors
///
/// Returns [`FtcError::Normalization`] if the entry is not a complaint
/// resource or its `created-date` is unusable.
pub fn normalize_entry(entry: &serde_json::Value) -> Result<PhoneReport, FtcError> {
    let record = FtcRecord::deserialize(entry).map_err(|e| FtcError::Normalization {
        record_id: match entry.get("id") {
            Some(serde_json::Value::String(id)) => id.clone(),
            Some(other) => other.to_string(),
            None => "<unknown>".to_string(),
        },
        reason: e.to_string(),
    })?;
    normalize_record(&record)
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
