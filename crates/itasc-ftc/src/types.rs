//! FTC Do-Not-Call complaints API response types.
//!
//! The API follows the JSON:API layout: a `data` array of resource objects,
//! each with an `id` and an `attributes` bag using kebab-case keys, plus a
//! `meta` object describing the page.

use serde::Deserialize;

/// Top-level envelope for one page of `dnc-complaints`.
///
/// `data` is kept as raw JSON so that one malformed entry can be dropped
/// on its own instead of failing the whole page.
#[derive(Debug, Deserialize)]
pub struct FtcResponse {
    #[serde(default)]
    pub data: Vec<serde_json::Value>,
    #[serde(default)]
    pub meta: FtcMeta,
}

/// Page metadata reported by the API.
#[derive(Debug, Default, Deserialize)]
pub struct FtcMeta {
    #[serde(rename = "records-this-page", default)]
    pub records_this_page: Option<usize>,
}

/// A single complaint resource.
#[derive(Debug, Clone, Deserialize)]
pub struct FtcRecord {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    pub attributes: FtcAttributes,
}

/// Attribute bag of a complaint. Missing keys and JSON `null` both
/// deserialize to `None`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FtcAttributes {
    #[serde(default)]
    pub company_phone_number: Option<String>,
    /// `"YYYY-MM-DD HH:MM:SS"`.
    #[serde(default)]
    pub created_date: Option<String>,
    /// `"YYYY-MM-DD HH:MM:SS"`, frequently empty.
    #[serde(default)]
    pub violation_date: Option<String>,
    #[serde(default)]
    pub consumer_city: Option<String>,
    #[serde(default)]
    pub consumer_state: Option<String>,
    #[serde(default)]
    pub consumer_area_code: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    /// `"Y"` when the consumer reported a prerecorded message.
    #[serde(default)]
    pub recorded_message_or_robocall: Option<String>,
}

/// JSON:API ids are strings, but accept bare numbers as well.
fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {other}"
        ))),
    }
}

/// One decoded page, reduced to what pagination needs.
#[derive(Debug)]
pub struct FtcPage {
    pub entries: Vec<serde_json::Value>,
    /// Count reported by `meta.records-this-page`, or the number of entries
    /// when the API omits it.
    pub records_this_page: usize,
}

impl From<FtcResponse> for FtcPage {
    fn from(response: FtcResponse) -> Self {
        let records_this_page = response
            .meta
            .records_this_page
            .unwrap_or(response.data.len());
        Self {
            entries: response.data,
            records_this_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attributes_deserialize_kebab_case_keys() {
        let attrs: FtcAttributes = serde_json::from_value(serde_json::json!({
            "company-phone-number": "8005551234",
            "created-date": "2025-03-15 09:05:00",
            "violation-date": "",
            "consumer-city": "Austin",
            "consumer-state": "Texas",
            "consumer-area-code": "512",
            "subject": "Warranties & Protection Plans",
            "recorded-message-or-robocall": "Y"
        }))
        .unwrap();

        assert_eq!(attrs.company_phone_number.as_deref(), Some("8005551234"));
        assert_eq!(attrs.created_date.as_deref(), Some("2025-03-15 09:05:00"));
        assert_eq!(attrs.violation_date.as_deref(), Some(""));
        assert_eq!(attrs.consumer_area_code.as_deref(), Some("512"));
        assert_eq!(attrs.recorded_message_or_robocall.as_deref(), Some("Y"));
    }

    #[test]
    fn null_and_missing_attributes_are_none() {
        let attrs: FtcAttributes = serde_json::from_value(serde_json::json!({
            "created-date": "2025-03-15 09:05:00",
            "violation-date": null
        }))
        .unwrap();
        assert!(attrs.violation_date.is_none());
        assert!(attrs.consumer_city.is_none());
    }

    #[test]
    fn record_id_accepts_numbers() {
        let record: FtcRecord = serde_json::from_value(serde_json::json!({
            "id": 42,
            "attributes": {}
        }))
        .unwrap();
        assert_eq!(record.id, "42");
    }

    #[test]
    fn page_uses_meta_count_when_present() {
        let response: FtcResponse = serde_json::from_value(serde_json::json!({
            "data": [{"id": "1", "attributes": {}}],
            "meta": {"records-this-page": 1, "record-total": 900}
        }))
        .unwrap();
        let page = FtcPage::from(response);
        assert_eq!(page.records_this_page, 1);
        assert_eq!(page.entries.len(), 1);
    }

    #[test]
    fn page_falls_back_to_entry_count_without_meta() {
        let response: FtcResponse = serde_json::from_value(serde_json::json!({
            "data": [{"id": "1"}, {"id": "2"}]
        }))
        .unwrap();
        assert_eq!(FtcPage::from(response).records_this_page, 2);
    }

    #[test]
    fn missing_data_is_an_empty_page() {
        let response: FtcResponse = serde_json::from_value(serde_json::json!({})).unwrap();
        let page = FtcPage::from(response);
        assert!(page.entries.is_empty());
        assert_eq!(page.records_this_page, 0);
    }
}
