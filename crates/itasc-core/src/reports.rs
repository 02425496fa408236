use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A consumer complaint about a phone number, normalized from an upstream
/// source into the shape every downstream consumer reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhoneReport {
    /// Number the consumer reported, exactly as the source supplied it.
    pub phone_number: String,
    /// Upstream label, e.g. `"FTC"`.
    pub source: String,
    /// When the complaint was filed with the source.
    pub report_date: DateTime<Utc>,
    /// When the unwanted call happened, if the source recorded a usable value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub violation_date: Option<DateTime<Utc>>,
    pub subject: String,
    /// Whether the consumer reported a prerecorded message or robocall.
    pub robocall: bool,
    #[serde(default)]
    pub consumer_city: String,
    #[serde(default)]
    pub consumer_state: String,
    #[serde(default)]
    pub consumer_area_code: String,
}
