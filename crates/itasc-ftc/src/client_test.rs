use chrono::{TimeZone, Utc};
use itasc_core::TimeRange;

use super::*;

fn test_client(base_url: &str) -> FtcClient {
    FtcClient::with_base_url("test-key", 30, "itasc-test/0.1", base_url)
        .expect("client construction should not fail")
}

fn test_window() -> TimeWindow {
    let now = Utc.with_ymd_and_hms(2025, 3, 15, 12, 0, 0).unwrap();
    TimeWindow::ending_at(TimeRange::Day, now)
}

fn query_value(url: &Url, key: &str) -> Option<String> {
    url.query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

#[test]
fn page_url_carries_all_query_parameters() {
    let client = test_client("https://api.ftc.gov/v0/dnc-complaints");
    let url = client.page_url(&test_window(), 100);

    assert_eq!(url.path(), "/v0/dnc-complaints");
    assert_eq!(query_value(&url, "api_key").as_deref(), Some("test-key"));
    assert_eq!(
        query_value(&url, "created_date_from").as_deref(),
        Some("2025-03-14 12:00:00")
    );
    assert_eq!(
        query_value(&url, "created_date_to").as_deref(),
        Some("2025-03-15 12:00:00")
    );
    assert_eq!(query_value(&url, "page[limit]").as_deref(), Some("50"));
    assert_eq!(query_value(&url, "page[offset]").as_deref(), Some("100"));
}

#[test]
fn page_url_strips_trailing_slash() {
    let client = test_client("https://api.ftc.gov/v0/dnc-complaints/");
    let url = client.page_url(&test_window(), 0);
    assert_eq!(url.path(), "/v0/dnc-complaints");
}

#[test]
fn page_url_encodes_timestamp_spaces() {
    let client = test_client("https://api.ftc.gov/v0/dnc-complaints");
    let url = client.page_url(&test_window(), 0);
    let raw = url.query().unwrap_or_default();
    assert!(
        !raw.contains(' '),
        "query string should be percent-encoded: {raw}"
    );
}

#[test]
fn invalid_base_url_is_rejected() {
    let result = FtcClient::with_base_url("k", 30, "ua", "not a url");
    assert!(
        matches!(result, Err(FtcError::InvalidBaseUrl { .. })),
        "expected InvalidBaseUrl"
    );
}
