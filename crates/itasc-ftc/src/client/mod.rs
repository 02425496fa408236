//! HTTP client for the FTC Do-Not-Call complaints API.
//!
//! Wraps `reqwest` with the API key, endpoint URL and request timeout the
//! caller supplies. Single-page requests live here; the multi-page loop is
//! in `fetch_all`.

mod fetch_all;

use std::time::Duration;

use itasc_core::config::DEFAULT_FTC_BASE_URL;
use itasc_core::TimeWindow;
use reqwest::{Client, Url};

use crate::error::FtcError;
use crate::pagination::PAGE_LIMIT;
use crate::types::{FtcPage, FtcResponse};

/// Client for the FTC `dnc-complaints` collection endpoint.
///
/// Use [`FtcClient::new`] for production or [`FtcClient::with_base_url`] to
/// point at a mock server in tests.
pub struct FtcClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl FtcClient {
    /// Creates a client pointed at the production FTC API.
    ///
    /// # Errors
    ///
    /// Returns [`FtcError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, FtcError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_FTC_BASE_URL)
    }

    /// Creates a client with a custom endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns [`FtcError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed, or [`FtcError::InvalidBaseUrl`] if `base_url` does not
    /// parse.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, FtcError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let trimmed = base_url.trim_end_matches('/');
        let base_url = Url::parse(trimmed).map_err(|e| FtcError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Fetches the page of complaints created inside `window` that starts at
    /// `offset`.
    ///
    /// # Errors
    ///
    /// - [`FtcError::Http`] on network failure, timeout, or non-2xx status.
    /// - [`FtcError::Deserialize`] if the body is not a complaints page.
    pub async fn fetch_page(&self, window: &TimeWindow, offset: u32) -> Result<FtcPage, FtcError> {
        let url = self.page_url(window, offset);
        tracing::debug!(offset, "requesting FTC complaints page");

        let response = self.client.get(url).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;

        let parsed: FtcResponse =
            serde_json::from_str(&body).map_err(|e| FtcError::Deserialize {
                context: format!("dnc-complaints(offset={offset})"),
                source: e,
            })?;

        Ok(FtcPage::from(parsed))
    }

    /// Builds the request URL for one page with percent-encoded query
    /// parameters.
    fn page_url(&self, window: &TimeWindow, offset: u32) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("api_key", &self.api_key)
            .append_pair("created_date_from", &window.start_param())
            .append_pair("created_date_to", &window.end_param())
            .append_pair("page[limit]", &PAGE_LIMIT.to_string())
            .append_pair("page[offset]", &offset.to_string());
        url
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
