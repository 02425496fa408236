//! Multi-page complaint fetch loop for `FtcClient`.

use itasc_core::TimeWindow;

use crate::normalize::normalize_entry;
use crate::pagination::{next_offset, FetchOutcome, StopReason};

use super::FtcClient;

impl FtcClient {
    /// Fetches every complaint created inside `window`, normalizing as it goes.
    ///
    /// Starts at offset 0 and advances by [`PAGE_LIMIT`](crate::PAGE_LIMIT)
    /// until a page is empty or under-full. Entries that fail normalization
    /// are dropped without ending the run.
    ///
    /// **Partial-result semantics**: a transport or decode failure stops the
    /// loop and is returned as [`StopReason::Aborted`] alongside whatever was
    /// already collected. Nothing is retried. Hitting `max_pages` requests
    /// without reaching the last page stops with [`StopReason::PageLimit`].
    pub async fn fetch_all(&self, window: &TimeWindow, max_pages: usize) -> FetchOutcome {
        let mut reports = Vec::new();
        let mut pages_fetched = 0usize;
        let mut records_seen = 0usize;
        let mut records_dropped = 0usize;
        let mut offset = 0u32;

        let stop = loop {
            if pages_fetched >= max_pages {
                tracing::warn!(
                    max_pages,
                    offset,
                    "page limit reached before the last page; results are incomplete"
                );
                break StopReason::PageLimit { max_pages };
            }

            let page = match self.fetch_page(window, offset).await {
                Ok(page) => page,
                Err(e) => {
                    tracing::error!(offset, error = %e, "FTC page fetch failed; keeping partial results");
                    break StopReason::Aborted(e);
                }
            };
            pages_fetched += 1;

            if page.entries.is_empty() {
                break StopReason::EmptyPage;
            }

            records_seen += page.entries.len();
            for entry in &page.entries {
                match normalize_entry(entry) {
                    Ok(report) => reports.push(report),
                    Err(e) => {
                        records_dropped += 1;
                        tracing::debug!(error = %e, "dropping complaint record");
                    }
                }
            }

            tracing::debug!(
                offset,
                records_this_page = page.records_this_page,
                collected = reports.len(),
                "processed FTC complaints page"
            );

            match next_offset(page.records_this_page, offset) {
                Some(next) => offset = next,
                None => break StopReason::ShortPage,
            }
        };

        FetchOutcome {
            reports,
            pages_fetched,
            records_seen,
            records_dropped,
            stop,
        }
    }
}
