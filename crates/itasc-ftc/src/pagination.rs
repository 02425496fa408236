//! Offset-based pagination for the `dnc-complaints` collection.
//!
//! Each request names how many records to skip (`page[offset]`) and how
//! many to return (`page[limit]`). The API gives no next-page link, so the
//! last page is recognized by being empty or under-full.

use itasc_core::PhoneReport;

use crate::error::FtcError;

/// Records requested per page. The API caps `page[limit]` at 50.
pub const PAGE_LIMIT: u32 = 50;

/// Returns the offset of the page after the one just fetched, or `None`
/// when that page was the last.
///
/// A page is the last when it reported zero records or fewer than
/// [`PAGE_LIMIT`].
#[must_use]
pub fn next_offset(records_this_page: usize, offset: u32) -> Option<u32> {
    if records_this_page < PAGE_LIMIT as usize {
        return None;
    }
    offset.checked_add(PAGE_LIMIT)
}

/// Why a fetch run stopped requesting pages.
#[derive(Debug)]
pub enum StopReason {
    /// A page came back with no records.
    EmptyPage,
    /// A page came back with fewer than [`PAGE_LIMIT`] records.
    ShortPage,
    /// The configured page cap was reached before the API signalled the end.
    PageLimit { max_pages: usize },
    /// A transport or decode failure ended the run; earlier pages are kept.
    Aborted(FtcError),
}

impl StopReason {
    /// Returns `true` if the run reached the natural end of the collection.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self, StopReason::EmptyPage | StopReason::ShortPage)
    }
}

/// Result of a full fetch run: reports in the order they were encountered,
/// plus counters describing the run.
#[derive(Debug)]
pub struct FetchOutcome {
    pub reports: Vec<PhoneReport>,
    /// Number of page requests that returned a decodable page.
    pub pages_fetched: usize,
    /// Raw entries seen across all pages.
    pub records_seen: usize,
    /// Raw entries that failed normalization and were left out.
    pub records_dropped: usize,
    pub stop: StopReason,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_page_stops() {
        assert_eq!(next_offset(0, 0), None);
        assert_eq!(next_offset(0, 150), None);
    }

    #[test]
    fn short_page_stops_even_when_nonzero() {
        assert_eq!(next_offset(1, 0), None);
        assert_eq!(next_offset(10, 100), None);
        assert_eq!(next_offset(49, 50), None);
    }

    #[test]
    fn full_page_advances_by_page_limit() {
        assert_eq!(next_offset(50, 0), Some(50));
        assert_eq!(next_offset(50, 50), Some(100));
    }

    #[test]
    fn oversized_page_still_advances_by_page_limit() {
        assert_eq!(next_offset(75, 0), Some(50));
    }

    #[test]
    fn offset_overflow_stops() {
        assert_eq!(next_offset(50, u32::MAX - 10), None);
    }

    #[test]
    fn stop_reason_completeness() {
        assert!(StopReason::EmptyPage.is_complete());
        assert!(StopReason::ShortPage.is_complete());
        assert!(!StopReason::PageLimit { max_pages: 3 }.is_complete());
        assert!(!StopReason::Aborted(FtcError::InvalidBaseUrl {
            url: "x".to_owned(),
            reason: "y".to_owned(),
        })
        .is_complete());
    }
}
