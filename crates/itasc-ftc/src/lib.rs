pub mod client;
pub mod error;
pub mod normalize;
pub mod pagination;
pub mod types;

pub use client::FtcClient;
pub use error::FtcError;
pub use normalize::{normalize_entry, normalize_record, FTC_SOURCE_LABEL, ROBOCALL_SENTINEL};
pub use pagination::{next_offset, FetchOutcome, StopReason, PAGE_LIMIT};
pub use types::{FtcAttributes, FtcMeta, FtcPage, FtcRecord, FtcResponse};
