//! Rendering and writing of the final report array.

use std::path::Path;

use anyhow::Context;
use itasc_core::PhoneReport;

/// Renders reports as a pretty-printed JSON array (two-space indent).
pub(crate) fn render_reports(reports: &[PhoneReport]) -> anyhow::Result<String> {
    serde_json::to_string_pretty(reports).context("failed to serialize phone reports")
}

/// Writes the rendered array to `path`, replacing any existing file.
pub(crate) fn write_reports(path: &Path, reports: &[PhoneReport]) -> anyhow::Result<()> {
    let body = render_reports(reports)?;
    std::fs::write(path, body).with_context(|| format!("failed to write {}", path.display()))
}
