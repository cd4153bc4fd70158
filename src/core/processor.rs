//! End-to-end cleaning: read, normalize, write, summarize.

use std::path::Path;

use tracing::{debug, info};

use super::assembler::normalize_dataset;
use super::models::CleanedDataset;
use super::output::write_json;
use super::stats::DatasetStats;
use crate::config::OutputConfig;
use crate::error::{CleanError, Result};
use crate::parsing::{parse_document_str, read_document};

/// Cleans an export held in memory.
///
/// # Example
///
/// ```rust
/// # fn main() -> chatclean::Result<()> {
/// let cleaned = chatclean::core::clean_str(r#"{"name": "Chat", "messages": [
///     {"id": 1, "type": "message", "date": "2024-01-01T00:00:00", "from": "Alice", "text": "hi"}
/// ]}"#)?;
/// assert_eq!(cleaned.messages[0].text, "hi");
/// # Ok(())
/// # }
/// ```
pub fn clean_str(content: &str) -> Result<CleanedDataset> {
    let document = parse_document_str(content)?;
    Ok(normalize_dataset(&document))
}

/// Cleans an export file and writes the result.
///
/// Fails with [`CleanError::InputNotFound`] when `input` does not exist.
pub fn clean_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<DatasetStats> {
    let input = input.as_ref();
    if !input.exists() {
        return Err(CleanError::input_not_found(input));
    }

    let document = read_document(input)?;
    let dataset = normalize_dataset(&document);
    write_json(&dataset, output.as_ref(), config)?;

    let stats = DatasetStats::from_dataset(&dataset);
    debug!(?stats, "computed dataset statistics");
    info!(
        input = %input.display(),
        output = %output.as_ref().display(),
        messages = stats.messages,
        "cleaned chat export"
    );
    Ok(stats)
}
