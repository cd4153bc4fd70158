//! Dataset assembly: filter, normalize, sort.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;
use tracing::{debug, trace};

use super::models::{CleanedDataset, CleanedMessage};
use super::normalizer::normalize_message;
use crate::parsing::RawDocument;

/// Naive layouts Telegram and similar exporters write, tried in order.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Cleans a whole export.
///
/// Keeps only entries whose `type` is `"message"`, normalizes each one and
/// sorts the result by date, earliest first. `name` and `type` are copied
/// from the export root. Messages without a usable date go last, in their
/// original order.
///
/// # Example
///
/// ```rust
/// use chatclean::core::normalize_dataset;
/// use chatclean::parsing::parse_document_str;
///
/// # fn main() -> chatclean::Result<()> {
/// let raw = parse_document_str(r#"{
///     "name": "Chat", "type": "personal_chat",
///     "messages": [
///         {"id": 2, "type": "message", "date": "2024-01-02T00:00:00", "from": "Bob", "text": "later"},
///         {"id": 1, "type": "message", "date": "2024-01-01T00:00:00", "from": "Alice", "text": "first"},
///         {"id": 3, "type": "service", "date": "2024-01-01T12:00:00", "action": "pin_message"}
///     ]
/// }"#)?;
///
/// let cleaned = normalize_dataset(&raw);
/// assert_eq!(cleaned.messages.len(), 2);
/// assert_eq!(cleaned.messages[0].text, "first");
/// # Ok(())
/// # }
/// ```
pub fn normalize_dataset(document: &RawDocument) -> CleanedDataset {
    let mut messages: Vec<CleanedMessage> = document
        .messages
        .iter()
        .filter(|m| m.is_message())
        .map(normalize_message)
        .collect();

    debug!(
        entries = document.messages.len(),
        kept = messages.len(),
        skipped = document.messages.len() - messages.len(),
        "filtered export entries"
    );

    sort_by_date(&mut messages);

    CleanedDataset {
        name: document.name.clone(),
        chat_type: document.chat_type.clone(),
        messages,
    }
}

/// Stable sort by parsed date; undated messages go last.
fn sort_by_date(messages: &mut [CleanedMessage]) {
    messages.sort_by_cached_key(|msg| {
        let ts = msg.date.as_ref().and_then(timestamp_of);
        if ts.is_none() {
            trace!(id = ?msg.id, date = ?msg.date, "message has no usable date");
        }
        (ts.is_none(), ts)
    });
}

fn timestamp_of(value: &Value) -> Option<DateTime<Utc>> {
    value.as_str().and_then(parse_timestamp)
}

/// Parses an export timestamp.
///
/// Accepts RFC 3339 (`2024-01-15T10:30:00+03:00`), naive date-times
/// (`2024-01-15T10:30:00`, optionally with fractional seconds or a space
/// separator) and bare dates (`2024-01-15`). Naive values are read as UTC,
/// which keeps ordering independent of the machine's time zone.
///
/// # Example
///
/// ```rust
/// use chatclean::core::parse_timestamp;
///
/// let ts = parse_timestamp("2024-01-15T10:30:00").unwrap();
/// assert_eq!(ts.to_rfc3339(), "2024-01-15T10:30:00+00:00");
/// assert!(parse_timestamp("yesterday").is_none());
/// ```
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
