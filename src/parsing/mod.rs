//! Reading Telegram chat exports into the raw message model.
//!
//! - [`telegram`] - raw export types and document parsing
//! - [`lenient`] - shape-tolerant serde helpers used by the raw types

pub mod lenient;
pub mod telegram;

// Re-export commonly used items
pub use telegram::{
    Fragment, RawDocument, RawMessage, RawReaction, RecentReaction, TextField,
    document_from_value, parse_document, parse_document_str, read_document,
};
