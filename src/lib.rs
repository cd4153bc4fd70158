//! # Chatclean
//!
//! A Rust library for trimming Telegram Desktop chat exports down to the
//! fields that matter for downstream analysis.
//!
//! ## Overview
//!
//! A Telegram export (`result.json`) carries a lot of presentation detail:
//! formatted text spans, service entries, media metadata, custom emoji and
//! more. Chatclean keeps only:
//!
//! - message `id`, `date` and sender (`from`)
//! - the message text, flattened into a single string
//! - `reply_to_message_id`, when the message is a reply
//! - emoji reactions together with the users who left them
//!
//! Service entries are dropped and the remaining messages are sorted by date.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatclean::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let stats = clean_file("result.json", "clean_chat.json", &OutputConfig::new())?;
//!     println!("{} messages from {} people", stats.messages, stats.participants);
//!     Ok(())
//! }
//! ```
//!
//! ## Working in Memory
//!
//! ```rust
//! use chatclean::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let raw = parse_document_str(r#"{
//!     "name": "Chat",
//!     "type": "personal_chat",
//!     "messages": [
//!         {"id": 1, "type": "message", "date": "2024-01-01T00:00:00", "from": "Alice",
//!          "text": ["Check ", {"type": "link", "text": "https://example.com"}]}
//!     ]
//! }"#)?;
//!
//! let cleaned = normalize_dataset(&raw);
//! assert_eq!(cleaned.messages[0].text, "Check \nhttps://example.com");
//!
//! let json = to_json(&cleaned, &OutputConfig::new())?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Structure
//!
//! - [`parsing`] — raw export model ([`RawDocument`](parsing::RawDocument), [`RawMessage`](parsing::RawMessage))
//! - [`core`] — cleaning logic
//!   - [`core::normalizer`] — [`normalize_message`](core::normalize_message)
//!   - [`core::assembler`] — [`normalize_dataset`](core::normalize_dataset)
//!   - [`core::stats`] — [`DatasetStats`](core::DatasetStats)
//!   - [`core::output`] — [`write_json`](core::write_json), [`to_json`](core::to_json)
//! - [`config`] — [`OutputConfig`](config::OutputConfig)
//! - [`error`] — [`CleanError`], [`Result`]
//! - [`prelude`] — Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod parsing;

// Re-export the main types at the crate root for convenience
pub use crate::core::models::{CleanedDataset, CleanedMessage};
pub use error::{CleanError, Result};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatclean::prelude::*;
/// ```
pub mod prelude {
    // Error types
    pub use crate::error::{CleanError, Result};

    // Raw model
    pub use crate::parsing::{RawDocument, RawMessage, parse_document, parse_document_str, read_document};

    // Cleaned model
    pub use crate::core::models::{CleanedDataset, CleanedMessage, CleanedReaction, ReactionUser};

    // Cleaning
    pub use crate::core::{normalize_dataset, normalize_message};

    // Reporting
    pub use crate::core::{DatasetStats, ReactionSample};

    // Output
    pub use crate::config::OutputConfig;
    pub use crate::core::{clean_file, clean_str, to_json, write_json};
}
