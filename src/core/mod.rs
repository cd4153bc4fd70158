//! Core cleaning logic.
//!
//! This module contains:
//! - [`models`] - Cleaned output types
//! - [`normalizer`] - Per-message normalization (text, replies, reactions)
//! - [`assembler`] - Filtering and chronological ordering of a whole export
//! - [`stats`] - Summary counts for reporting
//! - [`output`] - JSON writer
//! - [`processor`] - File-to-file pipeline
//!
//! # Quick Start
//!
//! ```rust
//! use chatclean::core::{
//!     CleanedDataset, DatasetStats, normalize_dataset, normalize_message, to_json, write_json,
//! };
//! ```

pub mod assembler;
pub mod models;
pub mod normalizer;
pub mod output;
pub mod processor;
pub mod stats;

// Re-export main types for convenience
pub use assembler::{normalize_dataset, parse_timestamp};
pub use models::{CleanedDataset, CleanedMessage, CleanedReaction, ReactionUser};
pub use normalizer::{flatten_reactions, is_blank, is_truthy, normalize_message, resolve_text};
pub use output::{to_json, write_json};
pub use processor::{clean_file, clean_str};
pub use stats::{DatasetStats, ReactionSample};
