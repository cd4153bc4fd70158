//! Output writers.
//!
//! - [`write_json`] / [`to_json`] - the cleaned dataset as a JSON document
//!
//! # Example
//!
//! ```rust,no_run
//! # fn main() -> chatclean::Result<()> {
//! use chatclean::config::OutputConfig;
//! use chatclean::core::output::{to_json, write_json};
//! use chatclean::CleanedDataset;
//!
//! let dataset = CleanedDataset::default();
//!
//! write_json(&dataset, "clean_chat.json", &OutputConfig::new())?;
//!
//! // Or get as a string
//! let compact = to_json(&dataset, &OutputConfig::new().compact())?;
//! # Ok(())
//! # }
//! ```

mod json_writer;

pub use json_writer::{to_json, write_json};
