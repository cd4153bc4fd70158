//! Summary statistics for a cleaned dataset.
//!
//! Purely informational: nothing here affects the cleaned output.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

use super::models::{CleanedDataset, CleanedReaction};

/// Counts reported after cleaning an export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DatasetStats {
    /// Number of cleaned messages
    pub messages: usize,
    /// Number of distinct senders
    pub participants: usize,
    /// Messages that reply to another message
    pub replies: usize,
    /// Emoji reaction entries across all messages
    pub reactions: usize,
    /// Reaction entries with at least one known user
    pub reactions_with_users: usize,
    /// Reactions of the first message that has any
    pub sample: Vec<ReactionSample>,
}

impl DatasetStats {
    /// Computes statistics for a cleaned dataset.
    pub fn from_dataset(dataset: &CleanedDataset) -> Self {
        let mut senders: HashSet<Option<String>> = HashSet::new();
        let mut stats = Self {
            messages: dataset.messages.len(),
            ..Self::default()
        };

        for msg in &dataset.messages {
            senders.insert(msg.from.as_ref().map(Value::to_string));
            if msg.is_reply() {
                stats.replies += 1;
            }
            for reaction in msg.reactions() {
                stats.reactions += 1;
                if reaction.has_users() {
                    stats.reactions_with_users += 1;
                }
            }
        }
        stats.participants = senders.len();

        stats.sample = dataset
            .messages
            .iter()
            .find(|m| !m.reactions().is_empty())
            .map(|m| m.reactions().iter().map(ReactionSample::from).collect())
            .unwrap_or_default();

        stats
    }

    /// Returns `true` if there is a reaction sample to show.
    pub fn has_sample(&self) -> bool {
        !self.sample.is_empty()
    }
}

/// One reaction and the names of the users who left it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReactionSample {
    pub emoji: String,
    pub users: Vec<String>,
}

impl From<&CleanedReaction> for ReactionSample {
    fn from(reaction: &CleanedReaction) -> Self {
        Self {
            emoji: reaction.emoji.as_ref().map(value_text).unwrap_or_default(),
            users: reaction
                .users
                .iter()
                .map(|u| u.name.as_ref().map(value_text).unwrap_or_default())
                .collect(),
        }
    }
}

impl fmt::Display for ReactionSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.emoji, self.users.join(", "))
    }
}

/// Strings as-is, `null` as empty, anything else as compact JSON.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
