//! Message normalization: one raw export message in, one cleaned message out.
//!
//! # Text
//!
//! | Raw `text` | Cleaned `text` |
//! |------------|----------------|
//! | `"Hello"` | `"Hello"` (verbatim, even if empty) |
//! | `[{"text": "Hi "}, "there"]` | `"Hi \nthere"` (blank fragments dropped, newline-joined) |
//! | missing / `null` / other | `""` |
//!
//! # Reactions
//!
//! Only `emoji` reactions survive. Each becomes `{emoji, users}` with one
//! user per `recent` entry, in order. When no users are known the export's
//! `count` is carried along so the total is not lost.
//!
//! # Example
//!
//! ```rust
//! use chatclean::core::normalize_message;
//! use chatclean::parsing::RawMessage;
//! use serde_json::json;
//!
//! let raw: RawMessage = serde_json::from_value(json!({
//!     "id": 1, "type": "message", "date": "2024-01-01T00:00:00", "from": "Alice",
//!     "text": [{"type": "bold", "text": "Hi "}, "there"],
//!     "reactions": [{"type": "emoji", "emoji": "👍",
//!         "recent": [{"from": "Bob", "from_id": "u2", "date": "2024-01-01T00:01:00"}]}]
//! })).unwrap();
//!
//! let cleaned = normalize_message(&raw);
//! assert_eq!(cleaned.text, "Hi \nthere");
//! assert_eq!(cleaned.reactions().len(), 1);
//! ```

use serde_json::Value;

use super::models::{CleanedMessage, CleanedReaction, ReactionUser};
use crate::parsing::{RawMessage, RawReaction, RecentReaction, TextField};

/// Cleans a single raw message.
///
/// Never fails: missing fields stay missing in the output.
pub fn normalize_message(raw: &RawMessage) -> CleanedMessage {
    CleanedMessage {
        id: raw.id.clone(),
        date: raw.date.clone(),
        from: raw.from.clone(),
        text: resolve_text(&raw.text),
        reply_to_message_id: raw
            .reply_to_message_id
            .as_ref()
            .filter(|v| is_truthy(v))
            .cloned(),
        reactions: raw.reactions.as_deref().map(flatten_reactions),
    }
}

/// Collapses a `text` field into a single string.
pub fn resolve_text(text: &TextField) -> String {
    match text {
        TextField::Plain(s) => s.clone(),
        TextField::Fragmented(fragments) => fragments
            .iter()
            .map(|f| f.as_text())
            .filter(|part| !is_blank(part))
            .collect::<Vec<_>>()
            .join("\n"),
        TextField::Absent => String::new(),
    }
}

/// Returns `true` if `s` is empty or made only of whitespace.
///
/// Uses the ECMAScript whitespace set: U+FEFF counts as blank, U+0085 does not.
pub fn is_blank(s: &str) -> bool {
    s.chars()
        .all(|c| c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{0085}'))
}

/// Keeps emoji reactions and attributes them to their recent users.
pub fn flatten_reactions(reactions: &[RawReaction]) -> Vec<CleanedReaction> {
    reactions
        .iter()
        .filter(|r| r.is_emoji())
        .map(|reaction| {
            let users: Vec<ReactionUser> = reaction
                .recent
                .as_deref()
                .unwrap_or_default()
                .iter()
                .map(reaction_user)
                .collect();
            let count = if users.is_empty() {
                reaction.count.clone().filter(|c| !c.is_null())
            } else {
                None
            };
            CleanedReaction {
                emoji: reaction.emoji.clone(),
                users,
                count,
            }
        })
        .collect()
}

fn reaction_user(recent: &RecentReaction) -> ReactionUser {
    ReactionUser {
        name: recent.from.clone(),
        id: recent.from_id.clone(),
        date: recent.date.clone(),
    }
}

/// Loose truthiness used for optional references.
///
/// `null`, `false`, `0`, and `""` are falsy; everything else is truthy.
/// A reply id of `0` is therefore treated the same as no reply at all.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
