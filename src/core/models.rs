//! Cleaned output model.
//!
//! Pass-through fields are kept as raw JSON values so ids, dates and names
//! come out exactly as they went in. `None` means the field is omitted from
//! the output entirely.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The cleaned export: chat name, chat type and sorted messages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CleanedDataset {
    /// Chat title, copied from the export root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    /// Chat kind, copied from the export root
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub chat_type: Option<Value>,
    /// Regular messages, ascending by date
    #[serde(default)]
    pub messages: Vec<CleanedMessage>,
}

/// A message reduced to identity, author, text, reply link and reactions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CleanedMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<Value>,
    /// Flattened message text
    #[serde(default)]
    pub text: String,
    /// Present only for messages that reply to another message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<Value>,
    /// Present only when the export had a `reactions` array
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reactions: Option<Vec<CleanedReaction>>,
}

impl CleanedMessage {
    /// Returns the sender name if it is a string.
    pub fn sender(&self) -> Option<&str> {
        self.from.as_ref().and_then(Value::as_str)
    }

    /// Returns the date string, if any.
    pub fn date_str(&self) -> Option<&str> {
        self.date.as_ref().and_then(Value::as_str)
    }

    /// Returns `true` if this message replies to another one.
    pub fn is_reply(&self) -> bool {
        self.reply_to_message_id.is_some()
    }

    /// Returns the reactions, or an empty slice.
    pub fn reactions(&self) -> &[CleanedReaction] {
        self.reactions.as_deref().unwrap_or_default()
    }
}

/// An emoji reaction with the users known to have left it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CleanedReaction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<Value>,
    #[serde(default)]
    pub users: Vec<ReactionUser>,
    /// Total reaction count, kept only when `users` is empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<Value>,
}

impl CleanedReaction {
    /// Returns `true` if at least one reacting user is known.
    pub fn has_users(&self) -> bool {
        !self.users.is_empty()
    }
}

/// A user who reacted, taken from the export's `recent` list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReactionUser {
    /// Display name (`from` in the export)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    /// Stable user id (`from_id` in the export)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<Value>,
}
