//! Raw Telegram export model.
//!
//! These types mirror the JSON written by Telegram Desktop's "Export chat
//! history" feature. Only the fields the cleaner reads are modelled; the
//! rest is ignored. Every field is optional and shape-tolerant, so a single
//! odd message never rejects the whole export.
//!
//! ```json
//! {
//!   "name": "Chat Name",
//!   "type": "personal_chat",
//!   "messages": [
//!     {
//!       "id": 12345,
//!       "type": "message",
//!       "date": "2024-01-15T10:30:00",
//!       "from": "Sender Name",
//!       "text": "Hello" | ["Hello", {"type": "link", "text": "url"}],
//!       "reply_to_message_id": 12344,
//!       "reactions": [
//!         {"type": "emoji", "count": 2, "emoji": "👍",
//!          "recent": [{"from": "Bob", "from_id": "user2", "date": "..."}]}
//!       ]
//!     }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

use super::lenient;
use crate::error::{CleanError, Result, json_type_name};

/// Message type tag of regular chat messages.
pub const MESSAGE_TYPE: &str = "message";

/// Reaction type tag of plain emoji reactions.
pub const EMOJI_REACTION_TYPE: &str = "emoji";

/// Root of a Telegram chat export.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawDocument {
    /// Chat title
    #[serde(deserialize_with = "lenient::present")]
    pub name: Option<Value>,
    /// Chat kind, e.g. `personal_chat` or `private_supergroup`
    #[serde(rename = "type", deserialize_with = "lenient::present")]
    pub chat_type: Option<Value>,
    /// Every entry of the `messages` array that is a JSON object
    #[serde(deserialize_with = "lenient::object_list")]
    pub messages: Vec<RawMessage>,
}

/// One entry of the export's message list.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawMessage {
    /// Message ID
    #[serde(deserialize_with = "lenient::present")]
    pub id: Option<Value>,
    /// Message type (only "message" is cleaned)
    #[serde(rename = "type", deserialize_with = "lenient::tag")]
    pub msg_type: Option<String>,
    /// Local timestamp, e.g. "2024-01-15T10:30:00"
    #[serde(deserialize_with = "lenient::present")]
    pub date: Option<Value>,
    /// Sender display name
    #[serde(deserialize_with = "lenient::present")]
    pub from: Option<Value>,
    /// Reply reference
    #[serde(deserialize_with = "lenient::present")]
    pub reply_to_message_id: Option<Value>,
    /// Message text (string or array of fragments)
    pub text: TextField,
    /// Reactions, `Some` only when the export has a `reactions` array
    #[serde(deserialize_with = "lenient::records")]
    pub reactions: Option<Vec<RawReaction>>,
}

impl RawMessage {
    /// Returns `true` for regular messages (as opposed to service entries).
    pub fn is_message(&self) -> bool {
        self.msg_type.as_deref() == Some(MESSAGE_TYPE)
    }
}

/// The `text` field of a message.
///
/// Telegram writes plain messages as a string and messages with any
/// formatting (links, mentions, bold...) as an array of fragments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TextField {
    /// `"text": "Hello"`
    Plain(String),
    /// `"text": ["Hello ", {"type": "bold", "text": "world"}]`
    Fragmented(Vec<Fragment>),
    /// Missing, `null`, or any other JSON type
    #[default]
    Absent,
}

impl From<Value> for TextField {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => TextField::Plain(s),
            Value::Array(items) => {
                TextField::Fragmented(items.into_iter().map(Fragment::from).collect())
            }
            _ => TextField::Absent,
        }
    }
}

impl<'de> Deserialize<'de> for TextField {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(TextField::from)
    }
}

/// One element of a fragmented `text` array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// A bare string element
    Plain(String),
    /// A formatted span (`link`, `mention`, `bold`...); only its literal
    /// text is kept, if it is a string
    Entity(Option<String>),
    /// Any other JSON value
    Other,
}

impl Fragment {
    /// Returns the literal text of this fragment, or `""` if it has none.
    pub fn as_text(&self) -> &str {
        match self {
            Fragment::Plain(s) => s,
            Fragment::Entity(text) => text.as_deref().unwrap_or(""),
            Fragment::Other => "",
        }
    }
}

impl From<Value> for Fragment {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => Fragment::Plain(s),
            Value::Object(mut obj) => Fragment::Entity(match obj.remove("text") {
                Some(Value::String(s)) => Some(s),
                _ => None,
            }),
            _ => Fragment::Other,
        }
    }
}

/// One entry of a message's `reactions` array.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawReaction {
    /// Reaction kind (`emoji`, `custom_emoji`, `paid`...)
    #[serde(rename = "type", deserialize_with = "lenient::tag")]
    pub reaction_type: Option<String>,
    /// The reaction glyph
    #[serde(deserialize_with = "lenient::present")]
    pub emoji: Option<Value>,
    /// Most recent reacting users, capped by Telegram
    #[serde(deserialize_with = "lenient::records")]
    pub recent: Option<Vec<RecentReaction>>,
    /// Total number of reactions of this kind
    #[serde(deserialize_with = "lenient::present")]
    pub count: Option<Value>,
}

impl RawReaction {
    /// Returns `true` for plain emoji reactions.
    pub fn is_emoji(&self) -> bool {
        self.reaction_type.as_deref() == Some(EMOJI_REACTION_TYPE)
    }
}

/// A single user's reaction event from `recent`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RecentReaction {
    #[serde(deserialize_with = "lenient::present")]
    pub from: Option<Value>,
    #[serde(deserialize_with = "lenient::present")]
    pub from_id: Option<Value>,
    #[serde(deserialize_with = "lenient::present")]
    pub date: Option<Value>,
}

/// Parses an export from raw bytes.
pub fn parse_document(bytes: &[u8]) -> Result<RawDocument> {
    let value: Value =
        serde_json::from_slice(bytes).map_err(|e| CleanError::invalid_json(e, None))?;
    document_from_value(value)
}

/// Parses an export from a string.
pub fn parse_document_str(content: &str) -> Result<RawDocument> {
    let value: Value =
        serde_json::from_str(content).map_err(|e| CleanError::invalid_json(e, None))?;
    document_from_value(value)
}

/// Interprets an already-parsed JSON value as an export.
///
/// Fails only when the root is not an object.
pub fn document_from_value(value: Value) -> Result<RawDocument> {
    if !value.is_object() {
        return Err(CleanError::not_an_object(json_type_name(&value), None));
    }
    let document =
        RawDocument::deserialize(value).map_err(|e| CleanError::invalid_json(e, None))?;
    debug!(entries = document.messages.len(), "parsed chat export");
    Ok(document)
}

/// Reads and parses an export file.
pub fn read_document(path: &Path) -> Result<RawDocument> {
    let bytes = fs::read(path)?;
    debug!(path = %path.display(), bytes = bytes.len(), "read chat export");
    parse_document(&bytes).map_err(|e| e.with_path(path))
}
