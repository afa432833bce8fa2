//! Todo items, as they are stored by the backend

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::content::TodoContent;
use crate::error::TodoError;


/// An opaque identifier, assigned by the backend when a todo is created.
///
/// Backends may use either integers or strings, both are accepted.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TodoId {
    content: IdRepr,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum IdRepr {
    Number(u64),
    Text(String),
}

impl From<u64> for TodoId {
    fn from(n: u64) -> Self {
        Self { content: IdRepr::Number(n) }
    }
}
impl From<&str> for TodoId {
    fn from(s: &str) -> Self {
        s.parse().unwrap_or_else(|never| match never {})
    }
}
impl FromStr for TodoId {
    type Err = std::convert::Infallible;
    /// Numeric strings become numeric ids, so that `"3"` typed by a user matches id `3` sent by the server
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let content = match s.parse::<u64>() {
            Ok(n) => IdRepr::Number(n),
            Err(_) => IdRepr::Text(s.to_string()),
        };
        Ok(Self { content })
    }
}

impl Display for TodoId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match &self.content {
            IdRepr::Number(n) => write!(f, "{}", n),
            IdRepr::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Used to support serde
impl Serialize for TodoId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match &self.content {
            IdRepr::Number(n) => serializer.serialize_u64(*n),
            IdRepr::Text(s) => serializer.serialize_str(s),
        }
    }
}
/// Used to support serde
impl<'de> Deserialize<'de> for TodoId {
    fn deserialize<D>(deserializer: D) -> Result<TodoId, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u64),
            Text(String),
        }

        let content = match Raw::deserialize(deserializer)? {
            Raw::Number(n) => IdRepr::Number(n),
            Raw::Text(s) => IdRepr::Text(s),
        };
        Ok(TodoId{ content })
    }
}



/// A todo, as sent by the server.
///
/// `content` is the raw payload. It may embed a due date, see [`crate::content`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    #[serde(alias = "_id")]
    id: TodoId,
    content: String,
}

impl TaskRecord {
    pub fn new<I: Into<TodoId>, S: ToString>(id: I, content: S) -> Self {
        Self { id: id.into(), content: content.to_string() }
    }

    /// Decode a single record, as found in a server listing.
    ///
    /// Records that carry both `id` and `_id` are identified by `id`.
    pub fn from_json(mut value: serde_json::Value) -> Result<Self, TodoError> {
        if let Some(fields) = value.as_object_mut() {
            if fields.contains_key("id") {
                fields.remove("_id");
            }
        }
        serde_json::from_value(value).map_err(|err| TodoError::Payload(err.to_string()))
    }

    pub fn id(&self) -> &TodoId   { &self.id      }
    pub fn content(&self) -> &str { &self.content }

    /// Split the raw content into its display text and its (optional) due date
    pub fn decoded(&self) -> TodoContent {
        crate::content::parse(&self.content)
    }

    /// The text that should be displayed for this task
    pub fn text(&self) -> String {
        self.decoded().text
    }

    /// Whether this task is due on the given ISO date (`YYYY-MM-DD`)
    pub fn is_due_on(&self, iso_date: &str) -> bool {
        self.decoded().date.as_deref() == Some(iso_date)
    }
}
