//! The note entity and the payload shapes exchanged with the notes API.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::{fmt, num::ParseIntError, str::FromStr};

/// Identifier assigned to a note by the repository when it is first persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(pub i64);

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(NoteId)
    }
}

impl From<i64> for NoteId {
    fn from(value: i64) -> Self {
        NoteId(value)
    }
}

/// A persisted note as returned by the notes API.
///
/// Timestamps are owned by the repository. They are optional here because the API may omit
/// them, in which case the note sorts after every dated note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// The repository-assigned identifier.
    pub id: NoteId,
    /// The note title.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    /// The note body. May be empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
    /// When the repository first stored the note.
    #[serde(
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
    /// When the repository last wrote the note.
    #[serde(
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,
}

/// The note fields a client is allowed to write.
///
/// This is the body of `POST /notes` (without `id`) and `PUT /notes/{id}` (with `id`), and the
/// data carried by the `noteSaved` bus message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotePayload {
    /// Present when the payload targets an existing note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<NoteId>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
}

impl NotePayload {
    /// Creates a payload for a note that has not been persisted yet.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            content: content.into(),
        }
    }

    /// Sets the identifier of the note this payload writes to.
    pub fn with_id(mut self, id: Option<NoteId>) -> Self {
        self.id = id;
        self
    }
}

/// Parses a repository timestamp.
///
/// Accepts RFC 3339 strings as well as naive ISO-8601 date-times, which are taken to be UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_timestamp))
}
