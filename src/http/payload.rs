use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::model::ResultSet;

/// The `{status, ...}` wrapper form of a backend response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Envelope {
    Success {
        data: ResultSet,
    },
    NoMatches {
        #[serde(default, deserialize_with = "optional_message")]
        message: Option<String>,
    },
    Error {
        #[serde(default, deserialize_with = "optional_message")]
        message: Option<String>,
    },
}

/// `null` and `false` mean no message; other scalars are shown as written.
fn optional_message<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Known {
    Songs(ResultSet),
    Envelope(Envelope),
}

/// Every shape the `/hit_me` endpoint can answer with.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Bare JSON array of songs.
    Songs(ResultSet),
    Envelope(Envelope),
    /// Anything else, kept verbatim for diagnostics.
    Unrecognized(String),
}

impl Payload {
    pub fn decode(body: &[u8]) -> Self {
        match serde_json::from_slice::<Known>(body) {
            Ok(Known::Songs(songs)) => Payload::Songs(songs),
            Ok(Known::Envelope(envelope)) => Payload::Envelope(envelope),
            Err(_) => Payload::Unrecognized(String::from_utf8_lossy(body).into_owned()),
        }
    }
}
