use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

/// A single submission from the mood form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Query {
    pub text: String,
    pub emotion: String,
}

impl Query {
    pub fn new(emotion: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emotion: emotion.into(),
        }
    }
}

/// One recommended track, keyed the way the recommendation backend sends it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SongResult {
    #[serde(default, deserialize_with = "display_text")]
    pub song: String,
    #[serde(rename = "Artist(s)", default, deserialize_with = "display_text")]
    pub artists: String,
    #[serde(rename = "Genre", default, deserialize_with = "display_text")]
    pub genre: String,
    #[serde(rename = "Length", default, deserialize_with = "display_text")]
    pub length: String,
    #[serde(rename = "Album", default, deserialize_with = "display_text")]
    pub album: String,
    #[serde(default)]
    pub released: Option<Released>,
    #[serde(default, deserialize_with = "display_text")]
    pub text: String,
}

/// The backend sends "years ago" either as a number or preformatted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Released {
    Number(Number),
    Text(String),
}

impl fmt::Display for Released {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Released::Number(n) => write!(f, "{n}"),
            Released::Text(s) => f.write_str(s),
        }
    }
}

impl SongResult {
    /// "years ago" value as shown in the list, `?` when the backend left it out.
    pub fn released_label(&self) -> String {
        match &self.released {
            Some(released) => released.to_string(),
            None => "?".to_string(),
        }
    }
}

/// Renders any JSON value as display text; `null` becomes blank.
fn display_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

/// Ranked songs in backend order.
pub type ResultSet = Vec<SongResult>;
