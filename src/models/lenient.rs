//! Loose string decoding for documents and request bodies.
//!
//! Scalars (numbers, booleans) are rendered as text; `null`, objects and
//! arrays decode as absent instead of failing the whole document or body.

use serde::{de::IgnoredAny, Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Other(IgnoredAny),
}

/// `Some(text)` for scalars, `None` for anything else
pub fn optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Loose::deserialize(deserializer)? {
        Loose::Text(s) => Some(s),
        Loose::Int(i) => Some(i.to_string()),
        Loose::Float(f) => Some(f.to_string()),
        Loose::Bool(b) => Some(b.to_string()),
        Loose::Other(_) => None,
    })
}

/// Like [`optional_string`], with `""` for non-scalars
pub fn string_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    optional_string(deserializer).map(Option::unwrap_or_default)
}
