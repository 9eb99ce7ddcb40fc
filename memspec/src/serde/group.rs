//! Parameter groups, which are only read from JSON objects.
//!
//! A serde-derived struct also accepts an array of its fields in declaration order. Groups are
//! keyed by name only, so `#[serde(with = "memspec::serde::group")]` rejects any other shape
//! before the group itself is parsed.
//!
//! ```rust
//! #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
//! struct Architecture {
//!     rows: u64,
//!     columns: u64,
//! }
//!
//! #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
//! struct Record {
//!     #[serde(with = "memspec::serde::group")]
//!     architecture: Architecture,
//! }
//!
//! let record: Record =
//!     serde_json::from_str(r#"{ "architecture": { "rows": 8, "columns": 4 } }"#).unwrap();
//! assert_eq!(record.architecture.rows, 8);
//!
//! assert!(serde_json::from_str::<Record>(r#"{ "architecture": [8, 4] }"#).is_err());
//! ```

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{DeserializeOwned, Unexpected},
};
use serde_json::Value;

pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Serialize,
{
    value.serialize(serializer)
}

pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let document = Value::deserialize(deserializer)?;
    from_object(document)
}

/// An optional group: `null` or absent (with `default`) is `None`, and `None` is written as `null`.
pub mod optional {
    use serde::{Deserialize, Deserializer, de::DeserializeOwned};
    use serde_json::Value;

    pub use crate::serde::optional::serialize;

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(None),
            document => super::from_object(document).map(Some),
        }
    }
}

fn from_object<T, E>(document: Value) -> Result<T, E>
where
    T: DeserializeOwned,
    E: serde::de::Error,
{
    if document.is_object() {
        return T::deserialize(document).map_err(E::custom);
    }

    let unexpected = match &document {
        Value::Object(_) => Unexpected::Map,
        Value::Null => Unexpected::Unit,
        Value::Bool(value) => Unexpected::Bool(*value),
        Value::Number(_) => Unexpected::Other("number"),
        Value::String(value) => Unexpected::Str(value),
        Value::Array(_) => Unexpected::Seq,
    };

    Err(E::invalid_type(unexpected, &"a parameter group object"))
}
