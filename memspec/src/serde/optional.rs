//! Optional fields that are always written.
//!
//! Use with `#[serde(default, with = "memspec::serde::optional")]`: `None` is written as an
//! explicit `null`, and both `null` and an absent key read back as `None`.
//!
//! ```rust
//! #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
//! struct Timing {
//!     #[serde(default, with = "memspec::serde::optional")]
//!     rpre: Option<u64>,
//! }
//!
//! let document = serde_json::to_value(Timing { rpre: None }).unwrap();
//! assert_eq!(document, serde_json::json!({ "rpre": null }));
//!
//! let timing: Timing = serde_json::from_value(serde_json::json!({})).unwrap();
//! assert_eq!(timing, Timing { rpre: None });
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Serialize,
{
    match value {
        Some(value) => serializer.serialize_some(value),
        None => serializer.serialize_none(),
    }
}

pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}
