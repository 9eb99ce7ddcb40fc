//! Keyed access to document objects.
//!
//! Every function takes an optional or required `key`. With a key the value lives in an entry
//! of the document object; without one the value is the document itself.

use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

use crate::{Error, IdVariant};

/// Writes `value`, or an explicit `null` when it is `None`.
///
/// Without a key, `None` leaves the document untouched. A `null` document is turned into an
/// empty object before a keyed write.
/// ```rust
/// # fn main() -> Result<(), memspec::Error> {
/// let mut document = serde_json::Value::Null;
/// memspec::document::write_optional(&mut document, Some("RPRE"), &Some(1u64))?;
/// memspec::document::write_optional(&mut document, Some("RPST"), &None::<u64>)?;
/// assert_eq!(document, serde_json::json!({ "RPRE": 1, "RPST": null }));
/// # Ok(())
/// # }
/// ```
pub fn write_optional<T>(
    document: &mut Value,
    key: Option<&str>,
    value: &Option<T>,
) -> Result<(), Error>
where
    T: Serialize,
{
    match key {
        Some(key) => {
            let entry = match value {
                Some(value) => serde_json::to_value(value)?,
                None => Value::Null,
            };
            object_mut(document)?.insert(key.to_owned(), entry);
        }
        None => {
            if let Some(value) = value {
                *document = serde_json::to_value(value)?;
            }
        }
    }

    Ok(())
}

/// Reads an optional value. An absent key and `null` are both `None`; anything else must parse.
pub fn read_optional<T>(document: &Value, key: Option<&str>) -> Result<Option<T>, Error>
where
    T: DeserializeOwned,
{
    let entry = match key {
        Some(key) => document.get(key),
        None => Some(document),
    };

    match entry {
        None | Some(Value::Null) => Ok(None),
        Some(entry) => Ok(Some(T::deserialize(entry)?)),
    }
}

pub fn write_id_variant<V>(document: &mut Value, key: &str, variant: &V) -> Result<(), Error>
where
    V: IdVariant,
{
    let entry = variant.to_document()?;
    object_mut(document)?.insert(key.to_owned(), entry);
    Ok(())
}

/// Fails with [Error::MissingKey] if there is no entry at `key`.
pub fn read_id_variant<V>(document: &Value, key: &str) -> Result<V, Error>
where
    V: IdVariant,
{
    let entry = document
        .get(key)
        .ok_or_else(|| Error::MissingKey(key.to_owned()))?;
    V::from_document(entry)
}

fn object_mut(document: &mut Value) -> Result<&mut Map<String, Value>, Error> {
    if document.is_null() {
        *document = Value::Object(Map::new());
    }

    document.as_object_mut().ok_or(Error::ExpectedObject)
}
