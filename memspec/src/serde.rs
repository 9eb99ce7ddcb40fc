//! serde support beyond the generated variant impls.

pub mod group;
pub mod optional;

#[doc(hidden)]
pub mod __private {
    use serde::{Serialize, de::DeserializeOwned};
    use serde_json::Value;

    use crate::Error;

    /// `true` if no two identifiers are equal. Evaluated at compile time for every id variant.
    pub const fn ids_unique(ids: &[&str]) -> bool {
        let mut i = 0;
        while i < ids.len() {
            let mut j = i + 1;
            while j < ids.len() {
                if str_eq(ids[i], ids[j]) {
                    return false;
                }
                j += 1;
            }
            i += 1;
        }
        true
    }

    const fn str_eq(a: &str, b: &str) -> bool {
        let (a, b) = (a.as_bytes(), b.as_bytes());
        if a.len() != b.len() {
            return false;
        }

        let mut i = 0;
        while i < a.len() {
            if a[i] != b[i] {
                return false;
            }
            i += 1;
        }
        true
    }

    pub fn discriminator<'d>(document: &'d Value, key: &'static str) -> Result<&'d str, Error> {
        let tag = document
            .as_object()
            .and_then(|object| object.get(key))
            .ok_or(Error::MissingDiscriminator { key })?;

        tag.as_str().ok_or(Error::InvalidDiscriminator { key })
    }

    pub fn no_matching_type(key: &'static str, id: &str) -> Error {
        Error::NoMatchingType {
            key,
            id: id.to_owned(),
        }
    }

    pub fn member_from_document<T>(document: &Value, id: &str) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        tracing::trace!(id, "parsing registered type");
        Ok(T::deserialize(document)?)
    }

    /// Writes `member`, then the discriminator, so the discriminator wins over a field of the same
    /// name.
    pub fn tagged_document<T>(
        key: &'static str,
        id: &'static str,
        member: &T,
    ) -> Result<Value, Error>
    where
        T: Serialize + ?Sized,
    {
        let mut document = serde_json::to_value(member)?;
        let object = document.as_object_mut().ok_or(Error::ExpectedObject)?;
        object.insert(key.to_owned(), Value::String(id.to_owned()));
        Ok(document)
    }

    pub fn untagged_document<T>(member: &T) -> Result<Value, Error>
    where
        T: Serialize + ?Sized,
    {
        Ok(serde_json::to_value(member)?)
    }

    pub fn try_member<T>(document: &Value) -> Option<T>
    where
        T: DeserializeOwned,
    {
        match T::deserialize(document) {
            Ok(member) => Some(member),
            Err(error) => {
                tracing::trace!(
                    member = core::any::type_name::<T>(),
                    %error,
                    "untagged member did not match"
                );
                None
            }
        }
    }

}
