//! Enums with a closed mapping to document values.

/// Declares an enum whose variants map to fixed document values.
///
/// An `Invalid` variant is added as the default. It is written as `null`, and any document value
/// outside the mapping reads back as `Invalid`. The enum derives `Debug`, `Clone`, `Copy`,
/// `PartialEq`, `Eq`, `Hash` and `Default`.
/// ```rust
/// memspec::document_enum! {
///     pub enum Level {
///         Low => "L",
///         High => "H",
///     }
/// }
///
/// let level: Level = serde_json::from_str("\"H\"").unwrap();
/// assert_eq!(level, Level::High);
///
/// let level: Level = serde_json::from_str("\"X\"").unwrap();
/// assert_eq!(level, Level::Invalid);
/// assert_eq!(serde_json::to_string(&level).unwrap(), "null");
/// ```
#[macro_export]
macro_rules! document_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $document:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
            /// Not a recognized document value
            #[default]
            Invalid,
        }

        impl $name {
            pub fn is_valid(&self) -> bool {
                !matches!(self, Self::Invalid)
            }

            pub fn to_document(&self) -> $crate::__private::serde_json::Value {
                match self {
                    $(
                        Self::$variant => $crate::__private::serde_json::Value::from($document),
                    )+
                    Self::Invalid => $crate::__private::serde_json::Value::Null,
                }
            }

            pub fn from_document(document: &$crate::__private::serde_json::Value) -> Self {
                $(
                    if *document == $crate::__private::serde_json::Value::from($document) {
                        return Self::$variant;
                    }
                )+
                Self::Invalid
            }
        }

        impl $crate::__private::serde_crate::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde_crate::Serializer,
            {
                $crate::__private::serde_crate::Serialize::serialize(&self.to_document(), serializer)
            }
        }

        impl<'de> $crate::__private::serde_crate::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde_crate::Deserializer<'de>,
            {
                let document = <$crate::__private::serde_json::Value as $crate::__private::serde_crate::Deserialize>::deserialize(deserializer)?;
                ::core::result::Result::Ok(Self::from_document(&document))
            }
        }
    };
}

#[cfg(test)]
mod test {
    use serde_json::json;

    crate::document_enum! {
        enum Mode {
            Zero => 0u64,
            One => 1u64,
        }
    }

    #[test]
    fn numeric_mapping() {
        assert_eq!(Mode::from_document(&json!(1)), Mode::One);
        assert_eq!(Mode::from_document(&json!(2)), Mode::Invalid);
        assert_eq!(Mode::from_document(&json!("1")), Mode::Invalid);
        assert_eq!(Mode::Zero.to_document(), json!(0));
        assert_eq!(Mode::default(), Mode::Invalid);
        assert!(!Mode::Invalid.is_valid());
    }
}
