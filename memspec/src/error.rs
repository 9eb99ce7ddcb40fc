#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("document has no `{key}` discriminator")]
    MissingDiscriminator { key: &'static str },

    #[error("discriminator `{key}` is not a string")]
    InvalidDiscriminator { key: &'static str },

    #[error("no registered type has {key} `{id}`")]
    NoMatchingType { key: &'static str, id: String },

    #[error("document has no `{0}` entry")]
    MissingKey(String),

    #[error("variant holds no value")]
    EmptyVariant,

    #[error("expected a document object")]
    ExpectedObject,

    #[error(transparent)]
    Document(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// `true` when the document has the wrong shape for a variant as a whole, as opposed to a
    /// member's fields failing to parse.
    pub fn is_bad_variant_access(&self) -> bool {
        matches!(
            self,
            Self::MissingDiscriminator { .. }
                | Self::InvalidDiscriminator { .. }
                | Self::NoMatchingType { .. }
                | Self::MissingKey(_)
        )
    }
}
