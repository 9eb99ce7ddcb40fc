//! Typed memory-device specifications with discriminated-variant JSON serialization.
//! * Closed registries - A variant is declared once, with one attribute per member type, and the
//!   set of types it can hold is fixed at compile time.
//! * Self-describing documents - A member is written with a discriminator field naming its type,
//!   and the discriminator selects the type again when reading.
//! * Checked identifiers - Every member carries a constant `&'static str` identifier, and two
//!   members sharing one is a build error rather than a silent mis-parse.
//! * Soft loaders - The memspec loaders turn every failure into `None` for callers that only
//!   need to know whether a file is usable.
//!
//! ```rust
//! pub mod records {
//!     use memspec::Identified;
//!     use serde::{Deserialize, Serialize};
//!
//!     #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Identified)]
//!     #[identified("CIRCLE")]
//!     pub struct Circle {
//!         pub radius: f64,
//!     }
//!
//!     #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Identified)]
//!     #[identified("SQUARE")]
//!     pub struct Square {
//!         pub side: f64,
//!     }
//! }
//!
//! pub mod shape {
//!     # use memspec::id_variant;
//!
//!     // The discriminator key, written into every document
//!     #[id_variant(key = "shape")]
//!     // Members, in match order
//!     #[id_variant(super::records::Circle)]
//!     #[id_variant(super::records::Square)]
//!     #[id_variant(derive(Debug, Clone, PartialEq))]
//!     pub struct Shape;
//! }
//!
//! fn main() -> Result<(), memspec::Error> {
//!     use memspec::{IdVariant as _, Variant as _};
//!     use shape::{Shape, ShapeKind};
//!
//!     // Variants implement From for all members
//!     let mut shape: Shape = records::Circle { radius: 2.0 }.into();
//!     assert_eq!(shape.id(), Some("CIRCLE"));
//!
//!     let document = shape.to_document()?;
//!     assert_eq!(document, serde_json::json!({ "radius": 2.0, "shape": "CIRCLE" }));
//!     assert_eq!(Shape::from_document(&document)?, shape);
//!
//!     // Only registered types are accepted
//!     shape.set_variant(records::Square { side: 1.0 });
//!     assert!(matches!(shape.get_variant(), Some(ShapeKind::Square(_))));
//!
//!     // TryFrom is implemented for all members, by value and by reference
//!     let square: &records::Square = (&shape).try_into().unwrap();
//!     assert_eq!(square.side, 1.0);
//!     let circle: Result<records::Circle, Shape> = shape.try_into();
//!     assert!(circle.is_err());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Identifiers
//! Members of an [macro@id_variant] implement [trait@Identified], usually through the derive.
//! Identifiers must be unique within a variant:
//! ```rust, compile_fail
//! # use memspec::{id_variant, Identified};
//! # use serde::{Deserialize, Serialize};
//! #[derive(Serialize, Deserialize, Identified)]
//! #[identified("DDR4")]
//! pub struct First;
//!
//! #[derive(Serialize, Deserialize, Identified)]
//! #[identified("DDR4")]
//! pub struct Second;
//!
//! #[id_variant(key = "memoryType")]
//! #[id_variant(First)]
//! #[id_variant(Second)]
//! pub struct Colliding;
//! ```
//! A type that is not registered cannot be stored:
//! ```rust, compile_fail
//! # use memspec::{id_variant, Identified, Variant as _};
//! # use serde::{Deserialize, Serialize};
//! #[derive(Serialize, Deserialize, Identified)]
//! #[identified("A")]
//! pub struct A;
//!
//! #[derive(Serialize, Deserialize, Identified)]
//! #[identified("B")]
//! pub struct B;
//!
//! #[id_variant(key = "kind")]
//! #[id_variant(A)]
//! pub struct OnlyA;
//!
//! let mut variant = OnlyA::default();
//! variant.set_variant(B);
//! ```
//!
//! # Untagged variants
//! [macro@plain_variant] accepts the same member attributes without a key. Nothing is written
//! besides the member itself, and reading tries each member in order:
//! ```rust
//! # use memspec::plain_variant;
//! #[plain_variant(Count = u64)]
//! #[plain_variant(Name = String)]
//! #[plain_variant(derive(Debug, PartialEq))]
//! pub struct CountOrName;
//!
//! fn main() {
//!     use memspec::{PlainVariant as _, Variant as _};
//!
//!     let value = CountOrName::from_document(&serde_json::json!("eight"));
//!     assert_eq!(value, CountOrName::from(String::from("eight")));
//!
//!     // Nothing matches a boolean, so the variant is empty
//!     assert!(CountOrName::from_document(&serde_json::json!(true)).is_empty());
//! }
//! ```
//!
//! # Loading memspecs
//! ```rust
//! let buffer = r#"{
//!     "memspec": {
//!         "memoryType": "HBM3",
//!         "memoryId": "hbm3_example",
//!         "memarchitecturespec": {
//!             "burstLength": 4, "dataRate": 2, "nbrOfBankGroups": 4, "nbrOfBanks": 16,
//!             "nbrOfColumns": 128, "nbrOfPseudoChannels": 2, "nbrOfRows": 32768,
//!             "width": 64, "nbrOfDevices": 1, "nbrOfChannels": 1
//!         },
//!         "memtimingspec": {
//!             "tCK": 1.0, "DQSCK": 1, "RC": 47, "RAS": 33, "RCDRD": 14, "RCDWR": 10,
//!             "RRDL": 6, "RRDS": 4, "FAW": 16, "RTP": 5, "RP": 14, "RL": 14, "WL": 4, "PL": 0,
//!             "WR": 16, "CCDL": 4, "CCDS": 2, "WTRL": 9, "WTRS": 4, "RTW": 18, "XP": 8,
//!             "CKE": 8, "XS": 216, "RFC": 350, "RFCSB": 160, "RREFD": 8, "REFI": 3900,
//!             "REFISB": 244
//!         }
//!     }
//! }"#;
//!
//! let variant = memspec::parse_memspec_from_buffer(buffer, Some(memspec::MEMSPEC_KEY)).unwrap();
//!
//! use memspec::IdVariant as _;
//! assert_eq!(variant.id(), Some("HBM3"));
//!
//! // Anything unusable is None
//! assert!(memspec::parse_memspec_from_buffer("{ not json", None).is_none());
//! let unknown = serde_json::json!({ "memoryType": "DDR9", "memoryId": "future" });
//! assert!(memspec::parse_memspec_from_json(&unknown, None).is_none());
//! ```

extern crate self as memspec;

pub mod config;

pub mod document;

mod error;
pub use error::Error;

pub mod mapping;

mod registry;
pub use registry::{
    MEMSPEC_KEY, MemSpecContainer, MemSpecVariant, MemSpecVariantKind, parse_memspec_from_buffer,
    parse_memspec_from_file, parse_memspec_from_json, read_memspec,
};

pub mod serde;

pub mod standards;

/// Builds a discriminated variant from a unit struct.
///
/// Takes `key = "..."` (the discriminator field, exactly once), one `path::Type` or
/// `Name = path::Type` per member, and `derive(...)` for derives applied to the generated types.
pub use memspec_macro::id_variant;

/// Builds an untagged variant from a unit struct.
///
/// Same attributes as [macro@id_variant], without `key`.
pub use memspec_macro::plain_variant;

/// Implements [Identified] from an `#[identified("...")]` attribute.
pub use memspec_macro::Identified;

#[doc(hidden)]
pub mod __private {
    pub use ::serde as serde_crate;
    pub use ::serde_json;

    pub use core::convert::{From, TryFrom};
    pub use core::option::Option;
    pub use core::result::Result;

    pub use crate::serde::__private::*;
}

/// A type with a constant identifier, written as the discriminator value of an [IdVariant].
pub trait Identified {
    const ID: &'static str;
}

/// A sum type over a closed set of member types, which may also be empty.
pub trait Variant: Sized {
    /// The generated enum with one variant per member
    type Kind;

    fn from_kind(kind: Self::Kind) -> Self;

    /// The held member, or `None` if empty
    fn into_kind(self) -> Option<Self::Kind>;

    fn get_variant(&self) -> Option<&Self::Kind>;

    fn get_variant_mut(&mut self) -> Option<&mut Self::Kind>;

    /// Replaces the held member. Types outside the registry do not implement [VariantMember].
    fn set_variant<T>(&mut self, value: T)
    where
        T: VariantMember<Self>,
    {
        *self = Self::from_kind(value.into());
    }

    fn is_empty(&self) -> bool {
        self.get_variant().is_none()
    }
}

/// Implemented for every type registered in `V`.
pub trait VariantMember<V: Variant>: Into<V::Kind> {}

/// A variant written as its member's document plus a discriminator field.
pub trait IdVariant: Variant {
    /// The discriminator key
    const ID_FIELD: &'static str;

    /// Member identifiers, in registry order
    const IDS: &'static [&'static str];

    fn id(&self) -> Option<&'static str>;

    /// Writes the held member, then sets [ID_FIELD](IdVariant::ID_FIELD) to its identifier.
    /// A member field with the same name is overwritten.
    ///
    /// Fails with [Error::EmptyVariant] if empty.
    fn to_document(&self) -> Result<serde_json::Value, Error>;

    /// Reads the discriminator and parses the first member with a matching identifier.
    /// Field errors from that member are returned as-is; later members are not tried.
    fn from_document(document: &serde_json::Value) -> Result<Self, Error>;
}

/// A variant written as its member's document alone.
pub trait PlainVariant: Variant {
    /// `null` if empty
    fn to_document(&self) -> Result<serde_json::Value, Error>;

    /// The first member that parses wins. If none do, the result is empty.
    ///
    /// Members parse with their own serde rules, so a derived struct member also matches an array
    /// of its fields.
    fn from_document(document: &serde_json::Value) -> Self;
}
