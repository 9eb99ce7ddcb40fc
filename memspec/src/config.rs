//! Configuration documents that refer to a memspec.
//!
//! ```rust
//! # fn main() -> Result<(), memspec::Error> {
//! use memspec::config::{Configuration, MemSpecSourceKind, TogglingRateIdlePattern};
//! use memspec::Variant as _;
//!
//! let configuration = Configuration::from_buffer(r#"{
//!     "memspec": "memspecs/ddr4_8gb.json",
//!     "togglingRate": {
//!         "togglingRateRead": 0.5, "togglingRateWrite": 0.5,
//!         "dutyCycleRead": 0.5, "dutyCycleWrite": 0.5,
//!         "idlePatternRead": "Z", "idlePatternWrite": "L"
//!     }
//! }"#)?;
//!
//! assert!(matches!(configuration.memspec.get_variant(), Some(MemSpecSourceKind::File(_))));
//! let toggling_rate = configuration.toggling_rate.unwrap();
//! assert_eq!(toggling_rate.idle_pattern_read, TogglingRateIdlePattern::Z);
//! # Ok(())
//! # }
//! ```

use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Error, MEMSPEC_KEY, MemSpecVariant, Variant as _, plain_variant, read_memspec};

mod toggling_rate;
pub use toggling_rate::{ToggleRateDefinition, TogglingRateIdlePattern};

/// A memspec written inline, or the path of a file holding one.
///
/// An inline object that fails to parse as a memspec is not retried as a path, so it reads as
/// empty.
#[plain_variant(Inline = MemSpecVariant)]
#[plain_variant(File = PathBuf)]
#[plain_variant(derive(Debug, Clone, PartialEq))]
pub struct MemSpecSource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    pub memspec: MemSpecSource,
    #[serde(rename = "togglingRate", default, with = "crate::serde::group::optional")]
    pub toggling_rate: Option<ToggleRateDefinition>,
}

impl Configuration {
    pub fn from_buffer(buffer: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(buffer)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    /// The configured memspec. A relative file path is resolved against `base_dir`, and the file
    /// may hold either a memspec container or a bare memspec.
    pub fn memspec(&self, base_dir: impl AsRef<Path>) -> Result<MemSpecVariant, Error> {
        match self.memspec.get_variant() {
            Some(MemSpecSourceKind::Inline(memspec)) => Ok(memspec.clone()),
            Some(MemSpecSourceKind::File(path)) => {
                let path = base_dir.as_ref().join(path);
                tracing::debug!(path = %path.display(), "reading referenced memspec");

                let json: Value = serde_json::from_reader(BufReader::new(File::open(&path)?))?;
                read_memspec(&json, Some(MEMSPEC_KEY))
            }
            None => Err(Error::EmptyVariant),
        }
    }
}
