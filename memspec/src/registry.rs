use std::{
    fs::File,
    io::{BufReader, BufWriter, Write as _},
    path::Path,
};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Error, IdVariant as _, id_variant, standards};

/// Key of the memspec entry in a container document.
pub const MEMSPEC_KEY: &str = "memspec";

/// A memspec of any supported standard, tagged by `memoryType`.
#[id_variant(key = "memoryType")]
#[id_variant(Ddr3 = standards::MemSpecDdr3)]
#[id_variant(Ddr4 = standards::MemSpecDdr4)]
#[id_variant(Ddr5 = standards::MemSpecDdr5)]
#[id_variant(Lpddr4 = standards::MemSpecLpddr4)]
#[id_variant(Lpddr5 = standards::MemSpecLpddr5)]
#[id_variant(WideIo = standards::MemSpecWideIo)]
#[id_variant(WideIo2 = standards::MemSpecWideIo2)]
#[id_variant(Gddr5 = standards::MemSpecGddr5)]
#[id_variant(Gddr5x = standards::MemSpecGddr5x)]
#[id_variant(Gddr6 = standards::MemSpecGddr6)]
#[id_variant(Hbm2 = standards::MemSpecHbm2)]
#[id_variant(Hbm3 = standards::MemSpecHbm3)]
#[id_variant(SttMram = standards::MemSpecSttMram)]
#[id_variant(derive(Debug, Clone, PartialEq))]
pub struct MemSpecVariant;

/// `{"memspec": {...}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemSpecContainer {
    pub memspec: MemSpecVariant,
}

impl MemSpecContainer {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }
}

impl From<MemSpecVariant> for MemSpecContainer {
    fn from(memspec: MemSpecVariant) -> Self {
        Self { memspec }
    }
}

/// Reads a memspec from `json[key]`, or from `json` itself.
///
/// The root is tried when there is no key, when `json` has no entry at `key`, or when the entry's
/// `memoryType` is not registered. Every other failure is returned.
pub fn read_memspec(json: &Value, key: Option<&str>) -> Result<MemSpecVariant, Error> {
    if let Some(document) = key.and_then(|key| json.get(key)) {
        match MemSpecVariant::from_document(document) {
            Err(Error::NoMatchingType { id, .. }) => {
                tracing::trace!(%id, "keyed memspec not registered, trying the root");
            }
            result => return result,
        }
    }

    MemSpecVariant::from_document(json)
}

/// [read_memspec], with every failure logged and mapped to `None`.
pub fn parse_memspec_from_json(json: &Value, key: Option<&str>) -> Option<MemSpecVariant> {
    read_memspec(json, key)
        .inspect_err(|error| tracing::debug!(%error, "memspec could not be read"))
        .ok()
}

pub fn parse_memspec_from_buffer(buffer: &str, key: Option<&str>) -> Option<MemSpecVariant> {
    let json: Value = serde_json::from_str(buffer)
        .inspect_err(|error| tracing::debug!(%error, "memspec buffer is not valid JSON"))
        .ok()?;

    parse_memspec_from_json(&json, key)
}

pub fn parse_memspec_from_file(
    path: impl AsRef<Path>,
    key: Option<&str>,
) -> Option<MemSpecVariant> {
    let path = path.as_ref();
    let buffer = std::fs::read_to_string(path)
        .inspect_err(|error| {
            tracing::debug!(path = %path.display(), %error, "memspec file could not be read")
        })
        .ok()?;

    parse_memspec_from_buffer(&buffer, key)
}
