//! GDDR5 shares its parameter groups with GDDR5X.

use serde::{Deserialize, Serialize};

use crate::Identified;

pub use super::gddr5x::{
    MemArchitectureSpecGddr5x as MemArchitectureSpecGddr5,
    MemTimingSpecGddr5x as MemTimingSpecGddr5,
};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Identified)]
#[identified("GDDR5")]
#[serde(rename_all = "camelCase")]
pub struct MemSpecGddr5 {
    pub memory_id: String,
    #[serde(rename = "memarchitecturespec", with = "crate::serde::group")]
    pub architecture: MemArchitectureSpecGddr5,
    #[serde(rename = "memtimingspec", with = "crate::serde::group")]
    pub timing: MemTimingSpecGddr5,
}
