//! HBM3 shares its parameter groups with HBM2.

use serde::{Deserialize, Serialize};

use crate::Identified;

pub use super::hbm2::{
    MemArchitectureSpecHbm2 as MemArchitectureSpecHbm3, MemTimingSpecHbm2 as MemTimingSpecHbm3,
};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Identified)]
#[identified("HBM3")]
#[serde(rename_all = "camelCase")]
pub struct MemSpecHbm3 {
    pub memory_id: String,
    #[serde(rename = "memarchitecturespec", with = "crate::serde::group")]
    pub architecture: MemArchitectureSpecHbm3,
    #[serde(rename = "memtimingspec", with = "crate::serde::group")]
    pub timing: MemTimingSpecHbm3,
}
