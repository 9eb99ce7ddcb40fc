use serde::{Deserialize, Serialize};

use crate::Identified;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemArchitectureSpecHbm2 {
    pub nbr_of_rows: u64,
    pub nbr_of_columns: u64,
    pub burst_length: u64,
    #[serde(default, with = "crate::serde::optional")]
    pub max_burst_length: Option<u64>,
    pub data_rate: u64,
    pub width: u64,
    pub nbr_of_channels: u64,
    pub nbr_of_pseudo_channels: u64,
    pub nbr_of_devices: u64,
    pub nbr_of_banks: u64,
    pub nbr_of_bank_groups: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct MemTimingSpecHbm2 {
    #[serde(rename = "tCK")]
    pub tck: f64,
    pub dqsck: u64,
    pub rc: u64,
    pub ras: u64,
    pub rcdrd: u64,
    pub rcdwr: u64,
    pub rrdl: u64,
    pub rrds: u64,
    pub faw: u64,
    pub rtp: u64,
    pub rp: u64,
    pub rl: u64,
    pub wl: u64,
    pub pl: u64,
    pub wr: u64,
    pub ccdl: u64,
    pub ccds: u64,
    pub wtrl: u64,
    pub wtrs: u64,
    pub rtw: u64,
    pub xp: u64,
    pub cke: u64,
    pub xs: u64,
    pub rfc: u64,
    pub rfcsb: u64,
    pub rrefd: u64,
    pub refi: u64,
    pub refisb: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Identified)]
#[identified("HBM2")]
#[serde(rename_all = "camelCase")]
pub struct MemSpecHbm2 {
    pub memory_id: String,
    #[serde(rename = "memarchitecturespec", with = "crate::serde::group")]
    pub architecture: MemArchitectureSpecHbm2,
    #[serde(rename = "memtimingspec", with = "crate::serde::group")]
    pub timing: MemTimingSpecHbm2,
}
