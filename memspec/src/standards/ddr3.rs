use serde::{Deserialize, Serialize};

use crate::Identified;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemArchitectureSpecDdr3 {
    pub nbr_of_rows: u64,
    pub nbr_of_columns: u64,
    pub burst_length: u64,
    pub data_rate: u64,
    pub width: u64,
    #[serde(default, with = "crate::serde::optional")]
    pub max_burst_length: Option<u64>,
    pub nbr_of_channels: u64,
    pub nbr_of_ranks: u64,
    pub nbr_of_banks: u64,
    pub nbr_of_devices: u64,
}

/// Timings in clock cycles, except `tCK` in nanoseconds.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct MemTimingSpecDdr3 {
    #[serde(rename = "tCK")]
    pub tck: f64,
    pub cke: u64,
    pub ckesr: u64,
    pub ras: u64,
    pub rc: u64,
    pub rcd: u64,
    pub rl: u64,
    pub rtp: u64,
    pub wl: u64,
    pub wr: u64,
    pub xp: u64,
    pub xs: u64,
    pub refi: u64,
    pub rfc: u64,
    pub rp: u64,
    pub dqsck: u64,
    pub ccd: u64,
    pub faw: u64,
    pub rrd: u64,
    pub wtr: u64,
    pub xpdll: u64,
    pub xsdll: u64,
    pub al: u64,
    pub actpden: u64,
    pub prpden: u64,
    pub refpden: u64,
    pub rtrs: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Identified)]
#[identified("DDR3")]
#[serde(rename_all = "camelCase")]
pub struct MemSpecDdr3 {
    pub memory_id: String,
    #[serde(rename = "memarchitecturespec", with = "crate::serde::group")]
    pub architecture: MemArchitectureSpecDdr3,
    #[serde(rename = "memtimingspec", with = "crate::serde::group")]
    pub timing: MemTimingSpecDdr3,
}
