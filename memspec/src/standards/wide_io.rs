use serde::{Deserialize, Serialize};

use crate::Identified;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemArchitectureSpecWideIo {
    pub nbr_of_rows: u64,
    pub nbr_of_columns: u64,
    pub burst_length: u64,
    #[serde(default, with = "crate::serde::optional")]
    pub max_burst_length: Option<u64>,
    pub data_rate: u64,
    pub width: u64,
    pub nbr_of_channels: u64,
    pub nbr_of_ranks: u64,
    pub nbr_of_banks: u64,
    pub nbr_of_devices: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct MemTimingSpecWideIo {
    #[serde(rename = "tCK")]
    pub tck: f64,
    pub cke: u64,
    pub ckesr: u64,
    pub ras: u64,
    pub rc: u64,
    pub rcd: u64,
    pub rl: u64,
    pub wl: u64,
    pub wr: u64,
    pub xp: u64,
    pub xsr: u64,
    pub refi: u64,
    pub rfc: u64,
    pub rp: u64,
    pub dqsck: u64,
    pub ac: u64,
    pub ccd_r: u64,
    pub ccd_w: u64,
    pub rrd: u64,
    pub taw: u64,
    pub wtr: u64,
    pub rtrs: u64,
}

/// Single data rate Wide I/O.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Identified)]
#[identified("WIDEIO_SDR")]
#[serde(rename_all = "camelCase")]
pub struct MemSpecWideIo {
    pub memory_id: String,
    #[serde(rename = "memarchitecturespec", with = "crate::serde::group")]
    pub architecture: MemArchitectureSpecWideIo,
    #[serde(rename = "memtimingspec", with = "crate::serde::group")]
    pub timing: MemTimingSpecWideIo,
}
