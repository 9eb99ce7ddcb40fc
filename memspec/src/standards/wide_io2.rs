use serde::{Deserialize, Serialize};

use crate::Identified;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemArchitectureSpecWideIo2 {
    pub nbr_of_rows: u64,
    pub nbr_of_columns: u64,
    pub burst_length: u64,
    #[serde(default, with = "crate::serde::optional")]
    pub max_burst_length: Option<u64>,
    pub data_rate: u64,
    pub width: u64,
    pub nbr_of_channels: u64,
    pub nbr_of_ranks: u64,
    pub nbr_of_devices: u64,
    pub nbr_of_banks: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct MemTimingSpecWideIo2 {
    #[serde(rename = "tCK")]
    pub tck: f64,
    pub dqsck: u64,
    pub dqss: u64,
    pub cke: u64,
    pub rl: u64,
    pub wl: u64,
    #[serde(rename = "RCPB")]
    pub rc_pb: u64,
    #[serde(rename = "RCAB")]
    pub rc_ab: u64,
    pub ckesr: u64,
    pub xsr: u64,
    pub xp: u64,
    pub ccd: u64,
    pub rtp: u64,
    pub rcd: u64,
    #[serde(rename = "RPPB")]
    pub rp_pb: u64,
    #[serde(rename = "RPAB")]
    pub rp_ab: u64,
    pub ras: u64,
    pub wr: u64,
    pub wtr: u64,
    pub rrd: u64,
    pub faw: u64,
    pub refi: u64,
    pub refm: u64,
    #[serde(rename = "REFIPB")]
    pub refi_pb: u64,
    #[serde(rename = "RFCAB")]
    pub rfc_ab: u64,
    #[serde(rename = "RFCPB")]
    pub rfc_pb: u64,
    pub rtrs: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Identified)]
#[identified("WIDEIO2")]
#[serde(rename_all = "camelCase")]
pub struct MemSpecWideIo2 {
    pub memory_id: String,
    #[serde(rename = "memarchitecturespec", with = "crate::serde::group")]
    pub architecture: MemArchitectureSpecWideIo2,
    #[serde(rename = "memtimingspec", with = "crate::serde::group")]
    pub timing: MemTimingSpecWideIo2,
}
