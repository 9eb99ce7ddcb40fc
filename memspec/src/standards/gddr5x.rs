use serde::{Deserialize, Serialize};

use crate::Identified;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemArchitectureSpecGddr5x {
    pub nbr_of_rows: u64,
    pub nbr_of_columns: u64,
    pub burst_length: u64,
    #[serde(default, with = "crate::serde::optional")]
    pub max_burst_length: Option<u64>,
    pub data_rate: u64,
    pub width: u64,
    pub nbr_of_channels: u64,
    pub nbr_of_devices: u64,
    pub nbr_of_ranks: u64,
    pub nbr_of_banks: u64,
    pub nbr_of_bank_groups: u64,
}

/// `_32AW` is the 32 activate window, alongside the four activate window `FAW`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct MemTimingSpecGddr5x {
    #[serde(rename = "tCK")]
    pub tck: f64,
    pub rp: u64,
    pub ras: u64,
    pub rc: u64,
    pub rcdrd: u64,
    pub rcdwr: u64,
    pub rtp: u64,
    pub rrds: u64,
    pub rrdl: u64,
    pub ccds: u64,
    pub ccdl: u64,
    pub cl: u64,
    #[serde(rename = "WCK2CKPIN")]
    pub wck2_ckpin: u64,
    #[serde(rename = "WCK2CK")]
    pub wck2_ck: u64,
    #[serde(rename = "WCK2DQO")]
    pub wck2_dqo: u64,
    pub rtw: u64,
    pub wl: u64,
    #[serde(rename = "WCK2DQI")]
    pub wck2_dqi: u64,
    pub wr: u64,
    pub wtrs: u64,
    pub wtrl: u64,
    pub cke: u64,
    pub pd: u64,
    pub xp: u64,
    pub refi: u64,
    #[serde(rename = "REFIPB")]
    pub refi_pb: u64,
    pub rfc: u64,
    #[serde(rename = "RFCPB")]
    pub rfc_pb: u64,
    pub rrefd: u64,
    pub xs: u64,
    pub faw: u64,
    #[serde(rename = "_32AW")]
    pub aw32: u64,
    pub ppd: u64,
    pub lk: u64,
    pub trs: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Identified)]
#[identified("GDDR5X")]
#[serde(rename_all = "camelCase")]
pub struct MemSpecGddr5x {
    pub memory_id: String,
    #[serde(rename = "memarchitecturespec", with = "crate::serde::group")]
    pub architecture: MemArchitectureSpecGddr5x,
    #[serde(rename = "memtimingspec", with = "crate::serde::group")]
    pub timing: MemTimingSpecGddr5x,
}
