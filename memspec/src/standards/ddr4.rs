use serde::{Deserialize, Serialize};

use super::{DataRateSpec, PrePostamble};
use crate::Identified;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemArchitectureSpecDdr4 {
    pub nbr_of_channels: u64,
    pub nbr_of_devices: u64,
    pub nbr_of_ranks: u64,
    pub nbr_of_banks: u64,
    pub nbr_of_bank_groups: u64,
    pub nbr_of_rows: u64,
    pub nbr_of_columns: u64,
    pub burst_length: u64,
    pub data_rate: u64,
    pub width: u64,
    #[serde(default, with = "crate::serde::optional")]
    pub max_burst_length: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct MemTimingSpecDdr4 {
    #[serde(rename = "tCK")]
    pub tck: f64,
    pub cke: u64,
    pub ckesr: u64,
    pub ras: u64,
    pub rc: u64,
    pub rcd: u64,
    pub rl: u64,
    pub rpre: u64,
    pub rtp: u64,
    pub wl: u64,
    pub wpre: u64,
    pub wr: u64,
    pub xp: u64,
    pub xs: u64,
    pub refm: u64,
    pub refi: u64,
    pub rfc: u64,
    pub rfc1: u64,
    pub rfc2: u64,
    pub rfc4: u64,
    pub rp: u64,
    pub dqsck: u64,
    pub ccd_s: u64,
    pub ccd_l: u64,
    pub faw: u64,
    pub rrd_s: u64,
    pub rrd_l: u64,
    pub wtr_s: u64,
    pub wtr_l: u64,
    pub xpdll: u64,
    pub xsdll: u64,
    pub al: u64,
    pub actpden: u64,
    pub prpden: u64,
    pub refpden: u64,
    pub rtrs: u64,
}

/// Currents in amperes, voltages in volts.
///
/// Only one of the `5b`, `5f2` and `5f4` refresh pairs is used, depending on
/// [MemSpecDdr4::refresh_mode] (1, 2, anything else).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemPowerSpecDdr4 {
    pub vdd: f64,
    pub idd0: f64,
    pub idd2n: f64,
    pub idd3n: f64,
    pub idd4r: f64,
    pub idd4w: f64,
    pub idd6n: f64,
    pub idd2p: f64,
    pub idd3p: f64,
    pub vpp: f64,
    pub ipp0: f64,
    pub ipp2n: f64,
    pub ipp3n: f64,
    pub ipp4r: f64,
    pub ipp4w: f64,
    pub ipp6: f64,
    pub ipp2p: f64,
    pub ipp3p: f64,
    pub idd5_b: f64,
    pub ipp5_b: f64,
    pub idd5_f2: f64,
    pub ipp5_f2: f64,
    pub idd5_f4: f64,
    pub ipp5_f4: f64,
    #[serde(default, with = "crate::serde::optional")]
    pub i_beta: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankWiseSpecDdr4 {
    pub fact_rho: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Identified)]
#[identified("DDR4")]
#[serde(rename_all = "camelCase")]
pub struct MemSpecDdr4 {
    pub memory_id: String,
    #[serde(rename = "RefreshMode")]
    pub refresh_mode: u64,
    #[serde(rename = "memarchitecturespec", with = "crate::serde::group")]
    pub architecture: MemArchitectureSpecDdr4,
    #[serde(rename = "mempowerspec", with = "crate::serde::group")]
    pub power: MemPowerSpecDdr4,
    #[serde(rename = "memtimingspec", with = "crate::serde::group")]
    pub timing: MemTimingSpecDdr4,
    #[serde(rename = "bankwisespec", default, with = "crate::serde::group::optional")]
    pub bank_wise: Option<BankWiseSpecDdr4>,
    #[serde(rename = "prepostamble", default, with = "crate::serde::group::optional")]
    pub pre_postamble: Option<PrePostamble>,
    #[serde(rename = "dataratespec", default, with = "crate::serde::group::optional")]
    pub data_rate: Option<DataRateSpec>,
}

/// Refresh mode 1, everything else empty.
impl Default for MemSpecDdr4 {
    fn default() -> Self {
        Self {
            memory_id: String::new(),
            refresh_mode: 1,
            architecture: Default::default(),
            power: Default::default(),
            timing: Default::default(),
            bank_wise: None,
            pre_postamble: None,
            data_rate: None,
        }
    }
}
