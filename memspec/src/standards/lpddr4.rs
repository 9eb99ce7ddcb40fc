use serde::{Deserialize, Serialize};

use crate::Identified;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemArchitectureSpecLpddr4 {
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
pub struct MemImpedanceSpecLpddr4 {
    #[serde(rename = "C_total_ck")]
    pub c_total_ck: f64,
    #[serde(rename = "C_total_cb")]
    pub c_total_cb: f64,
    #[serde(rename = "C_total_rb")]
    pub c_total_rb: f64,
    #[serde(rename = "C_total_wb")]
    pub c_total_wb: f64,
    #[serde(rename = "C_total_dqs")]
    pub c_total_dqs: f64,
    #[serde(rename = "R_eq_ck")]
    pub r_eq_ck: f64,
    #[serde(rename = "R_eq_cb")]
    pub r_eq_cb: f64,
    #[serde(rename = "R_eq_rb")]
    pub r_eq_rb: f64,
    #[serde(rename = "R_eq_wb")]
    pub r_eq_wb: f64,
    #[serde(rename = "R_eq_dqs")]
    pub r_eq_dqs: f64,
}

/// Timings in clock cycles, except `tCK` in nanoseconds. `pb` is per bank, `ab` all banks.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct MemTimingSpecLpddr4 {
    #[serde(rename = "tCK")]
    pub tck: f64,
    pub cke: u64,
    pub escke: u64,
    pub cmdcke: u64,
    pub ras: u64,
    pub rcd: u64,
    pub rl: u64,
    pub refi: u64,
    #[serde(rename = "REFIpb")]
    pub refi_pb: u64,
    #[serde(rename = "RFCpb")]
    pub rfc_pb: u64,
    #[serde(rename = "RFCab")]
    pub rfc_ab: u64,
    #[serde(rename = "RPpb")]
    pub rp_pb: u64,
    #[serde(rename = "RPab")]
    pub rp_ab: u64,
    #[serde(rename = "RCpb")]
    pub rc_pb: u64,
    #[serde(rename = "RCab")]
    pub rc_ab: u64,
    pub ppd: u64,
    pub faw: u64,
    pub rrd: u64,
    pub ccd: u64,
    pub ccdmw: u64,
    pub rpst: u64,
    pub dqsck: u64,
    pub rtp: u64,
    pub wl: u64,
    pub dqss: u64,
    #[serde(rename = "DQS2DQ")]
    pub dqs2_dq: u64,
    pub wr: u64,
    pub wpre: u64,
    pub wtr: u64,
    pub xp: u64,
    pub sr: u64,
    pub xsr: u64,
    pub rtrs: u64,
}

crate::document_enum! {
    /// Partial array self-refresh segment mask, written as its number.
    pub enum PasrMode {
        Pasr0 => 0u64,
        Pasr1 => 1u64,
        Pasr2 => 2u64,
        Pasr3 => 3u64,
        Pasr4 => 4u64,
        Pasr5 => 5u64,
        Pasr6 => 6u64,
        Pasr7 => 7u64,
    }
}

/// Bank-wise power factors and partial array self-refresh.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankWiseSpecLpddr4 {
    #[serde(default, with = "crate::serde::optional")]
    pub fact_rho: Option<f64>,
    #[serde(default, with = "crate::serde::optional")]
    pub fact_sigma: Option<f64>,
    #[serde(default, with = "crate::serde::optional")]
    pub pasr_mode: Option<PasrMode>,
    #[serde(rename = "hasPASR", default, with = "crate::serde::optional")]
    pub has_pasr: Option<bool>,
}

/// Currents per supply rail, suffixed `1` for VDD1 and `2` for VDD2.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemPowerSpecLpddr4 {
    pub vdd1: f64,
    pub idd01: f64,
    pub idd2n1: f64,
    pub idd3n1: f64,
    pub idd4r1: f64,
    pub idd4w1: f64,
    pub idd51: f64,
    pub idd5pb1: f64,
    pub idd61: f64,
    pub idd2p1: f64,
    pub idd3p1: f64,
    pub vdd2: f64,
    pub idd02: f64,
    pub idd2n2: f64,
    pub idd3n2: f64,
    pub idd4r2: f64,
    pub idd4w2: f64,
    pub idd52: f64,
    pub idd5pb2: f64,
    pub idd62: f64,
    pub idd2p2: f64,
    pub idd3p2: f64,
    pub vddq: f64,
    #[serde(rename = "iBeta_vdd1", default, with = "crate::serde::optional")]
    pub i_beta_vdd1: Option<f64>,
    #[serde(rename = "iBeta_vdd2", default, with = "crate::serde::optional")]
    pub i_beta_vdd2: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Identified)]
#[identified("LPDDR4")]
#[serde(rename_all = "camelCase")]
pub struct MemSpecLpddr4 {
    pub memory_id: String,
    #[serde(rename = "memarchitecturespec", with = "crate::serde::group")]
    pub architecture: MemArchitectureSpecLpddr4,
    #[serde(rename = "mempowerspec", with = "crate::serde::group")]
    pub power: MemPowerSpecLpddr4,
    #[serde(rename = "memtimingspec", with = "crate::serde::group")]
    pub timing: MemTimingSpecLpddr4,
    #[serde(rename = "memimpedancespec", with = "crate::serde::group")]
    pub impedance: MemImpedanceSpecLpddr4,
    #[serde(rename = "bankwisespec", default, with = "crate::serde::group::optional")]
    pub bank_wise: Option<BankWiseSpecLpddr4>,
}
