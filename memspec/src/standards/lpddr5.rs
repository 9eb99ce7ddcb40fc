use serde::{Deserialize, Serialize};

use crate::Identified;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemArchitectureSpecLpddr5 {
    pub nbr_of_devices: u64,
    pub nbr_of_channels: u64,
    pub nbr_of_ranks: u64,
    pub nbr_of_banks: u64,
    pub nbr_of_bank_groups: u64,
    pub nbr_of_rows: u64,
    pub nbr_of_columns: u64,
    pub burst_length: u64,
    pub data_rate: u64,
    pub width: u64,
    pub per2_bank_offset: u64,
    #[serde(rename = "WCKalwaysOn")]
    pub wck_always_on: bool,
    #[serde(default, with = "crate::serde::optional")]
    pub max_burst_length: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MemImpedanceSpecLpddr5 {
    #[serde(rename = "C_total_cb")]
    pub c_total_cb: f64,
    #[serde(rename = "C_total_ck")]
    pub c_total_ck: f64,
    #[serde(rename = "C_total_wck")]
    pub c_total_wck: f64,
    #[serde(rename = "C_total_dqs")]
    pub c_total_dqs: f64,
    #[serde(rename = "C_total_rb")]
    pub c_total_rb: f64,
    #[serde(rename = "C_total_wb")]
    pub c_total_wb: f64,
    #[serde(rename = "R_eq_cb")]
    pub r_eq_cb: f64,
    #[serde(rename = "R_eq_ck")]
    pub r_eq_ck: f64,
    #[serde(rename = "R_eq_wck")]
    pub r_eq_wck: f64,
    #[serde(rename = "R_eq_dqs")]
    pub r_eq_dqs: f64,
    #[serde(rename = "R_eq_rb")]
    pub r_eq_rb: f64,
    #[serde(rename = "R_eq_wb")]
    pub r_eq_wb: f64,
}

/// `BL_n_*_16` and `BL_n_*_32` are burst durations for 16 and 32 beat bursts.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct MemTimingSpecLpddr5 {
    #[serde(rename = "tCK")]
    pub tck: f64,
    pub refi: u64,
    #[serde(rename = "REFIpb")]
    pub refi_pb: u64,
    #[serde(rename = "RFCab")]
    pub rfc_ab: u64,
    #[serde(rename = "RFCpb")]
    pub rfc_pb: u64,
    pub ras: u64,
    #[serde(rename = "RPab")]
    pub rp_ab: u64,
    #[serde(rename = "RPpb")]
    pub rp_pb: u64,
    #[serde(rename = "RCpb")]
    pub rc_pb: u64,
    #[serde(rename = "RCab")]
    pub rc_ab: u64,
    pub ppd: u64,
    pub rcd: u64,
    pub rcd_l: u64,
    pub rcd_s: u64,
    pub faw: u64,
    pub rrd: u64,
    pub rl: u64,
    pub rbtp: u64,
    pub wl: u64,
    pub wr: u64,
    pub rtrs: u64,
    #[serde(rename = "BL_n_min_16")]
    pub bl_n_min_16: u64,
    #[serde(rename = "BL_n_max_16")]
    pub bl_n_max_16: u64,
    #[serde(rename = "BL_n_L_16")]
    pub bl_n_l_16: u64,
    #[serde(rename = "BL_n_S_16")]
    pub bl_n_s_16: u64,
    #[serde(rename = "BL_n_min_32")]
    pub bl_n_min_32: u64,
    #[serde(rename = "BL_n_max_32")]
    pub bl_n_max_32: u64,
    #[serde(rename = "BL_n_L_32")]
    pub bl_n_l_32: u64,
    #[serde(rename = "BL_n_S_32")]
    pub bl_n_s_32: u64,
    pub wtr_l: u64,
    pub wtr_s: u64,
    #[serde(rename = "WCK2DQO")]
    pub wck2_dqo: u64,
    #[serde(rename = "WCKtoCK")]
    pub wck_to_ck: u64,
    #[serde(rename = "pbR2act")]
    pub pb_r2_act: u64,
    #[serde(rename = "pbR2pbR")]
    pub pb_r2_pb_r: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankWiseSpecLpddr5 {
    #[serde(default, with = "crate::serde::optional")]
    pub fact_rho: Option<f64>,
}

/// Currents for the VDD1, VDD2H and VDD2L rails.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemPowerSpecLpddr5 {
    pub vdd1: f64,
    pub idd01: f64,
    pub idd2n1: f64,
    pub idd3n1: f64,
    pub idd4r1: f64,
    pub idd4w1: f64,
    pub idd51: f64,
    pub idd5pb1: f64,
    pub idd61: f64,
    pub idd6ds1: f64,
    pub idd2p1: f64,
    pub idd3p1: f64,
    pub vdd2h: f64,
    pub idd02h: f64,
    pub idd2n2h: f64,
    pub idd3n2h: f64,
    pub idd4r2h: f64,
    pub idd4w2h: f64,
    pub idd52h: f64,
    pub idd5pb2h: f64,
    pub idd62h: f64,
    pub idd6ds2h: f64,
    pub idd2p2h: f64,
    pub idd3p2h: f64,
    pub vdd2l: f64,
    pub idd02l: f64,
    pub idd2n2l: f64,
    pub idd3n2l: f64,
    pub idd4r2l: f64,
    pub idd4w2l: f64,
    pub idd52l: f64,
    pub idd5pb2l: f64,
    pub idd62l: f64,
    pub idd6ds2l: f64,
    pub idd2p2l: f64,
    pub idd3p2l: f64,
    pub vddq: f64,
    #[serde(rename = "iBeta_vdd1", default, with = "crate::serde::optional")]
    pub i_beta_vdd1: Option<f64>,
    #[serde(rename = "iBeta_vdd2h", default, with = "crate::serde::optional")]
    pub i_beta_vdd2h: Option<f64>,
    #[serde(rename = "iBeta_vdd2l", default, with = "crate::serde::optional")]
    pub i_beta_vdd2l: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Identified)]
#[identified("LPDDR5")]
#[serde(rename_all = "camelCase")]
pub struct MemSpecLpddr5 {
    pub memory_id: String,
    #[serde(rename = "memarchitecturespec", with = "crate::serde::group")]
    pub architecture: MemArchitectureSpecLpddr5,
    #[serde(rename = "mempowerspec", with = "crate::serde::group")]
    pub power: MemPowerSpecLpddr5,
    #[serde(rename = "memtimingspec", with = "crate::serde::group")]
    pub timing: MemTimingSpecLpddr5,
    #[serde(rename = "bankwisespec", default, with = "crate::serde::group::optional")]
    pub bank_wise: Option<BankWiseSpecLpddr5>,
    #[serde(rename = "memimpedancespec", with = "crate::serde::group")]
    pub impedance: MemImpedanceSpecLpddr5,
}
