use serde::{Deserialize, Serialize};

use super::{DataRateSpec, PrePostamble};
use crate::Identified;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemArchitectureSpecDdr5 {
    pub nbr_of_channels: u64,
    pub nbr_of_devices: u64,
    pub nbr_of_ranks: u64,
    #[serde(rename = "nbrOfDIMMRanks")]
    pub nbr_of_dimm_ranks: u64,
    pub nbr_of_physical_ranks: u64,
    pub nbr_of_logical_ranks: u64,
    pub nbr_of_banks: u64,
    pub nbr_of_bank_groups: u64,
    pub nbr_of_rows: u64,
    pub nbr_of_columns: u64,
    pub burst_length: u64,
    pub data_rate: u64,
    pub width: u64,
    #[serde(default, with = "crate::serde::optional")]
    pub max_burst_length: Option<u64>,
    pub cmd_mode: u64,
    pub ref_mode: u64,
    #[serde(rename = "RAAIMT")]
    pub raa_imt: u64,
    #[serde(rename = "RAAMMT")]
    pub raa_mmt: u64,
    #[serde(rename = "RAADEC")]
    pub raa_dec: u64,
}

/// `_slr`, `_dlr` and `_dpr` are same logical rank, different logical rank and different
/// physical rank.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct MemTimingSpecDdr5 {
    #[serde(rename = "tCK")]
    pub tck: f64,
    pub ras: u64,
    pub rcd: u64,
    pub rtp: u64,
    pub wl: u64,
    pub wr: u64,
    pub rp: u64,
    #[serde(rename = "RFCsb")]
    pub rfc_sb: u64,
    pub rfc1: u64,
    pub rfc2: u64,
    pub ppd: u64,
    pub rl: u64,
    pub rpre: u64,
    pub rpst: u64,
    pub rddqs: u64,
    pub wpre: u64,
    pub wpst: u64,
    #[serde(rename = "CCD_L_slr")]
    pub ccd_l_slr: u64,
    #[serde(rename = "CCD_L_WR_slr")]
    pub ccd_l_wr_slr: u64,
    #[serde(rename = "CCD_L_WR2_slr")]
    pub ccd_l_wr2_slr: u64,
    #[serde(rename = "CCD_M_slr")]
    pub ccd_m_slr: u64,
    #[serde(rename = "CCD_M_WR_slr")]
    pub ccd_m_wr_slr: u64,
    #[serde(rename = "CCD_S_slr")]
    pub ccd_s_slr: u64,
    #[serde(rename = "CCD_S_WR_slr")]
    pub ccd_s_wr_slr: u64,
    #[serde(rename = "CCD_dlr")]
    pub ccd_dlr: u64,
    #[serde(rename = "CCD_WR_dlr")]
    pub ccd_wr_dlr: u64,
    #[serde(rename = "CCD_WR_dpr")]
    pub ccd_wr_dpr: u64,
    #[serde(rename = "RRD_L_slr")]
    pub rrd_l_slr: u64,
    #[serde(rename = "RRD_S_slr")]
    pub rrd_s_slr: u64,
    #[serde(rename = "RRD_dlr")]
    pub rrd_dlr: u64,
    #[serde(rename = "FAW_slr")]
    pub faw_slr: u64,
    #[serde(rename = "FAW_dlr")]
    pub faw_dlr: u64,
    pub wtr_l: u64,
    pub wtr_m: u64,
    pub wtr_s: u64,
    #[serde(rename = "RFC1_slr")]
    pub rfc1_slr: u64,
    #[serde(rename = "RFC2_slr")]
    pub rfc2_slr: u64,
    #[serde(rename = "RFC1_dlr")]
    pub rfc1_dlr: u64,
    #[serde(rename = "RFC2_dlr")]
    pub rfc2_dlr: u64,
    #[serde(rename = "RFC1_dpr")]
    pub rfc1_dpr: u64,
    #[serde(rename = "RFC2_dpr")]
    pub rfc2_dpr: u64,
    #[serde(rename = "RFCsb_slr")]
    pub rfc_sb_slr: u64,
    #[serde(rename = "RFCsb_dlr")]
    pub rfc_sb_dlr: u64,
    pub refi1: u64,
    pub refi2: u64,
    #[serde(rename = "REFISB")]
    pub refi_sb: u64,
    #[serde(rename = "REFSBRD_slr")]
    pub ref_sb_rd_slr: u64,
    #[serde(rename = "REFSBRD_dlr")]
    pub ref_sb_rd_dlr: u64,
    pub rtrs: u64,
    pub cpded: u64,
    pub pd: u64,
    pub xp: u64,
    pub actpden: u64,
    pub prpden: u64,
    pub refpden: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemPowerSpecDdr5 {
    pub vdd: f64,
    pub idd0: f64,
    pub idd2n: f64,
    pub idd3n: f64,
    pub idd4r: f64,
    pub idd4w: f64,
    pub idd5c: f64,
    pub idd6n: f64,
    pub idd2p: f64,
    pub idd3p: f64,
    pub vpp: f64,
    pub ipp0: f64,
    pub ipp2n: f64,
    pub ipp3n: f64,
    pub ipp4r: f64,
    pub ipp4w: f64,
    pub ipp5c: f64,
    pub ipp6n: f64,
    pub ipp2p: f64,
    pub ipp3p: f64,
    pub idd5b: f64,
    pub idd5f: f64,
    pub ipp5b: f64,
    pub ipp5f: f64,
    pub vddq: f64,
    #[serde(default, with = "crate::serde::optional")]
    pub i_beta: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankWiseSpecDdr5 {
    #[serde(default, with = "crate::serde::optional")]
    pub fact_rho: Option<f64>,
}

/// Capacitance and equivalent resistance per signal group.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MemImpedanceSpecDdr5 {
    #[serde(rename = "C_total_cb")]
    pub c_total_cb: f64,
    #[serde(rename = "C_total_ck")]
    pub c_total_ck: f64,
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
    #[serde(rename = "R_eq_dqs")]
    pub r_eq_dqs: f64,
    #[serde(rename = "R_eq_rb")]
    pub r_eq_rb: f64,
    #[serde(rename = "R_eq_wb")]
    pub r_eq_wb: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Identified)]
#[identified("DDR5")]
#[serde(rename_all = "camelCase")]
pub struct MemSpecDdr5 {
    pub memory_id: String,
    #[serde(rename = "RefreshMode")]
    pub refresh_mode: u64,
    #[serde(rename = "memarchitecturespec", with = "crate::serde::group")]
    pub architecture: MemArchitectureSpecDdr5,
    #[serde(rename = "mempowerspec", with = "crate::serde::group")]
    pub power: MemPowerSpecDdr5,
    #[serde(rename = "memtimingspec", with = "crate::serde::group")]
    pub timing: MemTimingSpecDdr5,
    #[serde(rename = "bankwisespec", default, with = "crate::serde::group::optional")]
    pub bank_wise: Option<BankWiseSpecDdr5>,
    #[serde(rename = "memimpedancespec", with = "crate::serde::group")]
    pub impedance: MemImpedanceSpecDdr5,
    #[serde(rename = "prepostamble", default, with = "crate::serde::group::optional")]
    pub pre_postamble: Option<PrePostamble>,
    #[serde(rename = "dataratespec", default, with = "crate::serde::group::optional")]
    pub data_rate: Option<DataRateSpec>,
}
