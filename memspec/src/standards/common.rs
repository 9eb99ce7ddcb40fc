use serde::{Deserialize, Serialize};

/// Bit-transition energies around read and write bursts.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PrePostamble {
    pub read_zeroes: f64,
    pub write_zeroes: f64,
    pub read_ones: f64,
    pub write_ones: f64,
    pub read_zeroes_to_ones: f64,
    pub write_zeroes_to_ones: f64,
    pub write_ones_to_zeroes: f64,
    pub read_ones_to_zeroes: f64,
    #[serde(rename = "readMinTccd")]
    pub read_min_tccd: u64,
    #[serde(rename = "writeMinTccd")]
    pub write_min_tccd: u64,
}

/// Transfers per clock on each bus.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DataRateSpec {
    pub ca_bus_rate: u64,
    pub dq_bus_rate: u64,
    pub dqs_bus_rate: u64,
}
