//! Records for each supported memory standard.
//!
//! Every record has a `memoryId`, a `memarchitecturespec` and a `memtimingspec`. Power, impedance
//! and bank-wise groups depend on the standard.

mod common;
pub use common::{DataRateSpec, PrePostamble};

pub mod ddr3;
pub mod ddr4;
pub mod ddr5;
pub mod gddr5;
pub mod gddr5x;
pub mod gddr6;
pub mod hbm2;
pub mod hbm3;
pub mod lpddr4;
pub mod lpddr5;
pub mod stt_mram;
pub mod wide_io;
pub mod wide_io2;

pub use ddr3::MemSpecDdr3;
pub use ddr4::MemSpecDdr4;
pub use ddr5::MemSpecDdr5;
pub use gddr5::MemSpecGddr5;
pub use gddr5x::MemSpecGddr5x;
pub use gddr6::MemSpecGddr6;
pub use hbm2::MemSpecHbm2;
pub use hbm3::MemSpecHbm3;
pub use lpddr4::MemSpecLpddr4;
pub use lpddr5::MemSpecLpddr5;
pub use stt_mram::MemSpecSttMram;
pub use wide_io::MemSpecWideIo;
pub use wide_io2::MemSpecWideIo2;
