use serde::{Deserialize, Serialize};

crate::document_enum! {
    /// Bus level while no data is transferred.
    pub enum TogglingRateIdlePattern {
        L => "L",
        H => "H",
        Z => "Z",
    }
}

/// Switching activity of the data bus, used instead of real data patterns.
///
/// Rates and duty cycles are fractions between 0 and 1.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleRateDefinition {
    pub toggling_rate_read: f64,
    pub toggling_rate_write: f64,
    pub duty_cycle_read: f64,
    pub duty_cycle_write: f64,
    pub idle_pattern_read: TogglingRateIdlePattern,
    pub idle_pattern_write: TogglingRateIdlePattern,
}
