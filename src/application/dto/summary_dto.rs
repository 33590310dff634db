//! Display-ready size summary DTOs.

/// Split-pair figures, present only when split doors are enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerDoorSummary {
    /// Formatted per-door width, e.g. `12 11/16"`.
    pub width: String,
    /// Formatted center gap, e.g. `1/8"`.
    pub center_gap: String,
}

/// Every formatted string the screen renders, derived in one place from the
/// current calculator state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeSummary {
    /// Opening width as entered.
    pub opening_width: String,
    /// Opening height as entered.
    pub opening_height: String,
    /// Description of the selected overlay allowance.
    pub overlay: String,
    /// Formatted finished width.
    pub finished_width: String,
    /// Formatted finished height.
    pub finished_height: String,
    /// Split-pair figures when split doors are enabled.
    pub per_door: Option<PerDoorSummary>,
}
