//! Split-door configuration entity.

/// Largest selectable center gap in sixteenths.
const MAX_GAP_16THS: u8 = 15;

/// Whether the opening gets a pair of doors, and the gap left between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitConfig {
    /// Split the opening into two doors.
    pub enabled: bool,
    center_gap_16ths: u8,
}

impl SplitConfig {
    /// Creates a split configuration, clamping the gap to 15 sixteenths.
    #[must_use]
    pub const fn new(enabled: bool, center_gap_16ths: u8) -> Self {
        let center_gap_16ths = if center_gap_16ths > MAX_GAP_16THS {
            MAX_GAP_16THS
        } else {
            center_gap_16ths
        };
        Self {
            enabled,
            center_gap_16ths,
        }
    }

    /// Center gap in sixteenths of an inch.
    #[must_use]
    pub const fn center_gap_16ths(&self) -> u8 {
        self.center_gap_16ths
    }

    /// Flips the split-doors toggle.
    #[must_use]
    pub const fn toggled(self) -> Self {
        Self {
            enabled: !self.enabled,
            ..self
        }
    }

    /// Replaces the center gap, clamping to 15 sixteenths.
    #[must_use]
    pub const fn with_gap(self, center_gap_16ths: u8) -> Self {
        Self::new(self.enabled, center_gap_16ths)
    }
}

impl Default for SplitConfig {
    /// Split doors on, 1/8" center gap.
    fn default() -> Self {
        Self::new(true, 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let split = SplitConfig::default();
        assert!(split.enabled);
        assert_eq!(split.center_gap_16ths(), 2);
    }

    #[test]
    fn test_gap_clamped() {
        assert_eq!(SplitConfig::new(true, 40).center_gap_16ths(), 15);
        assert_eq!(SplitConfig::default().with_gap(16).center_gap_16ths(), 15);
    }

    #[test]
    fn test_toggle() {
        let split = SplitConfig::default().toggled();
        assert!(!split.enabled);
        assert!(split.toggled().enabled);
    }

    #[test]
    fn test_zero_gap_accepted() {
        // The fraction grid never offers 0, but the engine allows it.
        assert_eq!(SplitConfig::new(true, 0).center_gap_16ths(), 0);
    }
}
