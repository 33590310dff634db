//! Overlay allowance entities.

use crate::domain::sixteenths;

/// The four fixed per-side overlay allowances offered to the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverlayPreset {
    /// 1/2" per side.
    Half,
    /// 5/8" per side.
    FiveEighths,
    /// 3/4" per side, the default for most face-frame cabinets.
    #[default]
    ThreeQuarters,
    /// 1" per side.
    Inch,
}

impl OverlayPreset {
    /// All presets in menu order.
    pub const ALL: [Self; 4] = [
        Self::Half,
        Self::FiveEighths,
        Self::ThreeQuarters,
        Self::Inch,
    ];

    /// Per-side allowance in sixteenths of an inch.
    #[must_use]
    pub const fn sixteenths(self) -> u8 {
        match self {
            Self::Half => 8,
            Self::FiveEighths => 10,
            Self::ThreeQuarters => 12,
            Self::Inch => 16,
        }
    }

    /// Menu label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Half => "1/2\" per side",
            Self::FiveEighths => "5/8\" per side",
            Self::ThreeQuarters => "3/4\" per side (default)",
            Self::Inch => "1\" per side",
        }
    }

    /// Looks up the preset matching a per-side sixteenths value.
    #[must_use]
    pub fn from_sixteenths(value: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.sixteenths() == value)
    }
}

/// The user's overlay selection: a fixed preset, or the remembered custom
/// value picked through the fraction grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayChoice {
    /// One of the fixed per-side allowances.
    Preset(OverlayPreset),
    /// A custom per-side allowance; the value itself lives in the calculator
    /// state so it survives switching back and forth through presets.
    Custom,
}

impl OverlayChoice {
    /// Resolves the effective per-side allowance in sixteenths.
    #[must_use]
    pub const fn per_side_sixteenths(self, custom_16ths: u8) -> u8 {
        match self {
            Self::Preset(preset) => preset.sixteenths(),
            Self::Custom => custom_16ths,
        }
    }

    /// Human-readable description of the selection.
    #[must_use]
    pub fn describe(self, custom_16ths: u8) -> String {
        match self {
            Self::Preset(preset) => preset.label().to_string(),
            Self::Custom => format!(
                "Custom: {}\" per side",
                sixteenths::format_fraction(custom_16ths)
            ),
        }
    }
}

impl Default for OverlayChoice {
    fn default() -> Self {
        Self::Preset(OverlayPreset::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(OverlayPreset::Half, 8)]
    #[test_case(OverlayPreset::FiveEighths, 10)]
    #[test_case(OverlayPreset::ThreeQuarters, 12)]
    #[test_case(OverlayPreset::Inch, 16)]
    fn test_preset_sixteenths(preset: OverlayPreset, expected: u8) {
        assert_eq!(preset.sixteenths(), expected);
    }

    #[test]
    fn test_preset_lookup() {
        assert_eq!(
            OverlayPreset::from_sixteenths(12),
            Some(OverlayPreset::ThreeQuarters)
        );
        assert_eq!(OverlayPreset::from_sixteenths(9), None);
    }

    #[test]
    fn test_effective_value() {
        let preset = OverlayChoice::Preset(OverlayPreset::FiveEighths);
        assert_eq!(preset.per_side_sixteenths(3), 10);
        assert_eq!(OverlayChoice::Custom.per_side_sixteenths(3), 3);
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            OverlayChoice::Preset(OverlayPreset::ThreeQuarters).describe(0),
            "3/4\" per side (default)"
        );
        assert_eq!(
            OverlayChoice::Custom.describe(10),
            "Custom: 5/8\" per side"
        );
    }

    #[test]
    fn test_default_is_three_quarters() {
        assert_eq!(
            OverlayChoice::default(),
            OverlayChoice::Preset(OverlayPreset::ThreeQuarters)
        );
    }
}
