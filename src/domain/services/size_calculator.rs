//! Finished-size and per-door arithmetic.

use crate::domain::entities::Measurement;

/// Finished door size derived from an opening plus overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinishedSize {
    /// Finished width in sixteenths.
    pub width_16ths: u32,
    /// Finished height in sixteenths.
    pub height_16ths: u32,
}

/// Per-door width for a split pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PerDoorSize {
    /// Width of each door in sixteenths.
    pub width_16ths: u32,
    /// The center gap that was subtracted.
    pub center_gap_16ths: u8,
}

/// Pure size arithmetic over measurements in sixteenths.
///
/// All quantities are already quantized to sixteenths, so no rounding ever
/// takes place; the formula shown on screen mentions "nearest 1/16" but the
/// arithmetic is exact integer math.
pub struct SizeCalculator;

impl SizeCalculator {
    /// Computes the finished size: each axis grows by twice the per-side
    /// overlay (width: left+right, height: top+bottom).
    #[must_use]
    pub const fn finished_size(
        width: Measurement,
        height: Measurement,
        per_side_overlay_16ths: u8,
    ) -> FinishedSize {
        let both_sides = 2 * per_side_overlay_16ths as u32;
        FinishedSize {
            width_16ths: width.total_sixteenths() + both_sides,
            height_16ths: height.total_sixteenths() + both_sides,
        }
    }

    /// Computes the width of each door in a split pair: the finished width
    /// less the center gap, halved. Division truncates; an odd leftover
    /// sixteenth is dropped.
    #[must_use]
    pub const fn per_door(finished: &FinishedSize, center_gap_16ths: u8) -> PerDoorSize {
        let available = finished.width_16ths.saturating_sub(center_gap_16ths as u32);
        PerDoorSize {
            width_16ths: available / 2,
            center_gap_16ths,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measurement(inches: u16) -> Measurement {
        let mut m = Measurement::new();
        for c in inches.to_string().bytes() {
            m = m.append_digit(c - b'0');
        }
        m
    }

    #[test]
    fn test_finished_size_standard_opening() {
        // 24" x 36" opening with 3/4" per side.
        let finished = SizeCalculator::finished_size(measurement(24), measurement(36), 12);
        assert_eq!(finished.width_16ths, 408);
        assert_eq!(finished.height_16ths, 600);
    }

    #[test]
    fn test_finished_size_with_fractions() {
        let width = measurement(24).with_fraction(8);
        let finished = SizeCalculator::finished_size(width, measurement(30), 8);
        assert_eq!(finished.width_16ths, 24 * 16 + 8 + 16);
        assert_eq!(finished.height_16ths, 30 * 16 + 16);
    }

    #[test]
    fn test_per_door_truncates_odd_sixteenth() {
        let finished = FinishedSize {
            width_16ths: 408,
            height_16ths: 600,
        };
        let per_door = SizeCalculator::per_door(&finished, 2);
        assert_eq!(per_door.width_16ths, 203);
        assert_eq!(per_door.center_gap_16ths, 2);

        // 407 available halves to 203 as well; the odd sixteenth is dropped.
        let per_door = SizeCalculator::per_door(&finished, 1);
        assert_eq!(per_door.width_16ths, 203);
    }

    #[test]
    fn test_per_door_gap_wider_than_door() {
        let finished = FinishedSize {
            width_16ths: 4,
            height_16ths: 600,
        };
        let per_door = SizeCalculator::per_door(&finished, 10);
        assert_eq!(per_door.width_16ths, 0);
    }
}
