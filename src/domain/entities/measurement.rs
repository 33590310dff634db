//! Opening measurement entity.

use crate::domain::sixteenths;

/// Largest whole-inch value a measurement can hold. Digit entry beyond this
/// clamps rather than erroring.
pub const MAX_INCHES: u16 = 999;

/// A mixed-number measurement entered digit by digit on the keypad.
///
/// Holds a whole-inch count and a fractional sixteenths component. The
/// `has_fraction` flag distinguishes "no fraction entered" from an explicit
/// `0/16`. Every edit returns a new value; nothing mutates in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Measurement {
    inches: u16,
    fraction_16ths: u8,
    has_fraction: bool,
}

impl Measurement {
    /// Creates an empty measurement (0 inches, no fraction).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inches: 0,
            fraction_16ths: 0,
            has_fraction: false,
        }
    }

    /// Appends a decimal digit to the whole-inch component, clamping at
    /// [`MAX_INCHES`]. Digits above 9 are ignored; the fraction is untouched.
    #[must_use]
    pub const fn append_digit(self, digit: u8) -> Self {
        if digit > 9 {
            return self;
        }
        let appended = self.inches as u32 * 10 + digit as u32;
        let inches = if appended > MAX_INCHES as u32 {
            MAX_INCHES
        } else {
            appended as u16
        };
        Self { inches, ..self }
    }

    /// Replaces the fractional component, clamping to at most 15 sixteenths.
    #[must_use]
    pub const fn with_fraction(self, fraction_16ths: u8) -> Self {
        let fraction_16ths = if fraction_16ths > 15 {
            15
        } else {
            fraction_16ths
        };
        Self {
            fraction_16ths,
            has_fraction: true,
            ..self
        }
    }

    /// Removes the most recent piece of input: a set nonzero fraction first,
    /// otherwise the last whole-inch digit. A no-op on the empty measurement.
    #[must_use]
    pub const fn backspace(self) -> Self {
        if self.has_fraction && self.fraction_16ths != 0 {
            Self {
                fraction_16ths: 0,
                has_fraction: false,
                ..self
            }
        } else {
            Self {
                inches: self.inches / 10,
                ..self
            }
        }
    }

    /// Returns the whole-inch component.
    #[must_use]
    pub const fn inches(&self) -> u16 {
        self.inches
    }

    /// Returns the entered fraction in sixteenths, if one was entered.
    #[must_use]
    pub const fn fraction_16ths(&self) -> Option<u8> {
        if self.has_fraction {
            Some(self.fraction_16ths)
        } else {
            None
        }
    }

    /// Canonical value in sixteenths of an inch.
    #[must_use]
    pub const fn total_sixteenths(&self) -> u32 {
        let fraction = if self.has_fraction {
            self.fraction_16ths as u32
        } else {
            0
        };
        self.inches as u32 * 16 + fraction
    }
}

impl std::fmt::Display for Measurement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.has_fraction && self.fraction_16ths != 0 {
            let (n, d) = sixteenths::reduce(self.fraction_16ths);
            write!(f, "{} {}/{}\"", self.inches, n, d)
        } else {
            write!(f, "{}", self.inches)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn typed(digits: &[u8]) -> Measurement {
        digits
            .iter()
            .fold(Measurement::new(), |m, &d| m.append_digit(d))
    }

    #[test]
    fn test_digit_accumulation() {
        let m = typed(&[2, 4]);
        assert_eq!(m.inches(), 24);
        assert_eq!(m.total_sixteenths(), 384);
        assert_eq!(m.fraction_16ths(), None);
    }

    #[test]
    fn test_digit_clamp_at_max() {
        let m = typed(&[9, 9, 9, 9]);
        assert_eq!(m.inches(), MAX_INCHES);

        let m = typed(&[1, 2, 3, 4]);
        assert_eq!(m.inches(), MAX_INCHES);
    }

    #[test]
    fn test_out_of_range_digit_ignored() {
        let m = typed(&[3]).append_digit(10);
        assert_eq!(m.inches(), 3);
    }

    #[test]
    fn test_fraction_does_not_affect_inches() {
        let m = typed(&[3]).with_fraction(4);
        assert_eq!(m.inches(), 3);
        assert_eq!(m.fraction_16ths(), Some(4));
        assert_eq!(m.total_sixteenths(), 52);
    }

    #[test]
    fn test_fraction_clamped() {
        let m = Measurement::new().with_fraction(20);
        assert_eq!(m.fraction_16ths(), Some(15));
    }

    #[test]
    fn test_backspace_clears_fraction_first() {
        let m = typed(&[1, 2]).with_fraction(8).backspace();
        assert_eq!(m.fraction_16ths(), None);
        assert_eq!(m.inches(), 12);
    }

    #[test]
    fn test_backspace_drops_last_digit() {
        let m = typed(&[1, 2]).backspace();
        assert_eq!(m.inches(), 1);
        assert_eq!(m.backspace().inches(), 0);
    }

    #[test]
    fn test_backspace_noop_on_empty() {
        let m = Measurement::new().backspace();
        assert_eq!(m, Measurement::new());
    }

    #[test_case(&[3], Some(4), "3 1/4\"")]
    #[test_case(&[3], None, "3")]
    #[test_case(&[2, 4], Some(0), "24" ; "explicit zero fraction hidden")]
    #[test_case(&[], None, "0")]
    fn test_display(digits: &[u8], fraction: Option<u8>, expected: &str) {
        let mut m = typed(digits);
        if let Some(f) = fraction {
            m = m.with_fraction(f);
        }
        assert_eq!(m.to_string(), expected);
    }
}
