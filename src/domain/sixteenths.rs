//! Formatting helpers for quantities measured in sixteenths of an inch.
//!
//! Every derived size in the engine is an integer count of sixteenths
//! ("total16"). These helpers reduce and render such counts as the mixed
//! inch strings shown on screen.

/// Sixteenths in one inch.
pub const SIXTEENTHS_PER_INCH: u32 = 16;

/// Greatest common divisor. `gcd(0, x)` is `x`; `gcd(0, 0)` is defined as 1
/// so fraction reduction never divides by zero.
#[must_use]
pub const fn gcd(a: u32, b: u32) -> u32 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    if a == 0 { 1 } else { a }
}

/// Reduces a sixteenths numerator to lowest terms.
///
/// `reduce(8)` is `(1, 2)`, `reduce(3)` is `(3, 16)`, `reduce(0)` is `(0, 1)`.
#[must_use]
pub const fn reduce(f16: u8) -> (u32, u32) {
    let n = f16 as u32;
    let d = gcd(n, SIXTEENTHS_PER_INCH);
    (n / d, SIXTEENTHS_PER_INCH / d)
}

/// Renders a bare fraction value: `8` becomes `"1/2"`, `0` becomes `"0"`.
#[must_use]
pub fn format_fraction(f16: u8) -> String {
    if f16 == 0 {
        return "0".to_string();
    }
    let (n, d) = reduce(f16);
    format!("{n}/{d}")
}

/// Renders a total sixteenths count as a mixed inch string with an inch
/// mark: `408` becomes `"25 1/2\""`, `416` becomes `"26\""`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn format_total(total16: u32) -> String {
    let inches = total16 / SIXTEENTHS_PER_INCH;
    let frac = (total16 % SIXTEENTHS_PER_INCH) as u8;
    if frac == 0 {
        format!("{inches}\"")
    } else {
        let (n, d) = reduce(frac);
        format!("{inches} {n}/{d}\"")
    }
}
