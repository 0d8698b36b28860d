//! Bounded escape-time iteration of `z <- z^2 + c`.

use crate::fixed::{self, Fixed16};
use crate::pixel::Complex;

/// Iteration cap; a point that survives this many rounds counts as in-set.
pub const MAX_ITERATIONS: u32 = 16;

/// |z|^2 escape threshold, 4.0 in 16.10 fixed point.
pub const ESCAPE_THRESHOLD: i32 = 4 << fixed::FRACTION_BITS;

/// Number of iterations completed before |z|^2 exceeds the threshold, or
/// [`MAX_ITERATIONS`] if it never does.
///
/// The iterate starts at `c` itself, one round ahead of the textbook
/// `z = 0` start. All feedback arithmetic wraps within 16 bits; only the
/// escape comparison reinterprets the squared parts as signed values, so a
/// square whose magnitude wraps past `0x8000` reads as negative and does
/// not trigger an escape.
pub fn escape_count(c: Complex) -> u32 {
    let mut zr: Fixed16 = c.real;
    let mut zi: Fixed16 = c.imaginary;

    for iteration in 0..MAX_ITERATIONS {
        let zr2 = fixed::mul_shift10(zr, zr);
        let zi2 = fixed::mul_shift10(zi, zi);

        if fixed::to_signed(zr2) + fixed::to_signed(zi2) > ESCAPE_THRESHOLD {
            return iteration;
        }

        let tr = zr2.wrapping_sub(zi2);
        let ti = fixed::mul_shift10(zr, zi) << 1;

        zr = tr.wrapping_add(c.real);
        zi = ti.wrapping_add(c.imaginary);
    }

    MAX_ITERATIONS
}
