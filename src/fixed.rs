/*!
Signed 16.10 fixed-point arithmetic.

A [`Fixed16`] is a 16-bit two's-complement pattern standing for a real number
scaled by 2^10: `0x0400` is 1.0, `0xfc00` is -1.0, and the representable
range is roughly -32.0..32.0. Values are carried around as their unsigned
bit patterns; [`to_signed`] reinterprets a pattern when a signed comparison
is needed.
*/

/// A 16-bit two's-complement pattern with 10 fractional bits.
pub type Fixed16 = u16;

pub const FRACTION_BITS: u32 = 10;

/// 1.0 in 16.10 fixed point.
pub const ONE: Fixed16 = 1 << FRACTION_BITS;

/// Two's-complement negation within 16 bits.
///
/// `0x0000` and `0x8000` are their own negations.
pub fn negate(value: Fixed16) -> Fixed16 {
    (value ^ 0xffff).wrapping_add(1)
}

/// Reinterpret a 16-bit pattern as a signed value.
pub fn to_signed(value: Fixed16) -> i32 {
    value as i16 as i32
}

/**
Fixed-point multiply: the 16.10 product of `a` and `b`, i.e. `(a * b) >> 10`
on the underlying signed values.

This reproduces a legacy shift-and-add instruction sequence bit for bit
rather than using a native multiply. Each operand's sign is stripped up
front by 16-bit two's-complement negation (so `0x8000` participates as
magnitude 32768), the magnitudes are multiplied by iterated shift-and-add,
the accumulator is shifted down by 10 and masked to 16 bits, and the result
is negated again if exactly one operand was negative.

Because the negation happens *after* the downshift, the quotient truncates
toward zero, not toward negative infinity: `mul_shift10(0xffff, 0x0001)`
(-1/1024 scaled) is `0x0000`, where an arithmetic shift of the signed
product would give `0xffff`. Callers that depend on behaviour near the
16-bit boundary rely on exactly these masking points.
*/
pub fn mul_shift10(a: Fixed16, b: Fixed16) -> Fixed16 {
    let mut sign_flips = 0u32;

    let magnitude = |value: Fixed16, sign_flips: &mut u32| -> u32 {
        if value & 0x8000 != 0 {
            *sign_flips += 1;
            negate(value) as u32
        } else {
            value as u32
        }
    };

    // `summand` shifts left each round and `remaining` shifts right; the
    // left shift is deliberately unmasked. Both magnitudes are at most
    // 0x8000, so the accumulator stays below 2^30 and `summand` below
    // 2^31 while `remaining` is nonzero.
    let mut summand = magnitude(a, &mut sign_flips);
    let mut remaining = magnitude(b, &mut sign_flips);

    let mut accumulator = 0u32;
    while remaining != 0 {
        if remaining & 1 != 0 {
            accumulator += summand;
        }
        remaining >>= 1;
        summand <<= 1;
    }

    let result = ((accumulator >> FRACTION_BITS) & 0xffff) as Fixed16;
    if sign_flips & 1 != 0 {
        negate(result)
    } else {
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Signed product divided by 1024 truncating toward zero, masked to 16
    /// bits. `0x8000` contributes magnitude 32768 through `as i16`.
    fn reference_multiply(a: Fixed16, b: Fixed16) -> Fixed16 {
        let product = to_signed(a) * to_signed(b);
        (product / (1 << FRACTION_BITS)) as Fixed16
    }

    #[test]
    fn golden_self_check() {
        // -1.0 * -2.0 == 2.0
        assert_eq!(mul_shift10(0xfc00, 0xf800), 0x0800);
        assert_eq!(format!("{:04x}", mul_shift10(0xfc00, 0xf800)), "0800");
    }

    #[test]
    fn zero_annihilates() {
        for a in 0..=0xffff {
            assert_eq!(mul_shift10(a, 0), 0);
            assert_eq!(mul_shift10(0, a), 0);
        }
    }

    #[test]
    fn one_is_identity() {
        for a in 0..=0xffff {
            assert_eq!(mul_shift10(a, ONE), a, "a = {a:#06x}");
            assert_eq!(mul_shift10(ONE, a), a, "a = {a:#06x}");
        }
    }

    #[test]
    fn truncates_toward_zero() {
        // An arithmetic right shift of the signed product would give
        // 0xffff here; the sequence negates after the shift.
        assert_eq!(mul_shift10(0xffff, 0x0001), 0x0000);
        assert_eq!(mul_shift10(0x0001, 0xffff), 0x0000);
    }

    #[test]
    fn matches_reference_at_boundaries() {
        let edges: [Fixed16; 10] = [
            0x0000, 0x0001, 0x03ff, 0x0400, 0x7fff, 0x8000, 0x8001, 0xf800,
            0xfc00, 0xffff,
        ];
        for a in 0..=0xffff {
            for b in edges {
                assert_eq!(
                    mul_shift10(a, b),
                    reference_multiply(a, b),
                    "a = {a:#06x}, b = {b:#06x}"
                );
            }
        }
    }

    #[test]
    fn matches_reference_on_dense_grid() {
        // Prime strides so the samples don't line up with power-of-two
        // structure in the operands.
        for a in (0..=0xffff).step_by(241) {
            for b in (0..=0xffff).step_by(251) {
                assert_eq!(
                    mul_shift10(a, b),
                    reference_multiply(a, b),
                    "a = {a:#06x}, b = {b:#06x}"
                );
            }
        }
    }

    #[test]
    fn negate_edge_patterns() {
        assert_eq!(negate(0x0000), 0x0000);
        assert_eq!(negate(0x8000), 0x8000);
        assert_eq!(negate(0x0001), 0xffff);
        assert_eq!(negate(0xfc00), 0x0400);
    }
}
