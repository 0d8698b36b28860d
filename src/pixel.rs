use crate::fixed::Fixed16;

/// A complex number as a pair of 16.10 fixed-point bit patterns.
///
/// Serves both as the per-pixel constant `c` and as the running iterate `z`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Complex {
    pub real: Fixed16,
    pub imaginary: Fixed16,
}

impl Complex {
    pub const ZERO: Self = Complex {
        real: 0,
        imaginary: 0,
    };
}
