/*!
ASCII Mandelbrot renderer over signed 16.10 fixed-point arithmetic.

Every multiply goes through a bit-exact emulation of a legacy shift-and-add
instruction sequence ([`fixed::mul_shift10`]) rather than a native signed
multiply; the escape-time loop and the frame output depend on its exact
truncation and masking behaviour.
*/

pub mod escape;
pub mod fixed;
pub mod palette;
pub mod pixel;
pub mod render;

pub use pixel::Complex;
pub use render::{render_frame, Viewport};
