//! Frame rendering: walks the sample grid and maps each pixel's escape
//! count to a palette glyph.

use log::trace;
use rayon::prelude::{IntoParallelIterator, ParallelIterator};

use crate::{
    escape,
    fixed::Fixed16,
    palette,
    pixel::Complex,
};

/// The fixed-point sample grid, one sample per output character.
///
/// Row `y` samples at imaginary part `i_start + y * i_step` and column `x`
/// at real part `r_start + x * r_step`, both wrapping within 16 bits. The
/// defaults reproduce the reference frame: a 96x64 window covering roughly
/// -2.0..1.0 by -1.0..1.0 in steps of 1/32.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub rows: u32,
    pub cols: u32,
    pub r_start: Fixed16,
    pub r_step: Fixed16,
    pub i_start: Fixed16,
    pub i_step: Fixed16,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            rows: 64,
            cols: 96,
            r_start: 0xf800,
            r_step: 0x0020,
            i_start: 0xfc00,
            i_step: 0x0020,
        }
    }
}

/// Render one line of text per row, top to bottom.
///
/// Every pixel is independent, so rows are computed in parallel and
/// collected back in row order. Pure: identical viewports yield
/// byte-identical frames.
pub fn render_frame(viewport: &Viewport) -> Vec<String> {
    trace!("begin render_frame {:?}", viewport);

    let lines = (0..viewport.rows)
        .into_par_iter()
        .map(|y| render_row(viewport, y))
        .collect();

    trace!("end render_frame");

    lines
}

fn render_row(viewport: &Viewport, y: u32) -> String {
    let curr_i = viewport
        .i_start
        .wrapping_add(viewport.i_step.wrapping_mul(y as Fixed16));

    let mut line = String::with_capacity(viewport.cols as usize);
    for x in 0..viewport.cols {
        let curr_r = viewport
            .r_start
            .wrapping_add(viewport.r_step.wrapping_mul(x as Fixed16));

        let count = escape::escape_count(Complex {
            real: curr_r,
            imaginary: curr_i,
        });
        line.push(palette::glyph(count));
    }

    debug_assert_eq!(line.len(), viewport.cols as usize);
    line
}
