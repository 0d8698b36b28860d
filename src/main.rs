use std::io::Write;

use fixed_mandelbrot::{fixed, render_frame, Viewport};

fn main() {
    env_logger::init();

    let lines = render_frame(&Viewport::default());

    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();
    for line in &lines {
        writeln!(stdout, "{}", line).unwrap();
    }

    // Regression check of the multiply routine: -1.0 * -2.0.
    writeln!(stdout, "{:04x}", fixed::mul_shift10(0xfc00, 0xf800)).unwrap();
}
