use crate::core::data::complex::Complex;

pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Hard bound on the escape loop, whatever budget is configured.
pub const ITERATION_SAFETY_CAP: u32 = 4096;

/// Outcome of iterating `z ← z² + c` for one plane coordinate.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Escape {
    pub escaped: bool,
    /// Squarings performed before the bound was exceeded (or the budget ran out).
    pub iterations: u32,
    /// Continuous iteration count; `0.0` when the point did not escape.
    pub smooth_count: f64,
}

/// Escape-time test for `c = x0 + y0·i`, starting from `z = 0`.
///
/// The bound is tested before the budget, so a point escapes iff
/// `|z_n|² > 4` for some `n < min(max_iterations, ITERATION_SAFETY_CAP)`.
/// The smooth count is `n + 1 - log2(log2(|z_n|²) / 2)`, capped at the budget.
#[must_use]
pub fn evaluate(x0: f64, y0: f64, max_iterations: u32) -> Escape {
    let budget = max_iterations.min(ITERATION_SAFETY_CAP);
    let c = Complex::new(x0, y0);
    let mut z = Complex::ZERO;

    for n in 0..budget {
        let magnitude_squared = z.magnitude_squared();

        if magnitude_squared > ESCAPE_RADIUS_SQUARED {
            return Escape {
                escaped: true,
                iterations: n,
                smooth_count: smooth_count(n, magnitude_squared).min(f64::from(budget)),
            };
        }

        z = z * z + c;
    }

    Escape {
        escaped: false,
        iterations: budget,
        smooth_count: 0.0,
    }
}

fn smooth_count(n: u32, magnitude_squared: f64) -> f64 {
    let nu = (magnitude_squared.log2() / 2.0).log2();

    f64::from(n) + 1.0 - nu
}
