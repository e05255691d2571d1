use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;

/// Generates fractal data in parallel using rayon's work-stealing scheduler.
///
/// Rows are the unit of work. Results come back in the same row-major order as
/// [`generate_fractal_serial`](super::generate_fractal_serial::generate_fractal_serial),
/// so both paths are interchangeable.
pub fn generate_fractal_parallel_rayon<Alg>(
    width: u32,
    height: u32,
    algorithm: &Alg,
) -> Vec<Alg::Success>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
{
    let rows: Vec<Vec<Alg::Success>> = (0..height)
        .into_par_iter()
        .map(|y| {
            (0..width)
                .map(|x| {
                    algorithm.compute(Point {
                        x: x as i32,
                        y: y as i32,
                    })
                })
                .collect()
        })
        .collect();

    rows.into_iter().flatten().collect()
}
