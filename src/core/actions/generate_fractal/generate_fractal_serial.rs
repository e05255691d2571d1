use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;

/// Evaluates every pixel of a `width`×`height` grid on the calling thread, row-major.
pub fn generate_fractal_serial<Alg>(width: u32, height: u32, algorithm: &Alg) -> Vec<Alg::Success>
where
    Alg: FractalAlgorithm,
{
    let mut results = Vec::with_capacity(width as usize * height as usize);

    for y in 0..height {
        for x in 0..width {
            results.push(algorithm.compute(Point {
                x: x as i32,
                y: y as i32,
            }));
        }
    }

    results
}
