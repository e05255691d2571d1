pub mod pixel_evaluator;
