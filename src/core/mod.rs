pub mod actions;
pub mod data;
pub mod fractals;
pub mod gesture;
pub mod util;
