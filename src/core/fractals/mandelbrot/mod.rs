pub mod algorithm;
pub mod escape_time;
pub mod palette;
