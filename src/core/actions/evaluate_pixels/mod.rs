pub mod cpu_reference;
pub mod parallel_rayon;
pub mod ports;
