pub mod backend;
pub mod explorer;
