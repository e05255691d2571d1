pub mod pointer_set;
pub mod state_machine;
