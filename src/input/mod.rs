//! Input adapters: hosts that feed pointer events and frame timing into the explorer.

pub mod gui;
