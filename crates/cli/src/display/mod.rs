//! Rendu console

pub mod stats;
pub mod visualizer;
