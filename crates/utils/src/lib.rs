//! Utilitaires de rapport sur la séquence finale

pub mod histogram;
pub mod runs;
pub mod stats;
pub mod window;

pub use histogram::Histogram;
pub use runs::{Run, RunStats, SequenceRuns};
pub use window::{write_centered, write_window};
