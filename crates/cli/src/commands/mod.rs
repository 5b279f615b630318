//! Sous-commandes

pub mod defaults;
pub mod run;
