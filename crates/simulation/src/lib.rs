//! Simulation stochastique d'un chromosome
//!
//! Mutation ponctuelle, cassures double brin et réparation par conversion
//! génique, enchaînées à chaque tick.

pub mod chromosome;
pub mod config;
pub mod driver;
pub mod dsbreak;
pub mod metrics;
pub mod mutation;
pub mod queue;
pub mod repair;

pub use chromosome::{Chromosome, RandomSources, TickOutcome};
pub use config::{ChromosomeConfig, RunConfig, SimulationConfig};
pub use driver::{run_until_breaks, run_with_progress};
pub use dsbreak::{BreakProcess, MIN_BREAK_SITE};
pub use metrics::RunSummary;
pub use mutation::{MutationProcess, REVERSION_FRACTION};
pub use queue::RepairQueue;
pub use repair::{Direction, MinimalRepair, RepairKind, RepairOutcome, RepairPolicy, TractRepair};
