//! Boucle de simulation: ticks jusqu'à un nombre donné de cassures

use crate::chromosome::Chromosome;
use crate::config::RunConfig;
use crate::metrics::RunSummary;
use gc_core::{ChromError, Result};
use tracing::info;

/// Exécute des ticks jusqu'à observer `run.target_breaks` cassures
pub fn run_until_breaks(chromosome: &mut Chromosome, run: &RunConfig) -> Result<RunSummary> {
    run_with_progress(chromosome, run, |_| {})
}

/// Comme [`run_until_breaks`], en appelant `on_break` après chaque cassure
pub fn run_with_progress<F>(
    chromosome: &mut Chromosome,
    run: &RunConfig,
    mut on_break: F,
) -> Result<RunSummary>
where
    F: FnMut(&RunSummary),
{
    run.validate(chromosome.config())?;
    let mut summary = RunSummary::start(chromosome);

    gc_core::log_operation!("simulation", {
        while summary.breaks < run.target_breaks {
            if let Some(max_ticks) = run.max_ticks {
                if summary.ticks >= max_ticks {
                    return Err(ChromError::TickLimitReached {
                        ticks: summary.ticks,
                        breaks: summary.breaks,
                        target: run.target_breaks,
                    });
                }
            }

            let outcome = chromosome.tick()?;
            summary.record(&outcome);
            if outcome.dsbreak.is_some() {
                on_break(&summary);
            }
        }
    });

    summary.finish(chromosome);
    info!(
        ticks = summary.ticks,
        mutations = summary.mutations,
        breaks = summary.breaks,
        "simulation terminée"
    );
    Ok(summary)
}
