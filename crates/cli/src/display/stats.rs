//! Affichage des statistiques de séquence

use console::style;
use gc_core::{SequenceModel, SiteState};
use gc_simulation::RunSummary;
use gc_utils::{Histogram, SequenceRuns};
use std::io::{self, Write};
use tabled::{Table, Tabled};

/// Titre de section
pub fn heading(title: &str) -> String {
    format!("\n{}", style(title).bold().cyan())
}

/// Comptes par état, les deux états toujours présents
pub fn site_histogram(sequence: &SequenceModel) -> Histogram<SiteState> {
    Histogram::with_domain(sequence.sites(), SiteState::ALL).names(
        "bp_state",
        "num_sites",
        "freq_sites",
    )
}

/// Écrit `bp_state\tnum_sites\tfreq_sites`
pub fn write_site_histogram(out: &mut dyn Write, sequence: &SequenceModel) -> io::Result<()> {
    site_histogram(sequence).write_table(out, true, "")
}

/// Statistiques de plages puis histogrammes des longueurs de plage
pub fn write_runs_report(out: &mut dyn Write, sequence: &SequenceModel) -> io::Result<()> {
    let runs = SequenceRuns::new(sequence.sites());
    runs.write_summary(out, true)?;
    writeln!(out)?;
    runs.write_histograms(out, true)
}

/// Composition de la séquence avant et après l'exécution
pub fn composition_table(summary: &RunSummary) -> String {
    #[derive(Tabled)]
    struct CompositionRow {
        #[tabled(rename = "État")]
        state: String,
        #[tabled(rename = "Début")]
        initial: usize,
        #[tabled(rename = "Fin")]
        last: usize,
        #[tabled(rename = "Fréquence fin")]
        freq: String,
    }

    let freq = |count: usize| {
        if summary.length == 0 {
            0.0
        } else {
            count as f64 / summary.length as f64
        }
    };

    let rows: Vec<CompositionRow> = SiteState::ALL
        .iter()
        .map(|&state| {
            let (initial, last) = match state {
                SiteState::Homozygous => (
                    summary.length - summary.initial_heterozygous,
                    summary.length - summary.final_heterozygous,
                ),
                SiteState::Heterozygous => {
                    (summary.initial_heterozygous, summary.final_heterozygous)
                }
            };
            CompositionRow {
                state: format!("{:?} ({})", state, state.code()),
                initial,
                last,
                freq: format!("{:.4}", freq(last)),
            }
        })
        .collect();

    Table::new(rows).to_string()
}
