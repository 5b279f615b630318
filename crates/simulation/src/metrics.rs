//! Bilan d'une exécution

use gc_core::SiteState;
use serde::{Deserialize, Serialize};

use crate::chromosome::{Chromosome, TickOutcome};

/// Compteurs collectés pendant une exécution
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Graine effective
    pub seed: u64,

    /// Nombre de sites
    pub length: usize,

    /// Ticks exécutés
    pub ticks: u64,

    /// Mutations enregistrées
    pub mutations: u64,

    /// Cassures enregistrées
    pub breaks: u64,

    /// Cassures réparées
    pub repairs: u64,

    /// Réparations dont le tract a été tronqué
    pub truncated_repairs: u64,

    /// Sites hétérozygotes rendus homozygotes par conversion
    pub converted_sites: u64,

    /// Sites hétérozygotes au début
    pub initial_heterozygous: usize,

    /// Sites hétérozygotes à la fin
    pub final_heterozygous: usize,
}

impl RunSummary {
    /// Bilan vide pour `chromosome`, avant le premier tick
    pub fn start(chromosome: &Chromosome) -> Self {
        let heterozygous = chromosome.sequence().count(SiteState::Heterozygous);
        Self {
            seed: chromosome.seed(),
            length: chromosome.size(),
            initial_heterozygous: heterozygous,
            final_heterozygous: heterozygous,
            ..Default::default()
        }
    }

    /// Intègre le résultat d'un tick
    pub fn record(&mut self, outcome: &TickOutcome) {
        self.ticks += 1;
        if outcome.mutation.is_some() {
            self.mutations += 1;
        }
        if outcome.dsbreak.is_some() {
            self.breaks += 1;
        }
        if let Some(repair) = &outcome.repair {
            self.repairs += 1;
            self.converted_sites += repair.converted as u64;
            if repair.truncated {
                self.truncated_repairs += 1;
            }
        }
    }

    /// Relève l'état final de la séquence
    pub fn finish(&mut self, chromosome: &Chromosome) {
        self.final_heterozygous = chromosome.sequence().count(SiteState::Heterozygous);
    }

    /// Mutations par tick
    pub fn mutation_frequency(&self) -> f64 {
        if self.ticks == 0 {
            return 0.0;
        }
        self.mutations as f64 / self.ticks as f64
    }

    /// Cassures par tick
    pub fn break_frequency(&self) -> f64 {
        if self.ticks == 0 {
            return 0.0;
        }
        self.breaks as f64 / self.ticks as f64
    }

    /// Fraction finale de sites hétérozygotes
    pub fn final_heterozygosity(&self) -> f64 {
        if self.length == 0 {
            return 0.0;
        }
        self.final_heterozygous as f64 / self.length as f64
    }

    /// Formate le bilan en tableau
    pub fn format_table(&self) -> String {
        format!(
            "┌────────────────────────────────────────────┐\n\
             │ Bilan de simulation                        │\n\
             ├────────────────────────────────────────────┤\n\
             │ Graine              : {:>20} │\n\
             │ Sites               : {:>20} │\n\
             │ Ticks               : {:>20} │\n\
             │ Mutations           : {:>20} │\n\
             │ Cassures            : {:>20} │\n\
             │ Réparations         : {:>20} │\n\
             │ Tracts tronqués     : {:>20} │\n\
             │ Sites convertis     : {:>20} │\n\
             │ Hétérozygotes début : {:>20} │\n\
             │ Hétérozygotes fin   : {:>13} ({:>4.1}%) │\n\
             └────────────────────────────────────────────┘",
            self.seed,
            self.length,
            self.ticks,
            self.mutations,
            self.breaks,
            self.repairs,
            self.truncated_repairs,
            self.converted_sites,
            self.initial_heterozygous,
            self.final_heterozygous,
            100.0 * self.final_heterozygosity()
        )
    }
}
