//! Mutation ponctuelle, au plus une par tick
//!
//! 1. Seuil `mu * length`; un premier tirage `d` décide si l'événement a lieu.
//! 2. Un second tirage choisit le site, uniformément.
//! 3. Un site homozygote devient hétérozygote.
//! 4. Un site hétérozygote redevient homozygote seulement si `d` (le premier
//!    tirage, réutilisé) est sous le tiers du seuil.

use crate::config::check_rate;
use gc_core::{EventLog, MutationEvent, Result, SequenceModel, SiteState, UniformRandom};
use tracing::debug;

/// Part des mutations sur site hétérozygote qui le rendent homozygote
pub const REVERSION_FRACTION: f64 = 1.0 / 3.0;

pub struct MutationProcess {
    rate: f64,
    did_mutate: bool,
    uniform: Box<dyn UniformRandom>,
    log: EventLog<MutationEvent>,
}

impl MutationProcess {
    /// `rate` est le taux par site et par tick, fini et positif ou nul
    pub fn new(rate: f64, uniform: Box<dyn UniformRandom>) -> Result<Self> {
        check_rate("mutation_rate", rate)?;
        Ok(Self {
            rate,
            did_mutate: false,
            uniform,
            log: EventLog::new(),
        })
    }

    /// Exécute un tick de mutation sur `sequence`
    pub fn mutate(&mut self, sequence: &mut SequenceModel) -> Option<MutationEvent> {
        let length = sequence.size();
        let threshold = self.rate * length as f64;

        // Un tirage non comparable (NaN) ne déclenche rien
        let draw = self.uniform.draw();
        if !(draw < threshold) {
            self.did_mutate = false;
            return None;
        }

        // min(): garde contre l'arrondi de draw * length
        let site = ((self.uniform.draw() * length as f64) as usize).min(length - 1);
        let original = sequence.get(site);
        let new = match original {
            SiteState::Homozygous => SiteState::Heterozygous,
            SiteState::Heterozygous if draw < threshold * REVERSION_FRACTION => {
                SiteState::Homozygous
            }
            SiteState::Heterozygous => SiteState::Heterozygous,
        };
        sequence.set(site, new);

        let event = MutationEvent {
            event: self.log.next_index(),
            threshold,
            draw,
            site,
            original,
            new,
        };
        self.log.push(event);
        self.did_mutate = true;

        debug!(
            site,
            threshold,
            draw,
            "mutation {} -> {}",
            original.code(),
            new.code()
        );
        Some(event)
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Vrai si le dernier tick a produit une mutation
    pub fn did_mutate(&self) -> bool {
        self.did_mutate
    }

    pub fn mutation_count(&self) -> usize {
        self.log.len()
    }

    pub fn log(&self) -> &EventLog<MutationEvent> {
        &self.log
    }
}
