//! Chromosome: séquence, processus stochastiques et journaux
//!
//! Un tick enchaîne toujours mutation, cassure puis réparation sur la même
//! séquence. Chaque chromosome possède ses propres flux aléatoires.

use crate::config::ChromosomeConfig;
use crate::dsbreak::BreakProcess;
use crate::mutation::MutationProcess;
use crate::queue::RepairQueue;
use crate::repair::{MinimalRepair, RepairKind, RepairOutcome, RepairPolicy, TractRepair};
use gc_core::random::streams;
use gc_core::{
    BreakEvent, EventLog, GeometricRandom, InversionGeometric, MutationEvent, Result,
    SequenceModel, UniformRandom,
};
use serde::Serialize;
use std::io::{self, Write};
use tracing::info;

/// Flux aléatoires d'un chromosome, un par processus
pub struct RandomSources {
    pub heterozygosity: Box<dyn UniformRandom>,
    pub mutation: Box<dyn UniformRandom>,
    pub dsbreak: Box<dyn UniformRandom>,
    pub repair_direction: Box<dyn UniformRandom>,
    pub repair_tract: Box<dyn GeometricRandom>,
}

impl RandomSources {
    /// Dérive tous les flux de la graine `seed`
    pub fn from_config(config: &ChromosomeConfig, seed: u64) -> Result<Self> {
        let kind = config.generator;
        let tract = InversionGeometric::new(
            config.tract_probability,
            kind.uniform(seed, streams::REPAIR_TRACT),
        )?;
        Ok(Self {
            heterozygosity: kind.uniform(seed, streams::HETEROZYGOSITY),
            mutation: kind.uniform(seed, streams::MUTATION),
            dsbreak: kind.uniform(seed, streams::BREAK),
            repair_direction: kind.uniform(seed, streams::REPAIR_DIRECTION),
            repair_tract: Box::new(tract),
        })
    }
}

/// Résultat d'un tick complet
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TickOutcome {
    pub mutation: Option<MutationEvent>,
    pub dsbreak: Option<BreakEvent>,
    pub repair: Option<RepairOutcome>,
}

pub struct Chromosome {
    config: ChromosomeConfig,
    seed: u64,
    sequence: SequenceModel,
    heterozygosity_uniform: Box<dyn UniformRandom>,
    mutation: MutationProcess,
    breaks: BreakProcess,
    queue: RepairQueue,
    minimal: MinimalRepair,
    tract: TractRepair,
}

impl Chromosome {
    /// Construit un chromosome à partir de la configuration
    pub fn new(config: ChromosomeConfig) -> Result<Self> {
        config.validate()?;
        let seed = config.seed.resolve();
        let sources = RandomSources::from_config(&config, seed)?;
        Self::with_sources(config, seed, sources)
    }

    /// Construit un chromosome avec des flux fournis par l'appelant
    pub fn with_sources(
        config: ChromosomeConfig,
        seed: u64,
        sources: RandomSources,
    ) -> Result<Self> {
        config.validate()?;
        let RandomSources {
            mut heterozygosity,
            mutation,
            dsbreak,
            repair_direction,
            repair_tract,
        } = sources;

        let mut sequence = SequenceModel::new(config.length);
        sequence.set_heterozygosity(config.heterozygosity, heterozygosity.as_mut())?;

        info!(
            length = config.length,
            mu = config.mutation_rate,
            c = config.conversion_rate,
            seed,
            "chromosome initialisé, {} sites hétérozygotes",
            sequence.count(gc_core::SiteState::Heterozygous)
        );

        Ok(Self {
            mutation: MutationProcess::new(config.mutation_rate, mutation)?,
            breaks: BreakProcess::new(config.conversion_rate, dsbreak)?,
            tract: TractRepair::new(repair_direction, repair_tract),
            minimal: MinimalRepair,
            queue: RepairQueue::new(),
            heterozygosity_uniform: heterozygosity,
            sequence,
            seed,
            config,
        })
    }

    /// Tire de nouveau l'état initial des sites
    pub fn set_heterozygosity(&mut self, heterozygosity: f64) -> Result<()> {
        self.sequence
            .set_heterozygosity(heterozygosity, self.heterozygosity_uniform.as_mut())?;
        self.config.heterozygosity = heterozygosity;
        Ok(())
    }

    /// Modifie la longueur sans toucher aux sites
    ///
    /// Tant que [`Chromosome::reinit`] n'a pas été appelé, tout tick échoue
    /// sur la vérification de longueur de la séquence.
    pub fn set_length(&mut self, length: usize) {
        self.sequence.set_length(length);
        self.config.length = length;
    }

    /// Remet `length` sites homozygotes
    pub fn init(&mut self, length: usize) {
        self.sequence.init(length);
        self.config.length = length;
    }

    /// Réalloue les sites à la longueur courante, tous homozygotes
    pub fn reinit(&mut self) {
        self.sequence.reinit();
    }

    /// Mutation ponctuelle du tick
    pub fn mutate(&mut self) -> Option<MutationEvent> {
        self.mutation.mutate(&mut self.sequence)
    }

    /// Cassure éventuelle du tick, mise en file de réparation
    pub fn break_check(&mut self) -> Option<BreakEvent> {
        self.breaks.check(&self.sequence, &mut self.queue)
    }

    /// Réparation selon la politique configurée
    pub fn repair(&mut self) -> Result<Option<RepairOutcome>> {
        match self.config.repair {
            RepairKind::Minimal => self.repair_minimal(),
            RepairKind::Tract => self.repair_tract(),
        }
    }

    /// Réparation sans conversion
    pub fn repair_minimal(&mut self) -> Result<Option<RepairOutcome>> {
        self.minimal.repair(&mut self.sequence, &mut self.queue)
    }

    /// Réparation par tract de conversion
    pub fn repair_tract(&mut self) -> Result<Option<RepairOutcome>> {
        self.tract.repair(&mut self.sequence, &mut self.queue)
    }

    /// Un tick complet: mutation, cassure, réparation
    pub fn tick(&mut self) -> Result<TickOutcome> {
        let mutation = self.mutate();
        let dsbreak = self.break_check();
        let repair = self.repair()?;
        Ok(TickOutcome {
            mutation,
            dsbreak,
            repair,
        })
    }

    pub fn config(&self) -> &ChromosomeConfig {
        &self.config
    }

    /// Graine effective (résolue si tirée de l'horloge)
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn sequence(&self) -> &SequenceModel {
        &self.sequence
    }

    pub fn size(&self) -> usize {
        self.sequence.size()
    }

    pub fn mutation_rate(&self) -> f64 {
        self.mutation.rate()
    }

    pub fn did_mutate(&self) -> bool {
        self.mutation.did_mutate()
    }

    pub fn mutation_count(&self) -> usize {
        self.mutation.mutation_count()
    }

    pub fn mutation_log(&self) -> &EventLog<MutationEvent> {
        self.mutation.log()
    }

    pub fn break_rate(&self) -> f64 {
        self.breaks.rate()
    }

    pub fn did_break(&self) -> bool {
        self.breaks.did_break()
    }

    pub fn break_count(&self) -> usize {
        self.breaks.break_count()
    }

    pub fn break_log(&self) -> &EventLog<BreakEvent> {
        self.breaks.log()
    }

    /// Cassures en attente de réparation
    pub fn pending_breaks(&self) -> usize {
        self.queue.len()
    }

    /// Écrit le journal des mutations en tableau tabulé
    pub fn write_mutations(&self, out: &mut dyn Write, header: bool) -> io::Result<()> {
        self.mutation.log().write_table(out, header)
    }

    /// Écrit le journal des cassures en tableau tabulé
    pub fn write_breaks(&self, out: &mut dyn Write, header: bool) -> io::Result<()> {
        self.breaks.log().write_table(out, header)
    }
}
