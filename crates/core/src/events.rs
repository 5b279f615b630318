//! Enregistrements des événements de mutation et de cassure
//!
//! Les journaux sont en ajout seul: l'ordre d'insertion est l'ordre
//! chronologique. Chaque enregistrement sait s'écrire en ligne tabulée.

use crate::sequence::SiteState;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// Enregistrement exportable en tableau séparé par tabulations
pub trait TabRecord {
    /// Ligne d'en-tête, sans retour à la ligne
    fn header() -> &'static str;

    /// Écrit une ligne, retour à la ligne compris
    fn write_row(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// Mutation ponctuelle ayant eu lieu
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MutationEvent {
    /// Rang dans le journal des mutations
    pub event: u64,
    /// Seuil `mu * length` du tick
    pub threshold: f64,
    /// Tirage uniforme ayant déclenché l'événement
    pub draw: f64,
    pub site: usize,
    pub original: SiteState,
    pub new: SiteState,
}

impl TabRecord for MutationEvent {
    fn header() -> &'static str {
        "event\tevent_threshold\tevent_draw\tevent_site\tval_orig\tval_new"
    }

    fn write_row(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}\t{}",
            self.event, self.threshold, self.draw, self.site, self.original, self.new
        )
    }
}

/// Cassure double brin
///
/// Le même enregistrement sert à l'historique et à la file de réparation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreakEvent {
    /// Rang dans le journal des cassures
    pub event: u64,
    /// Seuil `c * (length - 1)` du tick
    pub threshold: f64,
    pub draw: f64,
    /// Site de cassure, toujours >= 1
    pub site: usize,
}

impl TabRecord for BreakEvent {
    fn header() -> &'static str {
        "event_threshold\tevent_draw\tevent_site"
    }

    fn write_row(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}\t{}\t{}", self.threshold, self.draw, self.site)
    }
}

/// Journal en ajout seul
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventLog<E> {
    records: Vec<E>,
}

impl<E> Default for EventLog<E> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<E> EventLog<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rang que recevra le prochain enregistrement
    pub fn next_index(&self) -> u64 {
        self.records.len() as u64
    }

    pub fn push(&mut self, record: E) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&E> {
        self.records.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[E] {
        &self.records
    }
}

impl<E: TabRecord> EventLog<E> {
    /// Écrit le journal sous forme de tableau tabulé
    pub fn write_table(&self, out: &mut dyn Write, header: bool) -> io::Result<()> {
        if header {
            writeln!(out, "{}", E::header())?;
        }
        for record in &self.records {
            record.write_row(out)?;
        }
        Ok(())
    }
}

impl<'a, E> IntoIterator for &'a EventLog<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
