//! Codage par plages (run-length) d'une séquence
//!
//! Une plage est une suite maximale de valeurs identiques consécutives.
//! Les longueurs de plage sont regroupées par valeur pour produire des
//! statistiques et des histogrammes.

use crate::histogram::Histogram;
use crate::stats;
use std::collections::BTreeMap;
use std::fmt::Display;
use std::io::{self, Write};

/// Plage de valeurs identiques
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run<T> {
    pub index: usize,
    /// Position du premier élément
    pub position: usize,
    pub length: usize,
    pub item: T,
}

/// Statistiques des plages d'une valeur
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunStats {
    /// Nombre d'éléments couverts par les plages
    pub sites: usize,
    /// `sites` rapporté au total des éléments
    pub freq: f64,
    pub min_run: usize,
    pub max_run: usize,
    pub mean_run: f64,
    /// Variance échantillon des longueurs
    pub var_run: f64,
}

#[derive(Debug, Clone, Default)]
pub struct SequenceRuns<T> {
    runs: Vec<Run<T>>,
    lengths: BTreeMap<T, Vec<usize>>,
    total_items: usize,
}

impl<T: Ord + Copy + Display> SequenceRuns<T> {
    pub fn new(values: &[T]) -> Self {
        let mut runs = Self {
            runs: Vec::new(),
            lengths: BTreeMap::new(),
            total_items: 0,
        };
        runs.append(values);
        runs
    }

    /// Ajoute une séquence à la suite; aucune fusion avec la dernière plage
    pub fn append(&mut self, values: &[T]) {
        let offset = self.total_items;
        let mut iter = values.iter().copied().enumerate();
        let Some((_, first)) = iter.next() else {
            return;
        };

        let mut current = first;
        let mut start = 0;
        for (i, value) in iter {
            if value != current {
                self.push_run(current, offset + start, i - start);
                current = value;
                start = i;
            }
        }
        self.push_run(current, offset + start, values.len() - start);
        self.total_items += values.len();
    }

    fn push_run(&mut self, item: T, position: usize, length: usize) {
        self.runs.push(Run {
            index: self.runs.len(),
            position,
            length,
            item,
        });
        self.lengths.entry(item).or_default().push(length);
    }

    pub fn runs(&self) -> &[Run<T>] {
        &self.runs
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// Valeurs distinctes observées
    pub fn items(&self) -> Vec<T> {
        self.lengths.keys().copied().collect()
    }

    /// Longueurs des plages de `item`, dans l'ordre de la séquence
    pub fn run_lengths(&self, item: &T) -> &[usize] {
        self.lengths.get(item).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn stats(&self, item: &T) -> Option<RunStats> {
        let lengths = self.run_lengths(item);
        let sites = lengths.iter().sum::<usize>();
        Some(RunStats {
            sites,
            freq: sites as f64 / self.total_items as f64,
            min_run: stats::min(lengths)?,
            max_run: stats::max(lengths)?,
            mean_run: stats::mean(lengths)?,
            var_run: stats::variance(lengths, true)?,
        })
    }

    /// Histogramme des longueurs de plage de `item`
    pub fn histogram(&self, item: &T) -> Histogram<usize> {
        Histogram::from_values(self.run_lengths(item)).names("run_length", "count", "freq")
    }

    /// Tableau des plages: `run_index position length item`
    pub fn write_table(&self, out: &mut dyn Write, header: bool) -> io::Result<()> {
        if header {
            writeln!(out, "run_index\tposition\tlength\titem")?;
        }
        for run in &self.runs {
            writeln!(
                out,
                "{}\t{}\t{}\t{}",
                run.index, run.position, run.length, run.item
            )?;
        }
        Ok(())
    }

    /// Statistiques par valeur
    pub fn write_summary(&self, out: &mut dyn Write, header: bool) -> io::Result<()> {
        if header {
            writeln!(
                out,
                "item_val\tnum_sites\tfreq\tmin_run\tmax_run\tmean_run\tvar_run"
            )?;
        }
        for item in self.lengths.keys() {
            match self.stats(item) {
                Some(s) => writeln!(
                    out,
                    "{}\t{}\t{:.4}\t{}\t{}\t{:.4}\t{:.4}",
                    item, s.sites, s.freq, s.min_run, s.max_run, s.mean_run, s.var_run
                )?,
                None => writeln!(out, "{}\tNA\tNA\tNA\tNA\tNA\tNA", item)?,
            }
        }
        Ok(())
    }

    /// Histogrammes des longueurs, une section par valeur
    pub fn write_histograms(&self, out: &mut dyn Write, header: bool) -> io::Result<()> {
        if header {
            writeln!(out, "item_val\trun_length\tcount\tfreq")?;
        }
        for item in self.lengths.keys() {
            let prefix = format!("{}\t", item);
            self.histogram(item).write_table(out, false, &prefix)?;
        }
        Ok(())
    }
}
