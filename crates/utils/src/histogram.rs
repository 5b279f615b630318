//! Histogramme des valeurs distinctes d'une séquence

use std::collections::BTreeMap;
use std::fmt::Display;
use std::io::{self, Write};

/// Comptes par valeur, triés par valeur
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram<V> {
    counts: BTreeMap<V, u64>,
    value_name: String,
    count_name: String,
    freq_name: String,
}

impl<V: Ord + Copy + Display> Histogram<V> {
    /// Compte les valeurs observées
    pub fn from_values(values: &[V]) -> Self {
        let mut hist = Self {
            counts: BTreeMap::new(),
            value_name: "value".to_string(),
            count_name: "count".to_string(),
            freq_name: "freq".to_string(),
        };
        hist.fill(values);
        hist
    }

    /// Compte les valeurs, chaque valeur de `domain` apparaissant même à 0
    pub fn with_domain(values: &[V], domain: impl IntoIterator<Item = V>) -> Self {
        let mut hist = Self::from_values(&[]);
        for value in domain {
            hist.counts.insert(value, 0);
        }
        hist.fill(values);
        hist
    }

    /// Noms des colonnes valeur, compte et fréquence
    pub fn names(mut self, value: &str, count: &str, freq: &str) -> Self {
        self.value_name = value.to_string();
        self.count_name = count.to_string();
        self.freq_name = freq.to_string();
        self
    }

    /// Ajoute des valeurs
    pub fn fill(&mut self, values: &[V]) {
        for &value in values {
            *self.counts.entry(value).or_insert(0) += 1;
        }
    }

    /// Nombre de valeurs distinctes
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Nombre total d'observations
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn count(&self, value: &V) -> u64 {
        self.counts.get(value).copied().unwrap_or(0)
    }

    pub fn frequency(&self, value: &V) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.count(value) as f64 / total as f64
    }

    pub fn values(&self) -> Vec<V> {
        self.counts.keys().copied().collect()
    }

    pub fn counts(&self) -> Vec<u64> {
        self.counts.values().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&V, &u64)> {
        self.counts.iter()
    }

    /// Écrit `valeur\tcompte\tfréquence`, chaque ligne précédée de `prefix`
    pub fn write_table(
        &self,
        out: &mut dyn Write,
        header: bool,
        prefix: &str,
    ) -> io::Result<()> {
        if header {
            writeln!(
                out,
                "{}{}\t{}\t{}",
                prefix, self.value_name, self.count_name, self.freq_name
            )?;
        }
        let total = self.total();
        for (value, count) in &self.counts {
            let freq = if total == 0 {
                0.0
            } else {
                *count as f64 / total as f64
            };
            writeln!(out, "{}{}\t{}\t{:.4}", prefix, value, count, freq)?;
        }
        Ok(())
    }
}
