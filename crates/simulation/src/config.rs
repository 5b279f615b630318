//! Configuration d'un chromosome et d'une exécution

use crate::repair::RepairKind;
use gc_core::random::geometric::DEFAULT_TRACT_PROBABILITY;
use gc_core::{ChromError, GeneratorKind, Result, SeedSource};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// Paramètres du modèle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromosomeConfig {
    /// Nombre de sites
    pub length: usize,

    /// Taux de mutation par site et par tick
    pub mutation_rate: f64,

    /// Taux de cassure/conversion par site et par tick
    pub conversion_rate: f64,

    /// Fraction initiale de sites hétérozygotes
    pub heterozygosity: f64,

    /// Paramètre `p` de la loi géométrique des longueurs de tract
    pub tract_probability: f64,

    /// Politique de réparation appliquée par `Chromosome::repair`
    pub repair: RepairKind,

    /// Générateur uniforme
    pub generator: GeneratorKind,

    /// Graine
    pub seed: SeedSource,
}

impl Default for ChromosomeConfig {
    fn default() -> Self {
        Self {
            length: 1000,
            mutation_rate: 0.0000001,
            conversion_rate: 0.000001,
            heterozygosity: 0.4,
            tract_probability: DEFAULT_TRACT_PROBABILITY,
            repair: RepairKind::Tract,
            generator: GeneratorKind::ChaCha,
            seed: SeedSource::default(),
        }
    }
}

impl ChromosomeConfig {
    /// Crée une configuration avec les taux donnés
    pub fn new(length: usize, mutation_rate: f64, conversion_rate: f64) -> Self {
        Self {
            length,
            mutation_rate,
            conversion_rate,
            ..Default::default()
        }
    }

    pub fn with_heterozygosity(mut self, heterozygosity: f64) -> Self {
        self.heterozygosity = heterozygosity;
        self
    }

    pub fn with_tract_probability(mut self, p: f64) -> Self {
        self.tract_probability = p;
        self
    }

    pub fn with_repair(mut self, repair: RepairKind) -> Self {
        self.repair = repair;
        self
    }

    pub fn with_generator(mut self, generator: GeneratorKind) -> Self {
        self.generator = generator;
        self
    }

    /// Définit une graine fixe
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = SeedSource::Fixed(seed);
        self
    }

    pub fn with_clock_seed(mut self) -> Self {
        self.seed = SeedSource::Clock;
        self
    }

    /// Seuil de mutation par tick, `mu * length`
    pub fn mutation_threshold(&self) -> f64 {
        self.mutation_rate * self.length as f64
    }

    /// Seuil de cassure par tick, `c * (length - 1)`
    pub fn break_threshold(&self) -> f64 {
        self.conversion_rate * self.length.saturating_sub(1) as f64
    }

    /// Rejette les paramètres hors domaine
    pub fn validate(&self) -> Result<()> {
        let result = self.check();
        if let Err(e) = &result {
            warn!("configuration rejetée: {}", e);
        }
        result
    }

    fn check(&self) -> Result<()> {
        if self.length == 0 {
            return Err(ChromError::InvalidLength(self.length));
        }
        check_rate("mutation_rate", self.mutation_rate)?;
        check_rate("conversion_rate", self.conversion_rate)?;
        if !(0.0..=1.0).contains(&self.heterozygosity) {
            return Err(ChromError::HeterozygosityOutOfRange(self.heterozygosity));
        }
        if !(self.tract_probability > 0.0 && self.tract_probability <= 1.0) {
            return Err(ChromError::InvalidProbability(self.tract_probability));
        }
        for (name, threshold) in [
            ("mutation_rate", self.mutation_threshold()),
            ("conversion_rate", self.break_threshold()),
        ] {
            if threshold > 1.0 {
                return Err(ChromError::ThresholdOutOfRange { name, threshold });
            }
        }
        Ok(())
    }
}

/// Un taux doit être fini et positif ou nul
pub(crate) fn check_rate(name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ChromError::InvalidRate { name, value });
    }
    Ok(())
}

/// Paramètres de la boucle de simulation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Nombre de cassures à observer avant l'arrêt
    pub target_breaks: u64,

    /// Garde-fou sur le nombre de ticks
    pub max_ticks: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            target_breaks: 40,
            max_ticks: None,
        }
    }
}

impl RunConfig {
    pub fn new(target_breaks: u64) -> Self {
        Self {
            target_breaks,
            max_ticks: None,
        }
    }

    pub fn with_max_ticks(mut self, max_ticks: u64) -> Self {
        self.max_ticks = Some(max_ticks);
        self
    }

    /// Vérifie que la boucle peut se terminer pour ce chromosome
    pub fn validate(&self, chromosome: &ChromosomeConfig) -> Result<()> {
        if self.target_breaks > 0 && self.max_ticks.is_none() && chromosome.break_threshold() == 0.0
        {
            return Err(ChromError::InvalidConfig(
                "aucune cassure possible (taux nul ou longueur 1) et pas de limite de ticks"
                    .to_string(),
            ));
        }
        Ok(())
    }
}

/// Fichier de configuration complet
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub chromosome: ChromosomeConfig,
    pub run: RunConfig,
}

impl SimulationConfig {
    /// Charge un fichier JSON; les champs absents prennent leur valeur par défaut
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        self.chromosome.validate()?;
        self.run.validate(&self.chromosome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ChromosomeConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.length, 1000);
        assert_eq!(config.heterozygosity, 0.4);
    }

    #[test]
    fn test_zero_length_rejected() {
        let config = ChromosomeConfig::new(0, 0.0, 0.0);
        assert!(matches!(config.validate(), Err(ChromError::InvalidLength(0))));
    }

    #[test]
    fn test_negative_rate_rejected() {
        let config = ChromosomeConfig::new(10, -0.1, 0.0);
        assert!(matches!(
            config.validate(),
            Err(ChromError::InvalidRate {
                name: "mutation_rate",
                ..
            })
        ));
        let config = ChromosomeConfig::new(10, 0.0, f64::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_threshold_above_one_rejected() {
        let config = ChromosomeConfig::new(1000, 0.01, 0.0);
        assert!(matches!(
            config.validate(),
            Err(ChromError::ThresholdOutOfRange { .. })
        ));
        let config = ChromosomeConfig::new(1001, 0.0, 0.001);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_heterozygosity_and_probability_domains() {
        let config = ChromosomeConfig::default().with_heterozygosity(1.2);
        assert!(config.validate().is_err());
        let config = ChromosomeConfig::default().with_tract_probability(0.0);
        assert!(matches!(
            config.validate(),
            Err(ChromError::InvalidProbability(_))
        ));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ChromosomeConfig =
            serde_json::from_str(r#"{"length": 500, "repair": "minimal", "seed": {"fixed": 7}}"#)
                .unwrap();
        assert_eq!(config.length, 500);
        assert_eq!(config.repair, RepairKind::Minimal);
        assert_eq!(config.seed, SeedSource::Fixed(7));
        assert_eq!(config.heterozygosity, 0.4);
    }

    #[test]
    fn test_json_roundtrip_through_file() {
        let path = std::env::temp_dir().join(format!("gc-config-{}.json", std::process::id()));
        let config = SimulationConfig {
            chromosome: ChromosomeConfig::new(200, 0.0001, 0.0002).with_seed(9),
            run: RunConfig::new(12).with_max_ticks(1_000_000),
        };
        std::fs::write(&path, config.to_json_pretty().unwrap()).unwrap();
        let loaded = SimulationConfig::from_json_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, config);
        assert!(loaded.validate().is_ok());
    }

    #[test]
    fn test_partial_file_sections() {
        let config: SimulationConfig =
            serde_json::from_str(r#"{"run": {"target_breaks": 3}}"#).unwrap();
        assert_eq!(config.run.target_breaks, 3);
        assert_eq!(config.chromosome, ChromosomeConfig::default());
    }

    #[test]
    fn test_run_config_requires_possible_breaks() {
        let chrom = ChromosomeConfig::new(100, 0.0, 0.0);
        assert!(RunConfig::new(5).validate(&chrom).is_err());
        assert!(RunConfig::new(5).with_max_ticks(10).validate(&chrom).is_ok());
        assert!(RunConfig::new(0).validate(&chrom).is_ok());
    }
}
