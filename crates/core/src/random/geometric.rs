//! Longueurs de tract géométriques par inversion
//!
//! Pour une probabilité de succès `p`, `k = floor(ln(u) / ln(1 - p))`
//! avec `u` uniforme. `p == 1` donne toujours 0 sans consommer de tirage.

use super::{GeometricRandom, UniformRandom};
use crate::error::{ChromError, Result};

/// Probabilité par défaut (tract moyen de 9 sites)
pub const DEFAULT_TRACT_PROBABILITY: f64 = 1.0 - 0.9;

#[derive(Debug, Clone)]
pub struct InversionGeometric<U> {
    uniform: U,
    prob: f64,
    log_1_minus_prob: f64,
}

impl<U: UniformRandom> InversionGeometric<U> {
    pub fn new(prob: f64, uniform: U) -> Result<Self> {
        if !(prob > 0.0 && prob <= 1.0) {
            return Err(ChromError::InvalidProbability(prob));
        }
        Ok(Self {
            uniform,
            prob,
            log_1_minus_prob: (1.0 - prob).ln(),
        })
    }

    pub fn probability(&self) -> f64 {
        self.prob
    }
}

impl<U: UniformRandom> GeometricRandom for InversionGeometric<U> {
    fn draw(&mut self) -> u64 {
        if self.prob == 1.0 {
            return 0;
        }
        // ln(0) divergerait
        let u = self.uniform.draw().max(f64::MIN_POSITIVE);
        (u.ln() / self.log_1_minus_prob) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{ChaChaUniform, ScriptedUniform};

    #[test]
    fn test_invalid_probability() {
        for p in [0.0, -0.1, 1.5, f64::NAN] {
            assert!(InversionGeometric::new(p, ChaChaUniform::new(1)).is_err());
        }
    }

    #[test]
    fn test_certain_success_is_zero() {
        let mut g = InversionGeometric::new(1.0, ChaChaUniform::new(1)).unwrap();
        assert_eq!(g.draw(), 0);
    }

    #[test]
    fn test_inversion_values() {
        // p = 0.5: ln(0.3)/ln(0.5) = 1.73 -> 1; ln(0.9)/ln(0.5) = 0.15 -> 0
        let uniform = ScriptedUniform::new(vec![0.3, 0.9, 0.0]);
        let mut g = InversionGeometric::new(0.5, uniform).unwrap();
        assert_eq!(g.draw(), 1);
        assert_eq!(g.draw(), 0);
        assert!(g.draw() > 1000);
    }

    #[test]
    fn test_mean_matches_distribution() {
        // E[k] = (1 - p) / p pour cette paramétrisation
        let p = DEFAULT_TRACT_PROBABILITY;
        let mut g = InversionGeometric::new(p, ChaChaUniform::new(2024)).unwrap();
        let n = 200_000;
        let mean = (0..n).map(|_| g.draw() as f64).sum::<f64>() / n as f64;
        let expected = (1.0 - p) / p;
        assert!((mean - expected).abs() < 0.2, "moyenne {} attendue {}", mean, expected);
    }
}
