//! Flux uniforme ChaCha8

use super::UniformRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Générateur uniforme reproductible basé sur ChaCha8
#[derive(Debug, Clone)]
pub struct ChaChaUniform {
    rng: ChaCha8Rng,
}

impl ChaChaUniform {
    /// Crée un générateur sur le flux 0
    pub fn new(seed: u64) -> Self {
        Self::with_stream(seed, 0)
    }

    /// Crée un générateur sur un flux indépendant
    pub fn with_stream(seed: u64, stream: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        rng.set_stream(stream);
        Self { rng }
    }
}

impl UniformRandom for ChaChaUniform {
    fn draw(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}
