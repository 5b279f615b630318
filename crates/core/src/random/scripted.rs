//! Sources rejouant une suite de valeurs fixée
//!
//! Servent à rejouer un scénario précis (tests, reproduction d'un bug):
//! les valeurs sont renvoyées dans l'ordre puis la suite recommence.

use super::{GeometricRandom, UniformRandom};

#[derive(Debug, Clone)]
pub struct ScriptedUniform {
    values: Vec<f64>,
    pos: usize,
}

impl ScriptedUniform {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, pos: 0 }
    }

    /// Nombre de tirages effectués
    pub fn draws(&self) -> usize {
        self.pos
    }
}

impl UniformRandom for ScriptedUniform {
    fn draw(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.pos % self.values.len()];
        self.pos += 1;
        value
    }
}

#[derive(Debug, Clone)]
pub struct ScriptedGeometric {
    values: Vec<u64>,
    pos: usize,
}

impl ScriptedGeometric {
    pub fn new(values: Vec<u64>) -> Self {
        Self { values, pos: 0 }
    }
}

impl GeometricRandom for ScriptedGeometric {
    fn draw(&mut self) -> u64 {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.pos % self.values.len()];
        self.pos += 1;
        value
    }
}
