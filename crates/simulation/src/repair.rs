//! Politiques de réparation des cassures double brin
//!
//! Deux variantes interchangeables vident la même file, en ordre LIFO, et
//! n'acceptent qu'une seule cassure en attente par tick:
//!
//! - [`MinimalRepair`]: retire la cassure sans modifier la séquence
//!   (tract de longueur 0).
//! - [`TractRepair`]: tire une direction puis une longueur de tract
//!   géométrique, et rend homozygotes tous les sites du tract, extrémité
//!   comprise. Un tract qui dépasse le chromosome est tronqué au bord.

use crate::queue::RepairQueue;
use gc_core::{GeometricRandom, Result, SequenceModel, SiteState, UniformRandom};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Variante de réparation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepairKind {
    Minimal,
    #[default]
    Tract,
}

/// Sens de progression du tract de conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Un tirage `< 0.5` donne la gauche
    pub fn from_draw(draw: f64) -> Self {
        if draw < 0.5 {
            Direction::Left
        } else {
            Direction::Right
        }
    }

    pub fn sign(self) -> i64 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// Résultat d'une réparation (diagnostic, hors journal)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepairOutcome {
    /// Site de la cassure réparée
    pub site: usize,
    /// `None` pour la réparation minimale
    pub direction: Option<Direction>,
    pub tract_length: u64,
    /// Extrémité incluse du tract, égale à `site` sans conversion
    pub tract_end: usize,
    /// Le tract a été ramené au bord du chromosome
    pub truncated: bool,
    /// Sites hétérozygotes rendus homozygotes
    pub converted: usize,
}

impl RepairOutcome {
    fn untouched(site: usize, direction: Option<Direction>, tract_length: u64) -> Self {
        Self {
            site,
            direction,
            tract_length,
            tract_end: site,
            truncated: false,
            converted: 0,
        }
    }
}

/// Politique de réparation appliquée à chaque tick
pub trait RepairPolicy {
    fn kind(&self) -> RepairKind;

    /// Vide la file; sans effet si elle est vide
    fn repair(
        &mut self,
        sequence: &mut SequenceModel,
        queue: &mut RepairQueue,
    ) -> Result<Option<RepairOutcome>>;
}

/// Réparation sans conversion
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimalRepair;

impl RepairPolicy for MinimalRepair {
    fn kind(&self) -> RepairKind {
        RepairKind::Minimal
    }

    fn repair(
        &mut self,
        _sequence: &mut SequenceModel,
        queue: &mut RepairQueue,
    ) -> Result<Option<RepairOutcome>> {
        let Some(event) = queue.take_single()? else {
            return Ok(None);
        };
        debug!(site = event.site, "réparation minimale");
        Ok(Some(RepairOutcome::untouched(event.site, None, 0)))
    }
}

/// Réparation par tract de conversion
pub struct TractRepair {
    direction: Box<dyn UniformRandom>,
    tract: Box<dyn GeometricRandom>,
}

impl TractRepair {
    pub fn new(direction: Box<dyn UniformRandom>, tract: Box<dyn GeometricRandom>) -> Self {
        Self { direction, tract }
    }
}

impl RepairPolicy for TractRepair {
    fn kind(&self) -> RepairKind {
        RepairKind::Tract
    }

    fn repair(
        &mut self,
        sequence: &mut SequenceModel,
        queue: &mut RepairQueue,
    ) -> Result<Option<RepairOutcome>> {
        let Some(event) = queue.take_single()? else {
            return Ok(None);
        };

        // Ordre des tirages: direction puis longueur, même si la longueur est nulle
        let direction = Direction::from_draw(self.direction.draw());
        let tract_length = self.tract.draw();
        if tract_length == 0 {
            return Ok(Some(RepairOutcome::untouched(
                event.site,
                Some(direction),
                0,
            )));
        }

        let (tract_end, truncated) =
            tract_end(event.site, tract_length, direction, sequence.size());
        let (lo, hi) = if tract_end < event.site {
            (tract_end, event.site)
        } else {
            (event.site, tract_end)
        };

        let mut converted = 0;
        for i in lo..=hi {
            if sequence.get(i).is_heterozygous() {
                converted += 1;
            }
            sequence.set(i, SiteState::Homozygous);
        }

        debug!(
            site = event.site,
            dir = direction.sign(),
            tract_length,
            tract_end,
            truncated,
            converted,
            "réparation par conversion"
        );
        Ok(Some(RepairOutcome {
            site: event.site,
            direction: Some(direction),
            tract_length,
            tract_end,
            truncated,
            converted,
        }))
    }
}

/// Extrémité du tract, ramenée dans `[0, length - 1]`
///
/// Renvoie aussi si une troncature a eu lieu.
pub fn tract_end(
    site: usize,
    tract_length: u64,
    direction: Direction,
    length: usize,
) -> (usize, bool) {
    let last = length.saturating_sub(1) as i128;
    let end = site as i128 + tract_length as i128 * direction.sign() as i128;
    if end < 0 {
        (0, true)
    } else if end > last {
        (last as usize, true)
    } else {
        (end as usize, false)
    }
}
