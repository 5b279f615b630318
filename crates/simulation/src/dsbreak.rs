//! Cassures double brin, au plus une par tick
//!
//! Les cassures ont lieu entre deux bases: le site 0 est exclu, les sites
//! possibles sont `1..length`. Chaque cassure est ajoutée à l'historique et
//! à la file de réparation.

use crate::config::check_rate;
use crate::queue::RepairQueue;
use gc_core::{BreakEvent, EventLog, Result, SequenceModel, UniformRandom};
use tracing::debug;

/// Premier site où une cassure peut avoir lieu
pub const MIN_BREAK_SITE: usize = 1;

pub struct BreakProcess {
    rate: f64,
    did_break: bool,
    uniform: Box<dyn UniformRandom>,
    log: EventLog<BreakEvent>,
}

impl BreakProcess {
    /// `rate` est le taux de cassure (conversion) par site et par tick,
    /// fini et positif ou nul
    pub fn new(rate: f64, uniform: Box<dyn UniformRandom>) -> Result<Self> {
        check_rate("conversion_rate", rate)?;
        Ok(Self {
            rate,
            did_break: false,
            uniform,
            log: EventLog::new(),
        })
    }

    /// Exécute un tick: tire une éventuelle cassure et la met en file
    pub fn check(
        &mut self,
        sequence: &SequenceModel,
        queue: &mut RepairQueue,
    ) -> Option<BreakEvent> {
        let num_sites = sequence.size().saturating_sub(MIN_BREAK_SITE);
        let threshold = self.rate * num_sites as f64;

        // NaN ne déclenche rien; un chromosome d'un site n'a aucun site cassable
        let draw = self.uniform.draw();
        if !(draw < threshold) || num_sites == 0 {
            self.did_break = false;
            return None;
        }

        let offset = ((self.uniform.draw() * num_sites as f64) as usize).min(num_sites - 1);
        let site = offset + MIN_BREAK_SITE;

        let event = BreakEvent {
            event: self.log.next_index(),
            threshold,
            draw,
            site,
        };
        self.log.push(event);
        queue.push(event);
        self.did_break = true;

        debug!(site, threshold, draw, "cassure double brin");
        Some(event)
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Vrai si le dernier tick a produit une cassure
    pub fn did_break(&self) -> bool {
        self.did_break
    }

    pub fn break_count(&self) -> usize {
        self.log.len()
    }

    pub fn log(&self) -> &EventLog<BreakEvent> {
        &self.log
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gc_core::{ChaChaUniform, ChromError, ScriptedUniform};

    #[test]
    fn test_break_queued_and_logged() {
        // seuil = 0.01 * 10 = 0.1
        let seq = SequenceModel::new(11);
        let mut queue = RepairQueue::new();
        let draws = vec![0.05, 0.0];
        let mut p = BreakProcess::new(0.01, Box::new(ScriptedUniform::new(draws))).unwrap();

        let event = p.check(&seq, &mut queue).unwrap();
        assert_eq!(event.site, MIN_BREAK_SITE);
        assert_eq!(queue.len(), 1);
        assert_eq!(p.break_count(), 1);
        assert!(p.did_break());
    }

    #[test]
    fn test_no_break_above_threshold() {
        let seq = SequenceModel::new(11);
        let mut queue = RepairQueue::new();
        let mut p = BreakProcess::new(0.01, Box::new(ScriptedUniform::new(vec![0.5]))).unwrap();
        assert!(p.check(&seq, &mut queue).is_none());
        assert!(!p.did_break());
        assert!(queue.is_empty());
    }

    #[test]
    fn test_last_site_reachable() {
        let seq = SequenceModel::new(11);
        let mut queue = RepairQueue::new();
        let draws = vec![0.0, 0.999_999];
        let mut p = BreakProcess::new(0.01, Box::new(ScriptedUniform::new(draws))).unwrap();
        assert_eq!(p.check(&seq, &mut queue).map(|e| e.site), Some(10));
    }

    #[test]
    fn test_single_site_chromosome_never_breaks() {
        let seq = SequenceModel::new(1);
        let mut queue = RepairQueue::new();
        let mut p = BreakProcess::new(0.5, Box::new(ChaChaUniform::new(4))).unwrap();
        for _ in 0..1000 {
            assert!(p.check(&seq, &mut queue).is_none());
        }
    }

    #[test]
    fn test_sites_within_domain() {
        let seq = SequenceModel::new(50);
        let mut queue = RepairQueue::new();
        let mut p = BreakProcess::new(0.02, Box::new(ChaChaUniform::new(17))).unwrap();
        for _ in 0..10_000 {
            p.check(&seq, &mut queue);
            queue.pop();
        }
        assert!(p.break_count() > 0);
        assert!(p.log().iter().all(|e| (1..50).contains(&e.site)));
    }

    #[test]
    fn test_invalid_rate_rejected() {
        for rate in [f64::NAN, f64::INFINITY, -1.0] {
            let result = BreakProcess::new(rate, Box::new(ChaChaUniform::new(1)));
            assert!(matches!(
                result,
                Err(ChromError::InvalidRate {
                    name: "conversion_rate",
                    ..
                })
            ));
        }
    }

    #[test]
    fn test_nan_draw_on_single_site_is_quiet() {
        let seq = SequenceModel::new(1);
        let mut queue = RepairQueue::new();
        let draws = vec![f64::NAN, 0.0];
        let mut p = BreakProcess::new(0.5, Box::new(ScriptedUniform::new(draws))).unwrap();
        for _ in 0..10 {
            assert!(p.check(&seq, &mut queue).is_none());
        }
        assert!(!p.did_break());
        assert!(queue.is_empty());
    }
}
