//! File des cassures en attente de réparation
//!
//! Distincte du journal des cassures: le journal est un historique permanent,
//! la file ne contient que le travail restant et se vide à chaque tick.

use gc_core::{BreakEvent, ChromError, Result};
use tracing::error;

/// Pile LIFO des cassures non réparées
#[derive(Debug, Clone, Default)]
pub struct RepairQueue {
    pending: Vec<BreakEvent>,
}

impl RepairQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: BreakEvent) {
        self.pending.push(event);
    }

    /// Retire la cassure la plus récente
    pub fn pop(&mut self) -> Option<BreakEvent> {
        self.pending.pop()
    }

    pub fn peek(&self) -> Option<&BreakEvent> {
        self.pending.last()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Retire l'unique cassure en attente
    ///
    /// Plus d'une cassure en attente est une charge non supportée: l'erreur
    /// est renvoyée avant toute modification, la file reste intacte.
    pub fn take_single(&mut self) -> Result<Option<BreakEvent>> {
        if self.pending.len() > 1 {
            error!(
                pending = self.pending.len(),
                "plus d'une cassure double brin à réparer, non implémenté"
            );
            return Err(ChromError::MultipleBreaksPending {
                pending: self.pending.len(),
            });
        }
        Ok(self.pending.pop())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(event: u64, site: usize) -> BreakEvent {
        BreakEvent {
            event,
            threshold: 0.1,
            draw: 0.05,
            site,
        }
    }

    #[test]
    fn test_lifo_order() {
        let mut queue = RepairQueue::new();
        queue.push(event(0, 5));
        queue.push(event(1, 8));
        assert_eq!(queue.pop().map(|e| e.site), Some(8));
        assert_eq!(queue.pop().map(|e| e.site), Some(5));
        assert!(queue.pop().is_none());
    }

    #[test]
    fn test_take_single() {
        let mut queue = RepairQueue::new();
        assert!(queue.take_single().unwrap().is_none());
        queue.push(event(0, 5));
        assert_eq!(queue.take_single().unwrap().map(|e| e.site), Some(5));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_take_single_rejects_two_pending() {
        let mut queue = RepairQueue::new();
        queue.push(event(0, 5));
        queue.push(event(1, 8));
        assert!(matches!(
            queue.take_single(),
            Err(ChromError::MultipleBreaksPending { pending: 2 })
        ));
        assert_eq!(queue.len(), 2);
    }
}
