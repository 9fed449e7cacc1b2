//! Bounded intent queue drained at tick start.
//!
//! The single serialization point between input delivery and tick execution:
//! key events push intents between ticks, and the loop takes the whole batch
//! before advancing the simulation, so intent application never interleaves
//! with an in-progress tick.

use arrayvec::ArrayVec;

use crate::types::GameAction;

/// Intents a single tick can absorb; later presses within one tick are shed.
pub const MAX_PENDING_INTENTS: usize = 8;

#[derive(Debug, Clone, Default)]
pub struct IntentQueue {
    pending: ArrayVec<GameAction, MAX_PENDING_INTENTS>,
}

impl IntentQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer an intent; returns `false` when the batch is full.
    pub fn push(&mut self, action: GameAction) -> bool {
        self.pending.try_push(action).is_ok()
    }

    /// Take the pending batch, leaving the queue empty.
    pub fn take(&mut self) -> ArrayVec<GameAction, MAX_PENDING_INTENTS> {
        std::mem::take(&mut self.pending)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_drains_in_push_order() {
        let mut q = IntentQueue::new();
        assert!(q.push(GameAction::MoveLeft));
        assert!(q.push(GameAction::MoveRight));
        let batch: Vec<_> = q.take().into_iter().collect();
        assert_eq!(batch, vec![GameAction::MoveLeft, GameAction::MoveRight]);
        assert!(q.is_empty());
    }

    #[test]
    fn overflow_is_shed_not_grown() {
        let mut q = IntentQueue::new();
        for _ in 0..MAX_PENDING_INTENTS {
            assert!(q.push(GameAction::MoveLeft));
        }
        assert!(!q.push(GameAction::MoveRight));
        assert_eq!(q.take().len(), MAX_PENDING_INTENTS);
    }
}
