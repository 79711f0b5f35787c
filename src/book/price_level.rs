//! The price-level queue: the book's leaf structure.
//!
//! Holds every resting order at a single price, preserving insertion order.
//! Since [`OrderId`]s are allocated strictly increasing by the engine, FIFO
//! insertion order and ascending-`OrderId` order coincide — this is how the
//! queue keeps time priority within a level without needing a comparator.

use super::types::{OrderId, RestingOrder};
use std::collections::{HashMap, VecDeque};

/// An ordered sequence of `(OrderId, remaining-volume)` pairs at one price.
///
/// Internally a FIFO of ids (for traversal order) paired with a hash map of
/// remaining volumes (for O(1) lookup/update): a queue to preserve fill
/// order and a hash map keyed by order id to avoid scanning for volume
/// updates.
#[derive(Debug, Default)]
pub(crate) struct PriceLevelQueue {
    order: VecDeque<OrderId>,
    remaining: HashMap<OrderId, u64>,
}

impl PriceLevelQueue {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Insert a new order at the back of the queue.
    ///
    /// `id` must be strictly larger than every id already in this queue —
    /// guaranteed by the engine's monotonic counter.
    pub(crate) fn push_back(&mut self, id: OrderId, volume: u64) {
        debug_assert!(volume > 0, "resting orders must have positive volume");
        debug_assert!(
            self.order.back().is_none_or(|&last| id > last),
            "order ids within a level must be inserted in ascending order"
        );
        self.order.push_back(id);
        self.remaining.insert(id, volume);
    }

    /// The earliest-resting order at this level, if any.
    pub(crate) fn front(&self) -> Option<RestingOrder> {
        let id = *self.order.front()?;
        let remaining = *self.remaining.get(&id)?;
        Some(RestingOrder { id, remaining })
    }

    /// Reduce the remaining volume of `id` by `by`, returning the new remaining volume.
    ///
    /// `id` must currently be resting in this queue with remaining volume `>= by`.
    pub(crate) fn decrement(&mut self, id: OrderId, by: u64) -> u64 {
        let remaining = self
            .remaining
            .get_mut(&id)
            .expect("decrement called on an id not resting in this level");
        debug_assert!(*remaining >= by, "cannot decrement below zero");
        *remaining -= by;
        *remaining
    }

    /// Remove `id` from this level entirely, wherever it sits in the queue.
    ///
    /// Used both for explicit cancellation (which may target any order in the
    /// level) and for removing a fully-filled order during matching (which is
    /// always the front, but the same operation covers both).
    pub(crate) fn remove(&mut self, id: OrderId) -> Option<u64> {
        let removed = self.remaining.remove(&id)?;
        self.order.retain(|&oid| oid != id);
        Some(removed)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.order.len()
    }
}
