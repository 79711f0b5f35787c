//! A single side (bid or ask) of one market's order book.

use super::price_level::PriceLevelQueue;
use super::types::{OrderId, Side};
use std::collections::BTreeMap;

/// An ordered map from price tick to [`PriceLevelQueue`].
///
/// The bid side's best price is its maximum key; the ask side's best price
/// is its minimum key. A plain `BTreeMap` gives both directions for free
/// via `.keys().next()` / `.keys().next_back()`, satisfying the "ordered
/// map" requirement without needing a concurrent skip-list — not a
/// concern here, since the engine is single-threaded.
#[derive(Debug)]
pub(crate) struct BookSide {
    side: Side,
    levels: BTreeMap<u64, PriceLevelQueue>,
}

impl BookSide {
    pub(crate) fn new(side: Side) -> Self {
        Self {
            side,
            levels: BTreeMap::new(),
        }
    }

    /// The best (highest bid / lowest ask) price currently resting on this side.
    pub(crate) fn best_price(&self) -> Option<u64> {
        match self.side {
            Side::Bid => self.levels.keys().next_back().copied(),
            Side::Ask => self.levels.keys().next().copied(),
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Get the level at `price`, creating an empty one if absent.
    pub(crate) fn get_or_insert(&mut self, price: u64) -> &mut PriceLevelQueue {
        self.levels.entry(price).or_insert_with(PriceLevelQueue::new)
    }

    pub(crate) fn level_mut(&mut self, price: u64) -> Option<&mut PriceLevelQueue> {
        self.levels.get_mut(&price)
    }

    /// Remove `order_id` from the level at `price`, dropping the level itself
    /// if that empties it — no empty level remains addressable by price.
    pub(crate) fn remove_order(&mut self, price: u64, order_id: OrderId) -> Option<u64> {
        let level = self.levels.get_mut(&price)?;
        let removed = level.remove(order_id);
        if level.is_empty() {
            self.levels.remove(&price);
        }
        removed
    }

    /// Drop the level at `price` if it has become empty. Called after matching
    /// decrements orders in place rather than through [`Self::remove_order`].
    pub(crate) fn drop_if_empty(&mut self, price: u64) {
        if self.levels.get(&price).is_some_and(PriceLevelQueue::is_empty) {
            self.levels.remove(&price);
        }
    }

    #[cfg(test)]
    pub(crate) fn level_len(&self, price: u64) -> Option<usize> {
        self.levels.get(&price).map(PriceLevelQueue::len)
    }

    #[cfg(test)]
    pub(crate) fn level_count(&self) -> usize {
        self.levels.len()
    }
}
