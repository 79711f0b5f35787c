//! A single named market: the pairing of a bid side and an ask side.

use super::book_side::BookSide;
use super::types::Side;

/// One trading venue within the engine, identified by name in the engine's
/// market registry. Owns its own bid and ask sides; never destroyed once
/// registered.
#[derive(Debug)]
pub(crate) struct Market {
    pub(crate) bids: BookSide,
    pub(crate) asks: BookSide,
}

impl Market {
    pub(crate) fn new() -> Self {
        Self {
            bids: BookSide::new(Side::Bid),
            asks: BookSide::new(Side::Ask),
        }
    }

    pub(crate) fn side_mut(&mut self, side: Side) -> &mut BookSide {
        match side {
            Side::Bid => &mut self.bids,
            Side::Ask => &mut self.asks,
        }
    }

    /// Whether the book is currently crossed (best bid ≥ best ask).
    ///
    /// `false` whenever either side is empty — a one-sided book can never
    /// be crossed.
    pub(crate) fn is_crossed(&self) -> bool {
        match (self.bids.best_price(), self.asks.best_price()) {
            (Some(bid), Some(ask)) => bid >= ask,
            _ => false,
        }
    }
}
