//! Core value types shared across the book's leaf structures.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque, monotonically increasing identifier assigned to every resting order.
///
/// Assigned once by [`crate::Engine`](crate::engine::Engine) and never reused,
/// even after the order is fully filled or cancelled.
pub type OrderId = u64;

/// Which side of a market an order rests on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// A buy order. The bid side's best price is its maximum.
    Bid,
    /// A sell order. The ask side's best price is its minimum.
    Ask,
}

impl Side {
    /// The opposite side, used when walking into the resting book during matching.
    #[must_use]
    pub fn opposite(self) -> Side {
        match self {
            Side::Bid => Side::Ask,
            Side::Ask => Side::Bid,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Bid => write!(f, "Bid"),
            Side::Ask => write!(f, "Ask"),
        }
    }
}

/// An inbound placement request, as submitted by the caller.
///
/// Discarded once accepted — the engine materializes its own resting copy
/// (an [`OrderId`] plus a remaining-volume counter inside a
/// [`PriceLevelQueue`](super::price_level::PriceLevelQueue)) and does not
/// retain this struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    /// Name of the market this order targets. Must already be registered
    /// via [`crate::Engine::initialise_markets`](crate::engine::Engine::initialise_markets).
    pub market: String,
    /// Limit price, in integer ticks. Must be non-zero.
    pub price: u64,
    /// Order volume. Must be non-zero.
    pub volume: u64,
    /// Which side of the book this order rests on.
    pub side: Side,
}

impl Order {
    /// Convenience constructor.
    pub fn new(market: impl Into<String>, price: u64, volume: u64, side: Side) -> Self {
        Self {
            market: market.into(),
            price,
            volume,
            side,
        }
    }
}

/// A snapshot of a single resting order: its id and remaining (unfilled) volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestingOrder {
    /// The order's assigned identifier.
    pub id: OrderId,
    /// Volume not yet matched away. Strictly positive while resting.
    pub remaining: u64,
}
