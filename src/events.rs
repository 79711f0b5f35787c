//! Event payloads and the observer capability set.
//!
//! A plain event-data struct paired with a listener trait, covering the
//! three fixed event kinds this engine emits.

use crate::book::{Order, OrderId, Side};
use serde::{Deserialize, Serialize};

/// A completed match between a resting bid and a resting ask.
///
/// Transient: built only to report a fill, never stored by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchEvent {
    /// Market the match occurred in.
    pub market: String,
    /// Id of the bid-side order involved in this fill.
    pub bid_order_id: OrderId,
    /// Id of the ask-side order involved in this fill.
    pub ask_order_id: OrderId,
    /// Execution price, in integer ticks: the level price of whichever side
    /// of the crossing pair holds the smaller order id.
    pub price: u64,
    /// Volume executed in this single fill.
    pub volume: u64,
    /// The side of the order that caused the crossing (the aggressor).
    pub side: Side,
}

/// The capability set an observer implements to watch engine activity.
///
/// Three callbacks, dispatched synchronously and in registration order.
/// Default no-op bodies let an observer implement only the callbacks it
/// cares about — any trait object implementing this trait is a valid
/// observer.
///
/// Payloads are borrowed: an observer that needs to retain data past the
/// callback must copy it.
pub trait ExchangeEventObserver: Send + Sync {
    /// A new order was accepted and is now resting in the book.
    fn on_new_order(&self, _order_id: OrderId, _order: &Order) {}

    /// An order was removed from the book by explicit cancellation.
    fn on_cancelled_order(&self, _order_id: OrderId) {}

    /// Two resting orders matched.
    fn on_order_matched(&self, _event: &MatchEvent) {}
}

/// Dispatch a new-order notification to every observer, in registration order.
pub(crate) fn dispatch_new_order(
    observers: &[std::sync::Arc<dyn ExchangeEventObserver>],
    order_id: OrderId,
    order: &Order,
) {
    for observer in observers {
        observer.on_new_order(order_id, order);
    }
}

/// Dispatch a cancellation notification to every observer, in registration order.
pub(crate) fn dispatch_cancelled(
    observers: &[std::sync::Arc<dyn ExchangeEventObserver>],
    order_id: OrderId,
) {
    for observer in observers {
        observer.on_cancelled_order(order_id);
    }
}

/// Dispatch a match notification to every observer, in registration order.
pub(crate) fn dispatch_matched(
    observers: &[std::sync::Arc<dyn ExchangeEventObserver>],
    event: &MatchEvent,
) {
    for observer in observers {
        observer.on_order_matched(event);
    }
}
