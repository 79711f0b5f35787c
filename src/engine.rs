//! The top-level `Engine`: market registry, order-id allocator, the
//! back-reference index that makes cancellation independent of book size,
//! and the observer list. See [`crate::matching`] for the match loop itself.

use crate::book::{Market, Order, OrderId, Side};
use crate::events::{self, ExchangeEventObserver};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Where a resting order lives, so `cancel` can find it without scanning
/// every market. A tagged record rather than a pointer into the book,
/// since we cannot hold a raw pointer into a `BTreeMap` value that
/// removal may invalidate.
#[derive(Debug, Clone)]
struct OrderLocation {
    market: String,
    side: Side,
    price: u64,
}

/// Outcome of [`Engine::place`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceResult {
    /// Accepted and resting; did not cross the book.
    Placed,
    /// Rejected before entering the book: unknown market, zero price, or zero volume.
    Cancelled,
    /// Accepted and produced at least one match.
    Matched,
}

/// Outcome of [`Engine::cancel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelResult {
    /// The order existed and has been removed.
    Cancelled,
    /// No resting order has this id.
    NotFound,
}

/// A multi-market, single-threaded, synchronous limit order book matching engine.
///
/// Owns every market's bid/ask sides, assigns [`OrderId`]s, and runs the
/// price-time-priority match loop after each accepted placement. All public
/// operations run to completion before returning — there is no internal
/// concurrency.
pub struct Engine {
    markets: HashMap<String, Market>,
    next_order_id: OrderId,
    index: HashMap<OrderId, OrderLocation>,
    observers: Vec<Arc<dyn ExchangeEventObserver>>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Create an engine with no markets and no observers.
    pub fn new() -> Self {
        Self {
            markets: HashMap::new(),
            next_order_id: 0,
            index: HashMap::new(),
            observers: Vec::new(),
        }
    }

    /// Register each name as a market with empty bid and ask sides.
    ///
    /// Idempotent: a name already registered (including a duplicate within
    /// the same call) is a no-op. Must be called before any `place`/`cancel`
    /// referencing the market. Emits no events.
    pub fn initialise_markets<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            let name = name.into();
            self.markets.entry(name.clone()).or_insert_with(|| {
                debug!(market = %name, "registered market");
                Market::new()
            });
        }
    }

    /// Register an observer to receive future events, in addition to any
    /// already registered. Observers are never removed once added and are
    /// notified in the order they were registered.
    pub fn register_observer(&mut self, observer: Arc<dyn ExchangeEventObserver>) {
        self.observers.push(observer);
    }

    /// Submit a new limit order.
    ///
    /// Returns [`PlaceResult::Cancelled`] without assigning an id or emitting
    /// any event if the market is unregistered, `order.price == 0`, or
    /// `order.volume == 0`. Otherwise the order is appended to its price
    /// level (creating the level if absent), assigned the next id, and a
    /// [`ExchangeEventObserver::on_new_order`] event is dispatched *before*
    /// the match loop runs. Returns [`PlaceResult::Matched`] if the match
    /// loop produced at least one fill, [`PlaceResult::Placed`] otherwise.
    pub fn place(&mut self, order: Order) -> PlaceResult {
        if order.price == 0 || order.volume == 0 {
            warn!(market = %order.market, price = order.price, volume = order.volume,
                "rejected placement: zero price or volume");
            return PlaceResult::Cancelled;
        }
        if !self.markets.contains_key(&order.market) {
            warn!(market = %order.market, "rejected placement: unknown market");
            return PlaceResult::Cancelled;
        }

        let id = self.next_order_id;
        self.next_order_id += 1;

        let market = self
            .markets
            .get_mut(&order.market)
            .expect("checked above");
        market
            .side_mut(order.side)
            .get_or_insert(order.price)
            .push_back(id, order.volume);

        self.index.insert(
            id,
            OrderLocation {
                market: order.market.clone(),
                side: order.side,
                price: order.price,
            },
        );

        debug!(order_id = id, market = %order.market, price = order.price,
            volume = order.volume, side = %order.side, "new order accepted");
        events::dispatch_new_order(&self.observers, id, &order);

        if self.run_match_loop(&order.market) {
            PlaceResult::Matched
        } else {
            PlaceResult::Placed
        }
    }

    /// Cancel a resting order by id.
    ///
    /// Returns [`CancelResult::NotFound`] if no resting order has this id.
    /// Otherwise removes it from its price level (and that level from its
    /// side, if now empty), removes its back-reference entry, dispatches
    /// [`ExchangeEventObserver::on_cancelled_order`], and returns
    /// [`CancelResult::Cancelled`]. Never triggers matching.
    pub fn cancel(&mut self, order_id: OrderId) -> CancelResult {
        let Some(location) = self.index.remove(&order_id) else {
            return CancelResult::NotFound;
        };

        let market = self
            .markets
            .get_mut(&location.market)
            .expect("back-reference index points at a registered market");
        market
            .side_mut(location.side)
            .remove_order(location.price, order_id);

        debug!(order_id, market = %location.market, "order cancelled");
        events::dispatch_cancelled(&self.observers, order_id);
        CancelResult::Cancelled
    }

    pub(crate) fn market_mut(&mut self, name: &str) -> &mut Market {
        self.markets.get_mut(name).expect("market must be registered")
    }

    pub(crate) fn observers(&self) -> &[Arc<dyn ExchangeEventObserver>] {
        &self.observers
    }

    pub(crate) fn untrack(&mut self, order_id: OrderId) {
        self.index.remove(&order_id);
    }

    #[cfg(test)]
    pub(crate) fn index_len(&self) -> usize {
        self.index.len()
    }
}
