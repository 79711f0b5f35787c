//! The match loop: the heart of the engine.
//!
//! Invoked once, after a successful placement, on the market that received
//! the new order. Walks the crossing price levels in best-price, then
//! time-priority order, emitting one [`MatchEvent`] per fill until the book
//! is no longer crossed or one side empties.

use crate::book::Side;
use crate::engine::Engine;
use crate::events::{self, MatchEvent};
use tracing::debug;

impl Engine {
    /// Run the match loop on `market_name`. Returns whether any match occurred.
    pub(crate) fn run_match_loop(&mut self, market_name: &str) -> bool {
        let mut matched_any = false;

        loop {
            let (bid_price, ask_price, bid_front, ask_front) = {
                let market = self.market_mut(market_name);
                let Some(bid_price) = market.bids.best_price() else {
                    break;
                };
                let Some(ask_price) = market.asks.best_price() else {
                    break;
                };
                if bid_price < ask_price {
                    break;
                }

                let bid_front = market
                    .bids
                    .level_mut(bid_price)
                    .and_then(|level| level.front())
                    .expect("best bid price always has a non-empty level");
                let ask_front = market
                    .asks
                    .level_mut(ask_price)
                    .and_then(|level| level.front())
                    .expect("best ask price always has a non-empty level");

                (bid_price, ask_price, bid_front, ask_front)
            };

            // The reported side and execution price both key off whichever
            // front holds the smaller id: that is the order that was already
            // resting when the cross was created, since the order just
            // placed always holds the larger id of the pair (the book is
            // never left crossed between calls, so a new cross always
            // involves the newly placed order's own level). The convention
            // this engine follows names this older, passive side —
            // inverted from chronology, where "aggressor" would suggest
            // the larger id.
            let (aggressor_side, price) = if bid_front.id < ask_front.id {
                (Side::Bid, bid_price)
            } else {
                (Side::Ask, ask_price)
            };
            let volume = bid_front.remaining.min(ask_front.remaining);

            let (bid_remaining, ask_remaining) = {
                let market = self.market_mut(market_name);

                let bid_level = market
                    .bids
                    .level_mut(bid_price)
                    .expect("bid level located above");
                let bid_remaining = bid_level.decrement(bid_front.id, volume);
                if bid_remaining == 0 {
                    bid_level.remove(bid_front.id);
                }
                market.bids.drop_if_empty(bid_price);

                let ask_level = market
                    .asks
                    .level_mut(ask_price)
                    .expect("ask level located above");
                let ask_remaining = ask_level.decrement(ask_front.id, volume);
                if ask_remaining == 0 {
                    ask_level.remove(ask_front.id);
                }
                market.asks.drop_if_empty(ask_price);

                (bid_remaining, ask_remaining)
            };

            if bid_remaining == 0 {
                self.untrack(bid_front.id);
            }
            if ask_remaining == 0 {
                self.untrack(ask_front.id);
            }

            matched_any = true;
            let event = MatchEvent {
                market: market_name.to_string(),
                bid_order_id: bid_front.id,
                ask_order_id: ask_front.id,
                price,
                volume,
                side: aggressor_side,
            };
            debug!(
                market = %event.market, bid = event.bid_order_id, ask = event.ask_order_id,
                price = event.price, volume = event.volume, side = %event.side,
                "orders matched"
            );
            events::dispatch_matched(self.observers(), &event);
        }

        matched_any
    }
}
