//! Shared test observer that records every dispatched event in arrival order.

use clob_engine::{ExchangeEventObserver, MatchEvent, Order, OrderId};
use std::sync::{Mutex, Once};

static INIT_TRACING: Once = Once::new();

/// Install a tracing subscriber once per test binary, so `cargo test --
/// --nocapture` shows the engine's own trace output alongside assertions.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .init();
    });
}

/// One recorded event, tagged by kind, in the order it was dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recorded {
    New(OrderId, Order),
    Cancelled(OrderId),
    Matched(MatchEvent),
}

/// An observer that records events instead of acting on them, so tests can
/// assert on the exact dispatched sequence and ordering.
#[derive(Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<Recorded>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<Recorded> {
        self.events.lock().unwrap().clone()
    }
}

impl ExchangeEventObserver for RecordingObserver {
    fn on_new_order(&self, order_id: OrderId, order: &Order) {
        self.events
            .lock()
            .unwrap()
            .push(Recorded::New(order_id, order.clone()));
    }

    fn on_cancelled_order(&self, order_id: OrderId) {
        self.events.lock().unwrap().push(Recorded::Cancelled(order_id));
    }

    fn on_order_matched(&self, event: &MatchEvent) {
        self.events.lock().unwrap().push(Recorded::Matched(event.clone()));
    }
}
