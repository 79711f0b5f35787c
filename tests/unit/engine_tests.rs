//! General engine-level behavior not tied to one of the worked scenarios.

use super::test_helpers::{Recorded, RecordingObserver};
use clob_engine::{CancelResult, Engine, Order, PlaceResult, Side};
use std::sync::Arc;

#[test]
fn initialise_markets_is_idempotent_on_duplicates() {
    let mut engine = Engine::new();
    engine.initialise_markets(["BTC-USD", "BTC-USD", "ETH-USD"]);
    assert_eq!(engine.place(Order::new("BTC-USD", 1, 1, Side::Bid)), PlaceResult::Placed);
    assert_eq!(engine.place(Order::new("ETH-USD", 1, 1, Side::Bid)), PlaceResult::Placed);
}

#[test]
fn placing_on_unregistered_market_is_rejected_without_side_effects() {
    let mut engine = Engine::new();
    engine.initialise_markets(["BTC-USD"]);
    assert_eq!(
        engine.place(Order::new("DOGE-USD", 1, 1, Side::Bid)),
        PlaceResult::Cancelled
    );
    // No id was ever assigned: id 0 is still unallocated.
    assert_eq!(engine.cancel(0), CancelResult::NotFound);
}

#[test]
fn cancel_on_fresh_engine_is_not_found() {
    let mut engine = Engine::new();
    engine.initialise_markets(["BTC-USD"]);
    assert_eq!(engine.cancel(0), CancelResult::NotFound);
}

#[test]
fn new_order_event_precedes_any_match_event_within_one_place_call() {
    let mut engine = Engine::new();
    engine.initialise_markets(["BTC-USD"]);
    let observer = Arc::new(RecordingObserver::default());
    engine.register_observer(observer.clone());

    engine.place(Order::new("BTC-USD", 10, 1, Side::Bid)); // id 0, resting
    engine.place(Order::new("BTC-USD", 10, 1, Side::Ask)); // id 1, matches immediately

    let events = observer.events();
    // Two New events (one per place call) followed by one Matched event,
    // since the second call's New precedes its own Matched.
    assert_eq!(events.len(), 3);
    assert!(matches!(events[0], Recorded::New(0, _)));
    assert!(matches!(events[1], Recorded::New(1, _)));
    assert!(matches!(events[2], Recorded::Matched(_)));
}

#[test]
fn multiple_observers_are_notified_in_registration_order() {
    let mut engine = Engine::new();
    engine.initialise_markets(["BTC-USD"]);
    let first = Arc::new(RecordingObserver::default());
    let second = Arc::new(RecordingObserver::default());
    engine.register_observer(first.clone());
    engine.register_observer(second.clone());

    engine.place(Order::new("BTC-USD", 10, 1, Side::Bid));

    assert_eq!(first.events().len(), 1);
    assert_eq!(second.events().len(), 1);
}

#[test]
fn cancelling_one_order_does_not_disturb_others_at_the_same_level() {
    let mut engine = Engine::new();
    engine.initialise_markets(["BTC-USD"]);
    engine.place(Order::new("BTC-USD", 10, 1, Side::Bid)); // id 0
    engine.place(Order::new("BTC-USD", 10, 1, Side::Bid)); // id 1
    engine.place(Order::new("BTC-USD", 10, 1, Side::Bid)); // id 2

    assert_eq!(engine.cancel(1), CancelResult::Cancelled);
    assert_eq!(engine.index_len(), 2);

    // id 0 and id 2 still resting: an opposing order large enough to need
    // both fills them in ascending-id order, skipping the cancelled id 1.
    engine.place(Order::new("BTC-USD", 10, 2, Side::Ask));
    assert_eq!(engine.cancel(0), CancelResult::NotFound);
    assert_eq!(engine.cancel(2), CancelResult::NotFound);
}
