//! # CLOB Engine
//!
//! A multi-market, continuous limit-order-book matching engine with
//! price-time priority. The engine is in-process and synchronous: a single
//! caller submits place/cancel requests and observes results both through
//! return codes and through a registered [`events::ExchangeEventObserver`].
//!
//! ## Design
//!
//! The book decomposes into four cooperating structures, leaf first:
//!
//! 1. A price-level queue — resting orders at one price, FIFO.
//! 2. A book side — an ordered `price -> price-level` map, one per side.
//! 3. A market — a bid side paired with an ask side.
//! 4. The [`Engine`](engine::Engine) — the market registry, the monotonic
//!    order-id allocator, the back-reference index that makes cancellation
//!    independent of book size, and the match loop.
//!
//! ## Non-goals
//!
//! No persistence, no networking, no account/position tracking, no order
//! types beyond plain limit orders, no self-trade prevention, no fees, no
//! multi-threaded concurrent submission, no time-in-force expiry, and no
//! floating-point prices — prices and volumes are integer ticks throughout.
//! A caller that needs to share one engine across threads is responsible
//! for wrapping it in its own mutual-exclusion barrier; the engine itself
//! makes no guarantees beyond single-threaded use.

mod book;
mod engine;
mod events;
mod matching;

pub mod prelude;

pub use book::{Order, OrderId, Side};
pub use engine::{CancelResult, Engine, PlaceResult};
pub use events::{ExchangeEventObserver, MatchEvent};
