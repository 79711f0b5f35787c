//! Convenience re-export of the crate's essential types.
//!
//! ```
//! use clob_engine::prelude::*;
//! ```

pub use crate::{CancelResult, Engine, ExchangeEventObserver, MatchEvent, Order, OrderId, PlaceResult, Side};
