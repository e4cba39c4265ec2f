//! Battle events and observation.
//!
//! ## Key Components
//!
//! - [`BattleEvent`]: What a committed command changed
//! - [`BattleObserver`]: Subscriber notified after each committed command
//! - [`ObserverList`]: Subscription bookkeeping used by the engine

mod event;
mod observer;

pub use event::BattleEvent;
pub use observer::{BattleObserver, ObserverId, ObserverList};
