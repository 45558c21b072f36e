//! # Event Bus Module
//!
//! Typed publish/subscribe used by the editor components to notify the UI
//! layer. Each component owns its own [`EventBus`] instance; there is no
//! global bus.
//!
//! ## Overview
//!
//! - Publishers emit typed events without knowing subscribers
//! - Subscribers receive every event ([`EventFilter::All`]) or only the kinds
//!   they name ([`EventFilter::Kinds`])
//! - Subscriptions are explicit: `subscribe` returns a [`SubscriptionId`] that
//!   must be passed to `unsubscribe`
//! - Async consumers can poll a broadcast receiver instead of registering a
//!   handler
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pagekit_core::event_bus::{EventBus, EventFilter, SelectionEvent, SelectionEventKind};
//!
//! let bus: EventBus<SelectionEvent<u32>> = EventBus::new();
//! let subscription = bus.subscribe(
//!     EventFilter::Kinds(vec![SelectionEventKind::AllSelected]),
//!     |event| println!("{}", event.description()),
//! );
//!
//! bus.publish(SelectionEvent::AllSelected).ok();
//! bus.unsubscribe(subscription);
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
