//! Admission events: types and broadcast bus.
//!
//! ## Contents
//! - [`EventKind`], [`Event`] event classification and payload metadata
//! - [`Bus`], [`Subscription`] broadcast fan-out, optionally narrowed by kind
//!
//! ## Quick reference
//! - **Publishers**: `Gate::submit`, the remediation dispatcher, `Defer`.
//! - **Consumers**: whoever calls `Gate::subscribe()` or `Gate::subscribe_kinds()`.

mod bus;
mod event;

pub use bus::{Bus, Subscription};
pub use event::{Event, EventKind};
