//! # Jobs and the dispatch primitive.
//!
//! This module provides the two seams around the gate:
//! - [`Job`] - inbound capability: names the work and provides enqueuing rules
//! - [`Dispatch`] - outbound primitive: hands admitted work to a queue
//! - [`DispatchFn`] - closure-backed dispatch
//! - [`QueueDispatch`] - bounded `mpsc` dispatch with a live depth gauge

mod dispatch;
mod job;
mod queue;

pub use dispatch::{Dispatch, DispatchFn, DispatchRef};
pub use job::Job;
pub use queue::QueueDispatch;
