//! # taskgate
//!
//! **taskgate** is an admission-control layer for async task dispatch.
//!
//! Instead of pushing work onto a queue unconditionally, a [`Job`] declares
//! *enqueuing rules*: named conditions evaluated at submission time. For every
//! submission the [`Gate`] decides, rule by rule and in a deterministic order,
//! whether to dispatch, run a remediation instead, or abandon the attempt.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!     │     Rule     │   │     Rule     │   │     Rule     │
//!     │ (precedence) │   │ (precedence) │   │ (precedence) │
//!     └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!            └──────────────────┼──────────────────┘
//!                               ▼ Job::enqueuing_rules()
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  Gate (admission engine)                                          │
//! │  - sort_by_precedence (stable)                                    │
//! │  - evaluator: Max → limit > condition(), Min → limit < condition()│
//! │  - first denial ─► remediation (Callback / Retry / None)          │
//! │  - all passed   ─► Dispatch::dispatch(args), exactly once         │
//! └──────┬──────────────────────────────┬────────────────────┬────────┘
//!        ▼                              ▼                    ▼
//!  ┌──────────────┐            ┌─────────────────┐    ┌──────────────┐
//!  │   Dispatch   │            │ Retry (Defer)   │    │     Bus      │
//!  │ (your queue) │            │ sleep, resubmit │    │   (events)   │
//!  └──────────────┘            └────────┬────────┘    └──────────────┘
//!                                       └──► Resubmit(args): rule chain from the top
//! ```
//!
//! ### Lifecycle
//! ```text
//! submit(args)
//!   ├─► rules = job.enqueuing_rules()     None ─► Err(UnimplementedRules)
//!   ├─► for rule in sort_by_precedence(rules):
//!   │       ├─ pass   ─► continue
//!   │       └─ deny   ─► remediation, return
//!   │                      ├─ Callback(f)   ─► f()
//!   │                      ├─ Retry(Defer)  ─► sleep(interval) ─► loop to the top
//!   │                      └─ None          ─► silent abort
//!   └─► dispatch(args)
//! ```
//!
//! ## Features
//! | Area            | Description                                                  | Key types / traits                       |
//! |-----------------|--------------------------------------------------------------|------------------------------------------|
//! | **Rules**       | Declarative admission checks with precedence and modes.      | [`Rule`], [`RuleMode`], [`Gauge`]        |
//! | **Remediation** | What happens on denial: callback, retry, deferral, abort.    | [`Remediation`], [`Retry`], [`RetryOutcome`], [`Defer`] |
//! | **Admission**   | Ordering, evaluation and dispatch of one submission.         | [`Gate`], [`GateBuilder`]                |
//! | **Dispatch**    | The task-dispatch primitive behind the gate.                 | [`Dispatch`], [`DispatchFn`], [`QueueDispatch`] |
//! | **Events**      | Broadcast admission events for metrics and audit.            | [`Event`], [`EventKind`], [`Subscription`] |
//! | **Errors**      | Contract violations and rejected configurations.             | [`AdmissionError`]                       |
//! | **Configuration** | Bus sizing and unknown-mode handling.                      | [`GateConfig`], [`UnknownModePolicy`]    |
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use taskgate::{Gate, Job, QueueDispatch, Rule};
//!
//! struct Resize {
//!     depth: QueueDispatch<u64>,
//! }
//!
//! impl Job for Resize {
//!     type Args = u64;
//!
//!     fn name(&self) -> &str { "resize" }
//!
//!     fn enqueuing_rules(&self) -> Option<Vec<Rule<Self>>> {
//!         Some(vec![
//!             Rule::max(2, self.depth.depth_gauge())
//!                 .with_name("queue-depth")
//!                 .with_defer(Duration::from_secs(1)),
//!         ])
//!     }
//! }
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (queue, mut rx) = QueueDispatch::channel(16);
//!     let gate = Gate::new(Resize { depth: queue.clone() }, std::sync::Arc::new(queue));
//!
//!     gate.submit(42).await?;
//!     assert_eq!(rx.recv().await, Some(42));
//!     Ok(())
//! }
//! ```

mod config;
mod error;
mod events;
mod gate;
mod jobs;
mod rules;

// ---- Public re-exports ----

pub use config::GateConfig;
pub use error::AdmissionError;
pub use events::{Bus, Event, EventKind, Subscription};
pub use gate::{sort_by_precedence, Defer, Gate, GateBuilder};
pub use jobs::{Dispatch, DispatchFn, DispatchRef, Job, QueueDispatch};
pub use rules::{
    Callback, Gauge, GaugeRef, Remediation, Retry, RetryFn, RetryOutcome, RetryRef, Rule, RuleMode,
    Threshold, UnknownModePolicy,
};
