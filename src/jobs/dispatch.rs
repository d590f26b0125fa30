//! # Dispatch: the task-dispatch primitive behind the gate.
//!
//! [`Dispatch`] is the outbound seam of the gate: once every rule passes, the gate
//! hands the original arguments to `dispatch` exactly once. Dispatch is
//! fire-and-forget from the gate's perspective; it awaits only the hand-off, never
//! the dispatched work.
//!
//! [`DispatchFn`] wraps a closure `F: Fn(A) -> Fut`, producing a fresh future per call.
//!
//! ## Example
//! ```rust
//! use taskgate::{DispatchFn, DispatchRef};
//!
//! let d: DispatchRef<u64> = DispatchFn::arc(|id: u64| async move {
//!     println!("enqueue {id}");
//! });
//! # let _ = d;
//! ```

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

/// # Task-dispatch primitive.
///
/// Implementations hand `args` to a queue/worker system. Failures of the hand-off are
/// the implementation's concern (log them); they are not reported back to the gate.
#[async_trait]
pub trait Dispatch<A>: Send + Sync + 'static {
    /// Hands one submission to the underlying queue.
    async fn dispatch(&self, args: A);
}

/// Shared handle to a dispatch primitive.
pub type DispatchRef<A> = Arc<dyn Dispatch<A>>;

/// Function-backed dispatch.
pub struct DispatchFn<F> {
    f: F,
}

impl<F> DispatchFn<F> {
    /// Creates a new function-backed dispatch.
    pub fn new(f: F) -> Self {
        Self { f }
    }

    /// Creates the dispatch and returns it as a shared handle.
    pub fn arc(f: F) -> Arc<Self> {
        Arc::new(Self::new(f))
    }
}

#[async_trait]
impl<A, F, Fut> Dispatch<A> for DispatchFn<F>
where
    A: Send + 'static,
    F: Fn(A) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    async fn dispatch(&self, args: A) {
        (self.f)(args).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[tokio::test]
    async fn dispatch_fn_forwards_arguments() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let d: DispatchRef<(u8, &'static str)> = DispatchFn::arc(move |args| {
            let sink = sink.clone();
            async move {
                sink.lock().unwrap().push(args);
            }
        });

        d.dispatch((1, "a")).await;
        d.dispatch((2, "b")).await;
        assert_eq!(*seen.lock().unwrap(), vec![(1, "a"), (2, "b")]);
    }
}
