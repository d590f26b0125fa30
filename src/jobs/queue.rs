//! # Bounded in-process queue dispatch.
//!
//! [`QueueDispatch`] hands admitted submissions to a bounded
//! [`tokio::sync::mpsc`] channel drained by the caller's workers. It also exposes
//! the live queue depth, which is the most common enqueuing condition:
//!
//! ```text
//! Rule::max(2, queue.depth_gauge())   → admit while fewer than 2 jobs are waiting
//! ```
//!
//! ## Rules
//! - `dispatch` waits for a free slot when the channel is full (hand-off only).
//! - A closed channel drops the submission and logs a warning.
//! - `depth()` counts queued-but-not-received items, not in-flight work.

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::dispatch::Dispatch;

/// Dispatch into a bounded `mpsc` queue.
pub struct QueueDispatch<A> {
    tx: mpsc::Sender<A>,
}

impl<A> Clone for QueueDispatch<A> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<A: Send + 'static> QueueDispatch<A> {
    /// Creates a queue with the given capacity (min 1) and returns its receiving end.
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<A>) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (Self { tx }, rx)
    }

    /// Wraps an existing sender.
    pub fn from_sender(tx: mpsc::Sender<A>) -> Self {
        Self { tx }
    }

    /// Number of submissions waiting in the queue.
    pub fn depth(&self) -> usize {
        queue_depth(&self.tx)
    }

    /// Returns a condition reporting the live queue depth, for use in a `Max` rule.
    pub fn depth_gauge(&self) -> impl Fn() -> usize + Send + Sync + 'static {
        let tx = self.tx.clone();
        move || queue_depth(&tx)
    }

    /// Returns `true` once every receiver has been dropped.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

fn queue_depth<A>(tx: &mpsc::Sender<A>) -> usize {
    tx.max_capacity().saturating_sub(tx.capacity())
}

#[async_trait]
impl<A: Send + 'static> Dispatch<A> for QueueDispatch<A> {
    async fn dispatch(&self, args: A) {
        if self.tx.send(args).await.is_err() {
            tracing::warn!("queue closed; submission dropped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn depth_tracks_queued_items() {
        let (queue, mut rx) = QueueDispatch::channel(4);
        let depth = queue.depth_gauge();
        assert_eq!(depth(), 0);

        queue.dispatch(1u32).await;
        queue.dispatch(2u32).await;
        assert_eq!(queue.depth(), 2);
        assert_eq!(depth(), 2);

        assert_eq!(rx.recv().await, Some(1));
        assert_eq!(depth(), 1);
    }

    #[tokio::test]
    async fn closed_queue_drops_silently() {
        let (queue, rx) = QueueDispatch::<u32>::channel(1);
        drop(rx);
        assert!(queue.is_closed());
        queue.dispatch(7).await;
        assert_eq!(queue.depth(), 0);
    }
}
