//! # Example: Queue-depth admission
//!
//! A slow consumer drains a bounded queue while a producer submits a burst of jobs.
//! The job admits a submission only while fewer than 2 items are waiting; otherwise
//! it defers for 1s and retries from the top.
//!
//! Run with `RUST_LOG=taskgate=debug cargo run --example queue_depth`.

use std::sync::Arc;
use std::time::Duration;

use taskgate::{EventKind, Gate, Job, QueueDispatch, Rule};
use tracing_subscriber::EnvFilter;

struct FiveSeconds {
    queue: QueueDispatch<u32>,
}

impl Job for FiveSeconds {
    type Args = u32;

    fn name(&self) -> &str {
        "five-seconds"
    }

    fn enqueuing_rules(&self) -> Option<Vec<Rule<Self>>> {
        Some(vec![Rule::max(2, self.queue.depth_gauge())
            .with_name("queue-depth")
            .with_defer(Duration::from_secs(1))])
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,taskgate=debug")),
        )
        .init();

    let (queue, mut rx) = QueueDispatch::channel(16);
    let gate = Gate::new(
        FiveSeconds {
            queue: queue.clone(),
        },
        Arc::new(queue),
    );

    let mut events = gate.subscribe_kinds(&[EventKind::DeferScheduled]);
    tokio::spawn(async move {
        while let Ok(ev) = events.recv().await {
            tracing::info!(seq = ev.seq, delay_ms = ?ev.delay_ms, "deferral scheduled");
        }
    });

    let worker = tokio::spawn(async move {
        while let Some(id) = rx.recv().await {
            tracing::info!(id, "processing");
            tokio::time::sleep(Duration::from_millis(1500)).await;
            tracing::info!(id, "done");
        }
    });

    let mut submissions = Vec::new();
    for id in 0..6 {
        let gate = gate.clone();
        submissions.push(tokio::spawn(async move { gate.submit(id).await }));
    }
    for handle in submissions {
        handle.await??;
    }

    drop(gate);
    worker.await?;
    Ok(())
}
