//! Generic helper for mapping an async operation over many inputs.
//!
//! This is deliberately dumb plumbing: no retries, no dedup, no shared
//! state. Output order always matches input order regardless of completion
//! order.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::FmpError;

/// Execution knobs for [`run_batch`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchOptions {
    /// Maximum in-flight operations. `None` or `Some(1)` runs sequentially.
    pub concurrency: Option<usize>,
    /// Pause between operation launches. Useful against per-minute quotas.
    pub delay: Option<Duration>,
}

impl BatchOptions {
    pub fn sequential() -> Self {
        Self::default()
    }

    pub fn concurrent(limit: usize) -> Self {
        Self {
            concurrency: Some(limit.max(1)),
            delay: None,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

/// Maps `op` over `inputs`, returning one result per input in input order.
pub async fn run_batch<I, T, F, Fut>(
    inputs: Vec<I>,
    options: BatchOptions,
    op: F,
) -> Vec<Result<T, FmpError>>
where
    I: Send + 'static,
    T: Send + 'static,
    F: Fn(I) -> Fut + Send + Sync + Clone + 'static,
    Fut: Future<Output = Result<T, FmpError>> + Send + 'static,
{
    let limit = options.concurrency.unwrap_or(1).max(1);

    if limit == 1 {
        let mut results = Vec::with_capacity(inputs.len());
        let total = inputs.len();
        for (index, input) in inputs.into_iter().enumerate() {
            results.push(op(input).await);
            if index + 1 < total {
                if let Some(delay) = options.delay {
                    tokio::time::sleep(delay).await;
                }
            }
        }
        return results;
    }

    let semaphore = Arc::new(Semaphore::new(limit));
    let mut set: JoinSet<(usize, Result<T, FmpError>)> = JoinSet::new();
    let total = inputs.len();

    for (index, input) in inputs.into_iter().enumerate() {
        let semaphore = Arc::clone(&semaphore);
        let op = op.clone();
        set.spawn(async move {
            let result = match semaphore.acquire_owned().await {
                Ok(_permit) => op(input).await,
                Err(_) => Err(FmpError::transport("batch semaphore closed", false)),
            };
            (index, result)
        });
        if index + 1 < total {
            if let Some(delay) = options.delay {
                tokio::time::sleep(delay).await;
            }
        }
    }

    let mut slots: Vec<Option<Result<T, FmpError>>> = Vec::with_capacity(total);
    slots.resize_with(total, || None);
    while let Some(joined) = set.join_next().await {
        match joined {
            Ok((index, result)) => slots[index] = Some(result),
            Err(join_error) => {
                tracing::warn!(%join_error, "batch task failed to join");
            }
        }
    }

    slots
        .into_iter()
        .map(|slot| {
            slot.unwrap_or_else(|| Err(FmpError::transport("batch task panicked", false)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn preserves_input_order_sequentially() {
        let results = run_batch(vec![3_u32, 1, 2], BatchOptions::sequential(), |n| async move {
            Ok(n * 10)
        })
        .await;

        let values: Vec<_> = results.into_iter().map(|r| r.expect("ok")).collect();
        assert_eq!(values, [30, 10, 20]);
    }

    #[tokio::test]
    async fn preserves_input_order_concurrently() {
        let results = run_batch(
            (0..16_u64).collect(),
            BatchOptions::concurrent(4),
            |n| async move {
                // Later inputs finish first to exercise reordering.
                tokio::time::sleep(Duration::from_millis(16 - n)).await;
                Ok(n)
            },
        )
        .await;

        let values: Vec<_> = results.into_iter().map(|r| r.expect("ok")).collect();
        assert_eq!(values, (0..16).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn bounds_concurrent_inflight_operations() {
        static INFLIGHT: AtomicUsize = AtomicUsize::new(0);
        static PEAK: AtomicUsize = AtomicUsize::new(0);

        let _ = run_batch(
            (0..12_u32).collect(),
            BatchOptions::concurrent(3),
            |_| async {
                let now = INFLIGHT.fetch_add(1, Ordering::SeqCst) + 1;
                PEAK.fetch_max(now, Ordering::SeqCst);
                tokio::time::sleep(Duration::from_millis(10)).await;
                INFLIGHT.fetch_sub(1, Ordering::SeqCst);
                Ok(())
            },
        )
        .await;

        assert!(PEAK.load(Ordering::SeqCst) <= 3);
    }

    #[tokio::test(start_paused = true)]
    async fn sequential_delay_runs_between_launches_only() {
        let start = tokio::time::Instant::now();
        let _ = run_batch(
            vec![1_u32, 2, 3],
            BatchOptions::sequential().with_delay(Duration::from_millis(100)),
            |n| async move { Ok(n) },
        )
        .await;

        // Two gaps between three launches, no trailing delay.
        assert_eq!(start.elapsed(), Duration::from_millis(200));
    }

    #[tokio::test]
    async fn failures_stay_in_their_slot() {
        let results = run_batch(vec!["AAPL", "", "MSFT"], BatchOptions::sequential(), |s| {
            async move {
                if s.is_empty() {
                    Err(FmpError::invalid_request("empty"))
                } else {
                    Ok(s.to_owned())
                }
            }
        })
        .await;

        assert!(results[0].is_ok());
        assert!(results[1].is_err());
        assert!(results[2].is_ok());
    }
}
