//! Opt-in retry helper with exponential backoff and jitter.
//!
//! Endpoint calls never retry on their own; callers that want resilience
//! wrap a call in [`retry_with_backoff`].

use std::future::Future;
use std::time::Duration;

use crate::FmpError;

/// Backoff strategy between attempts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Backoff {
    /// Same delay before every retry.
    Fixed { delay: Duration },
    /// `base * factor^attempt`, capped at `max`, with optional +/-50% jitter.
    Exponential {
        base: Duration,
        factor: f64,
        max: Duration,
        jitter: bool,
    },
}

impl Default for Backoff {
    fn default() -> Self {
        Self::Exponential {
            base: Duration::from_millis(250),
            factor: 2.0,
            max: Duration::from_secs(5),
            jitter: true,
        }
    }
}

impl Backoff {
    /// Delay before retry number `attempt` (0-based).
    pub fn delay(self, attempt: u32) -> Duration {
        match self {
            Self::Fixed { delay } => delay,
            Self::Exponential {
                base,
                factor,
                max,
                jitter,
            } => {
                let scale = factor.powi(attempt as i32);
                let seconds = (base.as_secs_f64() * scale).min(max.as_secs_f64());
                let mut delay = Duration::from_secs_f64(seconds);

                if jitter {
                    let half = (delay.as_millis() as f64 * 0.5) as u64;
                    let offset = fastrand::u64(0..=half * 2);
                    let total = delay.as_millis() as i64 + (offset as i64 - half as i64);
                    delay = Duration::from_millis(total.max(0) as u64);
                }

                delay
            }
        }
    }
}

/// Retry policy consulted by [`retry_with_backoff`].
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total attempts = `max_retries + 1`.
    pub max_retries: u32,
    pub backoff: Backoff,
    /// HTTP statuses that warrant another attempt, in addition to any error
    /// already classified retryable.
    pub retry_on_status: Vec<u16>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            backoff: Backoff::default(),
            retry_on_status: vec![408, 429, 500, 502, 503, 504],
        }
    }
}

impl RetryPolicy {
    pub fn exponential(max_retries: u32) -> Self {
        Self {
            max_retries,
            ..Self::default()
        }
    }

    pub fn fixed(delay: Duration, max_retries: u32) -> Self {
        Self {
            max_retries,
            backoff: Backoff::Fixed { delay },
            ..Self::default()
        }
    }

    fn should_retry(&self, error: &FmpError) -> bool {
        match error {
            FmpError::Status { status, .. } => self.retry_on_status.contains(status),
            other => other.retryable(),
        }
    }
}

/// Runs `op`, retrying per the policy. The final error is returned unchanged
/// once retries are exhausted or the error is not retryable.
pub async fn retry_with_backoff<T, F, Fut>(policy: &RetryPolicy, mut op: F) -> Result<T, FmpError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, FmpError>>,
{
    let mut attempt: u32 = 0;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(error) => {
                if attempt >= policy.max_retries || !policy.should_retry(&error) {
                    return Err(error);
                }
                let delay = policy.backoff.delay(attempt);
                tracing::warn!(attempt, delay_ms = delay.as_millis() as u64, %error, "retrying after failure");
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn fixed_backoff_is_constant() {
        let backoff = Backoff::Fixed {
            delay: Duration::from_millis(100),
        };
        assert_eq!(backoff.delay(0), Duration::from_millis(100));
        assert_eq!(backoff.delay(7), Duration::from_millis(100));
    }

    #[test]
    fn exponential_backoff_doubles_and_caps() {
        let backoff = Backoff::Exponential {
            base: Duration::from_millis(100),
            factor: 2.0,
            max: Duration::from_secs(1),
            jitter: false,
        };
        assert_eq!(backoff.delay(0), Duration::from_millis(100));
        assert_eq!(backoff.delay(1), Duration::from_millis(200));
        assert_eq!(backoff.delay(2), Duration::from_millis(400));
        assert_eq!(backoff.delay(4), Duration::from_secs(1));
    }

    #[test]
    fn jitter_stays_within_half_band() {
        let backoff = Backoff::Exponential {
            base: Duration::from_millis(200),
            factor: 2.0,
            max: Duration::from_secs(2),
            jitter: true,
        };
        for _ in 0..20 {
            for attempt in 0..4 {
                let expected = (200.0 * 2_f64.powi(attempt)).min(2000.0);
                let actual = backoff.delay(attempt as u32).as_millis() as f64;
                assert!(actual >= expected * 0.49, "attempt {attempt}: {actual}");
                assert!(actual <= expected * 1.51, "attempt {attempt}: {actual}");
            }
        }
    }

    #[tokio::test]
    async fn retries_retryable_statuses_until_success() {
        let calls = AtomicU32::new(0);
        let policy = RetryPolicy::fixed(Duration::from_millis(1), 3);

        let result = retry_with_backoff(&policy, || {
            let n = calls.fetch_add(1, Ordering::SeqCst);
            async move {
                if n < 2 {
                    Err(FmpError::status(503, "unavailable"))
                } else {
                    Ok(n)
                }
            }
        })
        .await;

        assert_eq!(result.expect("should eventually succeed"), 2);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn does_not_retry_non_retryable_errors() {
        let calls = AtomicU32::new(0);
        let policy = RetryPolicy::fixed(Duration::from_millis(1), 5);

        let result: Result<(), _> = retry_with_backoff(&policy, || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(FmpError::invalid_request("bad symbol")) }
        })
        .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn exhausts_max_retries() {
        let calls = AtomicU32::new(0);
        let policy = RetryPolicy::fixed(Duration::from_millis(1), 2);

        let result: Result<(), _> = retry_with_backoff(&policy, || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(FmpError::status(429, "rate limited")) }
        })
        .await;

        let err = result.expect_err("should fail after retries");
        assert_eq!(err.status_code(), 429);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }
}
