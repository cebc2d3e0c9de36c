//! Retry orchestration for generation calls.
//!
//! Each attempt after the first runs in "recovering" mode, which lets the
//! caller rebuild the prompt with a stronger format directive before
//! reissuing it. Only retryable errors are reissued; everything else
//! surfaces immediately.

use std::future::Future;
use std::time::Duration;

use tracing::warn;

use crate::error::{EngineError, EngineResult};
use crate::provider::ProviderKind;

/// Retry policy for one generation operation.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub operation: String,
    pub provider: ProviderKind,
}

impl RetryPolicy {
    pub fn new(operation: impl Into<String>, provider: ProviderKind) -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(500),
            operation: operation.into(),
            provider,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn with_base_delay(mut self, base_delay: Duration) -> Self {
        self.base_delay = base_delay;
        self
    }

    /// Exponential backoff: base, 2x base, 4x base, ...
    fn delay_for_attempt(&self, attempt: u32) -> Duration {
        self.base_delay * 2u32.saturating_pow(attempt.saturating_sub(1))
    }
}

/// Run `operation` up to `policy.max_attempts` times.
///
/// The closure receives `recovering`: `false` on the first attempt, `true`
/// on every reissue, so prompt builders can strengthen the format directive.
pub async fn retry_generation<F, Fut, T>(policy: &RetryPolicy, operation: F) -> EngineResult<T>
where
    F: Fn(bool) -> Fut,
    Fut: Future<Output = EngineResult<T>>,
{
    let mut last_error: Option<EngineError> = None;

    for attempt in 1..=policy.max_attempts {
        let recovering = attempt > 1;
        match operation(recovering).await {
            Ok(value) => return Ok(value),
            Err(err) if err.is_retryable() => {
                warn!(
                    operation = %policy.operation,
                    provider = %policy.provider,
                    attempt,
                    max_attempts = policy.max_attempts,
                    error = %err,
                    "generation attempt failed"
                );
                last_error = Some(err);
                if attempt < policy.max_attempts {
                    tokio::time::sleep(policy.delay_for_attempt(attempt)).await;
                }
            }
            Err(err) => return Err(err),
        }
    }

    let last = last_error
        .map(|e| e.to_string())
        .unwrap_or_else(|| "unknown error".to_string());
    Err(EngineError::RetriesExhausted {
        provider: policy.provider,
        attempts: policy.max_attempts,
        last,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Mutex;

    fn fast_policy() -> RetryPolicy {
        RetryPolicy::new("test", ProviderKind::Gemini).with_base_delay(Duration::from_millis(1))
    }

    #[tokio::test]
    async fn test_first_attempt_success_runs_once() {
        let calls = AtomicU32::new(0);
        let result = retry_generation(&fast_policy(), |_| {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Ok::<_, EngineError>(42) }
        })
        .await;
        assert_eq!(result.unwrap(), 42);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_recovers_on_third_attempt() {
        let calls = AtomicU32::new(0);
        let result = retry_generation(&fast_policy(), |_| {
            let attempt = calls.fetch_add(1, Ordering::SeqCst) + 1;
            async move {
                if attempt < 3 {
                    Err(EngineError::provider(ProviderKind::Gemini, "503"))
                } else {
                    Ok("ok")
                }
            }
        })
        .await;
        assert_eq!(result.unwrap(), "ok");
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_exhaustion_reports_attempts_and_last_error() {
        let result: EngineResult<()> = retry_generation(&fast_policy(), |_| async {
            Err(EngineError::provider(ProviderKind::Gemini, "always down"))
        })
        .await;
        match result {
            Err(EngineError::RetriesExhausted {
                provider,
                attempts,
                last,
            }) => {
                assert_eq!(provider, ProviderKind::Gemini);
                assert_eq!(attempts, 3);
                assert!(last.contains("always down"));
            }
            other => panic!("expected RetriesExhausted, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_non_retryable_error_returns_immediately() {
        let calls = AtomicU32::new(0);
        let result: EngineResult<()> = retry_generation(&fast_policy(), |_| {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(EngineError::config("no key")) }
        })
        .await;
        assert!(matches!(result, Err(EngineError::Config(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_recovering_flag_is_false_then_true() {
        let seen = Mutex::new(Vec::new());
        let result: EngineResult<()> = retry_generation(&fast_policy(), |recovering| {
            seen.lock().unwrap().push(recovering);
            async { Err(EngineError::provider(ProviderKind::Gemini, "503")) }
        })
        .await;
        assert!(result.is_err());
        assert_eq!(*seen.lock().unwrap(), vec![false, true, true]);
    }

    #[test]
    fn test_backoff_doubles() {
        let policy = RetryPolicy::new("test", ProviderKind::Groq)
            .with_base_delay(Duration::from_millis(100));
        assert_eq!(policy.delay_for_attempt(1), Duration::from_millis(100));
        assert_eq!(policy.delay_for_attempt(2), Duration::from_millis(200));
        assert_eq!(policy.delay_for_attempt(3), Duration::from_millis(400));
    }
}
