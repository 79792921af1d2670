//! Retry policies for JSON-RPC requests.

use crate::error::HttpError;
use std::future::Future;
use std::time::Duration;

/// Retry policy for a chain read.
#[derive(Debug, Clone, Default)]
pub enum RetryPolicy {
    /// Single attempt.
    None,
    /// Retry on transport failures, 429 and 502/503/504 with backoff.
    /// `eth_call` is a read, so this is the default for the RPC reader.
    #[default]
    Idempotent,
    /// User-provided retry logic.
    Custom(RetryConfig),
}

impl RetryPolicy {
    /// Resolves the policy to a concrete config; `None` means a single attempt.
    pub fn config(&self) -> Option<RetryConfig> {
        match self {
            RetryPolicy::None => None,
            RetryPolicy::Idempotent => Some(RetryConfig::default()),
            RetryPolicy::Custom(c) => Some(c.clone()),
        }
    }
}

/// Configuration for retry behavior.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retry attempts (not counting the initial request).
    pub max_retries: u32,
    pub initial_delay: Duration,
    pub max_delay: Duration,
    /// Multiplier applied to the delay after each retry.
    pub backoff_factor: f64,
    /// Adds ±25% jitter to each delay.
    pub jitter: bool,
    /// HTTP status codes that trigger a retry.
    pub retryable_statuses: Vec<u16>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay: Duration::from_millis(250),
            max_delay: Duration::from_secs(8),
            backoff_factor: 2.0,
            jitter: true,
            retryable_statuses: vec![429, 502, 503, 504],
        }
    }
}

impl RetryConfig {
    /// Delay before retry number `attempt` (0-indexed).
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let base =
            self.initial_delay.as_millis() as f64 * self.backoff_factor.powi(attempt as i32);
        let capped = base.min(self.max_delay.as_millis() as f64);

        let final_ms = if self.jitter {
            let spread = capped * 0.25;
            (capped + (rand::random::<f64>() - 0.5) * 2.0 * spread).max(0.0)
        } else {
            capped
        };

        Duration::from_millis(final_ms as u64)
    }

    /// Whether a failed attempt is worth repeating.
    pub fn should_retry(&self, error: &HttpError) -> bool {
        match error {
            HttpError::ServerError { status, .. } => self.retryable_statuses.contains(status),
            HttpError::RateLimited { .. } => self.retryable_statuses.contains(&429),
            HttpError::Timeout => true,
            HttpError::Reqwest(re) => {
                #[cfg(not(target_arch = "wasm32"))]
                let retryable = re.is_connect() || re.is_timeout() || re.is_request();
                #[cfg(target_arch = "wasm32")]
                let retryable = re.is_timeout() || re.is_request();
                retryable
            }
            _ => false,
        }
    }
}

/// Runs `call` under `policy`, backing off between retryable failures.
///
/// A rate-limited response carrying a server-provided delay is waited out
/// before the regular backoff delay.
pub(crate) async fn run_with_retry<T, F, Fut>(
    policy: &RetryPolicy,
    endpoint: &str,
    mut call: F,
) -> Result<T, HttpError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, HttpError>>,
{
    let Some(config) = policy.config() else {
        return call().await;
    };

    let mut last_error = None;

    for attempt in 0..=config.max_retries {
        match call().await {
            Ok(value) => return Ok(value),
            Err(e) => {
                if let HttpError::RateLimited {
                    retry_after_ms: Some(ms),
                } = &e
                {
                    futures_timer::Delay::new(Duration::from_millis(*ms)).await;
                }

                if config.should_retry(&e) && attempt < config.max_retries {
                    let delay = config.delay_for_attempt(attempt);
                    tracing::debug!(
                        attempt = attempt + 1,
                        max = config.max_retries,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "Retrying request to {}",
                        endpoint
                    );
                    futures_timer::Delay::new(delay).await;
                    last_error = Some(e);
                } else {
                    return Err(e);
                }
            }
        }
    }

    Err(HttpError::MaxRetriesExceeded {
        attempts: config.max_retries + 1,
        last_error: last_error
            .map(|e| e.to_string())
            .unwrap_or_else(|| "unknown".to_string()),
    })
}
