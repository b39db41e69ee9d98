//! Minimum-spacing decorator for registry lookups

use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::{Instant, sleep_until};
use tracing::debug;

use crate::version::error::RegistryError;
use crate::version::registry::Registry;
use crate::version::types::VersionTimes;

/// Wraps a registry so consecutive lookups start at least `min_interval` apart
///
/// Callers are serialized: a lookup holds the gate until the inner registry
/// answers, so concurrent callers queue up instead of fanning out.
pub struct RateLimitedRegistry<R> {
    inner: R,
    min_interval: Duration,
    last_started: Mutex<Option<Instant>>,
}

impl<R: Registry> RateLimitedRegistry<R> {
    pub fn new(inner: R, min_interval: Duration) -> Self {
        Self {
            inner,
            min_interval,
            last_started: Mutex::new(None),
        }
    }
}

#[async_trait::async_trait]
impl<R: Registry> Registry for RateLimitedRegistry<R> {
    async fn fetch_version_times(
        &self,
        package_name: &str,
    ) -> Result<VersionTimes, RegistryError> {
        let mut last_started = self.last_started.lock().await;

        if let Some(previous) = *last_started {
            let ready_at = previous + self.min_interval;
            if ready_at > Instant::now() {
                debug!(
                    "Delaying lookup of {} by {:?}",
                    package_name,
                    ready_at - Instant::now()
                );
                sleep_until(ready_at).await;
            }
        }

        *last_started = Some(Instant::now());
        self.inner.fetch_version_times(package_name).await
    }
}
