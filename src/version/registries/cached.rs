//! Registry decorator backed by the local history cache

use std::sync::Arc;

use tracing::{info, warn};

use crate::version::cache::TimesStorer;
use crate::version::error::RegistryError;
use crate::version::registry::Registry;
use crate::version::types::VersionTimes;

/// Serves fresh cached histories and records every fetched one
///
/// Cache failures are logged and never fail a lookup.
pub struct CachingRegistry<R, S> {
    inner: R,
    storer: Arc<S>,
}

impl<R: Registry, S: TimesStorer> CachingRegistry<R, S> {
    pub fn new(inner: R, storer: Arc<S>) -> Self {
        Self { inner, storer }
    }
}

#[async_trait::async_trait]
impl<R: Registry, S: TimesStorer> Registry for CachingRegistry<R, S> {
    async fn fetch_version_times(
        &self,
        package_name: &str,
    ) -> Result<VersionTimes, RegistryError> {
        match self.storer.get_fresh_times(package_name) {
            Ok(Some(times)) => {
                info!("Using cached release times for {}", package_name);
                return Ok(times);
            }
            Ok(None) => {}
            Err(e) => warn!("Failed to read cache for {}: {}", package_name, e),
        }

        info!("Fetching release times for {} from registry", package_name);
        let times = self.inner.fetch_version_times(package_name).await?;

        let _ = self
            .storer
            .replace_times(package_name, &times)
            .inspect_err(|e| warn!("Failed to cache release times for {}: {}", package_name, e));

        Ok(times)
    }
}
