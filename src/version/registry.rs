//! Registry trait for fetching package release times

#[cfg(test)]
use mockall::automock;

use crate::version::error::RegistryError;
use crate::version::types::VersionTimes;

/// Trait for fetching the release-time history of a package
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Registry: Send + Sync {
    /// Fetches the publish time of every version of a package
    ///
    /// # Arguments
    /// * `package_name` - The name of the package (e.g., "lodash", "@types/node")
    ///
    /// # Returns
    /// * `Ok(VersionTimes)` - Version -> publish time, including the `created` entry
    /// * `Err(RegistryError)` - If the fetch fails or the response is malformed
    async fn fetch_version_times(&self, package_name: &str)
    -> Result<VersionTimes, RegistryError>;
}
