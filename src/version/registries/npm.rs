//! npm registry API implementation

use std::collections::HashMap;

use crate::version::error::RegistryError;
use crate::version::registry::Registry;
use crate::version::types::VersionTimes;
use serde::Deserialize;
use tracing::warn;

/// Default base URL for npm registry
pub const DEFAULT_BASE_URL: &str = "https://registry.npmjs.org";

/// Registry-maintained key holding the last packument change, not a release
const MODIFIED_KEY: &str = "modified";

/// Response from npm registry API
#[derive(Debug, Deserialize)]
struct NpmPackageResponse {
    time: Option<HashMap<String, String>>,
}

/// Registry implementation for npm registry API
#[derive(Clone)]
pub struct NpmRegistry {
    client: reqwest::Client,
    base_url: String,
}

impl NpmRegistry {
    /// Creates a new NpmRegistry with a custom base URL
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("manifest-date")
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Encode package name for URL (handles scoped packages)
    fn encode_package_name(package_name: &str) -> String {
        if package_name.starts_with('@') {
            // Scoped package: @scope/name -> @scope%2Fname
            package_name.replace('/', "%2F")
        } else {
            package_name.to_string()
        }
    }
}

impl Default for NpmRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait::async_trait]
impl Registry for NpmRegistry {
    async fn fetch_version_times(
        &self,
        package_name: &str,
    ) -> Result<VersionTimes, RegistryError> {
        let encoded_name = Self::encode_package_name(package_name);
        let url = format!("{}/{}", self.base_url, encoded_name);

        let response = self.client.get(&url).send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RegistryError::NotFound(package_name.to_string()));
        }

        if !status.is_success() {
            warn!("npm registry returned status {}: {}", status, url);
            return Err(RegistryError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let package_info: NpmPackageResponse = response.json().await.map_err(|e| {
            warn!("Failed to parse npm registry response: {}", e);
            RegistryError::InvalidResponse(e.to_string())
        })?;

        let Some(mut times) = package_info.time else {
            warn!("npm registry response for {} has no time field", package_name);
            return Err(RegistryError::InvalidResponse(format!(
                "Missing release times for {}",
                package_name
            )));
        };

        times.remove(MODIFIED_KEY);

        Ok(times)
    }
}
