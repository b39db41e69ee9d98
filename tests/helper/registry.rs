//! Registry test utilities

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use manifest_date::version::error::RegistryError;
use manifest_date::version::registry::Registry;
use manifest_date::version::types::VersionTimes;

/// Mock registry for testing
///
/// Answers from a fixed table and records every requested package name.
#[derive(Default)]
pub struct MockRegistry {
    times: HashMap<String, VersionTimes>,
    requests: Mutex<Vec<String>>,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_times(mut self, package: &str, times: Vec<(&str, &str)>) -> Self {
        self.times.insert(
            package.to_string(),
            times
                .into_iter()
                .map(|(v, t)| (v.to_string(), t.to_string()))
                .collect(),
        );
        self
    }

    /// Package names requested so far, in call order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Registry for MockRegistry {
    async fn fetch_version_times(
        &self,
        package_name: &str,
    ) -> Result<VersionTimes, RegistryError> {
        self.requests.lock().unwrap().push(package_name.to_string());
        match self.times.get(package_name) {
            Some(times) => Ok(times.clone()),
            None => Err(RegistryError::NotFound(package_name.to_string())),
        }
    }
}
