//! Wiring of the manifest reader, registry stack, and inference engine

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info};

use crate::config::{Config, data_dir, db_path};
use crate::error::EstimateError;
use crate::estimate::{EstimateReport, RangeInferenceEngine};
use crate::manifest::read_manifest;
use crate::version::cache::Cache;
use crate::version::history::VersionHistoryResolver;
use crate::version::registries::{CachingRegistry, NpmRegistry, RateLimitedRegistry};
use crate::version::registry::Registry;

/// Open the history cache in the data directory
///
/// Returns None when the cache cannot be set up; estimates then run uncached.
fn initialize_cache(refresh_interval: i64) -> Option<Arc<Cache>> {
    let data_dir = data_dir();
    let db_path = db_path();

    if let Err(e) = std::fs::create_dir_all(&data_dir) {
        error!("Failed to create data directory {:?}: {}", data_dir, e);
        return None;
    }

    match Cache::new(&db_path, refresh_interval) {
        Ok(cache) => {
            info!("Cache initialized at {:?}", db_path);
            Some(Arc::new(cache))
        }
        Err(e) => {
            error!("Failed to initialize cache: {}", e);
            None
        }
    }
}

/// Build the registry stack: cache (optional) -> rate limiter -> npm
pub fn build_registry(config: &Config) -> Arc<dyn Registry> {
    let limited = RateLimitedRegistry::new(
        NpmRegistry::new(&config.registry.base_url),
        Duration::from_millis(config.registry.min_interval),
    );

    if !config.cache.enabled {
        return Arc::new(limited);
    }

    match initialize_cache(config.cache.refresh_interval) {
        Some(cache) => Arc::new(CachingRegistry::new(limited, cache)),
        None => Arc::new(limited),
    }
}

/// Create an engine on top of the given registry
pub fn build_engine(registry: Arc<dyn Registry>) -> RangeInferenceEngine {
    RangeInferenceEngine::new(VersionHistoryResolver::new(registry))
}

/// Read the manifest at `path` and estimate its last edit date
pub async fn estimate_manifest(
    path: &Path,
    engine: &RangeInferenceEngine,
) -> Result<EstimateReport, EstimateError> {
    let manifest = read_manifest(path)?;
    let dependencies = manifest.merged();
    info!("Estimating {:?} from {} dependencies", path, dependencies.len());

    Ok(engine.compute_estimate(&dependencies).await?)
}

/// Remove every cached release history
pub fn clear_cache(config: &Config) -> anyhow::Result<()> {
    clear_cache_at(&db_path(), config.cache.refresh_interval)
}

fn clear_cache_at(db_path: &Path, refresh_interval: i64) -> anyhow::Result<()> {
    if !db_path.is_file() {
        info!("No cache database at {:?}", db_path);
        return Ok(());
    }

    Cache::new(db_path, refresh_interval)?.clear()?;
    info!("Cleared cache at {:?}", db_path);
    Ok(())
}
