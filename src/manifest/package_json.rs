//! package.json reader

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::{debug, warn};

use crate::manifest::error::ManifestError;

/// Dependency fields of a package.json, in file order
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Manifest {
    #[serde(deserialize_with = "lenient_versions")]
    pub dependencies: IndexMap<String, String>,
    #[serde(deserialize_with = "lenient_versions")]
    pub dev_dependencies: IndexMap<String, String>,
}

/// Raw dependency field; anything but an object carries no dependencies
#[derive(Deserialize)]
#[serde(untagged)]
enum DependencyField {
    Entries(IndexMap<String, Value>),
    Other(Value),
}

/// Accept any value for a dependency field
///
/// `null` and non-object values count as no dependencies. Non-string versions
/// are kept in their JSON text form and will not match any release.
fn lenient_versions<'de, D>(deserializer: D) -> Result<IndexMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = match DependencyField::deserialize(deserializer)? {
        DependencyField::Entries(entries) => entries,
        DependencyField::Other(_) => return Ok(IndexMap::new()),
    };

    Ok(entries
        .into_iter()
        .map(|(name, version)| match version {
            Value::String(version) => (name, version),
            other => (name, other.to_string()),
        })
        .collect())
}

impl Manifest {
    /// Parse manifest content
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// `dependencies` followed by `devDependencies`
    ///
    /// A name present in both takes the `devDependencies` version and keeps
    /// its position from `dependencies`.
    pub fn merged(&self) -> IndexMap<String, String> {
        let mut merged = self.dependencies.clone();
        for (name, version) in &self.dev_dependencies {
            merged.insert(name.clone(), version.clone());
        }
        merged
    }
}

/// Read and parse the manifest at `path`
pub fn read_manifest(path: &Path) -> Result<Manifest, ManifestError> {
    if !path.is_file() {
        warn!("Manifest not found at {:?}", path);
        return Err(ManifestError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let manifest = Manifest::from_json(&content).map_err(|source| {
        warn!("Failed to parse manifest {:?}: {}", path, source);
        ManifestError::InvalidJson {
            path: path.to_path_buf(),
            source,
        }
    })?;

    debug!(
        "Read {} dependencies and {} devDependencies from {:?}",
        manifest.dependencies.len(),
        manifest.dev_dependencies.len(),
        path
    );

    Ok(manifest)
}
