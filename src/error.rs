use thiserror::Error;

use crate::manifest::ManifestError;
use crate::version::error::RegistryError;

/// Fatal failures of an estimate run
#[derive(Debug, Error)]
pub enum EstimateError {
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}
