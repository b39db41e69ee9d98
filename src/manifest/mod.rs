//! Manifest layer
//! - error.rs: ManifestError
//! - package_json.rs: package.json reader

pub mod error;
pub mod package_json;

pub use error::ManifestError;
pub use package_json::{Manifest, read_manifest};
