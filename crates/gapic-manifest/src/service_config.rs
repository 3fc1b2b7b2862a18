//! Service Config Reader
//!
//! Only the `title` of a service YAML document is needed.

use std::fs::File;
use std::path::Path;

use serde::Deserialize;

use crate::error::ManifestError;

#[derive(Debug, Default, Deserialize)]
struct ServiceConfigTitle {
    #[serde(default)]
    title: String,
}

/// Read the display title from a service config document.
///
/// Only the first document of a multi-document stream is decoded.
pub fn read_title(path: &Path) -> Result<String, ManifestError> {
    let file = File::open(path).map_err(|source| ManifestError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let empty = || ManifestError::EmptyServiceConfig {
        path: path.to_path_buf(),
    };
    let document = serde_yaml::Deserializer::from_reader(file)
        .next()
        .ok_or_else(empty)?;
    // An empty stream decodes as None
    let config = Option::<ServiceConfigTitle>::deserialize(document)
        .map_err(ManifestError::Decode)?
        .ok_or_else(empty)?;
    Ok(config.title)
}
