//! Post-processor Configuration
//!
//! YAML description of the libraries that belong in the manifest.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::error::ConfigError;
use crate::types::{LibraryType, ManifestEntry, ReleaseLevel};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PostProcessorConfig {
    #[serde(default)]
    pub manual_clients: Vec<ManualClientInfo>,
    #[serde(default)]
    pub service_configs: Vec<ServiceConfigEntry>,
}

/// Hand-maintained manifest entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ManualClientInfo {
    pub distribution_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub client_library_type: String,
    #[serde(default)]
    pub docs_url: String,
    pub release_level: ReleaseLevel,
    pub library_type: LibraryType,
}

/// A googleapis directory and where its generated client lives
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ServiceConfigEntry {
    pub input_directory: String,
    #[serde(default)]
    pub service_config: String,
    pub import_path: String,
    #[serde(default)]
    pub rel_path: String,
}

/// Build settings for one generated library
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryConfig {
    /// Service config file name inside the input directory; empty when absent
    pub service_config: String,
    pub import_path: String,
    /// Path of the generated code relative to the install root
    pub rel_path: String,
}

impl From<ManualClientInfo> for ManifestEntry {
    fn from(info: ManualClientInfo) -> Self {
        ManifestEntry {
            distribution_name: info.distribution_name,
            description: info.description,
            language: info.language,
            client_library_type: info.client_library_type,
            docs_url: info.docs_url,
            release_level: info.release_level,
            library_type: info.library_type,
        }
    }
}

impl PostProcessorConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        info!(
            "Loaded config {:?}: {} manual clients, {} service configs",
            path,
            config.manual_clients.len(),
            config.service_configs.len()
        );
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    pub fn manual_entries(&self) -> Vec<ManifestEntry> {
        self.manual_clients.iter().cloned().map(ManifestEntry::from).collect()
    }

    /// Library configs keyed by googleapis input directory
    pub fn build_configs(&self) -> BTreeMap<String, LibraryConfig> {
        let mut configs = BTreeMap::new();
        for entry in &self.service_configs {
            let conf = LibraryConfig {
                service_config: entry.service_config.clone(),
                import_path: entry.import_path.clone(),
                rel_path: entry.rel_path.clone(),
            };
            if configs.insert(entry.input_directory.clone(), conf).is_some() {
                warn!(
                    "Duplicate input directory {}, keeping the last entry",
                    entry.input_directory
                );
            }
        }
        configs
    }
}
