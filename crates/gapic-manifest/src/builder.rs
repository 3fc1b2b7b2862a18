//! Manifest Builder
//!
//! Merges manual entries with entries derived from generated libraries and
//! writes `internal/.repo-metadata-full.json`.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::LibraryConfig;
use crate::docs_url::resolve_docs_url;
use crate::error::ManifestError;
use crate::module::ModuleResolver;
use crate::paths::{join_relative, manifest_path};
use crate::release_level::resolve_release_level;
use crate::service_config::read_title;
use crate::types::{
    LibraryType, Manifest, ManifestEntry, GENERATED_CLIENT_LIBRARY_TYPE, GO_LANGUAGE,
};

/// Builds the manifest for a checkout of googleapis and an install root
pub struct ManifestBuilder<R> {
    googleapis_dir: PathBuf,
    google_cloud_dir: PathBuf,
    resolver: R,
}

impl<R: ModuleResolver> ManifestBuilder<R> {
    pub fn new(
        googleapis_dir: impl Into<PathBuf>,
        google_cloud_dir: impl Into<PathBuf>,
        resolver: R,
    ) -> Self {
        Self {
            googleapis_dir: googleapis_dir.into(),
            google_cloud_dir: google_cloud_dir.into(),
            resolver,
        }
    }

    /// Where the manifest is written
    pub fn output_path(&self) -> PathBuf {
        manifest_path(&self.google_cloud_dir)
    }

    /// Build the manifest and write it to [`ManifestBuilder::output_path`].
    ///
    /// The output file is truncated before any library is processed, so a
    /// failed build leaves it empty. If only the final write fails, the
    /// built manifest is returned inside [`ManifestError::Encode`].
    pub fn build<I>(
        &self,
        manual_entries: I,
        build_configs: &BTreeMap<String, LibraryConfig>,
    ) -> Result<Manifest, ManifestError>
    where
        I: IntoIterator<Item = ManifestEntry>,
    {
        info!("Updating gapic manifest");
        let output_path = self.output_path();
        let file = File::create(&output_path).map_err(|source| ManifestError::CreateOutput {
            path: output_path.clone(),
            source,
        })?;

        let mut manifest = Manifest::new();
        for manual in manual_entries {
            manifest.insert(manual.distribution_name.clone(), manual);
        }

        for (input_dir, conf) in build_configs {
            if conf.service_config.is_empty() {
                debug!("Skipping {}: no service config", input_dir);
                continue;
            }
            let entry = self.generated_entry(input_dir, conf)?;
            debug!(
                "Resolved {} ({}, {})",
                entry.distribution_name, entry.release_level, entry.docs_url
            );
            manifest.insert(conf.import_path.clone(), entry);
        }

        // Drop the base module entry
        manifest.remove("");

        if let Err(source) = write_manifest(file, &manifest) {
            return Err(ManifestError::Encode {
                manifest: Box::new(manifest),
                source,
            });
        }

        info!("Wrote {} manifest entries to {:?}", manifest.len(), output_path);
        Ok(manifest)
    }

    fn generated_entry(
        &self,
        input_dir: &str,
        conf: &LibraryConfig,
    ) -> Result<ManifestEntry, ManifestError> {
        let service_dir = join_relative(&self.googleapis_dir, input_dir);
        let title = read_title(&join_relative(&service_dir, &conf.service_config))?;

        let docs_url = resolve_docs_url(
            &self.google_cloud_dir,
            &conf.import_path,
            &conf.rel_path,
            &self.resolver,
        )
        .map_err(|source| ManifestError::DocsUrl {
            import_path: conf.import_path.clone(),
            source,
        })?;

        let release_level =
            resolve_release_level(&self.google_cloud_dir, &conf.import_path, &conf.rel_path)
                .map_err(|source| ManifestError::ReleaseLevel {
                    import_path: conf.import_path.clone(),
                    source,
                })?;

        Ok(ManifestEntry {
            distribution_name: conf.import_path.clone(),
            description: title,
            language: GO_LANGUAGE.to_string(),
            client_library_type: GENERATED_CLIENT_LIBRARY_TYPE.to_string(),
            docs_url,
            release_level,
            library_type: LibraryType::GapicAuto,
        })
    }

    pub fn googleapis_dir(&self) -> &Path {
        &self.googleapis_dir
    }

    pub fn google_cloud_dir(&self) -> &Path {
        &self.google_cloud_dir
    }
}

fn write_manifest(file: File, manifest: &Manifest) -> Result<(), serde_json::Error> {
    let mut writer = BufWriter::new(file);
    manifest.write_json(&mut writer)?;
    writer.flush().map_err(serde_json::Error::io)
}
