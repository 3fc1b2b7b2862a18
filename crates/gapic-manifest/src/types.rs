//! Manifest Types
//!
//! Rust structs matching the `.repo-metadata-full.json` layout.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Language recorded for every generated entry
pub const GO_LANGUAGE: &str = "Go";

/// Client library type recorded for every generated entry
pub const GENERATED_CLIENT_LIBRARY_TYPE: &str = "generated";

/// One library package in the manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub distribution_name: String,
    pub description: String,
    pub language: String,
    pub client_library_type: String,
    pub docs_url: String,
    pub release_level: ReleaseLevel,
    pub library_type: LibraryType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseLevel {
    Alpha,
    Beta,
    Ga,
}

impl ReleaseLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReleaseLevel::Alpha => "alpha",
            ReleaseLevel::Beta => "beta",
            ReleaseLevel::Ga => "ga",
        }
    }
}

impl fmt::Display for ReleaseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a library came to exist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LibraryType {
    /// Generated and never hand-edited
    GapicAuto,
    /// Generated, with manual additions on top
    GapicManual,
    Core,
    Agent,
    Other,
}

/// Manifest keyed by distribution name.
///
/// Keys are kept sorted so the serialized document is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    entries: BTreeMap<String, ManifestEntry>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry under `key`, replacing any previous entry (last write wins)
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        entry: ManifestEntry,
    ) -> Option<ManifestEntry> {
        self.entries.insert(key.into(), entry)
    }

    pub fn remove(&mut self, key: &str) -> Option<ManifestEntry> {
        self.entries.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&ManifestEntry> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write pretty JSON (two-space indent) followed by a newline
    pub fn write_json<W: Write>(&self, mut writer: W) -> Result<(), serde_json::Error> {
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.write_all(b"\n").map_err(serde_json::Error::io)?;
        Ok(())
    }

    /// Parse a manifest previously written with [`Manifest::write_json`]
    pub fn read_from(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}
