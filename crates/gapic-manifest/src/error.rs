use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

use crate::types::Manifest;

/// Error whilst building the manifest
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("create {}: {source}", path.display())]
    CreateOutput { path: PathBuf, source: io::Error },
    #[error("open {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },
    #[error("decode: {0}")]
    Decode(#[source] serde_yaml::Error),
    #[error("decode: {}: no YAML document", path.display())]
    EmptyServiceConfig { path: PathBuf },
    #[error("unable to build docs URL for {import_path}: {source}")]
    DocsUrl {
        import_path: String,
        source: ResolveError,
    },
    #[error("unable to calculate release level for {import_path}: {source}")]
    ReleaseLevel { import_path: String, source: io::Error },
    /// Writing the output failed; the manifest built so far is kept
    #[error("{source}")]
    Encode {
        manifest: Box<Manifest>,
        source: serde_json::Error,
    },
}

/// Error whilst locating the module that encloses a directory
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("no go.mod found in {} or any parent directory", dir.display())]
    NoModule { dir: PathBuf },
    #[error("{} has no module directive", path.display())]
    MissingDirective { path: PathBuf },
    #[error("read {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("failed to run go command: {0}")]
    Spawn(#[source] io::Error),
    #[error("go list -m exited with {status}: {stderr}")]
    GoCommand { status: ExitStatus, stderr: String },
}

/// Error whilst loading the post-processor configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}
