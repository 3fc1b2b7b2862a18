//! Builds `.repo-metadata-full.json`, the catalogue of client libraries in a
//! Go monorepo.

pub mod builder;
pub mod config;
pub mod docs_url;
pub mod error;
pub mod module;
pub mod paths;
pub mod release_level;
pub mod service_config;
pub mod types;

pub use builder::ManifestBuilder;
pub use config::{LibraryConfig, ManualClientInfo, PostProcessorConfig, ServiceConfigEntry};
pub use docs_url::resolve_docs_url;
pub use error::{ConfigError, ManifestError, ResolveError};
pub use module::{GoListResolver, GoModResolver, ModuleResolver};
pub use release_level::resolve_release_level;
pub use types::{LibraryType, Manifest, ManifestEntry, ReleaseLevel};
