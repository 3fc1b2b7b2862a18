//! Path Utilities
//!
//! Joining configuration-relative paths onto the injected roots.

use std::path::{Path, PathBuf};

/// Location of the manifest relative to the install root
pub const MANIFEST_RELATIVE_PATH: &str = "internal/.repo-metadata-full.json";

/// Join `relative` onto `root`.
///
/// Configured paths such as `/accessapproval/apiv1` carry a leading slash but
/// are still relative to `root`; `Path::join` would otherwise discard `root`.
pub fn join_relative(root: &Path, relative: &str) -> PathBuf {
    let trimmed = relative.trim_start_matches(['/', '\\']);
    if trimmed.is_empty() {
        root.to_path_buf()
    } else {
        root.join(trimmed)
    }
}

/// Get the manifest output path under an install root
pub fn manifest_path(google_cloud_dir: &Path) -> PathBuf {
    join_relative(google_cloud_dir, MANIFEST_RELATIVE_PATH)
}
