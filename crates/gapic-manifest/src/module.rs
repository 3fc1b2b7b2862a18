//! Module Resolution
//!
//! Finds the Go module that encloses a package directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::error::ResolveError;

const GO_MOD: &str = "go.mod";

/// Resolves the module path that owns a directory
pub trait ModuleResolver {
    fn current_module(&self, dir: &Path) -> Result<String, ResolveError>;
}

impl<T: ModuleResolver + ?Sized> ModuleResolver for Box<T> {
    fn current_module(&self, dir: &Path) -> Result<String, ResolveError> {
        (**self).current_module(dir)
    }
}

/// Reads the nearest `go.mod` at or above the directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoModResolver;

impl ModuleResolver for GoModResolver {
    fn current_module(&self, dir: &Path) -> Result<String, ResolveError> {
        let go_mod = find_go_mod(dir).ok_or_else(|| ResolveError::NoModule {
            dir: dir.to_path_buf(),
        })?;

        let content = fs::read_to_string(&go_mod).map_err(|source| ResolveError::Io {
            path: go_mod.clone(),
            source,
        })?;

        let module = parse_module_directive(&content)
            .ok_or(ResolveError::MissingDirective { path: go_mod.clone() })?;
        debug!("Resolved module {} from {:?}", module, go_mod);
        Ok(module)
    }
}

/// Asks the Go toolchain via `go list -m`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoListResolver;

impl ModuleResolver for GoListResolver {
    fn current_module(&self, dir: &Path) -> Result<String, ResolveError> {
        let output = Command::new("go")
            .args(["list", "-m"])
            .current_dir(dir)
            .output()
            .map_err(ResolveError::Spawn)?;

        if !output.status.success() {
            return Err(ResolveError::GoCommand {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

fn find_go_mod(dir: &Path) -> Option<PathBuf> {
    dir.ancestors()
        .map(|ancestor| ancestor.join(GO_MOD))
        .find(|candidate| candidate.is_file())
}

/// Extract the module path from go.mod content
fn parse_module_directive(content: &str) -> Option<String> {
    content.lines().find_map(|line| {
        let line = match line.find("//") {
            Some(idx) => &line[..idx],
            None => line,
        };
        let rest = line.trim().strip_prefix("module")?;
        // reject e.g. "modulex"
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        let path = rest.trim().trim_matches(|c| c == '"' || c == '`');
        (!path.is_empty()).then(|| path.to_string())
    })
}
