//! Docs URL Resolver

use std::path::Path;

use crate::error::ResolveError;
use crate::module::ModuleResolver;
use crate::paths::join_relative;

const DOCS_BASE_URL: &str = "https://cloud.google.com/go/docs/reference/";

/// Build the reference documentation URL for a package.
///
/// The module enclosing `root_dir/rel_path` is stripped from `import_path` to
/// get the package path within that module.
pub fn resolve_docs_url(
    root_dir: &Path,
    import_path: &str,
    rel_path: &str,
    resolver: &dyn ModuleResolver,
) -> Result<String, ResolveError> {
    let module = resolver.current_module(&join_relative(root_dir, rel_path))?;
    Ok(docs_url(&module, import_path))
}

fn docs_url(module: &str, import_path: &str) -> String {
    let pkg_path = import_path.strip_prefix(module).unwrap_or(import_path);
    let pkg_path = pkg_path.strip_prefix('/').unwrap_or(pkg_path);
    format!("{}{}/latest/{}", DOCS_BASE_URL, module, pkg_path)
}
