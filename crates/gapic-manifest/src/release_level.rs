//! Release Level Resolver
//!
//! Classifies a package as alpha, beta or GA.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::paths::join_relative;
use crate::types::ReleaseLevel;

/// Disclaimer emitted into doc.go of pre-GA generated clients
pub const BETA_INDICATOR: &str = "It is not stable";

const DOC_FILE: &str = "doc.go";

/// Maximum number of doc.go lines searched for [`BETA_INDICATOR`]
pub const MAX_SCANNED_LINES: usize = 50;

/// Determine the release level of a package.
///
/// The last element of `import_path` is checked for `alpha`, then `beta`.
/// Only when neither matches is `doc.go` under `root_dir/rel_path` read.
pub fn resolve_release_level(
    root_dir: &Path,
    import_path: &str,
    rel_path: &str,
) -> io::Result<ReleaseLevel> {
    let last_elem = import_path.rsplit('/').next().unwrap_or(import_path);
    if last_elem.contains("alpha") {
        return Ok(ReleaseLevel::Alpha);
    }
    if last_elem.contains("beta") {
        return Ok(ReleaseLevel::Beta);
    }

    let doc_file = join_relative(root_dir, rel_path).join(DOC_FILE);
    let file = File::open(&doc_file)?;
    Ok(scan_doc(BufReader::new(file)))
}

// Read errors end the scan and count as "no disclaimer".
fn scan_doc<R: BufRead>(reader: R) -> ReleaseLevel {
    let unstable = reader
        .split(b'\n')
        .take(MAX_SCANNED_LINES)
        .map_while(Result::ok)
        .any(|line| String::from_utf8_lossy(&line).contains(BETA_INDICATOR));

    if unstable {
        ReleaseLevel::Beta
    } else {
        ReleaseLevel::Ga
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::{Cursor, Read};
    use tempfile::TempDir;

    const FOO_IMPORT_PATH: &str = "cloud.google.com/go/foo/apiv1";

    fn write_doc(dir: &Path, lines: &[String]) {
        fs::create_dir_all(dir).unwrap();
        fs::write(dir.join(DOC_FILE), lines.join("\n")).unwrap();
    }

    fn filler(count: usize) -> Vec<String> {
        (1..=count).map(|i| format!("// line {}", i)).collect()
    }

    #[test]
    fn test_alpha_without_doc_file() {
        let temp = TempDir::new().unwrap();
        let level = resolve_release_level(temp.path(), "cloud.google.com/go/foo/apiv1alpha", "/x")
            .unwrap();
        assert_eq!(level, ReleaseLevel::Alpha);
    }

    #[test]
    fn test_beta_without_doc_file() {
        let temp = TempDir::new().unwrap();
        let level = resolve_release_level(temp.path(), "cloud.google.com/go/foo/apiv2beta1", "/x")
            .unwrap();
        assert_eq!(level, ReleaseLevel::Beta);
    }

    #[test]
    fn test_alpha_checked_before_beta() {
        let temp = TempDir::new().unwrap();
        let level = resolve_release_level(temp.path(), "cloud.google.com/go/foo/betaalpha", "/x")
            .unwrap();
        assert_eq!(level, ReleaseLevel::Alpha);
    }

    #[test]
    fn test_only_last_element_is_checked() {
        let temp = TempDir::new().unwrap();
        write_doc(&temp.path().join("alphafoo/apiv1"), &filler(3));
        let import_path = "cloud.google.com/go/alphafoo/apiv1";
        let level = resolve_release_level(temp.path(), import_path, "/alphafoo/apiv1").unwrap();
        assert_eq!(level, ReleaseLevel::Ga);
    }

    #[test]
    fn test_disclaimer_near_top_is_beta() {
        let temp = TempDir::new().unwrap();
        let mut lines = filler(10);
        lines[4] = format!("// NOTE: This package is in beta. {}, and may change.", BETA_INDICATOR);
        write_doc(&temp.path().join("foo/apiv1"), &lines);

        let level = resolve_release_level(temp.path(), FOO_IMPORT_PATH, "/foo/apiv1").unwrap();
        assert_eq!(level, ReleaseLevel::Beta);
    }

    #[test]
    fn test_disclaimer_past_line_limit_is_ga() {
        let temp = TempDir::new().unwrap();
        let mut lines = filler(60);
        lines[54] = format!("// {}", BETA_INDICATOR);
        write_doc(&temp.path().join("foo/apiv1"), &lines);

        let level = resolve_release_level(temp.path(), FOO_IMPORT_PATH, "foo/apiv1").unwrap();
        assert_eq!(level, ReleaseLevel::Ga);
    }

    #[test]
    fn test_disclaimer_on_last_scanned_line() {
        let mut lines = filler(60);
        lines[MAX_SCANNED_LINES - 1] = BETA_INDICATOR.to_string();
        assert_eq!(scan_doc(Cursor::new(lines.join("\n"))), ReleaseLevel::Beta);
    }

    #[test]
    fn test_missing_doc_file_is_error() {
        let temp = TempDir::new().unwrap();
        let result = resolve_release_level(temp.path(), FOO_IMPORT_PATH, "/foo/apiv1");
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_non_utf8_line_does_not_abort_scan() {
        let mut content = b"// \xff\xfe garbage\n".to_vec();
        content.extend_from_slice(format!("// {}\n", BETA_INDICATOR).as_bytes());
        assert_eq!(scan_doc(Cursor::new(content)), ReleaseLevel::Beta);
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))
        }
    }

    #[test]
    fn test_read_error_is_ga() {
        assert_eq!(scan_doc(BufReader::new(FailingReader)), ReleaseLevel::Ga);
    }
}
