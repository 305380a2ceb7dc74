//! Pure helpers over `/`-separated virtual paths. No I/O happens here.

use std::path::{Path, PathBuf};

use sugar_path::SugarPath;

fn to_virtual(path: &Path) -> String {
  let normalized: PathBuf = path.normalize().into();
  normalized.to_slash_lossy().to_string()
}

/// Joins `path` onto `base` and normalizes `.` and `..` segments.
///
/// An absolute `path` replaces `base`.
pub fn join(base: &str, path: &str) -> String {
  to_virtual(&base.as_path().join(path))
}

/// Directory part of `path`. The root is its own directory, an empty path stays empty.
pub fn dirname(path: &str) -> String {
  match path.as_path().parent() {
    Some(parent) => parent.to_slash_lossy().to_string(),
    None if path.starts_with('/') => "/".to_string(),
    None => String::new(),
  }
}

/// Resolves `path` against `base` unless it is already absolute.
pub fn resolve(base: &str, path: &str) -> String {
  if path.as_path().is_absolute() {
    to_virtual(path.as_path())
  } else {
    join(base, path)
  }
}

/// Extension of the last segment, without the dot.
pub fn extension_of(path: &str) -> Option<&str> {
  Path::new(path).extension().and_then(|ext| ext.to_str())
}

/// `./a`, `../a` and `/a` are relative to their importer. Everything else is bare.
pub fn is_relative_specifier(specifier: &str) -> bool {
  specifier.starts_with('.') || specifier.starts_with('/')
}
