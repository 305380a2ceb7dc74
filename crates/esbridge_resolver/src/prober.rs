use esbridge_fs::FileSystem;

/// Extensions tried, in order, after the literal path of a relative import.
pub const DEFAULT_EXTENSIONS: [&str; 4] = [".ts", ".js", ".tsx", ".jsx"];

/// Returns the first of `candidate`, `candidate + ext`... that exists.
///
/// Checks run one at a time in list order and stop at the first hit, so a miss costs
/// exactly `1 + extensions.len()` probes.
pub async fn probe_extensions(
  fs: &dyn FileSystem,
  candidate: &str,
  extensions: &[&str],
) -> Option<String> {
  if fs.exists(candidate).await {
    return Some(candidate.to_string());
  }
  for ext in extensions {
    let path = format!("{candidate}{ext}");
    tracing::trace!(path, "probing");
    if fs.exists(&path).await {
      return Some(path);
    }
  }
  None
}
