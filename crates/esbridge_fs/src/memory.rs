use rustc_hash::FxHashMap;
use tokio::sync::RwLock;

use crate::FileSystem;

/// A [FileSystem] held entirely in memory.
///
/// Directories are implicit: a path exists if it names a file or any ancestor of a file,
/// like `stat` on a real disk.
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
  files: RwLock<FxHashMap<String, Vec<u8>>>,
}

impl MemoryFileSystem {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_files<P, C>(files: impl IntoIterator<Item = (P, C)>) -> Self
  where
    P: Into<String>,
    C: Into<Vec<u8>>,
  {
    Self {
      files: RwLock::new(
        files
          .into_iter()
          .map(|(path, contents)| (path.into(), contents.into()))
          .collect(),
      ),
    }
  }

  pub async fn get(&self, path: &str) -> Option<Vec<u8>> {
    self.files.read().await.get(path).cloned()
  }
}

fn is_ancestor_of(dir: &str, file: &str) -> bool {
  let dir = dir.trim_end_matches('/');
  file
    .strip_prefix(dir)
    .map_or(false, |rest| rest.starts_with('/'))
}

#[async_trait::async_trait]
impl FileSystem for MemoryFileSystem {
  async fn exists(&self, path: &str) -> bool {
    let files = self.files.read().await;
    files.contains_key(path) || files.keys().any(|file| is_ancestor_of(path, file))
  }

  async fn read(&self, path: &str) -> std::io::Result<Vec<u8>> {
    self.files.read().await.get(path).cloned().ok_or_else(|| {
      std::io::Error::new(
        std::io::ErrorKind::NotFound,
        format!("no such file: {path}"),
      )
    })
  }

  async fn write(&self, path: &str, contents: &[u8]) -> std::io::Result<()> {
    self
      .files
      .write()
      .await
      .insert(path.to_string(), contents.to_vec());
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn directories_exist_implicitly() {
    let fs = MemoryFileSystem::with_files([("/proj/node_modules/left-pad/index.js", "")]);
    assert!(fs.exists("/proj/node_modules/left-pad").await);
    assert!(fs.exists("/proj/node_modules/left-pad/").await);
    assert!(fs.exists("/proj").await);
    assert!(!fs.exists("/proj/node_modules/left").await);
    assert!(!fs.exists("/proj/node_modules/left-pad.js").await);
  }

  #[tokio::test]
  async fn read_missing_file_is_not_found() {
    let fs = MemoryFileSystem::new();
    let err = fs.read("/nope.ts").await.unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
  }

  #[tokio::test]
  async fn write_then_read() {
    let fs = MemoryFileSystem::new();
    fs.write("/out/main.js", b"console.log(1)").await.unwrap();
    assert_eq!(fs.read("/out/main.js").await.unwrap(), b"console.log(1)");
    assert!(fs.exists("/out").await);
  }
}
