use std::path::PathBuf;

use sugar_path::SugarPath;

use crate::FileSystem;

/// A [FileSystem] backed by the local disk, with virtual paths mapped under `root`.
#[derive(Debug, Clone)]
pub struct OsFileSystem {
  root: PathBuf,
}

impl OsFileSystem {
  pub fn with_root(root: PathBuf) -> Self {
    Self { root }
  }

  fn real_path(&self, path: &str) -> PathBuf {
    self.root.join(path.trim_start_matches('/').as_path())
  }
}

#[async_trait::async_trait]
impl FileSystem for OsFileSystem {
  async fn exists(&self, path: &str) -> bool {
    tokio::fs::metadata(self.real_path(path)).await.is_ok()
  }

  async fn read(&self, path: &str) -> std::io::Result<Vec<u8>> {
    tokio::fs::read(self.real_path(path)).await
  }

  async fn write(&self, path: &str, contents: &[u8]) -> std::io::Result<()> {
    let dest = self.real_path(path);
    if let Some(parent) = dest.parent() {
      if tokio::fs::metadata(parent).await.is_err() {
        tracing::trace!("creating directory {}", parent.display());
        tokio::fs::create_dir_all(parent).await?;
      }
    }
    tokio::fs::write(dest, contents).await
  }
}
