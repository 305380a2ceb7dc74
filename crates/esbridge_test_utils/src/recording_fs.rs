use std::sync::Mutex;

use esbridge::{FileSystem, MemoryFileSystem};

/// A [MemoryFileSystem] that remembers every call made to it, in order.
#[derive(Debug, Default)]
pub struct RecordingFileSystem {
  inner: MemoryFileSystem,
  probes: Mutex<Vec<String>>,
  reads: Mutex<Vec<String>>,
  writes: Mutex<Vec<String>>,
  denied: Mutex<Vec<String>>,
}

impl RecordingFileSystem {
  pub fn with_files(files: impl IntoIterator<Item = (String, String)>) -> Self {
    Self {
      inner: MemoryFileSystem::with_files(files),
      ..Default::default()
    }
  }

  pub fn inner(&self) -> &MemoryFileSystem {
    &self.inner
  }

  /// Paths passed to `exists`.
  pub fn probes(&self) -> Vec<String> {
    self.probes.lock().unwrap().clone()
  }

  pub fn reads(&self) -> Vec<String> {
    self.reads.lock().unwrap().clone()
  }

  pub fn writes(&self) -> Vec<String> {
    self.writes.lock().unwrap().clone()
  }

  /// Makes every later read or write of `path` fail with `PermissionDenied`. The path
  /// still exists.
  pub fn deny(&self, path: &str) {
    self.denied.lock().unwrap().push(path.to_string());
  }

  fn check_access(&self, path: &str) -> std::io::Result<()> {
    if self.denied.lock().unwrap().iter().any(|denied| denied == path) {
      return Err(std::io::Error::new(
        std::io::ErrorKind::PermissionDenied,
        format!("permission denied: {path}"),
      ));
    }
    Ok(())
  }
}

#[async_trait::async_trait]
impl FileSystem for RecordingFileSystem {
  async fn exists(&self, path: &str) -> bool {
    self.probes.lock().unwrap().push(path.to_string());
    self.inner.exists(path).await
  }

  async fn read(&self, path: &str) -> std::io::Result<Vec<u8>> {
    self.reads.lock().unwrap().push(path.to_string());
    self.check_access(path)?;
    self.inner.read(path).await
  }

  async fn write(&self, path: &str, contents: &[u8]) -> std::io::Result<()> {
    self.writes.lock().unwrap().push(path.to_string());
    self.check_access(path)?;
    self.inner.write(path, contents).await
  }
}
