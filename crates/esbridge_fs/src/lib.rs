use std::sync::Arc;

mod memory;
pub use memory::*;
mod os;
pub use os::*;

/// Asynchronous file access provided by the host.
///
/// Paths are absolute virtual paths using `/` as separator. "Not found" is never an
/// error for [FileSystem::exists].
#[async_trait::async_trait]
pub trait FileSystem: std::fmt::Debug + Send + Sync {
  async fn exists(&self, path: &str) -> bool;

  async fn read(&self, path: &str) -> std::io::Result<Vec<u8>>;

  async fn write(&self, path: &str, contents: &[u8]) -> std::io::Result<()>;
}

pub type SharedFileSystem = Arc<dyn FileSystem>;
