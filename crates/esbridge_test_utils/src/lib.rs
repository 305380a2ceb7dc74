use std::sync::Arc;

mod recording_fs;
pub use recording_fs::*;
mod scripted_engine;
pub use scripted_engine::*;

/// A recording file system holding `files`.
pub fn fixture(files: &[(&str, &str)]) -> Arc<RecordingFileSystem> {
  Arc::new(RecordingFileSystem::with_files(
    files
      .iter()
      .map(|(path, contents)| (path.to_string(), contents.to_string())),
  ))
}
