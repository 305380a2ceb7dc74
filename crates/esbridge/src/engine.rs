use std::fmt::Debug;

use esbridge_plugin::SharedPluginDriver;

use crate::BuildConfig;

/// A diagnostic reported by the engine, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
  pub text: String,
}

impl Message {
  pub fn new(text: impl Into<String>) -> Self {
    Self { text: text.into() }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
  /// Relative to the base path, or absolute.
  pub path: String,
  pub contents: Vec<u8>,
}

#[derive(Debug, Default)]
pub struct EngineOutput {
  pub errors: Vec<Message>,
  pub warnings: Vec<Message>,
  pub output_files: Vec<OutputFile>,
}

/// The WebAssembly bundler we drive.
///
/// The engine owns parsing, transforms and the module graph. Every import it cannot
/// handle itself goes through the plugin driver it is given.
#[async_trait::async_trait]
pub trait BundlerEngine: Debug + Send + Sync {
  /// Compiles the engine module. Called at most once per [crate::Bundler].
  async fn initialize(&self, wasm_module: Vec<u8>) -> esbridge_error::Result<()>;

  async fn build(
    &self,
    config: &BuildConfig,
    plugins: SharedPluginDriver,
  ) -> esbridge_error::Result<EngineOutput>;
}
