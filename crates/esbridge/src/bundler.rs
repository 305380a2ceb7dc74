use std::sync::Arc;

use derivative::Derivative;
use esbridge_fs::SharedFileSystem;
use esbridge_plugin::PluginDriver;
use esbridge_plugin_vfs::VfsPlugin;
use esbridge_resolver::path;
use tokio::sync::OnceCell;

use crate::{BuildConfig, BundlerEngine, OutputFile, BUILD_CONFIG_FILE};

#[derive(Debug, Clone)]
pub struct BundlerOptions {
  /// Workspace root. Bare imports and artifacts are resolved against it.
  pub base_path: String,
  /// Virtual path of the engine's `.wasm` module.
  pub wasm_path: String,
}

/// Drives builds of one workspace through a [BundlerEngine].
///
/// The engine is initialized at most once per `Bundler`. Embedders should create a single
/// `Bundler` per process and share it, so the engine module is read and compiled once.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct Bundler {
  options: BundlerOptions,
  #[derivative(Debug = "ignore")]
  fs: SharedFileSystem,
  #[derivative(Debug = "ignore")]
  engine: Arc<dyn BundlerEngine>,
  /// Outcome of the one engine initialization, shared by every build.
  ready: OnceCell<Result<(), String>>,
}

impl Bundler {
  pub fn new(options: BundlerOptions, fs: SharedFileSystem, engine: Arc<dyn BundlerEngine>) -> Self {
    esbridge_tracing::enable_tracing_on_demand();
    Self {
      options,
      fs,
      engine,
      ready: OnceCell::new(),
    }
  }

  /// Waits for the engine. The first caller triggers initialization, concurrent callers
  /// wait on the same attempt, and a failure is final.
  pub async fn ready(&self) -> esbridge_error::Result<()> {
    self
      .ready
      .get_or_init(|| self.initialize_engine())
      .await
      .clone()
      .map_err(esbridge_error::Error::engine_init_failed)
  }

  async fn initialize_engine(&self) -> Result<(), String> {
    tracing::debug!(wasm_path = %self.options.wasm_path, "initializing engine");
    let wasm_module = self
      .fs
      .read(&self.options.wasm_path)
      .await
      .map_err(|e| esbridge_error::Error::read_file_failed(&self.options.wasm_path, e).to_string())?;
    self
      .engine
      .initialize(wasm_module)
      .await
      .map_err(|e| e.to_string())?;
    tracing::info!("engine ready");
    Ok(())
  }

  /// Reads the workspace's build descriptor, if there is one.
  pub async fn load_config(&self) -> esbridge_error::Result<Option<BuildConfig>> {
    let config_path = path::join(&self.options.base_path, BUILD_CONFIG_FILE);
    if !self.fs.exists(&config_path).await {
      return Ok(None);
    }
    let content = self
      .fs
      .read(&config_path)
      .await
      .map_err(|e| esbridge_error::Error::read_file_failed(&config_path, e))?;
    let config = BuildConfig::from_json(&content)
      .map_err(|e| e.context(format!("Read build config: {config_path}")))?;
    tracing::info!("{:?}", config);
    Ok(Some(config))
  }

  /// Builds with the workspace descriptor, or the default build when there is none, and
  /// writes the artifacts.
  pub async fn build_workspace(&self) -> esbridge_error::Result<Vec<OutputFile>> {
    let config = match self.load_config().await? {
      Some(config) => config,
      None => BuildConfig::default_for(&self.options.base_path),
    };
    self.write(&config).await
  }

  /// Runs the engine and returns its artifacts without persisting them.
  #[tracing::instrument(skip_all)]
  pub async fn generate(&self, config: &BuildConfig) -> esbridge_error::Result<Vec<OutputFile>> {
    self.ready().await?;
    config.validate()?;
    tracing::debug!("{:#?}", config);

    let plugins = PluginDriver::new(vec![VfsPlugin::new_boxed(
      self.fs.clone(),
      self.options.base_path.clone(),
      config.external_filter(),
    )])
    .into_shared();

    let output = self
      .engine
      .build(config, plugins)
      .await
      .map_err(|e| {
        tracing::error!("{}", e);
        e
      })?;

    for warning in &output.warnings {
      tracing::warn!(text = %warning.text, "engine warning");
    }
    for error in &output.errors {
      tracing::error!(text = %error.text, "engine error");
    }
    if !output.errors.is_empty() {
      return Err(esbridge_error::Error::build_failed(
        output.errors.into_iter().map(|e| e.text).collect(),
      ));
    }

    Ok(output.output_files)
  }

  /// Like [Bundler::generate], then writes every artifact under the base path.
  /// Nothing is written if the engine reported an error.
  pub async fn write(&self, config: &BuildConfig) -> esbridge_error::Result<Vec<OutputFile>> {
    let output_files = self.generate(config).await?;
    for file in &output_files {
      let dest = path::join(&self.options.base_path, &file.path);
      tracing::debug!(path = %dest, "writing artifact");
      self
        .fs
        .write(&dest, &file.contents)
        .await
        .map_err(|e| esbridge_error::Error::write_file_failed(&dest, e))?;
    }
    Ok(output_files)
  }
}
