use std::borrow::Cow;

use esbridge_common::{LoadedSource, Loader};
use esbridge_fs::SharedFileSystem;
use esbridge_plugin::{
  async_trait, BuildPlugin, HookFilter, LoadArgs, LoadOutput, PluginName, ResolveArgs,
  ResolveOutput,
};
use esbridge_resolver::{ExternalFilter, Resolver};

pub const PLUGIN_NAME: &str = "esbridge:vfs";

/// Serves both hooks from a virtual file system.
#[derive(Debug)]
pub struct VfsPlugin {
  fs: SharedFileSystem,
  resolver: Resolver,
  filter: HookFilter,
}

impl VfsPlugin {
  pub fn new(fs: SharedFileSystem, base_path: impl Into<String>, external: ExternalFilter) -> Self {
    let resolver = Resolver::new(fs.clone(), base_path, external).with_plugin_name(PLUGIN_NAME);
    Self {
      fs,
      resolver,
      filter: HookFilter::any(),
    }
  }

  pub fn new_boxed(
    fs: SharedFileSystem,
    base_path: impl Into<String>,
    external: ExternalFilter,
  ) -> Box<dyn BuildPlugin> {
    Box::new(Self::new(fs, base_path, external))
  }
}

#[async_trait::async_trait]
impl BuildPlugin for VfsPlugin {
  fn name(&self) -> PluginName {
    Cow::Borrowed(PLUGIN_NAME)
  }

  fn resolve_filter(&self) -> Option<&HookFilter> {
    Some(&self.filter)
  }

  fn load_filter(&self) -> Option<&HookFilter> {
    Some(&self.filter)
  }

  async fn resolve(&self, args: &ResolveArgs<'_>) -> ResolveOutput {
    self
      .resolver
      .resolve(args.importer, args.specifier, args.namespace)
      .await
  }

  async fn load(&self, args: &LoadArgs<'_>) -> LoadOutput {
    tracing::debug!(path = args.path, "loading");
    match self.fs.read(args.path).await {
      Ok(contents) => {
        let loader = Loader::from_path(args.path);
        tracing::info!(path = args.path, loader = %loader, "loaded");
        Ok(Some(LoadedSource { contents, loader }))
      }
      Err(err) => {
        let err = esbridge_error::Error::read_file_failed(args.path, err);
        tracing::error!(path = args.path, error = %err, "load failed");
        Ok(None)
      }
    }
  }
}
