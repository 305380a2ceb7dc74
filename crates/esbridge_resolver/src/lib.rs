use esbridge_common::{Resolution, ResolvedPath, StaticStr, FILE_NAMESPACE};
use esbridge_fs::SharedFileSystem;

mod external;
pub use external::*;
mod node_modules;
pub use node_modules::*;
pub mod path;
mod prober;
pub use prober::*;

pub const NODE_MODULES: &str = "node_modules";

/// Maps specifiers to virtual paths without touching a local disk.
///
/// Everything here is fixed at construction, so one resolver can serve concurrent
/// requests for a whole build.
#[derive(Debug, Clone)]
pub struct Resolver {
  fs: SharedFileSystem,
  base_path: String,
  node_modules: String,
  external: ExternalFilter,
  plugin_name: Option<StaticStr>,
}

impl Resolver {
  pub fn new(fs: SharedFileSystem, base_path: impl Into<String>, external: ExternalFilter) -> Self {
    let base_path = base_path.into();
    let node_modules = path::join(&base_path, NODE_MODULES);
    Self {
      fs,
      base_path,
      node_modules,
      external,
      plugin_name: None,
    }
  }

  /// Tag attached to paths resolved against the base path without probing.
  pub fn with_plugin_name(mut self, plugin_name: impl Into<StaticStr>) -> Self {
    self.plugin_name = Some(plugin_name.into());
    self
  }

  /// `Ok(None)` hands the specifier back to the engine, which reports it as missing.
  ///
  /// A relative specifier that matches nothing is an error instead: the engine has no
  /// other way to produce that file.
  pub async fn resolve(
    &self,
    importer: &str,
    specifier: &str,
    namespace: &str,
  ) -> esbridge_error::Result<Option<Resolution>> {
    tracing::debug!(specifier, importer, "resolving");
    let namespace = if namespace.is_empty() {
      FILE_NAMESPACE
    } else {
      namespace
    };

    if path::is_relative_specifier(specifier) {
      let dir = if importer.is_empty() {
        self.base_path.clone()
      } else {
        path::dirname(importer)
      };
      let candidate = path::join(&dir, specifier);
      return match probe_extensions(self.fs.as_ref(), &candidate, &DEFAULT_EXTENSIONS).await {
        Some(resolved) => {
          tracing::info!(specifier, path = %resolved, "resolved");
          Ok(Some(Resolution::Resolved(ResolvedPath::new(
            resolved, namespace,
          ))))
        }
        None => {
          tracing::error!(specifier, importer, "could not resolve relative import");
          Err(esbridge_error::Error::unresolved_import(specifier, importer))
        }
      };
    }

    if self.external.is_external(specifier) {
      tracing::info!(specifier, "external");
      return Ok(Some(Resolution::External));
    }

    if path::extension_of(specifier).is_none() {
      return match resolve_node_module(self.fs.as_ref(), &self.node_modules, specifier).await {
        Some(resolved) => {
          tracing::info!(specifier, path = %resolved, "resolved from node_modules");
          Ok(Some(Resolution::Resolved(ResolvedPath::new(
            resolved, namespace,
          ))))
        }
        None => {
          tracing::error!(
            specifier,
            importer,
            node_modules = %self.node_modules,
            "package not found"
          );
          Ok(None)
        }
      };
    }

    let resolved = path::resolve(&self.base_path, specifier);
    tracing::info!(specifier, path = %resolved, "resolved against base path");
    let mut resolved = ResolvedPath::new(resolved, namespace);
    resolved.plugin_name = self.plugin_name.clone();
    Ok(Some(Resolution::Resolved(resolved)))
  }
}
