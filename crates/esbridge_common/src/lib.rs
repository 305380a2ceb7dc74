use std::borrow::Cow;

mod loader;
pub use loader::*;

pub type StaticStr = Cow<'static, str>;

/// Namespace used for everything living on the virtual file system.
pub const FILE_NAMESPACE: &str = "file";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedPath {
  /// Absolute virtual path.
  pub path: String,
  pub namespace: String,
  /// Set when the path was produced without a file-system probe, so the engine routes the
  /// load back to the plugin that resolved it.
  pub plugin_name: Option<StaticStr>,
}

impl ResolvedPath {
  pub fn new(path: impl Into<String>, namespace: impl Into<String>) -> Self {
    Self {
      path: path.into(),
      namespace: namespace.into(),
      plugin_name: None,
    }
  }

  pub fn with_plugin_name(mut self, plugin_name: impl Into<StaticStr>) -> Self {
    self.plugin_name = Some(plugin_name.into());
    self
  }
}

/// Outcome of a resolve hook that did not defer to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Resolution {
  Resolved(ResolvedPath),
  /// Left untouched in the output, to be satisfied at runtime.
  External,
}

impl Resolution {
  pub fn path(&self) -> Option<&str> {
    match self {
      Resolution::Resolved(resolved) => Some(&resolved.path),
      Resolution::External => None,
    }
  }

  pub fn is_external(&self) -> bool {
    matches!(self, Resolution::External)
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedSource {
  pub contents: Vec<u8>,
  pub loader: Loader,
}
