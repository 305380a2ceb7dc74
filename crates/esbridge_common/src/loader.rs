use std::fmt::Display;

use sugar_path::SugarPath;

/// Tells the engine which grammar to apply to a loaded file.
///
/// The tag is the file extension without its leading dot, so an extension the engine may
/// know about but we don't is still passed through as [Loader::Other].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Loader {
  Js,
  Jsx,
  Ts,
  Tsx,
  Json,
  Css,
  Text,
  Other(String),
}

impl Loader {
  /// Extensionless paths load as JavaScript.
  pub fn from_path(path: &str) -> Self {
    path
      .as_path()
      .extension()
      .map(|ext| Self::from(ext.to_string_lossy().as_ref()))
      .unwrap_or(Self::Js)
  }

  pub fn as_str(&self) -> &str {
    match self {
      Self::Js => "js",
      Self::Jsx => "jsx",
      Self::Ts => "ts",
      Self::Tsx => "tsx",
      Self::Json => "json",
      Self::Css => "css",
      Self::Text => "text",
      Self::Other(tag) => tag,
    }
  }
}

impl From<&str> for Loader {
  fn from(s: &str) -> Self {
    match s {
      "js" => Self::Js,
      "jsx" => Self::Jsx,
      "ts" => Self::Ts,
      "tsx" => Self::Tsx,
      "json" => Self::Json,
      "css" => Self::Css,
      "text" => Self::Text,
      other => Self::Other(other.to_string()),
    }
  }
}

impl Display for Loader {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}
