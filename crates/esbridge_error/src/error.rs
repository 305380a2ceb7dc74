use std::fmt::Display;

use crate::ErrorKind;

#[derive(Debug)]
pub struct Error {
  contexts: Vec<String>,
  pub kind: ErrorKind,
}

impl PartialEq for Error {
  fn eq(&self, other: &Self) -> bool {
    self.kind.to_string().eq(&other.kind.to_string())
  }
}

impl Eq for Error {}

impl Error {
  fn with_kind(kind: ErrorKind) -> Self {
    Self {
      contexts: vec![],
      kind,
    }
  }

  pub fn context(mut self, context: String) -> Self {
    self.contexts.push(context);
    self
  }

  pub fn contexts(&self) -> &[String] {
    &self.contexts
  }

  // --- Resolution

  /// A relative import with no file behind it, nor behind any probed extension.
  pub fn unresolved_import(specifier: impl Into<String>, importer: impl Into<String>) -> Self {
    Self::with_kind(ErrorKind::UnresolvedImport {
      specifier: specifier.into(),
      importer: importer.into(),
    })
  }

  // --- Virtual file system

  pub fn read_file_failed(path: impl Into<String>, source: std::io::Error) -> Self {
    Self::with_kind(ErrorKind::ReadFileFailed {
      path: path.into(),
      source,
    })
  }

  pub fn write_file_failed(path: impl Into<String>, source: std::io::Error) -> Self {
    Self::with_kind(ErrorKind::WriteFileFailed {
      path: path.into(),
      source,
    })
  }

  // --- Build

  pub fn engine_init_failed(reason: impl Into<String>) -> Self {
    Self::with_kind(ErrorKind::EngineInitFailed {
      reason: reason.into(),
    })
  }

  pub fn invalid_build_config(reason: impl Into<String>) -> Self {
    Self::with_kind(ErrorKind::InvalidBuildConfig {
      reason: reason.into(),
    })
  }

  pub fn build_failed(errors: Vec<String>) -> Self {
    Self::with_kind(ErrorKind::BuildFailed { errors })
  }

  pub fn panic(msg: String) -> Self {
    anyhow::format_err!(msg).into()
  }
}

impl std::convert::From<anyhow::Error> for Error {
  fn from(value: anyhow::Error) -> Self {
    Self::with_kind(ErrorKind::Panic { source: value })
  }
}

impl std::error::Error for Error {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match &self.kind {
      ErrorKind::Panic { source, .. } => Some(source.as_ref()),
      ErrorKind::ReadFileFailed { source, .. } | ErrorKind::WriteFileFailed { source, .. } => {
        Some(source)
      }
      _ => None,
    }
  }
}

impl Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    for ctx in self.contexts.iter().rev() {
      writeln!(f, "{}: {}", ansi_term::Color::Yellow.paint("context"), ctx)?;
    }

    self.kind.fmt(f)
  }
}
