use std::fmt::Display;

pub mod error_code;

#[derive(Debug)]
pub enum ErrorKind {
  // --- Resolution
  UnresolvedImport {
    specifier: String,
    importer: String,
  },

  // --- Virtual file system
  ReadFileFailed {
    path: String,
    source: std::io::Error,
  },
  WriteFileFailed {
    path: String,
    source: std::io::Error,
  },

  // --- Build
  EngineInitFailed {
    reason: String,
  },
  InvalidBuildConfig {
    reason: String,
  },
  /// The engine reported at least one error. Messages are kept verbatim.
  BuildFailed {
    errors: Vec<String>,
  },

  /// This error means that esbridge hits an unrecoverable state.
  ///
  /// We also use this to replace `panic!()` in the code for graceful shutdown.
  /// But this is not recommended.
  Panic {
    source: anyhow::Error,
  },
}

impl Display for ErrorKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ErrorKind::UnresolvedImport { specifier, importer } => {
        if importer.is_empty() {
          write!(f, "Could not resolve \"{specifier}\"")
        } else {
          write!(f, "Could not resolve \"{specifier}\" from \"{importer}\"")
        }
      }
      ErrorKind::ReadFileFailed { path, source } => {
        write!(f, "Read file failed: {path} {source}")
      }
      ErrorKind::WriteFileFailed { path, source } => {
        write!(f, "Write file failed: {path} {source}")
      }
      ErrorKind::EngineInitFailed { reason } => {
        write!(f, "Bundler engine failed to initialize: {reason}")
      }
      ErrorKind::InvalidBuildConfig { reason } => write!(f, "Invalid build config: {reason}"),
      ErrorKind::BuildFailed { errors } => {
        write!(f, "Build failed with {} error(s)", errors.len())?;
        for error in errors {
          write!(f, "\n  {error}")?;
        }
        Ok(())
      }
      ErrorKind::Panic { source } => source.fmt(f),
    }
  }
}

impl ErrorKind {
  pub fn code(&self) -> &'static str {
    match self {
      ErrorKind::UnresolvedImport { .. } => error_code::UNRESOLVED_IMPORT,
      ErrorKind::ReadFileFailed { .. } => error_code::READ_FILE_FAILED,
      ErrorKind::WriteFileFailed { .. } => error_code::WRITE_FILE_FAILED,
      ErrorKind::EngineInitFailed { .. } => error_code::ENGINE_INIT_FAILED,
      ErrorKind::InvalidBuildConfig { .. } => error_code::INVALID_BUILD_CONFIG,
      ErrorKind::BuildFailed { .. } => error_code::BUILD_FAILED,
      ErrorKind::Panic { .. } => error_code::PANIC,
    }
  }
}
