mod build_config;
mod bundler;
mod engine;
pub use {
  build_config::{BuildConfig, Format, Jsx, Platform, BUILD_CONFIG_FILE},
  bundler::{Bundler, BundlerOptions},
  engine::{BundlerEngine, EngineOutput, Message, OutputFile},
  esbridge_common::{LoadedSource, Loader, Resolution, ResolvedPath},
  esbridge_error::{Error, ErrorKind, Result},
  esbridge_fs::{FileSystem, MemoryFileSystem, OsFileSystem, SharedFileSystem},
  esbridge_plugin::{BuildPlugin, LoadArgs, PluginDriver, ResolveArgs, SharedPluginDriver},
  esbridge_plugin_vfs::VfsPlugin,
  esbridge_resolver::{ExternalFilter, Resolver},
};
