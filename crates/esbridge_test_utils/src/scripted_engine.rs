use std::{
  collections::{HashSet, VecDeque},
  sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
  },
};

use esbridge::{
  BuildConfig, BundlerEngine, EngineOutput, LoadArgs, Message, OutputFile, PluginDriver,
  ResolveArgs, Resolution, ResolvedPath, SharedPluginDriver,
};
use esbridge_resolver::path;
use futures::future::join_all;
use regex::Regex;

/// A stand-in for the WebAssembly engine.
///
/// It follows `import`/`export ... from` statements through the plugin driver exactly the
/// way the real engine calls its hooks, and emits one artifact per entry point holding the
/// loaded sources in visit order.
#[derive(Debug)]
pub struct ScriptedEngine {
  import_pattern: Regex,
  init_failure: Option<String>,
  init_calls: AtomicUsize,
  loaded: Mutex<Vec<String>>,
  externals: Mutex<Vec<String>>,
  extra_warnings: Vec<String>,
}

impl Default for ScriptedEngine {
  fn default() -> Self {
    Self {
      import_pattern: Regex::new(r#"(?m)^\s*(?:import|export)\b[^'"\n]*?['"]([^'"\n]+)['"]"#)
        .unwrap(),
      init_failure: None,
      init_calls: AtomicUsize::new(0),
      loaded: Default::default(),
      externals: Default::default(),
      extra_warnings: vec![],
    }
  }
}

impl ScriptedEngine {
  pub fn new() -> Self {
    Self::default()
  }

  /// An engine whose initialization always fails with `reason`.
  pub fn failing_init(reason: &str) -> Self {
    Self {
      init_failure: Some(reason.to_string()),
      ..Default::default()
    }
  }

  /// Reports `warning` on every build.
  pub fn with_warning(mut self, warning: &str) -> Self {
    self.extra_warnings.push(warning.to_string());
    self
  }

  pub fn init_calls(&self) -> usize {
    self.init_calls.load(Ordering::SeqCst)
  }

  /// Paths handed to the load hook, in order.
  pub fn loaded(&self) -> Vec<String> {
    self.loaded.lock().unwrap().clone()
  }

  /// Specifiers the resolve hook marked as external.
  pub fn externals(&self) -> Vec<String> {
    self.externals.lock().unwrap().clone()
  }

  fn scan_imports(&self, source: &str) -> Vec<String> {
    self
      .import_pattern
      .captures_iter(source)
      .map(|cap| cap[1].to_string())
      .collect()
  }

  fn output_path(config: &BuildConfig, entry: &ResolvedPath) -> String {
    if let Some(outfile) = &config.outfile {
      return outfile.clone();
    }
    let outdir = config.outdir.as_deref().unwrap_or("out");
    let stem = entry
      .path
      .rsplit('/')
      .next()
      .and_then(|name| name.split('.').next())
      .unwrap_or("out");
    path::join(outdir, &format!("{stem}.js"))
  }

  async fn resolve_into(
    &self,
    plugins: &PluginDriver,
    args: ResolveArgs<'_>,
    errors: &mut Vec<Message>,
  ) -> Option<ResolvedPath> {
    let specifier = args.specifier;
    let outcome = plugins.resolve(&args).await;
    self.record(specifier, outcome, errors)
  }

  fn record(
    &self,
    specifier: &str,
    outcome: esbridge::Result<Option<Resolution>>,
    errors: &mut Vec<Message>,
  ) -> Option<ResolvedPath> {
    match outcome {
      Ok(Some(Resolution::Resolved(resolved))) => Some(resolved),
      Ok(Some(Resolution::External)) => {
        self.externals.lock().unwrap().push(specifier.to_string());
        None
      }
      Ok(None) => {
        errors.push(Message::new(format!("Could not resolve \"{specifier}\"")));
        None
      }
      Err(err) => {
        errors.push(Message::new(err.to_string()));
        None
      }
    }
  }

  async fn bundle_entry(
    &self,
    plugins: &PluginDriver,
    entry: ResolvedPath,
    errors: &mut Vec<Message>,
  ) -> Vec<u8> {
    let mut bundle = Vec::new();
    let mut visited = HashSet::from([entry.path.clone()]);
    let mut queue = VecDeque::from([entry]);

    while let Some(module) = queue.pop_front() {
      self.loaded.lock().unwrap().push(module.path.clone());
      let loaded = plugins
        .load(&LoadArgs {
          path: &module.path,
          namespace: &module.namespace,
        })
        .await;
      let source = match loaded {
        Ok(Some(source)) => source,
        Ok(None) => {
          errors.push(Message::new(format!("Could not load \"{}\"", module.path)));
          continue;
        }
        Err(err) => {
          errors.push(Message::new(err.to_string()));
          continue;
        }
      };

      let text = String::from_utf8_lossy(&source.contents).to_string();
      let specifiers = self.scan_imports(&text);
      let importer = module.path.as_str();
      let namespace = module.namespace.as_str();
      let outcomes = join_all(specifiers.iter().map(|specifier| async move {
        plugins
          .resolve(&ResolveArgs {
            specifier,
            importer,
            namespace,
          })
          .await
      }))
      .await;
      for (specifier, outcome) in specifiers.iter().zip(outcomes) {
        if let Some(resolved) = self.record(specifier, outcome, errors) {
          if visited.insert(resolved.path.clone()) {
            queue.push_back(resolved);
          }
        }
      }

      bundle.extend_from_slice(format!("// {} ({})\n", module.path, source.loader).as_bytes());
      bundle.extend_from_slice(&source.contents);
      bundle.push(b'\n');
    }
    bundle
  }
}

#[async_trait::async_trait]
impl BundlerEngine for ScriptedEngine {
  async fn initialize(&self, wasm_module: Vec<u8>) -> esbridge::Result<()> {
    tokio::task::yield_now().await;
    self.init_calls.fetch_add(1, Ordering::SeqCst);
    if let Some(reason) = &self.init_failure {
      return Err(esbridge::Error::panic(reason.clone()));
    }
    if wasm_module.is_empty() {
      return Err(esbridge::Error::panic("empty engine module".to_string()));
    }
    Ok(())
  }

  async fn build(
    &self,
    config: &BuildConfig,
    plugins: SharedPluginDriver,
  ) -> esbridge::Result<EngineOutput> {
    let mut output = EngineOutput {
      warnings: self.extra_warnings.iter().map(Message::new).collect(),
      ..Default::default()
    };

    for entry in config.entry_points() {
      let resolved = self
        .resolve_into(
          &plugins,
          ResolveArgs {
            specifier: entry,
            importer: "",
            namespace: "file",
          },
          &mut output.errors,
        )
        .await;
      let Some(resolved) = resolved else {
        continue;
      };
      let out_path = Self::output_path(config, &resolved);
      let contents = self
        .bundle_entry(&plugins, resolved, &mut output.errors)
        .await;
      output.output_files.push(OutputFile {
        path: out_path,
        contents,
      });
    }

    if !output.errors.is_empty() {
      output.output_files.clear();
    }
    Ok(output)
  }
}
