use std::sync::Arc;

use crate::{BuildPlugin, LoadArgs, LoadOutput, ResolveArgs, ResolveOutput};

pub type SharedPluginDriver = Arc<PluginDriver>;

/// Runs the registered hooks in registration order. The first plugin returning `Some`
/// wins; an error stops the chain.
#[derive(Debug, Default)]
pub struct PluginDriver {
  plugins: Vec<Box<dyn BuildPlugin>>,
}

impl PluginDriver {
  pub fn new(plugins: Vec<Box<dyn BuildPlugin>>) -> Self {
    Self { plugins }
  }

  pub fn into_shared(self) -> SharedPluginDriver {
    Arc::new(self)
  }

  pub async fn resolve(&self, args: &ResolveArgs<'_>) -> ResolveOutput {
    for plugin in &self.plugins {
      let accepts = plugin
        .resolve_filter()
        .map_or(false, |filter| filter.matches(args.specifier, args.namespace));
      if !accepts {
        continue;
      }
      let output = plugin.resolve(args).await?;
      if output.is_some() {
        tracing::trace!("{} resolved {}", plugin.name(), args.specifier);
        return Ok(output);
      }
    }
    Ok(None)
  }

  pub async fn load(&self, args: &LoadArgs<'_>) -> LoadOutput {
    for plugin in &self.plugins {
      let accepts = plugin
        .load_filter()
        .map_or(false, |filter| filter.matches(args.path, args.namespace));
      if !accepts {
        continue;
      }
      let output = plugin.load(args).await?;
      if output.is_some() {
        tracing::trace!("{} loaded {}", plugin.name(), args.path);
        return Ok(output);
      }
    }
    Ok(None)
  }
}
