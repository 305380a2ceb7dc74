use std::{borrow::Cow, fmt::Debug};

use esbridge_common::{LoadedSource, Resolution};

use crate::{HookFilter, LoadArgs, ResolveArgs};

pub type ResolveOutput = esbridge_error::Result<Option<Resolution>>;
pub type LoadOutput = esbridge_error::Result<Option<LoadedSource>>;
pub type PluginName<'a> = Cow<'a, str>;

/// A hook pair the engine calls back into.
///
/// A hook only runs for requests its filter accepts; a plugin without a filter for a hook
/// never sees those requests. Returning `Ok(None)` passes the request on.
#[async_trait::async_trait]
pub trait BuildPlugin: Debug + Send + Sync {
  fn name(&self) -> PluginName;

  fn resolve_filter(&self) -> Option<&HookFilter> {
    None
  }

  fn load_filter(&self) -> Option<&HookFilter> {
    None
  }

  async fn resolve(&self, _args: &ResolveArgs<'_>) -> ResolveOutput {
    Ok(None)
  }

  async fn load(&self, _args: &LoadArgs<'_>) -> LoadOutput {
    Ok(None)
  }
}
