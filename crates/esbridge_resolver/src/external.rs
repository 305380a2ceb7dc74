use rustc_hash::FxHashSet;

/// Module names left out of the bundle.
#[derive(Debug, Default, Clone)]
pub struct ExternalFilter {
  names: FxHashSet<String>,
}

impl ExternalFilter {
  pub fn new(names: impl IntoIterator<Item = String>) -> Self {
    Self {
      names: names.into_iter().collect(),
    }
  }

  /// Exact match only. `lodash` does not cover `lodash/fp`.
  pub fn is_external(&self, specifier: &str) -> bool {
    self.names.contains(specifier)
  }

  pub fn is_empty(&self) -> bool {
    self.names.is_empty()
  }
}
