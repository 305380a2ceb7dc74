use regex::Regex;

/// Decides which requests reach a hook: a pattern over the specifier (resolve) or path
/// (load), optionally restricted to one namespace.
#[derive(Debug, Clone)]
pub struct HookFilter {
  /// `None` accepts every path.
  filter: Option<Regex>,
  namespace: Option<String>,
}

impl HookFilter {
  pub fn new(filter: &str) -> Result<Self, regex::Error> {
    Ok(Self {
      filter: Some(Regex::new(filter)?),
      namespace: None,
    })
  }

  pub fn any() -> Self {
    Self {
      filter: None,
      namespace: None,
    }
  }

  pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
    self.namespace = Some(namespace.into());
    self
  }

  pub fn matches(&self, path: &str, namespace: &str) -> bool {
    self
      .namespace
      .as_deref()
      .map_or(true, |expected| expected == namespace)
      && self
        .filter
        .as_ref()
        .map_or(true, |filter| filter.is_match(path))
  }
}
