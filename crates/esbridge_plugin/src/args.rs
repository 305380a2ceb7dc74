#[derive(Debug, Clone)]
pub struct ResolveArgs<'a> {
  pub specifier: &'a str,
  /// Absolute path of the importing module. Empty for entry points.
  pub importer: &'a str,
  pub namespace: &'a str,
}

#[derive(Debug, Clone)]
pub struct LoadArgs<'a> {
  pub path: &'a str,
  pub namespace: &'a str,
}
