use esbridge_resolver::{path, ExternalFilter};
use serde::{Deserialize, Serialize};

/// File name of the per-workspace build descriptor.
pub const BUILD_CONFIG_FILE: &str = ".esbuild.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
  Browser,
  Node,
  Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
  Iife,
  Cjs,
  Esm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Jsx {
  Transform,
  Preserve,
  Automatic,
}

/// Parameters of one build.
///
/// A field missing from the descriptor stays `None` and is not serialized, so the engine
/// falls back to its own default for it. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfig {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub entry_points: Option<Vec<String>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub outdir: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub outfile: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub bundle: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub sourcemap: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub target: Option<Vec<String>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub platform: Option<Platform>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub format: Option<Format>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub external: Option<Vec<String>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub minify: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub jsx: Option<Jsx>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub tree_shaking: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub tsconfig: Option<String>,
}

impl BuildConfig {
  pub fn from_json(bytes: &[u8]) -> esbridge_error::Result<Self> {
    let config: Self = serde_json::from_slice(bytes)
      .map_err(|e| esbridge_error::Error::invalid_build_config(e.to_string()))?;
    config.validate()?;
    Ok(config)
  }

  /// The build used when a workspace has no descriptor: `<base>/index.ts` bundled into
  /// `<base>/out` with source maps, targeting es2015.
  pub fn default_for(base_path: &str) -> Self {
    Self {
      entry_points: Some(vec![path::join(base_path, "index.ts")]),
      outdir: Some(path::join(base_path, "out")),
      bundle: Some(true),
      sourcemap: Some(true),
      target: Some(vec!["es2015".to_string()]),
      ..Default::default()
    }
  }

  pub fn validate(&self) -> esbridge_error::Result<()> {
    if self.outdir.is_some() && self.outfile.is_some() {
      return Err(esbridge_error::Error::invalid_build_config(
        "\"outdir\" and \"outfile\" cannot be used together",
      ));
    }
    Ok(())
  }

  pub fn entry_points(&self) -> &[String] {
    self.entry_points.as_deref().unwrap_or_default()
  }

  pub fn external_filter(&self) -> ExternalFilter {
    ExternalFilter::new(self.external.iter().flatten().cloned())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn only_present_fields_are_populated() {
    let config = BuildConfig::from_json(
      br#"{
        "entryPoints": ["./index.ts"],
        "outdir": "out",
        "minify": false,
        "platform": "node",
        "format": "esm",
        "jsx": "automatic",
        "treeShaking": true,
        "tsconfig": "./tsconfig.json",
        "logLevel": "debug"
      }"#,
    )
    .unwrap();

    assert_eq!(config.entry_points(), ["./index.ts".to_string()]);
    assert_eq!(config.minify, Some(false));
    assert_eq!(config.platform, Some(Platform::Node));
    assert_eq!(config.format, Some(Format::Esm));
    assert_eq!(config.jsx, Some(Jsx::Automatic));
    assert_eq!(config.tree_shaking, Some(true));
    assert_eq!(config.bundle, None);
    assert_eq!(config.outfile, None);

    let json = serde_json::to_value(&config).unwrap();
    let keys = json.as_object().unwrap().keys().cloned().collect::<Vec<_>>();
    assert_eq!(
      keys.len(),
      8,
      "absent fields must not be serialized: {keys:?}"
    );
    assert!(!keys.contains(&"bundle".to_string()));
    assert!(!keys.contains(&"logLevel".to_string()));
  }

  #[test]
  fn outdir_and_outfile_are_exclusive() {
    let err = BuildConfig::from_json(br#"{ "outdir": "out", "outfile": "out.js" }"#).unwrap_err();
    assert_eq!(err.kind.code(), "INVALID_BUILD_CONFIG");
  }

  #[test]
  fn malformed_json_is_invalid_config() {
    let err = BuildConfig::from_json(b"{ entryPoints: ").unwrap_err();
    assert_eq!(err.kind.code(), "INVALID_BUILD_CONFIG");
  }

  #[test]
  fn unknown_platform_is_rejected() {
    assert!(BuildConfig::from_json(br#"{ "platform": "deno" }"#).is_err());
  }

  #[test]
  fn external_set_from_config() {
    let config = BuildConfig {
      external: Some(vec!["lodash".to_string(), "react".to_string()]),
      ..Default::default()
    };
    let filter = config.external_filter();
    assert!(filter.is_external("lodash"));
    assert!(filter.is_external("react"));
    assert!(!filter.is_external("react-dom"));
    assert!(BuildConfig::default().external_filter().is_empty());
  }

  #[test]
  fn default_build() {
    let config = BuildConfig::default_for("/proj");
    assert_eq!(config.entry_points(), ["/proj/index.ts".to_string()]);
    assert_eq!(config.outdir.as_deref(), Some("/proj/out"));
    assert_eq!(config.bundle, Some(true));
    assert_eq!(config.sourcemap, Some(true));
    assert_eq!(config.target, Some(vec!["es2015".to_string()]));
  }
}
