use esbridge_common::{Loader, Resolution};
use esbridge_plugin::{BuildPlugin, LoadArgs, PluginDriver, ResolveArgs};
use esbridge_plugin_vfs::{VfsPlugin, PLUGIN_NAME};
use esbridge_resolver::ExternalFilter;
use esbridge_test_utils::fixture;

fn load_args(path: &str) -> LoadArgs<'_> {
  LoadArgs {
    path,
    namespace: "file",
  }
}

#[tokio::test]
async fn load_tags_loader_from_extension() {
  let fs = fixture(&[
    ("/proj/src/app.tsx", "export const App = () => <div />;"),
    ("/proj/src/util.ts", "export const a = 1;"),
    ("/proj/data.yaml", "a: 1"),
  ]);
  let plugin = VfsPlugin::new(fs.clone(), "/proj", ExternalFilter::default());

  let app = plugin
    .load(&load_args("/proj/src/app.tsx"))
    .await
    .unwrap()
    .unwrap();
  assert_eq!(app.loader, Loader::Tsx);
  assert_eq!(app.contents, b"export const App = () => <div />;");

  let util = plugin
    .load(&load_args("/proj/src/util.ts"))
    .await
    .unwrap()
    .unwrap();
  assert_eq!(util.loader.as_str(), "ts");

  let data = plugin
    .load(&load_args("/proj/data.yaml"))
    .await
    .unwrap()
    .unwrap();
  assert_eq!(data.loader.as_str(), "yaml");
}

#[tokio::test]
async fn failed_read_yields_no_result_without_retry() {
  let fs = fixture(&[]);
  let plugin = VfsPlugin::new(fs.clone(), "/proj", ExternalFilter::default());

  let ret = plugin.load(&load_args("/proj/gone.ts")).await.unwrap();
  assert!(ret.is_none());
  assert_eq!(fs.reads(), vec!["/proj/gone.ts"]);
}

#[tokio::test]
async fn resolve_then_load_through_driver() {
  let fs = fixture(&[
    ("/proj/src/index.ts", "import { a } from './util';"),
    ("/proj/src/util.ts", "export const a = 1;"),
  ]);
  let driver = PluginDriver::new(vec![VfsPlugin::new_boxed(
    fs.clone(),
    "/proj",
    ExternalFilter::default(),
  )]);

  let resolved = driver
    .resolve(&ResolveArgs {
      specifier: "./util",
      importer: "/proj/src/index.ts",
      namespace: "file",
    })
    .await
    .unwrap()
    .unwrap();
  let path = resolved.path().unwrap();
  assert_eq!(path, "/proj/src/util.ts");

  let loaded = driver.load(&load_args(path)).await.unwrap().unwrap();
  assert_eq!(loaded.loader, Loader::Ts);
}

#[tokio::test]
async fn relative_miss_crosses_the_hook_as_error() {
  let fs = fixture(&[]);
  let driver = PluginDriver::new(vec![VfsPlugin::new_boxed(
    fs,
    "/proj",
    ExternalFilter::default(),
  )]);

  let err = driver
    .resolve(&ResolveArgs {
      specifier: "./missing",
      importer: "/proj/index.ts",
      namespace: "file",
    })
    .await
    .unwrap_err();
  assert_eq!(
    err.to_string(),
    "Could not resolve \"./missing\" from \"/proj/index.ts\""
  );
}

#[tokio::test]
async fn bare_path_is_tagged_with_plugin_name() {
  let fs = fixture(&[]);
  let plugin = VfsPlugin::new(fs, "/proj", ExternalFilter::new(["lodash".to_string()]));

  let ret = plugin
    .resolve(&ResolveArgs {
      specifier: "lib/helpers.js",
      importer: "/proj/index.ts",
      namespace: "file",
    })
    .await
    .unwrap();
  match ret {
    Some(Resolution::Resolved(resolved)) => {
      assert_eq!(resolved.path, "/proj/lib/helpers.js");
      assert_eq!(resolved.plugin_name.as_deref(), Some(PLUGIN_NAME));
    }
    other => panic!("unexpected resolution {other:?}"),
  }

  let external = plugin
    .resolve(&ResolveArgs {
      specifier: "lodash",
      importer: "/proj/index.ts",
      namespace: "file",
    })
    .await
    .unwrap();
  assert_eq!(external, Some(Resolution::External));
}
