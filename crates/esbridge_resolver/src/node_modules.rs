use esbridge_fs::FileSystem;

use crate::path::join;

/// Looks `specifier` up directly under a `node_modules` root.
///
/// Only `<root>/<specifier>.js` and then `<root>/<specifier>/index.js` are tried. There is
/// no package.json lookup and no walk up through parent directories.
pub async fn resolve_node_module(
  fs: &dyn FileSystem,
  root: &str,
  specifier: &str,
) -> Option<String> {
  let file = join(root, &format!("{specifier}.js"));
  if fs.exists(&file).await {
    return Some(file);
  }
  let index = join(root, &format!("{specifier}/index.js"));
  if fs.exists(&index).await {
    return Some(index);
  }
  None
}
