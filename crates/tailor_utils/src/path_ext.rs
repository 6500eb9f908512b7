use std::{
  borrow::Cow,
  path::{Path, PathBuf},
};

use sugar_path::SugarPath;

pub trait PathExt {
  fn expect_to_slash(&self) -> String;

  /// `self` relative to `base` in slash form, or `None` when `self` is not inside `base`.
  /// An empty string means both are the same directory.
  fn slash_relative_to(&self, base: &Path) -> Option<String>;

  /// Resolves `self` against `root` unless it is already absolute.
  fn resolve_from(&self, root: &Path) -> PathBuf;

  /// The name an asset file contributes to the entry map.
  fn entry_name(&self) -> Cow<str>;

  /// Sass partials (`_variables.scss`) are only ever imported, never compiled on their own.
  fn is_sass_partial(&self) -> bool;
}

impl PathExt for Path {
  fn expect_to_slash(&self) -> String {
    self
      .to_slash()
      .unwrap_or_else(|| panic!("Failed to convert {:?} to slash str", self.display()))
      .into_owned()
  }

  fn slash_relative_to(&self, base: &Path) -> Option<String> {
    self.strip_prefix(base).ok().map(|relative| relative.expect_to_slash())
  }

  fn resolve_from(&self, root: &Path) -> PathBuf {
    if self.is_absolute() {
      self.normalize()
    } else {
      root.join(self).normalize()
    }
  }

  fn entry_name(&self) -> Cow<str> {
    self.file_stem().map_or_else(|| self.to_string_lossy(), |stem| stem.to_string_lossy())
  }

  fn is_sass_partial(&self) -> bool {
    self.file_name().and_then(|name| name.to_str()).is_some_and(|name| name.starts_with('_'))
  }
}

#[test]
fn test_slash_relative_to() {
  let build = Path::new("/p/dist");
  assert_eq!(Path::new("/p/dist/js").slash_relative_to(build).as_deref(), Some("js"));
  assert_eq!(Path::new("/p/dist/a/css").slash_relative_to(build).as_deref(), Some("a/css"));
  assert_eq!(build.slash_relative_to(build).as_deref(), Some(""));
  assert_eq!(Path::new("/q/css").slash_relative_to(build), None);
}

#[test]
fn test_resolve_from() {
  let root = Path::new("/p");
  assert_eq!(Path::new("assets").resolve_from(root), PathBuf::from("/p/assets"));
  assert_eq!(Path::new("./build/../dist").resolve_from(root), PathBuf::from("/p/dist"));
  assert_eq!(Path::new("/tmp/x").resolve_from(root), PathBuf::from("/tmp/x"));
}

#[test]
fn test_entry_name() {
  assert_eq!(Path::new("/p/assets/js/app.js").entry_name(), "app");
  assert_eq!(Path::new("/p/assets/scss/editor.scss").entry_name(), "editor");
  assert!(Path::new("/p/assets/scss/_mixins.scss").is_sass_partial());
  assert!(!Path::new("/p/assets/scss/app.scss").is_sass_partial());
}
