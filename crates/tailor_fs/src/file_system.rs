use std::{
  io,
  path::{Path, PathBuf},
};

/// The filesystem as seen while computing settings.
///
/// The only thing tailor ever writes is its own bundler config. Changes to the
/// project tree are described as a plan and handed to the bundler's
/// file-management plugin.
pub trait FileSystem: Send + Sync {
  fn exists(&self, path: &Path) -> bool;

  fn is_dir(&self, path: &Path) -> bool;

  fn read_to_string(&self, path: &Path) -> io::Result<String>;

  /// Direct children of `path`, sorted by path.
  fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>>;

  /// Writes `contents` to `path`, creating missing parent directories.
  fn write(&self, path: &Path, contents: &str) -> io::Result<()>;
}
