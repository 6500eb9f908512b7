use std::{
  io::{self, Write},
  path::{Path, PathBuf},
};

use vfs::{MemoryFS, VfsError, VfsPath, VfsResult};

use crate::FileSystem;

/// An in-memory tree backed by [`vfs::MemoryFS`], mostly useful for tests.
///
/// Paths are keyed by their slash form, so `/p/src` and `p/src` are the same entry.
#[derive(Clone)]
pub struct MemoryFileSystem {
  root: VfsPath,
}

impl MemoryFileSystem {
  pub fn new() -> Self {
    Self { root: VfsPath::new(MemoryFS::new()) }
  }

  /// Adds a file along with all of its ancestors.
  pub fn add_file(&mut self, path: impl AsRef<Path>, content: impl AsRef<str>) -> &mut Self {
    let path = path.as_ref();
    if let Err(err) = self.write(path, content.as_ref()) {
      panic!("Failed to add {} to the memory file system: {err}", path.display());
    }
    self
  }

  pub fn add_dir(&mut self, path: impl AsRef<Path>) -> &mut Self {
    let path = path.as_ref();
    if let Err(err) = self.create_dir_all(path) {
      panic!("Failed to add {} to the memory file system: {err}", path.display());
    }
    self
  }

  fn entry(&self, path: &Path) -> VfsResult<VfsPath> {
    match slash_relative(path).as_str() {
      "" => Ok(self.root.clone()),
      relative => self.root.join(relative),
    }
  }

  fn create_dir_all(&self, path: &Path) -> VfsResult<()> {
    // The root always exists.
    if slash_relative(path).is_empty() {
      return Ok(());
    }
    self.entry(path)?.create_dir_all()
  }
}

fn slash_relative(path: &Path) -> String {
  path.to_string_lossy().replace('\\', "/").trim_matches('/').to_string()
}

fn to_io_error(err: VfsError) -> io::Error {
  io::Error::other(err)
}

impl FileSystem for MemoryFileSystem {
  fn exists(&self, path: &Path) -> bool {
    self.entry(path).and_then(|entry| entry.exists()).unwrap_or(false)
  }

  fn is_dir(&self, path: &Path) -> bool {
    self.entry(path).and_then(|entry| entry.is_dir()).unwrap_or(false)
  }

  fn read_to_string(&self, path: &Path) -> io::Result<String> {
    self.entry(path).and_then(|entry| entry.read_to_string()).map_err(to_io_error)
  }

  fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
    let children = self.entry(path).and_then(|entry| entry.read_dir()).map_err(to_io_error)?;
    let mut entries = children.map(|child| path.join(child.filename())).collect::<Vec<_>>();
    entries.sort();
    Ok(entries)
  }

  fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
      self.create_dir_all(parent).map_err(to_io_error)?;
    }
    let mut file = self.entry(path).and_then(|entry| entry.create_file()).map_err(to_io_error)?;
    file.write_all(contents.as_bytes())?;
    file.flush()
  }
}

#[test]
fn test_memory_file_system() {
  let mut fs = MemoryFileSystem::new();
  fs.add_file("/p/assets/js/app.js", "").add_dir("/p/src");

  assert!(fs.is_dir(Path::new("/p/assets")));
  assert!(fs.exists(Path::new("/p/assets/js/app.js")));
  assert!(!fs.is_dir(Path::new("/p/assets/js/app.js")));
  assert!(!fs.exists(Path::new("/p/vendor")));
  assert!(fs.read_to_string(Path::new("/p/missing.json")).is_err());
  assert!(fs.read_dir(Path::new("/p/missing")).is_err());
  assert_eq!(
    fs.read_dir(Path::new("/p")).unwrap(),
    vec![PathBuf::from("/p/assets"), PathBuf::from("/p/src")]
  );
}

#[test]
fn test_memory_file_system_write() {
  let fs = MemoryFileSystem::new();
  fs.write(Path::new("/p/node_modules/.cache/tailor/webpack.config.js"), "a").unwrap();
  fs.write(Path::new("/p/node_modules/.cache/tailor/webpack.config.js"), "b").unwrap();

  assert!(fs.is_dir(Path::new("/p/node_modules/.cache/tailor")));
  assert_eq!(
    fs.read_to_string(Path::new("/p/node_modules/.cache/tailor/webpack.config.js")).unwrap(),
    "b"
  );
}
