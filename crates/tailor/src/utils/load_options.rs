use std::path::Path;

use anyhow::Context;
use tailor_common::{TailorOptions, CONFIG_FILE_NAME};
use tailor_fs::FileSystem;
use tailor_utils::path_ext::PathExt;

/// Reads the project's config file.
///
/// An explicit `config` path must exist. Without one, `<root>/tailor.json` is used
/// when present and defaults apply otherwise.
pub fn load_options(
  fs: &dyn FileSystem,
  root: &Path,
  config: Option<&Path>,
) -> anyhow::Result<TailorOptions> {
  let path = match config {
    Some(config) => config.resolve_from(root),
    None => {
      let path = root.join(CONFIG_FILE_NAME);
      if !fs.exists(&path) {
        tracing::debug!("No {CONFIG_FILE_NAME} in {}, using defaults", root.display());
        return Ok(TailorOptions::default());
      }
      path
    }
  };

  let content =
    fs.read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))?;

  let options = serde_json::from_str(&content)
    .with_context(|| format!("Failed to parse {}", path.display()))?;

  tracing::debug!("Loaded options from {}", path.display());
  Ok(options)
}

#[cfg(test)]
mod tests {
  use std::path::PathBuf;

  use tailor_fs::MemoryFileSystem;

  use super::*;

  #[test]
  fn missing_default_config_uses_defaults() {
    let fs = MemoryFileSystem::new();
    let options = load_options(&fs, Path::new("/p"), None).unwrap();
    assert!(options.assets_dir.is_none());
  }

  #[test]
  fn missing_explicit_config_is_fatal() {
    let fs = MemoryFileSystem::new();
    let err = load_options(&fs, Path::new("/p"), Some(Path::new("tailor.prod.json"))).unwrap_err();
    assert_eq!(err.to_string(), "Failed to read /p/tailor.prod.json");
  }

  #[test]
  fn invalid_config_is_fatal() {
    let mut fs = MemoryFileSystem::new();
    fs.add_file("/p/tailor.json", "{ \"buildDir\": ");
    let err = load_options(&fs, Path::new("/p"), None).unwrap_err();
    assert_eq!(err.to_string(), "Failed to parse /p/tailor.json");
  }

  #[test]
  fn explicit_config_is_resolved_from_root() {
    let mut fs = MemoryFileSystem::new();
    fs.add_file("/p/config/tailor.json", r#"{ "buildDir": "public" }"#);
    let options = load_options(&fs, Path::new("/p"), Some(Path::new("config/tailor.json"))).unwrap();
    assert_eq!(options.build_dir, Some(PathBuf::from("public")));
  }
}
