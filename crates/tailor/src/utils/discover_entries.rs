use std::{
  ffi::OsStr,
  path::{Path, PathBuf},
};

use anyhow::Context;
use tailor_common::ProjectSettings;
use tailor_fs::FileSystem;
use tailor_utils::{indexmap::FxIndexMap, path_ext::PathExt};

/// Asset subdirectories scanned for entries, paired with the extension they hold.
const ENTRY_SOURCES: [(&str, &str); 2] = [("js", "js"), ("scss", "scss")];

/// Builds the entry map from `<assets_dir>/js/*.js` and `<assets_dir>/scss/*.scss`.
///
/// Files sharing a stem end up in the same entry, scripts first. Sass partials are
/// skipped. The map is sorted by entry name.
pub fn discover_entries(
  fs: &dyn FileSystem,
  assets_dir: &Path,
) -> anyhow::Result<FxIndexMap<String, Vec<PathBuf>>> {
  let mut entries: FxIndexMap<String, Vec<PathBuf>> = FxIndexMap::default();

  for (dir, extension) in ENTRY_SOURCES {
    let dir = assets_dir.join(dir);
    if !fs.is_dir(&dir) {
      tracing::debug!("Skipping entry discovery in missing {}", dir.display());
      continue;
    }

    let files =
      fs.read_dir(&dir).with_context(|| format!("Failed to read entries from {}", dir.display()))?;

    for file in files {
      if file.extension() != Some(OsStr::new(extension)) || file.is_sass_partial() || fs.is_dir(&file)
      {
        continue;
      }
      entries.entry(file.entry_name().into_owned()).or_default().push(file);
    }
  }

  entries.sort_keys();
  Ok(entries)
}

/// The entries named in `tailor.json`, or the discovered ones when it names none.
pub fn project_entries(
  fs: &dyn FileSystem,
  settings: &ProjectSettings,
) -> anyhow::Result<FxIndexMap<String, Vec<PathBuf>>> {
  match &settings.entries {
    Some(entries) => Ok(entries.clone()),
    None => discover_entries(fs, &settings.assets_dir),
  }
}
