use std::path::{Path, PathBuf};

use itertools::Itertools;
use tailor_common::{
  CopyInstruction, EndOperations, Mode, PackagingPlan, ProjectSettings, StartOperations,
};
use tailor_fs::FileSystem;

/// Project directories that end up in the package when they exist.
pub const CONVENTIONAL_PATHS: [&str; 9] = [
  "inc",
  "includes",
  "src",
  "templates",
  "template-parts",
  "resources",
  "config",
  "languages",
  "vendor",
];

/// Root-level globs that are always handed to the copy step, matched or not.
pub const LOOSE_FILES: [&str; 3] = ["*.php", "screenshot.*", "style.css"];

/// Builds the file operations that assemble `package_dir` after a build.
///
/// Development builds only run the user's `deleteOnEnd` list. Production builds
/// recreate the package directory and copy the build output, every conventional
/// directory present right now, the loose root files, and finally the user's
/// `copyOnEnd` entries.
///
/// Existence is checked once, here. Anything that disappears before the plugin
/// runs is the plugin's problem.
pub fn packaging_plan(fs: &dyn FileSystem, settings: &ProjectSettings, mode: Mode) -> PackagingPlan {
  let mut on_start = StartOperations::default();
  let mut on_end = EndOperations {
    delete: settings.delete_on_end.iter().unique().cloned().collect(),
    ..Default::default()
  };

  if !mode.is_production() {
    return PackagingPlan::new(on_start, on_end);
  }

  let root = &settings.root;
  let package_dir = &settings.package_dir;

  if fs.exists(package_dir) {
    on_start.delete.push(package_dir.clone());
  }
  on_end.mkdir.push(package_dir.clone());

  // Produced by this very build, so it can't be checked yet.
  let packaged_build_dir = packaged_path(root, package_dir, &settings.build_dir);
  on_end.copy.push(CopyInstruction::new(&settings.build_dir, packaged_build_dir));

  for name in CONVENTIONAL_PATHS {
    let source = root.join(name);
    if source == settings.build_dir {
      continue;
    }
    if fs.exists(&source) {
      let destination = package_dir.join(name);
      on_end.copy.push(CopyInstruction::new(source, destination));
    } else {
      tracing::debug!("Not packaging missing {}", source.display());
    }
  }

  on_end
    .copy
    .extend(LOOSE_FILES.iter().map(|pattern| CopyInstruction::new(root.join(pattern), package_dir)));

  on_end.copy.extend(settings.copy_on_end.iter().cloned());

  PackagingPlan::new(on_start, on_end)
}

/// Where `path` lands inside the package: the same place relative to the root,
/// or directly under the package when it lives outside the project.
fn packaged_path(root: &Path, package_dir: &Path, path: &Path) -> PathBuf {
  match path.strip_prefix(root) {
    Ok(relative) => package_dir.join(relative),
    Err(_) => package_dir.join(path.file_name().unwrap_or(path.as_os_str())),
  }
}
