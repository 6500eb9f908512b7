use tailor_common::{CopyPattern, GlobOptions, Mode, ProjectSettings};

/// Asset folders copied verbatim into the build directory.
const STATIC_ASSET_DIRS: [&str; 2] = ["images", "fonts"];

pub fn copy_patterns(settings: &ProjectSettings, mode: Mode) -> Vec<CopyPattern> {
  STATIC_ASSET_DIRS
    .iter()
    .map(|dir| CopyPattern {
      from: settings.assets_dir.join(dir),
      to: settings.build_dir.join(dir),
      no_error_on_missing: true,
      glob_options: mode.is_production().then(|| GlobOptions {
        ignore: vec!["**/.DS_Store".to_string(), "**/*.map".to_string()],
      }),
    })
    .collect()
}
