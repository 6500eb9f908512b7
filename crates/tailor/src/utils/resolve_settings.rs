use std::path::{Path, PathBuf};

use anyhow::bail;
use sugar_path::SugarPath;
use tailor_common::{BundlerConfig, CopyInstruction, ProjectSettings, TailorOptions};
use tailor_utils::path_ext::PathExt;

use crate::plugins::file_manager::CONVENTIONAL_PATHS;

const BUNDLER_BIN: &str = if cfg!(windows) { "webpack.cmd" } else { "webpack" };
/// Where the bundled config is written, relative to the tool root. Inside
/// `node_modules` so the plugins it requires resolve from the same install.
const BUNDLED_CONFIG_PATH: &str = "node_modules/.cache/tailor/webpack.config.js";

/// Fills in defaults and resolves every path in `raw_options` against `root`.
pub fn resolve_settings(root: &Path, raw_options: TailorOptions) -> anyhow::Result<ProjectSettings> {
  let root = root.normalize();
  let resolve = |path: Option<PathBuf>, default: &str| {
    path.unwrap_or_else(|| PathBuf::from(default)).resolve_from(&root)
  };

  let assets_dir = resolve(raw_options.assets_dir, "assets");
  let build_dir = resolve(raw_options.build_dir, "dist");
  let package_dir = resolve(raw_options.package_dir, "theme");
  let build_flat = raw_options.build_flat.unwrap_or(false);

  let (css_dir, js_dir) = if build_flat {
    (build_dir.clone(), build_dir.clone())
  } else {
    let css_dir = raw_options.css_dir.unwrap_or_else(|| PathBuf::from("css"));
    let js_dir = raw_options.js_dir.unwrap_or_else(|| PathBuf::from("js"));
    (css_dir.resolve_from(&build_dir), js_dir.resolve_from(&build_dir))
  };

  for (name, dir) in [("cssDir", &css_dir), ("jsDir", &js_dir)] {
    if !dir.starts_with(&build_dir) {
      bail!("{name} {} must be inside buildDir {}", dir.display(), build_dir.display());
    }
  }

  check_package_layout(&root, &assets_dir, &build_dir, &package_dir)?;

  let tool_root = raw_options.tool_root.map_or_else(|| root.clone(), |dir| dir.resolve_from(&root));
  let bundler_config = match raw_options.bundler_config {
    Some(config) => BundlerConfig::Custom(config.resolve_from(&root)),
    None => BundlerConfig::Bundled(tool_root.join(BUNDLED_CONFIG_PATH)),
  };

  let entries = raw_options.entries.map(|entries| {
    entries
      .into_iter()
      .map(|(name, files)| {
        let files = files.iter().map(|file| file.resolve_from(&assets_dir)).collect();
        (name, files)
      })
      .collect()
  });

  let delete_on_end = raw_options
    .delete_on_end
    .unwrap_or_default()
    .iter()
    .map(|path| path.resolve_from(&root))
    .collect();

  let copy_on_end = raw_options
    .copy_on_end
    .unwrap_or_default()
    .iter()
    .map(|copy| {
      CopyInstruction::new(copy.source.resolve_from(&root), copy.destination.resolve_from(&root))
    })
    .collect();

  Ok(ProjectSettings {
    bundler_bin: tool_root.join("node_modules").join(".bin").join(BUNDLER_BIN),
    bundler_config,
    root,
    assets_dir,
    entries,
    build_dir,
    css_dir,
    js_dir,
    build_flat,
    package_dir,
    delete_on_end,
    copy_on_end,
  })
}

/// The package dir is deleted at the start of every production build and the build
/// dir is copied into it, so neither may overlap anything the project needs.
fn check_package_layout(
  root: &Path,
  assets_dir: &Path,
  build_dir: &Path,
  package_dir: &Path,
) -> anyhow::Result<()> {
  if root.starts_with(build_dir) {
    bail!("buildDir {} must not contain the project root", build_dir.display());
  }
  if root.starts_with(package_dir) {
    bail!("packageDir {} must not contain the project root", package_dir.display());
  }

  for (name, dir) in [("assetsDir", assets_dir), ("buildDir", build_dir)] {
    if dir.starts_with(package_dir) {
      bail!("packageDir {} must not contain {name} {}", package_dir.display(), dir.display());
    }
  }
  if package_dir.starts_with(build_dir) {
    let (package_dir, build_dir) = (package_dir.display(), build_dir.display());
    bail!("packageDir {package_dir} must not be inside buildDir {build_dir}");
  }

  for name in CONVENTIONAL_PATHS {
    if package_dir.starts_with(root.join(name)) {
      let package_dir = package_dir.display();
      bail!("packageDir {package_dir} must not be inside the packaged {name} directory");
    }
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn options(json: &str) -> TailorOptions {
    serde_json::from_str(json).unwrap()
  }

  #[test]
  fn defaults() {
    let settings = resolve_settings(Path::new("/p"), TailorOptions::default()).unwrap();

    assert_eq!(settings.root, PathBuf::from("/p"));
    assert_eq!(settings.assets_dir, PathBuf::from("/p/assets"));
    assert_eq!(settings.build_dir, PathBuf::from("/p/dist"));
    assert_eq!(settings.css_dir, PathBuf::from("/p/dist/css"));
    assert_eq!(settings.js_dir, PathBuf::from("/p/dist/js"));
    assert_eq!(settings.package_dir, PathBuf::from("/p/theme"));
    assert!(!settings.build_flat);
    assert!(settings.entries.is_none());
    assert!(settings.delete_on_end.is_empty());
    assert_eq!(
      settings.bundler_config,
      BundlerConfig::Bundled(PathBuf::from("/p/node_modules/.cache/tailor/webpack.config.js"))
    );
    assert!(settings.bundler_bin.starts_with("/p/node_modules/.bin"));
  }

  #[test]
  fn build_flat_collapses_output_dirs() {
    let settings = resolve_settings(
      Path::new("/p"),
      options(r#"{ "buildDir": "public/build", "buildFlat": true, "cssDir": "styles" }"#),
    )
    .unwrap();

    assert_eq!(settings.css_dir, PathBuf::from("/p/public/build"));
    assert_eq!(settings.js_dir, PathBuf::from("/p/public/build"));
  }

  #[test]
  fn relative_paths_resolve_from_their_base() {
    let settings = resolve_settings(
      Path::new("/p"),
      options(
        r#"{
          "assetsDir": "resources",
          "toolRoot": "tools",
          "bundlerConfig": "config/webpack.config.js",
          "entries": { "app": ["js/app.js"] },
          "deleteOnEnd": ["dist/maps", "/tmp/x"],
          "copyOnEnd": [{ "source": "acf-json", "destination": "theme/acf-json" }]
        }"#,
      ),
    )
    .unwrap();

    assert_eq!(
      settings.entries.unwrap()["app"],
      vec![PathBuf::from("/p/resources/js/app.js")]
    );
    assert_eq!(settings.delete_on_end, vec![PathBuf::from("/p/dist/maps"), PathBuf::from("/tmp/x")]);
    assert_eq!(
      settings.copy_on_end,
      vec![CopyInstruction::new("/p/acf-json", "/p/theme/acf-json")]
    );
    assert_eq!(
      settings.bundler_config,
      BundlerConfig::Custom(PathBuf::from("/p/config/webpack.config.js"))
    );
    assert!(settings.bundler_bin.starts_with("/p/tools/node_modules/.bin"));
  }

  #[test]
  fn bundled_config_follows_tool_root() {
    let settings = resolve_settings(Path::new("/p"), options(r#"{ "toolRoot": "/opt/tailor" }"#))
      .unwrap();
    assert_eq!(
      settings.bundler_config.path(),
      Path::new("/opt/tailor/node_modules/.cache/tailor/webpack.config.js")
    );
  }

  #[test]
  fn output_dirs_must_stay_inside_build_dir() {
    let err =
      resolve_settings(Path::new("/p"), options(r#"{ "cssDir": "/elsewhere/css" }"#)).unwrap_err();
    assert_eq!(err.to_string(), "cssDir /elsewhere/css must be inside buildDir /p/dist");
  }

  fn layout_error(json: &str) -> String {
    resolve_settings(Path::new("/work/p"), options(json)).unwrap_err().to_string()
  }

  #[test]
  fn package_dir_must_not_contain_the_root() {
    assert_eq!(
      layout_error(r#"{ "packageDir": "." }"#),
      "packageDir /work/p must not contain the project root"
    );
    assert_eq!(
      layout_error(r#"{ "packageDir": ".." }"#),
      "packageDir /work must not contain the project root"
    );
    assert_eq!(
      layout_error(r#"{ "packageDir": "/" }"#),
      "packageDir / must not contain the project root"
    );
  }

  #[test]
  fn package_dir_must_not_swallow_sources() {
    assert_eq!(
      layout_error(r#"{ "packageDir": "assets" }"#),
      "packageDir /work/p/assets must not contain assetsDir /work/p/assets"
    );
    assert_eq!(
      layout_error(r#"{ "assetsDir": "resources/assets", "packageDir": "resources" }"#),
      "packageDir /work/p/resources must not contain assetsDir /work/p/resources/assets"
    );
    assert_eq!(
      layout_error(r#"{ "packageDir": "dist" }"#),
      "packageDir /work/p/dist must not contain buildDir /work/p/dist"
    );
    assert_eq!(
      layout_error(r#"{ "packageDir": "dist/theme" }"#),
      "packageDir /work/p/dist/theme must not be inside buildDir /work/p/dist"
    );
  }

  #[test]
  fn package_dir_must_not_be_a_packaged_directory() {
    assert_eq!(
      layout_error(r#"{ "packageDir": "src" }"#),
      "packageDir /work/p/src must not be inside the packaged src directory"
    );
    assert_eq!(
      layout_error(r#"{ "packageDir": "vendor/theme" }"#),
      "packageDir /work/p/vendor/theme must not be inside the packaged vendor directory"
    );
    assert!(resolve_settings(Path::new("/work/p"), options(r#"{ "packageDir": "../release" }"#))
      .is_ok());
  }

  #[test]
  fn build_dir_must_not_contain_the_root() {
    assert_eq!(
      layout_error(r#"{ "buildDir": "." }"#),
      "buildDir /work/p must not contain the project root"
    );
    assert_eq!(
      layout_error(r#"{ "buildDir": "..", "packageDir": "/release" }"#),
      "buildDir /work must not contain the project root"
    );
  }
}
