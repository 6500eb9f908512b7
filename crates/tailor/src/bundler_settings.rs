use std::path::Path;

use anyhow::Context;
use tailor_common::{
  BundlerSettings, CssSettings, MinimizerSettings, Mode, ModuleSettings, OutputSettings,
  PerformanceSettings, ProjectSettings,
};
use tailor_fs::FileSystem;
use tailor_utils::path_ext::PathExt;

use crate::{
  plugins::{
    copy::copy_patterns,
    file_manager::packaging_plan,
    image_minimizer::image_minimizer_settings,
    module_rules::{module_resolution, module_rules},
    terser::terser_options,
  },
  utils::discover_entries::project_entries,
};

pub fn bundler_settings(
  fs: &dyn FileSystem,
  settings: &ProjectSettings,
  mode: Mode,
  watch: bool,
) -> anyhow::Result<BundlerSettings> {
  let entry = project_entries(fs, settings)?;

  if entry.is_empty() {
    tracing::warn!("No entries found in {}", settings.assets_dir.display());
  } else {
    tracing::debug!("Entries: {}", entry.keys().map(String::as_str).collect::<Vec<_>>().join(", "));
  }

  Ok(BundlerSettings {
    mode,
    watch,
    entry,
    output: OutputSettings {
      path: settings.build_dir.clone(),
      filename: output_filename(&settings.js_dir, &settings.build_dir, "[name].js")?,
    },
    css: CssSettings {
      filename: output_filename(&settings.css_dir, &settings.build_dir, "[name].css")?,
    },
    module: ModuleSettings { rules: module_rules() },
    resolve: module_resolution(&settings.assets_dir),
    stats: "minimal",
    performance: PerformanceSettings { hints: false },
    minimizer: MinimizerSettings {
      terser: terser_options(mode),
      image_minimizer: image_minimizer_settings(mode),
    },
    copy: copy_patterns(settings, mode),
    file_manager: packaging_plan(fs, settings, mode),
  })
}

/// Filename template for assets emitted into `dir`, relative to the output path.
fn output_filename(dir: &Path, build_dir: &Path, template: &str) -> anyhow::Result<String> {
  let relative = dir
    .slash_relative_to(build_dir)
    .with_context(|| format!("{} is outside of {}", dir.display(), build_dir.display()))?;

  Ok(if relative.is_empty() { template.to_string() } else { format!("{relative}/{template}") })
}
