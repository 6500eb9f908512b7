use std::path::PathBuf;

use serde::Serialize;
use tailor_utils::indexmap::FxIndexMap;

use crate::{
  CopyPattern, ImageMinimizerSettings, Mode, ModuleSettings, PackagingPlan, ResolveSettings,
  TerserOptions,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputSettings {
  pub path: PathBuf,
  pub filename: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CssSettings {
  pub filename: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PerformanceSettings {
  pub hints: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MinimizerSettings {
  pub terser: TerserOptions,
  pub image_minimizer: ImageMinimizerSettings,
}

/// Everything the bundler's config file needs to know about the project, handed
/// over as a single JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BundlerSettings {
  pub mode: Mode,
  pub watch: bool,
  pub entry: FxIndexMap<String, Vec<PathBuf>>,
  pub output: OutputSettings,
  pub css: CssSettings,
  pub module: ModuleSettings,
  pub resolve: ResolveSettings,
  pub stats: &'static str,
  pub performance: PerformanceSettings,
  pub minimizer: MinimizerSettings,
  pub copy: Vec<CopyPattern>,
  pub file_manager: PackagingPlan,
}
