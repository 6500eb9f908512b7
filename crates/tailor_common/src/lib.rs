mod options;
mod types;

pub use options::{
  mode::Mode,
  project_settings::{BundlerConfig, ProjectSettings},
  TailorOptions, CONFIG_FILE_NAME,
};

pub use crate::types::{
  build_task::BuildTask,
  bundler_settings::{
    BundlerSettings, CssSettings, MinimizerSettings, OutputSettings, PerformanceSettings,
  },
  copy_pattern::{CopyPattern, GlobOptions},
  image_tool::{ImageMinimizerSettings, ImageTool, PluginOptionSet, SvgoOptions, SvgoPlugin},
  module_rule::{LoaderSettings, ModuleRule, ModuleSettings, ResolveSettings},
  packaging_plan::{CopyInstruction, EndOperations, PackagingPlan, StartOperations},
  terser_options::{TerserCompress, TerserFormat, TerserMinifyOptions, TerserOptions},
};
