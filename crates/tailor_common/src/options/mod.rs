pub mod mode;
pub mod project_settings;

use std::path::PathBuf;

use serde::Deserialize;
use tailor_utils::indexmap::FxIndexMap;

use crate::CopyInstruction;

pub const CONFIG_FILE_NAME: &str = "tailor.json";

/// The raw contents of `tailor.json`. Every field is optional; relative paths are
/// resolved against the project root.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TailorOptions {
  // --- Input
  pub assets_dir: Option<PathBuf>,
  /// Entry name to asset files, relative to `assets_dir`. Discovered when absent.
  pub entries: Option<FxIndexMap<String, Vec<PathBuf>>>,

  // --- Output
  pub build_dir: Option<PathBuf>,
  pub css_dir: Option<PathBuf>,
  pub js_dir: Option<PathBuf>,
  pub build_flat: Option<bool>,

  // --- Packaging
  pub package_dir: Option<PathBuf>,
  pub delete_on_end: Option<Vec<PathBuf>>,
  pub copy_on_end: Option<Vec<CopyInstruction>>,

  // --- Toolchain
  /// Where the bundler and its plugins are installed.
  pub tool_root: Option<PathBuf>,
  /// A hand-written bundler config used instead of the bundled one.
  pub bundler_config: Option<PathBuf>,
}
