use std::path::{Path, PathBuf};

use tailor_utils::indexmap::FxIndexMap;

use crate::CopyInstruction;

/// Fully resolved project layout. Built once at startup and passed by reference
/// to everything that needs it.
#[allow(clippy::struct_field_names)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSettings {
  // --- Project
  pub root: PathBuf,
  pub assets_dir: PathBuf,
  pub entries: Option<FxIndexMap<String, Vec<PathBuf>>>,

  // --- Output
  pub build_dir: PathBuf,
  pub css_dir: PathBuf,
  pub js_dir: PathBuf,
  pub build_flat: bool,

  // --- Packaging
  pub package_dir: PathBuf,
  pub delete_on_end: Vec<PathBuf>,
  pub copy_on_end: Vec<CopyInstruction>,

  // --- Toolchain
  pub bundler_bin: PathBuf,
  pub bundler_config: BundlerConfig,
}

/// The config file the bundler is started with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BundlerConfig {
  /// The config shipped with tailor, written to this path before the bundler runs.
  Bundled(PathBuf),
  /// A config the user maintains.
  Custom(PathBuf),
}

impl BundlerConfig {
  pub fn path(&self) -> &Path {
    match self {
      Self::Bundled(path) | Self::Custom(path) => path,
    }
  }
}
