use anyhow::{bail, Context};
use tailor_common::BundlerConfig;
use tailor_fs::FileSystem;

/// The webpack config shipped with tailor. It reads the project's settings from
/// [`SETTINGS_ENV`](crate::SETTINGS_ENV) and has nothing project specific in it.
pub const BUNDLED_CONFIG: &str = include_str!("../runtime/webpack.config.js");

/// Makes sure the config the bundler is about to load is on disk.
///
/// The bundled config is rewritten whenever it differs from the one shipped with
/// this version. A custom config must already exist.
pub fn install_bundler_config(
  fs: &dyn FileSystem,
  config: &BundlerConfig,
) -> anyhow::Result<()> {
  let path = match config {
    BundlerConfig::Bundled(path) => path,
    BundlerConfig::Custom(path) => {
      if !fs.exists(path) {
        bail!("Bundler config {} does not exist", path.display());
      }
      return Ok(());
    }
  };

  if fs.read_to_string(path).is_ok_and(|current| current == BUNDLED_CONFIG) {
    return Ok(());
  }

  tracing::debug!("Writing bundler config to {}", path.display());
  fs.write(path, BUNDLED_CONFIG).with_context(|| format!("Failed to write {}", path.display()))
}
