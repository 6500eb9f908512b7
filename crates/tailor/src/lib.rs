mod bundler_command;
mod bundler_config;
mod bundler_settings;
mod plugins;
mod tailor;
mod utils;

pub use crate::{
  bundler_command::{BundlerCommand, SETTINGS_ENV},
  bundler_config::BUNDLED_CONFIG,
  tailor::Tailor,
};
pub use tailor_common::*;
pub use tailor_error::{BuildError, BuildResult};
pub use tailor_fs::{FileSystem, OsFileSystem};
