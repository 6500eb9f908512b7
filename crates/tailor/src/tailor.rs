use std::path::Path;

use anyhow::Context;
use tailor_common::{BuildTask, BundlerSettings, Mode, PackagingPlan, ProjectSettings};
use tailor_error::BuildResult;
use tailor_fs::{FileSystem, OsFileSystem};

use crate::{
  bundler_command::BundlerCommand,
  bundler_config::install_bundler_config,
  bundler_settings::bundler_settings,
  plugins::file_manager::packaging_plan,
  utils::{load_options::load_options, resolve_settings::resolve_settings},
};

/// A project, resolved once at startup.
pub struct Tailor<F: FileSystem = OsFileSystem> {
  fs: F,
  settings: ProjectSettings,
}

impl Tailor {
  /// Loads the project rooted at `cwd`, reading `config` or `<cwd>/tailor.json`.
  pub fn new(cwd: &Path, config: Option<&Path>) -> anyhow::Result<Self> {
    let root = dunce::canonicalize(cwd)
      .with_context(|| format!("Failed to resolve project root {}", cwd.display()))?;
    Self::with_fs(OsFileSystem, &root, config)
  }
}

impl<F: FileSystem> Tailor<F> {
  pub fn with_fs(fs: F, root: &Path, config: Option<&Path>) -> anyhow::Result<Self> {
    let options = load_options(&fs, root, config)?;
    let settings = resolve_settings(root, options)?;
    tracing::debug!("Resolved project settings: {settings:?}");
    Ok(Self { fs, settings })
  }

  pub fn settings(&self) -> &ProjectSettings {
    &self.settings
  }

  pub fn packaging_plan(&self, mode: Mode) -> PackagingPlan {
    packaging_plan(&self.fs, &self.settings, mode)
  }

  pub fn bundler_settings(&self, mode: Mode, watch: bool) -> anyhow::Result<BundlerSettings> {
    bundler_settings(&self.fs, &self.settings, mode, watch)
  }

  /// Prepares one bundler run, writing the bundled config out if it is used.
  pub fn bundler_command(&self, task: BuildTask) -> anyhow::Result<BundlerCommand> {
    let settings = self
      .bundler_settings(task.mode(), task.is_watch())
      .with_context(|| format!("Failed to prepare `{}`", task.token()))?;
    install_bundler_config(&self.fs, &self.settings.bundler_config)?;
    BundlerCommand::new(&self.settings, task, &settings)
  }

  /// Prepares every task up front so a broken setup is reported before anything runs.
  pub fn bundler_commands(&self, tasks: &[BuildTask]) -> BuildResult<Vec<BundlerCommand>> {
    let mut commands = Vec::with_capacity(tasks.len());
    let mut errors = vec![];

    for task in tasks {
      match self.bundler_command(*task) {
        Ok(command) => commands.push(command),
        Err(err) => errors.push(err),
      }
    }

    if !errors.is_empty() {
      Err(errors)?;
    }

    Ok(commands)
  }
}
