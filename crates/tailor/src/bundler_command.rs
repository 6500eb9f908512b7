use std::path::PathBuf;

use anyhow::Context;
use tailor_common::{BuildTask, BundlerSettings, ProjectSettings};

/// Environment variable carrying the [`BundlerSettings`] JSON to the bundler's config file.
pub const SETTINGS_ENV: &str = "TAILOR_SETTINGS";

/// A fully prepared bundler invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundlerCommand {
  pub task: BuildTask,
  pub program: PathBuf,
  pub args: Vec<String>,
  pub cwd: PathBuf,
  pub envs: Vec<(&'static str, String)>,
}

impl BundlerCommand {
  pub fn new(
    settings: &ProjectSettings,
    task: BuildTask,
    bundler_settings: &BundlerSettings,
  ) -> anyhow::Result<Self> {
    let mut args = vec![format!("--mode={}", task.mode())];
    if task.is_watch() {
      args.push("--watch".to_string());
    }
    args.push(format!("--config={}", settings.bundler_config.path().display()));

    let payload = serde_json::to_string(bundler_settings)
      .with_context(|| format!("Failed to serialize settings for `{}`", task.token()))?;

    Ok(Self {
      task,
      program: settings.bundler_bin.clone(),
      args,
      cwd: settings.root.clone(),
      envs: vec![(SETTINGS_ENV, payload)],
    })
  }
}
