use std::path::PathBuf;

use clap::Args;
use tailor::{BuildTask, Mode};

/// Tokens that print the bundler settings instead of running the bundler.
const SETTINGS_TOKENS: [(&str, Mode); 2] =
  [("settings-dev", Mode::Development), ("settings-prod", Mode::Production)];

#[derive(Args)]
pub struct ProjectArgs {
  /// Project root, defaults to the current directory
  #[clap(long)]
  pub cwd: Option<PathBuf>,

  /// Config file, defaults to `tailor.json` in the project root when present
  #[clap(long, short = 'c')]
  pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct OutputArgs {
  /// Don't print start/end banners
  #[clap(long, short = 's')]
  pub silent: bool,
}

pub fn settings_modes(tokens: &[String]) -> Vec<Mode> {
  SETTINGS_TOKENS
    .iter()
    .filter(|(token, _)| tokens.iter().any(|t| t == token))
    .map(|(_, mode)| *mode)
    .collect()
}

pub fn unknown_tokens(tokens: &[String]) -> impl Iterator<Item = &String> {
  tokens.iter().filter(|token| {
    BuildTask::from_token(token).is_none() && SETTINGS_TOKENS.iter().all(|(known, _)| known != token)
  })
}
