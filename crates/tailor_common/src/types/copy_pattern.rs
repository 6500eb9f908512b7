use std::path::PathBuf;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GlobOptions {
  pub ignore: Vec<String>,
}

/// One rule for the bundler's asset copy plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyPattern {
  pub from: PathBuf,
  pub to: PathBuf,
  pub no_error_on_missing: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub glob_options: Option<GlobOptions>,
}
