use std::path::PathBuf;

use serde::Serialize;
use serde_json::Value;
use tailor_utils::indexmap::FxIndexMap;

/// One loader in a rule's `use` chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoaderSettings {
  pub loader: &'static str,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub options: Option<Value>,
}

impl LoaderSettings {
  pub fn new(loader: &'static str) -> Self {
    Self { loader, options: None }
  }

  pub fn with_options(loader: &'static str, options: Value) -> Self {
    Self { loader, options: Some(options) }
  }
}

/// A bundler module rule. `test` is the source of a regular expression matched
/// against module paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleRule {
  pub test: &'static str,
  /// Asset module type, e.g. `asset/source`.
  #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
  pub kind: Option<&'static str>,
  #[serde(rename = "use", skip_serializing_if = "Vec::is_empty")]
  pub loaders: Vec<LoaderSettings>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleSettings {
  pub rules: Vec<ModuleRule>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolveSettings {
  pub extensions: Vec<&'static str>,
  pub alias: FxIndexMap<String, PathBuf>,
}
