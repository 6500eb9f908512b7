use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyInstruction {
  pub source: PathBuf,
  pub destination: PathBuf,
}

impl CopyInstruction {
  pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
    Self { source: source.into(), destination: destination.into() }
  }
}

/// Operations run before the bundler compiles anything.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct StartOperations {
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub delete: Vec<PathBuf>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub mkdir: Vec<PathBuf>,
}

impl StartOperations {
  pub fn is_empty(&self) -> bool {
    self.delete.is_empty() && self.mkdir.is_empty()
  }
}

/// Operations run once the bundler has emitted its assets. The file-management
/// plugin runs them in field order.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct EndOperations {
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub delete: Vec<PathBuf>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub mkdir: Vec<PathBuf>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub copy: Vec<CopyInstruction>,
}

impl EndOperations {
  pub fn is_empty(&self) -> bool {
    self.delete.is_empty() && self.mkdir.is_empty() && self.copy.is_empty()
  }
}

/// Declarative filesystem operations that assemble the distributable package.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackagingPlan {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub on_start: Option<StartOperations>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub on_end: Option<EndOperations>,
}

impl PackagingPlan {
  /// Drops stages that ended up with nothing to do.
  pub fn new(on_start: StartOperations, on_end: EndOperations) -> Self {
    Self {
      on_start: (!on_start.is_empty()).then_some(on_start),
      on_end: (!on_end.is_empty()).then_some(on_end),
    }
  }

  pub fn is_empty(&self) -> bool {
    self.on_start.is_none() && self.on_end.is_none()
  }

  pub fn copies(&self) -> &[CopyInstruction] {
    self.on_end.as_ref().map_or(&[], |on_end| on_end.copy.as_slice())
  }
}

#[test]
fn test_empty_stages_are_dropped() {
  let plan = PackagingPlan::new(StartOperations::default(), EndOperations::default());
  assert!(plan.is_empty());
  assert_eq!(serde_json::to_string(&plan).unwrap(), "{}");

  let plan = PackagingPlan::new(
    StartOperations::default(),
    EndOperations { delete: vec![PathBuf::from("/tmp/x")], ..Default::default() },
  );
  assert_eq!(serde_json::to_string(&plan).unwrap(), r#"{"onEnd":{"delete":["/tmp/x"]}}"#);
  assert!(plan.copies().is_empty());
}
