use std::{
  fmt::{self, Display},
  ops::{Deref, DerefMut},
};

/// Every error collected while preparing or running the requested tasks.
#[derive(Debug)]
pub struct BuildError(pub Vec<anyhow::Error>);

impl Deref for BuildError {
  type Target = Vec<anyhow::Error>;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl DerefMut for BuildError {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.0
  }
}

impl Display for BuildError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (index, error) in self.0.iter().enumerate() {
      if index > 0 {
        writeln!(f)?;
      }
      // `{:#}` keeps the context chain on one line.
      write!(f, "{error:#}")?;
    }
    Ok(())
  }
}

impl From<anyhow::Error> for BuildError {
  fn from(error: anyhow::Error) -> Self {
    Self(vec![error])
  }
}

impl From<Vec<anyhow::Error>> for BuildError {
  fn from(errors: Vec<anyhow::Error>) -> Self {
    Self(errors)
  }
}

pub type BuildResult<T> = anyhow::Result<T, BuildError>;

#[test]
fn test_display_joins_context_chains() {
  let first = anyhow::anyhow!("missing file").context("Failed to load tailor.json");
  let second = anyhow::anyhow!("spawn failed");

  let error = BuildError::from(vec![first, second]);
  assert_eq!(error.len(), 2);
  assert_eq!(error.to_string(), "Failed to load tailor.json: missing file\nspawn failed");
}
