use crate::Mode;

/// One bundler invocation requested on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildTask {
  Development,
  Production,
  WatchDevelopment,
  WatchProduction,
}

impl BuildTask {
  /// Every task, in the order they are executed when several are requested.
  pub const ALL: [BuildTask; 4] =
    [Self::Development, Self::Production, Self::WatchDevelopment, Self::WatchProduction];

  pub fn from_token(token: &str) -> Option<Self> {
    Self::ALL.into_iter().find(|task| task.token() == token)
  }

  /// Picks the requested tasks out of `tokens`, ignoring anything unrecognized.
  /// Repeated tokens run once.
  pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Vec<Self> {
    Self::ALL
      .into_iter()
      .filter(|task| tokens.iter().any(|token| token.as_ref() == task.token()))
      .collect()
  }

  pub fn token(self) -> &'static str {
    match self {
      Self::Development => "dev",
      Self::Production => "prod",
      Self::WatchDevelopment => "watch-dev",
      Self::WatchProduction => "watch-prod",
    }
  }

  pub fn mode(self) -> Mode {
    match self {
      Self::Development | Self::WatchDevelopment => Mode::Development,
      Self::Production | Self::WatchProduction => Mode::Production,
    }
  }

  #[inline]
  pub fn is_watch(self) -> bool {
    matches!(self, Self::WatchDevelopment | Self::WatchProduction)
  }
}
