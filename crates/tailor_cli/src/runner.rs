use std::{
  io::{self, Write},
  process::{ExitStatus, Stdio},
};

use anyhow::Context;
use tailor::{BuildTask, BundlerCommand};
use tokio::process::Command;

use crate::banner;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
  Success,
  /// Non-zero exit, or `None` when the bundler was killed by a signal.
  Failed(Option<i32>),
  Cancelled,
}

impl Outcome {
  pub fn exit_code(self) -> u8 {
    match self {
      Self::Success => 0,
      Self::Failed(Some(code)) => u8::try_from(code).ok().filter(|code| *code != 0).unwrap_or(1),
      Self::Failed(None) => 1,
      Self::Cancelled => 130,
    }
  }
}

/// Holds the banner open while the bundler runs and closes it when dropped, so the
/// end banner shows up however the run ends.
struct Progress<W: Write> {
  task: BuildTask,
  outcome: Outcome,
  out: W,
}

impl<W: Write> Progress<W> {
  fn start(task: BuildTask, mut out: W) -> Self {
    // Banners are best effort; a closed stdout must not stop the build.
    let _ = writeln!(out, "{}\n{}\n", banner::spacer(), banner::start_message(task));
    // Anything that drops the guard before `finish` counts as a cancellation.
    Self { task, outcome: Outcome::Cancelled, out }
  }

  fn finish(&mut self, outcome: Outcome) {
    self.outcome = outcome;
  }
}

impl<W: Write> Drop for Progress<W> {
  fn drop(&mut self) {
    let _ = writeln!(
      self.out,
      "\n{}\n{}",
      banner::end_message(self.task, self.outcome),
      banner::spacer()
    );
  }
}

/// Resolves on Ctrl-C. Never resolves if the handler can't be installed.
async fn interrupted() {
  if let Err(err) = tokio::signal::ctrl_c().await {
    tracing::warn!("Failed to listen for Ctrl-C: {err}");
    std::future::pending::<()>().await;
  }
}

/// Records how the bundler exited on the progress guard.
fn settle<W: Write>(
  progress: &mut Progress<W>,
  waited: io::Result<ExitStatus>,
) -> anyhow::Result<Outcome> {
  match waited {
    Ok(status) => {
      let outcome =
        if status.success() { Outcome::Success } else { Outcome::Failed(status.code()) };
      progress.finish(outcome);
      Ok(outcome)
    }
    Err(err) => {
      progress.finish(Outcome::Failed(None));
      Err(err).context("Failed to wait for the bundler")
    }
  }
}

/// Runs the bundler with inherited stdio and waits for it to exit. Banners go to `out`.
pub async fn run(command: &BundlerCommand, out: impl Write) -> anyhow::Result<Outcome> {
  let mut child = Command::new(&command.program)
    .args(&command.args)
    .current_dir(&command.cwd)
    .envs(command.envs.iter().map(|(key, value)| (*key, value.as_str())))
    .stdin(Stdio::inherit())
    .stdout(Stdio::inherit())
    .stderr(Stdio::inherit())
    .kill_on_drop(true)
    .spawn()
    .with_context(|| format!("Failed to spawn {}", command.program.display()))?;

  let mut progress = Progress::start(command.task, out);
  tracing::debug!(
    "Spawned {} {} (pid {:?})",
    command.program.display(),
    command.args.join(" "),
    child.id()
  );

  let waited = tokio::select! {
    status = child.wait() => Some(status),
    () = interrupted() => None,
  };

  match waited {
    Some(waited) => settle(&mut progress, waited),
    None => {
      if let Err(err) = child.kill().await {
        tracing::warn!("Failed to stop the bundler: {err}");
      }
      progress.finish(Outcome::Cancelled);
      Ok(Outcome::Cancelled)
    }
  }
}

#[cfg(all(test, unix))]
mod tests {
  use std::path::PathBuf;

  use super::*;

  fn sh(script: &str) -> BundlerCommand {
    BundlerCommand {
      task: BuildTask::Development,
      program: PathBuf::from("sh"),
      args: vec!["-c".to_string(), script.to_string()],
      cwd: std::env::temp_dir(),
      envs: vec![(tailor::SETTINGS_ENV, r#"{"mode":"development"}"#.to_string())],
    }
  }

  fn printed(out: &[u8]) -> String {
    String::from_utf8_lossy(out).into_owned()
  }

  #[tokio::test]
  async fn success() {
    let mut out = Vec::new();
    assert_eq!(run(&sh("exit 0"), &mut out).await.unwrap(), Outcome::Success);

    let out = printed(&out);
    assert!(out.contains("Compiling assets ("));
    assert!(out.contains("Assets compiled ("));
    assert_eq!(out.matches(" Tailor ").count(), 2);
  }

  #[tokio::test]
  async fn exit_code_is_kept() {
    let mut out = Vec::new();
    let outcome = run(&sh("exit 3"), &mut out).await.unwrap();
    assert_eq!(outcome, Outcome::Failed(Some(3)));
    assert_eq!(outcome.exit_code(), 3);
    assert!(printed(&out).contains("Bundler exited with code 3"));
  }

  #[tokio::test]
  async fn settings_are_passed_through_env() {
    let script = r#"test "$TAILOR_SETTINGS" = '{"mode":"development"}'"#;
    assert_eq!(run(&sh(script), io::sink()).await.unwrap(), Outcome::Success);
  }

  #[tokio::test]
  async fn missing_binary_fails_to_spawn() {
    let mut command = sh("");
    command.program = PathBuf::from("/nonexistent/node_modules/.bin/webpack");

    let mut out = Vec::new();
    let err = run(&command, &mut out).await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to spawn /nonexistent/node_modules/.bin/webpack");
    // Nothing was started, so there is no banner to close.
    assert!(out.is_empty());
  }

  #[test]
  fn failed_wait_closes_the_banner() {
    let mut out = Vec::new();
    let mut progress = Progress::start(BuildTask::Production, &mut out);

    let err = settle(&mut progress, Err(io::Error::other("no child"))).unwrap_err();
    assert_eq!(format!("{err:#}"), "Failed to wait for the bundler: no child");
    drop(progress);

    assert!(printed(&out).contains("Bundler was terminated"));
  }

  #[test]
  fn dropping_early_reports_cancellation() {
    let mut out = Vec::new();
    drop(Progress::start(BuildTask::WatchDevelopment, &mut out));

    let out = printed(&out);
    assert!(out.contains("Watching assets ("));
    assert!(out.contains("Cancelled ("));
  }

  #[test]
  fn exit_codes() {
    assert_eq!(Outcome::Success.exit_code(), 0);
    assert_eq!(Outcome::Failed(Some(300)).exit_code(), 1);
    assert_eq!(Outcome::Failed(None).exit_code(), 1);
    assert_eq!(Outcome::Cancelled.exit_code(), 130);
  }
}
