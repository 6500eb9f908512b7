mod args;
mod banner;
mod logger;
mod runner;

use std::{
  io,
  path::{Path, PathBuf},
  process::ExitCode,
};

use ansi_term::Colour;
use anyhow::Context;
use args::{settings_modes, unknown_tokens, OutputArgs, ProjectArgs};
use clap::Parser;

use tailor::{BuildError, BuildTask, Tailor};

/// Compiles theme assets with webpack and packages the theme for release.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Commands {
  /// Any of `dev`, `prod`, `watch-dev`, `watch-prod`, `settings-dev`, `settings-prod`
  tokens: Vec<String>,

  #[clap(flatten)]
  project: ProjectArgs,

  #[clap(flatten)]
  output: OutputArgs,
}

fn print_errors(errors: &BuildError) {
  for error in &**errors {
    eprintln!("{} {:#}", Colour::Red.paint("Error:"), error);
  }
}

/// `--cwd` when given, the process's working directory otherwise.
fn project_root(cwd: Option<&Path>) -> anyhow::Result<PathBuf> {
  match cwd {
    Some(cwd) => Ok(cwd.to_path_buf()),
    None => std::env::current_dir().context("Failed to read the current directory"),
  }
}

fn load(project: &ProjectArgs) -> anyhow::Result<Tailor> {
  let cwd = project_root(project.cwd.as_deref())?;
  Tailor::new(&cwd, project.config.as_deref())
}

#[tokio::main]
async fn main() -> ExitCode {
  logger::init();

  let args = Commands::parse();

  for token in unknown_tokens(&args.tokens) {
    tracing::debug!("Ignoring unknown token `{token}`");
  }

  let tailor = match load(&args.project) {
    Ok(tailor) => tailor,
    Err(err) => {
      print_errors(&err.into());
      return ExitCode::FAILURE;
    }
  };

  for mode in settings_modes(&args.tokens) {
    let settings = tailor
      .bundler_settings(mode, false)
      .and_then(|settings| serde_json::to_string_pretty(&settings).map_err(Into::into));
    match settings {
      Ok(json) => println!("{json}"),
      Err(err) => {
        print_errors(&err.into());
        return ExitCode::FAILURE;
      }
    }
  }

  let tasks = BuildTask::from_tokens(&args.tokens);
  let commands = match tailor.bundler_commands(&tasks) {
    Ok(commands) => commands,
    Err(errors) => {
      print_errors(&errors);
      return ExitCode::FAILURE;
    }
  };

  for command in &commands {
    let outcome = if args.output.silent {
      runner::run(command, io::sink()).await
    } else {
      runner::run(command, io::stdout()).await
    };
    match outcome {
      Ok(runner::Outcome::Success) => {}
      Ok(outcome) => return ExitCode::from(outcome.exit_code()),
      Err(err) => {
        print_errors(&err.into());
        return ExitCode::FAILURE;
      }
    }
  }

  ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn project_root_prefers_cwd_flag() {
    assert_eq!(project_root(Some(Path::new("/p"))).unwrap(), PathBuf::from("/p"));
    assert_eq!(project_root(None).unwrap(), std::env::current_dir().unwrap());
  }
}
