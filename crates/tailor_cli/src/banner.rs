use ansi_term::Colour;
use tailor::BuildTask;

use crate::runner::Outcome;

const NAME: &str = "Tailor";

pub fn spacer() -> String {
  let dim = Colour::White.dimmed();
  dim.paint(format!("{} {NAME} {}", "=".repeat(30), "=".repeat(30))).to_string()
}

pub fn start_message(task: BuildTask) -> String {
  let action = if task.is_watch() { "Watching" } else { "Compiling" };
  format!(
    "{} {action} assets ({})...",
    Colour::Purple.paint("==>"),
    Colour::Green.paint(task.mode().as_str())
  )
}

pub fn end_message(task: BuildTask, outcome: Outcome) -> String {
  let mode = Colour::Green.paint(task.mode().as_str());
  match outcome {
    Outcome::Success if task.is_watch() => {
      format!("{} Stopped watching assets ({mode})", Colour::Green.paint("✔"))
    }
    Outcome::Success => format!("{} Assets compiled ({mode})", Colour::Green.paint("✔")),
    Outcome::Failed(Some(code)) => {
      format!("{} Bundler exited with code {code} ({mode})", Colour::Red.paint("✘"))
    }
    Outcome::Failed(None) => format!("{} Bundler was terminated ({mode})", Colour::Red.paint("✘")),
    Outcome::Cancelled => format!("{} Cancelled ({mode})", Colour::Yellow.paint("■")),
  }
}
