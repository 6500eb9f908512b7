use std::{fs, path::Path};

use tailor::{BuildTask, CopyInstruction, Mode, Tailor, BUNDLED_CONFIG, SETTINGS_ENV};

fn project() -> tempfile::TempDir {
  let dir = tempfile::tempdir().unwrap();
  fs::create_dir_all(dir.path().join("assets/js")).unwrap();
  fs::write(dir.path().join("assets/js/app.js"), "console.log('app')").unwrap();
  dir
}

fn write_config(dir: &Path, json: &str) {
  fs::write(dir.join("tailor.json"), json).unwrap();
}

#[test]
fn production_packages_existing_dirs_only() {
  let dir = project();
  fs::create_dir(dir.path().join("src")).unwrap();

  let tailor = Tailor::new(dir.path(), None).unwrap();
  let root = &tailor.settings().root;
  let plan = tailor.packaging_plan(Mode::Production);

  assert!(plan.copies().contains(&CopyInstruction::new(root.join("src"), root.join("theme/src"))));
  assert!(plan.copies().iter().all(|copy| copy.source != root.join("vendor")));
}

#[test]
fn development_plan_is_delete_only() {
  let dir = project();
  write_config(dir.path(), r#"{ "deleteOnEnd": ["/tmp/x"] }"#);
  fs::create_dir(dir.path().join("src")).unwrap();

  let tailor = Tailor::new(dir.path(), None).unwrap();
  let plan = tailor.packaging_plan(Mode::Development);

  assert_eq!(
    serde_json::to_value(&plan).unwrap(),
    serde_json::json!({ "onEnd": { "delete": ["/tmp/x"] } })
  );
}

#[test]
fn watch_dev_command_line() {
  let dir = project();
  let tailor = Tailor::new(dir.path(), None).unwrap();

  let command = tailor.bundler_command(BuildTask::WatchDevelopment).unwrap();
  let config = tailor.settings().root.join("node_modules/.cache/tailor/webpack.config.js");

  assert_eq!(
    command.args,
    vec![
      "--mode=development".to_string(),
      "--watch".to_string(),
      format!("--config={}", config.display())
    ]
  );
  assert!(!command.args.iter().any(|arg| arg == "--mode=production"));
  assert!(command.program.ends_with(if cfg!(windows) { "webpack.cmd" } else { "webpack" }));
  assert_eq!(command.cwd, tailor.settings().root);
  assert_eq!(fs::read_to_string(config).unwrap(), BUNDLED_CONFIG);
}

#[test]
fn custom_bundler_config_is_left_alone() {
  let dir = project();
  write_config(dir.path(), r#"{ "bundlerConfig": "webpack.config.js" }"#);
  fs::write(dir.path().join("webpack.config.js"), "module.exports = {};").unwrap();

  let tailor = Tailor::new(dir.path(), None).unwrap();
  let command = tailor.bundler_command(BuildTask::Development).unwrap();

  let config = tailor.settings().root.join("webpack.config.js");
  assert_eq!(command.args.last().unwrap(), &format!("--config={}", config.display()));
  assert_eq!(fs::read_to_string(&config).unwrap(), "module.exports = {};");
  assert!(!tailor.settings().root.join("node_modules/.cache").exists());
}

#[test]
fn destructive_package_dir_is_rejected() {
  let dir = project();
  fs::create_dir(dir.path().join("src")).unwrap();

  let configs = [r#"{ "packageDir": ".." }"#, r#"{ "packageDir": "src" }"#, r#"{ "buildDir": "." }"#];
  for json in configs {
    write_config(dir.path(), json);
    assert!(Tailor::new(dir.path(), None).is_err(), "{json} was accepted");
  }
}

#[test]
fn settings_travel_in_the_environment() {
  let dir = project();
  let tailor = Tailor::new(dir.path(), None).unwrap();

  let command = tailor.bundler_command(BuildTask::Production).unwrap();
  let (name, payload) = &command.envs[0];
  assert_eq!(*name, SETTINGS_ENV);

  let payload: serde_json::Value = serde_json::from_str(payload).unwrap();
  assert_eq!(payload["mode"], "production");
  assert_eq!(payload["watch"], false);
  assert!(payload["entry"]["app"].is_array());
}

#[test]
fn invalid_config_aborts_loading() {
  let dir = project();
  write_config(dir.path(), "{ not json");

  let err = Tailor::new(dir.path(), None).err().unwrap();
  assert!(err.to_string().starts_with("Failed to parse"));
}

#[test]
fn commands_are_prepared_in_order() {
  let dir = project();
  let tailor = Tailor::new(dir.path(), None).unwrap();

  let tasks = BuildTask::from_tokens(&["watch-prod", "dev"]);
  let commands = tailor.bundler_commands(&tasks).unwrap();

  assert_eq!(
    commands.iter().map(|command| command.task).collect::<Vec<_>>(),
    [BuildTask::Development, BuildTask::WatchProduction]
  );
}

#[test]
fn missing_project_root_is_an_error() {
  let dir = project();
  let missing = dir.path().join("nope");
  assert!(Tailor::new(&missing, None).is_err());
}
