use tailor_common::{Mode, TerserCompress, TerserFormat, TerserMinifyOptions, TerserOptions};

/// Production builds strip `console.log` calls; both modes drop comments.
pub fn terser_options(mode: Mode) -> TerserOptions {
  let pure_funcs =
    if mode.is_production() { vec!["console.log".to_string()] } else { Vec::new() };

  TerserOptions {
    extract_comments: false,
    terser_options: TerserMinifyOptions {
      compress: TerserCompress { pure_funcs },
      format: TerserFormat { comments: false },
    },
  }
}

#[test]
fn test_terser_options() {
  assert_eq!(
    serde_json::to_value(terser_options(Mode::Production)).unwrap(),
    serde_json::json!({
      "extractComments": false,
      "terserOptions": { "compress": { "pure_funcs": ["console.log"] }, "format": { "comments": false } }
    })
  );
  assert!(terser_options(Mode::Development).terser_options.compress.pure_funcs.is_empty());
}
