use std::path::Path;

use serde_json::json;
use tailor_common::{LoaderSettings, ModuleRule, ResolveSettings};
use tailor_utils::indexmap::FxIndexMap;

/// Stands in for `MiniCssExtractPlugin.loader`, which only exists once the plugin is required.
pub const CSS_EXTRACT_LOADER: &str = "mini-css-extract-plugin";

/// Stylesheets are extracted into files, scripts go through babel and svgs are
/// inlined as source. The same rules apply in both modes.
pub fn module_rules() -> Vec<ModuleRule> {
  let styles = ModuleRule {
    test: r"\.(sa|sc|c)ss$",
    kind: None,
    loaders: vec![
      LoaderSettings::new(CSS_EXTRACT_LOADER),
      // Urls are left alone; images and fonts are copied as they are.
      LoaderSettings::with_options("css-loader", json!({ "url": false })),
      LoaderSettings::with_options(
        "postcss-loader",
        json!({ "postcssOptions": { "plugins": ["autoprefixer"] } }),
      ),
      LoaderSettings::new("sass-loader"),
    ],
  };

  let svgs = ModuleRule { test: r"\.svg$", kind: Some("asset/source"), loaders: vec![] };

  let scripts = ModuleRule {
    test: r"\.(js?)$",
    kind: None,
    loaders: vec![LoaderSettings::with_options(
      "babel-loader",
      json!({
        "plugins": [
          "@babel/plugin-transform-template-literals",
          "@babel/plugin-transform-block-scoping",
          "@babel/plugin-proposal-nullish-coalescing-operator"
        ]
      }),
    )],
  };

  vec![styles, svgs, scripts]
}

/// `@` points at the assets dir so entries can import siblings without `../..`.
pub fn module_resolution(assets_dir: &Path) -> ResolveSettings {
  let mut alias = FxIndexMap::default();
  alias.insert("@".to_string(), assets_dir.to_path_buf());

  ResolveSettings { extensions: vec![".js", ".json", ".scss", ".css"], alias }
}
