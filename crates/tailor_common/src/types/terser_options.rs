use serde::Serialize;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct TerserCompress {
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub pure_funcs: Vec<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct TerserFormat {
  pub comments: bool,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct TerserMinifyOptions {
  pub compress: TerserCompress,
  pub format: TerserFormat,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TerserOptions {
  pub extract_comments: bool,
  pub terser_options: TerserMinifyOptions,
}
