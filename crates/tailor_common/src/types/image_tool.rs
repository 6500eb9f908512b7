use serde::{Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SvgoPlugin {
  pub name: &'static str,
  pub active: bool,
}

impl SvgoPlugin {
  pub fn new(name: &'static str, active: bool) -> Self {
    Self { name, active }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SvgoOptions {
  pub plugins: Vec<SvgoPlugin>,
}

/// An imagemin plugin. Serialized the way imagemin expects it: `["name"]` or
/// `["name", options]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageTool {
  Gifsicle,
  Jpegtran,
  Optipng,
  Svgo(SvgoOptions),
}

impl ImageTool {
  pub fn name(&self) -> &'static str {
    match self {
      Self::Gifsicle => "gifsicle",
      Self::Jpegtran => "jpegtran",
      Self::Optipng => "optipng",
      Self::Svgo(_) => "svgo",
    }
  }
}

impl Serialize for ImageTool {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    match self {
      Self::Svgo(options) => (self.name(), options).serialize(serializer),
      Self::Gifsicle | Self::Jpegtran | Self::Optipng => [self.name()].serialize(serializer),
    }
  }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PluginOptionSet(pub Vec<ImageTool>);

impl PluginOptionSet {
  pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
    self.0.iter().map(ImageTool::name)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageMinimizerSettings {
  pub severity_error: &'static str,
  pub plugins: PluginOptionSet,
}

#[test]
fn test_serialize_image_tools() {
  let set = PluginOptionSet(vec![
    ImageTool::Gifsicle,
    ImageTool::Svgo(SvgoOptions { plugins: vec![SvgoPlugin::new("removeViewBox", false)] }),
  ]);

  assert_eq!(
    serde_json::to_string(&set).unwrap(),
    r#"[["gifsicle"],["svgo",{"plugins":[{"name":"removeViewBox","active":false}]}]]"#
  );
}
