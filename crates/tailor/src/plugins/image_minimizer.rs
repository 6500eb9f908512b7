use tailor_common::{
  ImageMinimizerSettings, ImageTool, Mode, PluginOptionSet, SvgoOptions, SvgoPlugin,
};

/// imagemin plugins, in the order they run.
pub fn image_optimisation_settings(mode: Mode) -> PluginOptionSet {
  let mut tools = vec![ImageTool::Gifsicle, ImageTool::Jpegtran, ImageTool::Optipng];

  if mode.is_production() {
    tools.push(ImageTool::Svgo(SvgoOptions {
      plugins: vec![
        SvgoPlugin::new("removeViewBox", false),
        SvgoPlugin::new("minifyStyles", true),
        SvgoPlugin::new("removeDoctype", true),
        SvgoPlugin::new("collapseGroups", true),
        SvgoPlugin::new("removeTitle", true),
      ],
    }));
  }

  PluginOptionSet(tools)
}

pub fn image_minimizer_settings(mode: Mode) -> ImageMinimizerSettings {
  // A broken image should not fail the whole build.
  ImageMinimizerSettings { severity_error: "warning", plugins: image_optimisation_settings(mode) }
}
