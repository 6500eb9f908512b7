pub mod build_task;
pub mod bundler_settings;
pub mod copy_pattern;
pub mod image_tool;
pub mod module_rule;
pub mod packaging_plan;
pub mod terser_options;
