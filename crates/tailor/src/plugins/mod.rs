pub mod copy;
pub mod file_manager;
pub mod image_minimizer;
pub mod module_rules;
pub mod terser;
