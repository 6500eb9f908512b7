pub mod discover_entries;
pub mod load_options;
pub mod resolve_settings;
