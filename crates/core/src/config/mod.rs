//! Configuration management for soma-inspector

mod settings;

// Re-export main types
pub use settings::{CONFIG_FILE_NAMES, Config, DEFAULT_WATCH_DEBOUNCE_MS};
