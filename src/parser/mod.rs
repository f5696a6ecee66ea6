//! Parsing for keyboard config and switch module definition files.

pub mod config_file;
pub mod switch_module;

// Re-export commonly used functions
pub use config_file::{load_keyboard_config, parse_keyboard_config};
pub use switch_module::{load_switch_module, load_switch_modules};
