//! Configuration module - Search and share preferences
//!
//! This module provides functionality for:
//! - Loading configuration from ~/.scene-search/config.json
//! - Default values for all settings
//! - Type definitions for config structures
//!
//! # Module Structure
//!
//! - `defaults` - All default constant values
//! - `types` - Configuration struct definitions (Config, ShareConfig, etc.)
//! - `loader` - File system loading and parsing

mod defaults;
mod loader;
mod types;

pub use defaults::{DEFAULT_CONFIG_PATH, DEFAULT_EXCLUDED_SHARE_TARGETS};

pub use types::{BackspacePolicy, Config, ShareConfig};

pub use loader::{load_config, load_config_from};

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
