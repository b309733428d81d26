//! Configuration and file management for game-console
//!
//! This crate provides:
//! - File path utilities for config and cache directories
//! - Configuration file loading (TOML)
//! - Console configuration (ConsoleConfig)

pub mod config_file;
pub mod console_config;
pub mod paths;

pub use config_file::load_config_file;
pub use console_config::ConsoleConfig;
pub use paths::{cache_dir, config_dir, config_path};
