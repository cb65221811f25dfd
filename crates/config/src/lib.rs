//! Configuration management for the keyword rank tracker.
//!
//! This crate resolves the tracker's settings from a YAML config file,
//! an optional `.env` file, and environment variables.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{Config, SerpApiConfig};
