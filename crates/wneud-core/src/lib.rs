//! wneud Core - Core library for the wneud changelog tool
//!
//! This crate provides the error types and configuration shared by the
//! changelog library and the command line interface.

pub mod config;
pub mod error;

pub use config::{load_config_or_default, ChangelogConfig, Config};
pub use error::{ChangelogError, ConfigError, Result, WneudError};
