//! Configuration module for NestEgg
//!
//! This module provides configuration management including:
//! - Base/data directory resolution
//! - Settings persistence (server address, log filter)

pub mod paths;
pub mod settings;

pub use paths::NestEggPaths;
pub use settings::{ServerSettings, Settings};
