//! Configuration module for coin-ledger
//!
//! This module provides configuration management including:
//! - Config directory resolution
//! - User settings persistence
//! - Theme colors

pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::{Settings, ThemeSettings};
