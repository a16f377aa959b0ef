//! Core types and configuration for recstat.
//!
//! This crate provides the status model and configuration handling shared
//! by the recstat binary and anything embedding the probe.

mod config;
mod status;

pub use config::{Config, ConfigManager};
pub use status::{Glyphs, Status};

/// Application name
pub const APP_NAME: &str = "recstat";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";
