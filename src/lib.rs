// Re-export from sub-crates
pub use recstat_core::{APP_NAME, Config, ConfigManager, DEFAULT_LOG_LEVEL, Glyphs, Status};

// App-specific modules
pub mod probe;
pub mod runner;
pub mod widget;

// Version from this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
