// Application state module
// Read-only state shared by every connection

use super::types::Config;

/// Application state
///
/// Built once at startup and never mutated; connections hold it behind an `Arc`.
pub struct AppState {
    pub config: Config,
}

impl AppState {
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// Whether request lines are written to the access log
    pub const fn access_log(&self) -> bool {
        self.config.logging.access_log
    }
}
