// Configuration module entry point
// Layered settings: built-in defaults, optional config file, MOCK_* environment

mod state;
mod types;

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, Environment, File};
use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{AssetsConfig, Config, PerformanceConfig};

/// Config file looked up when no path is given on the command line
pub const DEFAULT_CONFIG_PATH: &str = "mock";

impl Config {
    /// Load configuration from specified file path (without extension)
    /// A missing file is not an error: defaults and environment still apply.
    pub fn load_from(config_path: &str) -> Result<Self, ConfigError> {
        with_defaults()?
            .add_source(File::with_name(config_path).required(false))
            .add_source(
                Environment::with_prefix("MOCK")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }

    /// Built-in defaults only, ignoring files and environment
    pub fn defaults() -> Result<Self, ConfigError> {
        with_defaults()?.build()?.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

fn with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    config::Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5055)?
        .set_default("logging.level", "info")?
        .set_default("logging.access_log", true)?
        .set_default("performance.keep_alive_timeout", 75)?
        .set_default("performance.read_timeout", 30)?
        .set_default("performance.write_timeout", 30)?
        .set_default("http.server_name", "seerr-mock")?
        .set_default("http.enable_cors", true)?
        .set_default("http.application_url", "http://10.0.2.2:5055")?
        .set_default("assets.poster", "website/screenshots/issues.png")?
        .set_default("assets.backdrop", "website/screenshots/discover.png")?
        .set_default("assets.avatar", "website/screenshots/profile.png")
}
