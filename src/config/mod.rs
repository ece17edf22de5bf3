//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables with the
//! `config` and `dotenvy` crates. Variables use the `ESSENTIA` prefix and
//! nested values use `__` as separator, e.g. `ESSENTIA__AI__GEMINI_API_KEY`.
//! Every section has defaults, so an empty environment yields the offline
//! reference setup.
//!
//! # Example
//!
//! ```no_run
//! use essentia::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Snapshots in {}", config.session.snapshot_dir.display());
//! ```

mod ai;
mod error;
mod logging;
mod session;

pub use ai::{AiConfig, AiProvider};
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use session::SessionConfig;

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ai: AiConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("ESSENTIA")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.ai.validate()?;
        self.session.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
