pub mod app_config;
pub mod config;
pub mod reports;
pub mod window;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use reports::PhoneReport;
pub use window::{TimeRange, TimeWindow, QUERY_TIMESTAMP_FORMAT};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("invalid range '{0}': must be 'day', 'week', or 'all'")]
    InvalidRange(String),
}
