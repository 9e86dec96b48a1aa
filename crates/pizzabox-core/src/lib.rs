pub mod app_config;
pub mod config;
pub mod order_file;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use order_file::{
    load_order_file, parse_order_file, CustomerSpec, OrderFile, ProductSpec, ShippingAddress,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read order file {path}: {source}")]
    OrderFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse order file: {0}")]
    OrderFileParse(#[from] serde_yaml::Error),

    #[error("order file validation failed: {0}")]
    Validation(String),
}
