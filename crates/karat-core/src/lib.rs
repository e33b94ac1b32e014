mod app_config;
mod catalog;
mod config;
mod filter;
mod pricing;
mod products;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use catalog::{enrich, load_catalog, CatalogError};
pub use config::{load_app_config, load_app_config_from_env};
pub use filter::ProductFilter;
pub use pricing::{price, round2};
pub use products::{EnrichedProduct, ProductRecord};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
