pub mod app_config;
pub mod config;
pub mod geo;
pub mod search;
pub mod session;
pub mod types;
pub mod validation;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use geo::{haversine_km, Coordinates, EARTH_RADIUS_KM};
pub use search::{find_supermarkets, search_products, title_matches};
pub use session::SearchSession;
pub use types::{Location, Product, Supermarket};
pub use validation::{
    validate_address, validate_keyword, RadiusKm, ValidationError, MAX_RADIUS_KM, MIN_RADIUS_KM,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
