pub mod error;
pub mod normalize;
pub mod overpass;
pub(crate) mod rate_limit;
pub mod types;

pub use error::ScraperError;
pub use normalize::{normalize_product, parse_discount_date};
pub use overpass::{match_brand, OverpassClient};
pub use types::{DiscoveredSupermarket, RawPrice, RawProduct};
