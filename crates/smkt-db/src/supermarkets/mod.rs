//! Database operations for the `supermarkets` table.

mod read;
mod types;
mod write;

pub use read::list_supermarkets;
pub use types::{NewSupermarket, SupermarketRow};
pub use write::{clear_supermarkets, upsert_supermarkets};
