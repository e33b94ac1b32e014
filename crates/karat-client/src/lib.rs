mod cache;
mod client;
mod error;
mod queries;

pub use cache::QueryCache;
pub use client::{ProductsQuery, ShopApiClient};
pub use error::ClientError;
pub use queries::ProductQueries;
