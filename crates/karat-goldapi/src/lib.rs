mod client;
mod error;

pub use client::{GoldApiClient, FALLBACK_PRICE_PER_GRAM, TROY_OUNCE_GRAMS};
pub use error::GoldApiError;
