use serde::{Deserialize, Serialize};

/// A raw catalogue entry as it appears in the products JSON file.
///
/// Only the fields the pricing pipeline computes over are typed;
/// everything else (image URLs per colour, descriptions, ...) rides in
/// `extra` and is passed through to API responses untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub name: String,
    /// Popularity on a 0–1 scale, by convention.
    pub popularity_score: f64,
    /// Weight in grams.
    pub weight: f64,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A catalogue entry with its derived fields attached.
///
/// `id` is the record's 1-based position in the loaded file. It is
/// recomputed on every load, so it is only stable while the file's order
/// and length are unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedProduct {
    #[serde(flatten)]
    pub record: ProductRecord,
    pub id: u32,
    /// Derived price in USD, rounded to 2 decimals.
    pub price: f64,
    /// The per-gram gold quote this price was computed from, rounded to 2 decimals.
    pub gold_price: f64,
}
