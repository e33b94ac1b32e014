use serde::Deserialize;

use crate::EnrichedProduct;

/// Optional inclusive bounds applied to an enriched product list.
///
/// Field names match the query-string parameters of `GET /products`.
/// `limit`/`offset` are accepted for forward compatibility but are not
/// applied anywhere yet.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilter {
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_popularity: Option<f64>,
    pub max_popularity: Option<f64>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl ProductFilter {
    /// Returns `true` when no bound is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min_price.is_none()
            && self.max_price.is_none()
            && self.min_popularity.is_none()
            && self.max_popularity.is_none()
    }

    /// Applies every present bound conjunctively, preserving relative order.
    ///
    /// Price bounds compare against the derived `price`; popularity bounds
    /// against the raw `popularityScore`. An absent bound imposes no
    /// constraint.
    #[must_use]
    pub fn apply(&self, products: Vec<EnrichedProduct>) -> Vec<EnrichedProduct> {
        products
            .into_iter()
            .filter(|p| self.matches(p))
            .collect()
    }

    fn matches(&self, product: &EnrichedProduct) -> bool {
        self.min_price.is_none_or(|min| product.price >= min)
            && self.max_price.is_none_or(|max| product.price <= max)
            && self
                .min_popularity
                .is_none_or(|min| product.record.popularity_score >= min)
            && self
                .max_popularity
                .is_none_or(|max| product.record.popularity_score <= max)
    }
}
