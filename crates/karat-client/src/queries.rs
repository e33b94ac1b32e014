use std::time::Duration;

use karat_core::EnrichedProduct;

use crate::{ClientError, ProductsQuery, QueryCache, ShopApiClient};

/// List queries go stale after 2 minutes and are retained for 5.
const LIST_STALE: Duration = Duration::from_secs(2 * 60);
const LIST_RETAIN: Duration = Duration::from_secs(5 * 60);

/// Single-item queries go stale after 5 minutes and are retained for 10.
const ITEM_STALE: Duration = Duration::from_secs(5 * 60);
const ITEM_RETAIN: Duration = Duration::from_secs(10 * 60);

/// The two read queries the UI consumes, each behind its own cache window.
///
/// Repeated identical queries inside the staleness window answer from cache
/// without touching the network; concurrent identical queries share one
/// in-flight request. A failed query is not cached, so the next call is the
/// explicit retry.
pub struct ProductQueries {
    client: ShopApiClient,
    list_cache: QueryCache<Vec<EnrichedProduct>>,
    item_cache: QueryCache<Option<EnrichedProduct>>,
}

impl ProductQueries {
    #[must_use]
    pub fn new(client: ShopApiClient) -> Self {
        Self {
            client,
            list_cache: QueryCache::new(LIST_STALE, LIST_RETAIN),
            item_cache: QueryCache::new(ITEM_STALE, ITEM_RETAIN),
        }
    }

    /// Cached wrapper over `GET /products`, keyed by the parameter set.
    ///
    /// # Errors
    ///
    /// Propagates [`ClientError`] from the underlying request when the cache
    /// cannot answer.
    pub async fn products(
        &self,
        query: &ProductsQuery,
    ) -> Result<Vec<EnrichedProduct>, ClientError> {
        self.list_cache
            .get_or_fetch(&query.cache_key(), || self.client.list_products(query))
            .await
    }

    /// Cached wrapper over `GET /products/{id}`, keyed by id.
    ///
    /// # Errors
    ///
    /// Propagates [`ClientError`] from the underlying request when the cache
    /// cannot answer.
    pub async fn product(&self, id: u32) -> Result<Option<EnrichedProduct>, ClientError> {
        self.item_cache
            .get_or_fetch(&id.to_string(), || self.client.get_product(id))
            .await
    }
}
