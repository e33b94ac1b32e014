use std::path::Path;

use thiserror::Error;

use crate::{pricing, EnrichedProduct, ProductRecord};

/// Errors raised while loading the catalogue file. These propagate to the
/// HTTP boundary as a 500; nothing here is recovered locally.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalogue file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalogue file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads the full product list from the JSON catalogue file.
///
/// The file is re-read on every call; there is no caching layer, so edits
/// to the file are visible on the next request.
///
/// # Errors
///
/// Returns [`CatalogError::Io`] if the file cannot be read and
/// [`CatalogError::Parse`] if it is not a JSON array of product records.
pub fn load_catalog(path: &Path) -> Result<Vec<ProductRecord>, CatalogError> {
    let content = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| CatalogError::Parse {
        path: path.display().to_string(),
        source: e,
    })
}

/// Attaches derived fields to every record: a 1-based positional `id`, the
/// computed price, and the quote snapshot, the latter two rounded to cents.
///
/// One quote is shared across the whole list; enrichment is recomputed from
/// scratch on every retrieval call.
#[must_use]
pub fn enrich(records: Vec<ProductRecord>, gold_price_per_gram: f64) -> Vec<EnrichedProduct> {
    records
        .into_iter()
        .enumerate()
        .map(|(idx, record)| {
            let price = pricing::round2(pricing::price(
                record.popularity_score,
                record.weight,
                gold_price_per_gram,
            ));
            EnrichedProduct {
                record,
                id: u32::try_from(idx + 1).unwrap_or(u32::MAX),
                price,
                gold_price: pricing::round2(gold_price_per_gram),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;

    use super::*;

    struct TempCatalog {
        path: PathBuf,
    }

    impl TempCatalog {
        fn write(content: &str) -> Self {
            let path =
                std::env::temp_dir().join(format!("karat-catalog-{}.json", uuid::Uuid::new_v4()));
            let mut file = std::fs::File::create(&path).expect("create temp catalogue");
            file.write_all(content.as_bytes()).expect("write catalogue");
            Self { path }
        }
    }

    impl Drop for TempCatalog {
        fn drop(&mut self) {
            let _ = std::fs::remove_file(&self.path);
        }
    }

    const THREE_RECORDS: &str = r#"[
        { "name": "Ring A", "popularityScore": 0.2, "weight": 2 },
        { "name": "Ring B", "popularityScore": 0.8, "weight": 3 },
        { "name": "Ring C", "popularityScore": 0.5, "weight": 1 }
    ]"#;

    #[test]
    fn load_catalog_parses_records_in_file_order() {
        let catalog = TempCatalog::write(THREE_RECORDS);
        let records = load_catalog(&catalog.path).expect("load");
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Ring A", "Ring B", "Ring C"]);
    }

    #[test]
    fn load_catalog_missing_file_is_io_error() {
        let result = load_catalog(Path::new("/nonexistent/karat/products.json"));
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }

    #[test]
    fn load_catalog_malformed_json_is_parse_error() {
        let catalog = TempCatalog::write("{ not json ]");
        let result = load_catalog(&catalog.path);
        assert!(matches!(result, Err(CatalogError::Parse { .. })));
    }

    #[test]
    fn enrich_assigns_ids_one_through_n_in_load_order() {
        let catalog = TempCatalog::write(THREE_RECORDS);
        let records = load_catalog(&catalog.path).expect("load");
        let enriched = enrich(records, 60.0);
        let ids: Vec<u32> = enriched.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn enrich_computes_reference_prices() {
        let catalog = TempCatalog::write(THREE_RECORDS);
        let records = load_catalog(&catalog.path).expect("load");
        let enriched = enrich(records, 60.0);
        let prices: Vec<f64> = enriched.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![144.0, 324.0, 90.0]);
        assert!(enriched.iter().all(|p| (p.gold_price - 60.0).abs() < 1e-9));
    }

    #[test]
    fn enrich_rounds_price_and_quote_to_cents() {
        let records = vec![ProductRecord {
            name: "Ring".to_string(),
            popularity_score: 0.41,
            weight: 2.3,
            extra: serde_json::Map::new(),
        }];
        let enriched = enrich(records, 87.654_3);
        assert!((enriched[0].price - 284.26).abs() < 1e-9);
        assert!((enriched[0].gold_price - 87.65).abs() < 1e-9);
    }

    #[test]
    fn enrich_empty_catalogue_is_empty() {
        assert!(enrich(Vec::new(), 60.0).is_empty());
    }
}
