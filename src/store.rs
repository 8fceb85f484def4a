// src/store.rs

//! Dataset store for the base offer collection.
//!
//! The store is populated at most once per successful load and is
//! read-only afterwards: no entity is ever removed or mutated. View
//! computations always derive fresh sequences from the stored slice.

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::models::Offer;
use crate::services::OfferSource;

/// Holds the immutable base collection of offers.
#[derive(Debug, Default)]
pub struct OfferStore {
    offers: Vec<Offer>,
    loaded_at: Option<DateTime<Utc>>,
}

impl OfferStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the catalog from the source and store it.
    ///
    /// On success the full collection replaces the store contents and a
    /// borrow of it is returned. On failure the store is left untouched
    /// (empty, if never loaded) and the error propagates to the caller.
    /// Re-invocation re-fetches; there is no caching or retry here.
    pub async fn load(&mut self, source: &dyn OfferSource) -> Result<&[Offer]> {
        let offers = source.fetch_offers().await?;
        self.offers = offers;
        self.loaded_at = Some(Utc::now());
        Ok(&self.offers)
    }

    /// The currently held collection; empty before a successful load.
    pub fn get(&self) -> &[Offer] {
        &self.offers
    }

    /// Whether a load has completed successfully.
    pub fn is_loaded(&self) -> bool {
        self.loaded_at.is_some()
    }

    /// Timestamp of the last successful load.
    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    /// Number of offers held.
    pub fn len(&self) -> usize {
        self.offers.len()
    }

    /// Whether the store holds no offers.
    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::error::AppError;

    struct StaticSource(Vec<Offer>);

    #[async_trait]
    impl OfferSource for StaticSource {
        async fn fetch_offers(&self) -> Result<Vec<Offer>> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl OfferSource for FailingSource {
        async fn fetch_offers(&self) -> Result<Vec<Offer>> {
            Err(AppError::load("http://localhost:3000/offers", "unexpected status 503"))
        }
    }

    fn sample_offer(id: &str) -> Offer {
        Offer {
            id: id.to_string(),
            course_name: "Engenharia".to_string(),
            rating: 4.5,
            full_price: 1000.0,
            offered_price: 500.0,
            discount: None,
            kind: "ead".to_string(),
            level: "bacharelado".to_string(),
            ies_logo: String::new(),
            ies_name: "Universidade Exemplo".to_string(),
        }
    }

    #[tokio::test]
    async fn test_load_populates_store() {
        let mut store = OfferStore::new();
        assert!(store.get().is_empty());
        assert!(!store.is_loaded());

        let source = StaticSource(vec![sample_offer("1"), sample_offer("2")]);
        let loaded = store.load(&source).await.unwrap();
        assert_eq!(loaded.len(), 2);

        assert!(store.is_loaded());
        assert!(store.loaded_at().is_some());
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn test_failed_load_leaves_store_empty() {
        let mut store = OfferStore::new();
        let result = store.load(&FailingSource).await;

        assert!(matches!(result, Err(AppError::Load { .. })));
        assert!(store.is_empty());
        assert!(!store.is_loaded());
    }

    #[tokio::test]
    async fn test_reload_replaces_collection() {
        let mut store = OfferStore::new();
        store
            .load(&StaticSource(vec![sample_offer("1")]))
            .await
            .unwrap();
        store
            .load(&StaticSource(vec![sample_offer("2"), sample_offer("3")]))
            .await
            .unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.get()[0].id, "2");
    }
}
