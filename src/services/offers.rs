// src/services/offers.rs

//! Offer catalog fetch service.
//!
//! Fetches the full offer collection from the configured JSON endpoint.
//! The `OfferSource` trait is the seam between the dataset store and the
//! network; tests substitute in-memory implementations.

use async_trait::async_trait;

use crate::error::{AppError, Result};
use crate::models::{ApiConfig, Offer};
use crate::utils::http;

/// Source of the base offer collection.
///
/// A single read operation returning the full collection. Retry policy,
/// if any, belongs to the implementation; callers perform one attempt
/// per load.
#[async_trait]
pub trait OfferSource: Send + Sync {
    /// Fetch the complete offer collection.
    async fn fetch_offers(&self) -> Result<Vec<Offer>>;
}

/// HTTP-backed offer source.
pub struct HttpOfferSource {
    config: ApiConfig,
    client: reqwest::Client,
}

impl HttpOfferSource {
    /// Create a new source with a client built from the given configuration.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = http::create_client(config)?;
        Ok(Self {
            config: config.clone(),
            client,
        })
    }
}

#[async_trait]
impl OfferSource for HttpOfferSource {
    async fn fetch_offers(&self) -> Result<Vec<Offer>> {
        let response = self.client.get(&self.config.endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::load(
                &self.config.endpoint,
                format!("unexpected status {status}"),
            ));
        }

        let offers: Vec<Offer> = response.json().await?;
        log::info!(
            "Fetched {} offer(s) from {}",
            offers.len(),
            self.config.endpoint
        );
        Ok(offers)
    }
}
