// src/services/mod.rs

//! Service layer for the catalog application.

mod offers;

pub use offers::{HttpOfferSource, OfferSource};
