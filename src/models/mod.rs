// src/models/mod.rs

//! Domain models for the catalog application.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod config;
mod offer;
mod view;

// Re-export all public types
pub use config::{ApiConfig, Config, Dimension, MessagesConfig, ViewConfig};
pub use offer::Offer;
pub use view::{DEFAULT_MAX_PRICE, SortKey, ViewParams};
