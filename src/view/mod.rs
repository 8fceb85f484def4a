//! View engine: derivation of the displayed sequence.
//!
//! Pure functions from the base collection and the current view
//! parameters to a freshly computed sequence. Nothing here mutates an
//! offer or the base collection; every call re-derives from scratch.
//!
//! - `apply_search`: one-shot free-text pass over course names
//! - `recompute_filtered`: level/kind/price predicate pass
//! - `recompute_sorted`: total reordering by the selected axis
//! - `derive_view`: the composed pipeline the presentation layer displays
//!
//! Callers invoke these after the catalog load completes, after any
//! parameter change, and on explicit search submission.

pub mod derive;
pub mod filter;
pub mod search;
pub mod sort;

pub use derive::derive_view;
pub use filter::recompute_filtered;
pub use search::apply_search;
pub use sort::recompute_sorted;
