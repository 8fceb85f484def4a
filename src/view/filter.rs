// src/view/filter.rs

//! Level, kind, and price filtering.

use crate::models::{Offer, ViewParams};

/// Filter pass over the base collection.
///
/// Three conjunctive predicates: level membership (skipped when no level
/// is selected), kind membership (same empty-means-all rule), and the
/// price ceiling, which always applies since `max_price` has a default.
/// Recomputed whenever the base collection or a filter parameter changes.
pub fn recompute_filtered(base: &[Offer], params: &ViewParams) -> Vec<Offer> {
    base.iter()
        .filter(|offer| matches_filters(offer, params))
        .cloned()
        .collect()
}

/// Conjunction of the three filter predicates for a single offer.
pub(crate) fn matches_filters(offer: &Offer, params: &ViewParams) -> bool {
    if !params.selected_levels.is_empty() && !params.selected_levels.contains(&offer.level) {
        return false;
    }
    if !params.selected_kinds.is_empty() && !params.selected_kinds.contains(&offer.kind) {
        return false;
    }
    offer.offered_price <= params.max_price
}
