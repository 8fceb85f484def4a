// src/view/derive.rs

//! Composed derivation of the displayed sequence.

use crate::models::{Offer, ViewParams};
use crate::view::filter::matches_filters;
use crate::view::search::matches_term;
use crate::view::sort::sort_offers;

/// Derive the displayed sequence from the base collection and the
/// current view parameters.
///
/// Search and filter apply as one conjunctive predicate chain, then the
/// sort pass reorders the survivors. Unlike the standalone passes, the
/// result of this function reflects every parameter at once, so a search
/// cannot be silently clobbered by a later filter recompute or vice
/// versa. The output is always a reordered subset of the base
/// collection; the input is never mutated.
pub fn derive_view(base: &[Offer], params: &ViewParams) -> Vec<Offer> {
    let needle = params.search_term.trim().to_lowercase();

    let mut view: Vec<Offer> = base
        .iter()
        .filter(|offer| matches_term(offer, &needle) && matches_filters(offer, params))
        .cloned()
        .collect();

    sort_offers(&mut view, params.sort_key);
    view
}
