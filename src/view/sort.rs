// src/view/sort.rs

//! Sorting of the displayed sequence.

use std::cmp::Ordering;

use crate::models::{Offer, SortKey};

/// Sort pass producing a reordered copy of the base collection.
///
/// Recomputed whenever the base collection or the sort key changes.
/// All three orders are total; ties keep the original collection order
/// (the underlying sorts are stable).
pub fn recompute_sorted(base: &[Offer], key: SortKey) -> Vec<Offer> {
    let mut sorted = base.to_vec();
    sort_offers(&mut sorted, key);
    sorted
}

/// Reorder offers in place by the given axis.
///
/// Course names compare case-insensitively via a lowercase fold; prices
/// and ratings compare numerically with non-finite values treated as
/// equal rather than panicking.
pub(crate) fn sort_offers(offers: &mut [Offer], key: SortKey) {
    match key {
        SortKey::CourseName => {
            offers.sort_by_cached_key(|o| o.course_name.to_lowercase());
        }
        SortKey::Price => {
            offers.sort_by(|a, b| {
                a.offered_price
                    .partial_cmp(&b.offered_price)
                    .unwrap_or(Ordering::Equal)
            });
        }
        SortKey::Rating => {
            offers.sort_by(|a, b| {
                b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal)
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offer(id: &str, course_name: &str, offered_price: f64, rating: f64) -> Offer {
        Offer {
            id: id.to_string(),
            course_name: course_name.to_string(),
            rating,
            full_price: offered_price * 2.0,
            offered_price,
            discount: None,
            kind: "ead".to_string(),
            level: "bacharelado".to_string(),
            ies_logo: String::new(),
            ies_name: String::new(),
        }
    }

    fn base() -> Vec<Offer> {
        vec![
            offer("1", "medicina", 800.0, 4.9),
            offer("2", "Engenharia", 500.0, 4.5),
            offer("3", "administração", 300.0, 4.5),
            offer("4", "Direito", 500.0, 4.7),
        ]
    }

    #[test]
    fn test_by_name_is_case_insensitive_ascending() {
        let sorted = recompute_sorted(&base(), SortKey::CourseName);
        let names: Vec<_> = sorted.iter().map(|o| o.course_name.as_str()).collect();
        assert_eq!(
            names,
            vec!["administração", "Direito", "Engenharia", "medicina"]
        );
    }

    #[test]
    fn test_by_name_is_a_permutation() {
        let base = base();
        let sorted = recompute_sorted(&base, SortKey::CourseName);
        assert_eq!(sorted.len(), base.len());
        for offer in &base {
            assert!(sorted.contains(offer));
        }
    }

    #[test]
    fn test_by_price_ascending() {
        let sorted = recompute_sorted(&base(), SortKey::Price);
        let prices: Vec<_> = sorted.iter().map(|o| o.offered_price).collect();
        assert_eq!(prices, vec![300.0, 500.0, 500.0, 800.0]);
    }

    #[test]
    fn test_by_price_ties_keep_original_order() {
        let sorted = recompute_sorted(&base(), SortKey::Price);
        // Offers 2 and 4 share a price; 2 precedes 4 in the base collection
        let ids: Vec<_> = sorted.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "2", "4", "1"]);
    }

    #[test]
    fn test_by_rating_descending_and_stable() {
        let sorted = recompute_sorted(&base(), SortKey::Rating);
        let ratings: Vec<_> = sorted.iter().map(|o| o.rating).collect();
        assert_eq!(ratings, vec![4.9, 4.7, 4.5, 4.5]);

        // Offers 2 and 3 share a rating; 2 precedes 3 in the base collection
        let ids: Vec<_> = sorted.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "4", "2", "3"]);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let base = base();
        let _ = recompute_sorted(&base, SortKey::Rating);
        assert_eq!(base[0].id, "1");
    }
}
