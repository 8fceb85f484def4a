// src/view/search.rs

//! Free-text search over course names.

use crate::models::Offer;

/// One-shot search pass.
///
/// A blank (or whitespace-only) term returns the full base collection.
/// Otherwise an offer is kept when its course name contains the term,
/// compared case-insensitively. The pass runs only when explicitly
/// invoked; it is not recomputed on every keystroke.
pub fn apply_search(base: &[Offer], term: &str) -> Vec<Offer> {
    let needle = term.trim().to_lowercase();
    base.iter()
        .filter(|offer| matches_term(offer, &needle))
        .cloned()
        .collect()
}

/// Case-insensitive substring match against an already-lowercased needle.
/// An empty needle matches everything.
pub(crate) fn matches_term(offer: &Offer, needle: &str) -> bool {
    needle.is_empty() || offer.course_name.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offer(id: &str, course_name: &str) -> Offer {
        Offer {
            id: id.to_string(),
            course_name: course_name.to_string(),
            rating: 4.0,
            full_price: 1000.0,
            offered_price: 500.0,
            discount: None,
            kind: "ead".to_string(),
            level: "bacharelado".to_string(),
            ies_logo: String::new(),
            ies_name: String::new(),
        }
    }

    fn base() -> Vec<Offer> {
        vec![
            offer("1", "Engenharia"),
            offer("2", "Medicina"),
            offer("3", "Biomedicina"),
        ]
    }

    #[test]
    fn test_blank_term_returns_everything() {
        let base = base();
        assert_eq!(apply_search(&base, ""), base);
        assert_eq!(apply_search(&base, "   "), base);
    }

    #[test]
    fn test_case_insensitive_substring() {
        let base = base();
        let result = apply_search(&base, "MED");
        let names: Vec<_> = result.iter().map(|o| o.course_name.as_str()).collect();
        assert_eq!(names, vec!["Medicina", "Biomedicina"]);
    }

    #[test]
    fn test_no_match_is_a_valid_empty_sequence() {
        assert!(apply_search(&base(), "direito").is_empty());
    }

    #[test]
    fn test_idempotent() {
        let base = base();
        let once = apply_search(&base, "med");
        let twice = apply_search(&once, "med");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_accented_names_match_exact_substring() {
        let base = vec![offer("1", "Ciências Contábeis")];
        assert_eq!(apply_search(&base, "ciências").len(), 1);
    }
}
