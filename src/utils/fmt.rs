// src/utils/fmt.rs

//! Display formatting helpers for the presentation layer.
//!
//! Currency and number rendering is owned by the presentation side; the
//! view engine itself never formats values.

use unicode_segmentation::UnicodeSegmentation;

/// Format a price as Brazilian currency ("R$ 1.234,56").
///
/// Grouping uses '.' and the decimal separator ',' per pt-BR convention.
pub fn format_brl(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}R$ {grouped},{frac:02}")
}

/// Render a rating as a five-star row ("★★★★½" style).
///
/// Full stars for the integer part, a half star when the fraction is at
/// least 0.5, empty stars for the remainder.
pub fn rating_stars(rating: f64) -> String {
    let rating = rating.clamp(0.0, 5.0);
    let full = rating.floor() as usize;
    let half = rating.fract() >= 0.5;
    let empty = 5 - full - usize::from(half);

    let mut stars = "★".repeat(full);
    if half {
        stars.push('½');
    }
    stars.push_str(&"☆".repeat(empty));
    stars
}

/// Truncate a string to at most `max` grapheme clusters, appending an
/// ellipsis when anything was cut.
pub fn truncate_graphemes(text: &str, max: usize) -> String {
    let graphemes: Vec<&str> = text.graphemes(true).collect();
    if graphemes.len() <= max {
        return text.to_string();
    }
    let mut truncated: String = graphemes[..max.saturating_sub(1)].concat();
    truncated.push('…');
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_brl_grouping() {
        assert_eq!(format_brl(0.0), "R$ 0,00");
        assert_eq!(format_brl(720.0), "R$ 720,00");
        assert_eq!(format_brl(1234.56), "R$ 1.234,56");
        assert_eq!(format_brl(1_000_000.0), "R$ 1.000.000,00");
    }

    #[test]
    fn test_format_brl_rounds_cents() {
        assert_eq!(format_brl(899.999), "R$ 900,00");
    }

    #[test]
    fn test_rating_stars_buckets() {
        assert_eq!(rating_stars(5.0), "★★★★★");
        assert_eq!(rating_stars(4.5), "★★★★½");
        assert_eq!(rating_stars(4.4), "★★★★☆");
        assert_eq!(rating_stars(0.0), "☆☆☆☆☆");
    }

    #[test]
    fn test_truncate_graphemes() {
        assert_eq!(truncate_graphemes("Engenharia", 20), "Engenharia");
        assert_eq!(truncate_graphemes("Administração", 6), "Admin…");
        // Combining marks count as one grapheme
        assert_eq!(truncate_graphemes("Ciências Contábeis", 8), "Ciência…");
    }
}
