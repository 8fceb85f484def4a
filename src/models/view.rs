//! User-controlled view parameters.
//!
//! A `ViewParams` value is owned by the presentation layer and passed by
//! reference into the view engine's pure functions. It is the only mutable
//! state in a session; the base collection itself is never touched.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Price ceiling applied when the user has not moved the range control.
pub const DEFAULT_MAX_PRICE: f64 = 900.0;

/// Sort axis for the displayed sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Ascending, case-insensitive course name ("Cursos de A-Z")
    #[default]
    CourseName,

    /// Ascending offered price ("Menor preço")
    Price,

    /// Descending rating ("Melhor avaliados")
    Rating,
}

impl SortKey {
    /// Wire/CLI name of this sort axis.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::CourseName => "course-name",
            SortKey::Price => "price",
            SortKey::Rating => "rating",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "course-name" => Ok(SortKey::CourseName),
            "price" => Ok(SortKey::Price),
            "rating" => Ok(SortKey::Rating),
            other => Err(format!(
                "unknown sort key '{other}' (expected course-name, price, or rating)"
            )),
        }
    }
}

/// The complete set of user-controlled inputs driving the displayed sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewParams {
    /// Free-text search over course names
    #[serde(default)]
    pub search_term: String,

    /// Selected level tags; empty means no level restriction
    #[serde(default)]
    pub selected_levels: Vec<String>,

    /// Selected kind tags; empty means no kind restriction
    #[serde(default)]
    pub selected_kinds: Vec<String>,

    /// Upper bound on the offered price; always applied
    #[serde(default = "default_max_price")]
    pub max_price: f64,

    /// Current sort axis
    #[serde(default)]
    pub sort_key: SortKey,
}

fn default_max_price() -> f64 {
    DEFAULT_MAX_PRICE
}

impl Default for ViewParams {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            selected_levels: Vec::new(),
            selected_kinds: Vec::new(),
            max_price: DEFAULT_MAX_PRICE,
            sort_key: SortKey::default(),
        }
    }
}

impl ViewParams {
    /// Toggle a level selection: add the tag if absent, remove it if present.
    pub fn toggle_level(&mut self, level: &str) {
        Self::toggle(&mut self.selected_levels, level);
    }

    /// Toggle a kind selection: add the tag if absent, remove it if present.
    pub fn toggle_kind(&mut self, kind: &str) {
        Self::toggle(&mut self.selected_kinds, kind);
    }

    fn toggle(selected: &mut Vec<String>, tag: &str) {
        if let Some(pos) = selected.iter().position(|t| t == tag) {
            selected.remove(pos);
        } else {
            selected.push(tag.to_string());
        }
    }
}
