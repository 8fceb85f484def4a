//! Offer data structure.

use serde::{Deserialize, Serialize};

/// A course offer fetched from the catalog endpoint.
///
/// Field names follow the wire format of the remote source
/// (`courseName`, `fullPrice`, ...), hence the camelCase rename.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    /// Unique opaque identifier, stable display identity
    pub id: String,

    /// Human-readable course name
    pub course_name: String,

    /// Rating in the range [0, 5]
    pub rating: f64,

    /// Undiscounted monthly price
    pub full_price: f64,

    /// Price actually offered
    pub offered_price: f64,

    /// Display discount string as provided by the source.
    /// Absent means "not provided", which is distinct from "0%".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<String>,

    /// Course modality tag (e.g. "presencial", "ead")
    pub kind: String,

    /// Academic level tag (e.g. "bacharelado", "tecnologo", "licenciatura")
    pub level: String,

    /// Institution logo URL
    pub ies_logo: String,

    /// Institution display name
    pub ies_name: String,
}

impl Offer {
    /// Discount percentage derived from the two prices, rounded.
    ///
    /// Returns 0 when either price is zero. An offered price above the
    /// full price yields a negative percentage rather than an error.
    pub fn discount_percent(&self) -> i32 {
        if self.full_price == 0.0 || self.offered_price == 0.0 {
            return 0;
        }
        (((self.full_price - self.offered_price) / self.full_price) * 100.0).round() as i32
    }

    /// Format offer for display using a template.
    ///
    /// Supported placeholders:
    /// - `{id}`, `{course}`, `{rating}`, `{full_price}`, `{offered_price}`
    /// - `{discount}`, `{kind}`, `{level}`, `{ies}`
    pub fn format(&self, template: &str) -> String {
        template
            .replace("{id}", &self.id)
            .replace("{course}", &self.course_name)
            .replace("{rating}", &format!("{:.1}", self.rating))
            .replace("{full_price}", &format!("{:.2}", self.full_price))
            .replace("{offered_price}", &format!("{:.2}", self.offered_price))
            .replace("{discount}", &format!("{}%", self.discount_percent()))
            .replace("{kind}", &self.kind)
            .replace("{level}", &self.level)
            .replace("{ies}", &self.ies_name)
    }
}
