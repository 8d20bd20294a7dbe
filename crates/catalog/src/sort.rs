//! Sort order selection.

use core::cmp::Ordering;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use shopfront_core::DomainError;

use crate::product::Product;

/// User-selectable listing order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortMode {
    /// Catalog order, untouched.
    #[default]
    #[serde(rename = "relevant")]
    Relevant,
    #[serde(rename = "low-high")]
    PriceLowHigh,
    #[serde(rename = "high-low")]
    PriceHighLow,
}

impl SortMode {
    pub const ALL: [SortMode; 3] = [
        SortMode::Relevant,
        SortMode::PriceLowHigh,
        SortMode::PriceHighLow,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::Relevant => "relevant",
            SortMode::PriceLowHigh => "low-high",
            SortMode::PriceHighLow => "high-low",
        }
    }

    /// Whether this mode reorders anything at all.
    pub fn reorders(self) -> bool {
        self != SortMode::Relevant
    }

    /// Compare two products under this mode. `Relevant` treats everything as
    /// equal, so a stable sort leaves input order alone.
    pub fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortMode::Relevant => Ordering::Equal,
            SortMode::PriceLowHigh => a.price().cmp(&b.price()),
            SortMode::PriceHighLow => b.price().cmp(&a.price()),
        }
    }

    /// Stable in-place sort of a product sequence.
    pub fn sort(self, products: &mut [&Product]) {
        if self.reorders() {
            products.sort_by(|a, b| self.compare(a, b));
        }
    }
}

impl core::fmt::Display for SortMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s.trim())
            .ok_or_else(|| DomainError::validation(format!("unknown sort mode: {s:?}")))
    }
}
