//! Attribute filtering over the category and subcategory facets.
//!
//! Within one facet the selected values are OR-ed; across facets the results
//! are AND-ed. A facet with nothing selected places no restriction.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::product::Product;

/// The two filterable product attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Facet {
    Category,
    SubCategory,
}

impl Facet {
    pub const ALL: [Facet; 2] = [Facet::Category, Facet::SubCategory];

    /// The product's value for this facet.
    pub fn value_of(self, product: &Product) -> &str {
        match self {
            Facet::Category => product.category(),
            Facet::SubCategory => product.sub_category(),
        }
    }
}

/// Active category and subcategory selections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    categories: BTreeSet<String>,
    sub_categories: BTreeSet<String>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn categories(&self) -> &BTreeSet<String> {
        &self.categories
    }

    pub fn sub_categories(&self) -> &BTreeSet<String> {
        &self.sub_categories
    }

    pub fn selected(&self, facet: Facet) -> &BTreeSet<String> {
        match facet {
            Facet::Category => &self.categories,
            Facet::SubCategory => &self.sub_categories,
        }
    }

    pub fn is_selected(&self, facet: Facet, value: &str) -> bool {
        self.selected(facet).contains(value)
    }

    /// Add `value` if absent, remove it if present.
    ///
    /// Returns whether the value is selected after the toggle.
    pub fn toggle(&mut self, facet: Facet, value: impl Into<String>) -> bool {
        let set = match facet {
            Facet::Category => &mut self.categories,
            Facet::SubCategory => &mut self.sub_categories,
        };
        let value = value.into();
        if set.remove(&value) {
            false
        } else {
            set.insert(value);
            true
        }
    }

    pub fn toggle_category(&mut self, value: impl Into<String>) -> bool {
        self.toggle(Facet::Category, value)
    }

    pub fn toggle_sub_category(&mut self, value: impl Into<String>) -> bool {
        self.toggle(Facet::SubCategory, value)
    }

    /// True when neither facet restricts anything.
    pub fn is_unrestricted(&self) -> bool {
        self.categories.is_empty() && self.sub_categories.is_empty()
    }

    /// Check whether `product` passes both facets.
    pub fn matches(&self, product: &Product) -> bool {
        Facet::ALL.iter().all(|&facet| {
            let selected = self.selected(facet);
            selected.is_empty() || selected.contains(facet.value_of(product))
        })
    }
}
