//! Free-text search over product name and description.

use serde::{Deserialize, Serialize};

use crate::product::Product;

/// Search term plus the "search bar is open" flag.
///
/// The term is kept while the bar is closed so reopening it restores the
/// previous query, but it only filters while `active` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchState {
    term: String,
    active: bool,
}

impl SearchState {
    pub fn new(term: impl Into<String>, active: bool) -> Self {
        Self {
            term: term.into(),
            active,
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_term(&mut self, term: impl Into<String>) {
        self.term = term.into();
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// The term that actually restricts results, if any.
    pub fn effective_term(&self) -> Option<&str> {
        (self.active && !self.term.is_empty()).then_some(self.term.as_str())
    }

    pub fn matcher(&self) -> TextMatcher {
        TextMatcher::new(self.effective_term())
    }
}

/// Case-insensitive containment test with the needle folded once up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextMatcher {
    needle: Option<String>,
}

impl TextMatcher {
    pub fn new(term: Option<&str>) -> Self {
        Self {
            needle: term.filter(|t| !t.is_empty()).map(str::to_lowercase),
        }
    }

    /// A matcher that lets everything through.
    pub fn any() -> Self {
        Self { needle: None }
    }

    pub fn matches(&self, product: &Product) -> bool {
        let Some(needle) = &self.needle else {
            return true;
        };
        product.name().to_lowercase().contains(needle.as_str())
            || product.description().to_lowercase().contains(needle.as_str())
    }
}
