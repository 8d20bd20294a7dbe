//! Catalog store: the canonical product collection plus the global search inputs.

use std::collections::HashSet;
use std::sync::Arc;

use shopfront_core::{DomainError, DomainResult};

use crate::product::{Product, ProductId};
use crate::search::SearchState;

/// Validated, ordered, read-only product collection.
///
/// Order is the order the data source supplied, which is what "relevant"
/// sorting preserves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, rejecting invalid records and duplicate ids.
    pub fn new(products: Vec<Product>) -> DomainResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            product.validate()?;
            if !seen.insert(product.id_typed()) {
                return Err(DomainError::conflict(format!(
                    "duplicate product id: {}",
                    product.id_typed()
                )));
            }
        }
        Ok(Self { products })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a JSON array of product records.
    pub fn from_json_str(json: &str) -> DomainResult<Self> {
        let products: Vec<Product> = serde_json::from_str(json)
            .map_err(|e| DomainError::validation(format!("malformed catalog: {e}")))?;
        let catalog = Self::new(products)?;
        tracing::info!(products = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id_typed() == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }
}

/// Shared catalog plus the global search inputs driven by the navbar.
///
/// The product collection sits behind an `Arc` so any number of sessions can
/// read it; nothing in the browsing core ever writes to it.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    catalog: Arc<Catalog>,
    search: SearchState,
}

impl CatalogStore {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            search: SearchState::default(),
        }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    /// Swap in a new product collection from the data source.
    pub fn replace_catalog(&mut self, catalog: Arc<Catalog>) {
        self.catalog = catalog;
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search.set_term(term);
    }

    pub fn set_search_active(&mut self, active: bool) {
        self.search.set_active(active);
    }

    /// Flip the search bar open/closed. Returns the new active flag.
    pub fn toggle_search(&mut self) -> bool {
        let active = !self.search.is_active();
        self.search.set_active(active);
        active
    }
}
