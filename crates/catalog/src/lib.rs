//! Catalog domain module.
//!
//! Product records, the read-only catalog store, and the per-product predicates
//! and comparators the browsing pipeline is assembled from. Everything here is
//! deterministic domain logic (no IO, no rendering).

pub mod filter;
pub mod product;
pub mod search;
pub mod sort;
pub mod store;

pub use filter::{Facet, FilterSelection};
pub use product::{ImageRef, NewProduct, Price, Product, ProductId, ProductSummary};
pub use search::{SearchState, TextMatcher};
pub use sort::SortMode;
pub use store::{Catalog, CatalogStore};
