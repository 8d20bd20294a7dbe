//! `shopfront-browse` — the catalog browsing pipeline.
//!
//! Filter -> search -> sort -> paginate over an in-memory catalog, plus the
//! [`BrowseSession`] controller that keeps the visible page consistent as the
//! user's inputs change. Every mutation recomputes synchronously before it
//! returns, so the view read afterwards always reflects all prior mutations.

pub mod config;
pub mod intent;
pub mod paginator;
pub mod pipeline;
pub mod session;

pub use config::BrowseConfig;
pub use intent::Intent;
pub use paginator::{Page, PageSize, PageState, paginate, total_pages};
pub use pipeline::{ResultSet, evaluate};
pub use session::{BrowseSession, FacetOption};
