//! Browse session: owns the UI state for one shopper and keeps the visible
//! page in sync with it.
//!
//! Every mutation funnels into one refresh routine, which re-evaluates
//! the pipeline and re-slices the page before control returns to the caller.
//! Page-number policy per mutation:
//!
//! - facet toggles, page-size changes, and search changes that alter the
//!   effective term go back to page 1;
//! - sort changes and catalog replacement keep the current page, clamped to
//!   the new bounds;
//! - explicit page moves are clamped into `[1, total_pages]`.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use shopfront_catalog::{
    Catalog, CatalogStore, Facet, FilterSelection, Price, SearchState, SortMode,
};
use shopfront_core::{DomainError, DomainResult};

use crate::config::BrowseConfig;
use crate::intent::Intent;
use crate::paginator::{Page, PageSize, PageState, paginate};
use crate::pipeline::{ResultSet, evaluate};

/// One checkbox in a facet list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetOption {
    pub facet: Facet,
    pub value: String,
    pub checked: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PagePolicy {
    /// Back to page 1.
    Reset,
    /// Keep the page number if it is still in range.
    Clamp,
}

#[derive(Debug, Clone)]
pub struct BrowseSession {
    config: BrowseConfig,
    store: CatalogStore,
    filters: FilterSelection,
    sort: SortMode,
    page_state: PageState,
    results: ResultSet,
    view: Page,
}

impl BrowseSession {
    /// Start a session with no filters, no search, relevant order, page 1.
    pub fn new(config: BrowseConfig, catalog: Arc<Catalog>) -> DomainResult<Self> {
        config.validate()?;
        let page_state = PageState::new(PageSize::new(config.default_page_size)?);
        let store = CatalogStore::new(catalog);
        let filters = FilterSelection::new();
        let sort = SortMode::default();
        let results = evaluate(store.catalog(), &filters, store.search(), sort);
        let view = paginate(&results, &page_state);

        tracing::info!(
            products = store.catalog().len(),
            page_size = config.default_page_size,
            "browse session started"
        );

        Ok(Self {
            config,
            store,
            filters,
            sort,
            page_state,
            results,
            view,
        })
    }

    pub fn config(&self) -> &BrowseConfig {
        &self.config
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    pub fn search(&self) -> &SearchState {
        self.store.search()
    }

    pub fn filters(&self) -> &FilterSelection {
        &self.filters
    }

    pub fn sort_mode(&self) -> SortMode {
        self.sort
    }

    pub fn page_state(&self) -> &PageState {
        &self.page_state
    }

    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    /// The page the presentation layer should currently show.
    pub fn view(&self) -> &Page {
        &self.view
    }

    /// Price rendered with the configured currency symbol.
    pub fn format_price(&self, price: Price) -> String {
        price.display(&self.config.currency)
    }

    /// Category then subcategory options, each flagged with its checked state.
    pub fn facets(&self) -> Vec<FacetOption> {
        let categories = self
            .config
            .categories
            .iter()
            .map(|v| (Facet::Category, v));
        let sub_categories = self
            .config
            .sub_categories
            .iter()
            .map(|v| (Facet::SubCategory, v));

        categories
            .chain(sub_categories)
            .map(|(facet, value)| FacetOption {
                facet,
                value: value.clone(),
                checked: self.filters.is_selected(facet, value),
            })
            .collect()
    }

    pub fn toggle_category(&mut self, value: impl Into<String>) -> &Page {
        self.filters.toggle_category(value);
        self.refresh(PagePolicy::Reset)
    }

    pub fn toggle_sub_category(&mut self, value: impl Into<String>) -> &Page {
        self.filters.toggle_sub_category(value);
        self.refresh(PagePolicy::Reset)
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) -> &Page {
        let policy = self.search_policy(|store| store.set_search_term(term));
        self.refresh(policy)
    }

    pub fn set_search_active(&mut self, active: bool) -> &Page {
        let policy = self.search_policy(|store| store.set_search_active(active));
        self.refresh(policy)
    }

    /// Navbar search icon: open or close the search bar.
    pub fn toggle_search(&mut self) -> &Page {
        let policy = self.search_policy(|store| {
            store.toggle_search();
        });
        self.refresh(policy)
    }

    /// Navigating away from the collection view closes the search bar.
    pub fn leave_collection(&mut self) -> &Page {
        self.set_search_active(false)
    }

    pub fn set_sort_mode(&mut self, mode: SortMode) -> &Page {
        self.sort = mode;
        self.refresh(PagePolicy::Clamp)
    }

    /// Jump to page `n`, clamped into `[1, total_pages]`.
    pub fn set_page(&mut self, n: usize) -> &Page {
        self.page_state.go_to(n, self.results.len());
        self.repaginate()
    }

    pub fn next_page(&mut self) -> &Page {
        self.set_page(self.page_state.current().saturating_add(1))
    }

    pub fn prev_page(&mut self) -> &Page {
        self.set_page(self.page_state.current().saturating_sub(1))
    }

    /// Change the page size. Sizes outside the configured set are rejected and
    /// leave the state untouched.
    pub fn set_page_size(&mut self, size: usize) -> DomainResult<&Page> {
        if !self.config.is_allowed_page_size(size) {
            tracing::warn!(
                size,
                allowed = ?self.config.allowed_page_sizes,
                "rejected page size"
            );
            return Err(DomainError::validation(format!(
                "page size {size} is not one of {:?}",
                self.config.allowed_page_sizes
            )));
        }
        self.page_state.set_size(PageSize::new(size)?);
        Ok(self.repaginate())
    }

    /// Swap in a new product collection from the data source.
    pub fn replace_catalog(&mut self, catalog: Arc<Catalog>) -> &Page {
        self.store.replace_catalog(catalog);
        self.refresh(PagePolicy::Clamp)
    }

    pub fn apply(&mut self, intent: Intent) -> DomainResult<&Page> {
        tracing::debug!(?intent, "applying intent");
        let page = match intent {
            Intent::ToggleCategory(value) => self.toggle_category(value),
            Intent::ToggleSubCategory(value) => self.toggle_sub_category(value),
            Intent::SetSearchTerm(term) => self.set_search_term(term),
            Intent::SetSearchActive(active) => self.set_search_active(active),
            Intent::ToggleSearch => self.toggle_search(),
            Intent::LeaveCollection => self.leave_collection(),
            Intent::SetSortMode(mode) => self.set_sort_mode(mode),
            Intent::SetPage(n) => self.set_page(n),
            Intent::NextPage => self.next_page(),
            Intent::PrevPage => self.prev_page(),
            Intent::SetPageSize(size) => return self.set_page_size(size),
        };
        Ok(page)
    }

    /// Run a search mutation; reset the page only if the effective term changed.
    fn search_policy(&mut self, mutate: impl FnOnce(&mut CatalogStore)) -> PagePolicy {
        let before = self.store.search().effective_term().map(str::to_owned);
        mutate(&mut self.store);
        if self.store.search().effective_term() == before.as_deref() {
            PagePolicy::Clamp
        } else {
            PagePolicy::Reset
        }
    }

    fn refresh(&mut self, policy: PagePolicy) -> &Page {
        self.results = evaluate(
            self.store.catalog(),
            &self.filters,
            self.store.search(),
            self.sort,
        );
        if policy == PagePolicy::Reset {
            self.page_state.reset();
        }
        self.repaginate()
    }

    fn repaginate(&mut self) -> &Page {
        if self.page_state.clamp(self.results.len()) {
            tracing::debug!(page = self.page_state.current(), "page clamped to result bounds");
        }
        self.view = paginate(&self.results, &self.page_state);
        tracing::debug!(
            results = self.view.total_items,
            page = self.view.current_page,
            total_pages = self.view.total_pages,
            page_size = self.view.page_size,
            "view recomputed"
        );
        &self.view
    }
}
