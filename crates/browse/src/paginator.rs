//! Fixed-size windowing over a [`ResultSet`].

use core::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use shopfront_catalog::ProductSummary;
use shopfront_core::{DomainError, DomainResult, ValueObject};

use crate::pipeline::ResultSet;

/// Positive number of items per page.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct PageSize(usize);

impl ValueObject for PageSize {}

impl PageSize {
    pub fn new(size: usize) -> DomainResult<Self> {
        if size == 0 {
            return Err(DomainError::validation("page size must be positive"));
        }
        Ok(Self(size))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<usize> for PageSize {
    type Error = DomainError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PageSize> for usize {
    fn from(value: PageSize) -> Self {
        value.0
    }
}

/// `max(1, ceil(count / size))`.
pub fn total_pages(count: usize, size: PageSize) -> usize {
    count.div_ceil(size.get()).max(1)
}

/// Current page (1-based) and page size.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    current: usize,
    size: PageSize,
}

impl PageState {
    pub fn new(size: PageSize) -> Self {
        Self { current: 1, size }
    }

    /// Raw state, not yet clamped against any result count.
    pub fn at(current: usize, size: PageSize) -> Self {
        Self { current, size }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn size(&self) -> PageSize {
        self.size
    }

    pub fn reset(&mut self) {
        self.current = 1;
    }

    /// Change the size. Always lands back on page 1.
    pub fn set_size(&mut self, size: PageSize) {
        self.size = size;
        self.current = 1;
    }

    /// Move to page `n`, clamped into `[1, total_pages(count)]`.
    pub fn go_to(&mut self, n: usize, count: usize) {
        self.current = n.clamp(1, total_pages(count, self.size));
    }

    /// Re-establish `1 <= current <= total_pages(count)`. Returns whether the page moved.
    pub fn clamp(&mut self, count: usize) -> bool {
        let before = self.current;
        self.go_to(before, count);
        self.current != before
    }

    /// Half-open index range of this page, before clamping to any result length.
    fn bounds(&self) -> (usize, usize) {
        let size = self.size.get();
        let start = self.current.saturating_sub(1).saturating_mul(size);
        (start, start.saturating_add(size))
    }
}

/// One page of results, ready for a presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub items: Vec<ProductSummary>,
    pub current_page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub has_prev: bool,
    pub has_next: bool,
    /// Pagination controls only make sense with more than one page.
    pub show_controls: bool,
}

impl Page {
    /// Page numbers for the numbered buttons.
    pub fn page_numbers(&self) -> RangeInclusive<usize> {
        1..=self.total_pages
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Slice `result` according to `state`.
///
/// A `current` beyond the last page yields an empty `items` list rather than an
/// error; keeping `current` in range is the session's job.
pub fn paginate(result: &ResultSet, state: &PageState) -> Page {
    let total_items = result.len();
    let total_pages = total_pages(total_items, state.size);
    let (start, end) = state.bounds();

    Page {
        items: result.window(start, end).map(|p| p.summary()).collect(),
        current_page: state.current,
        page_size: state.size.get(),
        total_pages,
        total_items,
        has_prev: state.current > 1,
        has_next: state.current < total_pages,
        show_controls: total_pages > 1,
    }
}
