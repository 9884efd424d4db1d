//! Catalog query state and its transitions.
//!
//! [`QueryState`] is owned by a single caller (the runtime event loop or a CLI
//! command). User intents become explicit setters; each setter reports whether
//! the state changed so the caller knows to issue a fresh fetch.

use crate::logic::{apply, resolve};
use crate::state::{FetchRequest, FetchResults, MergeMode, Product, SearchMode, SortMode};

/// Default number of products requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 24;

/// Working state of the catalog pipeline.
#[derive(Clone, Debug)]
pub struct QueryState {
    /// Free-text term; empty means no search.
    pub term: String,
    /// How `term` is interpreted.
    pub mode: SearchMode,
    /// Selected category name; never set together with a non-empty `term`.
    pub category: Option<String>,
    /// Sort applied to each fetched page.
    pub sort: SortMode,
    /// Page of the most recent fetch, starting at 1.
    pub page: u32,
    /// Requested page size.
    pub page_size: u32,
    /// Accumulated, displayed products.
    pub products: Vec<Product>,
    /// Whether another page may exist.
    pub has_more: bool,
    /// Whether a fetch is in flight.
    pub loading: bool,
    /// Identifier of the latest request whose results may be displayed.
    pub latest_query_id: u64,
    /// Next request identifier to allocate.
    pub next_query_id: u64,
}

impl Default for QueryState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, SortMode::default())
    }
}

impl QueryState {
    /// What: Create an empty state for the default listing.
    ///
    /// Inputs:
    /// - `page_size`: Products per page (clamped to at least 1)
    /// - `sort`: Initial sort mode
    #[must_use]
    pub fn new(page_size: u32, sort: SortMode) -> Self {
        Self {
            term: String::new(),
            mode: SearchMode::Name,
            category: None,
            sort,
            page: 1,
            page_size: page_size.max(1),
            products: Vec::new(),
            has_more: false,
            loading: false,
            latest_query_id: 0,
            next_query_id: 1,
        }
    }

    /// What: Apply a submitted search (term plus mode).
    ///
    /// Output:
    /// - `true` when term or mode changed; the list was reset and a fetch is due.
    ///
    /// Details:
    /// - A non-empty term clears the category filter.
    pub fn set_search(&mut self, term: &str, mode: SearchMode) -> bool {
        let term = term.trim();
        if self.term == term && self.mode == mode {
            return false;
        }
        self.term = term.to_string();
        self.mode = mode;
        if !self.term.is_empty() {
            self.category = None;
        }
        self.reset();
        true
    }

    /// What: Change only the search term, keeping the mode.
    pub fn set_term(&mut self, term: &str) -> bool {
        let mode = self.mode;
        self.set_search(term, mode)
    }

    /// What: Change only the search mode, keeping the term.
    pub fn set_mode(&mut self, mode: SearchMode) -> bool {
        let term = self.term.clone();
        self.set_search(&term, mode)
    }

    /// What: Select a category (or `None` for all categories).
    ///
    /// Output:
    /// - `true` when the selection changed; the term is cleared and the list reset.
    pub fn set_category(&mut self, category: Option<String>) -> bool {
        let category = category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());
        if self.category == category {
            return false;
        }
        self.category = category;
        self.term.clear();
        self.reset();
        true
    }

    /// What: Change the sort mode; `true` when it changed and the list was reset.
    pub fn set_sort(&mut self, sort: SortMode) -> bool {
        if self.sort == sort {
            return false;
        }
        self.sort = sort;
        self.reset();
        true
    }

    /// What: Return to page 1 and drop accumulated results.
    pub fn reset(&mut self) {
        self.page = 1;
        self.products.clear();
        self.has_more = false;
    }

    /// What: Allocate a request for the current state.
    ///
    /// Inputs:
    /// - `merge`: Replace for a fresh query, Append for the next page
    ///
    /// Output:
    /// - Request tagged with a fresh id; `latest_query_id` now points at it and
    ///   `loading` is set.
    pub fn begin_fetch(&mut self, merge: MergeMode) -> FetchRequest {
        let id = self.next_query_id;
        self.next_query_id += 1;
        self.latest_query_id = id;
        self.loading = true;
        FetchRequest {
            id,
            plan: resolve(self),
            merge,
            sort: self.sort,
            page_size: self.page_size,
        }
    }

    /// What: Request the next page when one may exist.
    ///
    /// Output:
    /// - `Some(request)` for page `page + 1` in append mode; `None` while loading
    ///   or when no further page is expected.
    pub fn load_more(&mut self) -> Option<FetchRequest> {
        if self.loading || !self.has_more {
            return None;
        }
        self.page += 1;
        Some(self.begin_fetch(MergeMode::Append))
    }

    /// What: Fold a worker outcome into the displayed list.
    ///
    /// Inputs:
    /// - `results`: Outcome of a previously issued request
    ///
    /// Output:
    /// - `true` when applied; `false` when it belonged to a superseded request.
    ///
    /// Details:
    /// - Failed replace: list becomes empty, no further pages.
    /// - Failed append: list kept as is; the page counter steps back so the
    ///   same page is requested again on the next load-more.
    pub fn apply_results(&mut self, results: FetchResults) -> bool {
        if results.id != self.latest_query_id {
            tracing::debug!(
                id = results.id,
                latest = self.latest_query_id,
                "[Catalog] Dropping stale results"
            );
            return false;
        }
        self.loading = false;
        if results.failed {
            match results.merge {
                MergeMode::Replace => {
                    self.products.clear();
                    self.has_more = false;
                }
                MergeMode::Append => {
                    self.page = self.page.saturating_sub(1).max(1);
                }
            }
            return true;
        }
        self.has_more = results.has_more;
        let existing = std::mem::take(&mut self.products);
        self.products = apply(existing, results.products, results.merge);
        true
    }
}
