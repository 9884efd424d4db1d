use crate::state::{QueryState, SearchMode};

/// Which data-source call a query state maps to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchPlan {
    /// Exact lookup by barcode; never paginated.
    Lookup {
        /// Barcode to look up.
        code: String,
    },
    /// Free-text name search.
    Search {
        /// Search term.
        term: String,
        /// 1-based page.
        page: u32,
    },
    /// Listing filtered by category.
    Category {
        /// Category name.
        category: String,
        /// 1-based page.
        page: u32,
    },
    /// Unfiltered default listing.
    Listing {
        /// 1-based page.
        page: u32,
    },
}

impl FetchPlan {
    /// What: Page this plan requests; `None` for lookups.
    #[must_use]
    pub const fn page(&self) -> Option<u32> {
        match self {
            Self::Lookup { .. } => None,
            Self::Search { page, .. } | Self::Category { page, .. } | Self::Listing { page } => {
                Some(*page)
            }
        }
    }
}

/// What: Decide which fetch a query state requires.
///
/// Inputs:
/// - `state`: Current query state
///
/// Output:
/// - The single applicable [`FetchPlan`].
///
/// Details:
/// - Strict priority: barcode lookup, then term search, then category, then
///   the default listing. A term always wins over a category; the two are
///   never combined.
#[must_use]
pub fn resolve(state: &QueryState) -> FetchPlan {
    let term = state.term.trim();
    if state.mode == SearchMode::Barcode && !term.is_empty() {
        return FetchPlan::Lookup {
            code: term.to_string(),
        };
    }
    if !term.is_empty() {
        return FetchPlan::Search {
            term: term.to_string(),
            page: state.page,
        };
    }
    if let Some(category) = state.category.as_deref().filter(|c| !c.trim().is_empty()) {
        return FetchPlan::Category {
            category: category.to_string(),
            page: state.page,
        };
    }
    FetchPlan::Listing { page: state.page }
}
