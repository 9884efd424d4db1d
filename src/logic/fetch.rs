//! Execution of fetch plans against a [`DataSource`].

use crate::sources::DataSource;
use crate::state::{FetchRequest, FetchResults, MergeMode, QueryState};

use super::{FetchPlan, has_more, sort_products};

/// What: Run one fetch request and shape the outcome for the query state.
///
/// Inputs:
/// - `source`: Data source collaborator
/// - `request`: Request produced by [`QueryState::begin_fetch`]
///
/// Output:
/// - Sorted page with the `has_more` heuristic applied; `failed` set when the
///   data source normalized a failure into an empty page.
///
/// Details:
/// - A lookup yields zero or one product, never more pages, and always
///   replaces the displayed list. Not found is a normal outcome.
pub async fn execute(source: &dyn DataSource, request: &FetchRequest) -> FetchResults {
    let size = request.page_size;
    let page = match &request.plan {
        FetchPlan::Lookup { code } => {
            let products: Vec<_> = source.get_by_identifier(code).await.into_iter().collect();
            tracing::debug!(code = %code, found = !products.is_empty(), "[Catalog] Lookup finished");
            return FetchResults {
                id: request.id,
                merge: MergeMode::Replace,
                products,
                has_more: false,
                failed: false,
            };
        }
        FetchPlan::Search { term, page } => source.search_by_name(term, *page, size).await,
        FetchPlan::Category { category, page } => {
            source.list_by_category(category, *page, size).await
        }
        FetchPlan::Listing { page } => source.list_products(*page, size).await,
    };
    let failed = page.failed;
    let mut products = page.products;
    sort_products(&mut products, request.sort);
    tracing::debug!(
        id = request.id,
        page = ?request.plan.page(),
        count = products.len(),
        failed,
        "[Catalog] Page fetched"
    );
    FetchResults {
        id: request.id,
        merge: request.merge,
        has_more: !failed && has_more(products.len(), size),
        products,
        failed,
    }
}

/// What: Issue a request for `state`, await it, and apply the outcome.
///
/// Inputs:
/// - `source`: Data source collaborator
/// - `state`: Query state to update
/// - `merge`: Replace for a fresh query, Append for the next page
///
/// Output:
/// - `true` when a request was issued (append is skipped without more pages).
///
/// Details:
/// - Used by one-shot commands where no other request can race.
pub async fn fetch_into(source: &dyn DataSource, state: &mut QueryState, merge: MergeMode) -> bool {
    let request = match merge {
        MergeMode::Replace => state.begin_fetch(MergeMode::Replace),
        MergeMode::Append => match state.load_more() {
            Some(r) => r,
            None => return false,
        },
    };
    let results = execute(source, &request).await;
    state.apply_results(results);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{SearchMode, SortMode};
    use crate::test_utils::{FakeSource, product};

    fn catalog(n: usize) -> Vec<crate::state::Product> {
        (0..n)
            .map(|i| product(&i.to_string(), Some(&format!("Item {:02}", (i * 7) % n)), None))
            .collect()
    }

    #[tokio::test]
    /// What: Full page sorts and reports more; short page reports none
    ///
    /// Inputs:
    /// - Catalog of 30 products, page size 24
    ///
    /// Output:
    /// - Page 1: 24 sorted, more; load-more page 2: 6 appended, no more
    async fn fetch_into_paginates_and_sorts_pages() {
        let source = FakeSource::with_products(catalog(30));
        let mut q = QueryState::new(24, SortMode::NameAsc);
        assert!(fetch_into(&source, &mut q, MergeMode::Replace).await);
        assert_eq!(q.products.len(), 24);
        assert!(q.has_more);
        let names: Vec<&str> = q.products.iter().map(|p| p.sort_name()).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);

        assert!(fetch_into(&source, &mut q, MergeMode::Append).await);
        assert_eq!(q.products.len(), 30);
        assert!(!q.has_more);
        assert!(!fetch_into(&source, &mut q, MergeMode::Append).await);
        let calls = source.calls.lock().expect("calls").clone();
        assert_eq!(calls, vec!["list::1", "list::2"]);
    }

    #[tokio::test]
    /// What: Barcode lookup yields a singleton or nothing, never more pages
    ///
    /// Inputs:
    /// - Known and unknown codes in barcode mode
    ///
    /// Output:
    /// - One product then empty; `has_more` false both times
    async fn lookup_replaces_and_never_paginates() {
        let source = FakeSource::with_products(catalog(3));
        let mut q = QueryState::default();
        q.set_search("1", SearchMode::Barcode);
        fetch_into(&source, &mut q, MergeMode::Replace).await;
        assert_eq!(q.products.len(), 1);
        assert!(!q.has_more);

        q.set_search("999", SearchMode::Barcode);
        fetch_into(&source, &mut q, MergeMode::Replace).await;
        assert!(q.products.is_empty());
        assert!(!q.has_more);
        assert!(!q.loading);
    }

    #[tokio::test]
    /// What: A failing source is reported as failed with no further pages
    ///
    /// Inputs:
    /// - Source in failure mode; listing request
    ///
    /// Output:
    /// - `failed` set, empty products, `has_more` false
    async fn execute_marks_failures() {
        let source = FakeSource {
            fail: true,
            ..FakeSource::default()
        };
        let mut q = QueryState::default();
        let request = q.begin_fetch(MergeMode::Replace);
        let results = execute(&source, &request).await;
        assert!(results.failed);
        assert!(results.products.is_empty());
        assert!(!results.has_more);
        assert_eq!(results.id, request.id);
    }
}
