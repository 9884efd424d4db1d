use crate::state::{AppState, Category, FetchResults, Product};

/// What: Fold a catalog page into the state and keep highlights in range.
///
/// Output:
/// - `true` when applied; `false` for a stale response.
///
/// Details:
/// - Failures stay silent here; the data source already logged them.
pub fn handle_fetch_results(app: &mut AppState, results: FetchResults) -> bool {
    let applied = app.query.apply_results(results);
    if applied {
        app.sync_list_states();
    }
    applied
}

/// What: Store a fetched product record for the detail overlay.
///
/// Details:
/// - `None` leaves the overlay on the list entry it already shows.
pub fn handle_details_update(app: &mut AppState, code: String, product: Option<Product>) {
    if app.details_loading.as_deref() == Some(code.as_str()) {
        app.details_loading = None;
    }
    if let Some(p) = product {
        app.details_cache.put(code, p);
    }
}

/// What: Install the filtered category list in the picker.
pub fn handle_categories(app: &mut AppState, categories: Vec<Category>) {
    app.categories = categories;
    app.categories_loading = false;
    app.sync_list_states();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MergeMode;
    use crate::test_utils::{new_app, product};

    #[test]
    /// What: Stale responses are ignored while the latest is applied
    ///
    /// Inputs:
    /// - Two requests; the older one answers last
    ///
    /// Output:
    /// - List shows the newer page; highlight synced
    fn handle_fetch_results_ignores_stale() {
        let mut app = new_app();
        let old = app.query.begin_fetch(MergeMode::Replace);
        let new = app.query.begin_fetch(MergeMode::Replace);
        assert!(handle_fetch_results(
            &mut app,
            FetchResults {
                id: new.id,
                merge: MergeMode::Replace,
                products: vec![product("new", None, None)],
                has_more: false,
                failed: false,
            }
        ));
        assert!(!handle_fetch_results(
            &mut app,
            FetchResults {
                id: old.id,
                merge: MergeMode::Replace,
                products: vec![product("old", None, None)],
                has_more: true,
                failed: false,
            }
        ));
        assert_eq!(app.query.products[0].code, "new");
        assert_eq!(app.list_state.selected(), Some(0));
    }

    #[test]
    /// What: Failed pages never reach the footer as a message
    ///
    /// Inputs:
    /// - A failed first page, then a loaded page followed by a failed append
    ///
    /// Output:
    /// - No toast either time; the appended failure leaves the list unchanged
    fn handle_fetch_results_failure_is_silent() {
        let mut app = new_app();
        let req = app.query.begin_fetch(MergeMode::Replace);
        assert!(handle_fetch_results(
            &mut app,
            FetchResults {
                id: req.id,
                merge: MergeMode::Replace,
                products: Vec::new(),
                has_more: false,
                failed: true,
            }
        ));
        assert!(app.toast.is_none());
        assert!(app.query.products.is_empty());

        let req = app.query.begin_fetch(MergeMode::Replace);
        handle_fetch_results(
            &mut app,
            FetchResults {
                id: req.id,
                merge: MergeMode::Replace,
                products: vec![product("1", None, None)],
                has_more: true,
                failed: false,
            },
        );
        let req = app.query.begin_fetch(MergeMode::Append);
        handle_fetch_results(
            &mut app,
            FetchResults {
                id: req.id,
                merge: MergeMode::Append,
                products: Vec::new(),
                has_more: false,
                failed: true,
            },
        );
        assert!(app.toast.is_none());
        assert_eq!(app.query.products.len(), 1);
        assert_eq!(app.query.products[0].code, "1");
    }

    #[test]
    /// What: Detail responses fill the cache and clear the loading marker
    ///
    /// Inputs:
    /// - Loading code "5" answered with a product, then a miss for "6"
    ///
    /// Output:
    /// - Cache holds "5"; loading cleared; miss leaves cache untouched
    fn handle_details_update_caches() {
        let mut app = new_app();
        app.details_loading = Some("5".into());
        handle_details_update(&mut app, "5".into(), Some(product("5", None, None)));
        assert!(app.details_loading.is_none());
        assert!(app.details_cache.contains("5"));
        handle_details_update(&mut app, "6".into(), None);
        assert_eq!(app.details_cache.len(), 1);
    }

    #[test]
    /// What: Category list replaces the loading placeholder
    ///
    /// Inputs:
    /// - One category
    ///
    /// Output:
    /// - Stored; loading flag cleared
    fn handle_categories_stores_list() {
        let mut app = new_app();
        handle_categories(
            &mut app,
            vec![Category {
                name: "Snacks".into(),
                ..Category::default()
            }],
        );
        assert_eq!(app.categories.len(), 1);
        assert!(!app.categories_loading);
    }
}
