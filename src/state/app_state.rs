//! Central `AppState` container owned by the TUI event loop.

use std::num::NonZeroUsize;

use lru::LruCache;
use ratatui::widgets::ListState;

use crate::cart::{CartItem, CartStore, Storage};
use crate::config::Settings;
use crate::state::{Category, Product, QueryState, SearchMode};

/// Maximum number of fully fetched product records kept for the detail view.
pub const DETAILS_CAPACITY: usize = 64;

/// What: Provide the non-zero capacity used by the details LRU cache.
#[must_use]
pub const fn details_capacity() -> NonZeroUsize {
    match NonZeroUsize::new(DETAILS_CAPACITY) {
        Some(n) => n,
        None => NonZeroUsize::MIN,
    }
}

/// Pane that receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Search input box.
    #[default]
    Search,
    /// Category picker.
    Categories,
    /// Product results list.
    Results,
    /// Cart pane.
    Cart,
}

impl Focus {
    /// What: Next pane in Tab order, skipping the cart when it is hidden.
    #[must_use]
    pub const fn next(self, cart_visible: bool) -> Self {
        match self {
            Self::Search => Self::Categories,
            Self::Categories => Self::Results,
            Self::Results if cart_visible => Self::Cart,
            Self::Results | Self::Cart => Self::Search,
        }
    }
}

/// Overlay shown above the main layout.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Modal {
    /// No overlay.
    #[default]
    None,
    /// Key binding reference.
    Help,
    /// Sort mode picker; `selected` indexes [`SortMode::ALL`](crate::state::SortMode::ALL).
    SortMenu {
        /// Highlighted entry.
        selected: usize,
    },
    /// Product detail page.
    ProductDetail {
        /// Code of the product shown.
        code: String,
        /// Vertical scroll offset.
        scroll: u16,
    },
}

/// Application state shared by the event and UI layers.
///
/// Mutated only by the runtime event loop. The cart persists itself on every
/// mutation; the catalog list is rebuilt from the network on each start.
#[derive(Debug)]
pub struct AppState {
    /// Catalog pipeline state.
    pub query: QueryState,
    /// Shopping cart.
    pub cart: CartStore<Box<dyn Storage>>,
    /// Text currently typed into the search box (submitted with Enter).
    pub input: String,
    /// Search mode selected in the search box.
    pub input_mode: SearchMode,
    /// Focused pane.
    pub focus: Focus,
    /// Active overlay.
    pub modal: Modal,
    /// Index of the highlighted product.
    pub selected: usize,
    /// List state for the results pane.
    pub list_state: ListState,
    /// Categories offered in the picker (already filtered and capped).
    pub categories: Vec<Category>,
    /// Whether the category list is still being fetched.
    pub categories_loading: bool,
    /// Highlighted picker row; row 0 is "All Categories".
    pub category_selected: usize,
    /// List state for the category pane.
    pub category_state: ListState,
    /// Highlighted cart row.
    pub cart_selected: usize,
    /// List state for the cart pane.
    pub cart_state: ListState,
    /// Full product records fetched for the detail view.
    pub details_cache: LruCache<String, Product>,
    /// Code whose full record is being fetched.
    pub details_loading: Option<String>,
    /// One-line message shown in the footer (e.g. "Added to cart").
    pub toast: Option<String>,
}

impl AppState {
    /// What: Build the initial state from settings and a cart storage.
    ///
    /// Inputs:
    /// - `settings`: Loaded settings (page size, sort, cart visibility)
    /// - `storage`: Persistence port for the cart; read once here
    #[must_use]
    pub fn new(settings: &Settings, storage: Box<dyn Storage>) -> Self {
        let mut cart = CartStore::load(storage);
        cart.set_open(settings.show_cart_pane);
        Self {
            query: QueryState::new(settings.page_size, settings.sort_mode),
            cart,
            input: String::new(),
            input_mode: SearchMode::Name,
            focus: Focus::Search,
            modal: Modal::None,
            selected: 0,
            list_state: ListState::default(),
            categories: Vec::new(),
            categories_loading: true,
            category_selected: 0,
            category_state: ListState::default().with_selected(Some(0)),
            cart_selected: 0,
            cart_state: ListState::default(),
            details_cache: LruCache::new(details_capacity()),
            details_loading: None,
            toast: None,
        }
    }

    /// What: Product highlighted in the results pane.
    #[must_use]
    pub fn selected_product(&self) -> Option<&Product> {
        self.query.products.get(self.selected)
    }

    /// What: Cart line highlighted in the cart pane.
    #[must_use]
    pub fn selected_cart_item(&self) -> Option<&CartItem> {
        self.cart.items().get(self.cart_selected)
    }

    /// What: Category name for picker row `row`; `None` for "All Categories".
    #[must_use]
    pub fn category_at(&self, row: usize) -> Option<&str> {
        row.checked_sub(1)
            .and_then(|i| self.categories.get(i))
            .map(|c| c.name.as_str())
    }

    /// What: Best known record for `code`: the fetched detail, else the list entry, else the cart.
    #[must_use]
    pub fn product_for(&self, code: &str) -> Option<&Product> {
        self.details_cache
            .peek(code)
            .or_else(|| self.query.products.iter().find(|p| p.code == code))
            .or_else(|| self.cart.get(code).map(|i| &i.product))
    }

    /// What: Move the results highlight by `delta`, clamped to the list.
    pub fn move_selection(&mut self, delta: isize) {
        self.selected = step(self.selected, delta, self.query.products.len());
        self.sync_list_states();
    }

    /// What: Move the category highlight by `delta` (row 0 is "All").
    pub fn move_category(&mut self, delta: isize) {
        self.category_selected = step(self.category_selected, delta, self.categories.len() + 1);
        self.sync_list_states();
    }

    /// What: Move the cart highlight by `delta`.
    pub fn move_cart(&mut self, delta: isize) {
        self.cart_selected = step(self.cart_selected, delta, self.cart.len());
        self.sync_list_states();
    }

    /// What: Clamp every highlight to its list and mirror it into the widget states.
    pub fn sync_list_states(&mut self) {
        let n = self.query.products.len();
        self.selected = self.selected.min(n.saturating_sub(1));
        self.list_state.select((n > 0).then_some(self.selected));

        let c = self.categories.len() + 1;
        self.category_selected = self.category_selected.min(c - 1);
        self.category_state.select(Some(self.category_selected));

        let k = self.cart.len();
        self.cart_selected = self.cart_selected.min(k.saturating_sub(1));
        self.cart_state.select((k > 0).then_some(self.cart_selected));
    }
}

/// What: Apply a signed step to an index within `0..len`.
fn step(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    current.saturating_add_signed(delta).min(len - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::MemoryStorage;

    fn product(code: &str) -> Product {
        Product {
            code: code.to_string(),
            product_name: Some(format!("P{code}")),
            ..Product::default()
        }
    }

    #[test]
    /// What: Initial state mirrors settings and starts on the default listing
    ///
    /// Inputs:
    /// - Settings with page size 12, grade sort and visible cart
    ///
    /// Output:
    /// - Query configured accordingly; focus on search; cart open
    fn app_state_new_applies_settings() {
        let settings = Settings {
            page_size: 12,
            sort_mode: crate::state::SortMode::GradeAsc,
            show_cart_pane: true,
            ..Settings::default()
        };
        let app = AppState::new(&settings, Box::new(MemoryStorage::new()));
        assert_eq!(app.query.page_size, 12);
        assert_eq!(app.query.sort, crate::state::SortMode::GradeAsc);
        assert!(app.cart.is_open());
        assert_eq!(app.focus, Focus::Search);
        assert!(app.categories_loading);
    }

    #[test]
    /// What: Highlights clamp to list bounds and category row 0 means all
    ///
    /// Inputs:
    /// - Three products, two categories; oversized moves
    ///
    /// Output:
    /// - Indices stay in range; `category_at` maps rows to names
    fn app_state_selection_clamps() {
        let mut app = AppState::new(&Settings::default(), Box::new(MemoryStorage::new()));
        app.query.products = vec![product("1"), product("2"), product("3")];
        app.move_selection(10);
        assert_eq!(app.selected, 2);
        app.move_selection(-10);
        assert_eq!(app.selected, 0);
        assert_eq!(app.list_state.selected(), Some(0));

        app.categories = vec![
            Category {
                name: "Snacks".into(),
                ..Category::default()
            },
            Category {
                name: "Beverages".into(),
                ..Category::default()
            },
        ];
        assert_eq!(app.category_at(0), None);
        app.move_category(5);
        assert_eq!(app.category_selected, 2);
        assert_eq!(app.category_at(2), Some("Beverages"));

        app.move_cart(1);
        assert_eq!(app.cart_selected, 0);
        assert_eq!(app.cart_state.selected(), None);
    }

    #[test]
    /// What: Detail lookup prefers the fetched record over the list entry
    ///
    /// Inputs:
    /// - List product and a richer cached record with the same code
    ///
    /// Output:
    /// - Cached record returned; unknown codes resolve to None
    fn app_state_product_for_prefers_cache() {
        let mut app = AppState::new(&Settings::default(), Box::new(MemoryStorage::new()));
        app.query.products = vec![product("1")];
        assert_eq!(app.product_for("1").map(|p| p.code.as_str()), Some("1"));
        let mut rich = product("1");
        rich.quantity = Some("400 g".into());
        app.details_cache.put("1".into(), rich);
        assert_eq!(
            app.product_for("1").and_then(|p| p.quantity.as_deref()),
            Some("400 g")
        );
        assert!(app.product_for("nope").is_none());
    }
}
