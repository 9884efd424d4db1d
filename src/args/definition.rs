//! Command-line argument definition and processing.

use clap::Parser;

use crate::cart::{CartStore, Storage};
use crate::config::Settings;
use crate::sources::DataSource;
use crate::state::{QueryState, SearchMode, SortMode};

use super::cart::CartCommand;

/// NutriExplorer - Browse Open Food Facts products and keep a local shopping cart
#[derive(Parser, Debug)]
#[command(name = "nutriexplorer")]
#[command(version)]
#[command(about = "Browse Open Food Facts products and keep a local shopping cart", long_about = None)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Catalog root URL (overrides settings.conf)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Products per page, 1 to 100 (overrides settings.conf)
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Search products by name and print the results
    #[arg(short, long)]
    pub search: Option<String>,

    /// Treat the --search term as a barcode
    #[arg(short, long)]
    pub barcode: bool,

    /// List products of a category (by name) and print them
    #[arg(short, long)]
    pub category: Option<String>,

    /// Sort order: name_asc, name_desc, grade_asc, grade_desc
    #[arg(long)]
    pub sort: Option<String>,

    /// First page to fetch (default 1)
    #[arg(long)]
    pub page: Option<u32>,

    /// Number of pages to load, appending each to the list (default 1)
    #[arg(long)]
    pub pages: Option<u32>,

    /// Print the detail page of a product
    #[arg(short, long)]
    pub product: Option<String>,

    /// Print the category list offered by the picker
    #[arg(long)]
    pub categories: bool,

    /// Print the cart
    #[arg(long)]
    pub cart: bool,

    /// Look a product up by barcode and add one unit to the cart
    #[arg(long)]
    pub add: Option<String>,

    /// Remove a product from the cart
    #[arg(long)]
    pub remove: Option<String>,

    /// Set the quantity of a cart line (0 removes it)
    #[arg(long, num_args = 2, value_names = ["CODE", "N"])]
    pub set_quantity: Vec<String>,

    /// Empty the cart
    #[arg(long)]
    pub clear_cart: bool,
}

impl Args {
    /// What: Whether any listing flag asks for a one-shot product list.
    #[must_use]
    pub const fn wants_listing(&self) -> bool {
        self.search.is_some()
            || self.category.is_some()
            || self.sort.is_some()
            || self.page.is_some()
            || self.pages.is_some()
    }

    /// What: Cart command requested on the command line, if any.
    ///
    /// Output:
    /// - `Err` with a message when `--set-quantity` has a non-numeric count.
    pub fn cart_command(&self) -> Result<Option<CartCommand>, String> {
        if let Some(code) = &self.add {
            return Ok(Some(CartCommand::Add(code.clone())));
        }
        if let Some(code) = &self.remove {
            return Ok(Some(CartCommand::Remove(code.clone())));
        }
        if let [code, n] = self.set_quantity.as_slice() {
            let n: i64 = n
                .trim()
                .parse()
                .map_err(|_| format!("invalid quantity '{n}'"))?;
            return Ok(Some(CartCommand::SetQuantity(code.clone(), n)));
        }
        if self.clear_cart {
            return Ok(Some(CartCommand::Clear));
        }
        if self.cart {
            return Ok(Some(CartCommand::List));
        }
        Ok(None)
    }

    /// What: Build the initial query state for a one-shot listing.
    ///
    /// Output:
    /// - `Err` with a message for an unknown sort key.
    pub fn listing_query(&self, settings: &Settings) -> Result<QueryState, String> {
        let sort = match &self.sort {
            Some(key) => SortMode::from_config_key(key).ok_or_else(|| format!("unknown sort '{key}'"))?,
            None => settings.sort_mode,
        };
        let mut query = QueryState::new(settings.page_size, sort);
        if let Some(term) = &self.search {
            let mode = if self.barcode {
                SearchMode::Barcode
            } else {
                SearchMode::Name
            };
            query.set_search(term, mode);
        } else if let Some(category) = &self.category {
            query.set_category(Some(category.clone()));
        }
        query.page = self.page.unwrap_or(1).max(1);
        Ok(query)
    }
}

/// What: Run the one-shot command selected by `args`, if any.
///
/// Inputs:
/// - `args`: Parsed command-line arguments
/// - `settings`: Effective settings (CLI overrides already applied)
/// - `source`: Catalog data source
/// - `storage`: Cart persistence port
///
/// Output:
/// - `Some(success)` when a command ran and the process should exit;
///   `None` to start the TUI.
///
/// Details:
/// - Priority: product detail, categories, cart commands, listing.
pub async fn process_args(
    args: &Args,
    settings: &Settings,
    source: &dyn DataSource,
    storage: Box<dyn Storage>,
) -> Option<bool> {
    if let Some(code) = &args.product {
        return Some(super::product::handle_product(source, code).await);
    }
    if args.categories {
        super::categories::handle_categories(source, settings).await;
        return Some(true);
    }
    match args.cart_command() {
        Ok(Some(cmd)) => {
            let mut cart = CartStore::load(storage);
            return Some(super::cart::handle_cart(&mut cart, source, cmd).await);
        }
        Ok(None) => {}
        Err(msg) => {
            eprintln!("nutriexplorer: {msg}");
            return Some(false);
        }
    }
    if args.wants_listing() {
        return match args.listing_query(settings) {
            Ok(query) => {
                super::search::handle_listing(source, query, args.pages.unwrap_or(1)).await;
                Some(true)
            }
            Err(msg) => {
                eprintln!("nutriexplorer: {msg}");
                Some(false)
            }
        };
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::{FetchPlan, resolve};

    #[test]
    /// What: Listing flags build the matching query state
    ///
    /// Inputs:
    /// - `--search 301 --barcode --sort grade_desc --page 3`
    ///
    /// Output:
    /// - Barcode lookup plan; grade descending; page 3
    fn args_listing_query_from_flags() {
        let args = Args::parse_from([
            "nutriexplorer",
            "--search",
            "301",
            "--barcode",
            "--sort",
            "grade_desc",
            "--page",
            "3",
        ]);
        assert!(args.wants_listing());
        let q = args.listing_query(&Settings::default()).expect("query");
        assert_eq!(q.sort, SortMode::GradeDesc);
        assert_eq!(q.page, 3);
        assert_eq!(resolve(&q), FetchPlan::Lookup { code: "301".into() });

        let bad = Args::parse_from(["nutriexplorer", "--sort", "price"]);
        assert!(bad.listing_query(&Settings::default()).is_err());

        let paged = Args::parse_from(["nutriexplorer", "--pages", "2"]);
        assert!(paged.wants_listing());
        let q = paged.listing_query(&Settings::default()).expect("query");
        assert_eq!(q.page, 1);
        assert_eq!(resolve(&q), FetchPlan::Listing { page: 1 });
        assert!(Args::parse_from(["nutriexplorer", "--page", "2"]).wants_listing());
    }

    #[test]
    /// What: Cart flags map to cart commands
    ///
    /// Inputs:
    /// - `--set-quantity 42 3`, `--set-quantity 42 x`, `--clear-cart`, no flags
    ///
    /// Output:
    /// - SetQuantity, an error, Clear, None
    fn args_cart_command_mapping() {
        let set = Args::parse_from(["nutriexplorer", "--set-quantity", "42", "3"]);
        assert_eq!(
            set.cart_command(),
            Ok(Some(CartCommand::SetQuantity("42".into(), 3)))
        );
        let bad = Args::parse_from(["nutriexplorer", "--set-quantity", "42", "x"]);
        assert!(bad.cart_command().is_err());
        let clear = Args::parse_from(["nutriexplorer", "--clear-cart"]);
        assert_eq!(clear.cart_command(), Ok(Some(CartCommand::Clear)));
        let none = Args::parse_from(["nutriexplorer"]);
        assert_eq!(none.cart_command(), Ok(None));
        assert!(!none.wants_listing());
    }
}
