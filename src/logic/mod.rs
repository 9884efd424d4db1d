//! Catalog pipeline: plan resolution, page sorting, merging, and paging.
//!
//! The functions here are pure or operate on a caller-owned
//! [`QueryState`](crate::state::QueryState); nothing in this module holds
//! global state.

pub mod categories;
pub mod fetch;
pub mod merge;
pub mod paging;
pub mod plan;
pub mod query;
pub mod sort;

pub use categories::{DEFAULT_CATEGORY_LIMIT, DEFAULT_CATEGORY_MIN_PRODUCTS, relevant_categories};
pub use fetch::{execute, fetch_into};
pub use merge::apply;
pub use paging::has_more;
pub use plan::{FetchPlan, resolve};
pub use query::{send_load_more, send_query};
pub use sort::sort_products;
