//! Core application state types for the catalog browser.
//!
//! This module defines the serializable data structures used across the
//! application: product descriptors, fetch coordination types, the catalog
//! [`QueryState`], and the central [`AppState`] container mutated by the event
//! and UI layers.

pub mod app_state;
pub mod query;
pub mod types;

pub use app_state::{AppState, Focus, Modal};
pub use query::{DEFAULT_PAGE_SIZE, QueryState};
pub use types::{
    Category, CategoryResponse, FetchRequest, FetchResults, MergeMode, Nutriments, Product,
    ProductResponse, SearchMode, SearchPage, SortMode,
};
