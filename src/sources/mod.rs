//! Catalog data retrieval: the [`DataSource`] seam and its Open Food Facts client.
//!
//! Implementations never surface errors to the pipeline. Transport failures,
//! HTTP error statuses and malformed JSON are logged and normalized into empty
//! results so the caller only ever sees data.

use async_trait::async_trait;

use crate::state::{Category, Product, SearchPage};

mod client;
mod error;
pub mod urls;

pub use client::OpenFoodFactsClient;
pub use error::FetchError;

/// Read-only product catalog consumed by the query pipeline.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// What: Fetch one page of the unfiltered default listing.
    ///
    /// Inputs:
    /// - `page`: 1-based page number
    /// - `page_size`: Products per page
    ///
    /// Output:
    /// - The page, or [`SearchPage::failed`] when the request failed.
    async fn list_products(&self, page: u32, page_size: u32) -> SearchPage;

    /// What: Fetch one page of a free-text name search.
    async fn search_by_name(&self, term: &str, page: u32, page_size: u32) -> SearchPage;

    /// What: Fetch one page of products in a category (matched by name).
    async fn list_by_category(&self, category: &str, page: u32, page_size: u32) -> SearchPage;

    /// What: Look a product up by its exact code.
    ///
    /// Output:
    /// - `Some(product)` when found; `None` when unknown or the request failed.
    async fn get_by_identifier(&self, code: &str) -> Option<Product>;

    /// What: Fetch the full category taxonomy; empty on failure.
    async fn list_categories(&self) -> Vec<Category>;
}
