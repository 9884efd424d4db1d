//! Test utilities for common test setup.
//!
//! This module provides shared test helpers used across multiple test modules.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::cart::MemoryStorage;
use crate::config::Settings;
use crate::sources::DataSource;
use crate::state::{AppState, Category, Product, SearchPage};

/// What: Provide a baseline `AppState` backed by in-memory cart storage.
pub fn new_app() -> AppState {
    AppState::new(&Settings::default(), Box::new(MemoryStorage::new()))
}

/// What: Build a product with the fields the pipeline looks at.
pub fn product(code: &str, name: Option<&str>, grade: Option<&str>) -> Product {
    Product {
        code: code.to_string(),
        product_name: name.map(str::to_string),
        nutrition_grades: grade.map(str::to_string),
        ..Product::default()
    }
}

/// In-memory [`DataSource`] serving a fixed catalog in pages.
#[derive(Debug, Default)]
pub struct FakeSource {
    /// Whole catalog in upstream order.
    pub products: Vec<Product>,
    /// Taxonomy returned by `list_categories`.
    pub categories: Vec<Category>,
    /// When set, every call behaves like a failed request.
    pub fail: bool,
    /// Log of calls as `"kind:arg:page"` strings.
    pub calls: Mutex<Vec<String>>,
}

impl FakeSource {
    /// What: Source serving `products`.
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products,
            ..Self::default()
        }
    }

    fn record(&self, call: String) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }

    fn page_of(&self, items: Vec<Product>, page: u32, page_size: u32) -> SearchPage {
        if self.fail {
            return SearchPage::failed(page_size);
        }
        let size = page_size as usize;
        let start = (page.saturating_sub(1) as usize) * size;
        let products: Vec<Product> = items.into_iter().skip(start).take(size).collect();
        SearchPage {
            count: self.products.len() as u64,
            page: u64::from(page),
            page_size: u64::from(page_size),
            products,
            ..SearchPage::default()
        }
    }
}

#[async_trait]
impl DataSource for FakeSource {
    async fn list_products(&self, page: u32, page_size: u32) -> SearchPage {
        self.record(format!("list::{page}"));
        self.page_of(self.products.clone(), page, page_size)
    }

    async fn search_by_name(&self, term: &str, page: u32, page_size: u32) -> SearchPage {
        self.record(format!("search:{term}:{page}"));
        let t = term.to_lowercase();
        let hits = self
            .products
            .iter()
            .filter(|p| p.sort_name().to_lowercase().contains(&t))
            .cloned()
            .collect();
        self.page_of(hits, page, page_size)
    }

    async fn list_by_category(&self, category: &str, page: u32, page_size: u32) -> SearchPage {
        self.record(format!("category:{category}:{page}"));
        let hits = self
            .products
            .iter()
            .filter(|p| p.categories.as_deref().is_some_and(|c| c.contains(category)))
            .cloned()
            .collect();
        self.page_of(hits, page, page_size)
    }

    async fn get_by_identifier(&self, code: &str) -> Option<Product> {
        self.record(format!("lookup:{code}:"));
        if self.fail {
            return None;
        }
        self.products.iter().find(|p| p.code == code).cloned()
    }

    async fn list_categories(&self) -> Vec<Category> {
        self.record("categories::".to_string());
        if self.fail {
            return Vec::new();
        }
        self.categories.clone()
    }
}
