//! Shared fixtures for integration tests (included with `mod common;`).

#![allow(dead_code)]

use async_trait::async_trait;
use nutriexplorer::sources::DataSource;
use nutriexplorer::state::{Category, Product, SearchPage};

/// In-memory catalog serving fixed products in pages.
#[derive(Debug, Default)]
pub struct CatalogFixture {
    pub products: Vec<Product>,
    pub fail: bool,
}

pub fn product(code: &str, name: &str) -> Product {
    Product {
        code: code.to_string(),
        product_name: Some(name.to_string()),
        ..Product::default()
    }
}

impl CatalogFixture {
    fn page(&self, items: Vec<Product>, page: u32, page_size: u32) -> SearchPage {
        if self.fail {
            return SearchPage::failed(page_size);
        }
        let size = page_size as usize;
        let start = page.saturating_sub(1) as usize * size;
        SearchPage {
            products: items.into_iter().skip(start).take(size).collect(),
            ..SearchPage::default()
        }
    }
}

#[async_trait]
impl DataSource for CatalogFixture {
    async fn list_products(&self, page: u32, page_size: u32) -> SearchPage {
        self.page(self.products.clone(), page, page_size)
    }

    async fn search_by_name(&self, term: &str, page: u32, page_size: u32) -> SearchPage {
        let hits = self
            .products
            .iter()
            .filter(|p| p.sort_name().contains(term))
            .cloned()
            .collect();
        self.page(hits, page, page_size)
    }

    async fn list_by_category(&self, _category: &str, page: u32, page_size: u32) -> SearchPage {
        self.page(Vec::new(), page, page_size)
    }

    async fn get_by_identifier(&self, code: &str) -> Option<Product> {
        self.products.iter().find(|p| p.code == code).cloned()
    }

    async fn list_categories(&self) -> Vec<Category> {
        Vec::new()
    }
}
