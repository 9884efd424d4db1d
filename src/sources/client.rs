use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::urls;
use super::{DataSource, FetchError};
use crate::state::{Category, CategoryResponse, Product, ProductResponse, SearchPage};

/// Connection establishment timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(15);

/// HTTP client for an Open Food Facts instance.
///
/// Cheap to clone; the underlying `reqwest::Client` pools connections.
#[derive(Clone, Debug)]
pub struct OpenFoodFactsClient {
    http: reqwest::Client,
    base_url: String,
}

impl OpenFoodFactsClient {
    /// What: Build a client for `base_url`.
    ///
    /// Inputs:
    /// - `base_url`: Instance root such as `https://world.openfoodfacts.org`
    /// - `timeout`: Overall per-request timeout
    ///
    /// Output:
    /// - The client, or [`FetchError::Client`] when the TLS/HTTP stack cannot initialize.
    ///
    /// # Errors
    /// - Returns `Err` when `reqwest` fails to build the client.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT.min(timeout))
            .timeout(timeout)
            .user_agent(format!(
                "NutriExplorer/{} (terminal catalog browser)",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self {
            http,
            base_url: urls::normalize_base(base_url).to_string(),
        })
    }

    /// What: Instance root this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// What: GET `url` and decode the body as JSON.
    ///
    /// # Errors
    /// - [`FetchError::Transport`] on connection or read failure
    /// - [`FetchError::Status`] on a non-success status
    /// - [`FetchError::Parse`] when the body is not the expected JSON
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let resp = self.http.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        let body = resp.text().await?;
        debug!(url, bytes = body.len(), "[Catalog] Response received");
        Ok(serde_json::from_str(&body)?)
    }

    /// What: Fetch a search-endpoint page, normalizing failures to an empty page.
    async fn search_page(&self, url: String, page_size: u32) -> SearchPage {
        match self.get_json::<SearchPage>(&url).await {
            Ok(page) => page,
            Err(e) => {
                warn!(error = %e, url = %url, "[Catalog] Search request failed");
                SearchPage::failed(page_size)
            }
        }
    }
}

#[async_trait]
impl DataSource for OpenFoodFactsClient {
    async fn list_products(&self, page: u32, page_size: u32) -> SearchPage {
        let url = urls::listing_url(&self.base_url, page, page_size);
        self.search_page(url, page_size).await
    }

    async fn search_by_name(&self, term: &str, page: u32, page_size: u32) -> SearchPage {
        let url = urls::search_url(&self.base_url, term, page, page_size);
        self.search_page(url, page_size).await
    }

    async fn list_by_category(&self, category: &str, page: u32, page_size: u32) -> SearchPage {
        let url = urls::category_url(&self.base_url, category, page, page_size);
        self.search_page(url, page_size).await
    }

    async fn get_by_identifier(&self, code: &str) -> Option<Product> {
        let url = urls::product_url(&self.base_url, code);
        match self.get_json::<ProductResponse>(&url).await {
            Ok(resp) => resp.product.map(|mut p| {
                if p.code.is_empty() {
                    p.code = code.trim().to_string();
                }
                p
            }),
            Err(e) if e.is_not_found() => None,
            Err(e) => {
                warn!(error = %e, code, "[Catalog] Product lookup failed");
                None
            }
        }
    }

    async fn list_categories(&self) -> Vec<Category> {
        let url = urls::categories_url(&self.base_url);
        match self.get_json::<CategoryResponse>(&url).await {
            Ok(resp) => resp.tags,
            Err(e) => {
                warn!(error = %e, url = %url, "[Catalog] Category request failed");
                Vec::new()
            }
        }
    }
}
