//! Background workers feeding the event loop.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::logic::{execute, relevant_categories};
use crate::sources::DataSource;
use crate::state::{Category, FetchRequest, FetchResults, Product};

/// What: Run catalog fetches as requests arrive.
///
/// Inputs:
/// - `source`: Data source shared with the other workers
/// - `fetch_rx`: Requests from the event layer
/// - `results_tx`: Outcomes for the event loop
///
/// Details:
/// - Each request runs in its own task so a slow page never delays a newer
///   query. Responses may arrive out of order; the query state drops stale ones.
pub fn spawn_fetch_worker(
    source: Arc<dyn DataSource>,
    mut fetch_rx: mpsc::UnboundedReceiver<FetchRequest>,
    results_tx: mpsc::UnboundedSender<FetchResults>,
) {
    tokio::spawn(async move {
        while let Some(request) = fetch_rx.recv().await {
            let source = Arc::clone(&source);
            let tx = results_tx.clone();
            tokio::spawn(async move {
                let results = execute(source.as_ref(), &request).await;
                let _ = tx.send(results);
            });
        }
        tracing::debug!("[Runtime] Fetch worker stopped");
    });
}

/// What: Fetch full product records for the detail overlay.
pub fn spawn_details_worker(
    source: Arc<dyn DataSource>,
    mut details_rx: mpsc::UnboundedReceiver<String>,
    details_res_tx: mpsc::UnboundedSender<(String, Option<Product>)>,
) {
    tokio::spawn(async move {
        while let Some(code) = details_rx.recv().await {
            let product = source.get_by_identifier(&code).await;
            tracing::debug!(code = %code, found = product.is_some(), "[Runtime] Details fetched");
            let _ = details_res_tx.send((code, product));
        }
    });
}

/// What: Load the category taxonomy once and keep the relevant entries.
///
/// Inputs:
/// - `min_products`, `limit`: Filter applied by [`relevant_categories`]
pub fn spawn_categories_worker(
    source: Arc<dyn DataSource>,
    min_products: u64,
    limit: usize,
    categories_tx: mpsc::UnboundedSender<Vec<Category>>,
) {
    tokio::spawn(async move {
        let all = source.list_categories().await;
        let total = all.len();
        let kept = relevant_categories(all, min_products, limit);
        tracing::info!(total, kept = kept.len(), "[Catalog] Categories loaded");
        let _ = categories_tx.send(kept);
    });
}

/// What: Read terminal events on a dedicated thread.
///
/// Details:
/// - Polls with a short timeout so the thread notices the cancel flag soon
///   after exit is requested. Nothing is spawned in headless mode.
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        while !cancelled.load(Ordering::Relaxed) {
            match crossterm::event::poll(Duration::from_millis(50)) {
                Ok(true) => {
                    let Ok(ev) = crossterm::event::read() else {
                        continue;
                    };
                    if cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err() {
                        break;
                    }
                }
                Ok(false) | Err(_) => {}
            }
        }
    });
}
