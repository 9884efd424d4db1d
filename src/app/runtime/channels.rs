use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::events::EventSenders;
use crate::state::{Category, FetchRequest, FetchResults, Product};

/// What: Channel definitions for runtime communication.
///
/// Details:
/// - Request senders are cloned into [`EventSenders`]; request receivers are
///   handed to the workers, which report back on the result channels.
pub struct Channels {
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    pub event_thread_cancelled: Arc<AtomicBool>,
    pub fetch_tx: mpsc::UnboundedSender<FetchRequest>,
    pub fetch_rx: Option<mpsc::UnboundedReceiver<FetchRequest>>,
    pub results_tx: mpsc::UnboundedSender<FetchResults>,
    pub results_rx: mpsc::UnboundedReceiver<FetchResults>,
    pub details_req_tx: mpsc::UnboundedSender<String>,
    pub details_req_rx: Option<mpsc::UnboundedReceiver<String>>,
    pub details_res_tx: mpsc::UnboundedSender<(String, Option<Product>)>,
    pub details_res_rx: mpsc::UnboundedReceiver<(String, Option<Product>)>,
    pub categories_tx: mpsc::UnboundedSender<Vec<Category>>,
    pub categories_rx: mpsc::UnboundedReceiver<Vec<Category>>,
}

impl Channels {
    /// What: Create every channel pair used by the runtime.
    pub fn new() -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (fetch_tx, fetch_rx) = mpsc::unbounded_channel();
        let (results_tx, results_rx) = mpsc::unbounded_channel();
        let (details_req_tx, details_req_rx) = mpsc::unbounded_channel();
        let (details_res_tx, details_res_rx) = mpsc::unbounded_channel();
        let (categories_tx, categories_rx) = mpsc::unbounded_channel();
        Self {
            event_tx,
            event_rx,
            event_thread_cancelled: Arc::new(AtomicBool::new(false)),
            fetch_tx,
            fetch_rx: Some(fetch_rx),
            results_tx,
            results_rx,
            details_req_tx,
            details_req_rx: Some(details_req_rx),
            details_res_tx,
            details_res_rx,
            categories_tx,
            categories_rx,
        }
    }

    /// What: Senders the event layer needs.
    pub fn event_senders(&self) -> EventSenders {
        EventSenders {
            fetch_tx: self.fetch_tx.clone(),
            details_tx: self.details_req_tx.clone(),
        }
    }
}
