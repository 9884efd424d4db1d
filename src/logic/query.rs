use tokio::sync::mpsc;

use crate::state::{FetchRequest, MergeMode, QueryState};

/// What: Issue a fresh replace-mode request for the current query state.
///
/// Inputs:
/// - `query`: Query state; allocates a new id and marks it latest
/// - `fetch_tx`: Channel to the fetch worker
///
/// Details:
/// - The id lets the event loop discard results of superseded requests.
pub fn send_query(query: &mut QueryState, fetch_tx: &mpsc::UnboundedSender<FetchRequest>) {
    let request = query.begin_fetch(MergeMode::Replace);
    tracing::debug!(id = request.id, plan = ?request.plan, "[Catalog] Query sent");
    let _ = fetch_tx.send(request);
}

/// What: Request the next page when the state allows it.
///
/// Output:
/// - `true` when a request was sent.
pub fn send_load_more(query: &mut QueryState, fetch_tx: &mpsc::UnboundedSender<FetchRequest>) -> bool {
    let Some(request) = query.load_more() else {
        return false;
    };
    tracing::debug!(id = request.id, plan = ?request.plan, "[Catalog] Load more sent");
    let _ = fetch_tx.send(request);
    true
}
