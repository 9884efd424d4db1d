use std::sync::atomic::Ordering;

use crate::state::AppState;

use super::channels::Channels;

/// What: Stop background activity before the runtime returns.
///
/// Details:
/// - Signals the event thread to exit. The cart needs no flush; it is
///   written on every mutation.
pub fn cleanup_on_exit(app: &AppState, channels: &Channels) {
    tracing::debug!("[Runtime] Main loop exited");
    channels.event_thread_cancelled.store(true, Ordering::Relaxed);
    tracing::info!(
        cart_lines = app.cart.len(),
        cart_items = app.cart.total_item_count(),
        "[Runtime] Shutdown"
    );
}
