use std::sync::Arc;

use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::select;

use crate::cart::Storage;
use crate::config::Settings;
use crate::logic::send_query;
use crate::sources::DataSource;
use crate::state::AppState;
use crate::ui::ui;

use super::terminal::{restore_terminal, setup_terminal};

mod channels;
mod cleanup;
mod handlers;
mod workers;

use channels::Channels;
use cleanup::cleanup_on_exit;
use handlers::{handle_categories, handle_details_update, handle_fetch_results};
use workers::{
    spawn_categories_worker, spawn_details_worker, spawn_event_thread, spawn_fetch_worker,
};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Environment variable that runs the loop without a terminal.
pub const HEADLESS_ENV: &str = "NUTRIEXPLORER_TEST_HEADLESS";

/// What: Run the TUI end-to-end: set up the terminal, spawn workers, drive
/// the event loop and restore the terminal on exit.
///
/// Inputs:
/// - `settings`: Effective settings (page size, sort, category filter, cart pane)
/// - `source`: Catalog data source shared by the workers
/// - `storage`: Cart persistence port
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on terminal failures.
///
/// Details:
/// - The default listing and the category taxonomy are requested at start.
/// - Headless mode (`NUTRIEXPLORER_TEST_HEADLESS=1`) draws nothing and
///   returns once the first page has been applied.
pub async fn run(
    settings: Settings,
    source: Arc<dyn DataSource>,
    storage: Box<dyn Storage>,
) -> Result<()> {
    let headless = std::env::var(HEADLESS_ENV).ok().as_deref() == Some("1");
    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        Some(Terminal::new(CrosstermBackend::new(std::io::stdout()))?)
    };

    let mut app = AppState::new(&settings, storage);
    tracing::info!(
        page_size = app.query.page_size,
        sort = app.query.sort.as_config_key(),
        cart_lines = app.cart.len(),
        "[Runtime] Starting"
    );

    let mut channels = Channels::new();
    if let Some(rx) = channels.fetch_rx.take() {
        spawn_fetch_worker(Arc::clone(&source), rx, channels.results_tx.clone());
    }
    if let Some(rx) = channels.details_req_rx.take() {
        spawn_details_worker(Arc::clone(&source), rx, channels.details_res_tx.clone());
    }
    spawn_categories_worker(
        Arc::clone(&source),
        settings.category_min_products,
        settings.category_limit,
        channels.categories_tx.clone(),
    );
    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        Arc::clone(&channels.event_thread_cancelled),
    );
    let senders = channels.event_senders();

    send_query(&mut app.query, &channels.fetch_tx);

    loop {
        if let Some(t) = terminal.as_mut() {
            let _ = t.draw(|f| ui(f, &mut app));
        }

        select! {
            Some(ev) = channels.event_rx.recv() => {
                if crate::events::handle_event(ev, &mut app, &senders) {
                    break;
                }
            }
            Some(results) = channels.results_rx.recv() => {
                if handle_fetch_results(&mut app, results) && headless && !app.query.loading {
                    break;
                }
            }
            Some((code, product)) = channels.details_res_rx.recv() => {
                handle_details_update(&mut app, code, product);
            }
            Some(categories) = channels.categories_rx.recv() => {
                handle_categories(&mut app, categories);
            }
            else => break,
        }
    }

    cleanup_on_exit(&app, &channels);
    if !headless {
        restore_terminal()?;
    }
    Ok(())
}
