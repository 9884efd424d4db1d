//! NutriExplorer binary entrypoint kept minimal. The runtime lives in the library.

use std::fmt;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use clap::Parser;

use nutriexplorer::args::{Args, apply_overrides, determine_log_level, process_args};
use nutriexplorer::cart::FileStorage;
use nutriexplorer::config::{ensure_settings_file, logs_dir, settings, settings_path, state_dir};
use nutriexplorer::sources::{DataSource, OpenFoodFactsClient};

struct NutriTimer;

impl tracing_subscriber::fmt::time::FormatTime for NutriTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Local::now().format("%Y-%m-%d-T %H:%M:%S");
        write!(w, "{ts}")
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Install the tracing subscriber writing to `<config>/logs/nutriexplorer.log`.
///
/// Details:
/// - `RUST_LOG` overrides `default_level`. Falls back to stderr when the log
///   file cannot be opened.
fn init_logging(default_level: &str) {
    let mut log_path = logs_dir();
    log_path.push("nutriexplorer.log");
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level))
    };
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(NutriTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(NutriTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logging(&determine_log_level(&args));

    let path = settings_path();
    ensure_settings_file(&path);
    let mut cfg = settings();
    apply_overrides(&args, &mut cfg);
    tracing::info!(base_url = %cfg.base_url, page_size = cfg.page_size, "NutriExplorer starting");

    let client = match OpenFoodFactsClient::new(
        &cfg.base_url,
        Duration::from_secs(cfg.request_timeout_secs),
    ) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "failed to build HTTP client");
            eprintln!("nutriexplorer: {e}");
            std::process::exit(1);
        }
    };
    let source: Arc<dyn DataSource> = Arc::new(client);
    let cart_dir = state_dir();

    if let Some(ok) = process_args(
        &args,
        &cfg,
        source.as_ref(),
        Box::new(FileStorage::new(cart_dir.clone())),
    )
    .await
    {
        tracing::info!(success = ok, "command finished");
        std::process::exit(i32::from(!ok));
    }

    if let Err(err) = nutriexplorer::app::run(cfg, source, Box::new(FileStorage::new(cart_dir))).await
    {
        tracing::error!(error = ?err, "Application error");
    }
    tracing::info!("NutriExplorer exited");
}
