//! Interactive TUI application: terminal lifecycle and the async runtime.

/// Runtime event loop and background workers.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

pub use runtime::run;
