//! Command-line argument parsing and one-shot commands.

pub mod cart;
pub mod categories;
pub mod definition;
pub mod product;
pub mod search;
pub mod utils;

pub use definition::{Args, process_args};
pub use utils::{apply_overrides, determine_log_level};
