//! Library entry for NutriExplorer exposing the catalog pipeline, cart and TUI.

pub mod app;
pub mod args;
pub mod cart;
pub mod config;
pub mod events;
pub mod logic;
pub mod sources;
pub mod state;
pub mod theme;
pub mod ui;
pub mod util;

#[cfg(test)]
mod test_utils;
