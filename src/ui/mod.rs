//! TUI rendering for the catalog browser.
//!
//! Layout, top to bottom: search box, a middle row (categories, results and,
//! when open, the cart) and a one-line footer. Overlays are drawn last.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::state::{AppState, Focus};
use crate::theme::theme;

mod cart;
mod categories;
pub mod details;
mod modals;
mod results;
mod search;

pub use details::{NutritionRow, detail_lines, detail_text, nutrition_rows};
pub use modals::HELP_ROWS;

/// What: Draw one frame of the application.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Mutable state (list widgets keep scroll offsets in it)
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(area);

    search::render_search(f, app, rows[0]);

    let middle = if app.cart.is_open() {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(22),
                Constraint::Percentage(50),
                Constraint::Percentage(28),
            ])
            .split(rows[1])
    } else {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(25), Constraint::Percentage(75)])
            .split(rows[1])
    };
    categories::render_categories(f, app, middle[0]);
    results::render_results(f, app, middle[1]);
    if let Some(cart_area) = middle.get(2) {
        cart::render_cart(f, app, *cart_area);
    }

    render_footer(f, app, rows[2]);
    modals::render_modals(f, app, area);
}

/// What: Key hints for the focused pane, or the current toast.
fn render_footer(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let line = if let Some(msg) = &app.toast {
        Line::from(Span::styled(format!(" {msg}"), Style::default().fg(th.green)))
    } else {
        let hints = match app.focus {
            Focus::Search => "Enter search · Ctrl+T mode · Tab next pane · ? help",
            Focus::Categories => "Enter filter · ↑/↓ move · Tab next pane",
            Focus::Results => "Enter details · a add · m more · s sort · C cart",
            Focus::Cart => "+/- quantity · d remove · c clear · Tab next pane",
        };
        Line::from(vec![
            Span::styled(
                format!(" Cart: {} ", app.cart.total_item_count()),
                Style::default().fg(th.base).bg(th.peach),
            ),
            Span::styled(format!("  {hints}"), Style::default().fg(th.subtext0)),
        ])
    };
    f.render_widget(Paragraph::new(line).style(Style::default().bg(th.mantle)), area);
}

/// What: Rectangle of `pct_x` by `pct_y` percent centered in `area`.
pub(crate) fn centered_rect(pct_x: u16, pct_y: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(pct_y)])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Percentage(pct_x)])
        .flex(Flex::Center)
        .areas(row);
    rect
}
