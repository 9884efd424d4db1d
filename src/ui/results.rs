use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

use crate::state::{AppState, Focus, Product};
use crate::theme::{Theme, theme};
use crate::util::{category_chips, display_brand, display_name, grade_label, truncate_to_width};

/// Widest product name shown in a result row.
const NAME_WIDTH: usize = 48;

/// What: Build one result row: grade badge, name, brand and up to three category chips.
fn product_row(p: &Product, th: &Theme, in_cart: bool) -> ListItem<'static> {
    let grade = grade_label(p);
    let mut spans = vec![
        Span::styled(
            format!(" {grade} "),
            Style::default()
                .fg(th.base)
                .bg(th.grade_color(grade))
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            truncate_to_width(display_name(p), NAME_WIDTH),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", display_brand(p)),
            Style::default().fg(th.subtext0),
        ),
    ];
    for chip in category_chips(p, 3) {
        spans.push(Span::styled(
            format!("  #{chip}"),
            Style::default().fg(th.overlay1),
        ));
    }
    if in_cart {
        spans.push(Span::styled(
            "  [In cart]",
            Style::default().fg(th.green).add_modifier(Modifier::BOLD),
        ));
    }
    ListItem::new(Line::from(spans))
}

/// What: Title summarizing the active query.
fn results_title(app: &AppState) -> String {
    let q = &app.query;
    let scope = if !q.term.is_empty() {
        format!("{}: \"{}\"", q.mode.label(), q.term)
    } else if let Some(c) = &q.category {
        format!("Category: {c}")
    } else {
        "All products".to_string()
    };
    let loading = if q.loading { " · loading…" } else { "" };
    format!(
        " Results ({}) · {scope} · Sort: {}{loading} ",
        q.products.len(),
        q.sort.label()
    )
}

/// What: Render the product results pane.
///
/// Details:
/// - Shows "Loading products…" while the first page is in flight and
///   "No products found" for an empty settled list.
/// - Appends a load-more hint when another page may exist.
pub fn render_results(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let focused = app.focus == Focus::Results;
    let block = Block::default()
        .title(Span::styled(results_title(app), Style::default().fg(th.mauve)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused { th.sapphire } else { th.overlay1 }));

    if app.query.products.is_empty() {
        let msg = if app.query.loading {
            Span::styled("Loading products…", Style::default().fg(th.yellow))
        } else {
            Span::styled("No products found", Style::default().fg(th.subtext0))
        };
        f.render_widget(
            Paragraph::new(Line::from(msg).centered())
                .style(Style::default().bg(th.base))
                .block(block),
            area,
        );
        return;
    }

    let mut items: Vec<ListItem> = app
        .query
        .products
        .iter()
        .map(|p| product_row(p, &th, app.cart.get(&p.code).is_some()))
        .collect();
    if app.query.has_more {
        items.push(ListItem::new(Line::from(Span::styled(
            if app.query.loading {
                "  Loading more…"
            } else {
                "  ▼ More results available · press m to load more"
            },
            Style::default().fg(th.yellow),
        ))));
    }
    let list = List::new(items)
        .style(Style::default().fg(th.text).bg(th.base))
        .highlight_style(Style::default().bg(th.surface1))
        .highlight_symbol("▶ ")
        .block(block);
    f.render_stateful_widget(list, area, &mut app.list_state);
}
