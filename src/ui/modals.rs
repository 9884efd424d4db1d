use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::state::{AppState, Modal, SortMode};
use crate::theme::theme;

/// Key binding reference shown by the help overlay, as `(keys, action)`.
pub const HELP_ROWS: &[(&str, &str)] = &[
    ("Tab", "Cycle focus between panes"),
    ("Enter", "Submit search / pick category / open product"),
    ("Ctrl+T", "Toggle name and barcode search"),
    ("↑/↓  j/k", "Move highlight"),
    ("m", "Load more results"),
    ("s", "Choose sort order"),
    ("a  Space", "Add highlighted product to cart"),
    ("C", "Show or hide the cart"),
    ("+ / -", "Change cart quantity"),
    ("d  Del", "Remove cart line"),
    ("c", "Clear the cart"),
    ("?", "This help"),
    ("Esc", "Close overlay"),
    ("q  Ctrl+C", "Quit"),
];

/// What: Render whichever overlay is active; no-op for [`Modal::None`].
pub fn render_modals(f: &mut Frame, app: &AppState, area: Rect) {
    match &app.modal {
        Modal::None => {}
        Modal::Help => render_help(f, area),
        Modal::SortMenu { selected } => render_sort_menu(f, app.query.sort, *selected, area),
        Modal::ProductDetail { code, scroll } => {
            super::details::render_details(f, app, area, code, *scroll);
        }
    }
}

fn render_help(f: &mut Frame, area: Rect) {
    let th = theme();
    let rect = super::centered_rect(60, 70, area);
    f.render_widget(Clear, rect);
    let lines: Vec<Line> = HELP_ROWS
        .iter()
        .map(|(keys, action)| {
            Line::from(vec![
                Span::styled(
                    format!("{keys:<12}"),
                    Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD),
                ),
                Span::styled((*action).to_string(), Style::default().fg(th.text)),
            ])
        })
        .collect();
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .style(Style::default().bg(th.mantle))
            .block(
                Block::default()
                    .title(Span::styled(" Help ", Style::default().fg(th.mauve)))
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(th.sapphire)),
            ),
        rect,
    );
}

fn render_sort_menu(f: &mut Frame, current: SortMode, selected: usize, area: Rect) {
    let th = theme();
    let w = 34.min(area.width);
    let h = u16::try_from(SortMode::ALL.len() + 2).unwrap_or(6).min(area.height);
    let rect = Rect {
        x: area.x + area.width.saturating_sub(w) / 2,
        y: area.y + area.height.saturating_sub(h) / 2,
        width: w,
        height: h,
    };
    f.render_widget(Clear, rect);
    let items: Vec<ListItem> = SortMode::ALL
        .iter()
        .map(|m| {
            let mark = if *m == current { "● " } else { "  " };
            ListItem::new(Line::from(vec![
                Span::styled(mark, Style::default().fg(th.green)),
                Span::styled(m.label(), Style::default().fg(th.text)),
            ]))
        })
        .collect();
    let mut state = ListState::default().with_selected(Some(selected));
    let list = List::new(items)
        .style(Style::default().bg(th.mantle))
        .highlight_style(Style::default().bg(th.surface1))
        .block(
            Block::default()
                .title(Span::styled(" Sort by ", Style::default().fg(th.mauve)))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.sapphire)),
        );
    f.render_stateful_widget(list, rect, &mut state);
}
