use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
};

use crate::state::{AppState, Focus};
use crate::theme::theme;

/// What: Render the category picker; row 0 clears the filter.
pub fn render_categories(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let focused = app.focus == Focus::Categories;
    let active = app.query.category.clone();
    let mut items = vec![ListItem::new(Line::from(Span::styled(
        "All Categories",
        if active.is_none() {
            Style::default().fg(th.green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(th.text)
        },
    )))];
    items.extend(app.categories.iter().map(|c| {
        let style = if active.as_deref() == Some(c.name.as_str()) {
            Style::default().fg(th.green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(th.text)
        };
        ListItem::new(Line::from(vec![
            Span::styled(c.name.clone(), style),
            Span::styled(format!(" ({})", c.products), Style::default().fg(th.overlay1)),
        ]))
    }));
    if app.categories_loading {
        items.push(ListItem::new(Span::styled(
            "loading…",
            Style::default().fg(th.yellow),
        )));
    }
    let list = List::new(items)
        .style(Style::default().bg(th.base))
        .highlight_style(Style::default().bg(th.surface1))
        .block(
            Block::default()
                .title(Span::styled(" Categories ", Style::default().fg(th.mauve)))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(if focused { th.sapphire } else { th.overlay1 })),
        );
    f.render_stateful_widget(list, area, &mut app.category_state);
}
