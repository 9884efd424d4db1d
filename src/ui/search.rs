use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::state::{AppState, Focus};
use crate::theme::theme;

/// What: Render the search input with its mode indicator.
///
/// Details:
/// - Places the terminal cursor after the typed text when focused.
pub fn render_search(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let focused = app.focus == Focus::Search;
    let title = format!(" Search · {} (Ctrl+T switches) ", app.input_mode.label());
    let para = Paragraph::new(Line::from(vec![
        Span::styled("> ", Style::default().fg(th.sapphire)),
        Span::styled(app.input.clone(), Style::default().fg(th.text)),
    ]))
    .style(Style::default().bg(th.base))
    .block(
        Block::default()
            .title(Span::styled(title, Style::default().fg(th.mauve)))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(if focused { th.sapphire } else { th.overlay1 })),
    );
    f.render_widget(para, area);
    if focused {
        let w = u16::try_from(app.input.width()).unwrap_or(u16::MAX);
        let x = area
            .x
            .saturating_add(3)
            .saturating_add(w)
            .min(area.right().saturating_sub(2));
        f.set_cursor_position(Position::new(x, area.y.saturating_add(1)));
    }
}
