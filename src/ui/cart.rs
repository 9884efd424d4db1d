use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

use crate::state::{AppState, Focus};
use crate::theme::theme;
use crate::util::{display_brand, display_name, grade_label, truncate_to_width};

/// What: Render the cart pane with quantities and the total item count.
pub fn render_cart(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let focused = app.focus == Focus::Cart;
    let block = Block::default()
        .title(Span::styled(
            format!(" Cart · {} items ", app.cart.total_item_count()),
            Style::default().fg(th.mauve),
        ))
        .title_bottom(Line::from(" +/- qty · d remove · c clear ").centered())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused { th.sapphire } else { th.overlay1 }));

    if app.cart.is_empty() {
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "Your cart is empty",
                Style::default().fg(th.subtext0),
            )))
            .style(Style::default().bg(th.base))
            .block(block),
            area,
        );
        return;
    }

    let items: Vec<ListItem> = app
        .cart
        .items()
        .iter()
        .map(|item| {
            let grade = grade_label(&item.product);
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        format!("{:>3} × ", item.quantity),
                        Style::default().fg(th.yellow).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        truncate_to_width(
                            display_name(&item.product),
                            usize::from(area.width.saturating_sub(10)),
                        ),
                        Style::default().fg(th.text),
                    ),
                ]),
                Line::from(vec![
                    Span::raw("      "),
                    Span::styled(
                        format!("{grade}"),
                        Style::default().fg(th.grade_color(grade)),
                    ),
                    Span::styled(
                        format!(" · {}", display_brand(&item.product)),
                        Style::default().fg(th.subtext0),
                    ),
                ]),
            ])
        })
        .collect();
    let list = List::new(items)
        .style(Style::default().bg(th.base))
        .highlight_style(Style::default().bg(th.surface1))
        .block(block);
    f.render_stateful_widget(list, area, &mut app.cart_state);
}
