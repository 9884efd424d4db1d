//! Product detail page: nutrition table, labels and metadata.
//!
//! The same line model backs the TUI modal and the plain-text CLI output.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::state::{AppState, Product};
use crate::theme::{Theme, theme};
use crate::util::{display_name, format_amount, grade_label, label_chip};

/// One row of the nutrition facts table.
#[derive(Clone, Debug, PartialEq)]
pub struct NutritionRow {
    /// Nutrient label.
    pub label: &'static str,
    /// Amount per 100 g; missing values are 0.
    pub value: f64,
    /// Unit suffix.
    pub unit: &'static str,
    /// Sub-row of the previous nutrient (saturated fat, sugars).
    pub indent: bool,
}

/// Nutrients shown in the table: label, nutriment key, unit, indented.
const NUTRIENTS: [(&str, &str, &str, bool); 7] = [
    ("Fat", "fat_100g", "g", false),
    ("Saturated Fat", "saturated-fat_100g", "g", true),
    ("Carbohydrates", "carbohydrates_100g", "g", false),
    ("Sugars", "sugars_100g", "g", true),
    ("Proteins", "proteins_100g", "g", false),
    ("Salt", "salt_100g", "g", false),
    ("Fiber", "fiber_100g", "g", false),
];

/// What: Build the nutrition facts table for a product.
///
/// Output:
/// - Energy first, then the fixed nutrient list. Missing or zero energy per
///   100 g falls back to the unscaled `energy-kcal` value.
#[must_use]
pub fn nutrition_rows(p: &Product) -> Vec<NutritionRow> {
    let energy = p
        .nutriment("energy-kcal_100g")
        .filter(|v| *v != 0.0)
        .or_else(|| p.nutriment("energy-kcal"))
        .unwrap_or(0.0);
    let mut rows = vec![NutritionRow {
        label: "Energy",
        value: energy,
        unit: "kcal",
        indent: false,
    }];
    rows.extend(NUTRIENTS.iter().map(|&(label, key, unit, indent)| NutritionRow {
        label,
        value: p.nutriment(key).unwrap_or(0.0),
        unit,
        indent,
    }));
    rows
}

fn text_or<'a>(v: Option<&'a str>, fallback: &'a str) -> &'a str {
    v.map(str::trim).filter(|s| !s.is_empty()).unwrap_or(fallback)
}

/// What: Styled lines of the detail page.
#[must_use]
pub fn detail_lines(p: &Product, th: &Theme) -> Vec<Line<'static>> {
    let label = Style::default().fg(th.subtext0);
    let value = Style::default().fg(th.text);
    let heading = Style::default().fg(th.mauve).add_modifier(Modifier::BOLD);
    let grade = grade_label(p);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" {grade} "),
                Style::default()
                    .fg(th.base)
                    .bg(th.grade_color(grade))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(
                display_name(p).to_string(),
                Style::default().fg(th.text).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            text_or(p.categories.as_deref(), "").to_string(),
            label,
        )),
        Line::default(),
        Line::from(Span::styled("Product Details", heading)),
    ];
    let nova = p.nova_group.map_or_else(|| "?".to_string(), |n| n.to_string());
    let eco = text_or(p.ecoscore_grade.as_deref(), "?").to_uppercase();
    for (k, v) in [
        ("Code", text_or(Some(&p.code), "?").to_string()),
        ("Brand", text_or(p.brands.as_deref(), "Unknown").to_string()),
        ("Quantity", text_or(p.quantity.as_deref(), "Unknown").to_string()),
        ("Nova Group", nova),
        ("EcoScore", eco),
    ] {
        lines.push(Line::from(vec![
            Span::styled(format!("  {k:<12}"), label),
            Span::styled(v, value),
        ]));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled("Ingredients", heading)));
    lines.push(Line::from(Span::styled(
        format!(
            "  {}",
            text_or(p.ingredients_text.as_deref(), "Ingredients list not available.")
        ),
        value,
    )));
    let chips: Vec<String> = p
        .labels_tags
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|t| label_chip(t))
        .collect();
    if !chips.is_empty() {
        let mut spans = vec![Span::raw("  ")];
        for c in chips {
            spans.push(Span::styled(format!("✓ {c}"), Style::default().fg(th.green)));
            spans.push(Span::raw("  "));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled("Nutrition Facts (per 100 g)", heading)));
    for row in nutrition_rows(p) {
        let (pad, style) = if row.indent {
            ("    ", label)
        } else {
            ("  ", value)
        };
        let name = format!("{pad}{}", row.label);
        lines.push(Line::from(vec![
            Span::styled(format!("{name:<20}"), style),
            Span::styled(format!("{} {}", format_amount(row.value), row.unit), style),
        ]));
    }
    lines.push(Line::from(Span::styled(
        "Values are approximate and based on available data.",
        Style::default().fg(th.overlay1),
    )));
    lines
}

/// What: Plain-text rendering of the detail page for terminal output.
#[must_use]
pub fn detail_text(p: &Product) -> String {
    let th = theme();
    detail_lines(p, &th)
        .iter()
        .map(|l| {
            l.spans
                .iter()
                .map(|s| s.content.as_ref())
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// What: Render the product detail modal.
///
/// Inputs:
/// - `f`: Frame to draw into
/// - `app`: State providing the product record and loading flag
/// - `area`: Full screen area; the modal is centered within it
/// - `code`, `scroll`: Product shown and scroll offset
pub fn render_details(f: &mut Frame, app: &AppState, area: Rect, code: &str, scroll: u16) {
    let th = theme();
    let rect = super::centered_rect(80, 85, area);
    f.render_widget(Clear, rect);
    let loading = app.details_loading.as_deref() == Some(code);
    let title = if loading {
        " Product · loading… ".to_string()
    } else {
        " Product ".to_string()
    };
    let lines = app.product_for(code).map_or_else(
        || {
            vec![Line::from(Span::styled(
                "Product not found",
                Style::default().fg(th.red),
            ))]
        },
        |p| detail_lines(p, &th),
    );
    let para = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .style(Style::default().fg(th.text).bg(th.mantle))
        .block(
            Block::default()
                .title(Span::styled(title, Style::default().fg(th.mauve)))
                .title_bottom(Line::from(" a: add to cart · ↑/↓ scroll · Esc: back ").centered())
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.sapphire)),
        );
    f.render_widget(para, rect);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Nutriments;

    #[test]
    /// What: Nutrition table uses 0 for missing values and the energy fallback
    ///
    /// Inputs:
    /// - Nutriments with `energy-kcal` only, fat and sugars
    ///
    /// Output:
    /// - Eight rows; energy from the fallback; missing nutrients at 0
    fn nutrition_rows_fallbacks() {
        let mut n = Nutriments::new();
        n.insert("energy-kcal".into(), 120.0);
        n.insert("fat_100g".into(), 3.5);
        n.insert("sugars_100g".into(), 12.0);
        let p = Product {
            nutriments: Some(n),
            ..Product::default()
        };
        let rows = nutrition_rows(&p);
        assert_eq!(rows.len(), 8);
        assert_eq!(rows[0].value, 120.0);
        assert_eq!(rows[0].unit, "kcal");
        assert_eq!(rows[1].value, 3.5);
        assert!(rows[4].indent);
        assert_eq!(rows[4].value, 12.0);
        assert_eq!(rows[7].label, "Fiber");
        assert_eq!(rows[7].value, 0.0);
    }

    #[test]
    /// What: Plain-text detail page shows fallbacks, labels and the grade badge
    ///
    /// Inputs:
    /// - Product with grade, labels, no ingredients, no nova group
    ///
    /// Output:
    /// - Text contains badge, label chips and fallback texts
    fn detail_text_contains_sections() {
        let p = Product {
            code: "3017620422003".into(),
            product_name: Some("Nutella".into()),
            nutrition_grades: Some("e".into()),
            labels_tags: Some(vec!["en:no-palm-oil".into(), "en:vegetarian".into()]),
            ecoscore_grade: Some("d".into()),
            ..Product::default()
        };
        let text = detail_text(&p);
        assert!(text.starts_with(" E  Nutella"));
        assert!(text.contains("Ingredients list not available."));
        assert!(text.contains("✓ no palm oil"));
        assert!(text.contains("EcoScore    D"));
        assert!(text.contains("Nova Group  ?"));
        assert!(text.contains("Energy"));
        assert!(text.contains("0 kcal"));
    }
}
