//! Color palette used by the terminal UI.

use ratatui::style::Color;

/// Application theme palette (Catppuccin Mocha defaults).
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Slightly lighter background layer used behind panels.
    pub mantle: Color,
    /// Subtle surface color for selected rows.
    pub surface1: Color,
    /// Muted border color for unfocused panes.
    pub overlay1: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for brands and captions.
    pub subtext0: Color,
    /// Accent for the focused pane border and highlights.
    pub sapphire: Color,
    /// Accent for titles.
    pub mauve: Color,
    /// Grade A and success messages.
    pub green: Color,
    /// Grade B.
    pub teal: Color,
    /// Grade C and loading indicators.
    pub yellow: Color,
    /// Grade D.
    pub peach: Color,
    /// Grade E and destructive actions.
    pub red: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            base: Color::Rgb(0x1e, 0x1e, 0x2e),
            mantle: Color::Rgb(0x18, 0x18, 0x25),
            surface1: Color::Rgb(0x45, 0x47, 0x5a),
            overlay1: Color::Rgb(0x7f, 0x84, 0x9c),
            text: Color::Rgb(0xcd, 0xd6, 0xf4),
            subtext0: Color::Rgb(0xa6, 0xad, 0xc8),
            sapphire: Color::Rgb(0x74, 0xc7, 0xec),
            mauve: Color::Rgb(0xcb, 0xa6, 0xf7),
            green: Color::Rgb(0xa6, 0xe3, 0xa1),
            teal: Color::Rgb(0x94, 0xe2, 0xd5),
            yellow: Color::Rgb(0xf9, 0xe2, 0xaf),
            peach: Color::Rgb(0xfa, 0xb3, 0x87),
            red: Color::Rgb(0xf3, 0x8b, 0xa8),
        }
    }
}

impl Theme {
    /// What: Badge color for a grade label (`A`..`E` or `?`).
    #[must_use]
    pub const fn grade_color(&self, grade: char) -> Color {
        match grade {
            'A' => self.green,
            'B' => self.teal,
            'C' => self.yellow,
            'D' => self.peach,
            'E' => self.red,
            _ => self.overlay1,
        }
    }
}

/// What: Current theme.
#[must_use]
pub fn theme() -> Theme {
    Theme::default()
}
