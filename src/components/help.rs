// ABOUTME: Help overlay component listing the form's keyboard shortcuts

use super::palette::Palette;
use crate::models::Theme;
use ratatui::{
    prelude::*,
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem},
};

/// (keys, description) rows grouped under headings
const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Editing:",
        &[
            ("Tab / ↓", "Next input"),
            ("Shift+Tab / ↑", "Previous input"),
            ("← / →", "Change a dropdown choice"),
            ("Backspace", "Delete last character"),
            ("Ctrl+J", "New line (About Yourself)"),
            ("Ctrl+V", "Paste from clipboard"),
        ],
    ),
    (
        "Form:",
        &[
            ("Enter", "Next step / Submit / Add field"),
            ("Ctrl+A", "Add custom field"),
            ("Ctrl+R", "Clear the form"),
            ("Ctrl+Y", "Copy shareable link"),
        ],
    ),
    (
        "Display:",
        &[
            ("Ctrl+T", "Toggle dark / light mode"),
            ("F2 F3 F4", "Desktop / Laptop / Mobile view"),
        ],
    ),
    (
        "General:",
        &[("F1", "Toggle this help"), ("Esc / Ctrl+C", "Quit")],
    ),
];

pub struct HelpComponent;

impl HelpComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: Theme) {
        let palette = Palette::for_theme(theme);
        let popup_area = Self::centered_rect(60, 80, area);

        frame.render_widget(Clear, popup_area);

        let mut items = Vec::new();
        for (idx, (heading, rows)) in SECTIONS.iter().enumerate() {
            if idx > 0 {
                items.push(ListItem::new(""));
            }
            items.push(
                ListItem::new(*heading)
                    .style(Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)),
            );
            for (keys, description) in *rows {
                items.push(ListItem::new(format!("  {keys:<16} {description}")));
            }
        }

        let help_list = List::new(items)
            .style(Style::default().fg(palette.text).bg(palette.background))
            .block(
                Block::default()
                    .title("Help - Press F1 or Esc to close")
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(palette.focus)),
            );

        frame.render_widget(help_list, popup_area);
    }

    fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}

impl Default for HelpComponent {
    fn default() -> Self {
        Self::new()
    }
}
