// ABOUTME: Form field renderer - one labeled control with help and error text
// Purely presentational: no validation, no state

use super::palette::Palette;
use super::step_content::FieldKind;
use crate::models::{FieldKey, Theme};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

/// Placeholder shown by a select with no value
pub const SELECT_PLACEHOLDER: &str = "Select...";

/// Visible rows of a textarea
pub const TEXTAREA_ROWS: u16 = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldProps<'a> {
    pub key: FieldKey,
    pub label: &'a str,
    pub kind: FieldKind,
    pub value: &'a str,
    pub error: Option<&'a str>,
    pub required: bool,
    pub help_text: Option<&'a str>,
    pub options: &'a [&'a str],
    pub theme: Theme,
    pub focused: bool,
}

impl FieldProps<'_> {
    fn has_error(&self) -> bool {
        self.error.is_some_and(|e| !e.is_empty())
    }

    fn has_help(&self) -> bool {
        self.help_text.is_some_and(|h| !h.is_empty())
    }
}

pub struct FormFieldComponent;

impl FormFieldComponent {
    pub fn new() -> Self {
        Self
    }

    /// Rows needed to draw `props`, label through error line
    pub fn height(props: &FieldProps<'_>) -> u16 {
        1 + Self::control_height(props.kind)
            + u16::from(props.has_help())
            + u16::from(props.has_error())
    }

    fn control_height(kind: FieldKind) -> u16 {
        match kind {
            FieldKind::TextArea => TEXTAREA_ROWS + 2,
            _ => 3,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, props: &FieldProps<'_>) {
        let palette = Palette::for_theme(props.theme);

        let mut constraints = vec![
            Constraint::Length(1),
            Constraint::Length(Self::control_height(props.kind)),
        ];
        if props.has_help() {
            constraints.push(Constraint::Length(1));
        }
        if props.has_error() {
            constraints.push(Constraint::Length(1));
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        frame.render_widget(Self::label_line(props, &palette), chunks[0]);
        self.render_control(frame, chunks[1], props, &palette);

        let mut next = 2;
        if let Some(help) = props.help_text.filter(|h| !h.is_empty()) {
            let help_line =
                Paragraph::new(Span::styled(help, Style::default().fg(palette.help)));
            frame.render_widget(help_line, chunks[next]);
            next += 1;
        }
        if let Some(error) = props.error.filter(|e| !e.is_empty()) {
            let error_line =
                Paragraph::new(Span::styled(error, Style::default().fg(palette.error)));
            frame.render_widget(error_line, chunks[next]);
        }
    }

    fn label_line<'a>(props: &FieldProps<'a>, palette: &Palette) -> Paragraph<'a> {
        let mut spans = vec![Span::styled(
            props.label,
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        )];
        if props.required {
            spans.push(Span::raw(" "));
            spans.push(Span::styled("*", Style::default().fg(palette.required)));
        }
        Paragraph::new(Line::from(spans))
    }

    fn render_control(&self, frame: &mut Frame, area: Rect, props: &FieldProps<'_>, palette: &Palette) {
        let border_color = if props.has_error() {
            palette.error
        } else if props.focused {
            palette.focus
        } else {
            palette.border
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(palette.input_bg).fg(palette.text));
        if matches!(props.kind, FieldKind::Email | FieldKind::Tel) {
            block = block.title(format!(" {} ", props.kind.input_type()));
        }

        let placeholder_style = Style::default().fg(palette.placeholder);
        let value_style = Style::default().fg(palette.text);

        let content = match props.kind {
            FieldKind::Select => Self::select_line(props, palette),
            FieldKind::TextArea => {
                if props.value.is_empty() {
                    vec![Line::from(Span::styled(
                        props.help_text.unwrap_or_default(),
                        placeholder_style,
                    ))]
                } else {
                    let mut lines: Vec<Line> = props
                        .value
                        .split('\n')
                        .map(|line| Line::from(Span::styled(line, value_style)))
                        .collect();
                    // Keep the caret visible on the last line while typing
                    if props.focused {
                        if let Some(last) = lines.last_mut() {
                            last.spans.push(Span::styled("▏", Style::default().fg(palette.focus)));
                        }
                    }
                    lines
                }
            }
            FieldKind::Text | FieldKind::Email | FieldKind::Tel => {
                let mut spans = if props.value.is_empty() {
                    vec![Span::styled(props.help_text.unwrap_or_default(), placeholder_style)]
                } else {
                    vec![Span::styled(props.value, value_style)]
                };
                if props.focused {
                    spans.push(Span::styled("▏", Style::default().fg(palette.focus)));
                }
                vec![Line::from(spans)]
            }
        };

        let mut paragraph = Paragraph::new(content).block(block);
        if props.kind == FieldKind::TextArea {
            let inner_height = Self::control_height(props.kind).saturating_sub(2);
            let line_count = u16::try_from(props.value.split('\n').count()).unwrap_or(u16::MAX);
            paragraph = paragraph
                .wrap(Wrap { trim: false })
                .scroll((line_count.saturating_sub(inner_height), 0));
        }
        frame.render_widget(paragraph, area);
    }

    fn select_line<'a>(props: &FieldProps<'a>, palette: &Palette) -> Vec<Line<'a>> {
        let mut spans = if props.value.is_empty() {
            vec![Span::styled(SELECT_PLACEHOLDER, Style::default().fg(palette.placeholder))]
        } else {
            vec![Span::styled(props.value, Style::default().fg(palette.text))]
        };

        spans.push(Span::styled("   ◀ ", Style::default().fg(palette.border)));
        for (idx, option) in props.options.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled(" | ", Style::default().fg(palette.border)));
            }
            let style = if *option == props.value {
                Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.help)
            };
            spans.push(Span::styled(*option, style));
        }
        spans.push(Span::styled(" ▶", Style::default().fg(palette.border)));

        vec![Line::from(spans)]
    }
}

impl Default for FormFieldComponent {
    fn default() -> Self {
        Self::new()
    }
}
