// ABOUTME: Main layout component - header, step progress, form card, action bar and overlays

use ratatui::{
    prelude::*,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use super::form_field::{FieldProps, FormFieldComponent};
use super::palette::Palette;
use super::step_content::StepContent;
use super::HelpComponent;
use crate::app::state::{AppState, DraftInput, FocusTarget};
use crate::app::step::StepKind;
use crate::cli::show;
use crate::models::{FieldKey, SubmittedRecord, ViewMode};

const MIN_SUBMISSION_PANEL_HEIGHT: u16 = 6;

/// One stacked element of the form card
enum BodyItem<'a> {
    Field(FieldProps<'a>),
    DraftHeading,
    Draft {
        input: DraftInput,
        value: &'a str,
        focused: bool,
    },
    AddButton,
}

impl BodyItem<'_> {
    fn height(&self) -> u16 {
        match self {
            Self::Field(props) => FormFieldComponent::height(props) + 1,
            Self::DraftHeading => 2,
            Self::Draft { .. } => 3,
            Self::AddButton => 1,
        }
    }

    fn is_focused(&self) -> bool {
        match self {
            Self::Field(props) => props.focused,
            Self::Draft { focused, .. } => *focused,
            Self::DraftHeading | Self::AddButton => false,
        }
    }
}

pub struct LayoutComponent {
    form_field: FormFieldComponent,
    help: HelpComponent,
}

impl LayoutComponent {
    pub fn new() -> Self {
        Self {
            form_field: FormFieldComponent::new(),
            help: HelpComponent::new(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let area = frame.size();
        let palette = Palette::for_theme(state.theme());

        let background = Block::default().style(Style::default().bg(palette.background).fg(palette.text));
        frame.render_widget(background, area);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title and display toggles
                Constraint::Length(1), // Step progress
                Constraint::Min(8),    // Form card
                Constraint::Length(3), // Action bar
            ])
            .split(area);

        Self::render_header(frame, layout[0], state, &palette);
        Self::render_progress(frame, layout[1], state, &palette);
        self.render_card(frame, layout[2], state, &palette);
        Self::render_actions(frame, layout[3], state, &palette);

        if state.help_visible {
            self.help.render(frame, area, state.theme());
        }
    }

    fn render_header(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.border));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(24), Constraint::Min(10)])
            .split(inner);

        let title = Paragraph::new(Span::styled(
            " Internship Survey",
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(title, chunks[0]);

        let mut spans = Vec::new();
        for (mode, key) in ViewMode::all().iter().zip(["F2", "F3", "F4"]) {
            let style = if *mode == state.view_mode {
                Style::default().fg(palette.accent).add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(palette.accent)
            };
            spans.push(Span::styled(format!("[{key}] {}", mode.label()), style));
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            format!("[^T] {}", state.theme().toggle_label()),
            Style::default().fg(palette.help),
        ));
        spans.push(Span::raw(" "));

        let toggles = Paragraph::new(Line::from(spans)).alignment(Alignment::Right);
        frame.render_widget(toggles, chunks[1]);
    }

    fn render_progress(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
        let current = state.current_step().index();
        let steps = StepKind::all();

        let mut spans = Vec::new();
        for (idx, step) in steps.iter().enumerate() {
            let (icon, style) = if idx < current {
                ("●", Style::default().fg(palette.success))
            } else if idx == current {
                ("◉", Style::default().fg(palette.accent).add_modifier(Modifier::BOLD))
            } else {
                ("○", Style::default().fg(palette.placeholder))
            };
            spans.push(Span::styled(icon, style));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                step.title(),
                if idx == current {
                    Style::default().fg(palette.text).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(palette.placeholder)
                },
            ));
            if idx < steps.len() - 1 {
                spans.push(Span::styled(" → ", Style::default().fg(palette.border)));
            }
        }

        frame.render_widget(Paragraph::new(Line::from(spans)).alignment(Alignment::Center), area);
    }

    fn render_card(&self, frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
        let width = area.width.min(state.view_mode.max_width());
        let card_area = Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y,
            width,
            height: area.height,
        };

        let step = state.current_step();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.border))
            .title(format!(
                " Step {} of {}: {} ",
                step.index() + 1,
                StepKind::total(),
                step.title()
            ))
            .title_style(Style::default().fg(palette.text).add_modifier(Modifier::BOLD));
        let inner = block.inner(card_area);
        frame.render_widget(block, card_area);

        let inner = Rect {
            x: inner.x + 1,
            width: inner.width.saturating_sub(2),
            ..inner
        };

        let (fields_area, panel) = match state.submitted_record() {
            Some(record) if state.is_submitted() && inner.height > MIN_SUBMISSION_PANEL_HEIGHT + 4 => {
                let lines = Self::submission_lines(record, palette);
                // Panel never takes more than half the card; the field stack keeps the rest
                let height = (lines.len() as u16 + 2)
                    .min(inner.height / 2)
                    .max(MIN_SUBMISSION_PANEL_HEIGHT);
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Min(4), Constraint::Length(height)])
                    .split(inner);
                (chunks[0], Some((chunks[1], lines)))
            }
            _ => (inner, None),
        };

        let items = Self::body_items(state);
        self.render_items(frame, fields_area, &items, palette);

        if let Some((panel_area, lines)) = panel {
            Self::render_submission(frame, panel_area, lines, palette);
        }
    }

    fn body_items(state: &AppState) -> Vec<BodyItem<'_>> {
        let data = state.form_data();
        let errors = state.errors();
        let focused = state.focused();

        let mut items: Vec<BodyItem<'_>> = StepContent::resolve_step(state.current_step(), data, errors, state.theme())
            .into_iter()
            .chain(StepContent::resolve_custom(data, errors, state.theme()))
            .map(|mut props| {
                props.focused = match (props.key, focused) {
                    (FieldKey::Fixed(field), Some(FocusTarget::Fixed(target))) => field == target,
                    (FieldKey::Dynamic(index), Some(FocusTarget::Custom(target))) => index == target,
                    _ => false,
                };
                BodyItem::Field(props)
            })
            .collect();

        if state.current_step().is_terminal() {
            items.push(BodyItem::DraftHeading);
            for input in DraftInput::all() {
                items.push(BodyItem::Draft {
                    input: *input,
                    value: state.draft.get(*input),
                    focused: focused == Some(FocusTarget::Draft(*input)),
                });
            }
            items.push(BodyItem::AddButton);
        }

        items
    }

    /// Stack items top-down, skipping leading ones so the focused item stays visible
    fn render_items(&self, frame: &mut Frame, area: Rect, items: &[BodyItem<'_>], palette: &Palette) {
        let focus_end: u16 = items
            .iter()
            .position(BodyItem::is_focused)
            .map(|pos| items[..=pos].iter().map(BodyItem::height).sum())
            .unwrap_or(0);

        let mut skip = 0;
        let mut hidden: u16 = 0;
        while focus_end.saturating_sub(hidden) > area.height && skip < items.len() {
            hidden += items[skip].height();
            skip += 1;
        }

        let mut y = area.y;
        let bottom = area.y + area.height;
        for item in &items[skip..] {
            let height = item.height();
            if y + height > bottom {
                break;
            }
            let item_area = Rect {
                x: area.x,
                y,
                width: area.width,
                height,
            };
            self.render_item(frame, item_area, item, palette);
            y += height;
        }
    }

    fn render_item(&self, frame: &mut Frame, area: Rect, item: &BodyItem<'_>, palette: &Palette) {
        match item {
            BodyItem::Field(props) => {
                let field_area = Rect {
                    height: area.height.saturating_sub(1),
                    ..area
                };
                self.form_field.render(frame, field_area, props);
            }
            BodyItem::DraftHeading => {
                let heading = Paragraph::new(vec![
                    Line::from(""),
                    Line::from(Span::styled(
                        "Add a custom question",
                        Style::default().fg(palette.help).add_modifier(Modifier::ITALIC),
                    )),
                ]);
                frame.render_widget(heading, area);
            }
            BodyItem::Draft { input, value, focused } => {
                let border = if *focused { palette.focus } else { palette.border };
                let block = Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(border))
                    .style(Style::default().bg(palette.input_bg));
                let mut spans = if value.is_empty() {
                    vec![Span::styled(input.placeholder(), Style::default().fg(palette.placeholder))]
                } else {
                    vec![Span::styled(*value, Style::default().fg(palette.text))]
                };
                if *focused {
                    spans.push(Span::styled("▏", Style::default().fg(palette.focus)));
                }
                frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
            }
            BodyItem::AddButton => {
                let button = Paragraph::new(Span::styled(
                    " + Add Field (Ctrl+A) ",
                    Style::default().fg(palette.background).bg(palette.accent),
                ));
                frame.render_widget(button, area);
            }
        }
    }

    /// Link lines followed by the submitted record, as `show` prints it
    fn submission_lines<'a>(record: &'a SubmittedRecord, palette: &Palette) -> Vec<Line<'a>> {
        let mut lines = vec![
            Line::from(vec![
                Span::styled("Shareable Form ID: ", Style::default().fg(palette.help)),
                Span::styled(record.form_id.to_string(), Style::default().fg(palette.text)),
            ]),
            Line::from(vec![
                Span::styled("Access the form at: ", Style::default().fg(palette.help)),
                Span::styled(
                    record.shareable_url.as_str(),
                    Style::default().fg(palette.accent).add_modifier(Modifier::UNDERLINED),
                ),
            ]),
            Line::from(Span::styled(
                "Ctrl+Y copies the link",
                Style::default().fg(palette.placeholder),
            )),
        ];

        // The id and link are already shown above
        lines.extend(
            show::format_text(record)
                .lines()
                .skip(2)
                .map(|line| Line::from(Span::styled(line.to_string(), Style::default().fg(palette.text)))),
        );
        lines
    }

    fn render_submission(frame: &mut Frame, area: Rect, lines: Vec<Line<'_>>, palette: &Palette) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.success))
            .title(" Form submitted ")
            .title_style(Style::default().fg(palette.success).add_modifier(Modifier::BOLD));

        frame.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: false }), area);
    }

    fn render_actions(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(palette.border));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(inner);

        let primary = if state.current_step().is_terminal() {
            Span::styled(" [Enter] Submit ", Style::default().fg(palette.background).bg(palette.success))
        } else {
            Span::styled(" [Enter] Next ", Style::default().fg(palette.background).bg(palette.accent))
        };
        let buttons = Line::from(vec![
            Span::raw(" "),
            Span::styled(" [^R] Clear ", Style::default().fg(palette.background).bg(palette.required)),
            Span::raw("   "),
            primary,
            Span::raw("   "),
            Span::styled("[F1] help  [Esc] quit", Style::default().fg(palette.help)),
        ]);
        frame.render_widget(Paragraph::new(buttons), rows[0]);

        if let Some(message) = &state.status_message {
            let style = if state.errors().is_empty() {
                Style::default().fg(palette.success)
            } else {
                Style::default().fg(palette.error)
            };
            let status = Paragraph::new(Span::styled(format!(" {message}"), style));
            frame.render_widget(status, rows[1]);
        }
    }
}

impl Default for LayoutComponent {
    fn default() -> Self {
        Self::new()
    }
}
