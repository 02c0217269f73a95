// ABOUTME: Event handling system for keyboard input and form actions

use crate::app::AppState;
use crate::models::ViewMode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    ToggleHelp,
    // Focus movement
    FocusNext,
    FocusPrevious,
    // Editing the focused input
    InputChar(char),
    Backspace,
    InsertNewline,
    NextOption,
    PreviousOption,
    PasteText(String),
    // Form actions
    PrimaryAction, // Next, Submit or Add Field depending on focus
    AddCustomField,
    Clear,
    CopyShareLink,
    // Display
    ToggleTheme,
    SetViewMode(ViewMode),
}

pub struct EventHandler;

impl EventHandler {
    fn get_clipboard_text() -> Result<String, Box<dyn std::error::Error>> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        let text = clipboard.get_text()?;
        Ok(text)
    }

    pub fn handle_key_event(key_event: KeyEvent, state: &mut AppState) -> Option<AppEvent> {
        let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);

        if state.help_visible {
            return match key_event.code {
                KeyCode::F(1) | KeyCode::Esc => Some(AppEvent::ToggleHelp),
                KeyCode::Char('c') if ctrl => Some(AppEvent::Quit),
                _ => None,
            };
        }

        match key_event.code {
            KeyCode::Esc => Some(AppEvent::Quit),
            KeyCode::F(1) => Some(AppEvent::ToggleHelp),
            KeyCode::F(2) => Some(AppEvent::SetViewMode(ViewMode::Desktop)),
            KeyCode::F(3) => Some(AppEvent::SetViewMode(ViewMode::Laptop)),
            KeyCode::F(4) => Some(AppEvent::SetViewMode(ViewMode::Mobile)),

            KeyCode::Char(c) if ctrl => match c.to_ascii_lowercase() {
                'c' => Some(AppEvent::Quit),
                'a' => Some(AppEvent::AddCustomField),
                'r' => Some(AppEvent::Clear),
                't' => Some(AppEvent::ToggleTheme),
                'y' => Some(AppEvent::CopyShareLink),
                'j' => Some(AppEvent::InsertNewline),
                'v' => match Self::get_clipboard_text() {
                    Ok(text) => Some(AppEvent::PasteText(text)),
                    Err(e) => {
                        warn!("Failed to read clipboard: {}", e);
                        state.status_message = Some("Clipboard unavailable".to_string());
                        None
                    }
                },
                _ => None,
            },

            KeyCode::Tab | KeyCode::Down => Some(AppEvent::FocusNext),
            KeyCode::BackTab | KeyCode::Up => Some(AppEvent::FocusPrevious),
            KeyCode::Right if state.focused_is_select() => Some(AppEvent::NextOption),
            KeyCode::Left if state.focused_is_select() => Some(AppEvent::PreviousOption),
            KeyCode::Enter => Some(AppEvent::PrimaryAction),
            KeyCode::Backspace => Some(AppEvent::Backspace),
            KeyCode::Char(c) => Some(AppEvent::InputChar(c)),
            _ => None,
        }
    }

    pub fn process_event(event: AppEvent, state: &mut AppState) {
        debug!("Processing event: {:?}", event);
        match event {
            AppEvent::Quit => state.quit(),
            AppEvent::ToggleHelp => state.toggle_help(),
            AppEvent::FocusNext => state.focus_next(),
            AppEvent::FocusPrevious => state.focus_previous(),
            AppEvent::InputChar(c) => state.input_char(c),
            AppEvent::Backspace => state.backspace(),
            AppEvent::InsertNewline => state.insert_newline(),
            AppEvent::NextOption => state.cycle_option(true),
            AppEvent::PreviousOption => state.cycle_option(false),
            AppEvent::PasteText(text) => state.paste_text(&text),
            AppEvent::PrimaryAction => state.primary_action(),
            AppEvent::AddCustomField => {
                if !state.add_custom_field() {
                    state.status_message =
                        Some("Fill in Field Name, Help Text and Error Message first".to_string());
                }
            }
            AppEvent::Clear => state.clear(),
            AppEvent::CopyShareLink => state.copy_share_link(),
            AppEvent::ToggleTheme => state.toggle_theme(),
            AppEvent::SetViewMode(mode) => state.set_view_mode(mode),
        }
    }
}
