// ABOUTME: Light and dark color palettes shared by all form components

use crate::models::Theme;
use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub input_bg: Color,
    pub placeholder: Color,
    pub help: Color,
    pub border: Color,
    pub focus: Color,
    pub error: Color,
    pub required: Color,
    pub accent: Color,
    pub success: Color,
}

const LIGHT: Palette = Palette {
    background: Color::Rgb(255, 255, 255),
    text: Color::Rgb(17, 24, 39),
    input_bg: Color::Rgb(255, 255, 255),
    placeholder: Color::Rgb(107, 114, 128),
    help: Color::Rgb(107, 114, 128),
    border: Color::Rgb(209, 213, 219),
    focus: Color::Rgb(59, 130, 246),
    error: Color::Rgb(220, 38, 38),
    required: Color::Rgb(239, 68, 68),
    accent: Color::Rgb(37, 99, 235),
    success: Color::Rgb(22, 163, 74),
};

const DARK: Palette = Palette {
    background: Color::Rgb(17, 24, 39),
    text: Color::Rgb(243, 244, 246),
    input_bg: Color::Rgb(31, 41, 55),
    placeholder: Color::Rgb(156, 163, 175),
    help: Color::Rgb(156, 163, 175),
    border: Color::Rgb(75, 85, 99),
    focus: Color::Rgb(96, 165, 250),
    error: Color::Rgb(248, 113, 113),
    required: Color::Rgb(239, 68, 68),
    accent: Color::Rgb(96, 165, 250),
    success: Color::Rgb(74, 222, 128),
};

impl Palette {
    pub const fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => LIGHT,
            Theme::Dark => DARK,
        }
    }
}
