//! Form buttons

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Rows taken by a bordered button
pub const BUTTON_HEIGHT: u16 = 3;

/// How a button is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonLook {
    Idle,
    Focused,
    /// Shown while its action is running; keeps focus styling muted
    Busy,
}

impl ButtonLook {
    pub fn of(is_focused: bool, is_busy: bool) -> Self {
        match (is_busy, is_focused) {
            (true, _) => ButtonLook::Busy,
            (false, true) => ButtonLook::Focused,
            (false, false) => ButtonLook::Idle,
        }
    }

    fn styles(self) -> (Style, Style, BorderType) {
        match self {
            ButtonLook::Idle => (
                Style::default().fg(Color::DarkGray),
                Style::default().fg(Color::Gray),
                BorderType::Plain,
            ),
            ButtonLook::Focused => (
                Style::default().fg(Color::Cyan),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                BorderType::Thick,
            ),
            ButtonLook::Busy => (
                Style::default().fg(Color::Yellow),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
                BorderType::Plain,
            ),
        }
    }
}

/// Draw a centered label inside a bordered box
pub fn render_button(frame: &mut Frame, area: Rect, label: &str, look: ButtonLook) {
    let (border, text, border_type) = look.styles();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border);
    frame.render_widget(
        Paragraph::new(label).style(text).centered().block(block),
        area,
    );
}
