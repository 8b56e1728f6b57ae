//! Field rendering for the contact form

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw a form field with its label in the border.
///
/// `hint` replaces the placeholder and turns the border red, e.g. for a
/// required field left empty.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    field: &FormField,
    is_active: bool,
    hint: Option<&str>,
) {
    let accent = match (hint.is_some(), is_active) {
        (true, _) => Color::Red,
        (false, true) => Color::Cyan,
        (false, false) => Color::DarkGray,
    };
    let style = Style::default().fg(if is_active { Color::White } else { Color::Gray });
    let cursor_style = Style::default().fg(Color::Cyan);
    let cursor = if is_active { "▌" } else { "" };

    let value = field.as_text();
    let content = if value.is_empty() && !is_active {
        Paragraph::new(Line::from(Span::styled(
            hint.unwrap_or("(empty)").to_string(),
            Style::default().fg(if hint.is_some() { Color::Red } else { Color::DarkGray }),
        )))
    } else if field.is_multiline {
        let mut lines: Vec<Line> = value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), style)))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans.push(Span::styled(cursor, cursor_style));
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(value.to_string(), style),
            Span::styled(cursor, cursor_style),
        ]))
    };

    let required_mark = if field.is_required { " *" } else { "" };
    let block = Block::default()
        .title(format!(" {label}{required_mark} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}
