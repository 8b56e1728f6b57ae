//! Layout components (navigation bar, status bar)

use crate::app::App;
use crate::content::portfolio::OWNER_NAME;
use crate::content::{Locale, Section};
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Rows taken by the navigation bar and the status bar
pub const CHROME_HEIGHT: u16 = 2;

/// Split the screen into navigation bar, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Navigation bar
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the navigation bar with section shortcuts and the language toggle
pub fn draw_nav_bar(frame: &mut Frame, area: Rect, app: &App) {
    let locale = app.state.locale;
    let current = match app.state.current_view {
        View::Contact => Section::Contact,
        _ => app.state.current_section(),
    };

    let mut spans = vec![
        Span::styled(
            format!(" {OWNER_NAME} "),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
    ];

    for section in Section::NAV {
        let key = section.nav_key().unwrap_or(' ');
        let label_style = if section == current {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(
            format!("{key}:"),
            Style::default().fg(Color::DarkGray),
        ));
        spans.push(Span::styled(section.nav_label().get(locale), label_style));
        spans.push(Span::raw("  "));
    }

    spans.push(Span::styled("t:", Style::default().fg(Color::DarkGray)));
    spans.push(Span::styled(
        format!("[{}]", locale.toggle_flag()),
        Style::default().fg(Color::Yellow),
    ));

    let nav = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(nav, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(" {} ", get_view_hints(app.state.current_view, app.state.locale)),
        Style::default().fg(Color::Black),
    )];

    if app.state.contact.is_submitting() {
        spans.push(Span::raw("| "));
        spans.push(Span::styled(
            crate::content::portfolio::SENDING_LABEL.get(app.state.locale),
            Style::default().fg(Color::Yellow),
        ));
        spans.push(Span::raw(" "));
    }

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw("| "));
        spans.push(Span::styled(msg.as_str(), Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: View, locale: Locale) -> String {
    match (view, locale) {
        (View::Splash, _) => "Press any key to skip".to_string(),
        (View::Portfolio, Locale::En) => {
            "j/k:scroll  1-5:section  c:contact  d:CV  g/i/m:copy  t:lang  q:quit".to_string()
        }
        (View::Portfolio, Locale::Fr) => {
            "j/k:défiler  1-5:section  c:contact  d:CV  g/i/m:copier  t:langue  q:quitter"
                .to_string()
        }
        (View::Contact, Locale::En) => format!(
            "Tab:next  {}:send  Esc:back",
            crate::platform::SUBMIT_SHORTCUT
        ),
        (View::Contact, Locale::Fr) => format!(
            "Tab:suivant  {}:envoyer  Esc:retour",
            crate::platform::SUBMIT_SHORTCUT
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_reserves_chrome_rows() {
        let (nav, content, status) = create_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(nav.height, 1);
        assert_eq!(status.height, 1);
        assert_eq!(content.height, 24 - CHROME_HEIGHT);
        assert_eq!(status.y, 23);
    }

    #[test]
    fn test_hints_follow_locale() {
        assert!(get_view_hints(View::Portfolio, Locale::En).contains("quit"));
        assert!(get_view_hints(View::Portfolio, Locale::Fr).contains("quitter"));
        assert!(get_view_hints(View::Contact, Locale::En).contains("send"));
    }
}
