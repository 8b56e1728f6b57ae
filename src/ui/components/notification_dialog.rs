//! Overlay announcing the result of a contact submission

use crate::content::Locale;
use crate::state::{Notification, NotificationKind};
use crate::ui::widgets::{text_width, wrap_text};
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph},
    Frame,
};

const MAX_WIDTH: u16 = 60;
/// Border plus horizontal padding on both sides
const FRAME_WIDTH: u16 = 6;

fn title(kind: NotificationKind, locale: Locale) -> &'static str {
    match (kind, locale) {
        (NotificationKind::Success, Locale::En) => "Message sent",
        (NotificationKind::Success, Locale::Fr) => "Message envoyé",
        (NotificationKind::Failure, Locale::En) => "Sending failed",
        (NotificationKind::Failure, Locale::Fr) => "Échec de l'envoi",
    }
}

fn accent(notification: &Notification) -> Color {
    if notification.is_failure() {
        Color::Red
    } else {
        Color::Green
    }
}

/// Heading with a count of the notifications waiting behind this one
fn heading(notification: &Notification, queued: usize, locale: Locale) -> String {
    let title = title(notification.kind, locale);
    match queued.saturating_sub(1) {
        0 => format!(" {title} "),
        waiting => format!(" {title} (+{waiting}) "),
    }
}

/// Body lines: wrapped message, then the dismiss hint
fn body(notification: &Notification, locale: Locale, wrap: usize) -> Vec<Line<'static>> {
    let key = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let dismiss = match locale {
        Locale::En => " close",
        Locale::Fr => " fermer",
    };

    let mut lines: Vec<Line> = wrap_text(notification.message(locale), wrap)
        .into_iter()
        .map(Line::from)
        .collect();
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled("Enter", key),
        Span::raw("/"),
        Span::styled("Esc", key),
        Span::styled(dismiss, Style::default().fg(Color::DarkGray)),
    ]));
    lines
}

/// Center a box of the given size inside `area`
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// Draw the notification over whatever is on screen.
///
/// `queued` counts every notification still to be dismissed, this one included.
pub fn render_notification_dialog(
    frame: &mut Frame,
    notification: &Notification,
    queued: usize,
    locale: Locale,
) {
    let screen = frame.area();
    let color = accent(notification);
    let header = heading(notification, queued, locale);
    let stamp = format!(" {} ", notification.raised_at.format("%H:%M:%S"));

    let wrap = MAX_WIDTH
        .min(screen.width)
        .saturating_sub(FRAME_WIDTH)
        .max(1) as usize;
    let lines = body(notification, locale, wrap);

    let inner_width = lines
        .iter()
        .map(|l| l.width() as u16)
        .chain([text_width(&header), text_width(&stamp)])
        .max()
        .unwrap_or(0);
    let width = (inner_width + FRAME_WIDTH).min(screen.width);
    let height = (lines.len() as u16 + 4).min(screen.height);
    let area = centered(screen, width, height);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
        .title(Span::styled(
            header,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .title_bottom(
            Line::from(Span::styled(stamp, Style::default().fg(Color::DarkGray))).right_aligned(),
        )
        .padding(Padding::new(2, 2, 1, 1))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
