//! Contact form page

use super::components::{render_button, ButtonLook, BUTTON_HEIGHT};
use super::field_renderer::draw_field;
use crate::app::App;
use crate::content::portfolio::{
    CANCEL_LABEL, EMAIL_LABEL, MESSAGE_LABEL, NAME_LABEL, NAME_REQUIRED, SEND_LABEL,
    SENDING_LABEL,
};
use crate::content::{Locale, Section};
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{ContactButton, ContactField};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Widest the form gets on large terminals
const MAX_FORM_WIDTH: u16 = 72;

/// Draw the contact form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let locale = app.state.locale;
    let controller = &app.state.contact;
    let form = &controller.form;

    let width = area.width.min(MAX_FORM_WIDTH);
    let area = Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    };

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", Section::Contact.heading().get(locale)),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Name
            Constraint::Length(3),             // Email
            Constraint::Min(5),                // Message
            Constraint::Length(BUTTON_HEIGHT), // Buttons
            Constraint::Length(1),             // Help text
        ])
        .margin(1)
        .split(area);

    let active = form.active_contact_field();
    let name_hint = controller
        .name_required()
        .then(|| NAME_REQUIRED.get(locale));

    draw_field(
        frame,
        chunks[0],
        NAME_LABEL.get(locale),
        form.field(ContactField::Name),
        active == Some(ContactField::Name),
        name_hint,
    );
    draw_field(
        frame,
        chunks[1],
        EMAIL_LABEL.get(locale),
        form.field(ContactField::Email),
        active == Some(ContactField::Email),
        None,
    );
    draw_field(
        frame,
        chunks[2],
        MESSAGE_LABEL.get(locale),
        form.field(ContactField::Message),
        active == Some(ContactField::Message),
        None,
    );

    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[3]);

    let on_buttons = form.is_buttons_row_active();
    render_button(
        frame,
        buttons[0],
        CANCEL_LABEL.get(locale),
        ButtonLook::of(on_buttons && form.selected_button == ContactButton::Back, false),
    );
    let send_label = if controller.is_submitting() {
        SENDING_LABEL.get(locale)
    } else {
        SEND_LABEL.get(locale)
    };
    render_button(
        frame,
        buttons[1],
        send_label,
        ButtonLook::of(
            on_buttons && form.selected_button == ContactButton::Send,
            controller.is_submitting(),
        ),
    );

    let (next, send, back) = match locale {
        Locale::En => (": next field  ", ": send  ", ": back"),
        Locale::Fr => (": champ suivant  ", ": envoyer  ", ": retour"),
    };
    let key = Style::default().fg(Color::Cyan);
    let help = Paragraph::new(Line::from(vec![
        Span::styled("Tab", key),
        Span::raw(next),
        Span::styled(SUBMIT_SHORTCUT, key),
        Span::raw(send),
        Span::styled("Esc", key),
        Span::raw(back),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[4]);
}
