//! UI module for rendering the TUI

mod components;
mod contact_form;
pub mod document;
mod field_renderer;
mod layout;
mod splash;
mod widgets;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

pub use layout::CHROME_HEIGHT;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if let View::Splash = app.state.current_view {
        if let Some(splash_state) = &app.splash_state {
            splash::draw(frame, area, splash_state);
        }
        return;
    }

    let (nav_area, main_area, status_area) = layout::create_layout(area);

    layout::draw_nav_bar(frame, nav_area, app);

    match app.state.current_view {
        View::Portfolio => document::draw(frame, main_area, app),
        View::Contact => contact_form::draw(frame, main_area, app),
        View::Splash => {}
    }

    layout::draw_status_bar(frame, status_area, app);

    // Submission results overlay everything until dismissed
    if let Some(notification) = app.state.contact.current_notification() {
        components::render_notification_dialog(
            frame,
            notification,
            app.state.contact.notification_count(),
            app.state.locale,
        );
    }
}
