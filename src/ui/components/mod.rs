//! Reusable UI components

mod button;
mod notification_dialog;

pub use button::{render_button, ButtonLook, BUTTON_HEIGHT};
pub use notification_dialog::render_notification_dialog;
