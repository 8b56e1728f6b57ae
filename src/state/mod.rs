//! Application state module

mod app_state;
mod contact;
mod forms;
mod notification;
mod reveal;
mod splash_state;

pub use app_state::*;
pub use contact::*;
pub use forms::*;
pub use notification::*;
pub use reveal::*;
pub use splash_state::*;
