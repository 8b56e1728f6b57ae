//! Portfolio content and localization

mod locale;
pub mod portfolio;

pub use locale::Locale;
pub use portfolio::Section;
