//! Application state definitions

use super::contact::ContactFormController;
use super::reveal::{reveal_at, scroll_progress, Reveal};
use crate::config::EmailJsCredentials;
use crate::content::{Locale, Section};

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Splash screen with name animation
    Splash,
    /// Scrollable portfolio document
    #[default]
    Portfolio,
    /// Contact form page
    Contact,
}

/// Measured size of the portfolio document for the current width and locale
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentMetrics {
    /// Total rendered rows
    pub height: u16,
    /// First row of each section
    pub anchors: Vec<(Section, u16)>,
}

impl DocumentMetrics {
    pub fn anchor(&self, section: Section) -> Option<u16> {
        self.anchors
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, row)| *row)
    }
}

/// Application state
#[derive(Debug)]
pub struct AppState {
    // Navigation
    pub current_view: View,

    /// Display language, read by every render function
    pub locale: Locale,

    // Document scrolling
    pub scroll_offset: u16,
    pub viewport_height: u16,
    pub metrics: DocumentMetrics,

    /// Contact form and its submissions
    pub contact: ContactFormController,

    /// Transient feedback shown in the status bar
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(locale: Locale, credentials: EmailJsCredentials) -> Self {
        Self {
            current_view: View::default(),
            locale,
            scroll_offset: 0,
            viewport_height: 0,
            metrics: DocumentMetrics::default(),
            contact: ContactFormController::new(credentials),
            status_message: None,
        }
    }

    pub fn toggle_locale(&mut self) {
        self.locale = self.locale.toggled();
    }

    /// Replace document metrics after a layout pass and re-clamp the offset
    pub fn set_metrics(&mut self, metrics: DocumentMetrics, viewport_height: u16) {
        self.metrics = metrics;
        self.viewport_height = viewport_height;
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
    }

    /// Largest offset that still fills the viewport
    pub fn max_scroll(&self) -> u16 {
        self.metrics.height.saturating_sub(self.viewport_height)
    }

    /// Scroll by a signed number of rows, clamped to the document
    pub fn scroll_by(&mut self, delta: i32) {
        let target = (self.scroll_offset as i32 + delta).clamp(0, self.max_scroll() as i32);
        self.scroll_offset = target as u16;
    }

    pub fn page_down(&mut self) {
        self.scroll_by(self.page_size());
    }

    pub fn page_up(&mut self) {
        self.scroll_by(-self.page_size());
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = self.max_scroll();
    }

    /// Scroll so a section's heading sits at the top (or as close as possible)
    pub fn jump_to(&mut self, section: Section) {
        if let Some(row) = self.metrics.anchor(section) {
            self.scroll_offset = row.min(self.max_scroll());
        }
    }

    /// Section whose anchor is the last one at or above the top row
    pub fn current_section(&self) -> Section {
        self.metrics
            .anchors
            .iter()
            .take_while(|(_, row)| *row <= self.scroll_offset)
            .last()
            .map(|(section, _)| *section)
            .unwrap_or(Section::Hero)
    }

    /// Reveal applied to sections after the hero
    pub fn reveal(&self) -> Reveal {
        reveal_at(scroll_progress(self.scroll_offset, self.max_scroll()))
    }

    fn page_size(&self) -> i32 {
        self.viewport_height.saturating_sub(1).max(1) as i32
    }
}
