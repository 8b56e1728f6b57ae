//! Scroll-driven section reveal
//!
//! Sections after the hero fade in and grow as the reader scrolls through
//! the first fifth of the document.

/// Scroll progress at which sections are fully revealed
const REVEAL_END: f32 = 0.2;
/// Scale of a section before any scrolling
const MIN_SCALE: f32 = 0.8;

/// Visual state of a revealed section
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    /// 0.0 invisible, 1.0 fully visible
    pub opacity: f32,
    /// 0.8 shrunk, 1.0 full width
    pub scale: f32,
}

impl Reveal {
    pub const FULL: Reveal = Reveal {
        opacity: 1.0,
        scale: 1.0,
    };

    /// Horizontal margin on each side for a given full width
    pub fn margin(&self, width: u16) -> u16 {
        let shrink = (1.0 - self.scale).clamp(0.0, 1.0);
        ((width as f32 * shrink) / 2.0).round() as u16
    }

    /// Gray level (0-255) for body text at this opacity
    pub fn gray_level(&self, background: u8, foreground: u8) -> u8 {
        let t = self.opacity.clamp(0.0, 1.0);
        let level = background as f32 + (foreground as f32 - background as f32) * t;
        level.round() as u8
    }
}

/// Reveal for a scroll progress in `[0, 1]`; values outside are clamped
pub fn reveal_at(progress: f32) -> Reveal {
    let t = (progress / REVEAL_END).clamp(0.0, 1.0);
    let t = if t.is_nan() { 0.0 } else { t };
    Reveal {
        opacity: t,
        scale: MIN_SCALE + (1.0 - MIN_SCALE) * t,
    }
}

/// Scroll progress for an offset within a scrollable range
pub fn scroll_progress(offset: u16, max_offset: u16) -> f32 {
    if max_offset == 0 {
        // Nothing to scroll: show everything
        return 1.0;
    }
    (offset as f32 / max_offset as f32).clamp(0.0, 1.0)
}
