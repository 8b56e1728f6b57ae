//! Splash screen animation state

use std::time::{Duration, Instant};

/// Name held still on screen
const HOLD: Duration = Duration::from_millis(1300);
/// Name sliding off the top
const SLIDE: Duration = Duration::from_millis(800);

/// Animation phase for splash screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashPhase {
    /// Static name display
    Display,
    /// Name sliding upward
    ScrollUp,
    /// Animation finished
    Complete,
}

impl SplashPhase {
    /// Phase and slide progress (0..=1) after `elapsed`
    fn at(elapsed: Duration) -> (Self, f32) {
        match elapsed.checked_sub(HOLD) {
            None => (SplashPhase::Display, 0.0),
            Some(sliding) if sliding < SLIDE => (
                SplashPhase::ScrollUp,
                sliding.as_secs_f32() / SLIDE.as_secs_f32(),
            ),
            Some(_) => (SplashPhase::Complete, 1.0),
        }
    }
}

/// Splash screen animation state. Once complete, it stays complete.
#[derive(Debug)]
pub struct SplashState {
    start_time: Instant,
    phase: SplashPhase,
    /// Rows the name has moved up
    pub scroll_offset: f32,
}

impl SplashState {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            phase: SplashPhase::Display,
            scroll_offset: 0.0,
        }
    }

    /// Advance the animation to the current time
    pub fn update(&mut self, terminal_height: u16) {
        self.update_at(self.start_time.elapsed(), terminal_height);
    }

    fn update_at(&mut self, elapsed: Duration, terminal_height: u16) {
        if self.is_complete() {
            return;
        }
        let (phase, progress) = SplashPhase::at(elapsed);
        self.phase = phase;
        self.scroll_offset = simple_easing::cubic_out(progress) * f32::from(terminal_height);
    }

    /// Jump straight to the end (user pressed a key)
    pub fn skip(&mut self) {
        self.phase = SplashPhase::Complete;
    }

    pub fn phase(&self) -> SplashPhase {
        self.phase
    }

    pub fn is_complete(&self) -> bool {
        self.phase == SplashPhase::Complete
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_in_display_phase() {
        let state = SplashState::new();
        assert_eq!(state.phase(), SplashPhase::Display);
        assert_eq!(state.scroll_offset, 0.0);
        assert!(!state.is_complete());
    }

    #[test]
    fn test_update_stays_in_display_phase_initially() {
        let mut state = SplashState::new();
        state.update(24);
        assert_eq!(state.phase(), SplashPhase::Display);
        assert_eq!(state.scroll_offset, 0.0);
    }

    #[test]
    fn test_skip_survives_later_updates() {
        let mut state = SplashState::new();
        state.skip();
        state.update(24);
        state.update_at(Duration::ZERO, 24);
        assert!(state.is_complete());
    }

    #[test]
    fn test_scroll_up_phase_moves_name() {
        let mut state = SplashState::new();
        state.update_at(Duration::from_millis(1700), 40);
        assert_eq!(state.phase(), SplashPhase::ScrollUp);
        assert!(state.scroll_offset > 0.0);
        assert!(state.scroll_offset < 40.0);
    }

    #[test]
    fn test_completes_after_hold_and_slide() {
        let mut state = SplashState::new();
        state.update_at(HOLD + SLIDE, 40);
        assert!(state.is_complete());
        assert_eq!(state.scroll_offset, 40.0);
    }

    #[test]
    fn test_phase_boundaries() {
        assert_eq!(SplashPhase::at(HOLD - Duration::from_millis(1)).0, SplashPhase::Display);
        assert_eq!(SplashPhase::at(HOLD), (SplashPhase::ScrollUp, 0.0));
        assert_eq!(SplashPhase::at(HOLD + SLIDE).0, SplashPhase::Complete);
    }
}
