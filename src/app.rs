//! Application state and core logic

use crate::config::{EmailJsCredentials, PortfolioConfig};
use crate::content::portfolio::social_link_for_key;
use crate::content::{Locale, Section};
use crate::cv;
use crate::email::{DispatchError, EmailDispatcher, EmailJsClient};
use crate::platform::SUBMIT_MODIFIER;
use crate::state::{AppState, ContactButton, ContactError, Form, SplashState, View};
use crate::ui::{self, CHROME_HEIGHT};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use uuid::Uuid;

/// Rows moved per mouse wheel notch
const WHEEL_STEP: i32 = 3;

/// Result of a dispatched submission, sent back from its task
#[derive(Debug)]
pub struct SubmissionOutcome {
    pub id: Uuid,
    pub result: Result<(), DispatchError>,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Email provider used for contact submissions
    dispatcher: Arc<dyn EmailDispatcher>,
    outcome_tx: UnboundedSender<SubmissionOutcome>,
    outcome_rx: UnboundedReceiver<SubmissionOutcome>,
    /// Source of the CV download
    cv_path: PathBuf,
    /// Where the CV is exported; the platform download dir when None
    download_dir: Option<PathBuf>,
    /// Whether the app should quit
    quit: bool,
    /// Splash screen animation state
    pub splash_state: Option<SplashState>,
    /// Terminal size (height, width)
    pub terminal_size: Option<(u16, u16)>,
}

impl App {
    /// Create the app from preferences and credentials, starting on the splash
    pub fn new(config: &PortfolioConfig, credentials: EmailJsCredentials) -> Self {
        let dispatcher = Arc::new(EmailJsClient::new(config.api_url()));
        let mut app = Self::with_dispatcher(config.locale(), credentials, dispatcher);
        app.cv_path = config.cv_path();
        app.state.current_view = View::Splash;
        app.splash_state = Some(SplashState::new());
        app
    }

    /// Create the app around any email provider, starting on the portfolio
    pub fn with_dispatcher(
        locale: Locale,
        credentials: EmailJsCredentials,
        dispatcher: Arc<dyn EmailDispatcher>,
    ) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(locale, credentials),
            dispatcher,
            outcome_tx,
            outcome_rx,
            cv_path: PathBuf::from(crate::content::portfolio::CV_FILE_NAME),
            download_dir: None,
            quit: false,
            splash_state: None,
            terminal_size: None,
        }
    }

    /// Update splash animation state
    /// Returns true if animation is complete and we should transition
    pub fn update_splash(&mut self, terminal_height: u16) -> bool {
        if let Some(ref mut splash) = self.splash_state {
            splash.update(terminal_height);
            if splash.is_complete() {
                self.splash_state = None;
                self.state.current_view = View::Portfolio;
                return true;
            }
        }
        false
    }

    /// Check if in splash screen
    pub fn in_splash(&self) -> bool {
        matches!(self.state.current_view, View::Splash)
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Re-measure the document for the terminal size
    pub fn sync_layout(&mut self, height: u16, width: u16) {
        self.terminal_size = Some((height, width));
        let metrics = ui::document::measure(self.state.locale, width);
        self.state
            .set_metrics(metrics, height.saturating_sub(CHROME_HEIGHT));
    }

    /// Apply every submission outcome that has arrived. Returns how many.
    pub fn poll_submissions(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.apply_outcome(outcome);
            applied += 1;
        }
        applied
    }

    fn apply_outcome(&mut self, outcome: SubmissionOutcome) {
        self.state
            .contact
            .complete_submission(outcome.id, outcome.result);
    }

    /// Validate the form and hand it to a background task
    fn submit_contact(&mut self) {
        let pending = match self.state.contact.begin_submit() {
            Ok(pending) => pending,
            Err(ContactError::MissingName) => return,
        };

        let dispatcher = Arc::clone(&self.dispatcher);
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let result = pending.dispatch(dispatcher.as_ref()).await;
            // Receiver only goes away on shutdown
            let _ = tx.send(SubmissionOutcome {
                id: pending.id,
                result,
            });
        });
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if self.in_splash() {
            if let Some(ref mut splash) = self.splash_state {
                splash.skip();
            }
            self.update_splash(0);
            return Ok(());
        }

        // An open notification takes every key until dismissed
        if self.state.contact.current_notification().is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.contact.dismiss_notification();
            }
            return Ok(());
        }

        match self.state.current_view {
            View::Portfolio => self.handle_portfolio_key(key),
            View::Contact => {
                self.handle_contact_key(key);
                Ok(())
            }
            View::Splash => Ok(()),
        }
    }

    fn handle_portfolio_key(&mut self, key: KeyEvent) -> Result<()> {
        self.state.status_message = None;

        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.state.scroll_by(-1),
            KeyCode::Down | KeyCode::Char('j') => self.state.scroll_by(1),
            KeyCode::PageUp => self.state.page_up(),
            KeyCode::PageDown | KeyCode::Char(' ') => self.state.page_down(),
            KeyCode::Home => self.state.scroll_to_top(),
            KeyCode::End => self.state.scroll_to_bottom(),
            KeyCode::Char('t') => self.toggle_locale(),
            KeyCode::Char('c') | KeyCode::Enter => {
                self.state.current_view = View::Contact;
            }
            KeyCode::Char('d') => self.download_cv(),
            KeyCode::Char(c) => {
                if let Some(section) = Section::from_nav_key(c) {
                    if section == Section::Contact {
                        self.state.current_view = View::Contact;
                    } else {
                        self.state.jump_to(section);
                    }
                } else if let Some(link) = social_link_for_key(c) {
                    self.state.status_message = Some(match self.copy_to_clipboard(link.target) {
                        Ok(()) => format!("Copied {}", link.label),
                        Err(e) => {
                            tracing::warn!("clipboard unavailable: {e}");
                            format!("{}: {}", link.label, link.target)
                        }
                    });
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_contact_key(&mut self, key: KeyEvent) {
        let is_submit_shortcut = key.code == KeyCode::Char('s')
            && (key.modifiers.contains(SUBMIT_MODIFIER)
                || key.modifiers.contains(KeyModifiers::CONTROL));
        if is_submit_shortcut {
            self.submit_contact();
            return;
        }

        match key.code {
            KeyCode::Esc => self.state.current_view = View::Portfolio,
            KeyCode::Tab => self.state.contact.form.next_field(),
            KeyCode::BackTab => self.state.contact.form.prev_field(),
            _ if self.state.contact.form.is_buttons_row_active() => self.handle_button_key(key),
            _ => self.handle_field_key(key),
        }
    }

    fn handle_button_key(&mut self, key: KeyEvent) {
        let selected = self.state.contact.form.selected_button;
        match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Char('h') | KeyCode::Char('l') => {
                self.state.contact.form.next_button()
            }
            KeyCode::Up => self.state.contact.form.prev_field(),
            KeyCode::Enter => match selected {
                ContactButton::Send => self.submit_contact(),
                ContactButton::Back => self.state.current_view = View::Portfolio,
            },
            _ => {}
        }
    }

    fn handle_field_key(&mut self, key: KeyEvent) {
        let Some(field) = self.state.contact.form.active_contact_field() else {
            return;
        };
        let is_multiline = self.state.contact.form.is_active_field_multiline();

        match key.code {
            KeyCode::Enter if is_multiline => self.state.contact.push_char(field, '\n'),
            KeyCode::Enter | KeyCode::Down => self.state.contact.form.next_field(),
            KeyCode::Up => self.state.contact.form.prev_field(),
            KeyCode::Backspace => self.state.contact.pop_char(field),
            KeyCode::Char(c)
                if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.state.contact.push_char(field, c)
            }
            _ => {}
        }
    }

    /// Handle mouse wheel scrolling on the document
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.state.current_view != View::Portfolio {
            return;
        }
        match mouse.kind {
            MouseEventKind::ScrollDown => self.state.scroll_by(WHEEL_STEP),
            MouseEventKind::ScrollUp => self.state.scroll_by(-WHEEL_STEP),
            _ => {}
        }
    }

    fn toggle_locale(&mut self) {
        self.state.toggle_locale();
        tracing::debug!(locale = ?self.state.locale, "switched language");
        if let Some((height, width)) = self.terminal_size {
            self.sync_layout(height, width);
        }
    }

    fn download_cv(&mut self) {
        let result = match &self.download_dir {
            Some(dir) => cv::export_cv(&self.cv_path, dir),
            None => cv::default_download_dir().and_then(|dir| cv::export_cv(&self.cv_path, &dir)),
        };
        self.state.status_message = Some(match result {
            Ok(path) => format!("CV → {}", path.display()),
            Err(e) => {
                tracing::warn!("CV download failed: {e}");
                e.to_string()
            }
        });
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::email::{MockEmailDispatcher, TemplateParams};
    use crate::state::{ContactField, NotificationKind};
    use async_trait::async_trait;
    use std::sync::Mutex;
    use tokio::sync::oneshot;

    fn credentials() -> EmailJsCredentials {
        EmailJsCredentials {
            service_id: "service_abc".to_string(),
            template_id: "template_xyz".to_string(),
            public_key: "public_123".to_string(),
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).unwrap();
        }
    }

    fn app_with(dispatcher: impl EmailDispatcher + 'static) -> App {
        let mut app = App::with_dispatcher(Locale::En, credentials(), Arc::new(dispatcher));
        app.sync_layout(24, 80);
        app
    }

    /// Opens the form and fills Alice / a@x.com / Hi through key events
    fn fill_contact_form(app: &mut App) {
        app.handle_key(key(KeyCode::Char('c'))).unwrap();
        type_text(app, "Alice");
        app.handle_key(key(KeyCode::Tab)).unwrap();
        type_text(app, "a@x.com");
        app.handle_key(key(KeyCode::Tab)).unwrap();
        type_text(app, "Hi");
    }

    async fn next_outcome(app: &mut App) {
        let outcome = app.outcome_rx.recv().await.unwrap();
        app.apply_outcome(outcome);
    }

    /// Holds each send open until the test releases it
    struct GatedDispatcher {
        gates: Mutex<Vec<oneshot::Receiver<Result<(), DispatchError>>>>,
        calls: Mutex<Vec<TemplateParams>>,
    }

    impl GatedDispatcher {
        fn new(count: usize) -> (Self, Vec<oneshot::Sender<Result<(), DispatchError>>>) {
            let (senders, receivers): (Vec<_>, Vec<_>) =
                (0..count).map(|_| oneshot::channel()).unzip();
            (
                Self {
                    gates: Mutex::new(receivers),
                    calls: Mutex::new(Vec::new()),
                },
                senders,
            )
        }
    }

    #[async_trait]
    impl EmailDispatcher for GatedDispatcher {
        async fn send(
            &self,
            _service_id: &str,
            _template_id: &str,
            params: &TemplateParams,
            _public_key: &str,
        ) -> Result<(), DispatchError> {
            let gate = {
                self.calls.lock().unwrap().push(params.clone());
                self.gates.lock().unwrap().remove(0)
            };
            gate.await
                .unwrap_or_else(|_| Err(DispatchError::Transport("gate dropped".to_string())))
        }
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_starts_on_splash() {
            let app = App::new(&PortfolioConfig::default(), credentials());
            assert!(app.in_splash());
            assert!(app.splash_state.is_some());
            assert_eq!(app.state.locale, Locale::Fr);
        }

        #[test]
        fn test_any_key_skips_splash() {
            let mut app = App::new(&PortfolioConfig::default(), credentials());
            app.handle_key(key(KeyCode::Char('x'))).unwrap();
            assert!(!app.in_splash());
            assert_eq!(app.state.current_view, View::Portfolio);
            assert!(app.splash_state.is_none());
        }

        #[test]
        fn test_skipped_splash_stays_done_on_next_tick() {
            let mut app = App::new(&PortfolioConfig::default(), credentials());
            assert!(!app.update_splash(24));
            assert!(app.in_splash());

            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert!(!app.update_splash(24));
            assert!(!app.in_splash());
            assert_eq!(app.state.current_view, View::Portfolio);
        }

        #[test]
        fn test_quit_key() {
            let mut app = app_with(MockEmailDispatcher::new());
            assert!(!app.should_quit());
            app.handle_key(key(KeyCode::Char('q'))).unwrap();
            assert!(app.should_quit());
        }

        #[test]
        fn test_scroll_keys_and_wheel() {
            let mut app = app_with(MockEmailDispatcher::new());
            app.handle_key(key(KeyCode::Char('j'))).unwrap();
            app.handle_key(key(KeyCode::Down)).unwrap();
            assert_eq!(app.state.scroll_offset, 2);

            app.handle_mouse(MouseEvent {
                kind: MouseEventKind::ScrollDown,
                column: 0,
                row: 0,
                modifiers: KeyModifiers::NONE,
            });
            assert_eq!(app.state.scroll_offset, 2 + WHEEL_STEP as u16);

            app.handle_key(key(KeyCode::End)).unwrap();
            assert_eq!(app.state.scroll_offset, app.state.max_scroll());
            app.handle_key(key(KeyCode::Home)).unwrap();
            assert_eq!(app.state.scroll_offset, 0);
        }

        #[test]
        fn test_number_keys_jump_to_sections() {
            let mut app = app_with(MockEmailDispatcher::new());
            app.handle_key(key(KeyCode::Char('3'))).unwrap();
            let skills = app.state.metrics.anchor(Section::Skills).unwrap();
            assert_eq!(app.state.scroll_offset, skills.min(app.state.max_scroll()));
        }

        #[test]
        fn test_contact_key_opens_form() {
            let mut app = app_with(MockEmailDispatcher::new());
            app.handle_key(key(KeyCode::Char('5'))).unwrap();
            assert_eq!(app.state.current_view, View::Contact);
            app.handle_key(key(KeyCode::Esc)).unwrap();
            assert_eq!(app.state.current_view, View::Portfolio);
        }

        #[test]
        fn test_toggle_locale_remeasures() {
            let mut app = app_with(MockEmailDispatcher::new());
            app.handle_key(key(KeyCode::Char('t'))).unwrap();
            assert_eq!(app.state.locale, Locale::Fr);
            assert_eq!(
                app.state.metrics,
                ui::document::measure(Locale::Fr, 80)
            );
        }

        #[test]
        fn test_download_cv_reports_missing_file() {
            let mut app = app_with(MockEmailDispatcher::new());
            app.cv_path = std::env::temp_dir().join(format!("missing-{}.pdf", Uuid::new_v4()));
            app.download_dir = Some(std::env::temp_dir());
            app.handle_key(key(KeyCode::Char('d'))).unwrap();
            let message = app.state.status_message.clone().unwrap();
            assert!(message.contains("CV not found"));
        }

        #[test]
        fn test_download_cv_exports_file() {
            let root = std::env::temp_dir().join(format!("portfolio-tui-app-{}", Uuid::new_v4()));
            std::fs::create_dir_all(&root).unwrap();
            let source = root.join("cv.pdf");
            std::fs::write(&source, b"%PDF").unwrap();

            let mut app = app_with(MockEmailDispatcher::new());
            app.cv_path = source;
            app.download_dir = Some(root.join("downloads"));
            app.handle_key(key(KeyCode::Char('d'))).unwrap();

            assert!(root.join("downloads").join("cv.pdf").is_file());
            std::fs::remove_dir_all(&root).unwrap();
        }
    }

    mod contact_form {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_typing_fills_active_field() {
            let mut app = app_with(MockEmailDispatcher::new());
            fill_contact_form(&mut app);
            assert_eq!(app.state.contact.form.values(), ("Alice", "a@x.com", "Hi"));
        }

        #[test]
        fn test_enter_in_message_inserts_newline() {
            let mut app = app_with(MockEmailDispatcher::new());
            fill_contact_form(&mut app);
            app.handle_key(key(KeyCode::Enter)).unwrap();
            type_text(&mut app, "Bye");
            assert_eq!(app.state.contact.form.message.as_text(), "Hi\nBye");
        }

        #[test]
        fn test_enter_in_name_moves_to_next_field() {
            let mut app = app_with(MockEmailDispatcher::new());
            app.handle_key(key(KeyCode::Char('c'))).unwrap();
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert_eq!(
                app.state.contact.form.active_contact_field(),
                Some(ContactField::Email)
            );
        }

        #[test]
        fn test_backspace_removes_last_char() {
            let mut app = app_with(MockEmailDispatcher::new());
            app.handle_key(key(KeyCode::Char('c'))).unwrap();
            type_text(&mut app, "Alicex");
            app.handle_key(key(KeyCode::Backspace)).unwrap();
            assert_eq!(app.state.contact.form.name.as_text(), "Alice");
        }

        #[test]
        fn test_form_keys_do_not_trigger_portfolio_shortcuts() {
            let mut app = app_with(MockEmailDispatcher::new());
            app.handle_key(key(KeyCode::Char('c'))).unwrap();
            type_text(&mut app, "qt");
            assert!(!app.should_quit());
            assert_eq!(app.state.locale, Locale::En);
            assert_eq!(app.state.contact.form.name.as_text(), "qt");
        }

        #[test]
        fn test_back_button_returns_to_portfolio() {
            let mut app = app_with(MockEmailDispatcher::new());
            app.handle_key(key(KeyCode::Char('c'))).unwrap();
            app.handle_key(key(KeyCode::BackTab)).unwrap();
            app.handle_key(key(KeyCode::Left)).unwrap();
            assert_eq!(app.state.contact.form.selected_button, ContactButton::Back);
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert_eq!(app.state.current_view, View::Portfolio);
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_successful_send_resets_form() {
            let mut dispatcher = MockEmailDispatcher::new();
            dispatcher
                .expect_send()
                .times(1)
                .returning(|service_id, template_id, params, public_key| {
                    assert_eq!(service_id, "service_abc");
                    assert_eq!(template_id, "template_xyz");
                    assert_eq!(public_key, "public_123");
                    assert_eq!(params.from_name, "Alice");
                    assert_eq!(params.to_name, "Matteo");
                    Ok(())
                });
            let mut app = app_with(dispatcher);
            fill_contact_form(&mut app);

            app.handle_key(ctrl('s')).unwrap();
            assert!(app.state.contact.is_submitting());

            next_outcome(&mut app).await;

            assert_eq!(app.state.contact.form.values(), ("", "", ""));
            assert!(!app.state.contact.is_submitting());
            assert_eq!(app.state.contact.notification_count(), 1);
            assert_eq!(
                app.state.contact.current_notification().map(|n| n.kind),
                Some(NotificationKind::Success)
            );
        }

        #[tokio::test]
        async fn test_failed_send_keeps_input() {
            let mut dispatcher = MockEmailDispatcher::new();
            dispatcher.expect_send().times(1).returning(|_, _, _, _| {
                Err(DispatchError::Transport("network unreachable".to_string()))
            });
            let mut app = app_with(dispatcher);
            fill_contact_form(&mut app);

            app.handle_key(ctrl('s')).unwrap();
            next_outcome(&mut app).await;

            assert_eq!(app.state.contact.form.values(), ("Alice", "a@x.com", "Hi"));
            assert!(!app.state.contact.is_submitting());
            assert!(app.state.contact.current_notification().unwrap().is_failure());
        }

        #[tokio::test]
        async fn test_send_button_submits() {
            let mut dispatcher = MockEmailDispatcher::new();
            dispatcher.expect_send().times(1).returning(|_, _, _, _| Ok(()));
            let mut app = app_with(dispatcher);
            fill_contact_form(&mut app);

            app.handle_key(key(KeyCode::Tab)).unwrap();
            assert!(app.state.contact.form.is_buttons_row_active());
            app.handle_key(key(KeyCode::Enter)).unwrap();
            next_outcome(&mut app).await;

            assert_eq!(app.state.contact.form.values(), ("", "", ""));
        }

        #[tokio::test]
        async fn test_empty_name_blocks_dispatch() {
            let mut dispatcher = MockEmailDispatcher::new();
            dispatcher.expect_send().times(0);
            let mut app = app_with(dispatcher);
            app.handle_key(key(KeyCode::Char('c'))).unwrap();
            app.handle_key(key(KeyCode::Tab)).unwrap();
            type_text(&mut app, "a@x.com");

            app.handle_key(ctrl('s')).unwrap();
            tokio::task::yield_now().await;

            assert!(!app.state.contact.is_submitting());
            assert!(app.state.contact.name_required());
            assert_eq!(app.poll_submissions(), 0);
        }

        #[tokio::test]
        async fn test_busy_flag_spans_pending_call() {
            let (dispatcher, mut gates) = GatedDispatcher::new(1);
            let mut app = app_with(dispatcher);
            fill_contact_form(&mut app);

            assert!(!app.state.contact.is_submitting());
            app.handle_key(ctrl('s')).unwrap();

            // Let the task reach the provider and park there
            for _ in 0..5 {
                tokio::task::yield_now().await;
            }
            assert_eq!(app.poll_submissions(), 0);
            assert!(app.state.contact.is_submitting());

            gates.remove(0).send(Ok(())).unwrap();
            next_outcome(&mut app).await;
            assert!(!app.state.contact.is_submitting());
        }

        #[tokio::test]
        async fn test_notification_blocks_keys_until_dismissed() {
            let mut dispatcher = MockEmailDispatcher::new();
            dispatcher.expect_send().times(1).returning(|_, _, _, _| Ok(()));
            let mut app = app_with(dispatcher);
            fill_contact_form(&mut app);
            app.handle_key(ctrl('s')).unwrap();
            next_outcome(&mut app).await;

            type_text(&mut app, "zz");
            assert_eq!(app.state.contact.form.name.as_text(), "");

            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert!(app.state.contact.current_notification().is_none());
        }

        #[tokio::test]
        async fn test_two_rapid_submissions_both_reach_provider() {
            let (dispatcher, mut gates) = GatedDispatcher::new(2);
            let dispatcher = Arc::new(dispatcher);
            let mut app = App::with_dispatcher(
                Locale::En,
                credentials(),
                Arc::clone(&dispatcher) as Arc<dyn EmailDispatcher>,
            );
            fill_contact_form(&mut app);

            app.handle_key(ctrl('s')).unwrap();
            app.handle_key(ctrl('s')).unwrap();
            for _ in 0..5 {
                tokio::task::yield_now().await;
            }
            assert_eq!(dispatcher.calls.lock().unwrap().len(), 2);

            // Second call settles first with a failure, then the first succeeds
            let first_gate = gates.remove(0);
            gates
                .remove(0)
                .send(Err(DispatchError::Transport("reset".to_string())))
                .unwrap();
            next_outcome(&mut app).await;
            assert_eq!(app.state.contact.form.values(), ("Alice", "a@x.com", "Hi"));

            first_gate.send(Ok(())).unwrap();
            next_outcome(&mut app).await;
            assert_eq!(app.state.contact.form.values(), ("", "", ""));
            assert_eq!(app.state.contact.notification_count(), 2);
        }
    }
}
