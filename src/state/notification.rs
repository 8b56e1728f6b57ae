//! User-facing notifications raised by the contact workflow

use crate::content::{portfolio, Locale};
use chrono::{DateTime, Local};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Failure,
}

/// Outcome of one submission, shown as a dialog until dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub submission_id: Uuid,
    pub raised_at: DateTime<Local>,
}

impl Notification {
    pub fn new(kind: NotificationKind, submission_id: Uuid) -> Self {
        Self {
            kind,
            submission_id,
            raised_at: Local::now(),
        }
    }

    /// Message text in the given language
    pub fn message(&self, locale: Locale) -> &'static str {
        match self.kind {
            NotificationKind::Success => portfolio::SEND_SUCCESS.get(locale),
            NotificationKind::Failure => portfolio::SEND_FAILURE.get(locale),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.kind == NotificationKind::Failure
    }
}
