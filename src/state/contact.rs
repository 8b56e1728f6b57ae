//! Contact form submission workflow
//!
//! The controller owns the three form fields and the advisory busy flag.
//! A submission is split in two halves so the event loop can keep drawing
//! while the provider call is pending:
//!
//! - [`ContactFormController::begin_submit`] checks the required name,
//!   raises the busy flag and snapshots the payload.
//! - [`ContactFormController::complete_submission`] applies the provider's
//!   answer: reset on success, keep the input on failure, clear the flag.
//!
//! [`ContactFormController::submit`] chains both halves around the call for
//! callers that can simply await it.

use super::forms::{ContactField, ContactForm};
use super::notification::{Notification, NotificationKind};
use crate::config::EmailJsCredentials;
use crate::content::portfolio::RECIPIENT_NAME;
use crate::email::{DispatchError, EmailDispatcher, TemplateParams};
use std::collections::VecDeque;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactError {
    /// The required name field is empty; nothing was sent
    #[error("name is required")]
    MissingName,
}

/// A message that passed validation and is ready to hand to the provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    pub id: Uuid,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub params: TemplateParams,
}

impl PendingSubmission {
    /// Hand the message to the provider and wait for its answer
    pub async fn dispatch(&self, dispatcher: &dyn EmailDispatcher) -> Result<(), DispatchError> {
        dispatcher
            .send(
                &self.service_id,
                &self.template_id,
                &self.params,
                &self.public_key,
            )
            .await
    }
}

/// Owns the contact form and drives submissions
#[derive(Debug)]
pub struct ContactFormController {
    pub form: ContactForm,
    credentials: EmailJsCredentials,
    is_submitting: bool,
    /// Set when the last submit was blocked by the required-name check
    name_required: bool,
    notifications: VecDeque<Notification>,
}

impl ContactFormController {
    pub fn new(credentials: EmailJsCredentials) -> Self {
        Self {
            form: ContactForm::new(),
            credentials,
            is_submitting: false,
            name_required: false,
            notifications: VecDeque::new(),
        }
    }

    /// Overwrite one field. Never fails, no sanitization.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn update_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.form.field_mut(field).set_text(value.into());
        self.touched(field);
    }

    /// Append a typed character to a field
    pub fn push_char(&mut self, field: ContactField, c: char) {
        self.form.field_mut(field).push_char(c);
        self.touched(field);
    }

    /// Remove the last character of a field
    pub fn pop_char(&mut self, field: ContactField) {
        self.form.field_mut(field).pop_char();
        self.touched(field);
    }

    fn touched(&mut self, field: ContactField) {
        if field == ContactField::Name {
            self.name_required = false;
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn name_required(&self) -> bool {
        self.name_required
    }

    /// First half of a submission.
    ///
    /// Blocks on an empty name without touching the busy flag. Otherwise
    /// raises the flag and returns the payload to send.
    pub fn begin_submit(&mut self) -> Result<PendingSubmission, ContactError> {
        if self.form.name.is_missing() {
            self.name_required = true;
            self.form.focus(ContactField::Name);
            tracing::debug!("contact submission blocked: name is empty");
            return Err(ContactError::MissingName);
        }

        self.name_required = false;
        self.is_submitting = true;

        let (name, email, message) = self.form.values();
        let pending = PendingSubmission {
            id: Uuid::new_v4(),
            service_id: self.credentials.service_id.clone(),
            template_id: self.credentials.template_id.clone(),
            public_key: self.credentials.public_key.clone(),
            params: TemplateParams {
                from_name: name.to_string(),
                from_email: email.to_string(),
                message: message.to_string(),
                to_name: RECIPIENT_NAME.to_string(),
            },
        };

        tracing::info!(submission_id = %pending.id, "sending contact message");
        Ok(pending)
    }

    /// Second half of a submission: apply the provider's answer.
    ///
    /// The busy flag is cleared last on both paths.
    pub fn complete_submission(
        &mut self,
        submission_id: Uuid,
        result: Result<(), DispatchError>,
    ) -> NotificationKind {
        let kind = match result {
            Ok(()) => {
                self.form.clear_values();
                tracing::info!(%submission_id, "contact message sent");
                NotificationKind::Success
            }
            Err(error) => {
                tracing::error!(%submission_id, %error, "failed to send contact message");
                NotificationKind::Failure
            }
        };

        self.notifications
            .push_back(Notification::new(kind, submission_id));
        self.is_submitting = false;
        kind
    }

    /// Validate, send and settle one submission
    #[cfg_attr(not(test), allow(dead_code))]
    pub async fn submit(
        &mut self,
        dispatcher: &dyn EmailDispatcher,
    ) -> Result<NotificationKind, ContactError> {
        let pending = self.begin_submit()?;
        let result = pending.dispatch(dispatcher).await;
        Ok(self.complete_submission(pending.id, result))
    }

    /// Notification currently on screen
    pub fn current_notification(&self) -> Option<&Notification> {
        self.notifications.front()
    }

    /// Close the notification on screen, revealing the next one if any
    pub fn dismiss_notification(&mut self) -> Option<Notification> {
        let dismissed = self.notifications.pop_front();
        if let Some(notification) = &dismissed {
            tracing::debug!(submission_id = %notification.submission_id, "notification dismissed");
        }
        dismissed
    }

    pub fn notification_count(&self) -> usize {
        self.notifications.len()
    }
}
