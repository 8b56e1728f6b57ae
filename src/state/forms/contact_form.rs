//! Contact form fields and focus handling

use super::field::FormField;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// The three user-editable fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Message];

    fn index(self) -> usize {
        match self {
            ContactField::Name => 0,
            ContactField::Email => 1,
            ContactField::Message => 2,
        }
    }
}

/// Buttons below the fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactButton {
    Back,
    Send,
}

/// Index of the buttons row in the focus cycle
const BUTTONS_ROW: usize = 3;

/// Contact form contents and focus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    pub name: FormField,
    pub email: FormField,
    pub message: FormField,
    pub active_field_index: usize,
    pub selected_button: ContactButton,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            // Only the name carries a required-field check
            name: FormField::text("name").required(),
            email: FormField::text("email"),
            message: FormField::multiline("message"),
            active_field_index: 0,
            selected_button: ContactButton::Send,
        }
    }

    pub fn field(&self, field: ContactField) -> &FormField {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: ContactField) -> &mut FormField {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }

    /// Field under focus, None on the buttons row
    pub fn active_contact_field(&self) -> Option<ContactField> {
        ContactField::ALL.get(self.active_field_index).copied()
    }

    /// Move focus to a field
    pub fn focus(&mut self, field: ContactField) {
        self.active_field_index = field.index();
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == BUTTONS_ROW
    }

    /// Toggle between the two buttons
    pub fn next_button(&mut self) {
        self.selected_button = match self.selected_button {
            ContactButton::Back => ContactButton::Send,
            ContactButton::Send => ContactButton::Back,
        };
    }

    pub fn is_active_field_multiline(&self) -> bool {
        self.get_field(self.active_field_index)
            .is_some_and(|f| f.is_multiline)
    }

    /// Clear every value. Focus is left where it is.
    pub fn clear_values(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }

    /// Current values as (name, email, message)
    pub fn values(&self) -> (&str, &str, &str) {
        (
            self.name.as_text(),
            self.email.as_text(),
            self.message.as_text(),
        )
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        4 // name, email, message, buttons
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(BUTTONS_ROW);
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.name),
            1 => Some(&self.email),
            2 => Some(&self.message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_correct_defaults() {
        let form = ContactForm::new();
        assert_eq!(form.values(), ("", "", ""));
        assert_eq!(form.active_field_index, 0);
        assert_eq!(form.selected_button, ContactButton::Send);
        assert!(form.name.is_required);
        assert!(!form.email.is_required);
        assert!(!form.message.is_required);
        assert!(form.message.is_multiline);
    }

    #[test]
    fn test_default_equals_new() {
        assert_eq!(ContactForm::default(), ContactForm::new());
    }

    #[test]
    fn test_next_field_cycles_through_form() {
        let mut form = ContactForm::new();
        form.next_field();
        assert_eq!(form.active_contact_field(), Some(ContactField::Email));
        form.next_field();
        assert_eq!(form.active_contact_field(), Some(ContactField::Message));
        form.next_field();
        assert!(form.is_buttons_row_active());
        assert_eq!(form.active_contact_field(), None);
        form.next_field();
        assert_eq!(form.active_contact_field(), Some(ContactField::Name));
    }

    #[test]
    fn test_prev_field_wraps_to_buttons() {
        let mut form = ContactForm::new();
        form.prev_field();
        assert!(form.is_buttons_row_active());
    }

    #[test]
    fn test_set_active_field_clamps() {
        let mut form = ContactForm::new();
        form.set_active_field(42);
        assert_eq!(form.active_field(), BUTTONS_ROW);
    }

    #[test]
    fn test_no_active_field_on_buttons_row() {
        let mut form = ContactForm::new();
        form.set_active_field(BUTTONS_ROW);
        assert!(form.active_contact_field().is_none());
        assert!(form.get_field(form.active_field()).is_none());
    }

    #[test]
    fn test_active_field_multiline_only_for_message() {
        let mut form = ContactForm::new();
        assert!(!form.is_active_field_multiline());
        form.focus(ContactField::Message);
        assert!(form.is_active_field_multiline());
    }

    #[test]
    fn test_next_button_toggles() {
        let mut form = ContactForm::new();
        form.next_button();
        assert_eq!(form.selected_button, ContactButton::Back);
        form.next_button();
        assert_eq!(form.selected_button, ContactButton::Send);
    }

    #[test]
    fn test_clear_values_keeps_focus() {
        let mut form = ContactForm::new();
        form.name.set_text("Alice".to_string());
        form.focus(ContactField::Message);
        form.clear_values();
        assert_eq!(form.values(), ("", "", ""));
        assert_eq!(form.active_contact_field(), Some(ContactField::Message));
    }
}
