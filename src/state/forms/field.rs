//! Form field value objects

/// Represents a single text field with its configuration and value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub value: String,
    pub is_multiline: bool,
    /// Submission is blocked while a required field is empty
    pub is_required: bool,
}

impl FormField {
    /// Create a new single-line text field
    pub fn text(name: &'static str) -> Self {
        Self {
            name,
            value: String::new(),
            is_multiline: false,
            is_required: false,
        }
    }

    /// Create a new multi-line text field
    pub fn multiline(name: &'static str) -> Self {
        Self {
            is_multiline: true,
            ..Self::text(name)
        }
    }

    /// Mark the field as required
    pub fn required(mut self) -> Self {
        self.is_required = true;
        self
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Overwrite the value
    pub fn set_text(&mut self, value: String) {
        self.value = value;
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// A required field with nothing in it
    pub fn is_missing(&self) -> bool {
        self.is_required && self.value.is_empty()
    }
}
