use core::fmt;
use std::rc::Rc;

use super::field::{trimmed, Field};
use crate::messages::{DefaultMessages, ValidationMessages};
use crate::traits::{ChangeListener, Validatable, ValueSource};
use crate::validation::Validation;

/// Validates the raw value with an arbitrary predicate.
///
/// # Examples
///
/// ```
/// use form_rail::traits::{Validatable, ValueSource};
/// use form_rail::validators::InlineValidator;
///
/// let email = InlineValidator::new(|value| value.contains('@'))
///     .message("Enter a valid email address.");
///
/// email.set_value("someone@example.com".to_string());
/// assert!(email.validate().is_success());
/// ```
#[derive(Clone)]
pub struct InlineValidator {
    field: Field<String>,
    predicate: Rc<dyn Fn(&str) -> bool>,
    message: String,
}

impl InlineValidator {
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&str) -> bool + 'static,
    {
        Self {
            field: Field::default(),
            predicate: Rc::new(predicate),
            message: DefaultMessages.invalid(),
        }
    }

    /// Sets the initial value without notifying listeners.
    #[must_use]
    pub fn with_value(self, value: impl Into<String>) -> Self {
        self.field.replace(value.into());
        self
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    #[must_use]
    pub fn messages(mut self, messages: &dyn ValidationMessages) -> Self {
        self.message = messages.invalid();
        self
    }

    #[must_use]
    pub fn should_display_error(&self) -> bool {
        self.field.error_visible()
    }
}

impl fmt::Debug for InlineValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InlineValidator")
            .field("field", &self.field)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

impl Validatable for InlineValidator {
    fn validate(&self) -> Validation {
        let passed = self.field.with(|value| (self.predicate)(value.as_str()));
        Validation::check(passed, self.message.as_str())
    }

    fn is_empty(&self) -> bool {
        self.field.with(|value| trimmed(value).is_empty())
    }

    fn observe_change(&self, listener: ChangeListener) {
        self.field.observe(listener);
    }

    fn trigger_validation(&self, is_disabled: bool, should_show_error: bool) {
        self.field.apply_trigger(&self.validate(), is_disabled, should_show_error);
    }
}

impl ValueSource for InlineValidator {
    type Value = String;

    fn value(&self) -> String {
        self.field.get()
    }

    fn set_value(&self, value: String) {
        self.field.replace(value);
        self.field.publish(&self.validate());
    }
}
