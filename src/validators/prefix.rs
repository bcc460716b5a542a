use super::field::{trimmed, Field};
use crate::messages::{DefaultMessages, ValidationMessages};
use crate::traits::{ChangeListener, Validatable, ValueSource};
use crate::validation::Validation;

/// Requires the trimmed value to start with a fixed prefix.
///
/// # Examples
///
/// ```
/// use form_rail::traits::{Validatable, ValueSource};
/// use form_rail::validators::PrefixValidator;
///
/// let salutation = PrefixValidator::new("Mr").ignore_case(true);
///
/// salutation.set_value("mr. smith".to_string());
/// assert!(salutation.validate().is_success());
///
/// salutation.set_value("Ms. Smith".to_string());
/// assert!(salutation.validate().is_failure());
/// ```
#[derive(Clone, Debug)]
pub struct PrefixValidator {
    field: Field<String>,
    prefix: String,
    ignore_case: bool,
    message: String,
}

impl PrefixValidator {
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self {
            field: Field::default(),
            message: DefaultMessages.prefix(&prefix),
            prefix,
            ignore_case: false,
        }
    }

    #[must_use]
    pub fn ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
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
        self.message = messages.prefix(&self.prefix);
        self
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    #[must_use]
    pub fn should_display_error(&self) -> bool {
        self.field.error_visible()
    }

    fn has_prefix(&self, value: &str) -> bool {
        let value = trimmed(value);
        if self.ignore_case {
            value.to_lowercase().starts_with(&self.prefix.to_lowercase())
        } else {
            value.starts_with(self.prefix.as_str())
        }
    }
}

impl Validatable for PrefixValidator {
    fn validate(&self) -> Validation {
        let passed = self.field.with(|value| self.has_prefix(value));
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

impl ValueSource for PrefixValidator {
    type Value = String;

    fn value(&self) -> String {
        self.field.get()
    }

    fn set_value(&self, value: String) {
        self.field.replace(value);
        self.field.publish(&self.validate());
    }
}
