use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::field::{trimmed, Field};
use crate::messages::{DefaultMessages, ValidationMessages};
use crate::traits::{ChangeListener, Validatable, ValueSource};
use crate::validation::Validation;

/// How a [`CountValidator`] compares the actual character count with the
/// expected one.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum CountComparison {
    Equal,
    NotEqual,
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
}

impl CountComparison {
    #[must_use]
    pub const fn matches(self, actual: usize, expected: usize) -> bool {
        match self {
            Self::Equal => actual == expected,
            Self::NotEqual => actual != expected,
            Self::Less => actual < expected,
            Self::LessOrEqual => actual <= expected,
            Self::Greater => actual > expected,
            Self::GreaterOrEqual => actual >= expected,
        }
    }

    /// Phrase used by the default messages, e.g. "at least".
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Equal => "exactly",
            Self::NotEqual => "other than",
            Self::Less => "fewer than",
            Self::LessOrEqual => "at most",
            Self::Greater => "more than",
            Self::GreaterOrEqual => "at least",
        }
    }
}

impl fmt::Display for CountComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// Compares the character count of the trimmed value against a fixed number.
///
/// Cloning shares the value and listeners, so a caller can keep a handle
/// after appending the validator to a form.
///
/// # Examples
///
/// ```
/// use form_rail::traits::{Validatable, ValueSource};
/// use form_rail::validators::CountValidator;
///
/// let code = CountValidator::equal(5).message("Enter the 5-letter code.");
///
/// code.set_value("hello".to_string());
/// assert!(code.validate().is_success());
///
/// code.set_value("hi".to_string());
/// assert_eq!(code.validate().message(), Some("Enter the 5-letter code."));
/// ```
#[derive(Clone, Debug)]
pub struct CountValidator {
    field: Field<String>,
    comparison: CountComparison,
    expected: usize,
    message: String,
}

impl CountValidator {
    pub fn new(comparison: CountComparison, expected: usize) -> Self {
        Self {
            field: Field::default(),
            comparison,
            expected,
            message: DefaultMessages.count(comparison, expected),
        }
    }

    pub fn equal(expected: usize) -> Self {
        Self::new(CountComparison::Equal, expected)
    }

    pub fn at_least(expected: usize) -> Self {
        Self::new(CountComparison::GreaterOrEqual, expected)
    }

    pub fn at_most(expected: usize) -> Self {
        Self::new(CountComparison::LessOrEqual, expected)
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

    /// Takes the failure message from `messages`.
    #[must_use]
    pub fn messages(mut self, messages: &dyn ValidationMessages) -> Self {
        self.message = messages.count(self.comparison, self.expected);
        self
    }

    #[must_use]
    pub fn comparison(&self) -> CountComparison {
        self.comparison
    }

    #[must_use]
    pub fn expected(&self) -> usize {
        self.expected
    }

    #[must_use]
    pub fn should_display_error(&self) -> bool {
        self.field.error_visible()
    }
}

impl Validatable for CountValidator {
    fn validate(&self) -> Validation {
        let actual = self.field.with(|value| trimmed(value).chars().count());
        Validation::check(self.comparison.matches(actual, self.expected), self.message.as_str())
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

impl ValueSource for CountValidator {
    type Value = String;

    fn value(&self) -> String {
        self.field.get()
    }

    fn set_value(&self, value: String) {
        self.field.replace(value);
        self.field.publish(&self.validate());
    }
}
