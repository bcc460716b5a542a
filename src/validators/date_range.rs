use chrono::NaiveDate;

use super::field::Field;
use crate::messages::{DefaultMessages, ValidationMessages};
use crate::traits::{ChangeListener, Validatable, ValueSource};
use crate::validation::Validation;

/// Requires a date inside an inclusive, optionally open-ended range.
///
/// The value is `None` until a date is picked. An unset date is empty and
/// fails with the "required" message.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use form_rail::traits::{Validatable, ValueSource};
/// use form_rail::validators::DateRangeValidator;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1);
/// let end = NaiveDate::from_ymd_opt(2024, 12, 31);
/// let travel = DateRangeValidator::new(start, end);
///
/// assert!(travel.is_empty());
/// travel.set_value(NaiveDate::from_ymd_opt(2024, 6, 15));
/// assert!(travel.validate().is_success());
/// ```
#[derive(Clone, Debug)]
pub struct DateRangeValidator {
    field: Field<Option<NaiveDate>>,
    min: Option<NaiveDate>,
    max: Option<NaiveDate>,
    message: String,
    required_message: String,
}

impl DateRangeValidator {
    pub fn new(min: Option<NaiveDate>, max: Option<NaiveDate>) -> Self {
        Self {
            field: Field::default(),
            min,
            max,
            message: DefaultMessages.date_range(min, max),
            required_message: DefaultMessages.required(),
        }
    }

    pub fn on_or_after(min: NaiveDate) -> Self {
        Self::new(Some(min), None)
    }

    pub fn on_or_before(max: NaiveDate) -> Self {
        Self::new(None, Some(max))
    }

    /// Sets the initial value without notifying listeners.
    #[must_use]
    pub fn with_value(self, value: Option<NaiveDate>) -> Self {
        self.field.replace(value);
        self
    }

    /// Message used when the date falls outside the range.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Message used when no date is set.
    #[must_use]
    pub fn required_message(mut self, message: impl Into<String>) -> Self {
        self.required_message = message.into();
        self
    }

    #[must_use]
    pub fn messages(mut self, messages: &dyn ValidationMessages) -> Self {
        self.message = messages.date_range(self.min, self.max);
        self.required_message = messages.required();
        self
    }

    #[must_use]
    pub fn bounds(&self) -> (Option<NaiveDate>, Option<NaiveDate>) {
        (self.min, self.max)
    }

    #[must_use]
    pub fn should_display_error(&self) -> bool {
        self.field.error_visible()
    }

    fn in_range(&self, date: NaiveDate) -> bool {
        self.min.map_or(true, |min| date >= min) && self.max.map_or(true, |max| date <= max)
    }
}

impl Validatable for DateRangeValidator {
    fn validate(&self) -> Validation {
        match self.field.get() {
            None => Validation::failure(self.required_message.as_str()),
            Some(date) => Validation::check(self.in_range(date), self.message.as_str()),
        }
    }

    fn is_empty(&self) -> bool {
        self.field.with(Option::is_none)
    }

    fn observe_change(&self, listener: ChangeListener) {
        self.field.observe(listener);
    }

    fn trigger_validation(&self, is_disabled: bool, should_show_error: bool) {
        self.field.apply_trigger(&self.validate(), is_disabled, should_show_error);
    }
}

impl ValueSource for DateRangeValidator {
    type Value = Option<NaiveDate>;

    fn value(&self) -> Option<NaiveDate> {
        self.field.get()
    }

    fn set_value(&self, value: Option<NaiveDate>) {
        self.field.replace(value);
        self.field.publish(&self.validate());
    }
}
