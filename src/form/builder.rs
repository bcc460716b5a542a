use core::fmt;
use std::rc::Rc;

use super::{FilledPolicy, FormObserver, FormValidation};
use crate::messages::{DefaultMessages, ValidationMessages};
use crate::schedule::{Scheduler, TaskQueue};
use crate::validation::ValidationType;

/// Configures and builds a [`FormValidation`].
///
/// | Option | Default |
/// |--------|---------|
/// | `messages` | [`DefaultMessages`] |
/// | `scheduler` | [`TaskQueue::current`] |
/// | `on_form_changed` | none |
/// | `filled_policy` | [`FilledPolicy::IncludeDisabled`] |
///
/// # Examples
///
/// ```
/// use form_rail::prelude::*;
///
/// let form = FormValidation::builder(ValidationType::Silent)
///     .filled_policy(FilledPolicy::SkipDisabled)
///     .on_form_changed(|form| println!("{}", form.errors_description()))
///     .build();
///
/// assert_eq!(form.validation_type(), ValidationType::Silent);
/// assert!(form.is_empty());
/// ```
#[must_use]
pub struct FormBuilder {
    validation_type: ValidationType,
    filled_policy: FilledPolicy,
    messages: Option<Rc<dyn ValidationMessages>>,
    scheduler: Option<Rc<dyn Scheduler>>,
    on_form_changed: Option<FormObserver>,
}

impl FormBuilder {
    pub fn new(validation_type: ValidationType) -> Self {
        Self {
            validation_type,
            filled_policy: FilledPolicy::default(),
            messages: None,
            scheduler: None,
            on_form_changed: None,
        }
    }

    pub fn messages(self, messages: impl ValidationMessages + 'static) -> Self {
        self.shared_messages(Rc::new(messages))
    }

    pub fn shared_messages(mut self, messages: Rc<dyn ValidationMessages>) -> Self {
        self.messages = Some(messages);
        self
    }

    pub fn scheduler(mut self, scheduler: impl Scheduler + 'static) -> Self {
        self.scheduler = Some(Rc::new(scheduler));
        self
    }

    pub fn on_form_changed(mut self, observer: impl Fn(&FormValidation) + 'static) -> Self {
        self.on_form_changed = Some(Rc::new(observer));
        self
    }

    pub fn filled_policy(mut self, policy: FilledPolicy) -> Self {
        self.filled_policy = policy;
        self
    }

    pub fn build(self) -> FormValidation {
        let messages = self.messages.unwrap_or_else(|| Rc::new(DefaultMessages));
        let scheduler = self.scheduler.unwrap_or_else(|| Rc::new(TaskQueue::current()));
        form_debug!(
            validation_type = %self.validation_type,
            filled_policy = ?self.filled_policy,
            "form built"
        );
        FormValidation::from_parts(
            self.validation_type,
            self.filled_policy,
            messages,
            scheduler,
            self.on_form_changed,
        )
    }
}

impl fmt::Debug for FormBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormBuilder")
            .field("validation_type", &self.validation_type)
            .field("filled_policy", &self.filled_policy)
            .field("custom_messages", &self.messages.is_some())
            .field("custom_scheduler", &self.scheduler.is_some())
            .field("on_form_changed", &self.on_form_changed.is_some())
            .finish()
    }
}
