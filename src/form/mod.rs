//! The form aggregator.
//!
//! [`FormValidation`] owns an ordered collection of
//! [`ValidatorContainer`]s and keeps three aggregate outputs up to date:
//! whether every enabled field is valid, whether every field is filled, and
//! the ordered list of visible error messages.
//!
//! # Change propagation
//!
//! 1. A validator's value changes and it publishes its new [`Validation`].
//! 2. The form recomputes all three outputs synchronously.
//! 3. Subscriber notifications for any output that changed are queued on the
//!    form's [`Scheduler`], followed by one `on_form_changed` notification.
//!
//! The `on_form_changed` observer therefore never runs inside the call that
//! changed the value, and always sees settled outputs.
//!
//! # Examples
//!
//! ```
//! use form_rail::prelude::*;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let queue = TaskQueue::new();
//! let notified = Rc::new(Cell::new(0));
//!
//! let n = notified.clone();
//! let form = FormValidation::builder(ValidationType::Immediate)
//!     .scheduler(queue.clone())
//!     .on_form_changed(move |_form| n.set(n.get() + 1))
//!     .build();
//!
//! let name = CountValidator::at_least(2).message("Name is too short.");
//! form.append_validator(name.clone());
//!
//! name.set_value("J".to_string());
//! assert!(!form.all_valid());
//! assert_eq!(notified.get(), 0);
//!
//! queue.run_pending();
//! assert_eq!(notified.get(), 1);
//! assert_eq!(form.errors_description(), "Name is too short.");
//! ```

use core::fmt;
use std::cell::RefCell;
use std::rc::Rc;

use crate::container::ValidatorContainer;
use crate::messages::ValidationMessages;
use crate::reactive::{Published, Subscription};
use crate::schedule::Scheduler;
use crate::traits::Validatable;
use crate::validation::{Validation, ValidationType};

pub mod aggregate;
pub mod builder;
#[cfg(feature = "async")]
pub mod changes;
pub mod snapshot;

pub use self::aggregate::FilledPolicy;
pub use self::builder::FormBuilder;
#[cfg(feature = "async")]
pub use self::changes::FormChanges;
pub use self::snapshot::FormSnapshot;

type FormObserver = Rc<dyn Fn(&FormValidation)>;

struct FormInner {
    validation_type: ValidationType,
    filled_policy: FilledPolicy,
    messages: Rc<dyn ValidationMessages>,
    scheduler: Rc<dyn Scheduler>,
    on_form_changed: Option<FormObserver>,
    validators: RefCell<Vec<ValidatorContainer>>,
    all_valid: Published<bool>,
    all_filled: Published<bool>,
    validation_messages: Published<Vec<String>>,
    #[cfg(feature = "async")]
    changes: changes::ChangeHub,
}

/// Aggregates many validators into one form-level state.
///
/// `FormValidation` is a handle: cloning it yields another handle to the
/// **same** form. Validators hold only weak references back to the form, so
/// dropping the last handle releases it even while validators live on.
///
/// The cached outputs ([`all_valid`](Self::all_valid),
/// [`all_filled`](Self::all_filled),
/// [`validation_messages`](Self::validation_messages)) start out as
/// `false`, `false` and empty, and are recomputed on every value change of an
/// appended validator, or on [`refresh`](Self::refresh).
///
/// The `on_form_changed` observer receives the form by reference; capturing
/// a clone of the form inside it creates a reference cycle.
#[derive(Clone)]
pub struct FormValidation {
    inner: Rc<FormInner>,
}

impl FormValidation {
    /// Creates a form with default messages, the current thread's
    /// [`TaskQueue`](crate::schedule::TaskQueue) and no observer.
    pub fn new(validation_type: ValidationType) -> Self {
        FormBuilder::new(validation_type).build()
    }

    pub fn builder(validation_type: ValidationType) -> FormBuilder {
        FormBuilder::new(validation_type)
    }

    fn from_parts(
        validation_type: ValidationType,
        filled_policy: FilledPolicy,
        messages: Rc<dyn ValidationMessages>,
        scheduler: Rc<dyn Scheduler>,
        on_form_changed: Option<FormObserver>,
    ) -> Self {
        Self {
            inner: Rc::new(FormInner {
                validation_type,
                filled_policy,
                messages,
                scheduler,
                on_form_changed,
                validators: RefCell::new(Vec::new()),
                all_valid: Published::new(false),
                all_filled: Published::new(false),
                validation_messages: Published::new(Vec::new()),
                #[cfg(feature = "async")]
                changes: changes::ChangeHub::default(),
            }),
        }
    }

    /// Registers `container` and subscribes the form to its validator's
    /// changes. Append order is the order of every aggregate computation.
    pub fn append(&self, container: ValidatorContainer) {
        let weak = Rc::downgrade(&self.inner);
        container.validator().observe_change(Box::new(move |_: &Validation| {
            if let Some(inner) = weak.upgrade() {
                FormValidation { inner }.handle_change();
            }
        }));

        let mut validators = self.inner.validators.borrow_mut();
        validators.push(container);
        form_debug!(count = validators.len(), "validator appended");
    }

    /// Appends a validator that is always enabled.
    pub fn append_validator<V: Validatable + 'static>(&self, validator: V) {
        self.append(ValidatorContainer::new(validator));
    }

    /// `true` iff no enabled container currently fails. Evaluated afresh.
    #[must_use]
    pub fn is_all_valid(&self) -> bool {
        aggregate::all_valid(&self.containers())
    }

    /// `true` iff every container validates or holds content, subject to the
    /// form's [`FilledPolicy`]. Evaluated afresh.
    #[must_use]
    pub fn is_all_filled(&self) -> bool {
        aggregate::all_filled(&self.containers(), self.inner.filled_policy)
    }

    /// Visible failure messages of enabled containers, in append order.
    /// Evaluated afresh.
    #[must_use]
    pub fn all_validation_messages(&self) -> Vec<String> {
        aggregate::validation_messages(&self.containers())
    }

    /// [`all_validation_messages`](Self::all_validation_messages) joined
    /// with newlines.
    #[must_use]
    pub fn all_validation_messages_string(&self) -> String {
        self.all_validation_messages().join("\n")
    }

    /// Asks every validator, disabled ones included, to re-evaluate and
    /// update its error display according to the form's
    /// [`ValidationType`]. Returns whether the form is valid afterwards.
    pub fn trigger_validation(&self) -> bool {
        let should_show_error = self.inner.validation_type.should_show_error();
        let containers = self.containers();
        form_debug!(
            validation_type = %self.inner.validation_type,
            count = containers.len(),
            "triggering validation"
        );

        for container in &containers {
            container.validator().trigger_validation(container.is_disabled(), should_show_error);
        }
        aggregate::all_valid(&containers)
    }

    /// The cached messages joined with newlines. Not recomputed.
    #[must_use]
    pub fn errors_description(&self) -> String {
        self.inner.validation_messages.with(|messages| messages.join("\n"))
    }

    /// Recomputes the cached outputs and queues notifications, exactly as a
    /// validator change does.
    pub fn refresh(&self) {
        self.handle_change();
    }

    /// Cached result of the last recomputation.
    #[must_use]
    pub fn all_valid(&self) -> bool {
        self.inner.all_valid.get()
    }

    #[must_use]
    pub fn all_filled(&self) -> bool {
        self.inner.all_filled.get()
    }

    #[must_use]
    pub fn validation_messages(&self) -> Vec<String> {
        self.inner.validation_messages.get()
    }

    #[must_use]
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            all_valid: self.all_valid(),
            all_filled: self.all_filled(),
            validation_messages: self.validation_messages(),
        }
    }

    /// Notified, via the scheduler, whenever the cached `all_valid` changes.
    pub fn subscribe_all_valid(&self, callback: impl Fn(&bool) + 'static) -> Subscription {
        self.inner.all_valid.subscribe(callback)
    }

    pub fn subscribe_all_filled(&self, callback: impl Fn(&bool) + 'static) -> Subscription {
        self.inner.all_filled.subscribe(callback)
    }

    pub fn subscribe_validation_messages(
        &self,
        callback: impl Fn(&Vec<String>) + 'static,
    ) -> Subscription {
        self.inner.validation_messages.subscribe(callback)
    }

    /// A stream yielding a [`FormSnapshot`] after every `on_form_changed`
    /// notification. Ends when the form is dropped.
    #[cfg(feature = "async")]
    pub fn changes(&self) -> FormChanges {
        self.inner.changes.subscribe()
    }

    #[must_use]
    pub fn validation_type(&self) -> ValidationType {
        self.inner.validation_type
    }

    #[must_use]
    pub fn filled_policy(&self) -> FilledPolicy {
        self.inner.filled_policy
    }

    /// The message provider validators can take their defaults from.
    #[must_use]
    pub fn messages(&self) -> Rc<dyn ValidationMessages> {
        Rc::clone(&self.inner.messages)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.validators.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.validators.borrow().is_empty()
    }

    /// Returns `true` if both handles refer to the same form.
    #[must_use]
    pub fn ptr_eq(&self, other: &FormValidation) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Copies the container list so that validators and predicates run
    /// without the form being borrowed.
    fn containers(&self) -> Vec<ValidatorContainer> {
        self.inner.validators.borrow().clone()
    }

    fn handle_change(&self) {
        let containers = self.containers();
        let all_valid = aggregate::all_valid(&containers);
        let all_filled = aggregate::all_filled(&containers, self.inner.filled_policy);
        let messages = aggregate::validation_messages(&containers);
        form_trace!(all_valid, all_filled, messages = messages.len(), "form recomputed");

        let scheduler: &dyn Scheduler = &*self.inner.scheduler;
        self.inner.all_valid.set_deferred(all_valid, scheduler);
        self.inner.all_filled.set_deferred(all_filled, scheduler);
        self.inner.validation_messages.set_deferred(messages, scheduler);

        let weak = Rc::downgrade(&self.inner);
        scheduler.schedule(Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                FormValidation { inner }.notify_form_changed();
            }
        }));
    }

    fn notify_form_changed(&self) {
        form_trace!("notifying form observer");
        if let Some(observer) = self.inner.on_form_changed.clone() {
            observer(self);
        }
        #[cfg(feature = "async")]
        self.inner.changes.broadcast(&self.snapshot());
    }
}

impl fmt::Debug for FormValidation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormValidation")
            .field("validation_type", &self.inner.validation_type)
            .field("filled_policy", &self.inner.filled_policy)
            .field("validators", &self.len())
            .field("all_valid", &self.all_valid())
            .field("all_filled", &self.all_filled())
            .field("validation_messages", &self.validation_messages())
            .finish()
    }
}
