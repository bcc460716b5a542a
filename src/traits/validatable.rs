use std::rc::Rc;

use crate::validation::Validation;

/// Callback invoked with the latest [`Validation`] whenever a validator's
/// value changes.
pub type ChangeListener = Box<dyn Fn(&Validation)>;

/// Capability every validator provides to the form aggregator.
///
/// A validator owns one value and one rule. The aggregator never looks at the
/// value itself; it only asks for the outcome, emptiness, change
/// notifications and explicit triggering.
///
/// Implementations must uphold:
///
/// - [`validate`](Self::validate) depends only on the current value.
/// - [`is_empty`](Self::is_empty) reflects only the value, never validity.
/// - Every listener passed to [`observe_change`](Self::observe_change) is
///   kept, and all of them run on each value change, in registration order.
/// - [`trigger_validation`](Self::trigger_validation) re-evaluates the rule
///   and updates whatever "show error" state the validator keeps for display.
///
/// # Examples
///
/// ```
/// use form_rail::traits::{ChangeListener, Validatable};
/// use form_rail::validation::Validation;
/// use std::cell::{Cell, RefCell};
///
/// #[derive(Default)]
/// struct Accepted {
///     checked: Cell<bool>,
///     listeners: RefCell<Vec<ChangeListener>>,
/// }
///
/// impl Validatable for Accepted {
///     fn validate(&self) -> Validation {
///         Validation::check(self.checked.get(), "Please accept the terms.")
///     }
///
///     fn is_empty(&self) -> bool {
///         !self.checked.get()
///     }
///
///     fn observe_change(&self, listener: ChangeListener) {
///         self.listeners.borrow_mut().push(listener);
///     }
///
///     fn trigger_validation(&self, _is_disabled: bool, _should_show_error: bool) {
///         let _ = self.validate();
///     }
/// }
///
/// let terms = Accepted::default();
/// assert!(terms.validate().is_failure());
/// ```
pub trait Validatable {
    fn validate(&self) -> Validation;

    fn is_empty(&self) -> bool;

    fn observe_change(&self, listener: ChangeListener);

    /// Forces re-evaluation. When the validator is enabled and
    /// `should_show_error` is set, a failing validator surfaces its error
    /// through its own display state; otherwise any shown error is cleared.
    fn trigger_validation(&self, is_disabled: bool, should_show_error: bool);
}

impl<V: Validatable + ?Sized> Validatable for Rc<V> {
    #[inline]
    fn validate(&self) -> Validation {
        (**self).validate()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }

    #[inline]
    fn observe_change(&self, listener: ChangeListener) {
        (**self).observe_change(listener)
    }

    #[inline]
    fn trigger_validation(&self, is_disabled: bool, should_show_error: bool) {
        (**self).trigger_validation(is_disabled, should_show_error)
    }
}

/// Typed access to the value a validator owns.
///
/// The aggregator works purely through [`Validatable`]; this trait is for
/// callers that hold a concrete validator and want to read or change its
/// value.
pub trait ValueSource {
    type Value;

    fn value(&self) -> Self::Value;

    /// Replaces the value, re-validates and notifies change listeners.
    fn set_value(&self, value: Self::Value);
}
