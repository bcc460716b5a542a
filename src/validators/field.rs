use core::fmt;
use std::cell::RefCell;
use std::rc::Rc;

use smallvec::SmallVec;

use crate::traits::ChangeListener;
use crate::validation::Validation;

type SharedListener = Rc<dyn Fn(&Validation)>;

/// Inline storage for the common case of a single listener (the form).
type ListenerVec = SmallVec<[SharedListener; 1]>;

struct FieldState<T> {
    value: T,
    listeners: ListenerVec,
    error_visible: bool,
}

/// Shared state behind every bundled validator: the value, the ordered
/// change listeners and the "show error" flag read by a rendering layer.
///
/// Cloning a `Field` yields another handle to the **same** state.
pub struct Field<T> {
    state: Rc<RefCell<FieldState<T>>>,
}

impl<T> Clone for Field<T> {
    fn clone(&self) -> Self {
        Self { state: Rc::clone(&self.state) }
    }
}

impl<T: fmt::Debug> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("Field")
            .field("value", &state.value)
            .field("listeners", &state.listeners.len())
            .field("error_visible", &state.error_visible)
            .finish()
    }
}

impl<T: Default> Default for Field<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> Field<T> {
    pub fn new(value: T) -> Self {
        Self {
            state: Rc::new(RefCell::new(FieldState {
                value,
                listeners: SmallVec::new(),
                error_visible: false,
            })),
        }
    }

    /// Borrows the value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.state.borrow().value)
    }

    /// Replaces the value without notifying anyone.
    pub fn replace(&self, value: T) -> T {
        core::mem::replace(&mut self.state.borrow_mut().value, value)
    }

    pub fn observe(&self, listener: ChangeListener) {
        self.state.borrow_mut().listeners.push(Rc::from(listener));
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }

    /// Hands `validation` to every listener, in registration order.
    pub fn publish(&self, validation: &Validation) {
        // Listeners re-enter the validator (the form re-validates every
        // field), so the state must not stay borrowed while they run.
        let listeners: ListenerVec = self.state.borrow().listeners.iter().cloned().collect();
        for listener in listeners {
            listener(validation);
        }
    }

    /// Whether the rendering layer should currently show this field's error.
    #[must_use]
    pub fn error_visible(&self) -> bool {
        self.state.borrow().error_visible
    }

    pub fn set_error_visible(&self, visible: bool) {
        self.state.borrow_mut().error_visible = visible;
    }

    /// Applies a triggered validation to the "show error" flag.
    pub fn apply_trigger(&self, validation: &Validation, is_disabled: bool, should_show_error: bool) {
        self.set_error_visible(!is_disabled && should_show_error && validation.is_failure());
    }
}

impl<T: Clone> Field<T> {
    #[must_use]
    pub fn get(&self) -> T {
        self.state.borrow().value.clone()
    }
}

/// The value with surrounding whitespace removed.
///
/// String validators measure and match against this, and treat a value as
/// empty when it is empty.
#[inline]
pub fn trimmed(value: &str) -> &str {
    value.trim()
}
