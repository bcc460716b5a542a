//! Conditional inclusion of a validator in form-level aggregation.

use core::fmt;
use std::rc::Rc;

use crate::traits::Validatable;
use crate::validation::Validation;

/// Pairs a validator with a predicate deciding whether it is currently
/// disabled.
///
/// The predicate is evaluated on every aggregation pass and never cached, so
/// enablement may depend on other form state (for example a field that is
/// only required while a checkbox is ticked) without the validator knowing.
///
/// Cloning a container shares both the validator and the predicate.
///
/// # Examples
///
/// ```
/// use form_rail::container::ValidatorContainer;
/// use form_rail::validators::CountValidator;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let optional = Rc::new(Cell::new(true));
/// let flag = optional.clone();
/// let container = ValidatorContainer::new(CountValidator::equal(5))
///     .disabled_when(move || flag.get());
///
/// assert!(container.is_disabled());
/// optional.set(false);
/// assert!(!container.is_disabled());
/// ```
#[derive(Clone)]
pub struct ValidatorContainer {
    validator: Rc<dyn Validatable>,
    disable_validation: Rc<dyn Fn() -> bool>,
}

impl ValidatorContainer {
    /// Wraps a validator that is always enabled.
    pub fn new<V: Validatable + 'static>(validator: V) -> Self {
        Self::from_shared(Rc::new(validator))
    }

    /// Wraps a validator together with its disable predicate.
    pub fn with_predicate<V, F>(validator: V, disable_validation: F) -> Self
    where
        V: Validatable + 'static,
        F: Fn() -> bool + 'static,
    {
        Self::new(validator).disabled_when(disable_validation)
    }

    /// Wraps an already shared validator.
    pub fn from_shared(validator: Rc<dyn Validatable>) -> Self {
        Self { validator, disable_validation: Rc::new(|| false) }
    }

    /// Replaces the disable predicate.
    #[must_use]
    pub fn disabled_when<F>(mut self, disable_validation: F) -> Self
    where
        F: Fn() -> bool + 'static,
    {
        self.disable_validation = Rc::new(disable_validation);
        self
    }

    #[inline]
    pub fn validator(&self) -> &dyn Validatable {
        &*self.validator
    }

    /// Evaluates the disable predicate.
    #[must_use]
    #[inline]
    pub fn is_disabled(&self) -> bool {
        (self.disable_validation)()
    }

    #[must_use]
    #[inline]
    pub fn is_enabled(&self) -> bool {
        !self.is_disabled()
    }

    #[inline]
    pub fn validate(&self) -> Validation {
        self.validator.validate()
    }

    /// A field counts as filled when it validates or holds content.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.validator.validate().is_success() || !self.validator.is_empty()
    }
}

impl fmt::Debug for ValidatorContainer {
    /// Formatting never calls the validator or the disable predicate.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorContainer").finish_non_exhaustive()
    }
}
