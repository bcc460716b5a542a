//! Convenience macros for assembling forms.
//!
//! - [`macro@crate::form`] - Appends validators (optionally with a disable
//!   predicate) to a form in one statement, preserving their order.
//!
//! # Examples
//!
//! ```
//! use form_rail::prelude::*;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let form = FormValidation::builder(ValidationType::Deferred)
//!     .scheduler(TaskQueue::new())
//!     .build();
//!
//! let has_company = Rc::new(Cell::new(false));
//! let name = CountValidator::at_least(1);
//! let company = CountValidator::at_least(1).message("Company is required.");
//!
//! let flag = has_company.clone();
//! form!(form;
//!     name.clone(),
//!     company.clone() => move || !flag.get(),
//! );
//!
//! assert_eq!(form.len(), 2);
//! ```

/// Appends validators to a [`FormValidation`](crate::form::FormValidation).
///
/// # Syntax
///
/// - `form!(form; validator, ...)` - always-enabled validators
/// - `form!(form; validator => disable_predicate, ...)` - a validator that is
///   skipped while `disable_predicate()` returns `true`
///
/// Entries are appended left to right. Each validator expression is moved
/// into the form, so pass a clone of any handle you keep.
///
/// # Examples
///
/// ```
/// use form_rail::prelude::*;
///
/// let form = FormValidation::builder(ValidationType::Immediate)
///     .scheduler(TaskQueue::new())
///     .build();
/// let title = PrefixValidator::new("Mr").ignore_case(true).with_value("Ms. Smith");
/// let code = CountValidator::equal(5).with_value("hi");
///
/// form!(form; title.clone(), code.clone() => || true);
///
/// assert!(!form.is_all_valid());
/// assert_eq!(form.all_validation_messages().len(), 1);
/// ```
#[macro_export]
macro_rules! form {
    (@container $validator:expr) => {
        $crate::container::ValidatorContainer::new($validator)
    };
    (@container $validator:expr, $disabled:expr) => {
        $crate::container::ValidatorContainer::new($validator).disabled_when($disabled)
    };
    ($form:expr; $($validator:expr $(=> $disabled:expr)?),* $(,)?) => {{
        let form: &$crate::form::FormValidation = &$form;
        $(
            form.append($crate::form!(@container $validator $(, $disabled)?));
        )*
    }};
}
