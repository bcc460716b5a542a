//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides the most commonly used items for building a
//! form. Import everything with:
//!
//! ```
//! use form_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`form!`]
//! - **Form**: [`FormValidation`], [`FormBuilder`], [`FilledPolicy`], [`FormSnapshot`]
//! - **Validation**: [`Validation`], [`ValidationType`], [`ValidatorContainer`]
//! - **Traits**: [`Validatable`], [`ValueSource`], [`Scheduler`], [`ValidationMessages`]
//! - **Validators**: [`CountValidator`], [`PrefixValidator`], [`InlineValidator`],
//!   [`DateRangeValidator`]
//! - **Scheduling**: [`TaskQueue`]
//!
//! # Examples
//!
//! ```
//! use form_rail::prelude::*;
//!
//! let queue = TaskQueue::new();
//! let form = FormValidation::builder(ValidationType::Immediate)
//!     .scheduler(queue.clone())
//!     .build();
//!
//! let salutation = PrefixValidator::new("Mr").ignore_case(true);
//! let code = CountValidator::equal(5);
//! form!(form; salutation.clone(), code.clone());
//!
//! salutation.set_value("mr. smith".to_string());
//! code.set_value("hello".to_string());
//! queue.run_pending();
//!
//! assert!(form.all_valid());
//! assert!(form.trigger_validation());
//! ```

// Macros
pub use crate::form;

// Form
pub use crate::form::{FilledPolicy, FormBuilder, FormSnapshot, FormValidation};

// Validation
pub use crate::container::ValidatorContainer;
pub use crate::validation::{Validation, ValidationType};

// Traits
pub use crate::messages::{DefaultMessages, ValidationMessages};
pub use crate::schedule::Scheduler;
pub use crate::traits::{Validatable, ValueSource};

// Validators
pub use crate::validators::{
    CountComparison, CountValidator, DateRangeValidator, InlineValidator, PrefixValidator,
};

// Scheduling
pub use crate::schedule::TaskQueue;
