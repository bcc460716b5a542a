//! FormRail composes independent field validators into one form-level state.
//!
//! Each validator owns a value and a rule. A [`FormValidation`] collects them,
//! optionally behind a dynamic "disabled" predicate, and keeps three outputs
//! current: whether every enabled field is valid, whether every field is
//! filled, and the ordered list of visible error messages. Observers are
//! notified through a deferred task queue, never inside the mutation that
//! caused the change.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `form_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Validation Results
//!
//! ```
//! use form_rail::Validation;
//!
//! let ok = Validation::success();
//! let silent = Validation::silent_failure();
//!
//! assert!(ok.is_success());
//! assert!(silent.is_failure());
//! assert_eq!(silent.visible_message(), None);
//! ```
//!
//! ## A Form With a Conditional Field
//!
//! ```
//! use form_rail::prelude::*;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let queue = TaskQueue::new();
//! let form = FormValidation::builder(ValidationType::Immediate)
//!     .scheduler(queue.clone())
//!     .build();
//!
//! let wants_newsletter = Rc::new(Cell::new(false));
//! let email = InlineValidator::new(|value| value.contains('@'))
//!     .message("Enter an email address.");
//!
//! let optional = wants_newsletter.clone();
//! form.append(ValidatorContainer::new(email.clone()).disabled_when(move || !optional.get()));
//!
//! assert!(form.is_all_valid());
//!
//! wants_newsletter.set(true);
//! assert!(!form.is_all_valid());
//! assert_eq!(form.all_validation_messages_string(), "Enter an email address.");
//! ```
//!
//! ## Deferred Notification
//!
//! ```
//! use form_rail::prelude::*;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let queue = TaskQueue::new();
//! let last_valid = Rc::new(Cell::new(None));
//!
//! let seen = last_valid.clone();
//! let form = FormValidation::builder(ValidationType::Immediate)
//!     .scheduler(queue.clone())
//!     .on_form_changed(move |form| seen.set(Some(form.all_valid())))
//!     .build();
//!
//! let code = CountValidator::equal(5);
//! form.append_validator(code.clone());
//!
//! code.set_value("hello".to_string());
//! assert_eq!(last_valid.get(), None);
//!
//! queue.run_pending();
//! assert_eq!(last_valid.get(), Some(true));
//! ```

#[macro_use]
mod log;

/// Conditional inclusion of validators
pub mod container;
/// The form aggregator and its configuration
pub mod form;
/// Form-building macros
pub mod macros;
/// Default validator messages
pub mod messages;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Change-notifying values
pub mod reactive;
/// Deferred task scheduling
pub mod schedule;
/// Core validator traits
pub mod traits;
/// Validation result types
pub mod validation;
/// Bundled validators
pub mod validators;

/// Advanced API level for validator authors
pub mod advanced;

/// Async prelude - form change streams and tokio scheduling (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

// Re-export common types that might be needed at root,
// but encourage using the prelude.
pub use container::ValidatorContainer;
pub use form::{FilledPolicy, FormBuilder, FormSnapshot, FormValidation};
pub use messages::{DefaultMessages, ValidationMessages};
pub use schedule::{Scheduler, TaskQueue};
pub use traits::*;
pub use validation::*;
