//! Bundled validators.
//!
//! Each validator is a cheap-clone handle around a [`Field`], which owns the
//! value, the ordered change listeners and the "show error" flag. Keep a clone
//! after appending the validator to a form to change its value later.
//!
//! - [`CountValidator`] - character count of the trimmed value
//! - [`PrefixValidator`] - trimmed value starts with a prefix
//! - [`InlineValidator`] - arbitrary predicate over the raw value
//! - [`DateRangeValidator`] - optional date inside an inclusive range
//!
//! # Examples
//!
//! ```
//! use form_rail::prelude::*;
//!
//! let code = CountValidator::equal(5);
//! let form = FormValidation::builder(ValidationType::Immediate)
//!     .scheduler(TaskQueue::new())
//!     .build();
//! form.append_validator(code.clone());
//!
//! code.set_value("hello".to_string());
//! assert!(form.all_valid());
//! ```
pub mod count;
pub mod date_range;
pub mod field;
pub mod inline;
pub mod prefix;

pub use self::count::{CountComparison, CountValidator};
pub use self::date_range::DateRangeValidator;
pub use self::field::{trimmed, Field};
pub use self::inline::InlineValidator;
pub use self::prefix::PrefixValidator;
