//! Core traits for validators.
//!
//! - [`Validatable`]: the capability the form aggregator consumes
//! - [`ValueSource`]: typed read/write access to a validator's value
//!
//! # Examples
//!
//! ```
//! use form_rail::traits::{Validatable, ValueSource};
//! use form_rail::validators::PrefixValidator;
//!
//! let title = PrefixValidator::new("Mr").ignore_case(true);
//! title.set_value("mr. smith".to_string());
//! assert!(title.validate().is_success());
//! ```

pub mod validatable;

pub use validatable::{ChangeListener, Validatable, ValueSource};
