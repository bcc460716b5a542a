//! Validation result types.
//!
//! This module provides the value types shared by every validator and by the
//! form aggregator.
//!
//! # Key Components
//!
//! - [`Validation`] - Success, or failure carrying a (possibly empty) message
//! - [`ValidationType`] - Form-level policy controlling whether triggered
//!   validation surfaces errors
//! - Iterator adapters for extracting displayable messages
//!
//! # Examples
//!
//! ```
//! use form_rail::validation::{Validation, ValidationIterExt};
//!
//! let results = vec![Validation::success(), Validation::failure("required")];
//! assert_eq!(results.iter().visible_messages().count(), 1);
//! ```
pub mod core;
pub mod iter;
pub mod kind;

pub use self::core::*;
pub use self::iter::*;
pub use self::kind::*;
