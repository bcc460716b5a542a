//! Default human-readable messages for the bundled validators.
//!
//! A form carries one [`ValidationMessages`] provider. Validators built with
//! [`messages`](crate::validators::CountValidator::messages) take their default
//! failure text from it; an explicit message always wins.
//!
//! # Examples
//!
//! ```
//! use form_rail::messages::{DefaultMessages, ValidationMessages};
//!
//! struct Terse;
//!
//! impl ValidationMessages for Terse {
//!     fn required(&self) -> String {
//!         "required".into()
//!     }
//! }
//!
//! assert_eq!(Terse.required(), "required");
//! assert_eq!(Terse.prefix("Dr"), DefaultMessages.prefix("Dr"));
//! ```

use chrono::NaiveDate;

use crate::validators::CountComparison;

/// Supplies the failure message each bundled validator uses by default.
///
/// Every method has an English default, so implementors only override what
/// they want to change.
pub trait ValidationMessages {
    fn required(&self) -> String {
        "This field is required.".into()
    }

    fn count(&self, comparison: CountComparison, expected: usize) -> String {
        let unit = if expected == 1 { "character" } else { "characters" };
        format!("Must be {} {expected} {unit}.", comparison.describe())
    }

    fn prefix(&self, prefix: &str) -> String {
        format!("Must start with \"{prefix}\".")
    }

    fn invalid(&self) -> String {
        "Invalid value.".into()
    }

    fn date_range(&self, min: Option<NaiveDate>, max: Option<NaiveDate>) -> String {
        match (min, max) {
            (Some(min), Some(max)) => format!("Date must be between {min} and {max}."),
            (Some(min), None) => format!("Date must be on or after {min}."),
            (None, Some(max)) => format!("Date must be on or before {max}."),
            (None, None) => self.invalid(),
        }
    }
}

/// The built-in English messages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DefaultMessages;

impl ValidationMessages for DefaultMessages {}
