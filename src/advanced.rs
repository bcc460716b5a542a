//! Advanced API level for validator authors and power users.
//!
//! This module exposes the building blocks the bundled validators and the
//! form are made of. Use these when writing a custom [`Validatable`](crate::traits::Validatable)
//! or driving aggregation yourself.

// Validator internals
pub use crate::traits::ChangeListener;
pub use crate::validators::field::{trimmed, Field};

// Aggregation over plain container slices
pub use crate::form::aggregate::{all_filled, all_valid, validation_messages};

// Reactive values
pub use crate::reactive::{Published, Subscription};

// Scheduling
pub use crate::schedule::{run_pending, Task};

// Iterator helpers
pub use crate::validation::{ValidationIterExt, VisibleMessages};
