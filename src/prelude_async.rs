//! Async prelude - the sync [`prelude`](crate::prelude) plus async items.
//!
//! # Usage
//!
//! ```ignore
//! use form_rail::prelude_async::*;
//!
//! let local = std::rc::Rc::new(tokio::task::LocalSet::new());
//! let form = FormValidation::builder(ValidationType::Immediate)
//!     .scheduler(LocalSetScheduler::new(local.clone()))
//!     .build();
//! let mut changes = form.changes();
//!
//! local.run_until(async {
//!     // ...
//! }).await;
//! ```
//!
//! # What's Included
//!
//! - Everything from [`prelude`](crate::prelude)
//! - [`FormChanges`](crate::form::FormChanges) - stream of form snapshots
//! - `LocalSetScheduler` - tokio-backed scheduler (requires `async-tokio`)

pub use crate::prelude::*;

pub use crate::form::FormChanges;

#[cfg(feature = "async-tokio")]
pub use crate::schedule::LocalSetScheduler;
