//! Change-notifying values.
//!
//! - [`Published`]: a shared, version-tracked value with subscriber callbacks.
//! - [`Subscription`]: RAII guard that unsubscribes on drop.
//!
//! `Published<T>` uses `Rc<RefCell<..>>` for single-threaded shared ownership.
//! The form aggregator exposes its `all_valid`, `all_filled` and
//! `validation_messages` fields as `Published` values and queues their
//! notifications on its scheduler.

pub mod published;

pub use published::{Published, Subscription};
