//! Tokio-backed scheduler.
//!
//! # Feature Flag
//!
//! Requires the `async-tokio` feature:
//!
//! ```toml
//! [dependencies]
//! form-rail = { version = "0.1", features = ["async-tokio"] }
//! ```

use std::rc::Rc;

use tokio::task::LocalSet;

use super::{Scheduler, Task};

/// Schedules deferred tasks on a specific [`tokio::task::LocalSet`].
///
/// Tasks are spawned with [`LocalSet::spawn_local`], which is valid from any
/// context on the owning thread, and run in the order they were scheduled
/// once the set is driven (`run_until`, `block_on` or awaiting the set).
/// Scheduling never runs a task inline.
///
/// # Example
///
/// ```rust,ignore
/// use form_rail::prelude_async::*;
/// use std::rc::Rc;
///
/// let local = Rc::new(tokio::task::LocalSet::new());
/// let form = FormValidation::builder(ValidationType::Immediate)
///     .scheduler(LocalSetScheduler::new(local.clone()))
///     .build();
///
/// local.run_until(async {
///     // ...
/// }).await;
/// ```
#[derive(Clone, Debug)]
pub struct LocalSetScheduler {
    local: Rc<LocalSet>,
}

impl LocalSetScheduler {
    pub fn new(local: Rc<LocalSet>) -> Self {
        Self { local }
    }

    /// The set tasks are spawned on.
    #[must_use]
    pub fn local_set(&self) -> &Rc<LocalSet> {
        &self.local
    }
}

impl Scheduler for LocalSetScheduler {
    fn schedule(&self, task: Task) {
        drop(self.local.spawn_local(async move { task() }));
        form_trace!("deferred task spawned on local set");
    }
}
