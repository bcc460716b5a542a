//! Deferred task scheduling.
//!
//! Form-level notifications never run inside the call that mutated a value.
//! Instead they are handed to a [`Scheduler`], which runs them later on the
//! same thread in FIFO order.
//!
//! - [`TaskQueue`]: a manually drained, single-threaded FIFO queue. Every
//!   thread has its own default queue, reachable via [`TaskQueue::current`].
//! - `LocalSetScheduler` (feature `async-tokio`): spawns tasks on a given
//!   `tokio::task::LocalSet`.
//!
//! # Examples
//!
//! ```
//! use form_rail::schedule::{Scheduler, TaskQueue};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let queue = TaskQueue::new();
//! let hits = Rc::new(Cell::new(0));
//!
//! let h = hits.clone();
//! queue.schedule(Box::new(move || h.set(h.get() + 1)));
//! assert_eq!(hits.get(), 0);
//!
//! assert_eq!(queue.run_pending(), 1);
//! assert_eq!(hits.get(), 1);
//! ```
use std::rc::Rc;

pub mod queue;
#[cfg(feature = "async-tokio")]
pub mod local_set;

pub use self::queue::TaskQueue;
#[cfg(feature = "async-tokio")]
pub use self::local_set::LocalSetScheduler;

/// A unit of deferred work.
pub type Task = Box<dyn FnOnce() + 'static>;

/// Something that runs tasks later on the current logical thread.
///
/// Implementations must run tasks in the order they were scheduled and must
/// never run a task inside the `schedule` call itself.
pub trait Scheduler {
    fn schedule(&self, task: Task);
}

impl<S: Scheduler + ?Sized> Scheduler for Rc<S> {
    #[inline]
    fn schedule(&self, task: Task) {
        (**self).schedule(task)
    }
}

impl<S: Scheduler + ?Sized> Scheduler for &S {
    #[inline]
    fn schedule(&self, task: Task) {
        (**self).schedule(task)
    }
}

/// Drains the current thread's default [`TaskQueue`], returning how many
/// tasks ran.
pub fn run_pending() -> usize {
    TaskQueue::current().run_pending()
}
