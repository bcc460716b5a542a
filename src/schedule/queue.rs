use core::fmt;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use super::{Scheduler, Task};

thread_local! {
    static CURRENT: TaskQueue = TaskQueue::new();
}

/// Single-threaded FIFO queue of deferred tasks.
///
/// Cloning a `TaskQueue` yields another handle to the **same** queue.
/// Tasks queued while the queue is being drained run after every task that
/// was already waiting.
#[derive(Clone, Default)]
pub struct TaskQueue {
    tasks: Rc<RefCell<VecDeque<Task>>>,
}

impl TaskQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a handle to the calling thread's default queue.
    #[must_use]
    pub fn current() -> Self {
        CURRENT.with(Clone::clone)
    }

    pub fn push(&self, task: impl FnOnce() + 'static) {
        self.tasks.borrow_mut().push_back(Box::new(task));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.borrow().is_empty()
    }

    /// Runs the oldest queued task. Returns `false` if the queue was empty.
    pub fn run_next(&self) -> bool {
        // The borrow must end before the task runs: tasks may queue more work.
        let task = self.tasks.borrow_mut().pop_front();
        match task {
            Some(task) => {
                task();
                true
            },
            None => false,
        }
    }

    /// Runs tasks until the queue is empty, including tasks queued by the
    /// tasks being run. Returns how many tasks ran.
    pub fn run_pending(&self) -> usize {
        let mut ran = 0;
        while self.run_next() {
            ran += 1;
        }
        if ran > 0 {
            form_trace!(ran, "drained deferred tasks");
        }
        ran
    }

    /// Drops every queued task without running it.
    pub fn clear(&self) {
        self.tasks.borrow_mut().clear();
    }

    /// Returns `true` if both handles point at the same queue.
    #[must_use]
    pub fn ptr_eq(&self, other: &TaskQueue) -> bool {
        Rc::ptr_eq(&self.tasks, &other.tasks)
    }
}

impl Scheduler for TaskQueue {
    fn schedule(&self, task: Task) {
        self.tasks.borrow_mut().push_back(task);
        form_trace!(queued = self.len(), "deferred task scheduled");
    }
}

impl fmt::Debug for TaskQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskQueue").field("pending", &self.len()).finish()
    }
}
