use core::fmt;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

use smallvec::SmallVec;

use crate::schedule::Scheduler;

type Callback<T> = Rc<dyn Fn(&T)>;

struct PublishedInner<T> {
    value: T,
    version: u64,
    next_id: u64,
    notify_pending: bool,
    subscribers: SmallVec<[(u64, Callback<T>); 2]>,
}

/// A shared value that notifies its subscribers when it changes.
///
/// Cloning a `Published` creates a new handle to the **same** value.
///
/// # Invariants
///
/// 1. `version` increments exactly once per `set` that changes the value.
/// 2. Subscribers are notified in registration order.
/// 3. Setting a value equal to the current one is a no-op.
///
/// # Examples
///
/// ```
/// use form_rail::reactive::Published;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let flag = Published::new(false);
/// let seen = Rc::new(Cell::new(false));
///
/// let s = seen.clone();
/// let _sub = flag.subscribe(move |value| s.set(*value));
///
/// assert!(flag.set(true));
/// assert!(seen.get());
/// assert!(!flag.set(true));
/// assert_eq!(flag.version(), 1);
/// ```
pub struct Published<T> {
    inner: Rc<RefCell<PublishedInner<T>>>,
}

impl<T> Clone for Published<T> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<T: fmt::Debug> fmt::Debug for Published<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Published")
            .field("value", &inner.value)
            .field("version", &inner.version)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}

impl<T: Clone + PartialEq + 'static> Published<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(PublishedInner {
                value,
                version: 0,
                next_id: 0,
                notify_pending: false,
                subscribers: SmallVec::new(),
            })),
        }
    }

    #[must_use]
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Borrows the current value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    /// Registers `callback`, which receives the value after every change.
    ///
    /// The callback stays registered until the returned [`Subscription`] is
    /// dropped.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.subscribers.push((id, Rc::new(callback)));
            id
        };

        let weak: Weak<RefCell<PublishedInner<T>>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().subscribers.retain(|(sub_id, _)| *sub_id != id);
            }
        })
    }

    /// Stores `value` and notifies subscribers immediately.
    ///
    /// Returns `true` if the value changed.
    pub fn set(&self, value: T) -> bool {
        if !self.replace(value) {
            return false;
        }
        self.notify();
        true
    }

    /// Stores `value` and queues subscriber notification on `scheduler`.
    ///
    /// At most one notification is pending at a time. Further changes made
    /// before it runs are folded into it, and subscribers receive the value
    /// current when the task runs. A change that returns to the previously
    /// notified value still produces that one notification.
    pub fn set_deferred(&self, value: T, scheduler: &dyn Scheduler) -> bool {
        if !self.replace(value) {
            return false;
        }
        {
            let mut inner = self.inner.borrow_mut();
            if inner.notify_pending {
                return true;
            }
            inner.notify_pending = true;
        }
        let weak = Rc::downgrade(&self.inner);
        scheduler.schedule(Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().notify_pending = false;
                Published { inner }.notify();
            }
        }));
        true
    }

    /// `true` while a deferred notification is queued but has not run.
    #[must_use]
    pub fn is_notify_pending(&self) -> bool {
        self.inner.borrow().notify_pending
    }

    fn replace(&self, value: T) -> bool {
        let mut inner = self.inner.borrow_mut();
        if inner.value == value {
            return false;
        }
        inner.value = value;
        inner.version += 1;
        true
    }

    fn notify(&self) {
        // Callbacks may subscribe, unsubscribe or read the value, so no
        // borrow is held while they run.
        let (value, callbacks): (T, SmallVec<[Callback<T>; 2]>) = {
            let inner = self.inner.borrow();
            let callbacks = inner.subscribers.iter().map(|(_, cb)| Rc::clone(cb)).collect();
            (inner.value.clone(), callbacks)
        };
        for callback in callbacks {
            callback(&value);
        }
    }
}

/// RAII guard for a [`Published`] subscription.
///
/// Dropping the guard unsubscribes; [`detach`](Subscription::detach) keeps
/// the callback registered for the lifetime of the value.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self { cancel: Some(Box::new(cancel)) }
    }

    pub fn detach(mut self) {
        self.cancel = None;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("active", &self.cancel.is_some()).finish()
    }
}
