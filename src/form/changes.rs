//! Form changes as an async stream.
//!
//! # Feature Flag
//!
//! Requires the `async` feature:
//!
//! ```toml
//! [dependencies]
//! form-rail = { version = "0.1", features = ["async"] }
//! ```

use core::pin::Pin;
use core::task::{Context, Poll, Waker};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use futures_core::Stream;

use super::FormSnapshot;

#[derive(Default)]
struct ChangeChannel {
    pending: VecDeque<FormSnapshot>,
    waker: Option<Waker>,
    closed: bool,
}

impl ChangeChannel {
    fn wake(&mut self) {
        if let Some(waker) = self.waker.take() {
            waker.wake();
        }
    }
}

/// Fan-out of form snapshots to every live [`FormChanges`] stream.
#[derive(Default)]
pub(crate) struct ChangeHub {
    channels: RefCell<Vec<Weak<RefCell<ChangeChannel>>>>,
}

impl ChangeHub {
    pub(crate) fn subscribe(&self) -> FormChanges {
        let channel = Rc::new(RefCell::new(ChangeChannel::default()));
        self.channels.borrow_mut().push(Rc::downgrade(&channel));
        FormChanges { channel }
    }

    pub(crate) fn broadcast(&self, snapshot: &FormSnapshot) {
        self.channels.borrow_mut().retain(|weak| match weak.upgrade() {
            Some(channel) => {
                let mut channel = channel.borrow_mut();
                channel.pending.push_back(snapshot.clone());
                channel.wake();
                true
            },
            None => false,
        });
    }
}

impl Drop for ChangeHub {
    fn drop(&mut self) {
        for channel in self.channels.get_mut().drain(..).filter_map(|weak| weak.upgrade()) {
            let mut channel = channel.borrow_mut();
            channel.closed = true;
            channel.wake();
        }
    }
}

/// Stream of [`FormSnapshot`]s, one per `on_form_changed` notification.
///
/// Created by [`FormValidation::changes`](super::FormValidation::changes).
/// Snapshots are buffered until polled. The stream ends once the form is
/// dropped and the buffer is drained.
///
/// # Example
///
/// ```rust,ignore
/// use futures::StreamExt;
///
/// let mut changes = form.changes();
/// while let Some(snapshot) = changes.next().await {
///     submit_button.set_enabled(snapshot.all_valid);
/// }
/// ```
#[must_use = "streams do nothing unless polled"]
pub struct FormChanges {
    channel: Rc<RefCell<ChangeChannel>>,
}

impl FormChanges {
    /// Takes the oldest buffered snapshot without waiting.
    pub fn try_next(&mut self) -> Option<FormSnapshot> {
        self.channel.borrow_mut().pending.pop_front()
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.channel.borrow().pending.len()
    }
}

impl Stream for FormChanges {
    type Item = FormSnapshot;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut channel = self.channel.borrow_mut();
        if let Some(snapshot) = channel.pending.pop_front() {
            return Poll::Ready(Some(snapshot));
        }
        if channel.closed {
            return Poll::Ready(None);
        }
        channel.waker = Some(cx.waker().clone());
        Poll::Pending
    }
}

impl core::fmt::Debug for FormChanges {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let channel = self.channel.borrow();
        f.debug_struct("FormChanges")
            .field("pending", &channel.pending.len())
            .field("closed", &channel.closed)
            .finish()
    }
}
