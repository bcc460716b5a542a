use std::pin::Pin;
use std::task::{Context, Poll, Wake, Waker};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use form_rail::prelude_async::*;
use futures_core::Stream;

use crate::support::Stub;

struct CountingWaker(AtomicUsize);

impl Wake for CountingWaker {
    fn wake(self: Arc<Self>) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

fn poll_changes(changes: &mut FormChanges, waker: &Waker) -> Poll<Option<FormSnapshot>> {
    let mut cx = Context::from_waker(waker);
    Pin::new(changes).poll_next(&mut cx)
}

#[test]
fn stream_yields_one_snapshot_per_notification() {
    let queue = TaskQueue::new();
    let form = FormValidation::builder(ValidationType::Immediate).scheduler(queue.clone()).build();
    let mut changes = form.changes();
    let field = Stub::passing();
    form.append_validator(field.clone());

    field.change(Validation::failure("bad"), false);
    field.change(Validation::success(), false);
    assert_eq!(changes.pending(), 0);

    queue.run_pending();
    assert_eq!(changes.pending(), 2);

    // Both snapshots are taken when the deferred notification runs.
    let first = changes.try_next().unwrap();
    assert!(first.all_valid);
    assert!(changes.try_next().is_some());
    assert!(changes.try_next().is_none());
}

#[test]
fn pending_stream_is_woken_by_a_change() {
    let queue = TaskQueue::new();
    let form = FormValidation::builder(ValidationType::Immediate).scheduler(queue.clone()).build();
    let mut changes = form.changes();
    let field = Stub::passing();
    form.append_validator(field.clone());

    let counter = Arc::new(CountingWaker(AtomicUsize::new(0)));
    let waker = Waker::from(counter.clone());
    assert!(poll_changes(&mut changes, &waker).is_pending());

    field.change(Validation::failure("bad"), true);
    queue.run_pending();
    assert_eq!(counter.0.load(Ordering::SeqCst), 1);

    match poll_changes(&mut changes, &waker) {
        Poll::Ready(Some(snapshot)) => {
            assert!(!snapshot.all_valid);
            assert_eq!(snapshot.validation_messages, ["bad"]);
        },
        other => panic!("unexpected poll result: {other:?}"),
    }
}

#[test]
fn stream_ends_when_the_form_is_dropped() {
    let form = FormValidation::builder(ValidationType::Immediate).scheduler(TaskQueue::new()).build();
    let mut changes = form.changes();
    let counter = Arc::new(CountingWaker(AtomicUsize::new(0)));
    let waker = Waker::from(counter.clone());

    assert!(poll_changes(&mut changes, &waker).is_pending());
    drop(form);

    assert_eq!(counter.0.load(Ordering::SeqCst), 1);
    assert!(matches!(poll_changes(&mut changes, &waker), Poll::Ready(None)));
}

#[test]
fn dropped_streams_are_forgotten() {
    let queue = TaskQueue::new();
    let form = FormValidation::builder(ValidationType::Immediate).scheduler(queue.clone()).build();
    let field = Stub::passing();
    form.append_validator(field.clone());

    drop(form.changes());
    let kept = form.changes();
    field.change(Validation::failure("x"), false);
    queue.run_pending();

    assert_eq!(kept.pending(), 1);
}
