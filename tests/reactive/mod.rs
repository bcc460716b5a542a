use std::cell::RefCell;
use std::rc::Rc;

use form_rail::reactive::Published;
use form_rail::schedule::TaskQueue;

#[test]
fn deferred_changes_before_a_drain_notify_once_with_the_latest_value() {
    let queue = TaskQueue::new();
    let value = Published::new(0);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let s = seen.clone();
    let _sub = value.subscribe(move |v| s.borrow_mut().push(*v));

    value.set_deferred(1, &queue);
    value.set_deferred(2, &queue);
    assert_eq!(queue.len(), 1);
    assert!(value.is_notify_pending());
    queue.run_pending();

    assert_eq!(*seen.borrow(), [2]);
    assert_eq!(value.version(), 2);
    assert!(!value.is_notify_pending());
}

#[test]
fn change_and_revert_before_a_drain_notifies_once() {
    let queue = TaskQueue::new();
    let value = Published::new(false);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let s = seen.clone();
    let _sub = value.subscribe(move |v| s.borrow_mut().push(*v));

    assert!(value.set_deferred(true, &queue));
    assert!(value.set_deferred(false, &queue));
    assert_eq!(queue.run_pending(), 1);
    assert_eq!(*seen.borrow(), [false]);

    value.set_deferred(true, &queue);
    queue.run_pending();
    assert_eq!(*seen.borrow(), [false, true]);
}

#[test]
fn subscriber_may_unsubscribe_another_during_notification() {
    let value = Published::new(0);
    let later = Rc::new(RefCell::new(None));
    let hits = Rc::new(RefCell::new(Vec::new()));

    let (l, h) = (later.clone(), hits.clone());
    let _first = value.subscribe(move |_| {
        h.borrow_mut().push("first");
        l.borrow_mut().take();
    });
    let h = hits.clone();
    *later.borrow_mut() = Some(value.subscribe(move |_| h.borrow_mut().push("second")));

    value.set(1);
    value.set(2);

    // The snapshot taken for the first notification still includes "second".
    assert_eq!(*hits.borrow(), ["first", "second", "first"]);
    assert_eq!(value.subscriber_count(), 1);
}

#[test]
fn with_borrows_without_cloning() {
    let value = Published::new(vec!["a".to_string()]);
    assert_eq!(value.with(|v| v.len()), 1);
    assert_eq!(value.get(), ["a"]);
}
