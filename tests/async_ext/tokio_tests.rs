use std::cell::{Cell, RefCell};
use std::rc::Rc;

use form_rail::prelude_async::*;
use tokio::task::LocalSet;

use crate::support::Stub;

/// Lets the local set drain tasks spawned so far.
async fn settle() {
    for _ in 0..4 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test(flavor = "current_thread")]
async fn local_set_scheduler_defers_the_observer() {
    let local = Rc::new(LocalSet::new());
    let calls = Rc::new(Cell::new(0));
    let c = calls.clone();
    let form = FormValidation::builder(ValidationType::Immediate)
        .scheduler(LocalSetScheduler::new(local.clone()))
        .on_form_changed(move |_| c.set(c.get() + 1))
        .build();
    let field = Stub::passing();
    form.append_validator(field.clone());

    local
        .run_until(async {
            field.change(Validation::failure("x"), false);
            assert_eq!(calls.get(), 0);

            settle().await;
            assert_eq!(calls.get(), 1);
            assert!(!form.all_valid());
        })
        .await;
}

#[tokio::test(flavor = "current_thread")]
async fn local_set_preserves_notification_order() {
    let local = Rc::new(LocalSet::new());
    let log = Rc::new(RefCell::new(Vec::new()));
    let l = log.clone();
    let form = FormValidation::builder(ValidationType::Immediate)
        .scheduler(LocalSetScheduler::new(local.clone()))
        .on_form_changed(move |_| l.borrow_mut().push("form"))
        .build();
    let l = log.clone();
    let _sub = form.subscribe_all_valid(move |_| l.borrow_mut().push("valid"));

    let field = Stub::passing();
    form.append_validator(field.clone());

    local
        .run_until(async {
            field.change(Validation::success(), false);
            settle().await;
            assert_eq!(*log.borrow(), ["valid", "form"]);
        })
        .await;
}

#[tokio::test(flavor = "current_thread")]
async fn changes_outside_the_local_set_wait_until_it_runs() {
    let local = Rc::new(LocalSet::new());
    let calls = Rc::new(Cell::new(0));
    let c = calls.clone();
    let form = FormValidation::builder(ValidationType::Immediate)
        .scheduler(LocalSetScheduler::new(local.clone()))
        .on_form_changed(move |_| c.set(c.get() + 1))
        .build();
    let field = Stub::passing();
    form.append_validator(field.clone());

    field.change(Validation::failure("x"), false);
    assert_eq!(calls.get(), 0);

    local.run_until(settle()).await;
    assert_eq!(calls.get(), 1);
    assert_eq!(form.validation_messages(), ["x"]);
}
