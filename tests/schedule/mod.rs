use std::cell::RefCell;
use std::rc::Rc;

use form_rail::schedule::{Scheduler, TaskQueue};

#[test]
fn scheduling_never_runs_inline() {
    let queue = TaskQueue::new();
    let ran = Rc::new(RefCell::new(false));
    let r = ran.clone();

    queue.schedule(Box::new(move || *r.borrow_mut() = true));
    assert!(!*ran.borrow());
    assert_eq!(queue.len(), 1);

    assert!(queue.run_next());
    assert!(*ran.borrow());
    assert!(!queue.run_next());
}

#[test]
fn tasks_run_in_fifo_order() {
    let queue = TaskQueue::new();
    let log = Rc::new(RefCell::new(Vec::new()));
    for i in 0..5 {
        let l = log.clone();
        queue.push(move || l.borrow_mut().push(i));
    }

    assert_eq!(queue.run_pending(), 5);
    assert_eq!(*log.borrow(), [0, 1, 2, 3, 4]);
}

#[test]
fn shared_handles_schedule_onto_one_queue() {
    let queue = TaskQueue::new();
    let shared: Rc<dyn Scheduler> = Rc::new(queue.clone());
    shared.schedule(Box::new(|| {}));
    (&queue).schedule(Box::new(|| {}));

    assert_eq!(queue.len(), 2);
    assert_eq!(format!("{queue:?}"), "TaskQueue { pending: 2 }");
}
